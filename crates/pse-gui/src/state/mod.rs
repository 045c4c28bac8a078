//! Application state: session, search, viewer, charts, report, settings.

pub mod alignment;
pub mod app_state;
pub mod charts;
pub mod mutation;
pub mod report;
pub mod search;
pub mod session;
pub mod settings;
pub mod viewer;

pub use app_state::AppState;
