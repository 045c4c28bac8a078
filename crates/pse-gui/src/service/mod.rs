//! Async service layer: every network call and file operation is wrapped in
//! an [`iced::Task`] that settles into a message carrying its generation.

pub mod coords;
pub mod report;
pub mod search;
pub mod structure;
