//! Reusable widgets: toast notifications, the structure viewer canvas and
//! the composition charts.

pub mod chart;
pub mod toast;
pub mod viewer;
