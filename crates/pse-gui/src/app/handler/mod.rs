//! Message handlers organized by category.

mod alignment;
mod mutation;
mod report;
mod search;
mod session;
mod viewer;
