//! Protein Structure Explorer - Desktop GUI Application
//!
//! A desktop client for a remote protein structure analysis service:
//! search genes or PDB ids, inspect structures in 3D, run mutation and
//! alignment analyses, and export markdown reports.
//!
//! Built with Iced 0.14.0 using the Elm architecture (State, Message,
//! Update, View).

use iced::{Size, window};
use pse_gui::app::App;

/// Application entry point.
pub fn main() -> iced::Result {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("Starting Protein Structure Explorer");

    // Run the Iced application using the builder pattern
    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .window(window::Settings {
            size: Size::new(1280.0, 860.0),
            min_size: Some(Size::new(1024.0, 640.0)),
            ..Default::default()
        })
        .run()
}
