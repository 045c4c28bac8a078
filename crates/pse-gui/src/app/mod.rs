//! Main application module for Protein Structure Explorer.
//!
//! This module implements the Iced 0.14.0 application using the builder
//! pattern. The architecture follows the Elm pattern:
//! State → Message → Update → View.
//!
//! # Key Design Principles
//!
//! - **All state changes happen in `update()`** - Views are pure functions
//! - **No channels/polling** - Use `Task::perform` for async operations
//! - **Every fetch carries a generation** - Stale completions are dropped
//!   before any state is touched

mod handler;

use iced::{Element, Subscription, Task, Theme};
use tracing::warn;

use crate::component::toast::ToastMessage;
use crate::message::Message;
use crate::service::structure::check_health;
use crate::state::AppState;
use crate::state::settings::Settings;
use crate::view::view_root;

/// Main application struct.
///
/// This is the root of the Iced application. It holds the application state
/// and implements the Elm architecture methods.
pub struct App {
    /// All application state.
    pub state: AppState,
}

impl App {
    /// Create a new application instance.
    ///
    /// Called once at startup. Returns the initial state and the startup
    /// liveness probe task.
    pub fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();
        let app = Self::with_settings(settings);
        let startup = check_health(&app.state.api);
        (app, startup)
    }

    /// Build an application around explicit settings.
    #[must_use]
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            state: AppState::new(settings),
        }
    }

    /// Window title.
    pub fn title(&self) -> String {
        match self.state.session.current() {
            Some(pdb_id) => format!("Protein Structure Explorer — {pdb_id}"),
            None => "Protein Structure Explorer".to_string(),
        }
    }

    /// Update application state in response to a message.
    ///
    /// This is the core of the Elm architecture - all state changes happen
    /// here.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            // =================================================================
            // Search
            // =================================================================
            Message::SearchModeChanged(mode) => self.handle_search_mode_changed(mode),
            Message::SearchInputChanged(input) => {
                self.state.search.input = input;
                Task::none()
            }
            Message::SpeciesSelected(species) => {
                self.state.search.species = species;
                Task::none()
            }
            Message::SearchSubmitted => self.handle_search_submitted(),
            Message::CandidatesResolved {
                generation,
                query,
                result,
            } => self.handle_candidates_resolved(generation, query, result),
            Message::CandidateInfoFetched {
                generation,
                pdb_id,
                result,
            } => self.handle_candidate_info_fetched(generation, &pdb_id, result),

            // =================================================================
            // Selection and panels
            // =================================================================
            Message::CandidateSelected(pdb_id) => self.handle_candidate_selected(&pdb_id),
            Message::InfoFetched {
                generation,
                pdb_id,
                result,
            } => self.handle_info_fetched(generation, &pdb_id, result),
            Message::AnalysisFetched { generation, result } => {
                self.handle_analysis_fetched(generation, result)
            }
            Message::AdvancedFetched { generation, result } => {
                self.handle_advanced_fetched(generation, result)
            }
            Message::CompositionFetched {
                generation,
                pdb_id,
                result,
            } => self.handle_composition_fetched(generation, &pdb_id, result),

            // =================================================================
            // Viewer
            // =================================================================
            Message::RepresentationSelected(representation) => {
                self.handle_representation_selected(representation)
            }
            Message::ColorSchemeSelected(scheme) => self.handle_color_scheme_selected(scheme),
            Message::ViewerResetClicked => self.handle_viewer_reset(),
            Message::CoordinatesFetched {
                generation,
                pdb_id,
                result,
            } => self.handle_coordinates_fetched(generation, &pdb_id, result),

            // =================================================================
            // Mutation and alignment
            // =================================================================
            Message::MutationInputChanged(input) => self.handle_mutation_input_changed(input),
            Message::MutationSubmitted => self.handle_mutation_submitted(),
            Message::MutationFetched { generation, result } => {
                self.handle_mutation_fetched(generation, result)
            }
            Message::UniprotInputChanged(input) => self.handle_uniprot_input_changed(input),
            Message::AlignmentSubmitted => self.handle_alignment_submitted(),
            Message::AlignmentFetched { generation, result } => {
                self.handle_alignment_fetched(generation, result)
            }

            // =================================================================
            // Report
            // =================================================================
            Message::ReportRequested => self.handle_report_requested(),
            Message::ReportFetched { generation, result } => {
                self.handle_report_fetched(generation, result)
            }
            Message::ExportReportClicked => self.handle_export_report_clicked(),
            Message::ExportPathSelected(path) => self.handle_export_path_selected(path),
            Message::ReportExported(result) => self.handle_report_exported(result),

            // =================================================================
            // Shell
            // =================================================================
            Message::OpenUrl(url) => {
                if let Err(err) = open::that(&url) {
                    warn!(%url, %err, "failed to open URL");
                }
                Task::none()
            }
            Message::HealthChecked(result) => {
                self.state.service_online = Some(result.is_ok());
                if result.is_err() {
                    self.state.toast = Some(crate::component::toast::ToastState::warning(
                        format!(
                            "Analysis service is not reachable at {}",
                            self.state.api.base_url()
                        ),
                    ));
                }
                Task::none()
            }
            Message::Toast(toast_msg) => {
                match toast_msg {
                    ToastMessage::Dismiss => self.state.toast = None,
                    ToastMessage::Show(toast) => self.state.toast = Some(toast),
                }
                Task::none()
            }
            Message::Noop => Task::none(),
        }
    }

    /// Render the application.
    pub fn view(&self) -> Element<'_, Message> {
        view_root(&self.state)
    }

    /// Application theme.
    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Subscribe to runtime events.
    pub fn subscription(&self) -> Subscription<Message> {
        use iced::time;
        use std::time::Duration;

        // Toast auto-dismiss timer (5 seconds)
        if self.state.toast.is_some() {
            time::every(Duration::from_secs(5)).map(|_| Message::Toast(ToastMessage::Dismiss))
        } else {
            Subscription::none()
        }
    }
}
