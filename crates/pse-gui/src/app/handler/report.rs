//! Report generation and export handlers.

use std::path::PathBuf;

use iced::Task;
use tracing::info;

use crate::app::App;
use crate::component::toast::ToastState;
use crate::error::FetchError;
use crate::message::Message;
use crate::service::report::{ReportTarget, fetch_report, pick_export_path, write_report};

impl App {
    /// Generate a report for the active query: the searched gene when there
    /// is one, the shown candidates otherwise, falling back to the live
    /// selection alone.
    pub fn handle_report_requested(&mut self) -> Task<Message> {
        let target = if let Some(gene) = self.state.search.active_gene() {
            ReportTarget::Gene(gene.to_string())
        } else if !self.state.search.candidates.is_empty() {
            ReportTarget::Structures(self.state.search.candidate_ids())
        } else if let Some(pdb_id) = self.state.session.current() {
            ReportTarget::Structures(vec![pdb_id.to_string()])
        } else {
            self.state.toast = Some(ToastState::warning(
                "Search for a gene or structure before generating a report",
            ));
            return Task::none();
        };
        let generation = self.state.report.begin();
        fetch_report(&self.state.api, generation, target)
    }

    /// Report generation settled.
    pub fn handle_report_fetched(
        &mut self,
        generation: u64,
        result: Result<String, FetchError>,
    ) -> Task<Message> {
        let failure = result.as_ref().err().cloned();
        if self.state.report.apply(generation, result) {
            if let Some(err) = failure {
                self.state.toast = Some(ToastState::error(err.to_string()));
            }
        }
        Task::none()
    }

    /// Export button clicked; opens the save dialog when a report is shown.
    pub fn handle_export_report_clicked(&mut self) -> Task<Message> {
        if self.state.report.can_export() {
            pick_export_path()
        } else {
            Task::none()
        }
    }

    /// Save dialog settled.
    pub fn handle_export_path_selected(&mut self, path: Option<PathBuf>) -> Task<Message> {
        match (path, self.state.report.text()) {
            (Some(path), Some(text)) => write_report(path, text.to_string()),
            _ => Task::none(),
        }
    }

    /// Report file write settled.
    pub fn handle_report_exported(&mut self, result: Result<PathBuf, String>) -> Task<Message> {
        match result {
            Ok(path) => {
                info!(path = %path.display(), "report exported");
                self.state.toast = Some(ToastState::success(format!(
                    "Report saved to {}",
                    path.display()
                )));
            }
            Err(err) => {
                self.state.toast = Some(ToastState::error(format!("Export failed: {err}")));
            }
        }
        Task::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::settings::Settings;

    #[test]
    fn report_without_a_query_warns() {
        let mut app = App::with_settings(Settings::default());
        let _ = app.handle_report_requested();
        assert!(app.state.toast.is_some());
        assert!(!app.state.report.status.is_loading());
    }

    #[test]
    fn stale_report_is_dropped() {
        let mut app = App::with_settings(Settings::default());
        let first = app.state.report.begin();
        let _second = app.state.report.begin();
        let _ = app.handle_report_fetched(first, Ok("# Stale".to_string()));
        assert!(app.state.report.text().is_none());
    }

    #[test]
    fn export_succeeds_into_a_toast() {
        let mut app = App::with_settings(Settings::default());
        let _ = app.handle_report_exported(Ok(PathBuf::from("/tmp/report.md")));
        assert!(app.state.toast.is_some());
    }
}
