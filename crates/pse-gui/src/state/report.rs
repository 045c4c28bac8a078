//! Analysis report state.
//!
//! The report is a markdown document generated server-side for the active
//! query. It is parsed once when it arrives and cached as pre-parsed items;
//! the view only renders the cached items. Export writes the raw markdown to
//! a user-chosen path.

use chrono::Local;
use iced::widget::markdown;

use crate::error::FetchError;
use crate::state::session::PanelState;

/// Owner of the generated report and its pre-parsed render items.
#[derive(Default)]
pub struct ReportManager {
    generation: u64,
    /// Fetch status; `Ready(())` once a report is shown.
    pub status: PanelState<()>,
    text: Option<String>,
    items: Vec<markdown::Item>,
}

impl ReportManager {
    /// Begin fetching a new report, discarding the shown one. Returns the
    /// generation to tag the fetch with.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.status = PanelState::Loading;
        self.text = None;
        self.items.clear();
        self.generation
    }

    /// Apply a report completion. Returns `false` when stale.
    pub fn apply(&mut self, generation: u64, result: Result<String, FetchError>) -> bool {
        if generation != self.generation {
            return false;
        }
        match result {
            Ok(text) => {
                self.items = markdown::parse(&text).collect();
                self.text = Some(text);
                self.status = PanelState::Ready(());
            }
            Err(err) => {
                self.status = PanelState::Failed(err);
            }
        }
        true
    }

    /// Raw markdown of the shown report.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Pre-parsed markdown items of the shown report.
    #[must_use]
    pub fn items(&self) -> &[markdown::Item] {
        &self.items
    }

    /// Whether a report is available for export.
    #[must_use]
    pub fn can_export(&self) -> bool {
        self.text.is_some()
    }
}

/// Suggested export file name, dated with the local day.
#[must_use]
pub fn export_file_name() -> String {
    format!("pdb_analysis_report_{}.md", Local::now().format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_is_parsed_once_on_arrival() {
        let mut report = ReportManager::default();
        let generation = report.begin();
        assert!(report.apply(generation, Ok("# Analysis\n\nBody.".to_string())));
        assert!(report.can_export());
        assert!(!report.items().is_empty());
        assert_eq!(report.text(), Some("# Analysis\n\nBody."));
    }

    #[test]
    fn begin_discards_the_shown_report() {
        let mut report = ReportManager::default();
        let first = report.begin();
        assert!(report.apply(first, Ok("# Old".to_string())));

        let second = report.begin();
        assert!(report.text().is_none());
        assert!(report.status.is_loading());

        // The superseded fetch cannot resurrect the old report.
        assert!(!report.apply(first, Ok("# Stale".to_string())));
        assert!(report.text().is_none());

        assert!(report.apply(second, Ok("# New".to_string())));
        assert_eq!(report.text(), Some("# New"));
    }

    #[test]
    fn failures_leave_nothing_exportable() {
        let mut report = ReportManager::default();
        let generation = report.begin();
        assert!(report.apply(
            generation,
            Err(FetchError::Service("report generation failed".into()))
        ));
        assert!(!report.can_export());
        assert!(report.status.as_failed().is_some());
    }

    #[test]
    fn export_file_name_carries_the_date() {
        let name = export_file_name();
        assert!(name.starts_with("pdb_analysis_report_"));
        assert!(name.ends_with(".md"));
    }
}
