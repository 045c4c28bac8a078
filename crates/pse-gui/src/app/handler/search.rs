//! Search message handlers.
//!
//! Handles:
//! - Search bar edits and submits
//! - Candidate resolution completions
//! - Per-candidate summary metadata completions

use iced::Task;
use pse_api::types::StructureInfo;

use crate::app::App;
use crate::component::toast::ToastState;
use crate::error::FetchError;
use crate::message::Message;
use crate::service::report::{ReportTarget, fetch_report};
use crate::service::search::{fetch_candidate_infos, resolve_query};
use crate::state::search::{Query, SearchMode};

impl App {
    /// Switch between gene and PDB id search.
    pub fn handle_search_mode_changed(&mut self, mode: SearchMode) -> Task<Message> {
        self.state.search.mode = mode;
        Task::none()
    }

    /// Submit the search input; empty input is ignored.
    pub fn handle_search_submitted(&mut self) -> Task<Message> {
        match self.state.search.submit() {
            Some((generation, query)) => resolve_query(self.state.api.clone(), generation, query),
            None => Task::none(),
        }
    }

    /// A candidate resolution settled.
    ///
    /// A failure is reported as a toast and leaves whatever candidates were
    /// already on screen untouched. A success replaces them, fans out one
    /// metadata fetch per row, auto-selects the first candidate, and kicks
    /// off the report for the query.
    pub fn handle_candidates_resolved(
        &mut self,
        generation: u64,
        query: Query,
        result: Result<Vec<String>, FetchError>,
    ) -> Task<Message> {
        if !self
            .state
            .search
            .apply_candidates(generation, query.clone(), &result)
        {
            return Task::none();
        }
        match result {
            Ok(ids) => {
                let infos = fetch_candidate_infos(&self.state.api, generation, &ids);
                let select = match ids.first().cloned() {
                    Some(first) => self.handle_candidate_selected(&first),
                    None => Task::none(),
                };
                let target = match query {
                    Query::ByGene { name, .. } => ReportTarget::Gene(name),
                    Query::ByPdbId { .. } => ReportTarget::Structures(ids),
                };
                let report_generation = self.state.report.begin();
                let report = fetch_report(&self.state.api, report_generation, target);
                Task::batch([infos, select, report])
            }
            Err(err) => {
                self.state.toast = Some(match err {
                    FetchError::NotFound(_) => ToastState::warning(err.to_string()),
                    _ => ToastState::error(err.to_string()),
                });
                Task::none()
            }
        }
    }

    /// Summary metadata for one candidate row settled. Failures render as an
    /// unavailable marker on the row only.
    pub fn handle_candidate_info_fetched(
        &mut self,
        generation: u64,
        pdb_id: &str,
        result: Result<StructureInfo, FetchError>,
    ) -> Task<Message> {
        self.state
            .search
            .apply_candidate_info(generation, pdb_id, result);
        Task::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::settings::Settings;

    fn app() -> App {
        App::with_settings(Settings::default())
    }

    #[test]
    fn resolution_failure_keeps_candidates_and_raises_a_toast() {
        let mut app = app();
        app.state.search.input = "TP53".to_string();
        let (first, query) = app.state.search.submit().unwrap();
        let _ = app.handle_candidates_resolved(first, query, Ok(vec!["1TUP".to_string()]));
        assert_eq!(app.state.search.candidates.len(), 1);

        app.state.search.input = "XYZZY".to_string();
        let (second, query) = app.state.search.submit().unwrap();
        let _ = app.handle_candidates_resolved(
            second,
            query,
            Err(FetchError::NotFound("no structures found for gene XYZZY".into())),
        );

        assert_eq!(app.state.search.candidates.len(), 1);
        assert!(app.state.toast.is_some());
    }

    #[test]
    fn successful_resolution_selects_the_first_candidate_and_starts_a_report() {
        let mut app = app();
        app.state.search.input = "TP53".to_string();
        let (generation, query) = app.state.search.submit().unwrap();
        let _ = app.handle_candidates_resolved(
            generation,
            query,
            Ok(vec!["1TUP".to_string(), "2AC0".to_string()]),
        );

        assert_eq!(app.state.session.current(), Some("1TUP"));
        assert!(app.state.session.info.is_loading());
        assert!(app.state.report.status.is_loading());
    }

    #[test]
    fn stale_resolution_raises_no_toast() {
        let mut app = app();
        app.state.search.input = "TP53".to_string();
        let (first, first_query) = app.state.search.submit().unwrap();
        app.state.search.input = "BRCA1".to_string();
        let _ = app.state.search.submit().unwrap();

        let _ = app.handle_candidates_resolved(
            first,
            first_query,
            Err(FetchError::Transport("connection refused".into())),
        );
        assert!(app.state.toast.is_none());
    }
}
