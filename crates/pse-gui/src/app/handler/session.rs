//! Selection and panel message handlers.
//!
//! Handles:
//! - Candidate selection (the 4-way panel fan-out)
//! - Panel fetch completions, generation-guarded
//! - The viewer load that follows the metadata fetch

use iced::Task;
use pse_api::types::{AdvancedAnalysis, SequenceComposition, StructureAnalysis, StructureInfo};

use crate::app::App;
use crate::component::toast::ToastState;
use crate::error::FetchError;
use crate::message::Message;
use crate::service::coords::fetch_coordinates;
use crate::service::structure::fetch_structure_panels;

impl App {
    /// A candidate row was clicked: make it the live selection, destroy the
    /// previous selection's charts and fan out the four panel fetches.
    pub fn handle_candidate_selected(&mut self, pdb_id: &str) -> Task<Message> {
        let generation = self.state.session.select(pdb_id);
        self.state.charts.clear();
        fetch_structure_panels(&self.state.api, generation, pdb_id)
    }

    /// Structure metadata settled.
    ///
    /// Whether it succeeded or failed, a fresh completion triggers the viewer
    /// load: the coordinate archive is independent of the analysis service,
    /// so the 3D view may work even when the metadata panel does not.
    pub fn handle_info_fetched(
        &mut self,
        generation: u64,
        pdb_id: &str,
        result: Result<StructureInfo, FetchError>,
    ) -> Task<Message> {
        let failure = result.as_ref().err().cloned();
        if !self.state.session.apply_info(generation, result) {
            return Task::none();
        }
        if let Some(err) = failure {
            self.state.toast = Some(ToastState::error(err.to_string()));
        }
        let viewer_generation = self.state.viewer.load();
        fetch_coordinates(&self.state.coords, viewer_generation, pdb_id)
    }

    /// Basic analysis settled.
    pub fn handle_analysis_fetched(
        &mut self,
        generation: u64,
        result: Result<StructureAnalysis, FetchError>,
    ) -> Task<Message> {
        let failure = result.as_ref().err().cloned();
        if self.state.session.apply_analysis(generation, result) {
            if let Some(err) = failure {
                self.state.toast = Some(ToastState::error(err.to_string()));
            }
        }
        Task::none()
    }

    /// Advanced analysis settled.
    pub fn handle_advanced_fetched(
        &mut self,
        generation: u64,
        result: Result<AdvancedAnalysis, FetchError>,
    ) -> Task<Message> {
        let failure = result.as_ref().err().cloned();
        if self.state.session.apply_advanced(generation, result) {
            if let Some(err) = failure {
                self.state.toast = Some(ToastState::error(err.to_string()));
            }
        }
        Task::none()
    }

    /// Sequence composition settled; a fresh success rebuilds the charts.
    pub fn handle_composition_fetched(
        &mut self,
        generation: u64,
        pdb_id: &str,
        result: Result<SequenceComposition, FetchError>,
    ) -> Task<Message> {
        match result {
            Ok(composition) => {
                if self
                    .state
                    .session
                    .apply_composition(generation, Ok(composition.clone()))
                {
                    self.state.charts.rebuild(pdb_id, &composition);
                }
            }
            Err(err) => {
                if self
                    .state
                    .session
                    .apply_composition(generation, Err(err.clone()))
                {
                    self.state.toast = Some(ToastState::error(err.to_string()));
                }
            }
        }
        Task::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::session::SessionPhase;
    use crate::state::settings::Settings;

    fn app() -> App {
        App::with_settings(Settings::default())
    }

    fn info(pdb_id: &str) -> StructureInfo {
        serde_json::from_str(&format!(r#"{{"pdb_id":"{pdb_id}","title":"t"}}"#)).unwrap()
    }

    fn composition(pdb_id: &str) -> SequenceComposition {
        serde_json::from_str(&format!(
            r#"{{"pdb_id":"{pdb_id}","chains":{{"A":{{"sequence":"MK","length":2,
                "amino_acid_percentages":{{"M":50.0,"K":50.0}}}}}}}}"#
        ))
        .unwrap()
    }

    #[test]
    fn selection_starts_loading_and_clears_charts() {
        let mut app = app();
        let generation = app.state.session.select("1TUP");
        let _ = app.handle_composition_fetched(generation, "1TUP", Ok(composition("1TUP")));
        assert_eq!(app.state.charts.len(), 1);

        let _ = app.handle_candidate_selected("2AC0");
        assert!(app.state.charts.is_empty());
        assert_eq!(app.state.session.phase, SessionPhase::Loading);
    }

    #[test]
    fn fresh_info_triggers_a_viewer_load_even_on_failure() {
        let mut app = app();
        let generation = app.state.session.select("1TUP");
        let _ = app.handle_info_fetched(
            generation,
            "1TUP",
            Err(FetchError::Service("metadata unavailable".into())),
        );
        assert_eq!(app.state.session.phase, SessionPhase::Failed);
        assert!(app.state.viewer.loading);
        assert!(app.state.toast.is_some());
    }

    #[test]
    fn stale_composition_leaves_charts_alone() {
        let mut app = app();
        let first = app.state.session.select("1TUP");
        let second = app.state.session.select("2AC0");

        let _ = app.handle_composition_fetched(first, "1TUP", Ok(composition("1TUP")));
        assert!(app.state.charts.is_empty());

        let _ = app.handle_composition_fetched(second, "2AC0", Ok(composition("2AC0")));
        assert_eq!(app.state.charts.len(), 1);
    }

    #[test]
    fn one_failed_panel_does_not_disturb_the_others() {
        let mut app = app();
        let generation = app.state.session.select("1TUP");
        let _ = app.handle_info_fetched(generation, "1TUP", Ok(info("1TUP")));
        let _ = app.handle_advanced_fetched(
            generation,
            Err(FetchError::Service("SASA computation failed".into())),
        );
        let _ = app.handle_composition_fetched(generation, "1TUP", Ok(composition("1TUP")));

        assert_eq!(app.state.session.phase, SessionPhase::Ready);
        assert!(app.state.session.advanced.as_failed().is_some());
        assert!(app.state.session.composition.as_ready().is_some());
        assert_eq!(app.state.charts.len(), 1);
    }
}
