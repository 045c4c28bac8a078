//! Alignment panel handlers.

use iced::Task;
use pse_api::types::AlignmentResult;

use crate::app::App;
use crate::error::FetchError;
use crate::message::Message;
use crate::service::structure::fetch_alignment;
use crate::state::session::PanelState;

impl App {
    /// UniProt id input edited.
    pub fn handle_uniprot_input_changed(&mut self, input: String) -> Task<Message> {
        self.state.session.alignment.uniprot_input = input;
        Task::none()
    }

    /// Alignment submitted; an empty UniProt input lets the service derive
    /// the accession from the structure's cross-references.
    pub fn handle_alignment_submitted(&mut self) -> Task<Message> {
        let Some(pdb_id) = self.state.session.current().map(ToString::to_string) else {
            return Task::none();
        };
        let uniprot = self.state.session.alignment.uniprot_input.trim().to_string();
        let uniprot = (!uniprot.is_empty()).then_some(uniprot);
        self.state.session.alignment.result = PanelState::Loading;
        fetch_alignment(
            &self.state.api,
            self.state.session.generation(),
            &pdb_id,
            uniprot.as_deref(),
        )
    }

    /// Alignment settled; failures render inline in the panel.
    pub fn handle_alignment_fetched(
        &mut self,
        generation: u64,
        result: Result<AlignmentResult, FetchError>,
    ) -> Task<Message> {
        self.state.session.apply_alignment(generation, result);
        Task::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::settings::Settings;

    #[test]
    fn submit_without_selection_does_nothing() {
        let mut app = App::with_settings(Settings::default());
        let _ = app.handle_alignment_submitted();
        assert_eq!(app.state.session.alignment.result, PanelState::Idle);
    }

    #[test]
    fn fresh_result_lands_in_the_panel() {
        let mut app = App::with_settings(Settings::default());
        let generation = app.state.session.select("1TUP");
        let _ = app.handle_alignment_submitted();

        let alignment: AlignmentResult =
            serde_json::from_str(r#"{"pdb_id":"1TUP","uniprot_id":"P04637"}"#).unwrap();
        let _ = app.handle_alignment_fetched(generation, Ok(alignment));
        assert!(app.state.session.alignment.result.as_ready().is_some());
    }
}
