//! Mutation panel handlers.

use iced::Task;
use pse_api::types::MutationImpact;

use crate::app::App;
use crate::error::FetchError;
use crate::message::Message;
use crate::service::structure::fetch_mutation;
use crate::state::session::PanelState;

impl App {
    /// Mutation input edited.
    pub fn handle_mutation_input_changed(&mut self, input: String) -> Task<Message> {
        self.state.session.mutation.input = input;
        Task::none()
    }

    /// Mutation analysis submitted. Requires a live selection and a
    /// non-empty input; the string itself is validated by the service.
    pub fn handle_mutation_submitted(&mut self) -> Task<Message> {
        let mutation = self.state.session.mutation.input.trim().to_string();
        if mutation.is_empty() {
            return Task::none();
        }
        let Some(pdb_id) = self.state.session.current().map(ToString::to_string) else {
            return Task::none();
        };
        self.state.session.mutation.result = PanelState::Loading;
        fetch_mutation(
            &self.state.api,
            self.state.session.generation(),
            &pdb_id,
            &mutation,
        )
    }

    /// Mutation impact settled. Failures, including an invalid mutation
    /// string, render inline in the panel.
    pub fn handle_mutation_fetched(
        &mut self,
        generation: u64,
        result: Result<MutationImpact, FetchError>,
    ) -> Task<Message> {
        self.state.session.apply_mutation(generation, result);
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
        app.state.session.mutation.input = "A:K33E".to_string();
        let _ = app.handle_mutation_submitted();
        assert_eq!(app.state.session.mutation.result, PanelState::Idle);
    }

    #[test]
    fn invalid_mutation_renders_inline() {
        let mut app = App::with_settings(Settings::default());
        let generation = app.state.session.select("1TUP");
        app.state.session.mutation.input = "bogus".to_string();
        let _ = app.handle_mutation_submitted();
        assert!(app.state.session.mutation.result.is_loading());

        let _ = app.handle_mutation_fetched(
            generation,
            Err(FetchError::Service(
                "invalid mutation format, expected A:K33E".into(),
            )),
        );
        assert!(app.state.session.mutation.result.as_failed().is_some());
        assert!(app.state.toast.is_none());
    }

    #[test]
    fn result_for_a_previous_selection_is_dropped() {
        let mut app = App::with_settings(Settings::default());
        let first = app.state.session.select("1TUP");
        app.state.session.mutation.input = "A:K33E".to_string();
        let _ = app.handle_mutation_submitted();
        let _ = app.state.session.select("2AC0");

        let impact: MutationImpact =
            serde_json::from_str(r#"{"mutation":"A:K33E","pdb_id":"1TUP"}"#).unwrap();
        let _ = app.handle_mutation_fetched(first, Ok(impact));
        assert_eq!(app.state.session.mutation.result, PanelState::Idle);
    }
}
