//! Viewer toolbar and coordinate download handlers.

use iced::Task;

use crate::app::App;
use crate::component::toast::ToastState;
use crate::error::FetchError;
use crate::message::Message;
use crate::state::viewer::{ColorScheme, Representation};

impl App {
    /// Representation picked; the instance is rebuilt with the new style.
    pub fn handle_representation_selected(
        &mut self,
        representation: Representation,
    ) -> Task<Message> {
        self.state.viewer.set_representation(representation);
        Task::none()
    }

    /// Color scheme picked; the instance is rebuilt with the new style.
    pub fn handle_color_scheme_selected(&mut self, scheme: ColorScheme) -> Task<Message> {
        self.state.viewer.set_color_scheme(scheme);
        Task::none()
    }

    /// Reset view button clicked.
    pub fn handle_viewer_reset(&mut self) -> Task<Message> {
        self.state.viewer.reset_view();
        Task::none()
    }

    /// Coordinate download settled.
    pub fn handle_coordinates_fetched(
        &mut self,
        generation: u64,
        pdb_id: &str,
        result: Result<String, FetchError>,
    ) -> Task<Message> {
        let failure = result.as_ref().err().cloned();
        if self.state.viewer.on_coordinates(generation, pdb_id, result) {
            if let Some(err) = failure {
                self.state.toast = Some(ToastState::warning(err.to_string()));
            }
        }
        Task::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::settings::Settings;

    const MINI_PDB: &str = "\
ATOM      1  CA  MET A   1      26.266  25.413   2.842  1.00 10.38           C
ATOM      2  CA  GLN A   2      26.850  29.021   3.898  1.00  9.62           C
END
";

    #[test]
    fn style_change_without_instance_is_harmless() {
        let mut app = App::with_settings(Settings::default());
        let _ = app.handle_representation_selected(Representation::Surface);
        let _ = app.handle_color_scheme_selected(ColorScheme::Chain);
        assert!(app.state.viewer.instance().is_none());
        assert_eq!(app.state.viewer.style.representation, Representation::Surface);
    }

    #[test]
    fn failed_download_toasts_and_clears() {
        let mut app = App::with_settings(Settings::default());
        let generation = app.state.viewer.load();
        let _ = app.handle_coordinates_fetched(
            generation,
            "9XYZ",
            Err(FetchError::NotFound("no coordinate file".into())),
        );
        assert!(app.state.viewer.instance().is_none());
        assert!(app.state.toast.is_some());
    }

    #[test]
    fn successful_download_builds_an_instance() {
        let mut app = App::with_settings(Settings::default());
        let generation = app.state.viewer.load();
        let _ = app.handle_coordinates_fetched(generation, "1TUP", Ok(MINI_PDB.to_string()));
        assert_eq!(app.state.viewer.instance().unwrap().pdb_id(), "1TUP");
        assert!(app.state.toast.is_none());
    }
}
