//! 3D viewer controller.
//!
//! The controller owns at most one live [`ViewerInstance`] and treats it as
//! disposable: any style change or new structure load destroys the current
//! instance before a replacement is built. Coordinate downloads are guarded
//! by the same generation discipline as the session panels, so a slow
//! download for a previous structure can never repopulate the canvas.

use tracing::debug;

use crate::component::viewer::ViewerInstance;
use crate::error::FetchError;

/// Rendering representation of the loaded structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Representation {
    /// Backbone ribbon trace.
    #[default]
    Cartoon,
    /// Bonds drawn as sticks.
    Stick,
    /// Residues drawn as spheres.
    Sphere,
    /// Cartoon plus a translucent molecular surface.
    Surface,
}

impl Representation {
    /// All selectable representations, in display order.
    pub const ALL: [Self; 4] = [Self::Cartoon, Self::Stick, Self::Sphere, Self::Surface];

    /// Display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Cartoon => "Cartoon",
            Self::Stick => "Stick",
            Self::Sphere => "Sphere",
            Self::Surface => "Surface",
        }
    }
}

impl std::fmt::Display for Representation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Coloring scheme of the loaded structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorScheme {
    /// Rainbow ramp along the chain from N to C terminus.
    #[default]
    Spectrum,
    /// One color per chain.
    Chain,
    /// By secondary structure element.
    SecondaryStructure,
}

impl ColorScheme {
    /// All selectable schemes, in display order.
    pub const ALL: [Self; 3] = [Self::Spectrum, Self::Chain, Self::SecondaryStructure];

    /// Display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Spectrum => "Spectrum",
            Self::Chain => "By chain",
            Self::SecondaryStructure => "Secondary structure",
        }
    }
}

impl std::fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Complete style configuration of the viewer; a plain value object, applied
/// by rebuilding the instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewerStyleConfig {
    pub representation: Representation,
    pub color_scheme: ColorScheme,
}

/// Owner of the single live viewer instance.
#[derive(Debug, Default)]
pub struct ViewerController {
    generation: u64,
    /// Current style; survives across structure loads.
    pub style: ViewerStyleConfig,
    instance: Option<ViewerInstance>,
    /// Last load failure, rendered in place of the canvas.
    pub error: Option<FetchError>,
    /// Whether a coordinate download is in flight.
    pub loading: bool,
}

impl ViewerController {
    /// Begin loading a new structure.
    ///
    /// Destroys the current instance immediately so the canvas never shows a
    /// structure other than the live selection. Returns the generation to tag
    /// the coordinate download with.
    pub fn load(&mut self) -> u64 {
        self.generation += 1;
        self.instance = None;
        self.error = None;
        self.loading = true;
        self.generation
    }

    /// Apply a coordinate-download completion. Returns `false` when the
    /// completion is stale.
    pub fn on_coordinates(
        &mut self,
        generation: u64,
        pdb_id: &str,
        result: Result<String, FetchError>,
    ) -> bool {
        if generation != self.generation {
            debug!(
                pdb_id,
                stale = generation,
                current = self.generation,
                "discarding coordinates for a superseded load"
            );
            return false;
        }
        self.loading = false;
        match result {
            Ok(text) => match ViewerInstance::create(pdb_id, &text, self.style) {
                Ok(instance) => {
                    self.instance = Some(instance);
                    self.error = None;
                }
                Err(err) => {
                    self.instance = None;
                    self.error = Some(err);
                }
            },
            Err(err) => {
                self.instance = None;
                self.error = Some(err);
            }
        }
        true
    }

    /// Change the representation, rebuilding the instance.
    pub fn set_representation(&mut self, representation: Representation) {
        self.style.representation = representation;
        self.rebuild();
    }

    /// Change the color scheme, rebuilding the instance.
    pub fn set_color_scheme(&mut self, scheme: ColorScheme) {
        self.style.color_scheme = scheme;
        self.rebuild();
    }

    /// Re-center and re-fit the camera. A no-op without a live instance.
    pub fn reset_view(&mut self) {
        if let Some(instance) = &mut self.instance {
            instance.fit_camera();
        }
    }

    /// The live instance, if a structure is loaded.
    #[must_use]
    pub fn instance(&self) -> Option<&ViewerInstance> {
        self.instance.as_ref()
    }

    // Destroy-then-recreate: the old instance is dropped before the
    // restyled one exists, so stale geometry can never leak into a frame.
    fn rebuild(&mut self) {
        if let Some(old) = self.instance.take() {
            self.instance = Some(old.restyled(self.style));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINI_PDB: &str = "\
ATOM      1  N   MET A   1      27.340  24.430   2.614  1.00  9.67           N
ATOM      2  CA  MET A   1      26.266  25.413   2.842  1.00 10.38           C
ATOM      3  CA  GLN A   2      26.850  29.021   3.898  1.00  9.62           C
ATOM      4  CA  ILE A   3      26.235  30.058   7.497  1.00  9.27           C
END
";

    #[test]
    fn stale_coordinates_are_dropped() {
        let mut viewer = ViewerController::default();
        let first = viewer.load();
        let second = viewer.load();

        assert!(!viewer.on_coordinates(first, "1TUP", Ok(MINI_PDB.to_string())));
        assert!(viewer.instance().is_none());
        assert!(viewer.loading);

        assert!(viewer.on_coordinates(second, "2AC0", Ok(MINI_PDB.to_string())));
        assert_eq!(viewer.instance().unwrap().pdb_id(), "2AC0");
        assert!(!viewer.loading);
    }

    #[test]
    fn load_destroys_the_previous_instance() {
        let mut viewer = ViewerController::default();
        let generation = viewer.load();
        assert!(viewer.on_coordinates(generation, "1TUP", Ok(MINI_PDB.to_string())));
        assert!(viewer.instance().is_some());

        let _ = viewer.load();
        assert!(viewer.instance().is_none());
        assert!(viewer.loading);
    }

    #[test]
    fn style_change_rebuilds_with_the_new_style() {
        let mut viewer = ViewerController::default();
        let generation = viewer.load();
        assert!(viewer.on_coordinates(generation, "1TUP", Ok(MINI_PDB.to_string())));

        viewer.set_representation(Representation::Sphere);
        viewer.set_color_scheme(ColorScheme::Chain);
        let instance = viewer.instance().unwrap();
        assert_eq!(instance.style().representation, Representation::Sphere);
        assert_eq!(instance.style().color_scheme, ColorScheme::Chain);
    }

    #[test]
    fn failed_download_clears_the_canvas() {
        let mut viewer = ViewerController::default();
        let generation = viewer.load();
        assert!(viewer.on_coordinates(
            generation,
            "9XYZ",
            Err(FetchError::NotFound("no coordinate file".into()))
        ));
        assert!(viewer.instance().is_none());
        assert!(viewer.error.is_some());
    }

    #[test]
    fn reset_without_instance_is_a_no_op() {
        let mut viewer = ViewerController::default();
        viewer.reset_view();
        assert!(viewer.instance().is_none());
    }

    #[test]
    fn style_survives_across_loads() {
        let mut viewer = ViewerController::default();
        viewer.set_representation(Representation::Surface);
        let generation = viewer.load();
        assert!(viewer.on_coordinates(generation, "1TUP", Ok(MINI_PDB.to_string())));
        assert_eq!(
            viewer.instance().unwrap().style().representation,
            Representation::Surface
        );
    }
}
