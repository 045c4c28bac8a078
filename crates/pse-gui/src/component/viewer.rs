//! Canvas-backed 3D structure viewer.
//!
//! Renders an orthographic backbone trace of the downloaded coordinate file.
//! An instance is immutable after creation; style changes go through
//! [`ViewerInstance::restyled`], which consumes the old instance and builds a
//! fresh one with an empty geometry cache.

use std::fmt;

use iced::widget::canvas::{self, Canvas, Path, Stroke};
use iced::{Color, Element, Length, Point, Rectangle, Renderer, Theme, mouse};

use crate::error::FetchError;
use crate::message::Message;
use crate::state::viewer::{ColorScheme, Representation, ViewerStyleConfig};

/// Secondary structure assignment of one residue, from HELIX/SHEET records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecondaryElement {
    Helix,
    Sheet,
    Coil,
}

/// One backbone position (alpha carbon).
#[derive(Debug, Clone, Copy)]
pub struct TraceResidue {
    pub chain: char,
    pub seq: i32,
    pub pos: [f32; 3],
    pub ss: SecondaryElement,
}

/// Parsed backbone trace of a coordinate file.
#[derive(Debug, Clone, Default)]
pub struct TraceModel {
    residues: Vec<TraceResidue>,
    chains: Vec<char>,
}

/// Range annotated by a HELIX or SHEET record.
#[derive(Debug, Clone, Copy)]
struct SsRange {
    chain: char,
    start: i32,
    end: i32,
    element: SecondaryElement,
}

impl TraceModel {
    /// Parse the alpha-carbon trace and secondary structure annotations out
    /// of PDB-format text. Unparseable lines are skipped.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut ranges: Vec<SsRange> = Vec::new();
        let mut residues: Vec<TraceResidue> = Vec::new();
        let mut chains: Vec<char> = Vec::new();

        for line in text.lines() {
            if line.starts_with("HELIX ") {
                if let Some(range) = parse_ss_range(line, 19, 21..25, 33..37, SecondaryElement::Helix)
                {
                    ranges.push(range);
                }
            } else if line.starts_with("SHEET ") {
                if let Some(range) = parse_ss_range(line, 21, 22..26, 33..37, SecondaryElement::Sheet)
                {
                    ranges.push(range);
                }
            } else if line.starts_with("ATOM") {
                if let Some(residue) = parse_ca_atom(line) {
                    if !chains.contains(&residue.chain) {
                        chains.push(residue.chain);
                    }
                    residues.push(residue);
                }
            } else if line.starts_with("ENDMDL") {
                // First NMR model only.
                break;
            }
        }

        for residue in &mut residues {
            residue.ss = ranges
                .iter()
                .find(|r| {
                    r.chain == residue.chain && r.start <= residue.seq && residue.seq <= r.end
                })
                .map_or(SecondaryElement::Coil, |r| r.element);
        }

        Self { residues, chains }
    }

    /// Backbone residues in file order.
    #[must_use]
    pub fn residues(&self) -> &[TraceResidue] {
        &self.residues
    }

    /// Chain ids in order of first appearance.
    #[must_use]
    pub fn chains(&self) -> &[char] {
        &self.chains
    }

    /// Whether the file contained no backbone atoms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }
}

fn column(line: &str, index: usize) -> Option<char> {
    line.as_bytes().get(index).map(|b| *b as char)
}

fn field(line: &str, range: std::ops::Range<usize>) -> Option<&str> {
    line.get(range).map(str::trim)
}

fn parse_ss_range(
    line: &str,
    chain_col: usize,
    start_range: std::ops::Range<usize>,
    end_range: std::ops::Range<usize>,
    element: SecondaryElement,
) -> Option<SsRange> {
    let chain = column(line, chain_col)?;
    let start: i32 = field(line, start_range)?.parse().ok()?;
    let end: i32 = field(line, end_range)?.parse().ok()?;
    Some(SsRange {
        chain,
        start,
        end,
        element,
    })
}

fn parse_ca_atom(line: &str) -> Option<TraceResidue> {
    if field(line, 12..16)? != "CA" {
        return None;
    }
    // Skip alternate locations other than the primary one.
    let alt_loc = column(line, 16)?;
    if alt_loc != ' ' && alt_loc != 'A' {
        return None;
    }
    let chain = column(line, 21)?;
    let seq: i32 = field(line, 22..26)?.parse().ok()?;
    let x: f32 = field(line, 30..38)?.parse().ok()?;
    let y: f32 = field(line, 38..46)?.parse().ok()?;
    let z: f32 = field(line, 46..54)?.parse().ok()?;
    Some(TraceResidue {
        chain,
        seq,
        pos: [x, y, z],
        ss: SecondaryElement::Coil,
    })
}

// ====== INSTANCE ======

/// One live rendering of one structure with one style.
pub struct ViewerInstance {
    pdb_id: String,
    model: TraceModel,
    style: ViewerStyleConfig,
    cache: canvas::Cache,
}

impl fmt::Debug for ViewerInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewerInstance")
            .field("pdb_id", &self.pdb_id)
            .field("residues", &self.model.residues().len())
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}

impl ViewerInstance {
    /// Build an instance from raw coordinate text.
    ///
    /// Fails when the file contains no backbone atoms, which renders as the
    /// viewer's inline error.
    pub fn create(
        pdb_id: &str,
        pdb_text: &str,
        style: ViewerStyleConfig,
    ) -> Result<Self, FetchError> {
        let model = TraceModel::parse(pdb_text);
        if model.is_empty() {
            return Err(FetchError::Decode(format!(
                "coordinate file for {pdb_id} contains no backbone atoms"
            )));
        }
        Ok(Self {
            pdb_id: pdb_id.to_string(),
            model,
            style,
            cache: canvas::Cache::default(),
        })
    }

    /// Consume this instance and build a replacement with a new style.
    #[must_use]
    pub fn restyled(self, style: ViewerStyleConfig) -> Self {
        Self {
            pdb_id: self.pdb_id,
            model: self.model,
            style,
            cache: canvas::Cache::default(),
        }
    }

    /// Re-fit the camera. The projection auto-fits on draw, so this just
    /// invalidates the cached geometry.
    pub fn fit_camera(&mut self) {
        self.cache.clear();
    }

    /// Id of the rendered structure.
    #[must_use]
    pub fn pdb_id(&self) -> &str {
        &self.pdb_id
    }

    /// Style this instance was built with.
    #[must_use]
    pub fn style(&self) -> ViewerStyleConfig {
        self.style
    }

    /// Parsed model behind this instance.
    #[must_use]
    pub fn model(&self) -> &TraceModel {
        &self.model
    }

    /// The canvas element.
    pub fn view(&self) -> Element<'_, Message> {
        Canvas::new(TraceProgram { instance: self })
            .width(Length::Fill)
            .height(Length::Fixed(420.0))
            .into()
    }
}

// ====== DRAWING ======

const CHAIN_PALETTE: [Color; 8] = [
    Color { r: 0.35, g: 0.60, b: 0.98, a: 1.0 },
    Color { r: 0.96, g: 0.62, b: 0.04, a: 1.0 },
    Color { r: 0.13, g: 0.77, b: 0.37, a: 1.0 },
    Color { r: 0.94, g: 0.27, b: 0.27, a: 1.0 },
    Color { r: 0.55, g: 0.36, b: 0.96, a: 1.0 },
    Color { r: 0.02, g: 0.71, b: 0.83, a: 1.0 },
    Color { r: 0.93, g: 0.28, b: 0.60, a: 1.0 },
    Color { r: 0.52, g: 0.60, b: 0.12, a: 1.0 },
];

struct TraceProgram<'a> {
    instance: &'a ViewerInstance,
}

impl canvas::Program<Message> for TraceProgram<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let geometry = self.instance.cache.draw(renderer, bounds.size(), |frame| {
            let model = &self.instance.model;
            let style = self.instance.style;
            let projected = project(model.residues(), bounds.width, bounds.height);

            match style.representation {
                Representation::Cartoon => {
                    draw_trace(frame, model, &projected, style.color_scheme, 3.5);
                }
                Representation::Stick => {
                    draw_trace(frame, model, &projected, style.color_scheme, 1.2);
                    draw_spheres(frame, model, &projected, style.color_scheme, 1.6);
                }
                Representation::Sphere => {
                    draw_spheres(frame, model, &projected, style.color_scheme, 5.0);
                }
                Representation::Surface => {
                    // Cartoon pass plus a translucent surface blob overlay.
                    draw_trace(frame, model, &projected, style.color_scheme, 3.5);
                    draw_surface(frame, model, &projected, style.color_scheme);
                }
            }
        });
        vec![geometry]
    }
}

/// Orthographic fit-to-bounds projection of the backbone positions.
fn project(residues: &[TraceResidue], width: f32, height: f32) -> Vec<Point> {
    if residues.is_empty() {
        return Vec::new();
    }
    let (mut min_x, mut max_x) = (f32::MAX, f32::MIN);
    let (mut min_y, mut max_y) = (f32::MAX, f32::MIN);
    for residue in residues {
        min_x = min_x.min(residue.pos[0]);
        max_x = max_x.max(residue.pos[0]);
        min_y = min_y.min(residue.pos[1]);
        max_y = max_y.max(residue.pos[1]);
    }
    let span_x = (max_x - min_x).max(1.0);
    let span_y = (max_y - min_y).max(1.0);
    let margin = 24.0;
    let scale = ((width - 2.0 * margin) / span_x).min((height - 2.0 * margin) / span_y);
    let offset_x = (width - span_x * scale) / 2.0;
    let offset_y = (height - span_y * scale) / 2.0;

    residues
        .iter()
        .map(|residue| {
            Point::new(
                offset_x + (residue.pos[0] - min_x) * scale,
                // Flip y so "up" in model space points up on screen.
                height - offset_y - (residue.pos[1] - min_y) * scale,
            )
        })
        .collect()
}

fn residue_color(model: &TraceModel, index: usize, scheme: ColorScheme) -> Color {
    let residue = &model.residues()[index];
    match scheme {
        ColorScheme::Spectrum => {
            let total = model.residues().len().max(2);
            // Blue at the N terminus through to red at the C terminus.
            let t = index as f32 / (total - 1) as f32;
            hue_to_color(240.0 - 240.0 * t)
        }
        ColorScheme::Chain => {
            let chain_index = model
                .chains()
                .iter()
                .position(|c| *c == residue.chain)
                .unwrap_or(0);
            CHAIN_PALETTE[chain_index % CHAIN_PALETTE.len()]
        }
        ColorScheme::SecondaryStructure => match residue.ss {
            SecondaryElement::Helix => Color { r: 0.94, g: 0.16, b: 0.90, a: 1.0 },
            SecondaryElement::Sheet => Color { r: 0.98, g: 0.83, b: 0.10, a: 1.0 },
            SecondaryElement::Coil => Color { r: 0.85, g: 0.87, b: 0.90, a: 1.0 },
        },
    }
}

fn hue_to_color(hue: f32) -> Color {
    let h = (hue.rem_euclid(360.0)) / 60.0;
    let x = 1.0 - (h % 2.0 - 1.0).abs();
    let (r, g, b) = match h as u32 {
        0 => (1.0, x, 0.0),
        1 => (x, 1.0, 0.0),
        2 => (0.0, 1.0, x),
        3 => (0.0, x, 1.0),
        4 => (x, 0.0, 1.0),
        _ => (1.0, 0.0, x),
    };
    Color { r, g, b, a: 1.0 }
}

fn draw_trace(
    frame: &mut canvas::Frame,
    model: &TraceModel,
    projected: &[Point],
    scheme: ColorScheme,
    width: f32,
) {
    for index in 1..projected.len() {
        let previous = &model.residues()[index - 1];
        let current = &model.residues()[index];
        // Never bridge chain breaks or gaps in the trace. Equal sequence
        // numbers still connect (insertion codes).
        let gap = current.seq - previous.seq;
        if previous.chain != current.chain || !(0..=1).contains(&gap) {
            continue;
        }
        let segment = Path::line(projected[index - 1], projected[index]);
        // Helices render wider than coil, in the manner of a ribbon.
        let stroke_width = match current.ss {
            SecondaryElement::Helix => width * 1.6,
            SecondaryElement::Sheet => width * 1.3,
            SecondaryElement::Coil => width,
        };
        frame.stroke(
            &segment,
            Stroke::default()
                .with_width(stroke_width)
                .with_color(residue_color(model, index, scheme)),
        );
    }
}

fn draw_spheres(
    frame: &mut canvas::Frame,
    model: &TraceModel,
    projected: &[Point],
    scheme: ColorScheme,
    radius: f32,
) {
    for (index, point) in projected.iter().enumerate() {
        frame.fill(
            &Path::circle(*point, radius),
            residue_color(model, index, scheme),
        );
    }
}

fn draw_surface(
    frame: &mut canvas::Frame,
    model: &TraceModel,
    projected: &[Point],
    scheme: ColorScheme,
) {
    for (index, point) in projected.iter().enumerate() {
        let base = residue_color(model, index, scheme);
        frame.fill(
            &Path::circle(*point, 9.0),
            Color { a: 0.18, ..base },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
HELIX    1   1 MET A    1  GLN A    2  1                                   2
ATOM      1  N   MET A   1      27.340  24.430   2.614  1.00  9.67           N
ATOM      2  CA  MET A   1      26.266  25.413   2.842  1.00 10.38           C
ATOM      3  CA  GLN A   2      26.850  29.021   3.898  1.00  9.62           C
ATOM      4  CA AILE A   3      26.235  30.058   7.497  0.50  9.27           C
ATOM      5  CA BILE A   3      26.300  30.100   7.500  0.50  9.30           C
ATOM      6  CA  GLY B   1      10.000  10.000  10.000  1.00  5.00           C
END
";

    #[test]
    fn parse_keeps_only_primary_alpha_carbons() {
        let model = TraceModel::parse(SAMPLE);
        assert_eq!(model.residues().len(), 4);
        assert_eq!(model.chains(), &['A', 'B']);
    }

    #[test]
    fn helix_records_annotate_their_range() {
        let model = TraceModel::parse(SAMPLE);
        assert_eq!(model.residues()[0].ss, SecondaryElement::Helix);
        assert_eq!(model.residues()[1].ss, SecondaryElement::Helix);
        assert_eq!(model.residues()[2].ss, SecondaryElement::Coil);
    }

    #[test]
    fn parse_stops_at_the_first_model() {
        let multi_model = format!("{SAMPLE}ENDMDL\nATOM      9  CA  ALA C   1       1.000   1.000   1.000  1.00  1.00           C\n");
        // The atom after ENDMDL belongs to a later model and is ignored.
        let model = TraceModel::parse(&multi_model);
        assert_eq!(model.residues().len(), 4);
    }

    #[test]
    fn empty_coordinate_text_is_rejected() {
        let result = ViewerInstance::create("1TUP", "HEADER    EMPTY\nEND\n", ViewerStyleConfig::default());
        assert!(matches!(result, Err(FetchError::Decode(_))));
    }

    #[test]
    fn restyle_preserves_the_model() {
        let instance =
            ViewerInstance::create("1TUP", SAMPLE, ViewerStyleConfig::default()).unwrap();
        let count = instance.model().residues().len();
        let restyled = instance.restyled(ViewerStyleConfig {
            representation: Representation::Sphere,
            color_scheme: ColorScheme::Chain,
        });
        assert_eq!(restyled.model().residues().len(), count);
        assert_eq!(restyled.style().representation, Representation::Sphere);
    }

    #[test]
    fn projection_fits_within_bounds() {
        let model = TraceModel::parse(SAMPLE);
        let projected = project(model.residues(), 800.0, 420.0);
        assert_eq!(projected.len(), model.residues().len());
        for point in &projected {
            assert!(point.x >= 0.0 && point.x <= 800.0);
            assert!(point.y >= 0.0 && point.y <= 420.0);
        }
    }
}
