//! Canvas-backed amino-acid composition bar chart.
//!
//! One handle per chain, owned by the chart registry. A handle is immutable
//! after creation; new composition data replaces the handle wholesale.

use std::fmt;

use iced::widget::canvas::{self, Canvas, Path};
use iced::{Color, Element, Length, Pixels, Point, Rectangle, Renderer, Size, Theme, mouse};

use pse_api::types::ChainComposition;

use crate::message::Message;
use crate::state::charts::ResidueCategory;
use crate::theme::TEXT_SECONDARY;

/// One bar of the chart.
#[derive(Debug, Clone, Copy)]
struct Bar {
    code: char,
    pct: f64,
    color: Color,
}

/// One chain's rendered composition chart.
pub struct ChartHandle {
    key: String,
    chain_id: String,
    bars: Vec<Bar>,
    max_pct: f64,
    cache: canvas::Cache,
}

impl fmt::Debug for ChartHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChartHandle")
            .field("key", &self.key)
            .field("bars", &self.bars.len())
            .finish_non_exhaustive()
    }
}

impl ChartHandle {
    /// Build a chart from one chain's composition, bars in residue-code
    /// order, colored by physicochemical category.
    #[must_use]
    pub fn create(key: String, chain_id: &str, chain: &ChainComposition) -> Self {
        let bars: Vec<Bar> = chain
            .amino_acid_percentages
            .iter()
            .filter_map(|(code, pct)| {
                let code = code.chars().next()?;
                Some(Bar {
                    code,
                    pct: *pct,
                    color: ResidueCategory::classify(code).color(),
                })
            })
            .collect();
        let max_pct = bars.iter().map(|bar| bar.pct).fold(0.0, f64::max).max(1.0);
        Self {
            key,
            chain_id: chain_id.to_string(),
            bars,
            max_pct,
            cache: canvas::Cache::default(),
        }
    }

    /// Registry key, `{pdb_id}-{chain}`.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Chain this chart belongs to.
    #[must_use]
    pub fn chain_id(&self) -> &str {
        &self.chain_id
    }

    /// Number of bars.
    #[must_use]
    pub fn bar_count(&self) -> usize {
        self.bars.len()
    }

    /// The canvas element.
    pub fn view(&self) -> Element<'_, Message> {
        Canvas::new(BarProgram { chart: self })
            .width(Length::Fill)
            .height(Length::Fixed(180.0))
            .into()
    }
}

struct BarProgram<'a> {
    chart: &'a ChartHandle,
}

impl canvas::Program<Message> for BarProgram<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let geometry = self.chart.cache.draw(renderer, bounds.size(), |frame| {
            let bars = &self.chart.bars;
            if bars.is_empty() {
                return;
            }
            let label_band = 18.0;
            let top_pad = 8.0;
            let plot_height = (bounds.height - label_band - top_pad).max(1.0);
            let slot = bounds.width / bars.len() as f32;
            let bar_width = (slot * 0.7).max(1.0);

            for (index, bar) in bars.iter().enumerate() {
                let height = (bar.pct / self.chart.max_pct) as f32 * plot_height;
                let x = index as f32 * slot + (slot - bar_width) / 2.0;
                let y = top_pad + (plot_height - height);
                frame.fill(
                    &Path::rectangle(Point::new(x, y), Size::new(bar_width, height)),
                    bar.color,
                );
                frame.fill_text(canvas::Text {
                    content: bar.code.to_string(),
                    position: Point::new(x + bar_width / 2.0 - 3.0, top_pad + plot_height + 3.0),
                    color: TEXT_SECONDARY,
                    size: Pixels(11.0),
                    ..canvas::Text::default()
                });
            }
        });
        vec![geometry]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> ChainComposition {
        serde_json::from_str(
            r#"{"sequence":"MKLD","length":4,
                "amino_acid_percentages":{"M":25.0,"K":25.0,"L":25.0,"D":25.0}}"#,
        )
        .unwrap()
    }

    #[test]
    fn create_builds_one_bar_per_residue_code() {
        let handle = ChartHandle::create("1TUP-A".to_string(), "A", &chain());
        assert_eq!(handle.bar_count(), 4);
        assert_eq!(handle.key(), "1TUP-A");
        assert_eq!(handle.chain_id(), "A");
    }

    #[test]
    fn empty_chain_yields_an_empty_chart() {
        let empty: ChainComposition =
            serde_json::from_str(r#"{"sequence":"","length":0}"#).unwrap();
        let handle = ChartHandle::create("1TUP-B".to_string(), "B", &empty);
        assert_eq!(handle.bar_count(), 0);
    }
}
