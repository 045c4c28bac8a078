//! Per-chain composition chart registry.
//!
//! One chart per chain of the selected structure, keyed `{pdb_id}-{chain}`.
//! Rebuilding for a new composition payload destroys every chart whose key
//! belongs to the structure first, then recreates them, so a chart handle is
//! never mutated in place and never outlives its data.

use std::collections::BTreeMap;

use iced::Color;
use pse_api::types::SequenceComposition;

use crate::component::chart::ChartHandle;

/// Physicochemical category of a residue, used for bar coloring and the
/// category chips under each chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResidueCategory {
    ChargedPositive,
    ChargedNegative,
    Hydrophobic,
    PolarUncharged,
    Aromatic,
    Other,
}

impl ResidueCategory {
    /// Classify a one-letter residue code. Aromatics fall into the
    /// hydrophobic/polar buckets here; [`ResidueCategory::Aromatic`] exists
    /// for the summary chips only.
    #[must_use]
    pub fn classify(code: char) -> Self {
        match code.to_ascii_uppercase() {
            'K' | 'R' | 'H' => Self::ChargedPositive,
            'D' | 'E' => Self::ChargedNegative,
            'A' | 'V' | 'L' | 'I' | 'M' | 'F' | 'W' | 'P' => Self::Hydrophobic,
            'S' | 'T' | 'N' | 'Q' | 'Y' | 'C' => Self::PolarUncharged,
            _ => Self::Other,
        }
    }

    /// Bar/chip color.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Self::ChargedPositive => Color::from_rgb(0.23, 0.51, 0.96),
            Self::ChargedNegative => Color::from_rgb(0.94, 0.27, 0.27),
            Self::Hydrophobic => Color::from_rgb(0.96, 0.62, 0.04),
            Self::PolarUncharged => Color::from_rgb(0.13, 0.77, 0.37),
            Self::Aromatic => Color::from_rgb(0.55, 0.36, 0.96),
            Self::Other => Color::from_rgb(0.58, 0.64, 0.72),
        }
    }

    /// Display label for the category chips.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::ChargedPositive => "Positive",
            Self::ChargedNegative => "Negative",
            Self::Hydrophobic => "Hydrophobic",
            Self::PolarUncharged => "Polar",
            Self::Aromatic => "Aromatic",
            Self::Other => "Other",
        }
    }
}

/// Registry key for one chain's chart.
#[must_use]
pub fn chart_key(pdb_id: &str, chain_id: &str) -> String {
    format!("{pdb_id}-{chain_id}")
}

/// Owner of all live chart handles.
#[derive(Debug, Default)]
pub struct ChartRegistry {
    charts: BTreeMap<String, ChartHandle>,
}

impl ChartRegistry {
    /// Rebuild the charts for `pdb_id` from a fresh composition payload.
    ///
    /// Existing charts for this structure are destroyed first; each chain's
    /// chart is removed before its replacement is inserted.
    pub fn rebuild(&mut self, pdb_id: &str, composition: &SequenceComposition) {
        let prefix = format!("{pdb_id}-");
        self.charts.retain(|key, _| !key.starts_with(&prefix));

        for (chain_id, chain) in &composition.chains {
            let key = chart_key(pdb_id, chain_id);
            self.charts.remove(&key);
            self.charts
                .insert(key.clone(), ChartHandle::create(key, chain_id, chain));
        }
    }

    /// Destroy every chart.
    pub fn clear(&mut self) {
        self.charts.clear();
    }

    /// Live chart handles in key order.
    pub fn iter(&self) -> impl Iterator<Item = &ChartHandle> {
        self.charts.values()
    }

    /// Number of live charts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.charts.len()
    }

    /// Whether no charts exist.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn composition(pdb_id: &str, chains: &[&str]) -> SequenceComposition {
        let chains: String = chains
            .iter()
            .map(|chain| {
                format!(
                    r#""{chain}":{{"sequence":"MKL","length":3,
                        "amino_acid_percentages":{{"M":33.3,"K":33.3,"L":33.3}}}}"#
                )
            })
            .collect::<Vec<_>>()
            .join(",");
        serde_json::from_str(&format!(r#"{{"pdb_id":"{pdb_id}","chains":{{{chains}}}}}"#)).unwrap()
    }

    #[test]
    fn rebuild_replaces_all_charts_for_the_structure() {
        let mut registry = ChartRegistry::default();
        registry.rebuild("1TUP", &composition("1TUP", &["A", "B", "C"]));
        assert_eq!(registry.len(), 3);

        // Fewer chains second time round: stale chart for "C" must go.
        registry.rebuild("1TUP", &composition("1TUP", &["A", "B"]));
        assert_eq!(registry.len(), 2);
        let keys: Vec<&str> = registry.iter().map(ChartHandle::key).collect();
        assert_eq!(keys, vec!["1TUP-A", "1TUP-B"]);
    }

    #[test]
    fn rebuild_for_a_new_structure_does_not_touch_other_keys() {
        let mut registry = ChartRegistry::default();
        registry.rebuild("1TUP", &composition("1TUP", &["A"]));
        registry.rebuild("2AC0", &composition("2AC0", &["A", "B"]));
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn clear_destroys_everything() {
        let mut registry = ChartRegistry::default();
        registry.rebuild("1TUP", &composition("1TUP", &["A"]));
        registry.clear();
        assert!(registry.is_empty());
    }

    #[test]
    fn classification_matches_category_tables() {
        assert_eq!(ResidueCategory::classify('k'), ResidueCategory::ChargedPositive);
        assert_eq!(ResidueCategory::classify('E'), ResidueCategory::ChargedNegative);
        assert_eq!(ResidueCategory::classify('W'), ResidueCategory::Hydrophobic);
        assert_eq!(ResidueCategory::classify('Y'), ResidueCategory::PolarUncharged);
        assert_eq!(ResidueCategory::classify('X'), ResidueCategory::Other);
    }
}
