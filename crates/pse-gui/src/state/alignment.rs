//! Alignment view model helpers.

use pse_api::types::MissingRegion;

/// Display label of a missing region, `start-end` inclusive.
#[must_use]
pub fn region_label(region: MissingRegion) -> String {
    format!("{}-{}", region.start, region.end)
}

/// Residue count the region spans.
#[must_use]
pub fn region_span(region: MissingRegion) -> u64 {
    region.end.saturating_sub(region.start) + 1
}

/// Whether the service-reported length agrees with the region bounds.
#[must_use]
pub fn region_is_consistent(region: MissingRegion) -> bool {
    region.start <= region.end && region.length == region_span(region)
}

/// Format an optional percentage with one decimal, or an unavailable marker.
#[must_use]
pub fn percent_label(value: Option<f64>) -> String {
    value.map_or_else(|| "N/A".to_string(), |v| format!("{v:.1}%"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn single_residue_region_spans_one() {
        let region = MissingRegion {
            start: 42,
            end: 42,
            length: 1,
        };
        assert_eq!(region_span(region), 1);
        assert_eq!(region_label(region), "42-42");
        assert!(region_is_consistent(region));
    }

    #[test]
    fn percent_label_falls_back_when_absent() {
        assert_eq!(percent_label(Some(49.94)), "49.9%");
        assert_eq!(percent_label(None), "N/A");
    }

    proptest! {
        #[test]
        fn span_matches_inclusive_bounds(start in 1u64..5000, len in 1u64..500) {
            let end = start + len - 1;
            let region = MissingRegion { start, end, length: len };
            prop_assert_eq!(region_span(region), len);
            prop_assert!(region_is_consistent(region));
            prop_assert_eq!(region_label(region), format!("{start}-{end}"));
        }
    }
}
