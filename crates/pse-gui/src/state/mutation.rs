//! Mutation impact view model.
//!
//! The service is the single source of truth for severity; this module only
//! maps its qualitative `level` string onto display colors and labels, and
//! formats the property deltas.

use iced::Color;

/// Qualitative impact severity as reported by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImpactSeverity {
    High,
    Medium,
    Low,
    /// Missing or unrecognized level.
    Unknown,
}

impl ImpactSeverity {
    /// Map the service's `level` string; matching is case-insensitive.
    #[must_use]
    pub fn from_level(level: Option<&str>) -> Self {
        match level.map(str::to_ascii_lowercase).as_deref() {
            Some("high") => Self::High,
            Some("medium") => Self::Medium,
            Some("low") => Self::Low,
            _ => Self::Unknown,
        }
    }

    /// Display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::High => "High impact",
            Self::Medium => "Medium impact",
            Self::Low => "Low impact",
            Self::Unknown => "Impact unknown",
        }
    }

    /// Badge color.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Self::High => Color::from_rgb(0.94, 0.27, 0.27),
            Self::Medium => Color::from_rgb(0.96, 0.62, 0.04),
            Self::Low => Color::from_rgb(0.13, 0.77, 0.37),
            Self::Unknown => Color::from_rgb(0.58, 0.64, 0.72),
        }
    }
}

/// Format a property delta with an explicit sign (`+1`, `-30.2`, `0`).
#[must_use]
pub fn format_signed(value: f64) -> String {
    let formatted = if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    };
    if value > 0.0 {
        format!("+{formatted}")
    } else {
        formatted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_matching_is_case_insensitive() {
        assert_eq!(ImpactSeverity::from_level(Some("High")), ImpactSeverity::High);
        assert_eq!(ImpactSeverity::from_level(Some("MEDIUM")), ImpactSeverity::Medium);
        assert_eq!(ImpactSeverity::from_level(Some("low")), ImpactSeverity::Low);
    }

    #[test]
    fn unrecognized_levels_fall_back_to_unknown() {
        assert_eq!(ImpactSeverity::from_level(None), ImpactSeverity::Unknown);
        assert_eq!(
            ImpactSeverity::from_level(Some("severe")),
            ImpactSeverity::Unknown
        );
    }

    #[test]
    fn signed_formatting() {
        assert_eq!(format_signed(2.0), "+2");
        assert_eq!(format_signed(-30.2), "-30.2");
        assert_eq!(format_signed(0.0), "0");
    }
}
