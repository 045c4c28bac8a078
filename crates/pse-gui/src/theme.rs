//! Spacing constants and the shared color palette.
//!
//! The application runs on the stock dark theme; this module only carries
//! the constants and container styles shared across views.

use iced::widget::container;
use iced::{Border, Color, Shadow, Vector};

// ====== SPACING ======

pub const SPACING_XS: f32 = 4.0;
pub const SPACING_SM: f32 = 8.0;
pub const SPACING_MD: f32 = 16.0;
pub const SPACING_LG: f32 = 24.0;
pub const SPACING_XL: f32 = 32.0;

pub const BORDER_RADIUS_MD: f32 = 8.0;

// ====== PALETTE ======

pub const SURFACE: Color = Color {
    r: 0.12,
    g: 0.14,
    b: 0.18,
    a: 1.0,
};

pub const SURFACE_RAISED: Color = Color {
    r: 0.16,
    g: 0.18,
    b: 0.23,
    a: 1.0,
};

pub const BORDER: Color = Color {
    r: 0.27,
    g: 0.30,
    b: 0.36,
    a: 1.0,
};

pub const TEXT_PRIMARY: Color = Color {
    r: 0.92,
    g: 0.93,
    b: 0.95,
    a: 1.0,
};

pub const TEXT_SECONDARY: Color = Color {
    r: 0.61,
    g: 0.66,
    b: 0.72,
    a: 1.0,
};

pub const ACCENT: Color = Color {
    r: 0.35,
    g: 0.60,
    b: 0.98,
    a: 1.0,
};

pub const SUCCESS: Color = Color {
    r: 0.13,
    g: 0.77,
    b: 0.37,
    a: 1.0,
};

pub const WARNING: Color = Color {
    r: 0.96,
    g: 0.62,
    b: 0.04,
    a: 1.0,
};

pub const ERROR: Color = Color {
    r: 0.94,
    g: 0.27,
    b: 0.27,
    a: 1.0,
};

// ====== CONTAINER STYLES ======

/// Card-style panel container.
pub fn panel(_theme: &iced::Theme) -> container::Style {
    container::Style {
        background: Some(SURFACE.into()),
        border: Border {
            color: BORDER,
            width: 1.0,
            radius: BORDER_RADIUS_MD.into(),
        },
        ..container::Style::default()
    }
}

/// Raised container for toasts and overlays.
pub fn raised(_theme: &iced::Theme) -> container::Style {
    container::Style {
        background: Some(SURFACE_RAISED.into()),
        border: Border {
            color: BORDER,
            width: 1.0,
            radius: BORDER_RADIUS_MD.into(),
        },
        shadow: Shadow {
            color: Color {
                a: 0.4,
                ..Color::BLACK
            },
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        ..container::Style::default()
    }
}
