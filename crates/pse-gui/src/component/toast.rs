//! Toast notification component.
//!
//! Shows a temporary notification message that auto-dismisses after a timeout.

use iced::widget::{Space, button, container, row, text};
use iced::{Alignment, Element, Length};

use crate::message::Message;
use crate::theme::{ERROR, SPACING_MD, SPACING_SM, SPACING_XS, SUCCESS, TEXT_SECONDARY, WARNING, raised};

/// Toast notification state.
#[derive(Debug, Clone)]
pub struct ToastState {
    /// The message to display.
    pub message: String,
    /// Toast type determines the icon and styling.
    pub toast_type: ToastType,
}

/// Type of toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastType {
    /// Success notification.
    Success,
    /// Warning notification.
    Warning,
    /// Error notification.
    Error,
}

impl ToastType {
    /// Icon color for this toast type.
    pub fn color(&self) -> iced::Color {
        match self {
            ToastType::Success => SUCCESS,
            ToastType::Warning => WARNING,
            ToastType::Error => ERROR,
        }
    }

    fn glyph(self) -> &'static str {
        match self {
            ToastType::Success => "✓",
            ToastType::Warning => "⚠",
            ToastType::Error => "✕",
        }
    }
}

/// Toast message for handling toast events.
#[derive(Debug, Clone)]
pub enum ToastMessage {
    /// Dismiss the toast.
    Dismiss,
    /// Show a new toast (used internally).
    Show(ToastState),
}

impl ToastState {
    /// A success toast.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            toast_type: ToastType::Success,
        }
    }

    /// A warning toast.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            toast_type: ToastType::Warning,
        }
    }

    /// An error toast.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            toast_type: ToastType::Error,
        }
    }
}

/// Renders a toast notification.
///
/// The toast appears at the bottom-right of the screen and can be dismissed.
pub fn view_toast(state: &ToastState) -> Element<'_, Message> {
    let icon = text(state.toast_type.glyph())
        .size(16)
        .color(state.toast_type.color());

    let message_text = text(&state.message).size(14).color(TEXT_SECONDARY);

    let dismiss_btn = button(text("✕").size(12))
        .on_press(Message::Toast(ToastMessage::Dismiss))
        .padding(SPACING_XS);

    let content = row![
        icon,
        Space::new().width(SPACING_SM),
        message_text,
        Space::new().width(SPACING_SM),
        dismiss_btn,
    ]
    .align_y(Alignment::Center)
    .spacing(SPACING_XS);

    container(content)
        .padding([SPACING_SM, SPACING_MD])
        .width(Length::Shrink)
        .style(raised)
        .into()
}
