//! 3D viewer panel: toolbar plus the trace canvas.

use iced::widget::{Space, button, column, container, pick_list, row, text};
use iced::{Alignment, Element, Length};

use crate::message::Message;
use crate::state::AppState;
use crate::state::viewer::{ColorScheme, Representation};
use crate::theme::{ERROR, SPACING_SM, TEXT_SECONDARY};
use crate::view::panel;

pub fn view_viewer_panel(state: &AppState) -> Element<'_, Message> {
    let viewer = &state.viewer;

    let representation = pick_list(
        Representation::ALL,
        Some(viewer.style.representation),
        Message::RepresentationSelected,
    )
    .text_size(13);

    let scheme = pick_list(
        ColorScheme::ALL,
        Some(viewer.style.color_scheme),
        Message::ColorSchemeSelected,
    )
    .text_size(13);

    let reset = button(text("Reset view").size(13))
        .on_press(Message::ViewerResetClicked)
        .style(button::secondary);

    let toolbar = row![
        representation,
        Space::new().width(SPACING_SM),
        scheme,
        Space::new().width(Length::Fill),
        reset,
    ]
    .align_y(Alignment::Center);

    let canvas: Element<'_, Message> = if let Some(instance) = viewer.instance() {
        instance.view()
    } else if viewer.loading {
        centered_note("Loading coordinates…", TEXT_SECONDARY)
    } else if let Some(err) = &viewer.error {
        centered_note(&err.to_string(), ERROR)
    } else {
        centered_note("No structure loaded", TEXT_SECONDARY)
    };

    panel(
        "3D viewer",
        column![toolbar, Space::new().height(SPACING_SM), canvas].into(),
    )
}

fn centered_note(message: &str, color: iced::Color) -> Element<'static, Message> {
    container(text(message.to_string()).size(13).color(color))
        .width(Length::Fill)
        .height(Length::Fixed(420.0))
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
