//! View layer: pure functions from state to widgets.
//!
//! The window is a single page: search bar on top, candidate list on the
//! left, and the selected structure's panels (viewer, metadata, analyses,
//! charts, mutation, alignment, report) stacked on the right.

mod advanced;
mod alignment;
mod detail;
mod mutation;
mod report;
mod search;
mod sequence;
mod viewer;

use iced::widget::{Space, column, container, row, scrollable, stack, text};
use iced::{Alignment, Element, Length};

use crate::component::toast::view_toast;
use crate::message::Message;
use crate::state::AppState;
use crate::state::session::PanelState;
use crate::theme::{
    ERROR, SPACING_LG, SPACING_MD, SPACING_SM, SUCCESS, TEXT_PRIMARY, TEXT_SECONDARY, WARNING,
};

/// Render the whole application.
pub fn view_root(state: &AppState) -> Element<'_, Message> {
    let header = view_header(state);
    let search_bar = search::view_search_bar(&state.search);

    let body: Element<'_, Message> = if state.search.candidates.is_empty() {
        container(
            text("Search for a gene or PDB id to begin")
                .size(16)
                .color(TEXT_SECONDARY),
        )
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding(SPACING_LG)
        .into()
    } else {
        row![
            container(search::view_candidates(&state.search))
                .width(Length::Fixed(320.0)),
            Space::new().width(SPACING_MD),
            view_session(state),
        ]
        .into()
    };

    let page = column![
        header,
        Space::new().height(SPACING_SM),
        search_bar,
        Space::new().height(SPACING_MD),
        body,
    ]
    .padding(SPACING_LG);

    let content = scrollable(page).width(Length::Fill).height(Length::Fill);

    match &state.toast {
        Some(toast) => stack![
            content,
            container(view_toast(toast))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Alignment::End)
                .align_y(Alignment::End)
                .padding(SPACING_LG),
        ]
        .into(),
        None => content.into(),
    }
}

fn view_header(state: &AppState) -> Element<'_, Message> {
    let title = text("Protein Structure Explorer")
        .size(24)
        .color(TEXT_PRIMARY);

    let status: Element<'_, Message> = match state.service_online {
        Some(true) => text("service online").size(12).color(SUCCESS).into(),
        Some(false) => text("service offline").size(12).color(ERROR).into(),
        None => text("checking service…").size(12).color(TEXT_SECONDARY).into(),
    };

    row![title, Space::new().width(Length::Fill), status]
        .align_y(Alignment::Center)
        .into()
}

/// The selected structure's panel stack.
fn view_session(state: &AppState) -> Element<'_, Message> {
    let Some(pdb_id) = state.session.current() else {
        return container(
            text("Select a structure from the list")
                .size(14)
                .color(TEXT_SECONDARY),
        )
        .width(Length::Fill)
        .padding(SPACING_LG)
        .into();
    };

    column![
        viewer::view_viewer_panel(state),
        detail::view_info_panel(pdb_id, &state.session.info),
        detail::view_analysis_panel(&state.session.analysis),
        advanced::view_advanced_panel(&state.session.advanced),
        sequence::view_sequence_panel(state),
        mutation::view_mutation_panel(&state.session.mutation),
        alignment::view_alignment_panel(&state.session.alignment),
        report::view_report_panel(state),
    ]
    .spacing(SPACING_MD)
    .width(Length::Fill)
    .into()
}

// ====== SHARED PANEL HELPERS ======

/// Standard panel chrome: header plus body inside a card container.
pub(crate) fn panel<'a>(
    title: &'a str,
    body: Element<'a, Message>,
) -> Element<'a, Message> {
    container(
        column![
            text(title).size(16).color(TEXT_PRIMARY),
            Space::new().height(SPACING_SM),
            body,
        ]
        .width(Length::Fill),
    )
    .padding(SPACING_MD)
    .width(Length::Fill)
    .style(crate::theme::panel)
    .into()
}

/// Render a panel body according to its fetch state.
pub(crate) fn panel_body<'a, T>(
    state: &'a PanelState<T>,
    render: impl FnOnce(&'a T) -> Element<'a, Message>,
) -> Element<'a, Message> {
    match state {
        PanelState::Idle => text("—").size(13).color(TEXT_SECONDARY).into(),
        PanelState::Loading => text("Loading…").size(13).color(TEXT_SECONDARY).into(),
        PanelState::Failed(err) => text(err.to_string()).size(13).color(ERROR).into(),
        PanelState::Ready(value) => render(value),
    }
}

/// A label/value line used across the detail panels.
pub(crate) fn detail_line<'a>(label: &'a str, value: String) -> Element<'a, Message> {
    row![
        text(label).size(13).color(TEXT_SECONDARY).width(Length::Fixed(140.0)),
        text(value).size(13).color(TEXT_PRIMARY),
    ]
    .spacing(SPACING_SM)
    .into()
}

/// An inline warning line.
pub(crate) fn warning_line<'a>(
    message: impl iced::widget::text::IntoFragment<'a>,
) -> Element<'a, Message> {
    text(message).size(13).color(WARNING).into()
}
