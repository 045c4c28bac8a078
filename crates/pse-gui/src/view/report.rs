//! Analysis report panel with markdown rendering and export.

use iced::widget::{Space, button, column, container, markdown, row, text};
use iced::{Alignment, Element, Length, Theme};

use crate::message::Message;
use crate::state::AppState;
use crate::state::session::PanelState;
use crate::theme::{ERROR, SPACING_SM, TEXT_SECONDARY};
use crate::view::panel;

pub fn view_report_panel(state: &AppState) -> Element<'_, Message> {
    let report = &state.report;

    let generate = button(text("Generate report").size(13)).on_press(Message::ReportRequested);
    let mut export = button(text("Export…").size(13)).style(button::secondary);
    if report.can_export() {
        export = export.on_press(Message::ExportReportClicked);
    }
    let bar = row![generate, Space::new().width(SPACING_SM), export].align_y(Alignment::Center);

    let body: Element<'_, Message> = match &report.status {
        PanelState::Idle => text("No report generated yet")
            .size(13)
            .color(TEXT_SECONDARY)
            .into(),
        PanelState::Loading => text("Generating…").size(13).color(TEXT_SECONDARY).into(),
        PanelState::Failed(err) => text(err.to_string()).size(13).color(ERROR).into(),
        PanelState::Ready(()) => {
            // The markdown widget reports clicked URLs; route them to the
            // system browser.
            let rendered: Element<'_, Message> = markdown::view(report.items(), Theme::Dark)
                .map(|url| Message::OpenUrl(url.to_string()));
            container(rendered).width(Length::Fill).into()
        }
    };

    panel(
        "Report",
        column![bar, Space::new().height(SPACING_SM), body].into(),
    )
}
