//! Search bar and candidate list.

use iced::widget::{Space, button, column, container, pick_list, row, text, text_input};
use iced::{Alignment, Element, Length};

use crate::message::Message;
use crate::state::search::{CandidateEntry, SPECIES, SearchMode, SearchState};
use crate::state::session::PanelState;
use crate::theme::{ERROR, SPACING_SM, SPACING_XS, TEXT_PRIMARY, TEXT_SECONDARY};

/// Mode selector, input, species picker and submit button.
pub fn view_search_bar(search: &SearchState) -> Element<'_, Message> {
    let mode = pick_list(
        SearchMode::ALL,
        Some(search.mode),
        Message::SearchModeChanged,
    )
    .text_size(13);

    let placeholder = match search.mode {
        SearchMode::Gene => "Gene symbol, e.g. TP53",
        SearchMode::PdbId => "PDB id, e.g. 1TUP",
    };
    let input = text_input(placeholder, &search.input)
        .on_input(Message::SearchInputChanged)
        .on_submit(Message::SearchSubmitted)
        .size(13)
        .width(Length::Fill);

    let mut bar = row![mode, Space::new().width(SPACING_SM), input]
        .align_y(Alignment::Center)
        .spacing(SPACING_XS);

    if search.mode == SearchMode::Gene {
        let species_options: Vec<String> = SPECIES.iter().map(ToString::to_string).collect();
        let species = pick_list(
            species_options,
            Some(search.species.clone()),
            Message::SpeciesSelected,
        )
        .text_size(13);
        bar = bar.push(Space::new().width(SPACING_SM)).push(species);
    }

    let submit_label = if search.in_flight { "Searching…" } else { "Search" };
    let mut submit = button(text(submit_label).size(13));
    if !search.in_flight {
        submit = submit.on_press(Message::SearchSubmitted);
    }

    bar.push(Space::new().width(SPACING_SM)).push(submit).into()
}

/// The candidate list for the active query.
pub fn view_candidates(search: &SearchState) -> Element<'_, Message> {
    let header = match &search.active_query {
        Some(query) => format!(
            "{} — {} structure{}",
            query.describe(),
            search.candidates.len(),
            if search.candidates.len() == 1 { "" } else { "s" }
        ),
        None => "Results".to_string(),
    };

    let mut list = column![text(header).size(14).color(TEXT_PRIMARY)].spacing(SPACING_SM);
    for candidate in &search.candidates {
        list = list.push(view_candidate_row(candidate));
    }
    list.into()
}

fn view_candidate_row(candidate: &CandidateEntry) -> Element<'_, Message> {
    let summary: Element<'_, Message> = match &candidate.info {
        PanelState::Ready(info) => {
            let title = info.title.as_deref().unwrap_or("Untitled entry");
            let line = match (&info.resolution, info.method.as_deref()) {
                (Some(resolution), Some(method)) => format!("{method} · {resolution} Å"),
                (None, Some(method)) => method.to_string(),
                (Some(resolution), None) => format!("{resolution} Å"),
                (None, None) => String::new(),
            };
            column![
                text(title).size(12).color(TEXT_SECONDARY),
                text(line).size(11).color(TEXT_SECONDARY),
            ]
            .spacing(2)
            .into()
        }
        PanelState::Failed(_) => text("details unavailable").size(11).color(ERROR).into(),
        _ => text("loading…").size(11).color(TEXT_SECONDARY).into(),
    };

    let content = column![
        text(&candidate.pdb_id).size(14).color(TEXT_PRIMARY),
        summary,
    ]
    .spacing(SPACING_XS);

    button(container(content).width(Length::Fill).padding(SPACING_SM))
        .on_press(Message::CandidateSelected(candidate.pdb_id.clone()))
        .style(button::secondary)
        .width(Length::Fill)
        .into()
}
