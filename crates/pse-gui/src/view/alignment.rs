//! UniProt alignment panel.

use iced::widget::{Space, button, column, row, text, text_input};
use iced::{Alignment, Element, Length};
use pse_api::types::AlignmentResult;

use crate::message::Message;
use crate::state::alignment::{percent_label, region_label, region_span};
use crate::state::session::AlignmentPanel;
use crate::theme::{SPACING_SM, SPACING_XS, TEXT_PRIMARY, TEXT_SECONDARY};
use crate::view::{detail_line, panel, panel_body};

pub fn view_alignment_panel(alignment: &AlignmentPanel) -> Element<'_, Message> {
    let input = text_input("UniProt id (optional)", &alignment.uniprot_input)
        .on_input(Message::UniprotInputChanged)
        .on_submit(Message::AlignmentSubmitted)
        .size(13)
        .width(Length::Fill);
    let submit = button(text("Align").size(13)).on_press(Message::AlignmentSubmitted);
    let bar = row![input, Space::new().width(SPACING_SM), submit].align_y(Alignment::Center);

    let result = panel_body(&alignment.result, view_result);

    panel(
        "UniProt alignment",
        column![bar, Space::new().height(SPACING_SM), result].into(),
    )
}

fn view_result(result: &AlignmentResult) -> Element<'_, Message> {
    let mut lines = column![].spacing(SPACING_XS);

    if let Some(uniprot_id) = &result.uniprot_id {
        lines = lines.push(detail_line("Reference", uniprot_id.clone()));
    }
    if let Some(length) = result.uniprot_length {
        lines = lines.push(detail_line("Reference length", format!("{length} residues")));
    }

    for (chain, chain_alignment) in &result.chain_alignments {
        lines = lines.push(Space::new().height(SPACING_XS));
        lines = lines.push(text(format!("Chain {chain}")).size(13).color(TEXT_PRIMARY));
        if let Some(pdb_length) = chain_alignment.pdb_length {
            lines = lines.push(detail_line("Resolved length", format!("{pdb_length} residues")));
        }
        lines = lines.push(detail_line(
            "Identity",
            percent_label(chain_alignment.identity_percent),
        ));
        lines = lines.push(detail_line(
            "Coverage",
            percent_label(chain_alignment.coverage_percent),
        ));
        if let Some(score) = chain_alignment.alignment_score {
            lines = lines.push(detail_line("Score", format!("{score:.1}")));
        }
        if !chain_alignment.missing_regions.is_empty() {
            lines = lines.push(
                text(format!(
                    "Missing regions ({})",
                    chain_alignment.missing_regions.len()
                ))
                .size(12)
                .color(TEXT_SECONDARY),
            );
            for region in &chain_alignment.missing_regions {
                lines = lines.push(
                    text(format!(
                        "  {}  ({} residues)",
                        region_label(*region),
                        region_span(*region)
                    ))
                    .size(12)
                    .color(TEXT_SECONDARY),
                );
            }
        }
    }

    lines.into()
}
