//! Sequence composition panel with the per-chain bar charts.

use iced::widget::{Space, column, container, row, text};
use iced::{Alignment, Element};
use pse_api::types::CategoryStatistics;

use crate::message::Message;
use crate::state::AppState;
use crate::state::charts::ResidueCategory;
use crate::theme::{SPACING_SM, SPACING_XS, TEXT_PRIMARY, TEXT_SECONDARY};
use crate::view::{panel, panel_body};

pub fn view_sequence_panel(state: &AppState) -> Element<'_, Message> {
    let composition = &state.session.composition;
    let body = panel_body(composition, |composition| {
        let mut content = column![].spacing(SPACING_SM);
        for chart in state.charts.iter() {
            let chain = composition.chains.get(chart.chain_id());
            let length = chain.and_then(|c| c.length);
            let header = match length {
                Some(length) => format!("Chain {} — {length} residues", chart.chain_id()),
                None => format!("Chain {}", chart.chain_id()),
            };
            content = content.push(text(header).size(14).color(TEXT_PRIMARY));
            content = content.push(chart.view());
            if let Some(stats) = chain.and_then(|c| c.category_statistics.as_ref()) {
                content = content.push(view_category_chips(stats));
            }
            content = content.push(Space::new().height(SPACING_SM));
        }
        content.into()
    });
    panel("Sequence composition", body)
}

fn view_category_chips(stats: &CategoryStatistics) -> Element<'_, Message> {
    let chips = [
        (ResidueCategory::ChargedPositive, stats.charged_positive, stats.charged_positive_pct),
        (ResidueCategory::ChargedNegative, stats.charged_negative, stats.charged_negative_pct),
        (ResidueCategory::Hydrophobic, stats.hydrophobic, stats.hydrophobic_pct),
        (ResidueCategory::PolarUncharged, stats.polar_uncharged, stats.polar_uncharged_pct),
        (ResidueCategory::Aromatic, stats.aromatic, stats.aromatic_pct),
    ];

    let mut line = row![].spacing(SPACING_SM).align_y(Alignment::Center);
    for (category, count, pct) in chips {
        let label = match (count, pct) {
            (Some(count), Some(pct)) => {
                format!("{}: {count} ({pct:.1}%)", category.label())
            }
            (Some(count), None) => format!("{}: {count}", category.label()),
            _ => continue,
        };
        line = line.push(
            container(
                row![
                    text("●").size(11).color(category.color()),
                    text(label).size(11).color(TEXT_SECONDARY),
                ]
                .spacing(SPACING_XS)
                .align_y(Alignment::Center),
            )
            .padding(SPACING_XS),
        );
    }
    line.into()
}
