//! Structure metadata and basic analysis panels.

use iced::widget::{Space, button, column, row, text};
use iced::Element;
use pse_api::types::{StructureAnalysis, StructureInfo};

use crate::message::Message;
use crate::state::session::PanelState;
use crate::theme::{ACCENT, SPACING_SM, SPACING_XS, TEXT_SECONDARY};
use crate::view::{detail_line, panel, panel_body, warning_line};

/// Entry metadata panel, with external links to the public archives.
pub fn view_info_panel<'a>(
    pdb_id: &'a str,
    info: &'a PanelState<StructureInfo>,
) -> Element<'a, Message> {
    let body = panel_body(info, |info| {
        let mut lines = column![].spacing(SPACING_XS);
        if let Some(title) = &info.title {
            lines = lines.push(detail_line("Title", title.clone()));
        }
        if let Some(resolution) = &info.resolution {
            lines = lines.push(detail_line("Resolution", format!("{resolution} Å")));
        }
        if let Some(method) = &info.method {
            lines = lines.push(detail_line("Method", method.clone()));
        }
        if let Some(organism) = &info.organism {
            lines = lines.push(detail_line("Organism", organism.clone()));
        }
        if let Some(release_date) = &info.release_date {
            lines = lines.push(detail_line("Released", release_date.clone()));
        }
        if let Some(length) = info.length {
            lines = lines.push(detail_line("Length", format!("{length} residues")));
        }

        let links = row![
            link_button("View on RCSB", format!("https://www.rcsb.org/structure/{pdb_id}")),
            link_button(
                "Open in Mol*",
                format!("https://molstar.org/viewer/?pdb={pdb_id}"),
            ),
        ]
        .spacing(SPACING_SM);

        column![lines, Space::new().height(SPACING_SM), links]
            .spacing(SPACING_XS)
            .into()
    });
    panel("Structure", body)
}

fn link_button(label: &str, url: String) -> Element<'_, Message> {
    button(text(label).size(12).color(ACCENT))
        .on_press(Message::OpenUrl(url))
        .style(button::text)
        .padding(SPACING_XS)
        .into()
}

/// Basic analysis panel: counts and secondary structure summary.
pub fn view_analysis_panel(analysis: &PanelState<StructureAnalysis>) -> Element<'_, Message> {
    let body = panel_body(analysis, |analysis| {
        let mut lines = column![].spacing(SPACING_XS);
        if let Some(chains) = analysis.num_chains {
            lines = lines.push(detail_line("Chains", chains.to_string()));
        }
        if let Some(residues) = analysis.num_residues {
            lines = lines.push(detail_line("Residues", residues.to_string()));
        }
        if let Some(atoms) = analysis.num_atoms {
            lines = lines.push(detail_line("Atoms", atoms.to_string()));
        }

        if let Some(ss) = &analysis.secondary_structure {
            lines = lines.push(Space::new().height(SPACING_XS));
            lines = lines.push(
                text("Secondary structure")
                    .size(13)
                    .color(TEXT_SECONDARY),
            );
            lines = lines.push(detail_line("Helix", ss_count(ss.helix.as_ref(), ss.helix_pct)));
            lines = lines.push(detail_line(
                "Beta sheet",
                ss_count(ss.beta_sheet.as_ref(), ss.beta_pct),
            ));
            lines = lines.push(detail_line("Coil", ss_count(ss.coil.as_ref(), ss.coil_pct)));
            if let Some(source) = &ss.source {
                lines = lines.push(detail_line("Source", source.clone()));
            }
            if let Some(note) = &ss.note {
                lines = lines.push(warning_line(note));
            }
        }
        lines.into()
    });
    panel("Analysis", body)
}

fn ss_count(count: Option<&pse_api::types::NumberOrText>, pct: Option<f64>) -> String {
    let count = count.map_or_else(|| "N/A".to_string(), ToString::to_string);
    match pct {
        Some(pct) => format!("{count} ({pct:.1}%)"),
        None => count,
    }
}
