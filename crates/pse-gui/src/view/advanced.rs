//! Advanced analysis panel: bonds, bridges, SASA, hydrophobicity.

use iced::Element;
use iced::widget::{Space, column, text};
use pse_api::types::AdvancedAnalysis;

use crate::message::Message;
use crate::state::session::PanelState;
use crate::theme::{SPACING_SM, SPACING_XS, TEXT_PRIMARY, TEXT_SECONDARY};
use crate::view::{detail_line, panel, panel_body, warning_line};

/// Salt bridges listed before truncating to a summary line.
const SALT_BRIDGE_DISPLAY_LIMIT: usize = 10;

pub fn view_advanced_panel(advanced: &PanelState<AdvancedAnalysis>) -> Element<'_, Message> {
    let body = panel_body(advanced, |advanced| {
        let mut lines = column![].spacing(SPACING_XS);

        if let Some(disulfide) = &advanced.disulfide_bonds {
            lines = lines.push(section_header("Disulfide bonds"));
            lines = lines.push(detail_line(
                "Count",
                disulfide.count.map_or_else(|| "N/A".to_string(), |c| c.to_string()),
            ));
            for bond in &disulfide.bonds {
                lines = lines.push(
                    text(format!("{} — {}  ({:.2} Å)", bond.cys1, bond.cys2, bond.distance))
                        .size(12)
                        .color(TEXT_SECONDARY),
                );
            }
        }

        if let Some(bridges) = &advanced.salt_bridges {
            lines = lines.push(Space::new().height(SPACING_SM));
            lines = lines.push(section_header("Salt bridges"));
            lines = lines.push(detail_line(
                "Count",
                bridges.count.map_or_else(|| "N/A".to_string(), |c| c.to_string()),
            ));
            for bridge in bridges.bridges.iter().take(SALT_BRIDGE_DISPLAY_LIMIT) {
                lines = lines.push(
                    text(format!(
                        "{} ↔ {}  ({:.2} Å)",
                        bridge.positive, bridge.negative, bridge.distance
                    ))
                    .size(12)
                    .color(TEXT_SECONDARY),
                );
            }
            if bridges.bridges.len() > SALT_BRIDGE_DISPLAY_LIMIT {
                lines = lines.push(
                    text(format!(
                        "… and {} more",
                        bridges.bridges.len() - SALT_BRIDGE_DISPLAY_LIMIT
                    ))
                    .size(12)
                    .color(TEXT_SECONDARY),
                );
            }
        }

        if let Some(hbonds) = &advanced.hydrogen_bonds {
            lines = lines.push(Space::new().height(SPACING_SM));
            lines = lines.push(section_header("Hydrogen bonds"));
            if let Some(backbone) = &hbonds.backbone_hbonds {
                lines = lines.push(detail_line("Backbone", backbone.to_string()));
            }
            if let Some(total) = &hbonds.total {
                lines = lines.push(detail_line("Total", total.to_string()));
            }
            if let Some(source) = &hbonds.source {
                lines = lines.push(detail_line("Source", source.clone()));
            }
            if let Some(note) = &hbonds.note {
                lines = lines.push(warning_line(note));
            }
        }

        if let Some(sasa) = &advanced.sasa_per_chain {
            lines = lines.push(Space::new().height(SPACING_SM));
            lines = lines.push(section_header("Solvent-accessible surface area"));
            for (chain, value) in sasa {
                // The map degenerates to a single error entry when the
                // computation failed server-side.
                if chain == "error" {
                    lines = lines.push(warning_line(value.to_string()));
                } else {
                    lines = lines.push(detail_line(chain, format!("{value} Å²")));
                }
            }
        }

        if let Some(hydrophobicity) = &advanced.hydrophobicity_per_chain {
            lines = lines.push(Space::new().height(SPACING_SM));
            lines = lines.push(section_header("Hydrophobicity per chain"));
            for (chain, ratio) in hydrophobicity {
                let value = match (ratio.hydrophobic_ratio, ratio.hydrophilic_ratio) {
                    (Some(phobic), Some(philic)) => {
                        format!("{phobic:.1}% hydrophobic / {philic:.1}% hydrophilic")
                    }
                    _ => "N/A".to_string(),
                };
                lines = lines.push(detail_line(chain, value));
            }
        }

        lines.into()
    });
    panel("Advanced analysis", body)
}

fn section_header(label: &str) -> Element<'_, Message> {
    text(label).size(13).color(TEXT_PRIMARY).into()
}
