//! Mutation impact panel.

use iced::widget::{Space, button, column, container, row, text, text_input};
use iced::{Alignment, Element, Length};
use pse_api::types::{AminoAcidProperties, MutationImpact};

use crate::message::Message;
use crate::state::mutation::{ImpactSeverity, format_signed};
use crate::state::session::MutationPanel;
use crate::theme::{SPACING_SM, SPACING_XS, TEXT_PRIMARY, TEXT_SECONDARY};
use crate::view::{detail_line, panel, panel_body, warning_line};

pub fn view_mutation_panel(mutation: &MutationPanel) -> Element<'_, Message> {
    let input = text_input("Mutation, e.g. A:K33E", &mutation.input)
        .on_input(Message::MutationInputChanged)
        .on_submit(Message::MutationSubmitted)
        .size(13)
        .width(Length::Fill);
    let submit = button(text("Assess").size(13)).on_press(Message::MutationSubmitted);
    let bar = row![input, Space::new().width(SPACING_SM), submit].align_y(Alignment::Center);

    let result = panel_body(&mutation.result, view_impact);

    panel(
        "Mutation impact",
        column![bar, Space::new().height(SPACING_SM), result].into(),
    )
}

fn view_impact(impact: &MutationImpact) -> Element<'_, Message> {
    let mut lines = column![].spacing(SPACING_XS);

    if let Some(assessment) = &impact.impact_assessment {
        let severity = ImpactSeverity::from_level(assessment.level.as_deref());
        let mut badge_line = row![
            container(text(severity.label()).size(12).color(severity.color()))
                .padding([SPACING_XS, SPACING_SM]),
        ]
        .spacing(SPACING_SM)
        .align_y(Alignment::Center);
        if let Some(score) = assessment.score {
            badge_line = badge_line.push(
                text(format!("score {score:.0}")).size(12).color(TEXT_SECONDARY),
            );
        }
        lines = lines.push(badge_line);
        if let Some(description) = &assessment.description {
            lines = lines.push(text(description.clone()).size(13).color(TEXT_PRIMARY));
        }
        for reason in &assessment.reasons {
            lines = lines.push(text(format!("• {reason}")).size(12).color(TEXT_SECONDARY));
        }
    }

    if let (Some(wild_type), Some(mutant)) = (&impact.wild_type, &impact.mutant) {
        lines = lines.push(Space::new().height(SPACING_XS));
        lines = lines.push(detail_line("Wild type", describe_residue(wild_type)));
        lines = lines.push(detail_line("Mutant", describe_residue(mutant)));
    }

    if let Some(changes) = &impact.changes {
        if let Some(charge) = changes.charge_change {
            lines = lines.push(detail_line("Charge change", format_signed(charge)));
        }
        if let Some(volume) = changes.volume_change {
            lines = lines.push(detail_line("Volume change", format!("{} Å³", format_signed(volume))));
        }
        if changes.hydrophobicity_change == Some(true) {
            lines = lines.push(detail_line("Hydrophobicity", "changes".to_string()));
        }
        if changes.polarity_change == Some(true) {
            lines = lines.push(detail_line("Polarity", "changes".to_string()));
        }
    }

    if let Some(context) = &impact.structural_context {
        if let Some(ss) = &context.secondary_structure {
            lines = lines.push(detail_line("Local structure", ss.clone()));
        }
        if let Some(warning) = &context.warning {
            lines = lines.push(warning_line(warning));
        }
        if context.matches_wt == Some(false) {
            lines = lines.push(warning_line(
                "The residue in the structure does not match the stated wild type",
            ));
        }
        if let Some(error) = &context.error {
            lines = lines.push(warning_line(error));
        }
    }

    lines.into()
}

fn describe_residue(properties: &AminoAcidProperties) -> String {
    let name = properties.name.as_deref().unwrap_or(&properties.aa);
    let mut parts = vec![format!("{name} ({})", properties.aa)];
    if let Some(charge) = properties.charge {
        parts.push(format!("charge {}", format_signed(charge)));
    }
    if let Some(volume) = properties.volume {
        parts.push(format!("{volume:.1} Å³"));
    }
    if properties.hydrophobic == Some(true) {
        parts.push("hydrophobic".to_string());
    }
    parts.join(", ")
}
