//! Headline and stat cards.

use bevy_egui::egui;

use crate::format::{ReportCard, SnapshotReport};

use super::{colors, icons};

/// Render the headline and one card per reading.
///
/// A stale report (bad input since it was computed) is dimmed.
pub fn render_report(ui: &mut egui::Ui, report: &SnapshotReport, stale: bool) {
    let text_color = if stale { colors::TEXT_STALE } else { colors::TEXT };

    ui.add_space(12.0);
    ui.label(
        egui::RichText::new(&report.headline)
            .size(22.0)
            .strong()
            .color(text_color),
    );
    ui.add_space(12.0);

    for card in &report.cards {
        render_card(ui, card, text_color);
        ui.add_space(8.0);
    }
}

fn render_card(ui: &mut egui::Ui, card: &ReportCard, text_color: egui::Color32) {
    egui::Frame::NONE
        .fill(colors::CARD_BG)
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::same(18))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(icons::card_icon(card.kind))
                        .size(22.0)
                        .color(colors::ICON),
                );
                ui.label(egui::RichText::new(&card.text).size(18.0).color(text_color));
            });
        });
}

/// Shown until the first valid snapshot exists.
pub fn render_placeholder(ui: &mut egui::Ui, message: &str) {
    ui.add_space(24.0);
    ui.label(egui::RichText::new(message).size(18.0).color(colors::TEXT_STALE));
}
