//! Name and birth date inputs at the top of the page.

use bevy_egui::egui;

use crate::format::Locale;
use crate::time::CurrentSnapshot;

use super::{UiState, colors, icons};

/// Form labels per locale: (name, birth date, date hint).
fn labels(locale: Locale) -> (&'static str, &'static str, &'static str) {
    match locale {
        Locale::PtBr => ("Nome", "Data de Nascimento", "AAAA-MM-DD"),
        Locale::EnUs => ("Name", "Birth date", "YYYY-MM-DD"),
    }
}

/// Render the input strip. Edits land in `ui_state`; the caller publishes them.
pub fn render_form(ui: &mut egui::Ui, ui_state: &mut UiState, current: &CurrentSnapshot) {
    let (name_label, birth_label, hint) = labels(ui_state.locale);

    egui::Frame::NONE
        .fill(colors::HEADER_BG)
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::same(16))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing.x = 12.0;

                ui.label(egui::RichText::new(icons::USER).color(colors::TEXT));
                ui.label(egui::RichText::new(name_label).color(colors::TEXT));
                ui.add(egui::TextEdit::singleline(&mut ui_state.name).desired_width(160.0));

                ui.label(egui::RichText::new(icons::BIRTHDAY).color(colors::TEXT));
                ui.label(egui::RichText::new(birth_label).color(colors::TEXT));
                ui.add(
                    egui::TextEdit::singleline(&mut ui_state.birth_text)
                        .hint_text(hint)
                        .desired_width(110.0),
                );

                ui.label(egui::RichText::new(icons::LANGUAGE).color(colors::TEXT));
                egui::ComboBox::from_id_salt("locale")
                    .selected_text(ui_state.locale.to_string())
                    .show_ui(ui, |ui| {
                        for locale in Locale::ALL {
                            ui.selectable_value(&mut ui_state.locale, locale, locale.to_string());
                        }
                    });
            });

            if let Some(error) = &current.error {
                ui.add_space(6.0);
                ui.label(
                    egui::RichText::new(format!("{} {}", icons::WARNING, error))
                        .color(colors::ERROR),
                );
            }
        });
}
