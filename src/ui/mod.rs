//! UI module providing the egui odometer page.
//!
//! A single central panel: the input form on top, then the headline and one
//! card per reading from the current snapshot.

mod birth_form;
mod cards;
pub mod icons;

use bevy::prelude::*;
use bevy_egui::{EguiContexts, EguiPrimaryContextPass, egui};

use crate::format::{Locale, SnapshotReport};
use crate::settings::OdometerSettings;
use crate::time::{BirthInput, CurrentSnapshot, EvaluationClock};

/// Plugin that adds all UI systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<UiState>()
            .init_resource::<icons::FontsInitialized>()
            // Font initialization MUST run before any UI systems that use icons
            .add_systems(EguiPrimaryContextPass, icons::setup_fonts)
            .add_systems(
                EguiPrimaryContextPass,
                odometer_panel
                    .after(icons::setup_fonts)
                    .run_if(|init: Res<icons::FontsInitialized>| init.0),
            );
    }
}

/// Colors for the odometer page.
mod colors {
    use bevy_egui::egui::Color32;

    pub const BACKGROUND: Color32 = Color32::from_rgb(246, 124, 100);
    /// White at 10% (premultiplied)
    pub const HEADER_BG: Color32 = Color32::from_rgba_premultiplied(26, 26, 26, 26);
    /// Black at 20% (premultiplied)
    pub const CARD_BG: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 51);
    pub const TEXT: Color32 = Color32::WHITE;
    pub const TEXT_STALE: Color32 = Color32::from_rgb(235, 210, 200);
    pub const ICON: Color32 = Color32::from_rgb(255, 236, 160);
    pub const ERROR: Color32 = Color32::from_rgb(120, 0, 20);
}

/// Form buffers and display choices.
///
/// Edits go here first so typing does not touch [`BirthInput`] until the text
/// actually differs.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct UiState {
    pub name: String,
    pub birth_text: String,
    pub locale: Locale,
}

impl FromWorld for UiState {
    fn from_world(world: &mut World) -> Self {
        let locale = world
            .get_resource::<OdometerSettings>()
            .map(|s| s.locale)
            .unwrap_or_default();
        let (name, birth_text) = world
            .get_resource::<BirthInput>()
            .map(|input| (input.name.clone(), input.birth_text.clone()))
            .unwrap_or_default();
        Self {
            name,
            birth_text,
            locale,
        }
    }
}

impl UiState {
    /// The form contents as a [`BirthInput`].
    pub fn to_input(&self) -> BirthInput {
        BirthInput::new(self.name.clone(), self.birth_text.clone())
    }
}

/// System that renders the odometer page.
pub fn odometer_panel(
    mut contexts: EguiContexts,
    mut ui_state: ResMut<UiState>,
    mut input: ResMut<BirthInput>,
    current: Res<CurrentSnapshot>,
    clock: Res<EvaluationClock>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let zone = *clock.now().offset();
    let report = match (&current.snapshot, current.birth_date) {
        (Some(snapshot), Some(birth_date)) => Some(SnapshotReport::new(
            &ui_state.name,
            birth_date,
            snapshot,
            ui_state.locale,
            &zone,
        )),
        _ => None,
    };

    egui::CentralPanel::default()
        .frame(
            egui::Frame::NONE
                .fill(colors::BACKGROUND)
                .inner_margin(egui::Margin::same(16)),
        )
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                birth_form::render_form(ui, &mut ui_state, &current);

                match &report {
                    Some(report) => cards::render_report(ui, report, current.is_stale()),
                    None => cards::render_placeholder(ui, placeholder_text(ui_state.locale)),
                }
            });
        });

    // Publish only real edits so the refresh fires once per change
    input.set_if_neq(ui_state.to_input());
}

fn placeholder_text(locale: Locale) -> &'static str {
    match locale {
        Locale::PtBr => "Informe uma data de nascimento válida.",
        Locale::EnUs => "Enter a valid birth date.",
    }
}
