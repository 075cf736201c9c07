//! Phosphor icon definitions for the UI.
//!
//! Icons are initialized via `setup_fonts` when the app starts.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::format::CardKind;

/// Resource to track if fonts have been initialized.
#[derive(Resource, Default)]
pub struct FontsInitialized(pub bool);

/// System to initialize Phosphor icon fonts.
/// Runs in EguiPrimaryContextPass where the egui context is guaranteed to be ready.
pub fn setup_fonts(mut contexts: EguiContexts, mut initialized: ResMut<FontsInitialized>) {
    if initialized.0 {
        return;
    }

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);

    ctx.set_fonts(fonts);
    initialized.0 = true;

    info!("Phosphor icon fonts initialized");
}

// Browse all icons at https://phosphoricons.com/

/// Name field
pub const USER: &str = egui_phosphor::regular::USER;
/// Birth date field
pub const BIRTHDAY: &str = egui_phosphor::regular::CALENDAR_BLANK;
/// Locale selector
pub const LANGUAGE: &str = egui_phosphor::regular::GLOBE;
/// Validation problem
pub const WARNING: &str = egui_phosphor::regular::WARNING;

/// Distance since birth
pub const SUN: &str = egui_phosphor::regular::SUN;
/// Distance today
pub const CLOCK: &str = egui_phosphor::regular::CLOCK;
/// Distance to the milestone
pub const FINISH: &str = egui_phosphor::regular::FLAG_CHECKERED;
/// Milestone date
pub const CALENDAR: &str = egui_phosphor::regular::CALENDAR;
/// Earth-Sun distance
pub const RULER: &str = egui_phosphor::regular::RULER;
/// Lunar orbit count
pub const ORBIT: &str = egui_phosphor::regular::ARROWS_CLOCKWISE;
/// Moon phase
pub const MOON: &str = egui_phosphor::regular::MOON;
/// Zodiac sign
pub const STAR: &str = egui_phosphor::regular::STAR;

/// Icon shown next to each reading.
pub fn card_icon(kind: CardKind) -> &'static str {
    match kind {
        CardKind::Total => SUN,
        CardKind::Today => CLOCK,
        CardKind::Remaining => FINISH,
        CardKind::EstimatedDate => CALENDAR,
        CardKind::SunDistance => RULER,
        CardKind::MoonOrbits => ORBIT,
        CardKind::MoonPhase => MOON,
        CardKind::Zodiac => STAR,
    }
}
