//! Locale-aware rendering of snapshot values.
//!
//! The arithmetic emits raw kilometres and instants; this module is the only
//! place they turn into display strings.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::astro::{MoonPhase, ZodiacSign};
use crate::snapshot::OrbitalSnapshot;

/// Supported display locales.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    /// Brazilian Portuguese: `1.234.567`, `DD/MM/YYYY`
    #[default]
    PtBr,
    /// US English: `1,234,567`, `MM/DD/YYYY`
    EnUs,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown locale {0:?} (expected pt-BR or en-US)")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "pt-br" | "pt" => Ok(Locale::PtBr),
            "en-us" | "en" => Ok(Locale::EnUs),
            _ => Err(UnknownLocale(s.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Locale::PtBr => "pt-BR",
            Locale::EnUs => "en-US",
        })
    }
}

impl Locale {
    /// Both locales, in menu order.
    pub const ALL: [Locale; 2] = [Locale::PtBr, Locale::EnUs];

    fn group_separator(&self) -> char {
        match self {
            Locale::PtBr => '.',
            Locale::EnUs => ',',
        }
    }

    /// Whole kilometres with thousands grouping, rounded to the nearest km.
    pub fn format_km(&self, km: f64) -> String {
        if !km.is_finite() {
            return "-".to_string();
        }
        let whole = km.round();
        let digits = format!("{:.0}", whole.abs());

        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
        if whole < 0.0 {
            grouped.push('-');
        }
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(self.group_separator());
            }
            grouped.push(ch);
        }
        grouped
    }

    /// Calendar date in the locale's numeric layout.
    pub fn format_date(&self, date: NaiveDate) -> String {
        match self {
            Locale::PtBr => date.format("%d/%m/%Y").to_string(),
            Locale::EnUs => date.format("%m/%d/%Y").to_string(),
        }
    }

    /// Calendar date of an instant as seen in `zone`.
    pub fn format_instant_date<Tz: TimeZone>(&self, instant: &DateTime<Utc>, zone: &Tz) -> String {
        self.format_date(instant.with_timezone(zone).date_naive())
    }

    /// Localized moon phase name.
    pub fn moon_phase(&self, phase: MoonPhase) -> &'static str {
        match self {
            Locale::EnUs => phase.label(),
            Locale::PtBr => match phase {
                MoonPhase::New => "Nova",
                MoonPhase::WaxingCrescent => "Crescente",
                MoonPhase::FirstQuarter => "Quarto Crescente",
                MoonPhase::WaxingGibbous => "Gibosa Crescente",
                MoonPhase::Full => "Cheia",
                MoonPhase::WaningGibbous => "Gibosa Minguante",
                MoonPhase::LastQuarter => "Quarto Minguante",
                MoonPhase::WaningCrescent => "Minguante",
            },
        }
    }

    /// Localized zodiac sign name.
    pub fn zodiac_sign(&self, sign: ZodiacSign) -> &'static str {
        match self {
            Locale::EnUs => sign.label(),
            Locale::PtBr => match sign {
                ZodiacSign::Aries => "Áries",
                ZodiacSign::Taurus => "Touro",
                ZodiacSign::Gemini => "Gêmeos",
                ZodiacSign::Cancer => "Câncer",
                ZodiacSign::Leo => "Leão",
                ZodiacSign::Virgo => "Virgem",
                ZodiacSign::Libra => "Libra",
                ZodiacSign::Scorpio => "Escorpião",
                ZodiacSign::Sagittarius => "Sagitário",
                ZodiacSign::Capricorn => "Capricórnio",
                ZodiacSign::Aquarius => "Aquário",
                ZodiacSign::Pisces => "Peixes",
            },
        }
    }
}

/// Which reading a card shows. The UI picks an icon per kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CardKind {
    Total,
    Today,
    Remaining,
    EstimatedDate,
    SunDistance,
    MoonOrbits,
    MoonPhase,
    Zodiac,
}

/// One line of the display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportCard {
    pub kind: CardKind,
    pub text: String,
}

/// The fully localized page text for one snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnapshotReport {
    pub headline: String,
    pub cards: Vec<ReportCard>,
}

impl SnapshotReport {
    /// Render `snapshot` for `name`, with dates shown in `zone`.
    pub fn new<Tz: TimeZone>(
        name: &str,
        birth_date: NaiveDate,
        snapshot: &OrbitalSnapshot,
        locale: Locale,
        zone: &Tz,
    ) -> Self {
        let km = |v: f64| locale.format_km(v);
        let birth = locale.format_date(birth_date);
        let estimated = locale.format_instant_date(&snapshot.estimated_goal_date, zone);
        let phase = locale.moon_phase(snapshot.moon_phase);
        let phase_glyph = snapshot.moon_phase.emoji();
        let sign = locale.zodiac_sign(snapshot.zodiac_sign);
        let sign_glyph = snapshot.zodiac_sign.symbol();
        let lit = (snapshot.moon_illumination * 100.0).round();

        let (headline, lines) = match locale {
            Locale::PtBr => (
                format!("Distância percorrida ao redor do Sol por {name} desde {birth}:"),
                [
                    format!("{} km", km(snapshot.total_distance_km)),
                    format!("Hoje já percorreu {} km", km(snapshot.today_distance_km)),
                    format!(
                        "Faltam {} km para atingir {} km",
                        km(snapshot.remaining_to_goal_km),
                        km(snapshot.goal_distance_km)
                    ),
                    format!("Data estimada: {estimated}"),
                    format!(
                        "Distância aproximada da Terra ao Sol: {} km",
                        km(snapshot.earth_sun_distance_km)
                    ),
                    format!(
                        "A Lua deu aproximadamente {} voltas em torno da Terra desde seu nascimento.",
                        snapshot.moon_orbit_count
                    ),
                    format!("Fase atual da Lua: {phase_glyph} {phase} ({lit}% iluminada)"),
                    format!("Signo: {sign_glyph} {sign}"),
                ],
            ),
            Locale::EnUs => (
                format!("Distance traveled around the Sun by {name} since {birth}:"),
                [
                    format!("{} km", km(snapshot.total_distance_km)),
                    format!("Today so far: {} km", km(snapshot.today_distance_km)),
                    format!(
                        "{} km to go until {} km",
                        km(snapshot.remaining_to_goal_km),
                        km(snapshot.goal_distance_km)
                    ),
                    format!("Estimated date: {estimated}"),
                    format!(
                        "Approximate Earth-Sun distance: {} km",
                        km(snapshot.earth_sun_distance_km)
                    ),
                    format!(
                        "The Moon has circled the Earth about {} times since you were born.",
                        snapshot.moon_orbit_count
                    ),
                    format!("Current moon phase: {phase_glyph} {phase} ({lit}% lit)"),
                    format!("Sign: {sign_glyph} {sign}"),
                ],
            ),
        };

        let kinds = [
            CardKind::Total,
            CardKind::Today,
            CardKind::Remaining,
            CardKind::EstimatedDate,
            CardKind::SunDistance,
            CardKind::MoonOrbits,
            CardKind::MoonPhase,
            CardKind::Zodiac,
        ];
        let cards = kinds
            .into_iter()
            .zip(lines)
            .map(|(kind, text)| ReportCard { kind, text })
            .collect();

        Self { headline, cards }
    }
}
