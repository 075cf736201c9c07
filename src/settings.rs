//! Startup configuration for the odometer.

use bevy::prelude::*;
use chrono::NaiveDate;

use crate::birth::parse_birth_date;
use crate::format::Locale;

/// Environment variable selecting the display locale (`pt-BR` or `en-US`).
pub const LOCALE_ENV: &str = "ODOMETER_LOCALE";

/// Environment variable overriding the initial birth date.
pub const BIRTH_DATE_ENV: &str = "ODOMETER_BIRTH_DATE";

/// Settings resource read when the app starts.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct OdometerSettings {
    /// Name shown in the headline. Opaque to the arithmetic.
    pub display_name: String,
    /// Birth date the form starts with.
    pub birth_date: NaiveDate,
    /// Number and date rendering.
    pub locale: Locale,
    /// Seconds between periodic refreshes.
    pub refresh_interval_secs: f32,
}

impl Default for OdometerSettings {
    fn default() -> Self {
        Self {
            display_name: "Sérgio".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1967, 6, 18).unwrap_or_default(),
            locale: Locale::PtBr,
            refresh_interval_secs: 1.0,
        }
    }
}

impl OdometerSettings {
    /// Defaults with environment overrides applied.
    ///
    /// Bad values are logged and ignored.
    pub fn from_env() -> Self {
        Self::default().with_overrides(
            std::env::var(LOCALE_ENV).ok().as_deref(),
            std::env::var(BIRTH_DATE_ENV).ok().as_deref(),
        )
    }

    /// Apply optional raw override values on top of `self`.
    pub fn with_overrides(mut self, locale: Option<&str>, birth_date: Option<&str>) -> Self {
        if let Some(raw) = locale {
            match raw.parse::<Locale>() {
                Ok(locale) => self.locale = locale,
                Err(e) => warn!("Ignoring {}: {}", LOCALE_ENV, e),
            }
        }
        if let Some(raw) = birth_date {
            match parse_birth_date(raw) {
                Ok(date) => self.birth_date = date,
                Err(e) => warn!("Ignoring {}: {}", BIRTH_DATE_ENV, e),
            }
        }
        self
    }
}
