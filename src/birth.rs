//! Birth date parsing and validation.
//!
//! Whatever the form hands us (ISO text from a date field, or the pt-BR
//! `DD/MM/YYYY` rendering) is normalized here to a `NaiveDate`, or rejected
//! before any arithmetic runs.

use chrono::{Datelike, NaiveDate};

use crate::types::MIN_BIRTH_YEAR;

/// Reasons a birth date cannot be used.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BirthDateError {
    #[error("invalid birth date {input:?} (expected YYYY-MM-DD or DD/MM/YYYY)")]
    Unparseable { input: String },

    #[error("birth date {0} is before {min}-01-01", min = MIN_BIRTH_YEAR)]
    BeforeMinimum(NaiveDate),

    #[error("birth date {date} is after today ({today})")]
    InFuture { date: NaiveDate, today: NaiveDate },
}

/// Accepted input layouts, tried in order.
const FORMATS: [&str; 2] = ["%Y-%m-%d", "%d/%m/%Y"];

/// Parse raw text into a calendar date.
///
/// Rejects impossible dates such as `2023-02-29`. Does not check the range;
/// see [`validate_birth_date`].
pub fn parse_birth_date(input: &str) -> Result<NaiveDate, BirthDateError> {
    let trimmed = input.trim();
    FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| BirthDateError::Unparseable {
            input: input.to_string(),
        })
}

/// Check that `date` lies between 1900-01-01 and `today`, inclusive.
pub fn validate_birth_date(date: NaiveDate, today: NaiveDate) -> Result<NaiveDate, BirthDateError> {
    if date.year() < MIN_BIRTH_YEAR {
        return Err(BirthDateError::BeforeMinimum(date));
    }
    if date > today {
        return Err(BirthDateError::InFuture { date, today });
    }
    Ok(date)
}

/// Parse and validate in one step.
pub fn parse_and_validate(input: &str, today: NaiveDate) -> Result<NaiveDate, BirthDateError> {
    validate_birth_date(parse_birth_date(input)?, today)
}
