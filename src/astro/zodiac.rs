//! Western (tropical) zodiac sign lookup by birth month and day.

use std::fmt;

use chrono::{Datelike, NaiveDate};

/// The twelve signs of the tropical zodiac.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    /// English display name.
    pub fn label(&self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }

    /// Unicode astrological symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            ZodiacSign::Aries => "\u{2648}",
            ZodiacSign::Taurus => "\u{2649}",
            ZodiacSign::Gemini => "\u{264A}",
            ZodiacSign::Cancer => "\u{264B}",
            ZodiacSign::Leo => "\u{264C}",
            ZodiacSign::Virgo => "\u{264D}",
            ZodiacSign::Libra => "\u{264E}",
            ZodiacSign::Scorpio => "\u{264F}",
            ZodiacSign::Sagittarius => "\u{2650}",
            ZodiacSign::Capricorn => "\u{2651}",
            ZodiacSign::Aquarius => "\u{2652}",
            ZodiacSign::Pisces => "\u{2653}",
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An inclusive (month, day) range belonging to one sign.
///
/// When `start` is later in the year than `end` the range wraps through
/// December 31.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ZodiacRule {
    pub start: (u32, u32),
    pub end: (u32, u32),
    pub sign: ZodiacSign,
}

impl ZodiacRule {
    const fn new(start: (u32, u32), end: (u32, u32), sign: ZodiacSign) -> Self {
        Self { start, end, sign }
    }

    /// Whether `(month, day)` falls inside this rule, both ends inclusive.
    pub fn contains(&self, month: u32, day: u32) -> bool {
        let md = (month, day);
        if self.start <= self.end {
            self.start <= md && md <= self.end
        } else {
            md >= self.start || md <= self.end
        }
    }
}

/// Sign rules ordered by cutover date within the calendar year.
///
/// Capricorn comes last and wraps into January.
pub const ZODIAC_TABLE: [ZodiacRule; 12] = [
    ZodiacRule::new((1, 20), (2, 18), ZodiacSign::Aquarius),
    ZodiacRule::new((2, 19), (3, 20), ZodiacSign::Pisces),
    ZodiacRule::new((3, 21), (4, 19), ZodiacSign::Aries),
    ZodiacRule::new((4, 20), (5, 20), ZodiacSign::Taurus),
    ZodiacRule::new((5, 21), (6, 20), ZodiacSign::Gemini),
    ZodiacRule::new((6, 21), (7, 22), ZodiacSign::Cancer),
    ZodiacRule::new((7, 23), (8, 22), ZodiacSign::Leo),
    ZodiacRule::new((8, 23), (9, 22), ZodiacSign::Virgo),
    ZodiacRule::new((9, 23), (10, 22), ZodiacSign::Libra),
    ZodiacRule::new((10, 23), (11, 21), ZodiacSign::Scorpio),
    ZodiacRule::new((11, 22), (12, 21), ZodiacSign::Sagittarius),
    ZodiacRule::new((12, 22), (1, 19), ZodiacSign::Capricorn),
];

/// Sign for a birth date, from its month and day only.
///
/// Total over the calendar: the latest cutover on or before the date wins,
/// and dates before the first cutover belong to the wrapping last rule.
pub fn zodiac_sign(birth_date: NaiveDate) -> ZodiacSign {
    let md = (birth_date.month(), birth_date.day());
    let index = ZODIAC_TABLE
        .iter()
        .rposition(|rule| rule.start <= md)
        .unwrap_or(ZODIAC_TABLE.len() - 1);
    ZODIAC_TABLE[index].sign
}
