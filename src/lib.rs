//! A fixed-template `DD/MM/YYYY` date editor.
//!
//! The editor keeps a 10-character mask, accepts keystrokes at any caret
//! position, rejects digits that could never form a valid day or month, and
//! commits a [`CivilDate`] once all eight digits describe a real date. The year
//! slot shows a regional era year ([`Era::BUDDHIST`] by default).

mod config;
mod consts;
mod editor;
mod era;
mod key;
mod mask;
mod prelude;
mod template;
mod types;

pub use config::{ConfigError, EditorConfig};
pub use consts::*;
pub use editor::{DateCallback, KeyOutcome, MaskedDateEditor};
pub use era::Era;
pub use key::{Key, NavKey, Selection};
pub use mask::{MaskError, MaskStatus, MaskText};
pub use template::{
    Field, editable_at_or_after, field_of, is_day_slot, is_editable, is_month_slot, is_year_slot,
    next_editable, next_field_start, prev_editable, snap_to_editable,
};
pub use types::{Day, Month, Year, days_in_month, is_leap_year};

use crate::prelude::*;
use std::str::FromStr;

/// A Gregorian calendar date. This is the value the editor commits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{}-{}-{}", year, month, day)]
pub struct CivilDate {
    year: Year,
    month: Month,
    day: Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year:04}-{month:02}")]
    InvalidDay { day: u8, month: u8, year: u16 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl CivilDate {
    /// Combines already validated parts, checking the day against the month.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the month of that year is shorter than `day`.
    pub fn new(year: Year, month: Month, day: Day) -> Result<Self, ParseError> {
        let day = Day::new(day.get(), year, month)?;
        Ok(Self { year, month, day })
    }

    /// Builds a date from raw numbers. Impossible days are an error, never rolled over.
    ///
    /// # Errors
    /// Returns the `ParseError` of the first component that is out of range.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn year_typed(&self) -> Year {
        self.year
    }

    pub const fn month_typed(&self) -> Month {
        self.month
    }

    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// `(year, month, day)` as plain numbers.
    pub const fn to_ymd(&self) -> (u16, u8, u8) {
        (self.year(), self.month(), self.day())
    }
}

impl FromStr for CivilDate {
    type Err = ParseError;

    /// Parses the ISO form `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(ISO_SEPARATOR).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(trimmed.to_owned()));
        };
        let number = |part: &str| {
            part.parse::<u16>()
                .map_err(|_| ParseError::InvalidFormat(trimmed.to_owned()))
        };
        let month = u8::try_from(number(*month)?)
            .map_err(|_| ParseError::InvalidFormat(trimmed.to_owned()))?;
        let day = u8::try_from(number(*day)?)
            .map_err(|_| ParseError::InvalidFormat(trimmed.to_owned()))?;
        Self::from_ymd(number(*year)?, month, day)
    }
}

impl TryFrom<(u16, u8, u8)> for CivilDate {
    type Error = ParseError;

    fn try_from((year, month, day): (u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::from_ymd(year, month, day)
    }
}

impl serde::Serialize for CivilDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CivilDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
