//! Day-granularity dates and birth times.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A calendar date truncated to the day. Serializes as `YYYY-MM-DD`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct CalendarDay(NaiveDate);

impl CalendarDay {
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Build a day from its components, rejecting impossible dates such as
    /// February 30th.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, CoreError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| {
                CoreError::invalid_input(format!(
                    "invalid calendar date {year:04}-{month:02}-{day:02}"
                ))
            })
    }

    /// Parse an ISO `YYYY-MM-DD` date.
    pub fn parse(input: &str) -> Result<Self, CoreError> {
        let trimmed = input.trim();
        NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
            .map(Self)
            .map_err(|error| {
                CoreError::invalid_input(format!(
                    "invalid date '{trimmed}' (expected YYYY-MM-DD): {error}"
                ))
            })
    }

    #[must_use]
    pub const fn date(self) -> NaiveDate {
        self.0
    }

    /// 1 for January 1st, up to 366 for December 31st of a leap year.
    #[must_use]
    pub fn day_of_year(self) -> u32 {
        self.0.ordinal()
    }

    #[must_use]
    pub fn day_of_month(self) -> u32 {
        self.0.day()
    }

    #[must_use]
    pub fn month(self) -> u32 {
        self.0.month()
    }

    #[must_use]
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// The following day, or `None` at the end of chrono's representable range.
    #[must_use]
    pub fn succ(self) -> Option<Self> {
        self.0.succ_opt().map(Self)
    }

    /// `YYYY-MM-DD`.
    #[must_use]
    pub fn iso(self) -> String {
        self.0.format(DATE_FORMAT).to_string()
    }

    /// Long form used in e-mail bodies, e.g. `Wednesday, January 1, 2025`.
    #[must_use]
    pub fn long_form(self) -> String {
        self.0.format("%A, %B %-d, %Y").to_string()
    }
}

impl From<NaiveDate> for CalendarDay {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for CalendarDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for CalendarDay {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Local time of birth, minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct BirthTime(NaiveTime);

impl BirthTime {
    /// Parse `HH:MM` or `HH:MM:SS` (24-hour clock).
    pub fn parse(input: &str) -> Result<Self, CoreError> {
        let trimmed = input.trim();
        NaiveTime::parse_from_str(trimmed, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
            .map(Self)
            .map_err(|_| {
                CoreError::invalid_input(format!(
                    "invalid birth time '{trimmed}' (expected HH:MM)"
                ))
            })
    }

    #[must_use]
    pub fn hour(self) -> u32 {
        self.0.hour()
    }
}

impl FromStr for BirthTime {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
