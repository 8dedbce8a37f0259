//! Date-seed derivation.
//!
//! A seed is `day_of_year`, plus the sum of the character codes of an
//! optional lowercased label. It is a pure function of its inputs: no clock,
//! no randomness.

use std::fmt;

use cel_core::{CalendarDay, MoonPhase, ZodiacSign};

/// Deterministic non-negative integer used to index content tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Seed(u64);

impl Seed {
    /// Derive a seed from a day and an optional free-form label.
    #[must_use]
    pub fn derive(day: CalendarDay, label: Option<&str>) -> Self {
        let base = u64::from(day.day_of_year());
        Self(base + label.map_or(0, label_sum))
    }

    /// Seed shared by every sign on a given day.
    #[must_use]
    pub fn for_day(day: CalendarDay) -> Self {
        Self::derive(day, None)
    }

    #[must_use]
    pub fn for_sign(day: CalendarDay, sign: ZodiacSign) -> Self {
        Self::derive(day, Some(sign.as_str()))
    }

    #[must_use]
    pub fn for_phase(day: CalendarDay, phase: MoonPhase) -> Self {
        Self::derive(day, Some(phase.as_str()))
    }

    #[must_use]
    pub const fn from_raw(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// `seed mod len`, always in `[0, len)`.
    ///
    /// `len` must be non-zero; every table in a loaded catalog is.
    #[must_use]
    pub fn index_into(self, len: usize) -> usize {
        debug_assert!(len > 0, "index_into called with an empty table");
        let len = len as u64;
        // The remainder is below `len`, which came from a usize.
        #[allow(clippy::cast_possible_truncation)]
        let index = (self.0 % len) as usize;
        index
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Case-insensitive sum of character codes.
fn label_sum(label: &str) -> u64 {
    label
        .chars()
        .flat_map(char::to_lowercase)
        .map(|c| u64::from(u32::from(c)))
        .sum()
}
