//! Lunar phase from a calendar day.
//!
//! A closed-form approximation: days elapsed since a known new moon, folded
//! into one synodic month. Good to within a day, which is all a ritual
//! calendar needs.

use chrono::Datelike;

use cel_core::responses::MoonReport;
use cel_core::{CalendarDay, MoonPhase};

/// Mean length of a synodic month in days.
pub const SYNODIC_MONTH_DAYS: f64 = 29.530_588_67;

/// A new moon: 2000-01-06, as days from the common era.
const REFERENCE_NEW_MOON_CE_DAY: i32 = 730_125;

/// Position of `day` within the synodic month, in `[0, 1)`.
///
/// Days before the reference new moon wrap around instead of going negative.
#[must_use]
pub fn phase_fraction(day: CalendarDay) -> f64 {
    let elapsed = f64::from(day.date().num_days_from_ce() - REFERENCE_NEW_MOON_CE_DAY);
    let fraction = elapsed.rem_euclid(SYNODIC_MONTH_DAYS) / SYNODIC_MONTH_DAYS;
    if fraction >= 1.0 { 0.0 } else { fraction }
}

/// Bucket a fraction into one of the eight phases. Each phase is centred on
/// its nominal position, so `new` covers `[0.9375, 1) ∪ [0, 0.0625)`.
#[must_use]
pub fn phase_for_fraction(fraction: f64) -> MoonPhase {
    let octant = (fraction * 8.0 + 0.5).floor();
    // `octant` is in 0..=8 for fractions in [0, 1).
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let index = (octant as usize) % MoonPhase::ALL.len();
    MoonPhase::ALL[index]
}

#[must_use]
pub fn moon_phase(day: CalendarDay) -> MoonPhase {
    phase_for_fraction(phase_fraction(day))
}

#[must_use]
pub fn moon_report(day: CalendarDay) -> MoonReport {
    let fraction = phase_fraction(day);
    let phase = phase_for_fraction(fraction);
    MoonReport {
        date: day,
        phase,
        name: phase.display_name().to_string(),
        emoji: phase.emoji().to_string(),
        description: phase.description().to_string(),
        fraction,
    }
}
