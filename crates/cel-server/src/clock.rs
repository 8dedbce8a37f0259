//! Where "today" comes from.
//!
//! Handlers never read the system time directly; they ask the [`Clock`] in
//! the application state, which tests replace with a [`FixedClock`].

use std::fmt;

use cel_core::CalendarDay;

pub trait Clock: fmt::Debug + Send + Sync {
    fn today(&self) -> CalendarDay;
}

/// The server's local calendar date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> CalendarDay {
        CalendarDay::new(chrono::Local::now().date_naive())
    }
}

/// Always returns the same day.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub CalendarDay);

impl Clock for FixedClock {
    fn today(&self) -> CalendarDay {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_never_moves() {
        let day = CalendarDay::from_ymd(2025, 1, 1).unwrap();
        let clock = FixedClock(day);
        assert_eq!(clock.today(), day);
        assert_eq!(clock.today(), day);
    }
}
