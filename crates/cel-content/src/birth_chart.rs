//! Sun and moon sign lookup from a birth date and time.
//!
//! Static calendar tables, not an ephemeris. The moon sign in particular is a
//! placeholder derived from the hour of birth.

use cel_core::responses::BirthSigns;
use cel_core::{BirthTime, CalendarDay, ZodiacSign};

/// First day of each sun sign, in calendar order. A date before the first
/// cusp belongs to the last sign of the previous year.
const SUN_SIGN_CUSPS: [(u32, u32, ZodiacSign); 12] = [
    (1, 20, ZodiacSign::Aquarius),
    (2, 19, ZodiacSign::Pisces),
    (3, 21, ZodiacSign::Aries),
    (4, 20, ZodiacSign::Taurus),
    (5, 21, ZodiacSign::Gemini),
    (6, 21, ZodiacSign::Cancer),
    (7, 23, ZodiacSign::Leo),
    (8, 23, ZodiacSign::Virgo),
    (9, 23, ZodiacSign::Libra),
    (10, 23, ZodiacSign::Scorpio),
    (11, 22, ZodiacSign::Sagittarius),
    (12, 22, ZodiacSign::Capricorn),
];

#[must_use]
pub fn sun_sign(day: CalendarDay) -> ZodiacSign {
    let key = (day.month(), day.day_of_month());
    SUN_SIGN_CUSPS
        .iter()
        .rev()
        .find(|(month, start, _)| (*month, *start) <= key)
        .map_or(ZodiacSign::Capricorn, |(_, _, sign)| *sign)
}

/// Two-hour bands starting at Aries for midnight.
#[must_use]
pub fn moon_sign(time: BirthTime) -> ZodiacSign {
    let band = (time.hour() / 2) as usize;
    ZodiacSign::ALL[band % ZodiacSign::ALL.len()]
}

#[must_use]
pub fn signs(day: CalendarDay, time: BirthTime) -> BirthSigns {
    BirthSigns {
        sun: sun_sign(day),
        moon: moon_sign(time),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("2000-01-01", ZodiacSign::Capricorn)]
    #[case("2000-01-19", ZodiacSign::Capricorn)]
    #[case("2000-01-20", ZodiacSign::Aquarius)]
    #[case("2000-02-18", ZodiacSign::Aquarius)]
    #[case("2000-02-19", ZodiacSign::Pisces)]
    #[case("2000-03-20", ZodiacSign::Pisces)]
    #[case("2000-03-21", ZodiacSign::Aries)]
    #[case("2000-04-19", ZodiacSign::Aries)]
    #[case("2000-04-20", ZodiacSign::Taurus)]
    #[case("2000-06-20", ZodiacSign::Gemini)]
    #[case("2000-07-22", ZodiacSign::Cancer)]
    #[case("2000-07-23", ZodiacSign::Leo)]
    #[case("2000-09-22", ZodiacSign::Virgo)]
    #[case("2000-10-22", ZodiacSign::Libra)]
    #[case("2000-11-21", ZodiacSign::Scorpio)]
    #[case("2000-12-21", ZodiacSign::Sagittarius)]
    #[case("2000-12-22", ZodiacSign::Capricorn)]
    #[case("2000-12-31", ZodiacSign::Capricorn)]
    fn sun_sign_cusps(#[case] date: &str, #[case] expected: ZodiacSign) {
        assert_eq!(sun_sign(CalendarDay::parse(date).unwrap()), expected);
    }

    #[rstest]
    #[case("00:00", ZodiacSign::Aries)]
    #[case("01:59", ZodiacSign::Aries)]
    #[case("02:00", ZodiacSign::Taurus)]
    #[case("13:30", ZodiacSign::Libra)]
    #[case("23:59", ZodiacSign::Pisces)]
    fn moon_sign_bands(#[case] time: &str, #[case] expected: ZodiacSign) {
        assert_eq!(moon_sign(BirthTime::parse(time).unwrap()), expected);
    }

    #[test]
    fn signs_combines_both_lookups() {
        let signs = signs(
            CalendarDay::parse("1990-08-15").unwrap(),
            BirthTime::parse("06:45").unwrap(),
        );
        assert_eq!(
            signs,
            BirthSigns {
                sun: ZodiacSign::Leo,
                moon: ZodiacSign::Cancer,
            }
        );
    }
}
