// Conversion between day numbers (days since 1970-01-01) and proleptic Gregorian dates.
//
// The Gregorian calendar repeats every 400 years: 97 leap years and 303 normal years, or
// 97*366 + 303*365 = 146097 days. Leap days are awkward when they sit in the middle of a
// year, so the normalized representation starts each year on March 1. The leap day then
// falls on the last day of the year, the last year of a quadrennium, and the last
// quadrennium of a century, and it comes out as a plain "overflow" of the division instead
// of needing its own branch. 2000-03-01 is the zero point:
//
// - 2000-03-01 to 2001-02-28
// - 2001-03-01 to 2002-02-28
// - 2002-03-01 to 2003-02-28
// - 2003-03-01 to 2004-02-29
//
// and the cycle ends with 2399-03-01 to 2400-02-29.

use crate::div_rem::ClampedDivRem;
use num_integer::Integer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct GregorianNormalizedDate {
    // Number of 400-year cycles since 2000-03-01.
    cycle: i128,
    // Century within the cycle (0-3).
    century: u8,
    // Quadrennium within the century (0-24).
    quadrennium: u8,
    // Year within the quadrennium (0-3).
    year: u8,
    // Day within the March-based year (0-365).
    day: u16,
}

const GREGORIAN_CYCLE_DAYS: u32 = 97 * 366 + 303 * 365;
const GREGORIAN_CENTURY_DAYS: u16 = 24 * 366 + 76 * 365;
#[allow(clippy::identity_op)]
const GREGORIAN_QUADRENNIUM_DAYS: u16 = 3 * 365 + 1 * 366;
const GREGORIAN_YEAR_DAYS: u16 = 365;
const GREGORIAN_CYCLE_YEARS: u16 = 400;
const GREGORIAN_CENTURY_YEARS: u8 = 100;
const GREGORIAN_QUADRENNIUM_YEARS: u8 = 4;

const GREGORIAN_NORMALIZED_DATE_OFFSET_DAYS: u16 = 11017; // 1970-01-01 to 2000-03-01
const GREGORIAN_MONTH_STARTS: [u16; 13] =
    [0, 31, 61, 92, 122, 153, 184, 214, 245, 275, 306, 337, 65535]; // Index 0 = March

fn month_from_day_offset(day: u16) -> u8 {
    // No March-based month is shorter than 30 days, so day / 30 is either right or one too far.
    let mut month = (day / 30) as u8;
    if day < GREGORIAN_MONTH_STARTS[month as usize] {
        month -= 1;
    }
    month
}

impl GregorianNormalizedDate {
    pub(crate) fn from_day(day: i128) -> Self {
        let day = day - GREGORIAN_NORMALIZED_DATE_OFFSET_DAYS as i128;
        let (cycle, days_into_cycle) = day.div_mod_floor(&(GREGORIAN_CYCLE_DAYS as i128));
        let days_into_cycle = days_into_cycle as u32;

        // The fourth century of a cycle is one day longer than the first three, and that extra
        // day is its last one, so clamping the quotient to 3 puts it in the right place.
        let (century, days_into_century) =
            days_into_cycle.clamped_div_rem(GREGORIAN_CENTURY_DAYS as u32, 3_u8);
        let days_into_century = days_into_century as u16;

        // The last quadrennium of a normal century lacks its leap day, which only makes it
        // shorter, so a plain division works here.
        let (quadrennium, days_into_quadrennium) =
            days_into_century.div_rem(&GREGORIAN_QUADRENNIUM_DAYS);
        let quadrennium = quadrennium as u8;

        let (years_into_quadrennium, days_into_year) =
            days_into_quadrennium.clamped_div_rem(GREGORIAN_YEAR_DAYS, 3_u8);

        GregorianNormalizedDate {
            cycle,
            century,
            quadrennium,
            year: years_into_quadrennium,
            day: days_into_year,
        }
    }

    pub(crate) fn to_day(self) -> i128 {
        let century = self.century as i128;
        let quadrennium = self.quadrennium as i128;
        let year = self.year as i128;
        let day = self.day as i128;
        self.cycle * GREGORIAN_CYCLE_DAYS as i128
            + century * GREGORIAN_CENTURY_DAYS as i128
            + quadrennium * GREGORIAN_QUADRENNIUM_DAYS as i128
            + year * GREGORIAN_YEAR_DAYS as i128
            + day
            + GREGORIAN_NORMALIZED_DATE_OFFSET_DAYS as i128
    }

    /// Month and day are 1-based and must already be valid for the year.
    pub(crate) fn from_date(year: i128, month: u8, day: u8) -> Self {
        assert!((1..=12).contains(&month), "Month must be in range 1-12");
        assert!((1..=31).contains(&day), "Day must be in range 1-31");

        // January and February belong to the normalized year that started the previous March.
        let (year, month) = if month < 3 {
            (year - 1, month + 9)
        } else {
            (year, month - 3)
        };
        let year = year - 2000;
        let (cycle, years_into_cycle) = year.div_mod_floor(&(GREGORIAN_CYCLE_YEARS as i128));
        let years_into_cycle = years_into_cycle as u16;
        let (century, years_into_century) =
            years_into_cycle.clamped_div_rem(GREGORIAN_CENTURY_YEARS as u16, 3_u8);
        let (quadrennium, years_into_quadrennium) =
            years_into_century.clamped_div_rem(GREGORIAN_QUADRENNIUM_YEARS as u16, 24_u8);

        let days_into_year = GREGORIAN_MONTH_STARTS[month as usize] + (day - 1) as u16;
        GregorianNormalizedDate {
            cycle,
            century,
            quadrennium,
            year: years_into_quadrennium as u8,
            day: days_into_year,
        }
    }

    /// Returns (year, month, day) with 1-based month and day.
    pub(crate) fn to_date(self) -> (i128, u8, u8) {
        let mut year = 2000
            + 400 * self.cycle
            + 100 * self.century as i128
            + 4 * self.quadrennium as i128
            + self.year as i128;

        let month = month_from_day_offset(self.day);
        let days_into_month = (self.day - GREGORIAN_MONTH_STARTS[month as usize]) as u8;

        // Back from March-based months to January-based ones.
        let mut month = month + 2;
        if month >= 12 {
            month -= 12;
            year += 1;
        }
        (year, month + 1, days_into_month + 1)
    }
}
