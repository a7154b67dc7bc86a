use std::cmp::min;
use std::fmt;

use num_integer::Integer;
use numcmp::NumCmp;

use crate::div_rem::RemFloor;
use crate::duration::DurationNs128;
use crate::gregorian_normalized_date::GregorianNormalizedDate;
use crate::instant::Tick;
use crate::{Instant, Scale};

pub const SECONDS_PER_DAY: u32 = 86_400;

const GREGORIAN_MONTH_LENGTHS_NORMAL_YEAR: [u8; 12] =
    [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
const GREGORIAN_MONTH_LENGTHS_LEAP_YEAR: [u8; 12] =
    [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

pub fn is_leap_year(year: i128) -> bool {
    // Get offset into cycle first so we can do this with smaller integers.
    let year = year.rem_floor(400) as u16;
    year % 4 == 0 && (year % 100 != 0 || year == 0)
}

pub fn days_in_month(year: i128, month: u8) -> u8 {
    MonthLengths::for_year(year).of(month)
}

/// The lengths of the twelve months of one year, January first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthLengths(&'static [u8; 12]);

impl MonthLengths {
    pub const NORMAL: MonthLengths = MonthLengths(&GREGORIAN_MONTH_LENGTHS_NORMAL_YEAR);
    pub const LEAP: MonthLengths = MonthLengths(&GREGORIAN_MONTH_LENGTHS_LEAP_YEAR);

    pub fn for_year(year: i128) -> Self {
        if is_leap_year(year) {
            Self::LEAP
        } else {
            Self::NORMAL
        }
    }

    /// Length of `month` (1-12) in days.
    pub fn of(&self, month: u8) -> u8 {
        assert!((1..=12).contains(&month), "Month must be in range 1-12");
        self.0[(month - 1) as usize]
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = u8> + ExactSizeIterator + 'static {
        let lengths: &'static [u8; 12] = self.0;
        lengths.iter().copied()
    }
}

/// A proleptic Gregorian date. Month and day are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalendarDate {
    pub year: i128,
    pub month: u8,
    pub day: u8,
}

impl CalendarDate {
    /// Returns `None` unless `month` and `day` name a day that exists in `year`.
    pub fn new(year: i128, month: u8, day: u8) -> Option<Self> {
        if !(1..=12).contains(&month) || day == 0 || day > days_in_month(year, month) {
            return None;
        }
        Some(CalendarDate { year, month, day })
    }

    pub fn from_days_since_epoch(day: i128) -> Self {
        let (year, month, day) = GregorianNormalizedDate::from_day(day).to_date();
        CalendarDate { year, month, day }
    }

    pub fn days_since_epoch(&self) -> i128 {
        GregorianNormalizedDate::from_date(self.year, self.month, self.day).to_day()
    }

    /// Midnight at the start of this date, as time since 1970-01-01T00:00:00Z.
    pub fn midnight_since_epoch(&self) -> DurationNs128 {
        let seconds = self.days_since_epoch() * SECONDS_PER_DAY as i128;
        DurationNs128::from_ticks(seconds * 1_000_000_000)
    }

    pub fn is_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }

    pub fn month_lengths(&self) -> MonthLengths {
        MonthLengths::for_year(self.year)
    }

    /// The same month and day one year later. February 29 becomes February 28 when the next
    /// year is not a leap year.
    pub fn next_year(&self) -> Self {
        let year = self.year + 1;
        CalendarDate {
            year,
            month: self.month,
            day: min(self.day, days_in_month(year, self.month)),
        }
    }

    pub fn start_of_year(&self) -> Self {
        CalendarDate {
            year: self.year,
            month: 1,
            day: 1,
        }
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// A point in time that can be located on the Gregorian calendar.
///
/// This is everything the duration calculations need from a time type: an absolute position
/// (time since the Unix epoch), the calendar date it falls on, ordering, and the two calendar
/// derivations used when walking whole years. Implementations must be pure; none of the
/// operations may depend on anything other than `self`.
pub trait CalendarInstant: Copy + PartialOrd {
    /// Signed time elapsed since 1970-01-01T00:00:00Z.
    fn since_epoch(&self) -> DurationNs128;

    /// The calendar date this instant falls on.
    fn date(&self) -> CalendarDate;

    /// Midnight at the start of January 1 in this instant's year.
    fn start_of_year(&self) -> Self;

    /// The same date and time of day one year later, with February 29 clamped to February 28.
    fn add_year(&self) -> Self;
}

impl<T: Tick, S: Scale> Instant<T, S> {
    fn ticks_per_day() -> i128 {
        SECONDS_PER_DAY as i128 * S::TICKS_PER_SECOND as i128
    }

    /// Splits the instant into a day number and the ticks elapsed since midnight.
    pub(crate) fn split_day(&self) -> (i128, i128) {
        let ticks = self
            .ticks
            .to_i128()
            .expect("instant ticks should be representable as i128");
        ticks.div_mod_floor(&Self::ticks_per_day())
    }

    pub(crate) fn from_day(day: i128, ticks_into_day: i128) -> Option<Self> {
        let ticks = day
            .checked_mul(Self::ticks_per_day())?
            .checked_add(ticks_into_day)?;
        Some(Instant::from_ticks_since_epoch(T::from(ticks)?))
    }
}

impl<T: Tick + NumCmp<T>, S: Scale> CalendarInstant for Instant<T, S> {
    fn since_epoch(&self) -> DurationNs128 {
        self.nanoseconds_since_epoch()
    }

    fn date(&self) -> CalendarDate {
        let (day, _) = self.split_day();
        CalendarDate::from_days_since_epoch(day)
    }

    fn start_of_year(&self) -> Self {
        let day = self.date().start_of_year().days_since_epoch();
        Instant::from_day(day, 0).expect("start of year should be representable as <T, S>")
    }

    fn add_year(&self) -> Self {
        let (day, ticks_into_day) = self.split_day();
        let day = CalendarDate::from_days_since_epoch(day)
            .next_year()
            .days_since_epoch();
        Instant::from_day(day, ticks_into_day)
            .expect("instant one year later should be representable as <T, S>")
    }
}
