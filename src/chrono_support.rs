//! [`CalendarInstant`] for chrono's UTC and naive types, so that they can be handed to
//! [`DurationCalculator`](crate::DurationCalculator) directly. Naive values are read as UTC.

use chrono::{DateTime, Datelike, Months, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::calendar::{CalendarDate, CalendarInstant};
use crate::duration::DurationNs128;

const NANOSECONDS_PER_SECOND: i128 = 1_000_000_000;
const ONE_YEAR: Months = Months::new(12);

fn calendar_date<D: Datelike>(value: &D) -> CalendarDate {
    CalendarDate {
        year: value.year() as i128,
        month: value.month() as u8,
        day: value.day() as u8,
    }
}

fn first_of_january(year: i32) -> NaiveDateTime {
    NaiveDate::from_yo_opt(year, 1)
        .expect("January 1 of a representable year should be representable")
        .and_time(NaiveTime::MIN)
}

impl CalendarInstant for DateTime<Utc> {
    fn since_epoch(&self) -> DurationNs128 {
        let nanoseconds = self.timestamp() as i128 * NANOSECONDS_PER_SECOND
            + self.timestamp_subsec_nanos() as i128;
        DurationNs128::from_ticks(nanoseconds)
    }

    fn date(&self) -> CalendarDate {
        calendar_date(self)
    }

    fn start_of_year(&self) -> Self {
        first_of_january(self.year()).and_utc()
    }

    fn add_year(&self) -> Self {
        self.checked_add_months(ONE_YEAR)
            .expect("instant one year later should be representable")
    }
}

impl CalendarInstant for NaiveDateTime {
    fn since_epoch(&self) -> DurationNs128 {
        self.and_utc().since_epoch()
    }

    fn date(&self) -> CalendarDate {
        calendar_date(self)
    }

    fn start_of_year(&self) -> Self {
        first_of_january(self.year())
    }

    fn add_year(&self) -> Self {
        self.checked_add_months(ONE_YEAR)
            .expect("instant one year later should be representable")
    }
}

/// A date on its own stands for midnight at the start of that day.
impl CalendarInstant for NaiveDate {
    fn since_epoch(&self) -> DurationNs128 {
        self.and_time(NaiveTime::MIN).since_epoch()
    }

    fn date(&self) -> CalendarDate {
        calendar_date(self)
    }

    fn start_of_year(&self) -> Self {
        first_of_january(self.year()).date()
    }

    fn add_year(&self) -> Self {
        self.checked_add_months(ONE_YEAR)
            .expect("date one year later should be representable")
    }
}
