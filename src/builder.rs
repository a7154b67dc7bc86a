use std::cmp::max;
use std::fmt;

use num_integer::Integer;
use thiserror::Error;

use crate::calendar::{CalendarDate, SECONDS_PER_DAY};
use crate::instant::{InstantOutOfRange, Tick};
use crate::{Instant, Scale};

/// The finest calendar component given to an [`InstantBuilder`].
#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum Precision {
    Years,
    Months,
    Days,
    Hours,
    Minutes,
    Seconds,
    Milliseconds,
    Microseconds,
    Nanoseconds,
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Precision::Years => "year",
            Precision::Months => "month",
            Precision::Days => "day",
            Precision::Hours => "hour",
            Precision::Minutes => "minute",
            Precision::Seconds => "second",
            Precision::Milliseconds => "millisecond",
            Precision::Microseconds => "microsecond",
            Precision::Nanoseconds => "nanosecond",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildError {
    #[error("no {0} provided")]
    Missing(Precision),
    #[error("invalid date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u8, day: u8 },
    #[error("invalid time of day")]
    InvalidTime,
    #[error(transparent)]
    OutOfRange(#[from] InstantOutOfRange),
}

/// Builds an [`Instant`] from UTC calendar components.
///
/// Components coarser than the finest one given are required; finer ones default to the start
/// of their range, so `.year(2011).month(12)` is 2011-12-01T00:00:00Z.
#[derive(Debug, Default, Clone)]
pub struct InstantBuilder {
    precision: Option<Precision>,
    year: Option<i32>,
    month: Option<u8>,
    day: Option<u8>,
    hour: Option<u8>,
    minute: Option<u8>,
    second: Option<u8>,
    millisecond: Option<u16>,
    microsecond: Option<u16>,
    nanosecond: Option<u16>,
}

impl InstantBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn date(&mut self, date: CalendarDate) -> &mut Self {
        let year = i32::try_from(date.year).unwrap_or(i32::MAX);
        self.year(year).month(date.month).day(date.day)
    }

    pub fn year(&mut self, year: i32) -> &mut Self {
        self.year = Some(year);
        self.precision = opt_max(self.precision, Precision::Years);
        self
    }

    pub fn month(&mut self, month: u8) -> &mut Self {
        self.month = Some(month);
        self.precision = opt_max(self.precision, Precision::Months);
        self
    }

    pub fn day(&mut self, day: u8) -> &mut Self {
        self.day = Some(day);
        self.precision = opt_max(self.precision, Precision::Days);
        self
    }

    pub fn hour(&mut self, hour: u8) -> &mut Self {
        self.hour = Some(hour);
        self.precision = opt_max(self.precision, Precision::Hours);
        self
    }

    pub fn minute(&mut self, minute: u8) -> &mut Self {
        self.minute = Some(minute);
        self.precision = opt_max(self.precision, Precision::Minutes);
        self
    }

    pub fn second(&mut self, second: u8) -> &mut Self {
        self.second = Some(second);
        self.precision = opt_max(self.precision, Precision::Seconds);
        self
    }

    pub fn millisecond(&mut self, millisecond: u16) -> &mut Self {
        self.millisecond = Some(millisecond);
        self.precision = opt_max(self.precision, Precision::Milliseconds);
        self
    }

    pub fn microsecond(&mut self, microsecond: u16) -> &mut Self {
        self.microsecond = Some(microsecond);
        self.precision = opt_max(self.precision, Precision::Microseconds);
        self
    }

    pub fn nanosecond(&mut self, nanosecond: u16) -> &mut Self {
        self.nanosecond = Some(nanosecond);
        self.precision = opt_max(self.precision, Precision::Nanoseconds);
        self
    }

    /// Like [`try_build`](Self::try_build), but panics on invalid input. Meant for literals.
    pub fn build<T: Tick, S: Scale>(&self) -> Instant<T, S> {
        match self.try_build() {
            Ok(instant) => instant,
            Err(e) => panic!("{}", e),
        }
    }

    /// Sub-second components finer than the scale `S` are truncated towards the past.
    pub fn try_build<T: Tick, S: Scale>(&self) -> Result<Instant<T, S>, BuildError> {
        let precision = self.precision.ok_or(BuildError::Missing(Precision::Years))?;
        let year = self.year.ok_or(BuildError::Missing(Precision::Years))?;
        let month = self.component(self.month, Precision::Months, precision, 1)?;
        let day = self.component(self.day, Precision::Days, precision, 1)?;
        let hour = self.component(self.hour, Precision::Hours, precision, 0)?;
        let minute = self.component(self.minute, Precision::Minutes, precision, 0)?;
        let second = self.component(self.second, Precision::Seconds, precision, 0)?;
        let millisecond =
            self.component(self.millisecond, Precision::Milliseconds, precision, 0)?;
        let microsecond =
            self.component(self.microsecond, Precision::Microseconds, precision, 0)?;
        let nanosecond = self.component(self.nanosecond, Precision::Nanoseconds, precision, 0)?;

        let date = CalendarDate::new(year as i128, month, day).ok_or(BuildError::InvalidDate {
            year,
            month,
            day,
        })?;
        if hour >= 24
            || minute >= 60
            || second >= 60
            || millisecond >= 1000
            || microsecond >= 1000
            || nanosecond >= 1000
        {
            return Err(BuildError::InvalidTime);
        }

        let second_of_day = hour as i128 * 3600 + minute as i128 * 60 + second as i128;
        let nanosecond_of_second =
            millisecond as i128 * 1_000_000 + microsecond as i128 * 1_000 + nanosecond as i128;
        let nanoseconds = (date.days_since_epoch() * SECONDS_PER_DAY as i128 + second_of_day)
            * 1_000_000_000
            + nanosecond_of_second;
        let ticks = Integer::div_floor(&nanoseconds, &(S::NANOSECONDS_PER_TICK as i128));
        let ticks = T::from(ticks).ok_or(InstantOutOfRange)?;
        Ok(Instant::from_ticks_since_epoch(ticks))
    }

    fn component<V: Copy>(
        &self,
        value: Option<V>,
        component: Precision,
        precision: Precision,
        default: V,
    ) -> Result<V, BuildError> {
        match value {
            Some(value) => Ok(value),
            None if component < precision => Err(BuildError::Missing(component)),
            None => Ok(default),
        }
    }
}

fn opt_max<T: Ord + Copy>(lhs: Option<T>, rhs: T) -> Option<T> {
    Some(match lhs {
        Some(x) => max(x, rhs),
        None => rhs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::CalendarInstant;
    use crate::instant::{InstantNs128, InstantS32, InstantS64};
    use crate::scale::Milliseconds;

    #[test]
    fn test_builder() {
        // GregorianNormalizedDate epoch
        let instant: InstantS64 = InstantBuilder::new()
            .year(2000)
            .month(3)
            .day(1)
            .hour(0)
            .minute(0)
            .second(0)
            .build();
        assert_eq!(instant.ticks_since_epoch(), 11017 * 86_400);
        assert_eq!(instant.date(), CalendarDate::new(2000, 3, 1).unwrap());
    }

    #[test]
    fn finer_components_default() {
        let instant: InstantS64 = InstantBuilder::new().year(2011).month(12).build();
        assert_eq!(instant.ticks_since_epoch(), 15309 * 86_400);

        let instant: InstantS64 = InstantBuilder::new().year(2011).build();
        assert_eq!(instant.ticks_since_epoch(), 14975 * 86_400);
    }

    #[test]
    fn time_of_day() {
        let instant: InstantNs128 = InstantBuilder::new()
            .year(1970)
            .month(1)
            .day(2)
            .hour(3)
            .minute(4)
            .second(5)
            .millisecond(6)
            .microsecond(7)
            .nanosecond(8)
            .build();
        assert_eq!(
            instant.ticks_since_epoch(),
            ((86_400 + 3 * 3600 + 4 * 60 + 5) * 1_000_000_000) + 6_007_008
        );

        // Truncated to the scale of the instant, towards the past even before the epoch.
        let instant: Instant<i64, Milliseconds> = InstantBuilder::new()
            .year(1969)
            .month(12)
            .day(31)
            .hour(23)
            .minute(59)
            .second(59)
            .millisecond(999)
            .microsecond(999)
            .build();
        assert_eq!(instant.ticks_since_epoch(), -1);
    }

    #[test]
    fn missing_components() {
        let result: Result<InstantS64, _> = InstantBuilder::new().month(3).day(1).try_build();
        assert_eq!(result.unwrap_err(), BuildError::Missing(Precision::Years));

        let result: Result<InstantS64, _> = InstantBuilder::new().try_build();
        assert_eq!(result.unwrap_err(), BuildError::Missing(Precision::Years));

        let result: Result<InstantS64, _> = InstantBuilder::new().year(2019).day(1).try_build();
        assert_eq!(result.unwrap_err(), BuildError::Missing(Precision::Months));
        assert_eq!(result.unwrap_err().to_string(), "no month provided");
    }

    #[test]
    fn invalid_components() {
        let result: Result<InstantS64, _> = InstantBuilder::new()
            .year(2019)
            .month(2)
            .day(29)
            .try_build();
        assert_eq!(
            result.unwrap_err(),
            BuildError::InvalidDate {
                year: 2019,
                month: 2,
                day: 29
            }
        );
        assert_eq!(result.unwrap_err().to_string(), "invalid date 2019-02-29");

        let result: Result<InstantS64, _> = InstantBuilder::new()
            .year(2019)
            .month(13)
            .try_build();
        assert!(matches!(result, Err(BuildError::InvalidDate { .. })));

        let result: Result<InstantS64, _> = InstantBuilder::new()
            .year(2019)
            .month(1)
            .day(1)
            .hour(24)
            .try_build();
        assert_eq!(result.unwrap_err(), BuildError::InvalidTime);
    }

    #[test]
    fn out_of_range() {
        let result: Result<InstantS32, _> = InstantBuilder::new().year(2100).try_build();
        assert_eq!(result.unwrap_err(), BuildError::OutOfRange(InstantOutOfRange));

        let result: Result<InstantS32, _> = InstantBuilder::new().year(2038).try_build();
        assert!(result.is_ok());
    }

    #[test]
    #[should_panic(expected = "invalid date 2021-02-29")]
    fn build_panics_on_invalid_input() {
        let _: InstantS64 = InstantBuilder::new().year(2021).month(2).day(29).build();
    }

    #[test]
    fn from_calendar_date() {
        let date = CalendarDate::new(2020, 2, 29).unwrap();
        let instant: InstantS64 = InstantBuilder::new().date(date).build();
        assert_eq!(instant.date(), date);
    }
}
