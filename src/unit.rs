use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::calendar::SECONDS_PER_DAY;
use crate::duration::DurationS128;

/// The units a duration can be expressed in, from largest to smallest.
///
/// Every unit has a fixed length in seconds. Years are 365.25 days and months 30 days; these
/// lengths only drive the plain conversions and the greedy breakdown. The calendar-aware month
/// count is computed separately by [`compute_months`](crate::compute_months).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Unit {
    Years,
    Months,
    Weeks,
    Days,
    Hours,
    Minutes,
    Seconds,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown unit '{0}', expected one of years, months, weeks, days, hours, minutes, seconds")]
pub struct UnknownUnit(pub String);

impl Unit {
    pub const ALL: [Unit; 7] = [
        Unit::Years,
        Unit::Months,
        Unit::Weeks,
        Unit::Days,
        Unit::Hours,
        Unit::Minutes,
        Unit::Seconds,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Unit::Years => "years",
            Unit::Months => "months",
            Unit::Weeks => "weeks",
            Unit::Days => "days",
            Unit::Hours => "hours",
            Unit::Minutes => "minutes",
            Unit::Seconds => "seconds",
        }
    }

    /// Fixed length of one unit in seconds.
    pub fn seconds(self) -> u32 {
        match self {
            Unit::Years => SECONDS_PER_DAY * 1461 / 4,
            Unit::Months => SECONDS_PER_DAY * 30,
            Unit::Weeks => SECONDS_PER_DAY * 7,
            Unit::Days => SECONDS_PER_DAY,
            Unit::Hours => 3_600,
            Unit::Minutes => 60,
            Unit::Seconds => 1,
        }
    }

    pub fn length(self) -> DurationS128 {
        DurationS128::from_ticks(self.seconds() as i128)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Unit {
    type Err = UnknownUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::ALL
            .into_iter()
            .find(|unit| unit.name() == s)
            .ok_or_else(|| UnknownUnit(s.to_string()))
    }
}
