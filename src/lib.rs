//! Elapsed time between two instants, expressed in years, calendar-aware months, weeks, days,
//! hours, minutes and seconds, plus a greedy whole-unit breakdown.
//!
//! ```
//! use tempspan::{DurationCalculator, InstantBuilder, InstantS64};
//!
//! let start: InstantS64 = InstantBuilder::new().year(2018).month(3).day(15).build();
//! let end: InstantS64 = InstantBuilder::new().year(2019).month(9).day(15).build();
//! let duration = DurationCalculator::between(start, end);
//! assert_eq!(duration.in_months(), 18.0);
//! assert_eq!(duration.in_days(), 549.0);
//! ```
//!
//! Any type implementing [`CalendarInstant`] can be measured. The crate's own [`Instant`] does,
//! and with the `chrono` feature so do `chrono::NaiveDate`, `NaiveDateTime` and `DateTime<Utc>`.

pub use builder::{BuildError, InstantBuilder, Precision};
pub use calculator::DurationCalculator;
pub use calendar::{days_in_month, is_leap_year, CalendarDate, CalendarInstant, MonthLengths};
pub use duration::{Duration, DurationMs128, DurationNs128, DurationS128, DurationS64};
pub use instant::{
    Instant, InstantNs128, InstantOutOfRange, InstantS128, InstantS32, InstantS64, Tick,
};
pub use months::compute_months;
pub use scale::{Microseconds, Milliseconds, Nanoseconds, Scale, Seconds};
pub use unit::{Unit, UnknownUnit};

mod builder;
mod calculator;
mod calendar;
#[cfg(feature = "chrono")]
mod chrono_support;
mod div_rem;
mod duration;
mod gregorian_normalized_date;
mod instant;
mod months;
mod scale;
mod unit;
