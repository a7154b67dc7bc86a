//! Calendar-aware month counting.
//!
//! A month is not a fixed length of time, so the month count between two instants cannot be
//! derived from the elapsed seconds alone. Instead the calendar between the two instants is
//! walked: every calendar month that is spanned completely counts as 1.0, and a month that is
//! only partly covered counts as the covered days divided by that month's real length (28, 29,
//! 30 or 31 days).

use std::ops::ControlFlow;

use log::trace;

use crate::calendar::{CalendarDate, CalendarInstant, SECONDS_PER_DAY};
use crate::duration::DurationNs128;

/// Number of calendar months between `start` and `end`, in either order.
///
/// Going from one day of the month to the same day of a later month always gives a whole
/// number, e.g. 2020-02-01 to 2020-03-01 is exactly 1.0 even though February 2020 has 29 days.
/// The result is not rounded.
pub fn compute_months<I: CalendarInstant>(start: &I, end: &I) -> f64 {
    let (start, end) = if end < start { (end, start) } else { (start, end) };
    let from = start.date();
    let to = end.date();

    let year_gap = to.year - from.year;
    if year_gap >= 1 {
        months_across_years(start, end, from, to, year_gap)
    } else if from.month != to.month {
        months_within_year(from, to)
    } else {
        months_within_month(from, to)
    }
}

fn months_across_years<I: CalendarInstant>(
    start: &I,
    end: &I,
    from: CalendarDate,
    to: CalendarDate,
    year_gap: i128,
) -> f64 {
    if from.day == to.day {
        // The two partial months add up to exactly one month.
        let months = year_gap * 12 + to.month as i128 - from.month as i128;
        trace!("{from} to {to}: {year_gap} year(s) apart on the same day, {months} months");
        return months as f64;
    }

    // Year boundaries come from the calendar rather than from instants of type I, which may
    // not be able to represent them.
    let next_new_year = from.next_year().start_of_year().midnight_since_epoch();
    let new_year = to.start_of_year().midnight_since_epoch();

    // The -1 and +1 make the partial months come out as (length - day) / length and
    // day / length, the same fractions used within a single year.
    let first_year_days = days_between(start.since_epoch(), next_new_year) - 1.0;
    let last_year_days = days_between(new_year, end.since_epoch()) + 1.0;

    let first_year_months = consume_months(from.month_lengths().iter().rev(), first_year_days);
    let last_year_months = consume_months(to.month_lengths().iter(), last_year_days);
    let whole_year_months = (year_gap - 1) as f64 * 12.0;

    trace!(
        "{from} to {to}: {first_year_months} month(s) in {}, {last_year_months} in {}, \
         {whole_year_months} in between",
        from.year,
        to.year
    );
    first_year_months + last_year_months + whole_year_months
}

fn months_within_year(from: CalendarDate, to: CalendarDate) -> f64 {
    let lengths = from.month_lengths();
    let partial_months = if from.day == to.day {
        1.0
    } else {
        let start_month_length = f64::from(lengths.of(from.month));
        let end_month_length = f64::from(lengths.of(to.month));
        (start_month_length - f64::from(from.day)) / start_month_length
            + f64::from(to.day) / end_month_length
    };
    let whole_months = f64::from(to.month - from.month - 1);
    trace!("{from} to {to}: {partial_months} partial month(s), {whole_months} whole");
    partial_months + whole_months
}

fn months_within_month(from: CalendarDate, to: CalendarDate) -> f64 {
    let month_length = f64::from(from.month_lengths().of(from.month));
    (f64::from(to.day) - f64::from(from.day)) / month_length
}

fn days_between(from: DurationNs128, to: DurationNs128) -> f64 {
    (to - from).as_seconds_f64() / f64::from(SECONDS_PER_DAY)
}

/// Spends `days` on consecutive months of the given lengths: 1.0 for each month the days cover
/// completely, then the covered fraction of the month where they run out.
fn consume_months(lengths: impl Iterator<Item = u8>, days: f64) -> f64 {
    let walk = lengths
        .map(f64::from)
        .try_fold((0.0, days), |(months, days), length| {
            if days <= 0.0 {
                ControlFlow::Break((months, days))
            } else if days < length {
                ControlFlow::Break((months + days / length, 0.0))
            } else {
                ControlFlow::Continue((months + 1.0, days - length))
            }
        });
    match walk {
        ControlFlow::Continue((months, _)) | ControlFlow::Break((months, _)) => months,
    }
}
