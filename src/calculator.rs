use std::collections::BTreeMap;

use log::debug;

use crate::calendar::CalendarInstant;
use crate::duration::DurationNs128;
use crate::months::compute_months;
use crate::unit::Unit;

/// The elapsed time between two instants, expressed in calendar units.
///
/// The calculator is symmetric: the two instants are put in order on construction, so
/// `between(a, b)` and `between(b, a)` answer every query identically. It holds no state beyond
/// the two instants and the elapsed time between them.
#[derive(Debug, Clone, Copy)]
pub struct DurationCalculator<I: CalendarInstant> {
    start: I,
    end: I,
    elapsed: DurationNs128,
}

impl<I: CalendarInstant> DurationCalculator<I> {
    /// Measures from `start` to `end`, swapping them if `end` comes first.
    pub fn between(start: I, end: I) -> Self {
        let (start, end) = if end < start { (end, start) } else { (start, end) };
        let elapsed = end.since_epoch() - start.since_epoch();
        debug!(
            "duration from {} to {}: {} ns",
            start.date(),
            end.date(),
            elapsed.ticks()
        );
        DurationCalculator {
            start,
            end,
            elapsed,
        }
    }

    /// The earlier of the two instants.
    pub fn start(&self) -> I {
        self.start
    }

    /// The later of the two instants.
    pub fn end(&self) -> I {
        self.end
    }

    /// Time from `start` to `end`. Never negative.
    pub fn elapsed(&self) -> DurationNs128 {
        self.elapsed
    }

    /// Years of 365.25 days.
    pub fn in_years(&self) -> f64 {
        self.in_fixed_unit(Unit::Years)
    }

    /// Calendar months, where each partly covered month counts by its real length.
    pub fn in_months(&self) -> f64 {
        round_to_hundredths(compute_months(&self.start, &self.end))
    }

    pub fn in_weeks(&self) -> f64 {
        self.in_fixed_unit(Unit::Weeks)
    }

    pub fn in_days(&self) -> f64 {
        self.in_fixed_unit(Unit::Days)
    }

    pub fn in_hours(&self) -> f64 {
        self.in_fixed_unit(Unit::Hours)
    }

    pub fn in_minutes(&self) -> f64 {
        self.in_fixed_unit(Unit::Minutes)
    }

    /// Elapsed seconds. Unlike the other units this is not rounded.
    pub fn in_seconds(&self) -> f64 {
        self.elapsed.as_seconds_f64()
    }

    pub fn in_unit(&self, unit: Unit) -> f64 {
        match unit {
            Unit::Months => self.in_months(),
            Unit::Seconds => self.in_seconds(),
            _ => self.in_fixed_unit(unit),
        }
    }

    /// The duration in every unit, keyed from largest unit to smallest.
    pub fn in_each_component(&self) -> BTreeMap<Unit, f64> {
        Unit::ALL
            .into_iter()
            .map(|unit| (unit, self.in_unit(unit)))
            .collect()
    }

    /// Breaks the elapsed time down greedily into whole units, largest first, using the fixed
    /// unit lengths. Years and months here are 365.25 and 30 days, not calendar years and
    /// months. Any fraction of a second left over is dropped.
    pub fn in_general(&self) -> BTreeMap<Unit, i128> {
        let mut remaining = self.elapsed;
        Unit::ALL
            .into_iter()
            .map(|unit| {
                let (count, rest) = remaining.div_rem_floor(unit.length());
                remaining = rest;
                (unit, count)
            })
            .collect()
    }

    fn in_fixed_unit(&self, unit: Unit) -> f64 {
        round_to_hundredths(self.in_seconds() / f64::from(unit.seconds()))
    }
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
