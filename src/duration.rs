use std::hash::Hash;
use std::marker::PhantomData;
use std::ops::{Add, Sub};

use num_rational::Ratio;

use crate::instant::Tick;
use crate::scale::{Milliseconds, Scale, Seconds};
use crate::Nanoseconds;

/// Elapsed time counted in ticks of scale `S`. Unlike a calendar period ("5 months"), a duration
/// is exact: it measures how much time passed, not how many calendar slots were crossed.
#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct Duration<T: Tick, S: Scale> {
    ticks: T,
    phantom: PhantomData<S>,
}

pub type DurationS64 = Duration<i64, Seconds>;

pub type DurationS128 = Duration<i128, Seconds>;
pub type DurationMs128 = Duration<i128, Milliseconds>;
pub type DurationNs128 = Duration<i128, Nanoseconds>;

impl<T: Tick, S: Scale> Duration<T, S> {
    pub(crate) fn new(t: T) -> Self {
        Self {
            ticks: t,
            phantom: PhantomData,
        }
    }

    pub fn from_ticks(ticks: T) -> Self {
        Self::new(ticks)
    }

    pub fn zero() -> Self {
        Self::new(T::zero())
    }

    pub fn ticks(&self) -> T {
        self.ticks
    }

    pub fn is_zero(&self) -> bool {
        self.ticks == T::zero()
    }

    pub fn is_negative(&self) -> bool {
        self.ticks < T::zero()
    }

    /// Magnitude of the duration. Panics if the tick type is signed and the duration is its
    /// minimum value.
    pub fn abs(&self) -> Self {
        if self.is_negative() {
            Self::new(
                T::zero()
                    .checked_sub(&self.ticks)
                    .expect("duration magnitude should be representable"),
            )
        } else {
            *self
        }
    }

    pub fn extend<S2: Scale>(&self) -> Option<Duration<T, S2>> {
        assert!(
            S2::TICKS_PER_SECOND >= S::TICKS_PER_SECOND,
            "Cannot extend scale to a lower scale"
        );
        let factor = T::from(S2::TICKS_PER_SECOND / S::TICKS_PER_SECOND)?;
        Some(Duration::new(self.ticks.checked_mul(&factor)?))
    }

    /// Length of the duration in (fractional) seconds.
    pub fn as_seconds_f64(&self) -> f64 {
        let ticks_per_second =
            T::from(S::TICKS_PER_SECOND).expect("ticks per second should be representable as T");
        // Split first so that whole seconds survive the conversion exactly.
        let (seconds, subsecond) = self.ticks.div_mod_floor(&ticks_per_second);
        let seconds = seconds
            .to_f64()
            .expect("integer seconds should be convertible to f64");
        let subsecond = subsecond
            .to_f64()
            .expect("integer ticks should be convertible to f64");
        seconds + subsecond / S::TICKS_PER_SECOND as f64
    }

    pub fn div_rem_floor<S2: Scale>(&self, other: Duration<T, S2>) -> (T, Duration<T, S>) {
        // We have two numbers t1/s1 and t2/s2. We want to compute
        //
        // (t1/s1) / (t2/s2) = (t1*s2) / (t2*s1)
        //
        // precisely, i.e. both a quotient and a remainder. The quotient will be returned as
        // is, and the remainder will be scaled up to the scale of the Duration type.
        let t1 = Ratio::new(self.ticks, T::from(S::TICKS_PER_SECOND).unwrap());
        let t2 = Ratio::new(other.ticks, T::from(S2::TICKS_PER_SECOND).unwrap());
        let quotient = (t1 / t2).floor();
        let remainder = t1 - t2 * quotient;
        let remainder = remainder * T::from(S::TICKS_PER_SECOND).unwrap();
        (quotient.to_integer(), Duration::new(remainder.to_integer()))
    }
}

impl<T: Tick, S: Scale> Add for Duration<T, S> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.ticks + rhs.ticks)
    }
}

impl<T: Tick, S: Scale> Sub for Duration<T, S> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.ticks - rhs.ticks)
    }
}
