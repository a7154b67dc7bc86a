use std::hash::Hash;
use std::marker::PhantomData;
use std::ops::{Add, Sub};
use std::time::SystemTime;

use num_integer::Integer;
use num_traits::{Bounded, PrimInt};
use numcmp::NumCmp;
use thiserror::Error;

use crate::duration::DurationNs128;
use crate::scale::Seconds;
use crate::{Duration, Nanoseconds, Scale};

pub trait Tick: PrimInt + Bounded + Hash + Eq + Copy + Ord + PartialOrd + Integer {}

impl<T: PrimInt + Hash + Eq + Copy + Ord + PartialOrd + Integer> Tick for T {}

/// A point on the UTC time line, stored as ticks since 1970-01-01T00:00:00Z.
///
/// This is Unix time: every day is exactly 86,400 seconds long and leap seconds are not counted.
#[derive(Debug, Clone, Copy, Hash)]
pub struct Instant<T: Tick, S: Scale> {
    pub(crate) ticks: T,
    phantom: PhantomData<S>,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("instant is out of range")]
pub struct InstantOutOfRange;

pub type InstantS32 = Instant<i32, Seconds>;
pub type InstantS64 = Instant<i64, Seconds>;

pub type InstantS128 = Instant<i128, Seconds>;
pub type InstantNs128 = Instant<i128, Nanoseconds>;

impl<T: Tick, S: Scale> Instant<T, S> {
    pub fn from_ticks_since_epoch(ticks: T) -> Self {
        Self {
            ticks,
            phantom: PhantomData,
        }
    }

    pub fn epoch() -> Self {
        Instant::from_ticks_since_epoch(T::zero())
    }

    pub fn extend<T2: Tick, S2: Scale>(&self) -> Option<Instant<T2, S2>> {
        assert!(
            S2::TICKS_PER_SECOND >= S::TICKS_PER_SECOND,
            "Cannot extend scale to a lower scale"
        );
        let ticks = T2::from(self.ticks)?;
        let factor = T2::from(S2::TICKS_PER_SECOND / S::TICKS_PER_SECOND)?;
        let ticks = ticks.checked_mul(&factor)?;
        Some(Instant::from_ticks_since_epoch(ticks))
    }

    pub fn duration_since_epoch(&self) -> Duration<T, S> {
        Duration::new(self.ticks)
    }

    /// Time since the epoch at nanosecond resolution. Every `Tick` type of at most 64 bits fits,
    /// as does any `i128` instant within roughly ±5·10²¹ years of the epoch.
    pub fn nanoseconds_since_epoch(&self) -> DurationNs128 {
        let ticks = self
            .ticks
            .to_i128()
            .expect("instant ticks should be representable as i128");
        let ticks = ticks
            .checked_mul(S::NANOSECONDS_PER_TICK as i128)
            .expect("instant should be representable in nanoseconds");
        DurationNs128::new(ticks)
    }

    pub fn ticks_since_epoch(&self) -> T {
        self.ticks
    }
}

impl<T: Tick, S: Scale> Sub for Instant<T, S> {
    type Output = Duration<T, S>;

    fn sub(self, rhs: Self) -> Self::Output {
        Duration::new(
            self.ticks
                .checked_sub(&rhs.ticks)
                .expect("instant subtraction underflow"),
        )
    }
}

impl<T: Tick, S: Scale> Add<Duration<T, S>> for Instant<T, S> {
    type Output = Self;

    fn add(self, rhs: Duration<T, S>) -> Self::Output {
        Self::from_ticks_since_epoch(
            self.ticks
                .checked_add(&rhs.ticks())
                .expect("instant addition overflow"),
        )
    }
}

impl<T1: Tick, S1: Scale, T2: Tick, S2: Scale> PartialEq<Instant<T2, S2>> for Instant<T1, S1>
where
    T1: NumCmp<T2>,
{
    fn eq(&self, other: &Instant<T2, S2>) -> bool {
        // t1/s1 == t2/s2 is the same as t1*s2 == t2*s1. Scales are powers of ten, so
        // the coarser side can be multiplied up by s_fine/s_coarse instead.
        let t1 = self.ticks;
        let s1 = S1::TICKS_PER_SECOND;
        let t2 = other.ticks;
        let s2 = S2::TICKS_PER_SECOND;
        match s1.cmp(&s2) {
            std::cmp::Ordering::Less => {
                let factor =
                    T1::from(s2 / s1).expect("scale conversion factor is too large for type T1");
                (t1 * factor).num_eq(t2)
            }
            std::cmp::Ordering::Greater => {
                let factor =
                    T2::from(s1 / s2).expect("scale conversion factor is too large for type T2");
                t1.num_eq(t2 * factor)
            }
            std::cmp::Ordering::Equal => t1.num_eq(t2),
        }
    }
}

impl<T1: Tick, S1: Scale, T2: Tick, S2: Scale> PartialOrd<Instant<T2, S2>> for Instant<T1, S1>
where
    T1: NumCmp<T2>,
{
    fn partial_cmp(&self, other: &Instant<T2, S2>) -> Option<std::cmp::Ordering> {
        // Same rewrite as in PartialEq: t1/s1 < t2/s2 iff t1*s2 < t2*s1.
        let t1 = self.ticks;
        let s1 = S1::TICKS_PER_SECOND;
        let t2 = other.ticks;
        let s2 = S2::TICKS_PER_SECOND;
        match s1.cmp(&s2) {
            std::cmp::Ordering::Less => {
                let factor =
                    T1::from(s2 / s1).expect("scale conversion factor is too large for type T1");
                (t1 * factor).num_cmp(t2)
            }
            std::cmp::Ordering::Greater => {
                let factor =
                    T2::from(s1 / s2).expect("scale conversion factor is too large for type T2");
                t1.num_cmp(t2 * factor)
            }
            std::cmp::Ordering::Equal => t1.num_cmp(t2),
        }
    }
}

impl<T: Tick, S: Scale> TryFrom<SystemTime> for Instant<T, S> {
    type Error = InstantOutOfRange;

    fn try_from(value: SystemTime) -> Result<Self, Self::Error> {
        let nanoseconds = system_time_to_unix_nanoseconds(value);
        let ticks = Integer::div_floor(&nanoseconds, &(S::NANOSECONDS_PER_TICK as i128));
        let ticks = T::from(ticks).ok_or(InstantOutOfRange)?;
        Ok(Instant::from_ticks_since_epoch(ticks))
    }
}

/// Signed number of nanoseconds between the Unix epoch and `value`.
fn system_time_to_unix_nanoseconds(value: SystemTime) -> i128 {
    match value.duration_since(SystemTime::UNIX_EPOCH) {
        Ok(duration) => duration.as_nanos() as i128,
        Err(before_epoch) => -(before_epoch.duration().as_nanos() as i128),
    }
}
