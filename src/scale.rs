use std::hash::Hash;

/// Resolution of the ticks stored in an `Instant` or `Duration`.
pub trait Scale: Clone + Copy + Ord + PartialOrd + Eq + PartialEq + Hash + Sized {
    const TICKS_PER_SECOND: u32;

    /// How many nanoseconds one tick of this scale covers.
    const NANOSECONDS_PER_TICK: u32 = 1_000_000_000 / Self::TICKS_PER_SECOND;
}

#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct Seconds;

#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct Milliseconds;

#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct Microseconds;

#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct Nanoseconds;

impl Scale for Seconds {
    const TICKS_PER_SECOND: u32 = 1;
}

impl Scale for Milliseconds {
    const TICKS_PER_SECOND: u32 = 1_000;
}

impl Scale for Microseconds {
    const TICKS_PER_SECOND: u32 = 1_000_000;
}

impl Scale for Nanoseconds {
    const TICKS_PER_SECOND: u32 = 1_000_000_000;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nanoseconds_per_tick() {
        assert_eq!(Seconds::NANOSECONDS_PER_TICK, 1_000_000_000);
        assert_eq!(Milliseconds::NANOSECONDS_PER_TICK, 1_000_000);
        assert_eq!(Microseconds::NANOSECONDS_PER_TICK, 1_000);
        assert_eq!(Nanoseconds::NANOSECONDS_PER_TICK, 1);
    }
}
