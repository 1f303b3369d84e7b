//! Splitting a total second count into calendar-like unit counts.
//!
//! Decomposition divides the running remainder by each entry of
//! [`UNITS`](crate::units::UNITS) in turn. Because the smallest entry is
//! one second long, the final remainder lands in the seconds slot with no
//! separate step.

use crate::units::{UNITS, Unit};

/// A duration broken down into fixed-length unit counts.
///
/// Invariant: [`total_seconds`](Decomposed::total_seconds) reconstructs the
/// input to [`decompose`] exactly, and every field except `years` is
/// strictly below the next-larger unit (days < 365, hours < 24,
/// minutes < 60, seconds < 60).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Decomposed {
    pub years: u64,
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Decomposed {
    /// Recombines the unit counts into the original total second count.
    #[must_use]
    pub fn total_seconds(&self) -> u64 {
        self.counts()
            .into_iter()
            .zip(UNITS)
            .map(|(count, unit)| count * unit.seconds)
            .sum()
    }

    /// Unit counts in table order, largest first.
    pub(crate) fn counts(&self) -> [u64; 5] {
        [self.years, self.days, self.hours, self.minutes, self.seconds]
    }

    /// Pairs each count with its unit, largest first.
    pub(crate) fn by_unit(&self) -> impl Iterator<Item = (u64, Unit)> {
        self.counts().into_iter().zip(UNITS)
    }
}

/// Splits `remaining` by one unit length, returning `(count, remainder)`.
///
/// Plain integer division and modulo, so this is total for any
/// non-negative remainder and positive unit length.
#[must_use]
pub fn split_unit(unit_seconds: u64, remaining: u64) -> (u64, u64) {
    (remaining / unit_seconds, remaining % unit_seconds)
}

/// Decomposes a total second count into years, days, hours, minutes, and
/// seconds by dividing out each unit of the table against the running
/// remainder.
#[must_use]
pub fn decompose(total_seconds: u64) -> Decomposed {
    let mut counts = [0u64; 5];
    let mut remaining = total_seconds;
    for (slot, unit) in counts.iter_mut().zip(UNITS) {
        let (count, rest) = split_unit(unit.seconds, remaining);
        *slot = count;
        remaining = rest;
    }

    let decomposed = Decomposed {
        years: counts[0],
        days: counts[1],
        hours: counts[2],
        minutes: counts[3],
        seconds: counts[4],
    };
    debug_assert_eq!(decomposed.total_seconds(), total_seconds);
    decomposed
}
