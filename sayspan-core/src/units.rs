//! Fixed conversion constants for the calendar-like units.
//!
//! Every unit has a fixed, non-leap-aware length in seconds. A year is
//! exactly 365 days. Both decomposition and rendering walk [`UNITS`] in
//! its declared order, so the table is the single source of truth for
//! unit names, lengths, and ordering.

/// A single unit of time with its singular English name and fixed length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unit {
    pub name: &'static str,
    pub seconds: u64,
}

pub const MINUTE_SECONDS: u64 = 60;
pub const HOUR_SECONDS: u64 = 60 * MINUTE_SECONDS;
pub const DAY_SECONDS: u64 = 24 * HOUR_SECONDS;
pub const YEAR_SECONDS: u64 = 365 * DAY_SECONDS;

/// Units ordered largest-to-smallest. The ordering is load-bearing:
/// decomposition divides out each entry in sequence, and rendering lists
/// non-zero counts in the same sequence.
pub const UNITS: [Unit; 5] = [
    Unit { name: "year", seconds: YEAR_SECONDS },
    Unit { name: "day", seconds: DAY_SECONDS },
    Unit { name: "hour", seconds: HOUR_SECONDS },
    Unit { name: "minute", seconds: MINUTE_SECONDS },
    Unit { name: "second", seconds: 1 },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_lengths() {
        assert_eq!(MINUTE_SECONDS, 60);
        assert_eq!(HOUR_SECONDS, 3_600);
        assert_eq!(DAY_SECONDS, 86_400);
        assert_eq!(YEAR_SECONDS, 31_536_000);
    }

    #[test]
    fn test_units_ordered_largest_to_smallest() {
        for pair in UNITS.windows(2) {
            assert!(pair[0].seconds > pair[1].seconds);
        }
        assert_eq!(UNITS[4].seconds, 1);
    }
}
