//! Core library for turning second counts into natural-language phrases.
//!
//! This crate decomposes a scalar second count into calendar-like units
//! (years, days, hours, minutes, seconds) and renders the non-zero counts
//! as an English list with correct pluralization. The computation is pure
//! and stateless, so it is safe to call from any thread.
//!
//! ## Usage Example
//!
//! ```rust
//! use sayspan_core::format_duration;
//!
//! assert_eq!(format_duration(0), "now");
//! assert_eq!(format_duration(62), "1 minute and 2 seconds");
//! assert_eq!(format_duration(3662), "1 hour, 1 minute and 2 seconds");
//! ```

pub mod decompose;
pub mod error;
pub mod render;
pub mod units;

// Re-exports for public API
pub use decompose::{Decomposed, decompose, split_unit};
pub use error::{SpanError, SpanResult};
pub use render::{join_phrases, render};
pub use units::{UNITS, Unit};

use log::trace;

/// Formats a second count as an English phrase.
///
/// Zero seconds is the literal `"now"`; anything else lists the non-zero
/// unit counts largest first, e.g. `3662` becomes
/// `"1 hour, 1 minute and 2 seconds"`. Total for any `u64` input.
#[must_use]
pub fn format_duration(seconds: u64) -> String {
    if seconds == 0 {
        return "now".to_string();
    }
    let decomposed = decompose(seconds);
    trace!("decomposed {seconds}s into {decomposed:?}");
    render(&decomposed)
}

/// Checked variant of [`format_duration`] for boundary code holding signed
/// input. Rejects negative values instead of silently wrapping them.
pub fn try_format_duration(seconds: i64) -> SpanResult<String> {
    let seconds = u64::try_from(seconds).map_err(|_| SpanError::NegativeDuration(seconds))?;
    Ok(format_duration(seconds))
}
