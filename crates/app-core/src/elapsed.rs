//! Elapsed-time arithmetic for the counter display.
//!
//! Everything here works on plain epoch milliseconds so it runs identically
//! on native and web targets; the web frontend supplies wall-clock values.

use crate::constants::{MINUTES_PER_DAY, MINUTES_PER_HOUR, ONE_MIN_MS};

/// Whole days/hours/minutes elapsed since the start instant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ElapsedDhm {
    pub days: i64,
    pub hours: u32,
    pub minutes: u32,
}

/// Milliseconds between `start_ms` and `now_ms`, clamped so a start instant
/// in the future reads as zero elapsed.
#[inline]
pub fn elapsed_ms(start_ms: f64, now_ms: f64) -> i64 {
    (now_ms - start_ms).max(0.0) as i64
}

/// Decompose elapsed milliseconds into whole days, hours (0-23) and
/// minutes (0-59). Non-positive input yields all zeros.
pub fn elapsed_dhm(ms: i64) -> ElapsedDhm {
    if ms <= 0 {
        return ElapsedDhm::default();
    }
    let total_minutes = ms / ONE_MIN_MS;
    ElapsedDhm {
        days: total_minutes / MINUTES_PER_DAY,
        hours: ((total_minutes % MINUTES_PER_DAY) / MINUTES_PER_HOUR) as u32,
        minutes: (total_minutes % MINUTES_PER_HOUR) as u32,
    }
}
