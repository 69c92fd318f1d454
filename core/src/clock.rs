//! Wall-clock source and tick pacing constants.
//!
//! The engine never calls platform time APIs directly — it stamps each tick
//! through [`now_ms`] so tests and fast-forward drivers can inject synthetic
//! timestamps via the `*_at` entry points instead.

use crate::types::Millis;

/// Fixed tick rate of the update loop.
pub const TICKS_PER_SECOND: u32 = 10;

/// Period between ticks at the fixed rate, in milliseconds.
pub const TICK_INTERVAL_MS: f64 = 1000.0 / TICKS_PER_SECOND as f64;

/// Accumulated play time between automatic persistence flushes, in seconds.
pub const AUTO_SAVE_INTERVAL_SECS: f64 = 30.0;

/// Current wall-clock time as Unix milliseconds.
pub fn now_ms() -> Millis {
    chrono::Utc::now().timestamp_millis() as Millis
}
