//! Shared primitive types used across the entire simulation.

/// Absolute wall-clock time in Unix milliseconds.
///
/// Stored as `f64` so timestamps survive JSON snapshots unchanged and
/// arithmetic against fractional tick deltas stays in one domain.
pub type Millis = f64;

/// A span of elapsed time in seconds. All per-second rates scale by this.
pub type Seconds = f64;

/// The canonical run identifier.
pub type RunId = String;
