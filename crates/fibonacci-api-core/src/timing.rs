//! Wall-clock measurement for calculations.

use std::time::{Duration, Instant};

/// Number of decimal places kept in `calculation_time_seconds`.
pub const SECONDS_PRECISION: i32 = 6;

/// Convert a duration to seconds rounded to [`SECONDS_PRECISION`] places.
pub fn round_seconds(elapsed: Duration) -> f64 {
    let scale = 10f64.powi(SECONDS_PRECISION);
    (elapsed.as_secs_f64() * scale).round() / scale
}

/// Run `f` and return its output with the rounded elapsed seconds.
pub fn timed<T>(f: impl FnOnce() -> T) -> (T, f64) {
    let start = Instant::now();
    let output = f();
    (output, round_seconds(start.elapsed()))
}
