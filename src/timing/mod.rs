//! Elapsed-time measurement.

use std::time::{Duration, Instant};

/// Run `task` and return its output with the wall time it took.
pub fn measure<T, F>(task: F) -> (T, Duration)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let output = task();
    (output, start.elapsed())
}

/// Run `task` and return only the elapsed milliseconds.
pub fn measure_millis<F>(task: F) -> u128
where
    F: FnOnce(),
{
    measure(task).1.as_millis()
}
