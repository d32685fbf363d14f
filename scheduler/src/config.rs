//! Limits and defaults.

use std::time::Duration;

/// Largest process set the simulator accepts.
pub const MAX_PROCESSES: usize = 20;

/// Largest arrival, burst or quantum accepted.
pub const MAX_TIME_VALUE: i64 = i32::MAX as i64;

/// Round Robin quantum used by the compare-all run.
pub const COMPARISON_QUANTUM: u32 = 2;

pub const DEFAULT_QUANTUM: u32 = 2;

pub const DEFAULT_QUEUES: usize = 3;

/// How often the viewer wakes up when no key is pressed.
pub const TICK_RATE: Duration = Duration::from_millis(200);

/// `(arrival, burst)` pairs used when no processes are given.
pub fn default_workload() -> Vec<(i64, i64)> {
    vec![(0, 3), (2, 6), (4, 4), (6, 5), (8, 2)]
}
