use super::{Process, ProcessTable};
use log::{debug, trace};
use std::fmt;

/// A stretch of time during which one process held the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slice {
    pub pid: usize,
    pub start: u32,
    pub end: u32,
}

impl Slice {
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// The simulated processor: a clock that only moves forward and the list of
/// slices it has executed.
#[derive(Debug, Default)]
pub struct Cpu {
    clock: u32,
    timeline: Vec<Slice>,
}

impl Cpu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clock(&self) -> u32 {
        self.clock
    }

    pub fn timeline(&self) -> &[Slice] {
        &self.timeline
    }

    pub fn into_timeline(self) -> Vec<Slice> {
        self.timeline
    }

    /// Sum of all executed slices.
    pub fn busy_time(&self) -> u32 {
        self.timeline.iter().map(Slice::len).sum()
    }

    /// Moves the clock forward to `time`. Earlier times are ignored.
    pub fn idle_until(&mut self, time: u32) {
        if time > self.clock {
            trace!("cpu idle {} -> {}", self.clock, time);
            self.clock = time;
        }
    }

    /// Jumps to the next arrival among unfinished processes.
    ///
    /// Callers only get here when nothing is ready, so some unfinished
    /// process must still be on its way.
    pub fn idle_until_next_arrival(&mut self, processes: &ProcessTable) {
        let next = processes
            .next_arrival_after(self.clock)
            .expect("unfinished processes left with no future arrival");
        self.idle_until(next);
    }

    /// Gives `process` the CPU for `units` time units, finishing it if that
    /// uses up its remaining time. Returns whether the process finished.
    pub fn run(&mut self, process: &mut Process, units: u32) -> bool {
        let start = self.clock;
        process.dispatch(start);
        process.consume(units);
        self.clock += units;
        self.record(process.pid(), start, self.clock);
        debug!(
            "{} ran {}..{} ({} left)",
            process.name(),
            start,
            self.clock,
            process.remaining()
        );

        if process.is_complete() {
            process.finish(self.clock);
            true
        } else {
            false
        }
    }

    fn record(&mut self, pid: usize, start: u32, end: u32) {
        match self.timeline.last_mut() {
            Some(last) if last.pid == pid && last.end == start => last.end = end,
            _ => self.timeline.push(Slice { pid, start, end }),
        }
    }
}

/// Gantt-style rendering of a timeline.
pub struct DisplayTimeline<'a>(pub &'a [Slice]);

impl fmt::Display for DisplayTimeline<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "|")?;
        for slice in self.0 {
            write!(f, " P{} {}-{} |", slice.pid, slice.start, slice.end)?;
        }
        Ok(())
    }
}
