use super::{Cpu, Process, ProcessTable, Scheduler};
use log::debug;
use std::cmp::Ordering;

/// `(wait + burst) / burst`, kept as an exact fraction so that equal ratios
/// compare equal.
#[derive(Debug, Clone, Copy)]
pub struct ResponseRatio {
    numerator: u64,
    denominator: u64,
}

impl ResponseRatio {
    pub fn of(process: &Process, now: u32) -> Self {
        let wait = u64::from(now - process.arrival());
        let burst = u64::from(process.burst());
        Self {
            numerator: wait + burst,
            denominator: burst,
        }
    }

    pub fn as_f64(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }
}

impl PartialEq for ResponseRatio {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ResponseRatio {}

impl PartialOrd for ResponseRatio {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ResponseRatio {
    fn cmp(&self, other: &Self) -> Ordering {
        let left = u128::from(self.numerator) * u128::from(other.denominator);
        let right = u128::from(other.numerator) * u128::from(self.denominator);
        left.cmp(&right)
    }
}

/// Highest Response Ratio Next: non-preemptive, favours the most overdue job.
pub struct HrrnScheduler;

impl HrrnScheduler {
    /// The ready process with the highest response ratio at `now`, lowest
    /// index on ties.
    pub fn select(processes: &ProcessTable, now: u32) -> Option<usize> {
        processes
            .ready(now)
            .map(|(index, process)| (index, ResponseRatio::of(process, now)))
            .max_by(|(a_index, a_ratio), (b_index, b_ratio)| {
                a_ratio.cmp(b_ratio).then_with(|| b_index.cmp(a_index))
            })
            .map(|(index, ratio)| {
                debug!(
                    "hrrn picked P{} with ratio {:.2}",
                    processes[index].pid(),
                    ratio.as_f64()
                );
                index
            })
    }
}

impl Scheduler for HrrnScheduler {
    const NAME: &'static str = "HRRN";

    fn schedule(&self, processes: &mut ProcessTable, cpu: &mut Cpu) {
        while !processes.all_complete() {
            match HrrnScheduler::select(processes, cpu.clock()) {
                Some(index) => {
                    let process = &mut processes[index];
                    let burst = process.burst();
                    cpu.run(process, burst);
                }
                None => cpu.idle_until_next_arrival(processes),
            }
        }
    }
}
