//! Aggregate metrics over a finished run.

use super::{Cpu, Outcome, Process, ProcessTable};

/// Averages and CPU figures for one run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub average_turnaround: f64,
    pub average_waiting: f64,
    pub average_response: f64,
    /// Clock value when the last process finished
    pub makespan: u32,
    /// Busy time over makespan, in percent
    pub cpu_utilization: f64,
}

pub struct MetricsCalculator;

impl MetricsCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Summarizes a run.
    ///
    /// # Panics
    ///
    /// If any process in `processes` has not finished. That means a scheduler
    /// returned early, and averages over it would be meaningless.
    pub fn summarize(&self, processes: &ProcessTable, cpu: &Cpu) -> Summary {
        let (mut turnaround, mut waiting, mut response) = (0u64, 0u64, 0u64);
        for outcome in processes.iter().map(finished_outcome) {
            turnaround += u64::from(outcome.turnaround);
            waiting += u64::from(outcome.waiting);
            response += u64::from(outcome.response);
        }
        let count = processes.len() as f64;

        let makespan = cpu.clock();
        let cpu_utilization = if makespan > 0 {
            f64::from(cpu.busy_time()) / f64::from(makespan) * 100.0
        } else {
            0.0
        };

        Summary {
            average_turnaround: turnaround as f64 / count,
            average_waiting: waiting as f64 / count,
            average_response: response as f64 / count,
            makespan,
            cpu_utilization,
        }
    }
}

impl Default for MetricsCalculator {
    fn default() -> Self {
        Self::new()
    }
}

fn finished_outcome(process: &Process) -> Outcome {
    process
        .outcome()
        .unwrap_or_else(|| panic!("{} has no completion time", process.name()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::{FcfsScheduler, Scheduler};

    #[test]
    fn test_averages() {
        let mut processes = ProcessTable::from_pairs(vec![(0, 5), (1, 3)]).unwrap();
        let mut cpu = Cpu::new();
        FcfsScheduler.schedule(&mut processes, &mut cpu);

        let summary = MetricsCalculator::new().summarize(&processes, &cpu);
        assert_eq!(summary.average_turnaround, 6.0);
        assert_eq!(summary.average_waiting, 2.0);
        assert_eq!(summary.average_response, 2.0);
        assert_eq!(summary.makespan, 8);
        assert_eq!(summary.cpu_utilization, 100.0);
    }

    #[test]
    fn test_idle_time_lowers_utilization() {
        let mut processes = ProcessTable::from_pairs(vec![(2, 2)]).unwrap();
        let mut cpu = Cpu::new();
        FcfsScheduler.schedule(&mut processes, &mut cpu);

        let summary = MetricsCalculator::default().summarize(&processes, &cpu);
        assert_eq!(summary.cpu_utilization, 50.0);
    }

    #[test]
    #[should_panic(expected = "P1 has no completion time")]
    fn test_unfinished_run_panics() {
        let processes = ProcessTable::from_pairs(vec![(0, 1)]).unwrap();
        MetricsCalculator::new().summarize(&processes, &Cpu::new());
    }
}
