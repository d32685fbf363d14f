use super::{Cpu, ProcessTable, Scheduler};

/// Shortest Process Next: non-preemptive, picks the smallest burst.
pub struct SpnScheduler;

impl SpnScheduler {
    /// The ready process with the smallest burst, lowest index on ties.
    pub fn select(processes: &ProcessTable, now: u32) -> Option<usize> {
        processes
            .ready(now)
            .min_by_key(|&(index, process)| (process.burst(), index))
            .map(|(index, _)| index)
    }
}

impl Scheduler for SpnScheduler {
    const NAME: &'static str = "SPN";

    fn schedule(&self, processes: &mut ProcessTable, cpu: &mut Cpu) {
        while !processes.all_complete() {
            match SpnScheduler::select(processes, cpu.clock()) {
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
