use super::{Cpu, ProcessTable, Scheduler};

/// Shortest Remaining Time: re-decides every time unit.
///
/// Selection is a linear scan per unit, `O(total burst * n)` overall. A heap
/// would need the same `(remaining, index)` key to keep the tie order.
pub struct SrtScheduler;

impl SrtScheduler {
    const STEP: u32 = 1;

    /// The ready process with the least remaining time, lowest index on ties.
    pub fn select(processes: &ProcessTable, now: u32) -> Option<usize> {
        processes
            .ready(now)
            .min_by_key(|&(index, process)| (process.remaining(), index))
            .map(|(index, _)| index)
    }
}

impl Scheduler for SrtScheduler {
    const NAME: &'static str = "SRT";

    fn schedule(&self, processes: &mut ProcessTable, cpu: &mut Cpu) {
        while !processes.all_complete() {
            match SrtScheduler::select(processes, cpu.clock()) {
                Some(index) => {
                    cpu.run(&mut processes[index], SrtScheduler::STEP);
                }
                None => cpu.idle_until_next_arrival(processes),
            }
        }
    }
}
