use super::{Cpu, ProcessTable, Scheduler};
use log::debug;

/// Multi-level feedback with one quantum shared by every level.
///
/// Each unfinished slice costs the process one level, down to the last
/// queue. Among ready processes the highest level wins, then the earliest
/// arrival, then the lowest index.
pub struct FeedbackScheduler {
    queues: usize,
    quantum: u32,
}

impl FeedbackScheduler {
    pub fn new(queues: usize, quantum: u32) -> Self {
        Self { queues, quantum }
    }

    pub fn select(processes: &ProcessTable, now: u32) -> Option<usize> {
        processes
            .ready(now)
            .min_by_key(|&(index, process)| (process.level(), process.arrival(), index))
            .map(|(index, _)| index)
    }

    fn lowest_level(&self) -> usize {
        self.queues.saturating_sub(1)
    }
}

impl Scheduler for FeedbackScheduler {
    const NAME: &'static str = "Feedback";

    fn schedule(&self, processes: &mut ProcessTable, cpu: &mut Cpu) {
        while !processes.all_complete() {
            let index = match FeedbackScheduler::select(processes, cpu.clock()) {
                Some(index) => index,
                None => {
                    cpu.idle_until_next_arrival(processes);
                    continue;
                }
            };

            let process = &mut processes[index];
            let units = process.remaining().min(self.quantum);
            if !cpu.run(process, units) {
                process.demote(self.lowest_level());
                debug!("{} demoted to level {}", process.name(), process.level());
            }
        }
    }
}
