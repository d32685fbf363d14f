use super::{Cpu, ProcessTable, Scheduler};
use std::collections::VecDeque;

/// Round Robin with a fixed quantum over a FIFO ready queue.
pub struct RoundRobinScheduler {
    quantum: u32,
}

/// The ready queue plus a membership flag per table index.
struct ReadyQueue {
    queue: VecDeque<usize>,
    queued: Vec<bool>,
}

impl ReadyQueue {
    fn new(len: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(len),
            queued: vec![false; len],
        }
    }

    fn push(&mut self, index: usize) {
        self.queue.push_back(index);
        self.queued[index] = true;
    }

    fn pop(&mut self) -> Option<usize> {
        let index = self.queue.pop_front()?;
        self.queued[index] = false;
        Some(index)
    }

    /// Queues, in table order, every ready process that is not already
    /// queued and is not `running`.
    fn admit(&mut self, processes: &ProcessTable, now: u32, running: Option<usize>) {
        for (index, _) in processes.ready(now) {
            if !self.queued[index] && Some(index) != running {
                self.push(index);
            }
        }
    }
}

impl RoundRobinScheduler {
    pub fn new(quantum: u32) -> Self {
        Self { quantum }
    }
}

impl Scheduler for RoundRobinScheduler {
    const NAME: &'static str = "Round Robin";

    fn schedule(&self, processes: &mut ProcessTable, cpu: &mut Cpu) {
        let mut ready = ReadyQueue::new(processes.len());

        if let Some(first) = processes.first_arrival() {
            cpu.idle_until(first);
        }
        ready.admit(processes, cpu.clock(), None);

        while !processes.all_complete() {
            let index = match ready.pop() {
                Some(index) => index,
                None => {
                    cpu.idle_until_next_arrival(processes);
                    ready.admit(processes, cpu.clock(), None);
                    continue;
                }
            };

            let process = &mut processes[index];
            let units = process.remaining().min(self.quantum);
            let finished = cpu.run(process, units);

            // Arrivals during the slice go ahead of the preempted process.
            ready.admit(processes, cpu.clock(), Some(index));
            if !finished {
                ready.push(index);
            }
        }
    }
}
