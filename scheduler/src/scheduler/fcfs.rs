use super::{Cpu, ProcessTable, Scheduler};

/// First-Come-First-Served: runs each process to completion in arrival order.
pub struct FcfsScheduler;

impl FcfsScheduler {
    /// Table indices sorted by arrival. The sort is stable, so processes
    /// arriving together keep their input order.
    fn arrival_order(processes: &ProcessTable) -> Vec<usize> {
        let mut order: Vec<usize> = (0..processes.len()).collect();
        order.sort_by_key(|&index| processes[index].arrival());
        order
    }
}

impl Scheduler for FcfsScheduler {
    const NAME: &'static str = "FCFS";

    fn schedule(&self, processes: &mut ProcessTable, cpu: &mut Cpu) {
        for index in FcfsScheduler::arrival_order(processes) {
            let process = &mut processes[index];
            cpu.idle_until(process.arrival());
            let burst = process.burst();
            cpu.run(process, burst);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule(pairs: &[(i64, i64)]) -> (ProcessTable, Cpu) {
        let mut processes = ProcessTable::from_pairs(pairs.to_vec()).unwrap();
        let mut cpu = Cpu::new();
        FcfsScheduler.schedule(&mut processes, &mut cpu);
        (processes, cpu)
    }

    #[test]
    fn test_two_processes() {
        let (processes, _) = schedule(&[(0, 5), (1, 3)]);

        let first = processes[0].outcome().unwrap();
        assert_eq!(
            (first.completion, first.turnaround, first.waiting, first.response),
            (5, 5, 0, 0)
        );

        let second = processes[1].outcome().unwrap();
        assert_eq!(
            (second.completion, second.turnaround, second.waiting, second.response),
            (8, 7, 4, 4)
        );
    }

    #[test]
    fn test_runs_in_arrival_order_not_input_order() {
        let (processes, cpu) = schedule(&[(4, 2), (0, 3)]);

        assert_eq!(processes[1].outcome().unwrap().completion, 3);
        assert_eq!(processes[0].outcome().unwrap().completion, 6);
        assert_eq!(cpu.timeline()[0].pid, 2);
    }

    #[test]
    fn test_equal_arrivals_keep_input_order() {
        let (processes, _) = schedule(&[(1, 4), (1, 1), (1, 2)]);

        assert_eq!(processes[0].outcome().unwrap().completion, 5);
        assert_eq!(processes[1].outcome().unwrap().completion, 6);
        assert_eq!(processes[2].outcome().unwrap().completion, 8);
    }

    #[test]
    fn test_idle_gap_is_skipped() {
        let (processes, cpu) = schedule(&[(0, 2), (10, 1)]);

        let late = processes[1].outcome().unwrap();
        assert_eq!(late.completion, 11);
        assert_eq!(late.response, 0);
        assert_eq!(cpu.clock(), 11);
        assert_eq!(cpu.busy_time(), 3);
    }
}
