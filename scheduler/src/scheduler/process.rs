/// Times recorded once a process has finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub completion: u32,
    pub turnaround: u32,
    pub waiting: u32,
    pub response: u32,
}

/// One simulated job.
///
/// `arrival` and `burst` never change after construction. Everything else is
/// run state owned by whichever scheduler is working on this copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Process {
    pid: usize,
    arrival: u32,
    burst: u32,
    remaining: u32,
    level: usize,
    response: Option<u32>,
    outcome: Option<Outcome>,
}

impl Process {
    const TOP_LEVEL: usize = 0;

    pub fn new(pid: usize, arrival: u32, burst: u32) -> Self {
        Self {
            pid,
            arrival,
            burst,
            remaining: burst,
            level: Process::TOP_LEVEL,
            response: None,
            outcome: None,
        }
    }

    /// A copy with the same inputs and none of the run state.
    pub fn fresh(&self) -> Self {
        Process::new(self.pid, self.arrival, self.burst)
    }

    pub fn pid(&self) -> usize {
        self.pid
    }

    pub fn name(&self) -> String {
        format!("P{}", self.pid)
    }

    pub fn arrival(&self) -> u32 {
        self.arrival
    }

    pub fn burst(&self) -> u32 {
        self.burst
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn started(&self) -> bool {
        self.response.is_some()
    }

    pub fn is_complete(&self) -> bool {
        self.remaining == 0
    }

    /// Arrived by `now` and still needs the CPU.
    pub fn is_ready(&self, now: u32) -> bool {
        self.arrival <= now && !self.is_complete()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Marks the process as holding the CPU at `now`. Only the first call
    /// records a response time.
    pub fn dispatch(&mut self, now: u32) {
        if !self.started() {
            self.response = Some(now - self.arrival);
        }
    }

    pub fn consume(&mut self, units: u32) {
        assert!(
            units <= self.remaining,
            "{} asked to run {} units with only {} remaining",
            self.name(),
            units,
            self.remaining
        );
        self.remaining -= units;
    }

    /// Moves one feedback level down, stopping at `lowest`.
    pub fn demote(&mut self, lowest: usize) {
        self.level = (self.level + 1).min(lowest);
    }

    /// Records the completion time and the derived metrics.
    pub fn finish(&mut self, now: u32) {
        assert!(self.is_complete(), "{} finished with work left", self.name());
        assert!(self.outcome.is_none(), "{} finished twice", self.name());

        let response = self
            .response
            .expect("a process cannot finish without being dispatched");
        let turnaround = now - self.arrival;
        self.outcome = Some(Outcome {
            completion: now,
            turnaround,
            waiting: turnaround - self.burst,
            response,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_is_recorded_once() {
        let mut process = Process::new(1, 3, 4);
        assert!(!process.started());
        process.dispatch(5);
        assert!(process.started());
        process.dispatch(9);
        process.consume(4);
        process.finish(12);

        let outcome = process.outcome().unwrap();
        assert_eq!(outcome.response, 2);
        assert_eq!(outcome.turnaround, 9);
        assert_eq!(outcome.waiting, 5);
    }

    #[test]
    fn test_demote_stops_at_lowest_level() {
        let mut process = Process::new(1, 0, 10);
        process.demote(1);
        process.demote(1);
        assert_eq!(process.level(), 1);
    }

    #[test]
    fn test_fresh_clears_run_state() {
        let mut process = Process::new(2, 1, 3);
        process.dispatch(1);
        process.consume(3);
        process.demote(3);
        process.finish(4);

        let copy = process.fresh();
        assert_eq!(copy.remaining(), 3);
        assert_eq!(copy.level(), 0);
        assert!(!copy.started());
        assert!(copy.outcome().is_none());
    }

    #[test]
    #[should_panic(expected = "finished twice")]
    fn test_finish_twice_panics() {
        let mut process = Process::new(1, 0, 1);
        process.dispatch(0);
        process.consume(1);
        process.finish(1);
        process.finish(1);
    }
}
