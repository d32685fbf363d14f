use super::Process;
use crate::{
    config::{MAX_PROCESSES, MAX_TIME_VALUE},
    error::{SchedError, SchedResult},
};
use std::ops::{Index, IndexMut};

/// The ordered process set. Position `i` holds process `P{i + 1}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessTable {
    processes: Vec<Process>,
}

impl ProcessTable {
    /// Builds a table from `(arrival, burst)` pairs in input order.
    pub fn from_pairs<I>(pairs: I) -> SchedResult<Self>
    where
        I: IntoIterator<Item = (i64, i64)>,
    {
        let processes = pairs
            .into_iter()
            .enumerate()
            .map(|(index, (arrival, burst))| -> SchedResult<Process> {
                let pid = index + 1;
                if arrival < 0 {
                    return Err(SchedError::NegativeArrival { pid, arrival });
                }
                if burst <= 0 {
                    return Err(SchedError::NonPositiveBurst { pid, burst });
                }
                let arrival = bounded_time(arrival, || format!("P{} arrival time", pid))?;
                let burst = bounded_time(burst, || format!("P{} burst time", pid))?;
                Ok(Process::new(pid, arrival, burst))
            })
            .collect::<SchedResult<Vec<_>>>()?;

        let table = Self { processes };
        table.validate()?;
        Ok(table)
    }

    /// Checks the size bounds and that no schedule can run the clock past
    /// `u32::MAX`. Per-process values are checked on construction.
    pub fn validate(&self) -> SchedResult<()> {
        match self.processes.len() {
            0 => return Err(SchedError::NoProcesses),
            count if count > MAX_PROCESSES => {
                return Err(SchedError::TooManyProcesses {
                    count,
                    max: MAX_PROCESSES,
                })
            }
            _ => {}
        }

        // The clock only idles up to an arrival, so it never passes the
        // latest arrival plus all the work.
        let latest = self.processes.iter().map(Process::arrival).max();
        let end = u64::from(latest.unwrap_or(0)) + self.total_burst();
        if end > u64::from(u32::MAX) {
            return Err(SchedError::HorizonTooLong {
                end,
                max: u64::from(u32::MAX),
            });
        }
        Ok(())
    }

    /// A deep copy ready for a new run.
    pub fn fresh_copy(&self) -> Self {
        Self {
            processes: self.processes.iter().map(Process::fresh).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.processes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Process> {
        self.processes.iter()
    }

    pub fn all_complete(&self) -> bool {
        self.processes.iter().all(Process::is_complete)
    }

    /// Indices of processes that have arrived by `now` and still need the CPU.
    pub fn ready(&self, now: u32) -> impl Iterator<Item = (usize, &Process)> {
        self.processes
            .iter()
            .enumerate()
            .filter(move |(_, process)| process.is_ready(now))
    }

    /// Earliest arrival strictly after `now` among unfinished processes.
    pub fn next_arrival_after(&self, now: u32) -> Option<u32> {
        self.processes
            .iter()
            .filter(|process| !process.is_complete() && process.arrival() > now)
            .map(Process::arrival)
            .min()
    }

    pub fn first_arrival(&self) -> Option<u32> {
        self.processes.iter().map(Process::arrival).min()
    }

    pub fn total_burst(&self) -> u64 {
        self.processes.iter().map(|process| u64::from(process.burst())).sum()
    }
}

/// Converts a validated non-negative time value, rejecting anything above
/// [`MAX_TIME_VALUE`].
pub(crate) fn bounded_time<F>(value: i64, what: F) -> SchedResult<u32>
where
    F: FnOnce() -> String,
{
    if value > MAX_TIME_VALUE {
        return Err(SchedError::ValueOutOfRange {
            what: what(),
            value,
            max: MAX_TIME_VALUE,
        });
    }
    u32::try_from(value).map_err(|_| SchedError::ValueOutOfRange {
        what: what(),
        value,
        max: MAX_TIME_VALUE,
    })
}

impl Index<usize> for ProcessTable {
    type Output = Process;

    fn index(&self, index: usize) -> &Process {
        &self.processes[index]
    }
}

impl IndexMut<usize> for ProcessTable {
    fn index_mut(&mut self, index: usize) -> &mut Process {
        &mut self.processes[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pids_follow_input_order() {
        let table = ProcessTable::from_pairs(vec![(4, 1), (0, 2)]).unwrap();
        assert_eq!(table[0].pid(), 1);
        assert_eq!(table[1].pid(), 2);
        assert_eq!(table[1].arrival(), 0);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            ProcessTable::from_pairs(Vec::<(i64, i64)>::new()),
            Err(SchedError::NoProcesses)
        ));
        assert!(matches!(
            ProcessTable::from_pairs(vec![(0, 1), (-1, 2)]),
            Err(SchedError::NegativeArrival { pid: 2, arrival: -1 })
        ));
        assert!(matches!(
            ProcessTable::from_pairs(vec![(0, 0)]),
            Err(SchedError::NonPositiveBurst { pid: 1, burst: 0 })
        ));
        assert!(matches!(
            ProcessTable::from_pairs(vec![(0, 1); MAX_PROCESSES + 1]),
            Err(SchedError::TooManyProcesses { .. })
        ));
    }

    #[test]
    fn test_rejects_values_past_the_time_limit() {
        assert!(matches!(
            ProcessTable::from_pairs(vec![(5_000_000_000, 1)]),
            Err(SchedError::ValueOutOfRange { value: 5_000_000_000, .. })
        ));
        assert!(matches!(
            ProcessTable::from_pairs(vec![(0, 1), (0, MAX_TIME_VALUE + 1)]),
            Err(SchedError::ValueOutOfRange { .. })
        ));

        match ProcessTable::from_pairs(vec![(MAX_TIME_VALUE, 1)]) {
            Ok(table) => assert_eq!(table[0].arrival(), i32::MAX as u32),
            other => panic!("Expected the largest arrival to be accepted, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_schedules_past_the_clock_limit() {
        // Each value is in range, together they overflow a u32 clock.
        assert!(matches!(
            ProcessTable::from_pairs(vec![(MAX_TIME_VALUE, MAX_TIME_VALUE), (0, 2)]),
            Err(SchedError::HorizonTooLong { end: 4_294_967_296, .. })
        ));
        assert!(ProcessTable::from_pairs(vec![(MAX_TIME_VALUE, MAX_TIME_VALUE), (0, 1)]).is_ok());
    }

    #[test]
    fn test_fresh_copy_leaves_original_alone() {
        let mut table = ProcessTable::from_pairs(vec![(0, 2)]).unwrap();
        let copy = table.fresh_copy();
        table[0].dispatch(0);
        table[0].consume(2);

        assert!(table.all_complete());
        assert!(!copy.all_complete());
        assert_eq!(copy[0].remaining(), 2);
    }

    #[test]
    fn test_next_arrival_skips_finished_and_past() {
        let mut table = ProcessTable::from_pairs(vec![(0, 1), (5, 1), (3, 1)]).unwrap();
        assert_eq!(table.next_arrival_after(0), Some(3));

        table[2].dispatch(3);
        table[2].consume(1);
        assert_eq!(table.next_arrival_after(0), Some(5));
        assert_eq!(table.next_arrival_after(5), None);
    }
}
