//! Errors reported before a simulation starts.
//!
//! Every variant is an input problem. Broken internal invariants (an
//! unfinished process reaching the metrics stage, a process finishing twice)
//! are panics, not errors.

use std::{fmt, io};

#[derive(Debug)]
pub enum SchedError {
    /// The process list is empty
    NoProcesses,
    /// More processes than the simulator accepts
    TooManyProcesses { count: usize, max: usize },
    /// Arrival time below zero
    NegativeArrival { pid: usize, arrival: i64 },
    /// Burst time of zero or less
    NonPositiveBurst { pid: usize, burst: i64 },
    /// Round Robin or Feedback quantum of zero or less
    NonPositiveQuantum(i64),
    /// Feedback queue count below one
    InvalidQueueCount(i64),
    /// Time value larger than the simulator accepts
    ValueOutOfRange { what: String, value: i64, max: i64 },
    /// Latest arrival plus total burst does not fit the simulated clock
    HorizonTooLong { end: u64, max: u64 },
    /// Algorithm selector that names no known policy
    UnknownAlgorithm(String),
    /// Malformed process description
    Parse { line: usize, reason: String },
    /// Failure reading a process file
    Io(io::Error),
}

impl fmt::Display for SchedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoProcesses => write!(f, "at least one process is required"),
            Self::TooManyProcesses { count, max } => {
                write!(f, "{} processes given, at most {} are supported", count, max)
            }
            Self::NegativeArrival { pid, arrival } => {
                write!(f, "P{} has a negative arrival time ({})", pid, arrival)
            }
            Self::NonPositiveBurst { pid, burst } => {
                write!(f, "P{} needs a positive burst time, got {}", pid, burst)
            }
            Self::NonPositiveQuantum(quantum) => {
                write!(f, "time quantum must be positive, got {}", quantum)
            }
            Self::InvalidQueueCount(queues) => {
                write!(f, "feedback needs at least one queue, got {}", queues)
            }
            Self::ValueOutOfRange { what, value, max } => {
                write!(f, "{} {} is out of range, at most {} is supported", what, value, max)
            }
            Self::HorizonTooLong { end, max } => write!(
                f,
                "the schedule would run until {}, past the clock limit of {}",
                end, max
            ),
            Self::UnknownAlgorithm(name) => write!(f, "unknown algorithm \"{}\"", name),
            Self::Parse { line, reason } => write!(f, "line {}: {}", line, reason),
            Self::Io(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for SchedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for SchedError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

pub type SchedResult<T> = Result<T, SchedError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offender() {
        let err = SchedError::NonPositiveBurst { pid: 3, burst: 0 };
        assert_eq!(err.to_string(), "P3 needs a positive burst time, got 0");

        let err = SchedError::Parse {
            line: 4,
            reason: "expected two numbers".to_owned(),
        };
        assert_eq!(err.to_string(), "line 4: expected two numbers");

        let err = SchedError::ValueOutOfRange {
            what: "P1 arrival time".to_owned(),
            value: 5_000_000_000,
            max: 2_147_483_647,
        };
        assert_eq!(
            err.to_string(),
            "P1 arrival time 5000000000 is out of range, at most 2147483647 is supported"
        );
    }
}
