use super::{
    Cpu, FcfsScheduler, FeedbackScheduler, HrrnScheduler, MetricsCalculator, ProcessTable, Report,
    RoundRobinScheduler, Scheduler, SpnScheduler, SrtScheduler,
};
use super::table::bounded_time;
use crate::{
    config::COMPARISON_QUANTUM,
    error::{SchedError, SchedResult},
};
use log::info;
use std::fmt;

/// A policy together with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Fcfs,
    RoundRobin { quantum: u32 },
    Spn,
    Srt,
    Hrrn,
    Feedback { queues: usize, quantum: u32 },
}

impl Algorithm {
    /// Resolves a selector (`fcfs`, `rr`, `spn`, `srt`, `hrrn`, `feedback`).
    /// `quantum` and `queues` are only checked for the policies that use them.
    pub fn from_name(name: &str, quantum: i64, queues: i64) -> SchedResult<Self> {
        let positive_quantum = || {
            if quantum <= 0 {
                return Err(SchedError::NonPositiveQuantum(quantum));
            }
            bounded_time(quantum, || "time quantum".to_owned())
        };

        match name.to_lowercase().as_str() {
            "fcfs" => Ok(Self::Fcfs),
            "rr" => Ok(Self::RoundRobin {
                quantum: positive_quantum()?,
            }),
            "spn" => Ok(Self::Spn),
            "srt" => Ok(Self::Srt),
            "hrrn" => Ok(Self::Hrrn),
            "feedback" => {
                let queues = usize::try_from(queues)
                    .ok()
                    .filter(|&queues| queues > 0)
                    .ok_or(SchedError::InvalidQueueCount(queues))?;
                Ok(Self::Feedback {
                    queues,
                    quantum: positive_quantum()?,
                })
            }
            _ => Err(SchedError::UnknownAlgorithm(name.to_owned())),
        }
    }

    /// The runs of the compare-all mode, in order.
    pub fn comparison_set() -> [Algorithm; 5] {
        [
            Self::Fcfs,
            Self::RoundRobin {
                quantum: COMPARISON_QUANTUM,
            },
            Self::Spn,
            Self::Srt,
            Self::Hrrn,
        ]
    }

    pub fn validate(&self) -> SchedResult<()> {
        match *self {
            Self::RoundRobin { quantum: 0 } | Self::Feedback { quantum: 0, .. } => {
                Err(SchedError::NonPositiveQuantum(0))
            }
            Self::Feedback { queues: 0, .. } => Err(SchedError::InvalidQueueCount(0)),
            _ => Ok(()),
        }
    }

    pub fn is_preemptive(&self) -> bool {
        matches!(
            self,
            Self::RoundRobin { .. } | Self::Srt | Self::Feedback { .. }
        )
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fcfs => write!(f, "{}", FcfsScheduler::NAME),
            Self::RoundRobin { quantum } => {
                write!(f, "{} (q={})", RoundRobinScheduler::NAME, quantum)
            }
            Self::Spn => write!(f, "{}", SpnScheduler::NAME),
            Self::Srt => write!(f, "{}", SrtScheduler::NAME),
            Self::Hrrn => write!(f, "{}", HrrnScheduler::NAME),
            Self::Feedback { queues, quantum } => write!(
                f,
                "{} ({} queues, q={})",
                FeedbackScheduler::NAME,
                queues,
                quantum
            ),
        }
    }
}

/// Runs one algorithm on a fresh copy of `processes`.
///
/// Input problems are reported before anything is simulated. `processes`
/// itself is never modified.
pub fn run(algorithm: Algorithm, processes: &ProcessTable) -> SchedResult<Report> {
    algorithm.validate()?;
    processes.validate()?;

    let label = algorithm.to_string();
    let report = match algorithm {
        Algorithm::Fcfs => execute(FcfsScheduler, label, processes),
        Algorithm::RoundRobin { quantum } => {
            execute(RoundRobinScheduler::new(quantum), label, processes)
        }
        Algorithm::Spn => execute(SpnScheduler, label, processes),
        Algorithm::Srt => execute(SrtScheduler, label, processes),
        Algorithm::Hrrn => execute(HrrnScheduler, label, processes),
        Algorithm::Feedback { queues, quantum } => {
            execute(FeedbackScheduler::new(queues, quantum), label, processes)
        }
    };
    Ok(report)
}

/// Runs every algorithm of [`Algorithm::comparison_set`], each on its own copy.
pub fn compare_all(processes: &ProcessTable) -> SchedResult<Vec<Report>> {
    Algorithm::comparison_set()
        .into_iter()
        .map(|algorithm| run(algorithm, processes))
        .collect()
}

fn execute<S: Scheduler>(scheduler: S, label: String, processes: &ProcessTable) -> Report {
    info!("{}: scheduling {} processes", label, processes.len());

    let mut working = processes.fresh_copy();
    let mut cpu = Cpu::new();
    scheduler.schedule(&mut working, &mut cpu);
    assert!(
        working.all_complete(),
        "{} returned with unfinished processes",
        S::NAME
    );

    let summary = MetricsCalculator::new().summarize(&working, &cpu);
    info!(
        "{}: turnaround {:.2}, waiting {:.2}, response {:.2}",
        label, summary.average_turnaround, summary.average_waiting, summary.average_response
    );
    Report::new(label, &working, summary, cpu.into_timeline())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(Algorithm::from_name("FCFS", 0, 0).unwrap(), Algorithm::Fcfs);
        assert_eq!(
            Algorithm::from_name("rr", 3, 0).unwrap(),
            Algorithm::RoundRobin { quantum: 3 }
        );
        assert_eq!(
            Algorithm::from_name("feedback", 4, 2).unwrap(),
            Algorithm::Feedback {
                queues: 2,
                quantum: 4
            }
        );
        assert!(matches!(
            Algorithm::from_name("rr", -1, 0),
            Err(SchedError::NonPositiveQuantum(-1))
        ));
        assert!(matches!(
            Algorithm::from_name("feedback", 2, 0),
            Err(SchedError::InvalidQueueCount(0))
        ));
        assert!(matches!(
            Algorithm::from_name("lottery", 2, 2),
            Err(SchedError::UnknownAlgorithm(_))
        ));
    }

    #[test]
    fn test_labels() {
        assert_eq!(Algorithm::RoundRobin { quantum: 2 }.to_string(), "Round Robin (q=2)");
        assert_eq!(
            Algorithm::Feedback {
                queues: 3,
                quantum: 1
            }
            .to_string(),
            "Feedback (3 queues, q=1)"
        );
    }

    #[test]
    fn test_zero_parameters_rejected_before_running() {
        let processes = ProcessTable::from_pairs(vec![(0, 1)]).unwrap();

        assert!(matches!(
            run(Algorithm::RoundRobin { quantum: 0 }, &processes),
            Err(SchedError::NonPositiveQuantum(0))
        ));
        assert!(matches!(
            run(
                Algorithm::Feedback {
                    queues: 0,
                    quantum: 2
                },
                &processes
            ),
            Err(SchedError::InvalidQueueCount(0))
        ));
    }

    #[test]
    fn test_oversized_quantum_rejected() {
        assert!(matches!(
            Algorithm::from_name("rr", 5_000_000_000, 3),
            Err(SchedError::ValueOutOfRange { value: 5_000_000_000, .. })
        ));
        assert!(matches!(
            Algorithm::from_name("feedback", -4, 3),
            Err(SchedError::NonPositiveQuantum(-4))
        ));
        assert!(matches!(
            Algorithm::from_name("rr", i64::from(i32::MAX), 3),
            Ok(Algorithm::RoundRobin { quantum }) if quantum == i32::MAX as u32
        ));
        // Unused parameters are not checked.
        assert!(Algorithm::from_name("fcfs", 5_000_000_000, 3).is_ok());
    }

    #[test]
    fn test_preemptive_flags() {
        assert!(!Algorithm::Fcfs.is_preemptive());
        assert!(!Algorithm::Hrrn.is_preemptive());
        assert!(Algorithm::Srt.is_preemptive());
    }
}
