//! # Uniprocessor scheduling simulator
//!
//! Replays a fixed set of CPU-bound processes through six classical
//! policies on a simulated clock and reports completion, turnaround,
//! waiting and response times.
//!
//! - FCFS, SPN and HRRN run each selected process to completion.
//! - Round Robin and Feedback preempt after a quantum.
//! - SRT re-decides every time unit.
//!
//! Each run works on its own copy of the input, so runs never affect each
//! other and repeating a run gives the same report.
//!
//! ```rust
//! use uniprocessor_scheduler::{run, Algorithm, ProcessTable};
//!
//! let processes = ProcessTable::from_pairs(vec![(0, 5), (1, 3)]).unwrap();
//! let report = run(Algorithm::RoundRobin { quantum: 2 }, &processes).unwrap();
//! assert_eq!(report.rows[1].completion, 7);
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod scheduler;

pub use error::{SchedError, SchedResult};
pub use scheduler::{compare_all, run, Algorithm, ProcessTable, Report};
