mod cpu;
mod display;
mod fcfs;
mod feedback;
mod metrics;
mod process;
mod report;
mod response_ratio;
mod round_robin;
mod runner;
mod shortest_process;
mod shortest_remaining;
mod table;
mod viewer;

pub use cpu::{Cpu, DisplayTimeline, Slice};
pub use fcfs::FcfsScheduler;
pub use feedback::FeedbackScheduler;
pub use metrics::{MetricsCalculator, Summary};
pub use process::{Outcome, Process};
pub use report::{Report, ReportRow};
pub use response_ratio::{HrrnScheduler, ResponseRatio};
pub use round_robin::RoundRobinScheduler;
pub use runner::{compare_all, run, Algorithm};
pub use shortest_process::SpnScheduler;
pub use shortest_remaining::SrtScheduler;
pub use table::ProcessTable;
pub use viewer::ReportViewer;

/// A scheduling policy.
///
/// `schedule` drives `cpu` until every process in `processes` is finished.
/// It may only touch the table it is given; the runner hands each policy a
/// fresh copy.
///
/// Wherever a policy picks the best of several ready processes, equal
/// candidates go to the lowest table index.
pub trait Scheduler {
    const NAME: &'static str;

    fn schedule(&self, processes: &mut ProcessTable, cpu: &mut Cpu);
}
