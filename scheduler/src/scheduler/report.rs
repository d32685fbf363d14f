use super::{DisplayTimeline, ProcessTable, Slice, Summary};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub pid: usize,
    pub arrival: u32,
    pub burst: u32,
    pub completion: u32,
    pub turnaround: u32,
    pub waiting: u32,
    pub response: u32,
}

/// Everything one run produced, rows in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub algorithm: String,
    pub rows: Vec<ReportRow>,
    pub summary: Summary,
    pub timeline: Vec<Slice>,
}

impl Report {
    /// Builds the rows from a finished table. Panics on unfinished processes,
    /// like [`MetricsCalculator::summarize`](super::MetricsCalculator::summarize).
    pub fn new(
        algorithm: String,
        processes: &ProcessTable,
        summary: Summary,
        timeline: Vec<Slice>,
    ) -> Self {
        let rows = processes
            .iter()
            .map(|process| {
                let outcome = process
                    .outcome()
                    .unwrap_or_else(|| panic!("{} has no completion time", process.name()));
                ReportRow {
                    pid: process.pid(),
                    arrival: process.arrival(),
                    burst: process.burst(),
                    completion: outcome.completion,
                    turnaround: outcome.turnaround,
                    waiting: outcome.waiting,
                    response: outcome.response,
                }
            })
            .collect();

        Self {
            algorithm,
            rows,
            summary,
            timeline,
        }
    }

    pub fn row(&self, pid: usize) -> Option<&ReportRow> {
        self.rows.iter().find(|row| row.pid == pid)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "-".repeat(84);

        writeln!(f, "--- {} ---", self.algorithm)?;
        writeln!(
            f,
            "{:<10} {:<10} {:<10} {:<15} {:<15} {:<15} {:<15}",
            "PID", "Arrival", "Burst", "Completion", "Turnaround", "Waiting", "Response"
        )?;
        writeln!(f, "{}", rule)?;
        for row in &self.rows {
            writeln!(
                f,
                "{:<10} {:<10} {:<10} {:<15} {:<15} {:<15} {:<15}",
                format!("P{}", row.pid),
                row.arrival,
                row.burst,
                row.completion,
                row.turnaround,
                row.waiting,
                row.response
            )?;
        }
        writeln!(f, "{}", rule)?;
        writeln!(f, "Average Turnaround Time: {:.2}", self.summary.average_turnaround)?;
        writeln!(f, "Average Waiting Time: {:.2}", self.summary.average_waiting)?;
        writeln!(f, "Average Response Time: {:.2}", self.summary.average_response)?;
        writeln!(
            f,
            "CPU Utilization: {:.2}% over {} units",
            self.summary.cpu_utilization, self.summary.makespan
        )?;
        write!(f, "Timeline: {}", DisplayTimeline(&self.timeline))
    }
}

#[cfg(test)]
mod tests {
    use crate::scheduler::{run, Algorithm, ProcessTable};

    #[test]
    fn test_rendered_table() {
        let processes = ProcessTable::from_pairs(vec![(0, 5), (1, 3)]).unwrap();
        let report = run(Algorithm::Fcfs, &processes).unwrap();
        let text = report.to_string();

        assert!(text.starts_with("--- FCFS ---\n"));
        assert!(text.contains("P2         1          3          8"));
        assert!(text.contains("Average Waiting Time: 2.00\n"));
        assert!(text.ends_with("Timeline: | P1 0-5 | P2 5-8 |"));
    }

    #[test]
    fn test_row_lookup() {
        let processes = ProcessTable::from_pairs(vec![(0, 5), (1, 3)]).unwrap();
        let report = run(Algorithm::Fcfs, &processes).unwrap();

        assert_eq!(report.row(2).map(|row| row.response), Some(4));
        assert!(report.row(3).is_none());
    }
}
