use super::{display::DisplayTerminal, Report};
use std::io;

pub enum ViewerEvent {
    Quit,
    Next,
    Previous,
    None,
}

/// Pages through finished reports in the terminal.
pub struct ReportViewer {
    terminal: DisplayTerminal,
    reports: Vec<Report>,
    selected: usize,
}

impl ReportViewer {
    pub fn new(reports: Vec<Report>) -> Result<Self, io::Error> {
        let terminal = DisplayTerminal::new()?;

        Ok(Self {
            terminal,
            reports,
            selected: 0,
        })
    }

    // Returns false if the viewer should close
    pub fn run(&mut self) -> Result<bool, io::Error> {
        let report = match self.reports.get(self.selected) {
            Some(report) => report,
            None => return Ok(false),
        };
        self.terminal
            .draw(report, self.selected, self.reports.len())?;

        match self.terminal.get_input() {
            ViewerEvent::Quit => return Ok(false),
            event => self.selected = step(self.selected, self.reports.len(), event),
        }
        Ok(true)
    }
}

/// Next selected index, wrapping at both ends.
fn step(selected: usize, len: usize, event: ViewerEvent) -> usize {
    match event {
        ViewerEvent::Next => (selected + 1) % len,
        ViewerEvent::Previous => (selected + len - 1) % len,
        _ => selected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_wraps() {
        assert_eq!(step(4, 5, ViewerEvent::Next), 0);
        assert_eq!(step(0, 5, ViewerEvent::Previous), 4);
        assert_eq!(step(2, 5, ViewerEvent::None), 2);
        assert_eq!(step(0, 1, ViewerEvent::Next), 0);
    }
}
