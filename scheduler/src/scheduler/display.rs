use super::{viewer::ViewerEvent, DisplayTimeline, Report};
use crate::config::TICK_RATE;
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use std::{
    io::{self, Stdout},
    sync::mpsc::{self, Receiver},
    thread,
    time::{Duration, Instant},
};
use tui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, Wrap},
    Terminal,
};

pub enum DisplayEvent {
    Input(KeyEvent),
    Tick,
}

pub struct DisplayTerminal {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    input_rx: Receiver<DisplayEvent>,
}

impl DisplayTerminal {
    pub fn new() -> Result<Self, io::Error> {
        crossterm::terminal::enable_raw_mode()?;

        // Set up the input handling thread. It exits once the receiver is gone.
        let (input_tx, input_rx) = mpsc::channel();
        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = TICK_RATE
                    .checked_sub(last_tick.elapsed())
                    .unwrap_or(Duration::ZERO);

                match event::poll(timeout) {
                    Ok(true) => {
                        if let Ok(Event::Key(key)) = event::read() {
                            if input_tx.send(DisplayEvent::Input(key)).is_err() {
                                return;
                            }
                        }
                    }
                    Ok(false) => {}
                    Err(_) => return,
                }

                if last_tick.elapsed() >= TICK_RATE {
                    if input_tx.send(DisplayEvent::Tick).is_err() {
                        return;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        // Set up the terminal-user-interface
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(Self { terminal, input_rx })
    }

    pub fn draw(&mut self, report: &Report, position: usize, total: usize) -> io::Result<()> {
        self.terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .margin(1)
                .constraints([
                    Constraint::Length(3),
                    Constraint::Min(5),
                    Constraint::Length(8),
                ])
                .split(f.size());

            let header = Paragraph::new(format!(
                "{} | {}/{} | <-/-> switch, q quit",
                report.algorithm,
                position + 1,
                total
            ))
            .style(
                Style::default()
                    .add_modifier(Modifier::BOLD)
                    .fg(Color::LightBlue),
            )
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Algorithm")
                    .border_type(BorderType::Rounded),
            );

            f.render_widget(header, chunks[0]);

            let items = report.rows.iter().map(|row| {
                Row::new(vec![
                    Cell::from(format!("P{}", row.pid))
                        .style(Style::default().add_modifier(Modifier::BOLD)),
                    Cell::from("|"),
                    Cell::from(row.arrival.to_string()),
                    Cell::from("|"),
                    Cell::from(row.burst.to_string()),
                    Cell::from("|"),
                    Cell::from(row.completion.to_string()),
                    Cell::from("|"),
                    Cell::from(row.turnaround.to_string()),
                    Cell::from("|"),
                    Cell::from(row.waiting.to_string()),
                    Cell::from("|"),
                    Cell::from(row.response.to_string()),
                ])
            });

            let table = Table::new(items)
                .header(
                    Row::new(vec![
                        "PID",
                        "|",
                        "Arrival",
                        "|",
                        "Burst",
                        "|",
                        "Completion",
                        "|",
                        "Turnaround",
                        "|",
                        "Waiting",
                        "|",
                        "Response",
                    ])
                    .style(Style::default().add_modifier(Modifier::BOLD)),
                )
                .widths(&[
                    Constraint::Length(4),
                    Constraint::Length(1),
                    Constraint::Length(7),
                    Constraint::Length(1),
                    Constraint::Length(5),
                    Constraint::Length(1),
                    Constraint::Length(10),
                    Constraint::Length(1),
                    Constraint::Length(10),
                    Constraint::Length(1),
                    Constraint::Length(7),
                    Constraint::Length(1),
                    Constraint::Length(8),
                ])
                .block(Block::default().title("Processes").borders(Borders::ALL))
                .style(Style::default().fg(Color::LightGreen))
                .column_spacing(1);

            f.render_widget(table, chunks[1]);

            let summary = &report.summary;
            let summary = Paragraph::new(format!(
                "Average turnaround: {:.2}\nAverage waiting:    {:.2}\nAverage response:   {:.2}\nCPU utilization:    {:.2}% over {} units\n{}",
                summary.average_turnaround,
                summary.average_waiting,
                summary.average_response,
                summary.cpu_utilization,
                summary.makespan,
                DisplayTimeline(&report.timeline)
            ))
            .wrap(Wrap { trim: true })
            .block(Block::default().title("Summary").borders(Borders::ALL));

            f.render_widget(summary, chunks[2]);
        })?;
        Ok(())
    }

    pub fn get_input(&self) -> ViewerEvent {
        // Get the user's input and return a matching event
        match self.input_rx.recv() {
            Ok(DisplayEvent::Input(key)) => {
                if key.modifiers.is_empty() {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => return ViewerEvent::Quit,
                        KeyCode::Right | KeyCode::Char('n') => return ViewerEvent::Next,
                        KeyCode::Left | KeyCode::Char('p') => return ViewerEvent::Previous,
                        _ => {}
                    };
                }
            }
            Ok(DisplayEvent::Tick) => {}
            Err(_) => return ViewerEvent::Quit,
        }
        ViewerEvent::None
    }
}

impl Drop for DisplayTerminal {
    fn drop(&mut self) {
        let _ = crossterm::terminal::disable_raw_mode();
    }
}
