//! Reading process lists.
//!
//! A process file holds one `arrival burst` pair per line. Blank lines and
//! lines starting with `#` are skipped. On the command line a process is
//! written `arrival:burst`.

use crate::{
    error::{SchedError, SchedResult},
    scheduler::ProcessTable,
};
use std::{fs, path::Path};

pub fn read_process_file<P: AsRef<Path>>(path: P) -> SchedResult<ProcessTable> {
    let contents = fs::read_to_string(path)?;
    ProcessTable::from_pairs(parse_pairs(&contents)?)
}

/// Parses the file format into `(arrival, burst)` pairs without checking
/// their values.
pub fn parse_pairs(contents: &str) -> SchedResult<Vec<(i64, i64)>> {
    contents
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line, text)| -> SchedResult<(i64, i64)> {
            let fields: Vec<&str> = text.split_whitespace().collect();
            match fields.as_slice() {
                [arrival, burst] => Ok((number(arrival, line)?, number(burst, line)?)),
                _ => Err(SchedError::Parse {
                    line,
                    reason: format!("expected \"arrival burst\", got \"{}\"", text),
                }),
            }
        })
        .collect()
}

/// Parses one `arrival:burst` argument. `position` is the 1-based argument
/// index used in error messages.
pub fn parse_process_arg(value: &str, position: usize) -> SchedResult<(i64, i64)> {
    match value.split_once(':') {
        Some((arrival, burst)) => Ok((
            number(arrival.trim(), position)?,
            number(burst.trim(), position)?,
        )),
        None => Err(SchedError::Parse {
            line: position,
            reason: format!("expected \"arrival:burst\", got \"{}\"", value),
        }),
    }
}

fn number(text: &str, line: usize) -> SchedResult<i64> {
    text.parse().map_err(|_| SchedError::Parse {
        line,
        reason: format!("\"{}\" is not a whole number", text),
    })
}
