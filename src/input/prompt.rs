//! Interactive score entry.
//!
//! Prompts once per dimension, re-asking on empty, non-numeric, or
//! out-of-range input. End of input (Ctrl-D) cancels the whole assessment
//! rather than erroring.

use crate::config::ScoreBounds;
use crate::input::ScoreSource;
use crate::model::{dimensions, ScoreSet};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

pub struct PromptScoreSource<R, W> {
    reader: R,
    writer: W,
    bounds: ScoreBounds,
}

impl<R: BufRead, W: Write> PromptScoreSource<R, W> {
    pub fn new(reader: R, writer: W, bounds: ScoreBounds) -> Self {
        Self {
            reader,
            writer,
            bounds,
        }
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .context("Failed to read score input")?;
        if read == 0 {
            return Ok(None); // EOF: user cancelled
        }
        Ok(Some(line))
    }
}

impl<R: BufRead, W: Write> ScoreSource for PromptScoreSource<R, W> {
    fn collect(&mut self) -> Result<Option<ScoreSet>> {
        writeln!(self.writer, "Engineering Ladder Assessment")?;
        writeln!(self.writer, "{}", "=".repeat(40))?;
        writeln!(
            self.writer,
            "Enter scores from {} to {} for each dimension:\n",
            self.bounds.min, self.bounds.max
        )?;

        let mut values = Vec::with_capacity(dimensions().len());
        for dim in dimensions() {
            loop {
                write!(
                    self.writer,
                    "Enter {} score ({}-{}): ",
                    dim.name, self.bounds.min, self.bounds.max
                )?;
                self.writer.flush()?;
                let Some(line) = self.read_line()? else {
                    writeln!(self.writer, "\nAssessment cancelled")?;
                    return Ok(None);
                };
                if line.trim().is_empty() {
                    writeln!(self.writer, "Please enter a value")?;
                    continue;
                }
                match parse_score(&line, self.bounds) {
                    Ok(score) => {
                        values.push(score);
                        break;
                    }
                    Err(message) => writeln!(self.writer, "Error: {message}")?,
                }
            }
        }
        let set = ScoreSet::new(values, self.bounds)?;
        Ok(Some(set))
    }
}

/// Parses one score entry. Fractional values are fine; the bounds are
/// inclusive on both ends.
pub fn parse_score(raw: &str, bounds: ScoreBounds) -> Result<f64, String> {
    let trimmed = raw.trim();
    let score: f64 = trimmed
        .parse()
        .map_err(|_| format!("'{trimmed}' is not a valid number"))?;
    if !bounds.contains(score) {
        return Err(format!(
            "Score must be between {} and {}",
            bounds.min, bounds.max
        ));
    }
    Ok(score)
}
