//! Score collection collaborators.
//!
//! The chart core never blocks on user input; it consumes a [`ScoreSet`]
//! produced by a [`ScoreSource`]. Two sources exist: the interactive prompt
//! loop and a direct source fed from the command line.

pub mod prompt;

pub use prompt::PromptScoreSource;

use crate::config::ScoreBounds;
use crate::model::ScoreSet;
use anyhow::Result;

/// Produces one validated score set, or `None` if the user cancelled.
pub trait ScoreSource {
    fn collect(&mut self) -> Result<Option<ScoreSet>>;
}

/// Non-interactive source: scores supplied up front (e.g. via `--scores`).
pub struct DirectScores {
    values: Vec<f64>,
    bounds: ScoreBounds,
}

impl DirectScores {
    pub fn new(values: Vec<f64>, bounds: ScoreBounds) -> Self {
        Self { values, bounds }
    }
}

impl ScoreSource for DirectScores {
    fn collect(&mut self) -> Result<Option<ScoreSet>> {
        let set = ScoreSet::new(self.values.clone(), self.bounds)?;
        Ok(Some(set))
    }
}
