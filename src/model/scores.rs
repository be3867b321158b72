//! Validated self-assessment scores.
//!
//! A [`ScoreSet`] can only be constructed through [`ScoreSet::new`], which
//! enforces the two preconditions the renderers rely on: exactly one score per
//! dimension, and every score inside the configured inclusive bounds. Code
//! holding a `ScoreSet` may therefore draw without re-checking.

use crate::config::ScoreBounds;
use crate::error::{ChartError, ChartResult};
use crate::model::{dimensions, DIMENSION_COUNT};

/// One score per dimension, in dimension iteration order. Fractional values
/// are allowed.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreSet {
    values: Vec<f64>,
}

impl ScoreSet {
    /// Validates `values` against the bounds and wraps them. Fails with
    /// [`ChartError::ContractViolation`] on a count mismatch or an
    /// out-of-range score; bounds are inclusive on both ends.
    pub fn new(values: Vec<f64>, bounds: ScoreBounds) -> ChartResult<Self> {
        if values.len() != DIMENSION_COUNT {
            return Err(ChartError::contract(format!(
                "expected {} scores, got {}",
                DIMENSION_COUNT,
                values.len()
            )));
        }
        for (dim, &value) in dimensions().iter().zip(&values) {
            if !value.is_finite() || !bounds.contains(value) {
                return Err(ChartError::contract(format!(
                    "{} score {} is outside [{}, {}]",
                    dim.name, value, bounds.min, bounds.max
                )));
            }
        }
        Ok(Self { values })
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
