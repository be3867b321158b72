//! Error taxonomy for chart rendering.
//!
//! Two failure families exist: contract violations (a caller handed the core
//! something the preconditions forbid, e.g. a score outside the allowed range)
//! and surface failures (the drawing surface could not be written or
//! finalized). Neither is retried internally; a render either completes and
//! produces one artifact or fails and produces none.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    /// A precondition was violated by the caller. Renders abort before any
    /// drawing occurs and no output artifact is produced.
    #[error("contract violation: {0}")]
    ContractViolation(String),

    /// The drawing surface could not be created, written, or finalized.
    #[error("drawing surface failure: {0}")]
    Surface(#[from] std::io::Error),
}

impl ChartError {
    pub fn contract(reason: impl Into<String>) -> Self {
        Self::ContractViolation(reason.into())
    }
}

pub type ChartResult<T> = std::result::Result<T, ChartError>;
