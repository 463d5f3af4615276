//! Error taxonomy for the stabilization pipeline.

use thiserror::Error;

use crate::domain::models::request::{MAX_SAMPLES, MIN_SAMPLES};

/// Everything that can go wrong while producing a consensus report.
///
/// Configuration errors are detected before any sampling begins and
/// never produce partial output. `WorkerFailure` is the single runtime
/// failure: a worker that cannot fulfill its draws aborts the in-flight
/// request and is never retried.
#[derive(Debug, Error)]
pub enum QuorumError {
    /// The query string was empty.
    #[error("query must not be empty")]
    EmptyQuery,

    /// The requested sample count fell outside the accepted range.
    #[error("samples out of range: {0} (must be {min}..={max})", min = MIN_SAMPLES, max = MAX_SAMPLES)]
    SamplesOutOfRange(u32),

    /// The named voting strategy is not implemented.
    #[error("unsupported strategy: {0}")]
    UnsupportedStrategy(String),

    /// The worker count was not positive.
    #[error("max workers must be at least 1, got {0}")]
    InvalidWorkerCount(usize),

    /// A sampling worker failed to deliver its draws.
    #[error("worker failure: {0}")]
    WorkerFailure(String),
}

impl QuorumError {
    /// Whether this error is a configuration error (detected before any
    /// sampling begins) as opposed to a runtime worker failure.
    pub fn is_config(&self) -> bool {
        !matches!(self, Self::WorkerFailure(_))
    }
}
