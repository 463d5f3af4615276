//! Validated input record for one stabilization run.

use serde::{Deserialize, Serialize};

use crate::domain::ports::errors::QuorumError;

/// Lowest accepted sample count.
pub const MIN_SAMPLES: u32 = 1;

/// Highest accepted sample count.
pub const MAX_SAMPLES: u32 = 101;

/// One stabilization request: which query to evaluate, how many
/// independent draws to take, and which seed drives the probability
/// profile. Immutable once submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleRequest {
    /// Opaque name of the task being stabilized.
    pub query: String,
    /// Number of independent draws to take.
    pub samples: u32,
    /// Seed for the deterministic probability profile.
    pub seed: i64,
}

impl SampleRequest {
    /// Create a request. Validation is deferred to [`Self::validate`] so
    /// callers can surface configuration errors before sampling begins.
    pub fn new(query: impl Into<String>, samples: u32, seed: i64) -> Self {
        Self {
            query: query.into(),
            samples,
            seed,
        }
    }

    /// Reject invalid requests before any backend is invoked.
    pub fn validate(&self) -> Result<(), QuorumError> {
        if self.query.is_empty() {
            return Err(QuorumError::EmptyQuery);
        }
        if !(MIN_SAMPLES..=MAX_SAMPLES).contains(&self.samples) {
            return Err(QuorumError::SamplesOutOfRange(self.samples));
        }
        Ok(())
    }
}
