//! Single-threaded baseline backend.

use crate::domain::models::outcome::Outcome;
use crate::domain::models::profile::{stream_rng, ProbabilityProfile};
use crate::domain::ports::backend::SamplingBackend;
use crate::domain::ports::errors::QuorumError;

/// Draws all samples in order on the calling thread.
///
/// The reference backend: with a fixed seed it yields a reproducible
/// outcome *sequence*, not just a reproducible distribution.
#[derive(Debug, Default, Clone, Copy)]
pub struct SequentialBackend;

impl SequentialBackend {
    /// Create the backend.
    pub fn new() -> Self {
        Self
    }
}

impl SamplingBackend for SequentialBackend {
    fn generate(&self, query: &str, count: u32, seed: i64) -> Result<Vec<Outcome>, QuorumError> {
        let profile = ProbabilityProfile::build(query, seed);
        let mut rng = stream_rng(seed, 0);
        Ok((0..count).map(|_| profile.draw(&mut rng)).collect())
    }

    fn name(&self) -> &'static str {
        "sequential"
    }
}
