//! The result assembler: backend → voting → diagnostics.

use std::time::Instant;

use tracing::{debug, info};

use crate::adapters::backends;
use crate::domain::models::outcome::count_frequencies;
use crate::domain::models::report::{ConsensusReport, Diagnostics};
use crate::domain::models::request::SampleRequest;
use crate::domain::ports::backend::{BackendKind, SamplingBackend};
use crate::domain::ports::errors::QuorumError;
use crate::domain::ports::voting::VotingStrategy;
use crate::services::voting::strategy_for;

/// Orchestrates one stabilization run: draws the sample set through the
/// configured backend, reduces it with the voting strategy, and attaches
/// agreement/diversity/latency diagnostics.
pub struct Stabilizer {
    backend: Box<dyn SamplingBackend>,
    strategy: Box<dyn VotingStrategy>,
    max_workers: usize,
}

impl std::fmt::Debug for Stabilizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stabilizer")
            .field("backend", &self.backend.name())
            .field("strategy", &self.strategy.name())
            .field("max_workers", &self.max_workers)
            .finish()
    }
}

impl Stabilizer {
    /// Build a stabilizer from a backend kind and a strategy name.
    ///
    /// All configuration errors (unsupported strategy, non-positive
    /// worker count) surface here, before any sampling begins.
    pub fn new(
        kind: BackendKind,
        strategy_name: &str,
        max_workers: usize,
    ) -> Result<Self, QuorumError> {
        if max_workers == 0 {
            return Err(QuorumError::InvalidWorkerCount(max_workers));
        }
        let strategy = strategy_for(strategy_name)?;
        let backend = backends::build(kind, max_workers);
        Ok(Self {
            backend,
            strategy,
            max_workers,
        })
    }

    /// Assemble a stabilizer from already-constructed parts.
    pub fn from_parts(
        backend: Box<dyn SamplingBackend>,
        strategy: Box<dyn VotingStrategy>,
        max_workers: usize,
    ) -> Self {
        Self {
            backend,
            strategy,
            max_workers,
        }
    }

    /// Run one stabilization request to completion.
    #[allow(clippy::cast_precision_loss)]
    pub fn run(&self, request: &SampleRequest) -> Result<ConsensusReport, QuorumError> {
        request.validate()?;

        let started = Instant::now();
        let samples = self
            .backend
            .generate(&request.query, request.samples, request.seed)?;

        let counts = count_frequencies(&samples);
        debug!(backend = self.backend.name(), ?counts, "sample frequencies");

        let final_outcome = self.strategy.eval(&samples);
        let agreement = counts.get(&final_outcome).copied().unwrap_or(0);
        let unique_candidates = counts.len();
        let samples_total = f64::from(request.samples);
        let agreement_rate = f64::from(agreement) / samples_total;
        let outlier_rate = (unique_candidates - 1) as f64 / samples_total;

        let latency_ms =
            u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        info!(
            query = %request.query,
            backend = self.backend.name(),
            strategy = self.strategy.name(),
            final_outcome = %final_outcome,
            agreement_rate,
            latency_ms,
            "stabilized"
        );

        Ok(ConsensusReport {
            final_outcome,
            strategy: self.strategy.name().to_string(),
            samples: request.samples,
            agreement_rate,
            unique_candidates,
            outlier_rate,
            latency_ms,
            diagnostics: Diagnostics {
                counts,
                seed: request.seed,
                max_workers: self.max_workers,
            },
        })
    }
}
