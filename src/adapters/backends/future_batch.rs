//! Future-style backend: per-worker local batches joined in order.

use std::thread;

use tracing::debug;

use crate::domain::models::outcome::Outcome;
use crate::domain::models::profile::{stream_rng, ProbabilityProfile};
use crate::domain::ports::backend::SamplingBackend;
use crate::domain::ports::errors::QuorumError;

use super::partition;

/// Partitions the draw count across workers that each compute their
/// whole batch locally and hand it back through a join handle.
///
/// No shared-buffer contention: the only synchronization points are the
/// joins, taken in submission order. A handle that cannot be fulfilled
/// (the worker panicked) is a fatal [`QuorumError::WorkerFailure`].
#[derive(Debug, Clone, Copy)]
pub struct FutureBatchBackend {
    workers: usize,
}

impl FutureBatchBackend {
    /// Create a backend with the given worker count (must be >= 1).
    pub fn new(workers: usize) -> Self {
        Self {
            workers: workers.max(1),
        }
    }
}

impl SamplingBackend for FutureBatchBackend {
    fn generate(&self, query: &str, count: u32, seed: i64) -> Result<Vec<Outcome>, QuorumError> {
        let profile = ProbabilityProfile::build(query, seed);
        let shares = partition(count, self.workers);
        debug!(backend = self.name(), workers = self.workers, count, "fanning out draws");

        thread::scope(|scope| {
            let profile = &profile;
            let handles: Vec<_> = shares
                .into_iter()
                .enumerate()
                .map(|(worker, share)| {
                    scope.spawn(move || {
                        let mut rng = stream_rng(seed, worker as u64);
                        (0..share).map(|_| profile.draw(&mut rng)).collect::<Vec<_>>()
                    })
                })
                .collect();

            // Join every handle before surfacing a failure so no worker
            // outlives the call.
            let joined: Vec<_> = handles.into_iter().map(thread::ScopedJoinHandle::join).collect();

            let mut samples = Vec::with_capacity(count as usize);
            for batch in joined {
                let batch = batch.map_err(|_| {
                    QuorumError::WorkerFailure(
                        "a sampling worker panicked before fulfilling its batch".to_string(),
                    )
                })?;
                samples.extend(batch);
            }
            Ok(samples)
        })
    }

    fn name(&self) -> &'static str {
        "future"
    }
}
