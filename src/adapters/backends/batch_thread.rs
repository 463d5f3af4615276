//! Batch-per-thread backend with a shared locked result buffer.

use std::thread;

use parking_lot::Mutex;
use tracing::debug;

use crate::domain::models::outcome::Outcome;
use crate::domain::models::profile::{stream_rng, ProbabilityProfile};
use crate::domain::ports::backend::SamplingBackend;
use crate::domain::ports::errors::QuorumError;

use super::partition;

/// Partitions the draw count across worker threads that append to one
/// shared buffer, taking the lock once per element.
///
/// This is the intentionally unoptimized baseline: contention on the
/// buffer lock is accepted. Scoped threads guarantee every worker is
/// joined before `generate` returns, on every exit path.
#[derive(Debug, Clone, Copy)]
pub struct BatchThreadBackend {
    workers: usize,
}

impl BatchThreadBackend {
    /// Create a backend with the given worker count (must be >= 1).
    pub fn new(workers: usize) -> Self {
        Self {
            workers: workers.max(1),
        }
    }
}

impl SamplingBackend for BatchThreadBackend {
    fn generate(&self, query: &str, count: u32, seed: i64) -> Result<Vec<Outcome>, QuorumError> {
        let profile = ProbabilityProfile::build(query, seed);
        let buffer = Mutex::new(Vec::with_capacity(count as usize));
        let shares = partition(count, self.workers);
        debug!(backend = self.name(), workers = self.workers, count, "fanning out draws");

        thread::scope(|scope| {
            let profile = &profile;
            let buffer = &buffer;
            for (worker, share) in shares.into_iter().enumerate() {
                scope.spawn(move || {
                    let mut rng = stream_rng(seed, worker as u64);
                    for _ in 0..share {
                        let outcome = profile.draw(&mut rng);
                        buffer.lock().push(outcome);
                    }
                });
            }
        });

        Ok(buffer.into_inner())
    }

    fn name(&self) -> &'static str {
        "batch-thread"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::outcome::count_frequencies;

    #[test]
    fn test_exact_count() {
        let backend = BatchThreadBackend::new(4);
        for count in [1, 2, 9, 100, 101] {
            let samples = backend.generate("ping", count, 123).unwrap();
            assert_eq!(samples.len(), count as usize);
        }
    }

    #[test]
    fn test_more_workers_than_draws() {
        let backend = BatchThreadBackend::new(16);
        let samples = backend.generate("ping", 3, 0).unwrap();
        assert_eq!(samples.len(), 3);
    }

    #[test]
    fn test_distribution_is_reproducible() {
        let backend = BatchThreadBackend::new(4);
        let first = backend.generate("ping", 101, 123).unwrap();
        let second = backend.generate("ping", 101, 123).unwrap();
        // Per-draw order may differ between runs; the multiset may not.
        assert_eq!(count_frequencies(&first), count_frequencies(&second));
    }
}
