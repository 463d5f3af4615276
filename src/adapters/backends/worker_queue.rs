//! Persistent worker-pool backend fed through channels.
//!
//! The pool is created once at backend construction and lives for the
//! backend's lifetime. Each `generate` call publishes one single-draw
//! task per requested sample on the task channel; workers receive a
//! task, draw one outcome, and send it on the result channel. The
//! caller drains the result channel until exactly `count` outcomes have
//! arrived — never fewer.
//!
//! Teardown: dropping the task sender disconnects the channel, which is
//! the broadcast stop signal — every worker parked in `recv` wakes with
//! a disconnect error and exits — after which all worker threads are
//! joined.

use std::sync::Arc;
use std::thread;

use crossbeam_channel::{unbounded, Receiver, Sender};
use rand::rngs::StdRng;
use tracing::{debug, warn};

use crate::domain::models::outcome::Outcome;
use crate::domain::models::profile::{stream_rng, ProbabilityProfile};
use crate::domain::ports::backend::SamplingBackend;
use crate::domain::ports::errors::QuorumError;

/// One draw: the shared read-only profile plus a dedicated RNG
/// substream, so no generator is ever shared between threads.
struct DrawTask {
    profile: Arc<ProbabilityProfile>,
    rng: StdRng,
}

/// Persistent pool of worker threads consuming draw tasks.
pub struct WorkerQueueBackend {
    /// `None` only once `Drop` has taken the sender to shut down.
    task_tx: Option<Sender<DrawTask>>,
    result_rx: Receiver<Outcome>,
    handles: Vec<thread::JoinHandle<()>>,
}

impl WorkerQueueBackend {
    /// Spawn `workers` threads (at least 1) that live until the backend
    /// is dropped.
    pub fn new(workers: usize) -> Self {
        let workers = workers.max(1);
        let (task_tx, task_rx) = unbounded::<DrawTask>();
        let (result_tx, result_rx) = unbounded::<Outcome>();

        let handles = (0..workers)
            .map(|worker| {
                let task_rx = task_rx.clone();
                let result_tx = result_tx.clone();
                thread::spawn(move || {
                    while let Ok(task) = task_rx.recv() {
                        let DrawTask { profile, mut rng } = task;
                        let outcome = profile.draw(&mut rng);
                        if result_tx.send(outcome).is_err() {
                            break;
                        }
                    }
                    debug!(worker, "draw worker exiting");
                })
            })
            .collect();

        debug!(workers, "worker pool started");
        Self {
            task_tx: Some(task_tx),
            result_rx,
            handles,
        }
    }
}

impl SamplingBackend for WorkerQueueBackend {
    fn generate(&self, query: &str, count: u32, seed: i64) -> Result<Vec<Outcome>, QuorumError> {
        let task_tx = self
            .task_tx
            .as_ref()
            .ok_or_else(|| QuorumError::WorkerFailure("worker pool is shut down".to_string()))?;

        let profile = Arc::new(ProbabilityProfile::build(query, seed));
        for draw in 0..count {
            let task = DrawTask {
                profile: Arc::clone(&profile),
                rng: stream_rng(seed, u64::from(draw)),
            };
            task_tx.send(task).map_err(|_| {
                QuorumError::WorkerFailure("task channel disconnected: all workers exited".to_string())
            })?;
        }

        // Block until the full requested sample count has arrived; a
        // non-empty queue alone is not delivery.
        let mut samples = Vec::with_capacity(count as usize);
        while samples.len() < count as usize {
            match self.result_rx.recv() {
                Ok(outcome) => samples.push(outcome),
                Err(_) => {
                    return Err(QuorumError::WorkerFailure(format!(
                        "result channel closed after {} of {count} outcomes",
                        samples.len()
                    )));
                }
            }
        }
        Ok(samples)
    }

    fn name(&self) -> &'static str {
        "worker-queue"
    }
}

impl Drop for WorkerQueueBackend {
    fn drop(&mut self) {
        drop(self.task_tx.take());
        for handle in self.handles.drain(..) {
            if handle.join().is_err() {
                warn!("draw worker panicked during shutdown");
            }
        }
    }
}
