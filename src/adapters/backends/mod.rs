//! Sampling backend implementations and their registry.
//!
//! Four adapters implement the [`SamplingBackend`] port; they differ
//! only in concurrency strategy and are statistically interchangeable.

pub mod batch_thread;
pub mod future_batch;
pub mod sequential;
pub mod worker_queue;

pub use batch_thread::BatchThreadBackend;
pub use future_batch::FutureBatchBackend;
pub use sequential::SequentialBackend;
pub use worker_queue::WorkerQueueBackend;

use crate::domain::ports::backend::{BackendKind, SamplingBackend};

/// Construct the backend for `kind`.
///
/// `max_workers` is ignored by the sequential backend and clamped to at
/// least 1 by the others.
pub fn build(kind: BackendKind, max_workers: usize) -> Box<dyn SamplingBackend> {
    match kind {
        BackendKind::Sequential => Box::new(SequentialBackend::new()),
        BackendKind::BatchThread => Box::new(BatchThreadBackend::new(max_workers)),
        BackendKind::Future => Box::new(FutureBatchBackend::new(max_workers)),
        BackendKind::WorkerQueue => Box::new(WorkerQueueBackend::new(max_workers)),
    }
}

/// Split `count` draws across `workers`, the final worker absorbing the
/// remainder of the integer division.
#[allow(clippy::cast_possible_truncation)]
fn partition(count: u32, workers: usize) -> Vec<u32> {
    let workers = workers.max(1);
    let base = count / workers as u32;
    let mut shares = vec![base; workers];
    if let Some(last) = shares.last_mut() {
        *last += count % workers as u32;
    }
    shares
}
