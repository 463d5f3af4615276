//! Quorum - Consensus Sampling Stabilizer
//!
//! Quorum stabilizes a noisy, non-deterministic evaluator by issuing
//! many independent repeated evaluations of one query and reducing them
//! to a single consensus verdict via a voting rule, with confidence
//! diagnostics (agreement, diversity, latency).
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): the probability model, outcome
//!   alphabet, request/report records, and port traits
//! - **Adapter Layer** (`adapters`): the four sampling backends
//!   (sequential, batch-thread, future-based, persistent worker-queue)
//! - **Service Layer** (`services`): voting strategies and the result
//!   assembler
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```
//! use quorum::domain::models::SampleRequest;
//! use quorum::domain::ports::BackendKind;
//! use quorum::services::Stabilizer;
//!
//! let stabilizer = Stabilizer::new(BackendKind::Sequential, "majority", 4)?;
//! let report = stabilizer.run(&SampleRequest::new("ping", 9, 123))?;
//! assert_eq!(report.samples, 9);
//! # Ok::<(), quorum::domain::ports::QuorumError>(())
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod services;

// Re-export commonly used types for convenience
pub use adapters::backends::{
    BatchThreadBackend, FutureBatchBackend, SequentialBackend, WorkerQueueBackend,
};
pub use domain::models::{
    ConsensusReport, Diagnostics, Outcome, ProbabilityProfile, SampleRequest,
};
pub use domain::ports::{BackendKind, QuorumError, SamplingBackend, VotingStrategy};
pub use services::{MajorityVote, Stabilizer};
