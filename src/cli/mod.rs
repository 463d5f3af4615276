//! Command-line interface for the quorum consensus sampler.
//!
//! One entry point, no subcommands: every invocation stabilizes a
//! single query and prints one JSON report on stdout.

use std::num::NonZeroUsize;

use anyhow::Result;
use clap::{Parser, ValueEnum};

use crate::domain::models::report::ConsensusReport;
use crate::domain::models::request::SampleRequest;
use crate::domain::ports::backend::BackendKind;
use crate::services::Stabilizer;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "quorum")]
#[command(about = "Stabilize a noisy evaluator by repeated sampling and majority voting")]
#[command(version)]
pub struct Cli {
    /// Query to stabilize
    #[arg(long)]
    pub query: String,

    /// Voting strategy reducing the samples to one verdict
    #[arg(long, default_value = "majority")]
    pub strategy: String,

    /// Number of independent samples to draw (1..=101)
    #[arg(long, default_value_t = 9)]
    pub samples: u32,

    /// Seed for the deterministic probability profile
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub seed: i64,

    /// Worker threads for the parallel backends (defaults to host parallelism)
    #[arg(long)]
    pub max_workers: Option<usize>,

    /// Reserved flag; accepted but currently has no effect
    #[arg(long)]
    pub numeric: bool,

    /// Sampling backend selection
    #[arg(long, value_enum, default_value = "no")]
    pub parallel: ParallelMode,
}

/// The `--parallel` flag values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ParallelMode {
    /// Sequential sampling on the calling thread.
    No,
    /// Future-based batch sampling across worker threads.
    Thread,
    /// Alias of `thread`: future-based batch sampling.
    Async,
    /// Persistent worker pool fed through a task queue.
    Queue,
}

impl ParallelMode {
    /// Map the flag value to the backend it selects.
    pub fn backend_kind(self) -> BackendKind {
        match self {
            Self::No => BackendKind::Sequential,
            Self::Thread | Self::Async => BackendKind::Future,
            Self::Queue => BackendKind::WorkerQueue,
        }
    }
}

/// Number of workers to use when `--max-workers` is not given.
pub fn default_workers() -> usize {
    std::thread::available_parallelism().map_or(1, NonZeroUsize::get)
}

/// Execute one stabilization run from parsed arguments.
pub fn run(cli: &Cli) -> Result<ConsensusReport> {
    let max_workers = cli.max_workers.unwrap_or_else(default_workers);
    let stabilizer = Stabilizer::new(cli.parallel.backend_kind(), &cli.strategy, max_workers)?;
    let request = SampleRequest::new(cli.query.clone(), cli.samples, cli.seed);
    let report = stabilizer.run(&request)?;
    Ok(report)
}
