//! The consensus result record handed back to the caller.
//!
//! Field names and nesting are part of the external contract: the record
//! is serialized verbatim to stdout for downstream consumers, with the
//! verdict under the wire name `final`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::outcome::Outcome;

/// Confidence diagnostics attached to every report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostics {
    /// Frequency of each outcome over the sample set, keyed in the fixed
    /// enumeration order. The counts always sum to `samples`.
    pub counts: BTreeMap<Outcome, u32>,
    /// Seed the probability profile was derived from.
    pub seed: i64,
    /// Worker count the backend was configured with.
    pub max_workers: usize,
}

/// The stabilized verdict for one request, with confidence diagnostics.
///
/// Constructed once per run and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsensusReport {
    /// The consensus verdict chosen by the voting strategy.
    #[serde(rename = "final")]
    pub final_outcome: Outcome,
    /// Name of the voting strategy that produced the verdict.
    pub strategy: String,
    /// Number of samples drawn.
    pub samples: u32,
    /// Fraction of samples equal to the verdict, in `(0, 1]`.
    pub agreement_rate: f64,
    /// Number of distinct outcomes observed, at least 1.
    pub unique_candidates: usize,
    /// `(unique_candidates - 1) / samples`: a coarse diversity signal.
    pub outlier_rate: f64,
    /// Wall-clock duration of sampling plus aggregation.
    pub latency_ms: u64,
    /// Confidence diagnostics.
    pub diagnostics: Diagnostics,
}
