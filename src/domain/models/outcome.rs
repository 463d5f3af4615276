//! Outcome alphabet of the noisy evaluator.
//!
//! Every draw from the simulated oracle produces exactly one of four
//! labels. The enumeration order is load-bearing: it defines the
//! deterministic tie-break used by majority voting and the key order of
//! every serialized frequency table (`BTreeMap` iteration).

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One outcome label from the noisy evaluator.
///
/// The wire labels (`"OK"`, `"FAIL"`, `"Timeout"`, `"Retry"`) are fixed
/// for compatibility with downstream consumers of the result record.
/// `Retry` and `Timeout` are inert labels: nothing in this crate ever
/// re-executes a draw because of them.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Outcome {
    /// The evaluator accepted the query.
    #[serde(rename = "OK")]
    Ok,
    /// The evaluator rejected the query.
    #[serde(rename = "FAIL")]
    Fail,
    /// The evaluator timed out. Label only; no deadline exists here.
    Timeout,
    /// The evaluator asked for a retry. Label only; never acted upon.
    Retry,
}

impl Outcome {
    /// All outcomes in tie-break order.
    pub const ALL: [Self; 4] = [Self::Ok, Self::Fail, Self::Timeout, Self::Retry];

    /// The stable wire label for this outcome.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Fail => "FAIL",
            Self::Timeout => "Timeout",
            Self::Retry => "Retry",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Build the frequency table over a sample set.
///
/// Order of the input carries no meaning; the returned map is keyed in
/// the fixed enumeration order.
pub fn count_frequencies(samples: &[Outcome]) -> BTreeMap<Outcome, u32> {
    let mut counts = BTreeMap::new();
    for outcome in samples {
        *counts.entry(*outcome).or_insert(0) += 1;
    }
    counts
}
