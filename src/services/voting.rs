//! Voting strategies and the name registry.

use crate::domain::models::outcome::{count_frequencies, Outcome};
use crate::domain::ports::errors::QuorumError;
use crate::domain::ports::voting::VotingStrategy;

/// Majority vote: the outcome with the highest count wins.
///
/// Ties break toward the outcome that sorts first in the fixed
/// enumeration order `OK < FAIL < Timeout < Retry`, so the verdict is
/// reproducible regardless of input order.
#[derive(Debug, Default, Clone, Copy)]
pub struct MajorityVote;

impl VotingStrategy for MajorityVote {
    fn eval(&self, samples: &[Outcome]) -> Outcome {
        let counts = count_frequencies(samples);
        let mut winner = Outcome::Ok;
        let mut max = 0;
        // BTreeMap iterates in enumeration order; the strict comparison
        // keeps the first outcome reaching the maximum.
        for (outcome, count) in &counts {
            if *count > max {
                max = *count;
                winner = *outcome;
            }
        }
        winner
    }

    fn name(&self) -> &'static str {
        "majority"
    }
}

/// Resolve a strategy name to its implementation.
///
/// `single` and `median` are recognized configuration values that are
/// intentionally unimplemented; they fail fast exactly like unknown
/// names rather than silently falling back to majority.
pub fn strategy_for(name: &str) -> Result<Box<dyn VotingStrategy>, QuorumError> {
    match name {
        "majority" => Ok(Box::new(MajorityVote)),
        _ => Err(QuorumError::UnsupportedStrategy(name.to_string())),
    }
}
