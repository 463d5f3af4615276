//! Voting strategy contract (Hexagonal Architecture port).

use crate::domain::models::outcome::Outcome;

/// A pluggable reducer turning N draws into one final verdict.
///
/// Implementations must be order-insensitive: only the frequency
/// distribution of the sample set may influence the verdict, and ties
/// must break deterministically.
pub trait VotingStrategy: Send + Sync + std::fmt::Debug {
    /// Reduce a non-empty sample set to a single verdict.
    fn eval(&self, samples: &[Outcome]) -> Outcome;

    /// The configuration name of this strategy.
    fn name(&self) -> &'static str;
}
