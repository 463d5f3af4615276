//! Probability model of the noisy evaluator.
//!
//! The evaluator is simulated: four integer weights are derived
//! deterministically from `(query, seed)` by a rolling hash, and a draw
//! picks an [`Outcome`] by cumulative threshold over those weights. The
//! profile is built once per sampling call and shared read-only across
//! workers; all randomness flows through explicitly seeded generators so
//! concurrent draws never touch hidden global state.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::trace;

use super::outcome::Outcome;

/// Modulus of the rolling hash.
const MODULUS: i64 = 1_000_000_007;

/// Odd 64-bit constant used to decorrelate RNG substreams.
const STREAM_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

/// Derive one weight in `[1, 100]` from an input string and a seed.
///
/// Rolling hash: `sum = seed; sum = (sum*31 + byte) mod 1_000_000_007`
/// per byte; result `sum mod 100 + 1`. Euclidean remainders keep the
/// result in range for negative seeds as well; for non-negative seeds
/// this is arithmetically identical to reducing only inside the loop.
pub fn weight(input: &str, seed: i64) -> i64 {
    let mut sum = seed.rem_euclid(MODULUS);
    for byte in input.bytes() {
        sum = (sum * 31 + i64::from(byte)) % MODULUS;
    }
    sum % 100 + 1
}

/// Build a seeded RNG for one worker or draw substream.
///
/// Stream 0 is the identity stream (the generator is seeded directly
/// from `seed`), so the sequential backend's draw sequence is a pure
/// function of the seed. Higher streams are mixed with an odd constant
/// so sibling workers draw decorrelated but reproducible sequences.
pub fn stream_rng(seed: i64, stream: u64) -> StdRng {
    #[allow(clippy::cast_sign_loss)]
    let mixed = (seed as u64) ^ stream.wrapping_mul(STREAM_MIX);
    StdRng::seed_from_u64(mixed)
}

/// The four outcome weights and their sum, fixed for one sampling call.
///
/// Immutable once built; workers read it freely without synchronization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbabilityProfile {
    /// Weight of [`Outcome::Ok`].
    pub p1: i64,
    /// Weight of [`Outcome::Fail`].
    pub p2: i64,
    /// Weight of [`Outcome::Timeout`].
    pub p3: i64,
    /// Weight of [`Outcome::Retry`].
    pub p4: i64,
    /// Sum of the four weights; the draw range is `[0, total)`.
    pub total: i64,
}

impl ProbabilityProfile {
    /// Derive the profile from a query and seed.
    ///
    /// Each weight hashes the query concatenated with one of four
    /// distinct salts. All four calls use the same `seed` value.
    pub fn build(query: &str, seed: i64) -> Self {
        let p1 = weight(&format!("{query}0"), seed);
        let p2 = weight(&format!("{query}1"), seed);
        let p3 = weight(&format!("{query}2"), seed);
        let p4 = weight(&format!("{query}3"), seed);
        Self {
            p1,
            p2,
            p3,
            p4,
            total: p1 + p2 + p3 + p4,
        }
    }

    /// Draw one outcome from the caller-supplied random source.
    ///
    /// A uniform `r` in `[0, total)` is mapped through cumulative
    /// thresholds in the fixed order `OK < FAIL < Timeout < Retry`.
    #[allow(clippy::cast_precision_loss)]
    pub fn draw<R: Rng>(&self, rng: &mut R) -> Outcome {
        let r = rng.gen_range(0..self.total);
        let (outcome, band) = if r < self.p1 {
            (Outcome::Ok, self.p1)
        } else if r < self.p1 + self.p2 {
            (Outcome::Fail, self.p2)
        } else if r < self.p1 + self.p2 + self.p3 {
            (Outcome::Timeout, self.p3)
        } else {
            (Outcome::Retry, self.p4)
        };
        trace!(
            outcome = %outcome,
            probability = band as f64 / self.total as f64,
            "noisy draw"
        );
        outcome
    }
}
