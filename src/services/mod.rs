//! Service layer: orchestration of the sampling and voting pipeline.

pub mod stabilizer;
pub mod voting;

pub use stabilizer::Stabilizer;
pub use voting::{strategy_for, MajorityVote};
