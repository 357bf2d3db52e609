//! Fitness estimation and ranking
//!
//! A word's fitness is the expected number of candidates left after guessing it.
//! The estimator scores words, the table ranks and persists them, and the pipeline
//! runs the coarse-then-refined pass schedule.

mod estimator;
mod pipeline;
mod table;

pub use estimator::{FitnessEstimator, remaining_after};
pub use pipeline::{
    CandidateCount, PassConfig, Refinement, RefinementConfig, SampleSize, draw_samples,
};
pub use table::{FitnessEntry, FitnessTable};

use crate::core::Word;
use thiserror::Error;

/// Errors raised while computing, loading or validating fitness tables
#[derive(Debug, Error)]
pub enum FitnessError {
    #[error("line {line}: malformed fitness record: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("fitness table ranks {word}, which is not in the dictionary")]
    UnknownWord { word: Word },

    #[error("refinement schedule has no passes")]
    NoPasses,

    #[error("fitness pass {pass} has no words to score or no secrets to score against")]
    EmptyPass { pass: usize },

    #[error("could not read or write fitness table: {0}")]
    Io(#[from] std::io::Error),
}
