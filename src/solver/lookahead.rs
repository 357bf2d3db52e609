//! Exhaustive one-step lookahead
//!
//! Tries every word of a guess pool against the live candidates and keeps the one
//! that leaves the fewest candidates in total. Quadratic in the candidate count, so
//! it is meant for the endgame.

use super::strategy::Strategy;
use crate::core::{CandidateSet, Pattern, Word};
use crate::fitness::FitnessEstimator;
use crate::wordlists::Dictionary;
use rand::RngCore;
use rayon::prelude::*;

/// Minimizes expected remaining candidates over a guess pool
#[derive(Debug, Clone, Copy)]
pub struct LookaheadStrategy<'a> {
    guess_pool: &'a Dictionary,
}

impl<'a> LookaheadStrategy<'a> {
    #[must_use]
    pub const fn new(guess_pool: &'a Dictionary) -> Self {
        Self { guess_pool }
    }

    /// Best guess and its total remaining-candidate count
    ///
    /// Ties prefer a guess that is itself a candidate (it might win outright), then
    /// the lexicographically smallest word.
    #[must_use]
    pub fn select(&self, candidates: &CandidateSet) -> Option<(Word, u64)> {
        match candidates.as_slice() {
            [] => None,
            [only] => Some((*only, 1)),
            _ => self
                .guess_pool
                .words()
                .par_iter()
                .map(|guess| {
                    let total = FitnessEstimator::total_remaining(guess, candidates);
                    (total, !candidates.contains(guess), *guess)
                })
                .min()
                .map(|(total, _, guess)| (guess, total)),
        }
    }
}

impl Strategy for LookaheadStrategy<'_> {
    fn next_guess(
        &self,
        candidates: &CandidateSet,
        _history: &[(Word, Pattern)],
        _rng: &mut dyn RngCore,
    ) -> Option<Word> {
        self.select(candidates).map(|(word, _)| word)
    }

    fn name(&self) -> &'static str {
        "lookahead"
    }
}
