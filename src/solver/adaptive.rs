//! Adaptive strategy
//!
//! Adjusts tactics based on number of remaining candidates.

use super::frequency::FrequencyStrategy;
use super::lookahead::LookaheadStrategy;
use super::strategy::{Strategy, random_candidate};
use crate::core::{CandidateSet, Pattern, Word};
use crate::fitness::FitnessTable;
use crate::wordlists::Dictionary;
use rand::RngCore;

/// Adaptive strategy with configurable tiers and thresholds
///
/// Opens with the best word of a fitness table, then picks a tactic by how many
/// candidates remain.
///
/// ## How Thresholds Work
///
/// Thresholds use cascading `>` comparisons:
/// ```text
/// if candidates > high_threshold     → high_tier
/// else if candidates > low_threshold → mid_tier
/// else                               → low_tier
/// ```
///
/// Presets:
/// - [`new`](Self::new), thresholds (60, 2): `Frequency`, `Lookahead`, `Random`
/// - [`sampling`](Self::sampling), thresholds (100, 2): `Random`, `Lookahead`, `First`
#[derive(Debug, Clone, Copy)]
pub struct AdaptiveStrategy<'a> {
    opening: Option<Word>,
    lookahead: LookaheadStrategy<'a>,
    name: &'static str,

    /// Candidates > this use `high_tier`
    pub high_threshold: usize,

    /// Candidates > this (and <= `high_threshold`) use `mid_tier`
    pub low_threshold: usize,

    pub high_tier: AdaptiveTier,
    pub mid_tier: AdaptiveTier,
    pub low_tier: AdaptiveTier,
}

impl<'a> AdaptiveStrategy<'a> {
    /// Frequency above 60 candidates, lookahead down to 3, then random
    #[must_use]
    pub fn new(table: &FitnessTable, guess_pool: &'a Dictionary) -> Self {
        Self::with_thresholds(table, guess_pool, 60, 2)
    }

    /// Like [`new`](Self::new) with custom thresholds
    #[must_use]
    pub fn with_thresholds(
        table: &FitnessTable,
        guess_pool: &'a Dictionary,
        high_threshold: usize,
        low_threshold: usize,
    ) -> Self {
        Self {
            opening: table.best().map(|entry| entry.word),
            lookahead: LookaheadStrategy::new(guess_pool),
            name: "adaptive",
            high_threshold,
            low_threshold,
            high_tier: AdaptiveTier::Frequency,
            mid_tier: AdaptiveTier::Lookahead,
            low_tier: AdaptiveTier::Random,
        }
    }

    /// Random above 100 candidates, lookahead down to 3, then the first candidate
    #[must_use]
    pub fn sampling(table: &FitnessTable, guess_pool: &'a Dictionary) -> Self {
        Self {
            name: "adaptive-sampling",
            high_tier: AdaptiveTier::Random,
            low_tier: AdaptiveTier::First,
            ..Self::with_thresholds(table, guess_pool, 100, 2)
        }
    }

    /// Get the current tier based on number of candidates
    #[must_use]
    pub const fn get_tier(&self, num_candidates: usize) -> AdaptiveTier {
        if num_candidates > self.high_threshold {
            self.high_tier
        } else if num_candidates > self.low_threshold {
            self.mid_tier
        } else {
            self.low_tier
        }
    }
}

/// A tactic the adaptive strategy can switch to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdaptiveTier {
    /// Distinct-letter frequency among candidates
    Frequency,

    /// One-step lookahead over the dictionary
    Lookahead,

    /// Random selection from candidates
    Random,

    /// The first remaining candidate in dictionary order
    First,
}

impl Strategy for AdaptiveStrategy<'_> {
    fn next_guess(
        &self,
        candidates: &CandidateSet,
        history: &[(Word, Pattern)],
        rng: &mut dyn RngCore,
    ) -> Option<Word> {
        if history.is_empty()
            && let Some(opening) = self.opening
        {
            return Some(opening);
        }

        match self.get_tier(candidates.len()) {
            AdaptiveTier::Frequency => FrequencyStrategy::select(candidates, history),
            AdaptiveTier::Lookahead => self.lookahead.select(candidates).map(|(word, _)| word),
            AdaptiveTier::Random => random_candidate(candidates, rng),
            AdaptiveTier::First => candidates.iter().next().copied(),
        }
    }

    fn name(&self) -> &'static str {
        self.name
    }
}
