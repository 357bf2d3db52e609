//! Guess selection strategies
//!
//! Defines the Strategy trait, the enum used for runtime selection, and the
//! baseline and fitness-ranked strategies.

use super::{AdaptiveStrategy, FrequencyStrategy, LookaheadStrategy};
use crate::core::{CandidateSet, Pattern, Word};
use crate::fitness::FitnessTable;
use crate::wordlists::Dictionary;
use rand::RngCore;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;

/// A strategy for choosing the next guess of a game
///
/// Implementations must be `Sync`: one strategy value is shared by every game of a
/// parallel session. Any randomness comes from the `rng` argument so that runs can
/// be replayed.
pub trait Strategy: Sync {
    /// Choose the next guess
    ///
    /// `candidates` holds the words consistent with every `(guess, pattern)` pair in
    /// `history`. Returns `None` only when there is nothing sensible to guess
    /// (an empty candidate set).
    fn next_guess(
        &self,
        candidates: &CandidateSet,
        history: &[(Word, Pattern)],
        rng: &mut dyn RngCore,
    ) -> Option<Word>;

    /// Short name for reports
    fn name(&self) -> &'static str;
}

/// Uniform random choice among candidates
pub(crate) fn random_candidate(candidates: &CandidateSet, rng: &mut dyn RngCore) -> Option<Word> {
    candidates.as_slice().choose(rng).copied()
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType<'a> {
    /// Random selection from candidates
    Baseline(RandomStrategy),
    /// Fitness-ranked selection with random fallback
    Enhanced(RankedStrategy<'a>),
    /// Letter-frequency selection among candidates
    Frequency(FrequencyStrategy),
    /// Exhaustive one-step search over the dictionary
    Lookahead(LookaheadStrategy<'a>),
    /// Switches tactic by candidate count
    Adaptive(AdaptiveStrategy<'a>),
}

/// Names accepted by [`StrategyType::from_name`]
pub const STRATEGY_NAMES: [&str; 6] = [
    "baseline",
    "enhanced",
    "frequency",
    "lookahead",
    "adaptive",
    "adaptive-sampling",
];

impl<'a> StrategyType<'a> {
    /// Create strategy from name
    ///
    /// Unknown names fall back to `enhanced`. `random` is accepted for `baseline`.
    #[must_use]
    pub fn from_name(name: &str, table: &'a FitnessTable, dictionary: &'a Dictionary) -> Self {
        match name {
            "baseline" | "random" => Self::Baseline(RandomStrategy),
            "frequency" => Self::Frequency(FrequencyStrategy),
            "lookahead" => Self::Lookahead(LookaheadStrategy::new(dictionary)),
            "adaptive" => Self::Adaptive(AdaptiveStrategy::new(table, dictionary)),
            "adaptive-sampling" => Self::Adaptive(AdaptiveStrategy::sampling(table, dictionary)),
            _ => Self::Enhanced(RankedStrategy::new(table)),
        }
    }

    /// Whether the strategy reads a fitness table
    #[must_use]
    pub const fn uses_table(&self) -> bool {
        matches!(self, Self::Enhanced(_) | Self::Adaptive(_))
    }
}

impl Strategy for StrategyType<'_> {
    fn next_guess(
        &self,
        candidates: &CandidateSet,
        history: &[(Word, Pattern)],
        rng: &mut dyn RngCore,
    ) -> Option<Word> {
        match self {
            Self::Baseline(s) => s.next_guess(candidates, history, rng),
            Self::Enhanced(s) => s.next_guess(candidates, history, rng),
            Self::Frequency(s) => s.next_guess(candidates, history, rng),
            Self::Lookahead(s) => s.next_guess(candidates, history, rng),
            Self::Adaptive(s) => s.next_guess(candidates, history, rng),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Baseline(s) => s.name(),
            Self::Enhanced(s) => s.name(),
            Self::Frequency(s) => s.name(),
            Self::Lookahead(s) => s.name(),
            Self::Adaptive(s) => s.name(),
        }
    }
}

/// Baseline strategy
///
/// Picks uniformly at random among the remaining candidates.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn next_guess(
        &self,
        candidates: &CandidateSet,
        _history: &[(Word, Pattern)],
        rng: &mut dyn RngCore,
    ) -> Option<Word> {
        random_candidate(candidates, rng)
    }

    fn name(&self) -> &'static str {
        "baseline"
    }
}

/// Enhanced strategy
///
/// Opens with the best word of a precomputed fitness table regardless of the
/// candidates, then plays the best-ranked word that is still a candidate. Falls
/// back to a random candidate once no ranked word survives.
#[derive(Debug, Clone, Copy)]
pub struct RankedStrategy<'a> {
    table: &'a FitnessTable,
}

impl<'a> RankedStrategy<'a> {
    #[must_use]
    pub const fn new(table: &'a FitnessTable) -> Self {
        Self { table }
    }

    /// The opening guess, if the table is not empty
    #[must_use]
    pub fn opening(&self) -> Option<Word> {
        self.table.best().map(|entry| entry.word)
    }
}

impl Strategy for RankedStrategy<'_> {
    fn next_guess(
        &self,
        candidates: &CandidateSet,
        history: &[(Word, Pattern)],
        rng: &mut dyn RngCore,
    ) -> Option<Word> {
        if history.is_empty()
            && let Some(opening) = self.opening()
        {
            return Some(opening);
        }

        let live: FxHashSet<&Word> = candidates.iter().collect();
        self.table
            .words()
            .find(|word| live.contains(word))
            .or_else(|| random_candidate(candidates, rng))
    }

    fn name(&self) -> &'static str {
        "enhanced"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fitness::FitnessEntry;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn candidates(words: &[&str]) -> CandidateSet {
        words.iter().map(|w| word(w)).collect()
    }

    fn table(entries: &[(&str, f64)]) -> FitnessTable {
        FitnessTable::from_entries(
            entries
                .iter()
                .map(|&(w, s)| FitnessEntry::new(word(w), s))
                .collect(),
        )
    }

    #[test]
    fn baseline_picks_a_candidate() {
        let set = candidates(&["crane", "slate", "irate"]);
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..20 {
            let guess = RandomStrategy.next_guess(&set, &[], &mut rng).unwrap();
            assert!(set.contains(&guess));
        }
    }

    #[test]
    fn baseline_is_reproducible_with_same_seed() {
        let set = candidates(&["crane", "slate", "irate", "grate", "crate"]);
        let picks = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..10)
                .map(|_| RandomStrategy.next_guess(&set, &[], &mut rng))
                .collect::<Vec<_>>()
        };
        assert_eq!(picks(5), picks(5));
    }

    #[test]
    fn baseline_returns_none_on_empty_candidates() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(
            RandomStrategy
                .next_guess(&CandidateSet::default(), &[], &mut rng)
                .is_none()
        );
    }

    #[test]
    fn enhanced_opens_with_best_word_even_if_not_a_candidate() {
        let ranking = table(&[("lares", 1.0), ("crane", 2.0)]);
        let strategy = RankedStrategy::new(&ranking);
        let set = candidates(&["crane", "slate"]);

        let guess = strategy
            .next_guess(&set, &[], &mut StdRng::seed_from_u64(0))
            .unwrap();
        assert_eq!(guess, word("lares"));
    }

    #[test]
    fn enhanced_then_plays_best_ranked_candidate() {
        let ranking = table(&[("lares", 1.0), ("irate", 2.0), ("slate", 3.0), ("crane", 4.0)]);
        let strategy = RankedStrategy::new(&ranking);
        let set = candidates(&["crane", "slate"]);
        let history = [(word("lares"), Pattern::from_value(0).unwrap())];

        let guess = strategy
            .next_guess(&set, &history, &mut StdRng::seed_from_u64(0))
            .unwrap();
        assert_eq!(guess, word("slate"));
    }

    #[test]
    fn enhanced_falls_back_to_random_candidate() {
        let ranking = table(&[("lares", 1.0)]);
        let strategy = RankedStrategy::new(&ranking);
        let set = candidates(&["crane", "slate"]);
        let history = [(word("lares"), Pattern::from_value(0).unwrap())];

        let guess = strategy
            .next_guess(&set, &history, &mut StdRng::seed_from_u64(0))
            .unwrap();
        assert!(set.contains(&guess));
    }

    #[test]
    fn enhanced_with_empty_table_behaves_like_baseline() {
        let ranking = FitnessTable::default();
        let strategy = RankedStrategy::new(&ranking);
        let set = candidates(&["crane"]);

        let guess = strategy.next_guess(&set, &[], &mut StdRng::seed_from_u64(0));
        assert_eq!(guess, Some(word("crane")));
    }

    #[test]
    fn from_name_round_trips_every_name() {
        let ranking = FitnessTable::default();
        let dictionary = crate::wordlists::words_from_slice(&["crane"]).unwrap();
        for name in STRATEGY_NAMES {
            assert_eq!(StrategyType::from_name(name, &ranking, &dictionary).name(), name);
        }
        assert_eq!(
            StrategyType::from_name("random", &ranking, &dictionary).name(),
            "baseline"
        );
        assert_eq!(
            StrategyType::from_name("unknown", &ranking, &dictionary).name(),
            "enhanced"
        );
    }

    #[test]
    fn only_ranked_strategies_use_table() {
        let ranking = FitnessTable::default();
        let dictionary = crate::wordlists::words_from_slice(&["crane"]).unwrap();
        let uses = |name| StrategyType::from_name(name, &ranking, &dictionary).uses_table();
        assert!(uses("enhanced"));
        assert!(uses("adaptive"));
        assert!(uses("adaptive-sampling"));
        assert!(!uses("baseline"));
        assert!(!uses("lookahead"));
    }
}
