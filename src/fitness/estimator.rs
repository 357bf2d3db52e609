//! Fitness estimation
//!
//! The fitness of a guess is the mean number of dictionary words that would remain
//! after playing it, averaged over a sample of secrets. Lower is better.

use super::table::{FitnessEntry, FitnessTable};
use crate::core::{CandidateSet, Pattern, Word, partition_sizes};
use crate::wordlists::Dictionary;
use indicatif::{ParallelProgressIterator, ProgressBar};
use rayon::prelude::*;

/// Number of dictionary words left after guessing `guess` against `secret`
///
/// This is the literal definition: score, then filter the full dictionary.
#[must_use]
pub fn remaining_after(dictionary: &Dictionary, guess: &Word, secret: &Word) -> usize {
    dictionary
        .candidates()
        .filter(guess, Pattern::score(secret, guess))
        .len()
}

/// Scores guesses against a fixed dictionary
#[derive(Debug, Clone, Copy)]
pub struct FitnessEstimator<'a> {
    dictionary: &'a Dictionary,
}

impl<'a> FitnessEstimator<'a> {
    #[must_use]
    pub const fn new(dictionary: &'a Dictionary) -> Self {
        Self { dictionary }
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    /// Mean remaining-candidate count for `word` over `samples`
    ///
    /// The dictionary is partitioned by feedback once, after which each sample is a
    /// table lookup. Returns 0.0 for an empty sample.
    ///
    /// # Examples
    /// ```
    /// use wordle_fitness::core::Word;
    /// use wordle_fitness::fitness::FitnessEstimator;
    /// use wordle_fitness::wordlists::words_from_slice;
    ///
    /// let dictionary = words_from_slice(&["apple", "angle", "table", "stale", "slate"]).unwrap();
    /// let estimator = FitnessEstimator::new(&dictionary);
    ///
    /// let fitness = estimator.estimate(&Word::new("stale").unwrap(), dictionary.words());
    /// assert!(fitness >= 1.0 && fitness <= 5.0);
    /// ```
    #[must_use]
    pub fn estimate(&self, word: &Word, samples: &[Word]) -> f64 {
        if samples.is_empty() {
            return 0.0;
        }

        let sizes = partition_sizes(word, self.dictionary.words());
        let total: u64 = samples
            .iter()
            .map(|secret| u64::from(sizes[Pattern::score(secret, word).index()]))
            .sum();

        total as f64 / samples.len() as f64
    }

    /// Score every word against the same samples, in parallel
    ///
    /// The returned table is sorted ascending by score.
    #[must_use]
    pub fn estimate_all(&self, words: &[Word], samples: &[Word]) -> FitnessTable {
        self.estimate_all_with_progress(words, samples, &ProgressBar::hidden())
    }

    /// Like [`estimate_all`](Self::estimate_all), ticking `progress` once per word
    #[must_use]
    pub fn estimate_all_with_progress(
        &self,
        words: &[Word],
        samples: &[Word],
        progress: &ProgressBar,
    ) -> FitnessTable {
        let entries: Vec<FitnessEntry> = words
            .par_iter()
            .progress_with(progress.clone())
            .map(|word| FitnessEntry::new(*word, self.estimate(word, samples)))
            .collect();

        FitnessTable::from_entries(entries)
    }

    /// Total remaining candidates summed over every live candidate as the secret
    ///
    /// This is the sum of squared partition sizes of `candidates` under `guess`.
    #[must_use]
    pub fn total_remaining(guess: &Word, candidates: &CandidateSet) -> u64 {
        partition_sizes(guess, candidates.as_slice())
            .iter()
            .map(|&n| u64::from(n) * u64::from(n))
            .sum()
    }
}
