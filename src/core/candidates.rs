//! Candidate filtering
//!
//! A candidate set holds the words still consistent with every piece of feedback
//! seen so far. Filtering re-runs the feedback oracle with each candidate as the
//! secret and keeps the ones that reproduce the observed pattern exactly.

use super::{PATTERN_COUNT, Pattern, Word};

/// Words still consistent with the feedback observed in one game
///
/// Preserves the order of the words it was built from (dictionary order).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet {
    words: Vec<Word>,
}

impl CandidateSet {
    /// Create a candidate set from an ordered list of words
    #[must_use]
    pub const fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// Keep only the candidates that would have produced `feedback` for `guess`
    ///
    /// The result is never larger than `self`, and contains the secret whenever
    /// `self` did and `feedback` was scored against that secret.
    ///
    /// # Examples
    /// ```
    /// use wordle_fitness::core::{CandidateSet, Pattern, Word};
    ///
    /// let words = ["apple", "angle", "table", "stale", "slate"]
    ///     .iter()
    ///     .map(|w| Word::new(w).unwrap())
    ///     .collect::<CandidateSet>();
    ///
    /// let secret = Word::new("slate").unwrap();
    /// let guess = Word::new("stale").unwrap();
    /// let remaining = words.filter(&guess, Pattern::score(&secret, &guess));
    ///
    /// assert_eq!(remaining.len(), 1);
    /// assert!(remaining.contains(&secret));
    /// ```
    #[must_use]
    pub fn filter(&self, guess: &Word, feedback: Pattern) -> Self {
        self.words
            .iter()
            .filter(|candidate| Pattern::score(candidate, guess) == feedback)
            .copied()
            .collect()
    }

    /// In-place variant of [`filter`](Self::filter)
    pub fn narrow(&mut self, guess: &Word, feedback: Pattern) {
        self.words
            .retain(|candidate| Pattern::score(candidate, guess) == feedback);
    }

    /// Apply every `(guess, pattern)` pair of a history in order
    #[must_use]
    pub fn filter_history(&self, history: &[(Word, Pattern)]) -> Self {
        self.words
            .iter()
            .filter(|&candidate| {
                history
                    .iter()
                    .all(|(guess, observed)| Pattern::score(candidate, guess) == *observed)
            })
            .copied()
            .collect()
    }

    /// Number of remaining candidates
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Word] {
        &self.words
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }
}

impl FromIterator<Word> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

/// Count how many of `words` fall into each feedback pattern for `guess`
///
/// Entry `p` is the size of the candidate set that would remain if `guess`
/// were played and pattern `p` came back, so filtering `words` with a secret
/// drawn from `words` leaves exactly `sizes[score(secret, guess)]` words.
#[must_use]
pub fn partition_sizes(guess: &Word, words: &[Word]) -> [u32; PATTERN_COUNT] {
    let mut sizes = [0u32; PATTERN_COUNT];
    for word in words {
        sizes[Pattern::score(word, guess).index()] += 1;
    }
    sizes
}
