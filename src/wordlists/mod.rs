//! Word lists for Wordle solving
//!
//! The [`Dictionary`] is loaded once and shared read-only by every component.

pub mod loader;

pub use loader::{DictionaryError, load_from_file, parse_dictionary, words_from_slice};

use crate::core::{CandidateSet, Word};
use rustc_hash::FxHashSet;

/// An ordered list of unique words, immutable after loading
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    index: FxHashSet<Word>,
}

impl Dictionary {
    pub(crate) const fn from_parts(words: Vec<Word>, index: FxHashSet<Word>) -> Self {
        Self { words, index }
    }

    /// Build a dictionary from words that are already validated
    ///
    /// # Errors
    ///
    /// Returns `DuplicateWord` on a repeated word and `Empty` if there are none.
    pub fn from_words<I: IntoIterator<Item = Word>>(words: I) -> Result<Self, DictionaryError> {
        let mut index = FxHashSet::default();
        let mut list = Vec::new();
        for (i, word) in words.into_iter().enumerate() {
            if !index.insert(word) {
                return Err(DictionaryError::DuplicateWord { word, line: i + 1 });
            }
            list.push(word);
        }
        if list.is_empty() {
            return Err(DictionaryError::Empty);
        }
        Ok(Self::from_parts(list, index))
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false for a loaded dictionary; present for API completeness
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Constant-time membership test
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word)
    }

    /// Look up a word by text, returning `None` if it is malformed or unknown
    #[must_use]
    pub fn find(&self, text: &str) -> Option<Word> {
        Word::new(text).ok().filter(|w| self.contains(w))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    /// The starting candidate set of a game: every word
    #[must_use]
    pub fn candidates(&self) -> CandidateSet {
        CandidateSet::new(self.words.clone())
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dictionary {
        words_from_slice(&["apple", "angle", "table", "stale", "slate"]).unwrap()
    }

    #[test]
    fn candidates_start_as_full_dictionary() {
        let dictionary = sample();
        let candidates = dictionary.candidates();
        assert_eq!(candidates.as_slice(), dictionary.words());
    }

    #[test]
    fn find_checks_membership() {
        let dictionary = sample();
        assert!(dictionary.find("table").is_some());
        assert!(dictionary.find("crane").is_none());
        assert!(dictionary.find("TABLE").is_none());
    }

    #[test]
    fn from_words_rejects_duplicates() {
        let word = Word::new("crane").unwrap();
        assert!(matches!(
            Dictionary::from_words([word, word]),
            Err(DictionaryError::DuplicateWord { line: 2, .. })
        ));
    }

    #[test]
    fn from_words_rejects_empty() {
        assert!(matches!(
            Dictionary::from_words(Vec::new()),
            Err(DictionaryError::Empty)
        ));
    }
}
