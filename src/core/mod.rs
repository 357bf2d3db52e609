//! Core domain types for Wordle
//!
//! Words, feedback patterns and candidate filtering. Everything here is pure and
//! deterministic.

mod candidates;
mod pattern;
mod word;

pub use candidates::{CandidateSet, partition_sizes};
pub use pattern::{Mark, PATTERN_COUNT, Pattern};
pub use word::{ALPHABET_SIZE, WORD_LENGTH, Word, WordError, letter_index};

/// Feedback oracle: the pattern `guess` earns against `secret`
#[inline]
#[must_use]
pub fn score(secret: &Word, guess: &Word) -> Pattern {
    Pattern::score(secret, guess)
}
