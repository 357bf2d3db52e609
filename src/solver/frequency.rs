//! Letter-frequency strategy
//!
//! Cheap mid-game tactic: favor the candidate whose distinct letters are most common
//! among the remaining candidates.

use super::strategy::Strategy;
use crate::core::{ALPHABET_SIZE, CandidateSet, Mark, Pattern, Word, letter_index};
use rand::RngCore;

/// Letters the history proves absent from the secret
///
/// A letter counts as absent only when a guess marked it absent and did not also
/// credit another copy of it as exact or present.
#[must_use]
pub fn absent_letters(history: &[(Word, Pattern)]) -> [bool; ALPHABET_SIZE] {
    let mut absent = [false; ALPHABET_SIZE];
    for (guess, pattern) in history {
        let marks = pattern.marks();
        for (i, &mark) in marks.iter().enumerate() {
            let letter = guess.char_at(i);
            let credited = marks
                .iter()
                .zip(guess.chars())
                .any(|(&m, &c)| c == letter && m != Mark::Absent);
            if mark == Mark::Absent && !credited {
                absent[letter_index(letter)] = true;
            }
        }
    }
    absent
}

/// Chooses the candidate maximizing summed letter frequency
///
/// Frequencies count every letter occurrence across the candidates, with letters
/// known to be absent zeroed. A word scores the frequencies of its distinct letters.
/// Ties go to the earliest candidate.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrequencyStrategy;

impl FrequencyStrategy {
    /// Pick without randomness; `None` only for an empty candidate set
    #[must_use]
    pub fn select(candidates: &CandidateSet, history: &[(Word, Pattern)]) -> Option<Word> {
        let absent = absent_letters(history);

        let mut freq = [0usize; ALPHABET_SIZE];
        for word in candidates {
            for &ch in word.chars() {
                freq[letter_index(ch)] += 1;
            }
        }
        for (count, &gone) in freq.iter_mut().zip(&absent) {
            if gone {
                *count = 0;
            }
        }

        let mut best: Option<(Word, usize)> = None;
        for word in candidates {
            let mut seen = [false; ALPHABET_SIZE];
            let mut score = 0;
            for &ch in word.chars() {
                let idx = letter_index(ch);
                if !seen[idx] {
                    seen[idx] = true;
                    score += freq[idx];
                }
            }
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((*word, score));
            }
        }

        best.map(|(word, _)| word)
    }
}

impl Strategy for FrequencyStrategy {
    fn next_guess(
        &self,
        candidates: &CandidateSet,
        history: &[(Word, Pattern)],
        _rng: &mut dyn RngCore,
    ) -> Option<Word> {
        Self::select(candidates, history)
    }

    fn name(&self) -> &'static str {
        "frequency"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn candidates(words: &[&str]) -> CandidateSet {
        words.iter().map(|w| word(w)).collect()
    }

    #[test]
    fn absent_letters_from_plain_miss() {
        let history = [(word("crane"), Pattern::parse("--G--").unwrap())];
        let absent = absent_letters(&history);
        assert!(absent[letter_index(b'c')]);
        assert!(absent[letter_index(b'e')]);
        assert!(!absent[letter_index(b'a')]);
        assert!(!absent[letter_index(b'z')]);
    }

    #[test]
    fn repeated_letter_with_credit_is_not_absent() {
        // SPOOL against SOBER: the first O is present, the second absent.
        let guess = word("spool");
        let pattern = Pattern::score(&word("sober"), &guess);
        let absent = absent_letters(&[(guess, pattern)]);
        assert!(!absent[letter_index(b'o')]);
        assert!(absent[letter_index(b'p')]);
        assert!(absent[letter_index(b'l')]);
    }

    #[test]
    fn prefers_common_distinct_letters() {
        // E, A, T, S dominate; "aaaaa" scores A only once.
        let set = candidates(&["aaaaa", "stale", "table", "least", "steal"]);
        let pick = FrequencyStrategy::select(&set, &[]).unwrap();
        assert_eq!(pick, word("stale"));
    }

    #[test]
    fn ties_go_to_first_candidate() {
        let set = candidates(&["least", "slate", "stale"]);
        assert_eq!(FrequencyStrategy::select(&set, &[]), Some(word("least")));
    }

    #[test]
    fn absent_letters_are_ignored_in_scoring() {
        let set = candidates(&["zzzzy", "abcde"]);
        // Without history ZZZZY scores Z×4 + Y = 5, ABCDE scores 5 and comes later.
        assert_eq!(FrequencyStrategy::select(&set, &[]), Some(word("zzzzy")));

        let history = [(word("zzzzz"), Pattern::from_value(0).unwrap())];
        assert_eq!(
            FrequencyStrategy::select(&set, &history),
            Some(word("abcde"))
        );
    }

    #[test]
    fn empty_candidates_give_none() {
        assert!(FrequencyStrategy::select(&CandidateSet::default(), &[]).is_none());
    }
}
