//! Wordle feedback pattern calculation and representation
//!
//! A pattern encodes the feedback from a guess using base-3 encoding:
//! - 0 = Absent (letter not in the secret, or all its copies already claimed)
//! - 1 = Present (letter in the secret, wrong position)
//! - 2 = Exact (letter in the correct position)
//!
//! The pattern is stored as a single u8 value (0-242), where each position
//! contributes digit × 3^position to the total.

use super::word::{WORD_LENGTH, Word, letter_index};
use std::fmt;

/// Number of distinct patterns (3^5)
pub const PATTERN_COUNT: usize = 243;

/// Feedback for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Mark {
    /// The letter does not occur (in any unclaimed copy) in the secret
    Absent = 0,
    /// The letter occurs in the secret at another position
    Present = 1,
    /// The letter is in the correct position
    Exact = 2,
}

impl Mark {
    const fn from_digit(digit: u8) -> Self {
        match digit {
            2 => Self::Exact,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }

    /// Grade character used in persisted grade strings ('2', '1', '0')
    #[must_use]
    pub const fn grade_char(self) -> char {
        match self {
            Self::Exact => '2',
            Self::Present => '1',
            Self::Absent => '0',
        }
    }
}

/// Feedback pattern for a Wordle guess
///
/// Represents the per-letter feedback as a single byte value.
/// Value range: 0-242 (3^5 - 1 = 243 possible patterns)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pattern(u8);

impl Pattern {
    /// All exact (perfect match)
    pub const PERFECT: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// Create a pattern from a raw value, `None` unless it is below 243
    ///
    /// # Examples
    /// ```
    /// use wordle_fitness::core::Pattern;
    ///
    /// assert_eq!(Pattern::from_value(242), Some(Pattern::PERFECT));
    /// assert_eq!(Pattern::from_value(243), None);
    /// ```
    #[inline]
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        if (value as usize) < PATTERN_COUNT {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Get the raw pattern value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Get the raw pattern value as a table index
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Check if this is a perfect match (all exact)
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == 242
    }

    /// Calculate the feedback for `guess` when `secret` is the hidden word
    ///
    /// Implements Wordle's feedback rules, including duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and consume them from the secret's letter counts
    /// 2. Second pass: mark present letters while unconsumed copies remain
    /// 3. Encode as base-3 number
    ///
    /// # Examples
    /// ```
    /// use wordle_fitness::core::{Mark::*, Pattern, Word};
    ///
    /// let secret = Word::new("slate").unwrap();
    /// let guess = Word::new("stale").unwrap();
    /// let pattern = Pattern::score(&secret, &guess);
    ///
    /// assert_eq!(pattern.marks(), [Exact, Present, Exact, Present, Exact]);
    /// ```
    #[must_use]
    pub fn score(secret: &Word, guess: &Word) -> Self {
        let mut result = [Mark::Absent; WORD_LENGTH];
        let mut available = secret.char_counts();

        // Allow: Index needed to access guess[i], secret[i], and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            let letter = guess.char_at(i);
            if letter == secret.char_at(i) {
                result[i] = Mark::Exact;
                available[letter_index(letter)] -= 1;
            }
        }

        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if result[i] == Mark::Absent {
                let count = &mut available[letter_index(guess.char_at(i))];
                if *count > 0 {
                    result[i] = Mark::Present;
                    *count -= 1;
                }
            }
        }

        Self::from_marks(result)
    }

    /// Build a pattern from per-position marks
    #[must_use]
    pub fn from_marks(marks: [Mark; WORD_LENGTH]) -> Self {
        let mut pattern = 0u8;
        let mut multiplier = 1u8;
        for mark in marks {
            pattern += mark as u8 * multiplier;
            multiplier = multiplier.wrapping_mul(3);
        }
        Self(pattern)
    }

    /// Decode into per-position marks
    #[must_use]
    pub fn marks(self) -> [Mark; WORD_LENGTH] {
        let mut marks = [Mark::Absent; WORD_LENGTH];
        let mut val = self.0;
        for mark in &mut marks {
            *mark = Mark::from_digit(val % 3);
            val /= 3;
        }
        marks
    }

    /// Count how many positions carry the given mark
    #[must_use]
    pub fn count(self, mark: Mark) -> usize {
        self.marks().iter().filter(|&&m| m == mark).count()
    }

    /// Parse a pattern from a string like "GY-GY", "21021" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/'2'/🟩 for exact
    /// - 'Y'/'y'/'1'/🟨 for present
    /// - '-'/'_'/'0'/⬜ for absent
    ///
    /// # Examples
    /// ```
    /// use wordle_fitness::core::Pattern;
    ///
    /// let p1 = Pattern::parse("GY-GY").unwrap();
    /// let p2 = Pattern::parse("🟩🟨⬜🟩🟨").unwrap();
    /// let p3 = Pattern::parse("21021").unwrap();
    /// assert_eq!(p1, p2);
    /// assert_eq!(p1, p3);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();
        let chars: [char; WORD_LENGTH] = chars.try_into().ok()?;

        let mut marks = [Mark::Absent; WORD_LENGTH];
        for (mark, ch) in marks.iter_mut().zip(chars) {
            *mark = match ch {
                'G' | 'g' | '2' | '🟩' => Mark::Exact,
                'Y' | 'y' | '1' | '🟨' => Mark::Present,
                '-' | '_' | '0' | '⬜' => Mark::Absent,
                _ => return None,
            };
        }

        Some(Self::from_marks(marks))
    }

    /// Convert pattern to emoji string
    ///
    /// # Examples
    /// ```
    /// use wordle_fitness::core::Pattern;
    ///
    /// let p = Pattern::parse("GY-GY").unwrap();
    /// assert_eq!(p.to_emoji(), "🟩🟨⬜🟩🟨");
    /// ```
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.marks()
            .iter()
            .map(|mark| match mark {
                Mark::Exact => '🟩',
                Mark::Present => '🟨',
                Mark::Absent => '⬜',
            })
            .collect()
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid pattern string: {s}"))
    }
}

impl fmt::Display for Pattern {
    /// Renders the grade string, e.g. `21021`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in self.marks() {
            write!(f, "{}", mark.grade_char())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Mark::{Absent, Exact, Present};
    use super::*;
    use proptest::prelude::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn from_value_rejects_out_of_range() {
        assert_eq!(Pattern::from_value(0).map(Pattern::index), Some(0));
        assert_eq!(Pattern::from_value(242), Some(Pattern::PERFECT));
        for value in 243..=u8::MAX {
            assert!(Pattern::from_value(value).is_none(), "accepted {value}");
        }
    }

    #[test]
    fn pattern_perfect_constant() {
        assert!(Pattern::PERFECT.is_perfect());
        assert_eq!(Pattern::PERFECT.marks(), [Exact; 5]);
        assert_eq!(Pattern::PERFECT.count(Exact), 5);
    }

    #[test]
    fn pattern_all_absent() {
        let pattern = Pattern::score(&word("fghij"), &word("abcde"));
        assert_eq!(pattern.value(), 0);
        assert_eq!(pattern.count(Absent), 5);
    }

    #[test]
    fn pattern_stale_against_slate() {
        let pattern = Pattern::score(&word("slate"), &word("stale"));
        assert_eq!(pattern.marks(), [Exact, Present, Exact, Present, Exact]);
        assert_eq!(pattern.to_string(), "21212");
    }

    #[test]
    fn pattern_exact_claims_before_present() {
        // The exact O is consumed first; the earlier O takes FLOOR's remaining copy.
        let pattern = Pattern::score(&word("floor"), &word("robot"));
        assert_eq!(pattern.marks(), [Present, Present, Absent, Exact, Absent]);
    }

    #[test]
    fn pattern_duplicate_guess_letters_not_overclaimed() {
        // SOBER has one O: SPOOL gets PRESENT for the first O only.
        let pattern = Pattern::score(&word("sober"), &word("spool"));
        assert_eq!(pattern.marks(), [Exact, Absent, Present, Absent, Absent]);

        // The exact S consumes SOBER's only S.
        let pattern = Pattern::score(&word("sober"), &word("soaks"));
        assert_eq!(pattern.marks(), [Exact, Exact, Absent, Absent, Absent]);
    }

    #[test]
    fn pattern_duplicate_secret_letters() {
        let pattern = Pattern::score(&word("spoon"), &word("odors"));
        assert_eq!(pattern.marks(), [Present, Absent, Exact, Absent, Present]);
    }

    #[test]
    fn pattern_later_exact_beats_earlier_present() {
        // TILLS has two L's, PINES none; the trailing S is exact.
        let pattern = Pattern::score(&word("tills"), &word("pines"));
        assert_eq!(pattern.marks(), [Absent, Exact, Absent, Absent, Exact]);

        // THOSE has one E; GEESE's trailing exact E claims it ahead of the earlier two.
        let pattern = Pattern::score(&word("those"), &word("geese"));
        assert_eq!(pattern.marks(), [Absent, Absent, Absent, Exact, Exact]);
    }

    #[test]
    fn pattern_marks_round_trip_through_value() {
        let marks = [Present, Exact, Absent, Exact, Present];
        assert_eq!(Pattern::from_marks(marks).marks(), marks);
    }

    #[test]
    fn pattern_parse_valid() {
        let p1 = Pattern::parse("GYG--").unwrap();
        let p2 = Pattern::parse("🟩🟨🟩⬜⬜").unwrap();
        let p3 = Pattern::parse("gyg__").unwrap();
        let p4 = Pattern::parse("21200").unwrap();

        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        assert_eq!(p1, p4);
        // 2 + 1×3 + 2×9 = 23
        assert_eq!(p1.value(), 23);
    }

    #[test]
    fn pattern_parse_invalid() {
        assert!(Pattern::parse("GYGGYX").is_none());
        assert!(Pattern::parse("GYG").is_none());
        assert!(Pattern::parse("GXGGY").is_none());
        assert!(Pattern::parse("").is_none());
    }

    fn small_word() -> impl Strategy<Value = Word> {
        "[a-e]{5}".prop_map(|s| Word::new(&s).unwrap())
    }

    proptest! {
        #[test]
        fn guessing_the_secret_is_perfect(secret in small_word()) {
            prop_assert_eq!(Pattern::score(&secret, &secret), Pattern::PERFECT);
        }

        #[test]
        fn exact_marks_match_positions(secret in small_word(), guess in small_word()) {
            let marks = Pattern::score(&secret, &guess).marks();
            prop_assert_eq!(marks.len(), 5);
            for (i, mark) in marks.iter().enumerate() {
                prop_assert_eq!(*mark == Exact, secret.char_at(i) == guess.char_at(i));
            }
        }

        #[test]
        fn letter_credit_never_exceeds_secret_copies(secret in small_word(), guess in small_word()) {
            let marks = Pattern::score(&secret, &guess).marks();
            let secret_counts = secret.char_counts();
            let guess_counts = guess.char_counts();

            for letter in b'a'..=b'e' {
                let credited = (0..5)
                    .filter(|&i| guess.char_at(i) == letter && marks[i] != Absent)
                    .count();
                let idx = letter_index(letter);
                let bound = usize::from(secret_counts[idx].min(guess_counts[idx]));
                prop_assert_eq!(credited, bound);
            }
        }
    }
}
