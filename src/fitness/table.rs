//! Fitness tables
//!
//! A ranked list of `(word, score)` pairs, kept sorted ascending by score with ties
//! broken lexicographically. Tables persist as plain text, one `word score` record
//! per line.

use super::FitnessError;
use crate::core::Word;
use crate::wordlists::Dictionary;
use log::info;
use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::fmt;
use std::fs;
use std::path::Path;

/// One ranked word
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitnessEntry {
    pub word: Word,
    /// Mean remaining candidates after guessing `word` (lower is better)
    pub score: f64,
}

impl FitnessEntry {
    #[must_use]
    pub const fn new(word: Word, score: f64) -> Self {
        Self { word, score }
    }

    /// Ranking order: ascending score, then lexicographic word
    fn rank_cmp(&self, other: &Self) -> Ordering {
        self.score
            .total_cmp(&other.score)
            .then_with(|| self.word.cmp(&other.word))
    }
}

/// Words ranked by fitness, best first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FitnessTable {
    entries: Vec<FitnessEntry>,
}

impl FitnessTable {
    /// Build a table from unordered entries; the result is sorted
    #[must_use]
    pub fn from_entries(mut entries: Vec<FitnessEntry>) -> Self {
        entries.sort_by(FitnessEntry::rank_cmp);
        Self { entries }
    }

    /// Load a table from a file
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file cannot be read, or `MalformedRecord` for any bad line.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, FitnessError> {
        let path = path.as_ref();
        let table = Self::parse(&fs::read_to_string(path)?)?;
        info!("loaded {} fitness records from {}", table.len(), path.display());
        Ok(table)
    }

    /// Parse table text
    ///
    /// Each non-blank line is `word score` or `word total score`; the last column is
    /// the score. Lines starting with `#` are comments.
    ///
    /// # Errors
    ///
    /// Returns `MalformedRecord` for a line with a bad word, a bad or non-finite
    /// score, the wrong number of columns, or a word already seen.
    ///
    /// # Examples
    /// ```
    /// use wordle_fitness::fitness::FitnessTable;
    ///
    /// let table = FitnessTable::parse("slate 12.5\nlares 6.25\n").unwrap();
    /// assert_eq!(table.best().unwrap().word.text(), "lares");
    /// ```
    pub fn parse(content: &str) -> Result<Self, FitnessError> {
        let mut entries = Vec::new();
        let mut seen: FxHashMap<Word, usize> = FxHashMap::default();

        for (idx, line) in content.lines().enumerate() {
            let line_no = idx + 1;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let malformed = |reason: String| FitnessError::MalformedRecord {
                line: line_no,
                reason,
            };

            let columns: Vec<&str> = trimmed.split_whitespace().collect();
            let (word_text, score_text) = match columns.as_slice() {
                [word, score] | [word, _, score] => (*word, *score),
                _ => {
                    return Err(malformed(format!(
                        "expected 2 or 3 columns, found {}",
                        columns.len()
                    )));
                }
            };

            let word = Word::new(word_text).map_err(|e| malformed(e.to_string()))?;
            let score: f64 = score_text
                .parse()
                .map_err(|_| malformed(format!("invalid score {score_text:?}")))?;
            if !score.is_finite() {
                return Err(malformed(format!("score must be finite, got {score_text}")));
            }
            if let Some(first) = seen.insert(word, line_no) {
                return Err(malformed(format!("{word} already listed on line {first}")));
            }

            entries.push(FitnessEntry::new(word, score));
        }

        Ok(Self::from_entries(entries))
    }

    /// Write the table, best first
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file cannot be written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), FitnessError> {
        let path = path.as_ref();
        fs::write(path, self.to_string())?;
        info!("wrote {} fitness records to {}", self.len(), path.display());
        Ok(())
    }

    /// Keep only the `n` best entries
    pub fn truncate(&mut self, n: usize) {
        self.entries.truncate(n);
    }

    /// A new table holding the `n` best entries
    #[must_use]
    pub fn top(&self, n: usize) -> Self {
        Self {
            entries: self.entries.iter().take(n).copied().collect(),
        }
    }

    /// The best-ranked entry
    #[must_use]
    pub fn best(&self) -> Option<&FitnessEntry> {
        self.entries.first()
    }

    /// Zero-based rank of `word`, if present
    #[must_use]
    pub fn rank_of(&self, word: &Word) -> Option<usize> {
        self.entries.iter().position(|e| e.word == *word)
    }

    #[must_use]
    pub fn score_of(&self, word: &Word) -> Option<f64> {
        self.entries.iter().find(|e| e.word == *word).map(|e| e.score)
    }

    /// Ranked words, best first
    pub fn words(&self) -> impl Iterator<Item = Word> + '_ {
        self.entries.iter().map(|e| e.word)
    }

    #[must_use]
    pub fn entries(&self) -> &[FitnessEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check every ranked word is in `dictionary`
    ///
    /// # Errors
    ///
    /// Returns `UnknownWord` for the first entry not in the dictionary.
    pub fn validate_against(&self, dictionary: &Dictionary) -> Result<(), FitnessError> {
        match self.words().find(|w| !dictionary.contains(w)) {
            Some(word) => Err(FitnessError::UnknownWord { word }),
            None => Ok(()),
        }
    }
}

impl fmt::Display for FitnessTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{} {}", entry.word, entry.score)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::words_from_slice;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn sample() -> FitnessTable {
        FitnessTable::parse("stale 3.5\nslate 2.25\ncrane 2.25\nirate 7\n").unwrap()
    }

    #[test]
    fn parse_sorts_ascending_with_lexicographic_ties() {
        let table = sample();
        let order: Vec<&str> = table.entries().iter().map(|e| e.word.text()).collect();
        assert_eq!(order, ["crane", "slate", "stale", "irate"]);
    }

    #[test]
    fn parse_accepts_total_and_mean_columns() {
        let table = FitnessTable::parse("# pass 5\nlares 31234 2.4\n\nraise 30000 2.3\n").unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.best().map(|e| e.word), Some(word("raise")));
        assert_eq!(table.score_of(&word("lares")), Some(2.4));
    }

    #[test]
    fn parse_rejects_bad_records() {
        let cases = [
            "crane\n",
            "crane 1 2 3\n",
            "cranes 1.0\n",
            "crane abc\n",
            "crane NaN\n",
            "crane 1.0\ncrane 2.0\n",
        ];
        for case in cases {
            assert!(
                matches!(
                    FitnessTable::parse(case),
                    Err(FitnessError::MalformedRecord { .. })
                ),
                "accepted {case:?}"
            );
        }
    }

    #[test]
    fn malformed_record_reports_line() {
        let err = FitnessTable::parse("crane 1.0\n\nslate x\n").unwrap_err();
        assert!(matches!(err, FitnessError::MalformedRecord { line: 3, .. }));
    }

    #[test]
    fn top_and_truncate_keep_lowest_scores() {
        let table = sample();
        let top = table.top(2);
        assert_eq!(top.words().collect::<Vec<_>>(), [word("crane"), word("slate")]);

        let mut truncated = table.clone();
        truncated.truncate(2);
        assert_eq!(truncated, top);

        assert_eq!(table.top(10).len(), 4);
    }

    #[test]
    fn rank_and_score_lookup() {
        let table = sample();
        assert_eq!(table.rank_of(&word("stale")), Some(2));
        assert_eq!(table.rank_of(&word("apple")), None);
        assert_eq!(table.score_of(&word("irate")), Some(7.0));
    }

    #[test]
    fn display_round_trips_through_parse() {
        let table = sample();
        let reparsed = FitnessTable::parse(&table.to_string()).unwrap();
        assert_eq!(reparsed, table);
    }

    #[test]
    fn save_and_load() {
        let path = std::env::temp_dir().join(format!(
            "wordle_fitness_table_{}.txt",
            std::process::id()
        ));
        let table = sample();
        table.save(&path).unwrap();
        let loaded = FitnessTable::load(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(loaded, table);
    }

    #[test]
    fn validate_against_dictionary() {
        let table = sample();
        let full = words_from_slice(&["crane", "slate", "stale", "irate"]).unwrap();
        assert!(table.validate_against(&full).is_ok());

        let partial = words_from_slice(&["crane", "slate"]).unwrap();
        assert!(matches!(
            table.validate_against(&partial),
            Err(FitnessError::UnknownWord { .. })
        ));
    }
}
