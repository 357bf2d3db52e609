//! Dictionary loading
//!
//! Reads a word-per-line text file into a [`Dictionary`]. Loading is strict: a
//! malformed or repeated line fails the whole load.

use super::Dictionary;
use crate::core::{Word, WordError};
use log::info;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading a dictionary
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("line {line}: malformed word {text:?}: {source}")]
    MalformedWord {
        line: usize,
        text: String,
        #[source]
        source: WordError,
    },

    #[error("line {line}: duplicate word {word}")]
    DuplicateWord { word: Word, line: usize },

    #[error("dictionary contains no words")]
    Empty,

    #[error("could not read dictionary: {0}")]
    Io(#[from] io::Error),
}

/// Load a dictionary from a file
///
/// # Errors
///
/// Returns an error if the file cannot be read, or if any line is not a valid
/// word (see [`parse_dictionary`]).
///
/// # Examples
/// ```no_run
/// use wordle_fitness::wordlists::loader::load_from_file;
///
/// let dictionary = load_from_file("dictionary.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary, DictionaryError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let dictionary = parse_dictionary(&content)?;
    info!(
        "loaded {} words from {}",
        dictionary.len(),
        path.display()
    );
    Ok(dictionary)
}

/// Parse dictionary text, one word per line
///
/// Surrounding whitespace and blank lines are ignored. Words keep their file order.
///
/// # Errors
///
/// - `MalformedWord` for a line that is not five lowercase letters
/// - `DuplicateWord` for a word seen on an earlier line
/// - `Empty` when no words are present
pub fn parse_dictionary(content: &str) -> Result<Dictionary, DictionaryError> {
    let mut seen = FxHashSet::default();
    let mut words = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let line = idx + 1;
        let word = Word::new(trimmed).map_err(|source| DictionaryError::MalformedWord {
            line,
            text: trimmed.to_string(),
            source,
        })?;

        if !seen.insert(word) {
            return Err(DictionaryError::DuplicateWord { word, line });
        }
        words.push(word);
    }

    if words.is_empty() {
        return Err(DictionaryError::Empty);
    }

    Ok(Dictionary::from_parts(words, seen))
}

/// Convert a string slice to a dictionary
///
/// # Errors
///
/// Same rules as [`parse_dictionary`], with the slice index standing in for the line.
///
/// # Examples
/// ```
/// use wordle_fitness::wordlists::loader::words_from_slice;
///
/// let dictionary = words_from_slice(&["crane", "slate"]).unwrap();
/// assert_eq!(dictionary.len(), 2);
/// ```
pub fn words_from_slice(slice: &[&str]) -> Result<Dictionary, DictionaryError> {
    parse_dictionary(&slice.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keeps_file_order() {
        let dictionary = parse_dictionary("slate\ncrane\nirate\n").unwrap();
        let texts: Vec<&str> = dictionary.iter().map(Word::text).collect();
        assert_eq!(texts, ["slate", "crane", "irate"]);
    }

    #[test]
    fn parse_ignores_blank_lines_and_whitespace() {
        let dictionary = parse_dictionary("  crane \n\n\tslate\r\n").unwrap();
        assert_eq!(dictionary.len(), 2);
    }

    #[test]
    fn parse_rejects_malformed_word_with_line_number() {
        let err = parse_dictionary("crane\nslate\ntoolong\n").unwrap_err();
        assert!(matches!(
            err,
            DictionaryError::MalformedWord {
                line: 3,
                source: WordError::InvalidLength(7),
                ..
            }
        ));
    }

    #[test]
    fn parse_rejects_uppercase() {
        let err = parse_dictionary("Crane\n").unwrap_err();
        assert!(matches!(err, DictionaryError::MalformedWord { line: 1, .. }));
    }

    #[test]
    fn parse_rejects_duplicates() {
        let err = parse_dictionary("crane\nslate\ncrane\n").unwrap_err();
        match err {
            DictionaryError::DuplicateWord { word, line } => {
                assert_eq!(word.text(), "crane");
                assert_eq!(line, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn parse_rejects_empty_input() {
        assert!(matches!(
            parse_dictionary("\n\n"),
            Err(DictionaryError::Empty)
        ));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = load_from_file("/nonexistent/dictionary.txt").unwrap_err();
        assert!(matches!(err, DictionaryError::Io(_)));
    }

    #[test]
    fn load_from_file_round_trip() {
        let path = std::env::temp_dir().join(format!(
            "wordle_fitness_dictionary_{}.txt",
            std::process::id()
        ));
        fs::write(&path, "apple\nangle\ntable\n").unwrap();

        let dictionary = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(dictionary.len(), 3);
        assert!(dictionary.contains(&Word::new("angle").unwrap()));
    }
}
