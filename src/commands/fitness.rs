//! Fitness table commands
//!
//! Computes a ranking from a dictionary, and trims a saved ranking.

use crate::fitness::{FitnessError, FitnessTable, PassConfig, Refinement, RefinementConfig};
use crate::wordlists::Dictionary;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::Path;
use std::time::{Duration, Instant};

/// Result of a fitness computation
pub struct FitnessReport {
    pub table: FitnessTable,
    pub passes: Vec<PassConfig>,
    pub dictionary_size: usize,
    pub duration: Duration,
}

/// Rank the dictionary with the given pass schedule
///
/// Seeded runs are reproducible; without a seed the RNG comes from the OS.
///
/// # Errors
///
/// Returns an error if the schedule is empty or a pass scores nothing.
pub fn compute_fitness(
    dictionary: &Dictionary,
    config: RefinementConfig,
    seed: Option<u64>,
    show_progress: bool,
) -> Result<FitnessReport, FitnessError> {
    let start = Instant::now();
    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let passes = config.passes.clone();

    let table = Refinement::new(dictionary, config)
        .with_progress(show_progress)
        .run(&mut rng)?;

    Ok(FitnessReport {
        table,
        passes,
        dictionary_size: dictionary.len(),
        duration: start.elapsed(),
    })
}

/// Result of trimming a saved table
pub struct TruncateReport {
    pub kept: usize,
    pub total: usize,
}

/// Load a table, keep the best `keep` entries and write them out
///
/// # Errors
///
/// Returns an error if the input cannot be read or parsed, or the output cannot
/// be written.
pub fn truncate_table(input: &Path, output: &Path, keep: usize) -> Result<TruncateReport, FitnessError> {
    let mut table = FitnessTable::load(input)?;
    let total = table.len();
    table.truncate(keep);
    table.save(output)?;

    Ok(TruncateReport {
        kept: table.len(),
        total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::words_from_slice;
    use std::fs;

    #[test]
    fn seeded_fitness_is_reproducible() {
        let dictionary =
            words_from_slice(&["bills", "fills", "gills", "hills", "mills", "bfghm"]).unwrap();
        let config = RefinementConfig::two_pass(3, 5, 4);

        let a = compute_fitness(&dictionary, config.clone(), Some(9), false).unwrap();
        let b = compute_fitness(&dictionary, config, Some(9), false).unwrap();

        assert_eq!(a.table, b.table);
        assert_eq!(a.passes.len(), 2);
        assert_eq!(a.dictionary_size, 6);
        assert_eq!(a.table.len(), 4);
    }

    #[test]
    fn truncate_keeps_best_records() {
        let dir = std::env::temp_dir();
        let input = dir.join(format!("wordle_fitness_trunc_in_{}.txt", std::process::id()));
        let output = dir.join(format!("wordle_fitness_trunc_out_{}.txt", std::process::id()));
        fs::write(&input, "stale 3.5\nslate 2.25\ncrane 2.25\nirate 7\n").unwrap();

        let report = truncate_table(&input, &output, 2).unwrap();
        let trimmed = FitnessTable::load(&output).unwrap();
        fs::remove_file(&input).unwrap();
        fs::remove_file(&output).unwrap();

        assert_eq!(report.total, 4);
        assert_eq!(report.kept, 2);
        let words: Vec<&str> = trimmed.entries().iter().map(|e| e.word.text()).collect();
        assert_eq!(words, ["crane", "slate"]);
    }

    #[test]
    fn truncate_missing_input_is_io_error() {
        let missing = std::env::temp_dir().join("wordle_fitness_no_such_table.txt");
        let result = truncate_table(&missing, &missing, 5);
        assert!(matches!(result, Err(FitnessError::Io(_))));
    }
}
