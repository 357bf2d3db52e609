//! Word solving command
//!
//! Plays one game against a named secret and returns the full trace.

use crate::core::{Word, WordError};
use crate::simulation::{GameRecord, SimulationConfig, play_game};
use crate::solver::Strategy;
use crate::wordlists::Dictionary;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Solve a specific target word
///
/// The target does not have to be in the dictionary; such a game ends with the
/// candidate set exhausted.
///
/// # Errors
///
/// Returns an error if the target is not a valid five-letter lowercase word.
///
/// # Examples
/// ```
/// use wordle_fitness::commands::solve_word;
/// use wordle_fitness::simulation::{GameOutcome, SimulationConfig};
/// use wordle_fitness::solver::FrequencyStrategy;
/// use wordle_fitness::wordlists::words_from_slice;
///
/// let dictionary = words_from_slice(&["crane", "slate", "irate"]).unwrap();
/// let record = solve_word(&dictionary, &FrequencyStrategy, "irate", SimulationConfig::new(6, Some(0))).unwrap();
///
/// assert!(record.outcome.is_solved());
/// ```
pub fn solve_word<S: Strategy + ?Sized>(
    dictionary: &Dictionary,
    strategy: &S,
    target: &str,
    config: SimulationConfig,
) -> Result<GameRecord, WordError> {
    let secret = Word::new(&target.trim().to_ascii_lowercase())?;
    let mut rng = config
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    Ok(play_game(
        dictionary,
        strategy,
        secret,
        config.max_guesses,
        &mut rng,
    ))
}
