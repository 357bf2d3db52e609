//! Game simulation
//!
//! Plays games against known secrets and folds the outcomes into session
//! statistics.

pub mod game;
pub mod session;

pub use game::{
    FailureKind, Game, GameError, GameOutcome, GameRecord, GameState, GameStep, play_game,
};
pub use session::{SessionStatistics, Simulator};

use crate::core::Word;
use crate::wordlists::Dictionary;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

/// Mixed into the seed of the secret stream so it never lines up with a game stream
const SECRET_STREAM: u64 = 0x9E37_79B9_7F4A_7C15;

/// Settings shared by every game of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Guesses allowed before a game counts as failed
    pub max_guesses: usize,
    /// Base seed; game `i` uses `seed + i`. `None` draws a fresh base per session.
    pub seed: Option<u64>,
}

impl SimulationConfig {
    #[must_use]
    pub const fn new(max_guesses: usize, seed: Option<u64>) -> Self {
        Self { max_guesses, seed }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new(6, None)
    }
}

/// Which secrets a session plays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretSource {
    /// Every dictionary word once, in dictionary order
    All,
    /// `n` words drawn uniformly with replacement
    Random(usize),
}

/// RNG for choosing a session's secrets
///
/// Game `i` of a seeded session draws from `seed + i`; the secret stream is
/// seeded apart from all of those.
#[must_use]
pub fn secret_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, |seed| {
        StdRng::seed_from_u64(seed ^ SECRET_STREAM)
    })
}

/// Pick the secrets for a session
pub fn select_secrets<R: Rng + ?Sized>(
    dictionary: &Dictionary,
    source: SecretSource,
    rng: &mut R,
) -> Vec<Word> {
    match source {
        SecretSource::All => dictionary.words().to_vec(),
        SecretSource::Random(n) => (0..n)
            .filter_map(|_| dictionary.words().choose(rng).copied())
            .collect(),
    }
}
