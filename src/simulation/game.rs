//! A single game
//!
//! Each game starts with the whole dictionary as candidates and alternates
//! strategy, oracle and filter until the secret is found or the game fails.

use crate::core::{CandidateSet, Pattern, Word};
use crate::solver::Strategy;
use crate::wordlists::Dictionary;
use log::{debug, warn};
use rand::RngCore;
use thiserror::Error;

/// Why a game ended without finding the secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The guess limit was reached
    OutOfGuesses,
    /// Filtering removed every candidate; the secret was not in the dictionary
    CandidatesExhausted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    Solved,
    Failed(FailureKind),
}

/// Raised when the candidate set becomes empty mid-game
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("no candidates remain for secret {secret} after {guesses} guesses")]
    EmptyCandidateSet { secret: Word, guesses: usize },
}

/// Terminal result of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// Found the secret; `guesses` includes the winning guess
    Solved { guesses: usize },
    Failed(FailureKind),
}

impl GameOutcome {
    #[must_use]
    pub const fn is_solved(self) -> bool {
        matches!(self, Self::Solved { .. })
    }
}

/// One turn of a finished or running game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameStep {
    pub guess: Word,
    pub pattern: Pattern,
    /// Candidates before the guess
    pub before: usize,
    /// Candidates after filtering on the feedback
    pub after: usize,
}

/// Everything that happened in one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub secret: Word,
    pub steps: Vec<GameStep>,
    pub outcome: GameOutcome,
}

impl GameRecord {
    #[must_use]
    pub fn guesses(&self) -> usize {
        self.steps.len()
    }

    pub fn history(&self) -> impl Iterator<Item = (Word, Pattern)> + '_ {
        self.steps.iter().map(|s| (s.guess, s.pattern))
    }
}

/// Game state machine
pub struct Game<'a, S: Strategy + ?Sized> {
    strategy: &'a S,
    secret: Word,
    max_guesses: usize,
    candidates: CandidateSet,
    history: Vec<(Word, Pattern)>,
    steps: Vec<GameStep>,
    state: GameState,
}

impl<'a, S: Strategy + ?Sized> Game<'a, S> {
    #[must_use]
    pub fn new(dictionary: &Dictionary, strategy: &'a S, secret: Word, max_guesses: usize) -> Self {
        Self {
            strategy,
            secret,
            max_guesses,
            candidates: dictionary.candidates(),
            history: Vec::new(),
            steps: Vec::new(),
            state: GameState::InProgress,
        }
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    #[must_use]
    pub fn history(&self) -> &[(Word, Pattern)] {
        &self.history
    }

    /// Play one guess
    ///
    /// Does nothing once the game has ended.
    ///
    /// # Errors
    ///
    /// Returns `EmptyCandidateSet` when the feedback leaves no candidates (or the
    /// strategy has nothing to guess). The game is then marked
    /// `Failed(CandidatesExhausted)`.
    pub fn step(&mut self, rng: &mut dyn RngCore) -> Result<GameState, GameError> {
        if self.state != GameState::InProgress {
            return Ok(self.state);
        }
        if self.steps.len() >= self.max_guesses {
            self.state = GameState::Failed(FailureKind::OutOfGuesses);
            return Ok(self.state);
        }

        let Some(guess) = self
            .strategy
            .next_guess(&self.candidates, &self.history, rng)
        else {
            return Err(self.exhausted());
        };

        let pattern = Pattern::score(&self.secret, &guess);
        let before = self.candidates.len();

        if pattern.is_perfect() {
            self.record(guess, pattern, before, 1);
            self.state = GameState::Solved;
            return Ok(self.state);
        }

        self.candidates.narrow(&guess, pattern);
        self.record(guess, pattern, before, self.candidates.len());

        if self.candidates.is_empty() {
            return Err(self.exhausted());
        }
        if self.steps.len() >= self.max_guesses {
            self.state = GameState::Failed(FailureKind::OutOfGuesses);
        }
        Ok(self.state)
    }

    fn record(&mut self, guess: Word, pattern: Pattern, before: usize, after: usize) {
        debug!("{}: {guess} {pattern} ({before} -> {after})", self.secret);
        self.history.push((guess, pattern));
        self.steps.push(GameStep {
            guess,
            pattern,
            before,
            after,
        });
    }

    fn exhausted(&mut self) -> GameError {
        self.state = GameState::Failed(FailureKind::CandidatesExhausted);
        GameError::EmptyCandidateSet {
            secret: self.secret,
            guesses: self.steps.len(),
        }
    }

    /// Finish the game; a game still in progress counts as out of guesses
    #[must_use]
    pub fn into_record(self) -> GameRecord {
        let outcome = match self.state {
            GameState::Solved => GameOutcome::Solved {
                guesses: self.steps.len(),
            },
            GameState::Failed(kind) => GameOutcome::Failed(kind),
            GameState::InProgress => GameOutcome::Failed(FailureKind::OutOfGuesses),
        };
        GameRecord {
            secret: self.secret,
            steps: self.steps,
            outcome,
        }
    }
}

/// Play a game to the end
///
/// A collapsed candidate set is logged and recorded as a failure rather than
/// returned as an error.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use wordle_fitness::core::Word;
/// use wordle_fitness::simulation::{GameOutcome, play_game};
/// use wordle_fitness::solver::RandomStrategy;
/// use wordle_fitness::wordlists::words_from_slice;
///
/// let dictionary = words_from_slice(&["crane", "slate", "irate"]).unwrap();
/// let secret = Word::new("slate").unwrap();
/// let record = play_game(&dictionary, &RandomStrategy, secret, 6, &mut StdRng::seed_from_u64(1));
///
/// assert!(matches!(record.outcome, GameOutcome::Solved { .. }));
/// assert_eq!(record.steps.last().unwrap().guess, secret);
/// ```
pub fn play_game<S: Strategy + ?Sized>(
    dictionary: &Dictionary,
    strategy: &S,
    secret: Word,
    max_guesses: usize,
    rng: &mut dyn RngCore,
) -> GameRecord {
    let mut game = Game::new(dictionary, strategy, secret, max_guesses);
    loop {
        match game.step(rng) {
            Ok(GameState::InProgress) => {}
            Ok(_) => break,
            Err(e) => {
                warn!("{e}");
                break;
            }
        }
    }
    game.into_record()
}
