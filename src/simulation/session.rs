//! Batch simulation and statistics
//!
//! Runs one independent game per secret in parallel. Every game draws from its
//! own RNG seeded with `base + index`, so results do not depend on scheduling.

use super::SimulationConfig;
use super::game::{FailureKind, GameOutcome, GameRecord, play_game};
use crate::core::Word;
use crate::solver::Strategy;
use crate::wordlists::Dictionary;
use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::fmt;

/// Aggregate over many games
///
/// Averages, median, min and max cover solved games only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionStatistics {
    pub games: usize,
    pub solved: usize,
    pub out_of_guesses: usize,
    /// Games whose candidate set emptied
    pub collapsed: usize,
    pub total_guesses: usize,
    pub min_guesses: Option<usize>,
    pub max_guesses: Option<usize>,
    /// Guess count → number of games solved in that many guesses
    pub distribution: BTreeMap<usize, usize>,
}

impl SessionStatistics {
    pub fn record(&mut self, outcome: GameOutcome) {
        self.games += 1;
        match outcome {
            GameOutcome::Solved { guesses } => {
                self.solved += 1;
                self.total_guesses += guesses;
                self.min_guesses = Some(self.min_guesses.map_or(guesses, |m| m.min(guesses)));
                self.max_guesses = Some(self.max_guesses.map_or(guesses, |m| m.max(guesses)));
                *self.distribution.entry(guesses).or_insert(0) += 1;
            }
            GameOutcome::Failed(FailureKind::OutOfGuesses) => self.out_of_guesses += 1,
            GameOutcome::Failed(FailureKind::CandidatesExhausted) => self.collapsed += 1,
        }
    }

    /// Combine two partial aggregates
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        self.games += other.games;
        self.solved += other.solved;
        self.out_of_guesses += other.out_of_guesses;
        self.collapsed += other.collapsed;
        self.total_guesses += other.total_guesses;
        self.min_guesses = match (self.min_guesses, other.min_guesses) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        self.max_guesses = self.max_guesses.max(other.max_guesses);
        for (guesses, count) in other.distribution {
            *self.distribution.entry(guesses).or_insert(0) += count;
        }
        self
    }

    /// Failed games of either kind
    #[must_use]
    pub const fn failed(&self) -> usize {
        self.out_of_guesses + self.collapsed
    }

    /// Mean guesses over solved games
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn average(&self) -> Option<f64> {
        (self.solved > 0).then(|| self.total_guesses as f64 / self.solved as f64)
    }

    /// Median guesses over solved games
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn median(&self) -> Option<f64> {
        if self.solved == 0 {
            return None;
        }
        let nth = |n: usize| {
            let mut seen = 0;
            self.distribution
                .iter()
                .find(|&(_, &count)| {
                    seen += count;
                    seen > n
                })
                .map_or(0, |(&guesses, _)| guesses)
        };
        let mid = self.solved / 2;
        if self.solved % 2 == 1 {
            Some(nth(mid) as f64)
        } else {
            Some((nth(mid - 1) + nth(mid)) as f64 / 2.0)
        }
    }

    /// Fraction of games solved, 0.0 for an empty session
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn solve_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.solved as f64 / self.games as f64
        }
    }
}

impl FromIterator<GameOutcome> for SessionStatistics {
    fn from_iter<I: IntoIterator<Item = GameOutcome>>(iter: I) -> Self {
        let mut stats = Self::default();
        for outcome in iter {
            stats.record(outcome);
        }
        stats
    }
}

impl fmt::Display for SessionStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} games, {} solved ({:.1}%)",
            self.games,
            self.solved,
            self.solve_rate() * 100.0
        )?;
        if let (Some(avg), Some(min), Some(max)) =
            (self.average(), self.min_guesses, self.max_guesses)
        {
            write!(f, ", avg {avg:.3}, min {min}, max {max}")?;
        }
        write!(
            f,
            ", FAILED {} ({} out of guesses, {} collapsed)",
            self.failed(),
            self.out_of_guesses,
            self.collapsed
        )
    }
}

/// Plays sessions of games over a shared dictionary
pub struct Simulator<'a> {
    dictionary: &'a Dictionary,
    config: SimulationConfig,
    show_progress: bool,
}

impl<'a> Simulator<'a> {
    #[must_use]
    pub const fn new(dictionary: &'a Dictionary, config: SimulationConfig) -> Self {
        Self {
            dictionary,
            config,
            show_progress: false,
        }
    }

    /// Draw a progress bar per session
    #[must_use]
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    #[must_use]
    pub const fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Play one game with the RNG seeded for `base + index`
    pub fn play<S: Strategy + ?Sized>(
        &self,
        strategy: &S,
        secret: Word,
        base_seed: u64,
        index: usize,
    ) -> GameRecord {
        let mut rng = StdRng::seed_from_u64(base_seed.wrapping_add(index as u64));
        play_game(
            self.dictionary,
            strategy,
            secret,
            self.config.max_guesses,
            &mut rng,
        )
    }

    /// The configured seed, or a fresh one
    #[must_use]
    pub fn base_seed(&self) -> u64 {
        self.config.seed.unwrap_or_else(rand::random)
    }

    /// Play one game per secret and aggregate the outcomes
    ///
    /// # Examples
    /// ```
    /// use wordle_fitness::simulation::{SimulationConfig, Simulator};
    /// use wordle_fitness::solver::RandomStrategy;
    /// use wordle_fitness::wordlists::words_from_slice;
    ///
    /// let dictionary = words_from_slice(&["crane", "slate", "irate"]).unwrap();
    /// let simulator = Simulator::new(&dictionary, SimulationConfig::new(6, Some(1)));
    /// let stats = simulator.run_session(&RandomStrategy, dictionary.words());
    ///
    /// assert_eq!(stats.games, 3);
    /// assert_eq!(stats.solved, 3);
    /// ```
    pub fn run_session<S: Strategy + ?Sized>(
        &self,
        strategy: &S,
        secrets: &[Word],
    ) -> SessionStatistics {
        self.run_session_seeded(strategy, secrets, self.base_seed())
    }

    fn run_session_seeded<S: Strategy + ?Sized>(
        &self,
        strategy: &S,
        secrets: &[Word],
        base_seed: u64,
    ) -> SessionStatistics {
        info!(
            "simulating {} games with {} (seed {base_seed})",
            secrets.len(),
            strategy.name()
        );

        let progress = self.progress_bar(strategy.name(), secrets.len());
        let stats = secrets
            .par_iter()
            .enumerate()
            .progress_with(progress.clone())
            .map(|(i, &secret)| self.play(strategy, secret, base_seed, i).outcome)
            .fold(SessionStatistics::default, |mut acc, outcome| {
                acc.record(outcome);
                acc
            })
            .reduce(SessionStatistics::default, SessionStatistics::merge);
        progress.finish_and_clear();

        info!("{}: {stats}", strategy.name());
        stats
    }

    /// Run every strategy on the same secrets with the same seeds
    pub fn compare(
        &self,
        strategies: &[&dyn Strategy],
        secrets: &[Word],
    ) -> Vec<(&'static str, SessionStatistics)> {
        let base_seed = self.base_seed();
        strategies
            .iter()
            .map(|s| (s.name(), self.run_session_seeded(*s, secrets, base_seed)))
            .collect()
    }

    fn progress_bar(&self, name: &str, len: usize) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(len as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} {msg} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb.set_message(name.to_string());
        pb
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fitness::FitnessEstimator;
    use crate::solver::{RandomStrategy, RankedStrategy};
    use crate::wordlists::words_from_slice;

    fn ills() -> Dictionary {
        words_from_slice(&["bills", "fills", "gills", "hills", "mills", "bfghm"]).unwrap()
    }

    fn cycled_secrets(dictionary: &Dictionary, n: usize) -> Vec<Word> {
        dictionary.words().iter().copied().cycle().take(n).collect()
    }

    #[test]
    fn record_and_merge_agree() {
        let outcomes = [
            GameOutcome::Solved { guesses: 3 },
            GameOutcome::Solved { guesses: 5 },
            GameOutcome::Failed(FailureKind::OutOfGuesses),
            GameOutcome::Solved { guesses: 2 },
            GameOutcome::Failed(FailureKind::CandidatesExhausted),
        ];
        let whole: SessionStatistics = outcomes.iter().copied().collect();
        let left: SessionStatistics = outcomes[..2].iter().copied().collect();
        let right: SessionStatistics = outcomes[2..].iter().copied().collect();

        assert_eq!(left.merge(right), whole);
        assert_eq!(whole.games, 5);
        assert_eq!(whole.failed(), 2);
        assert_eq!(whole.min_guesses, Some(2));
        assert_eq!(whole.max_guesses, Some(5));
        assert_eq!(whole.average(), Some(10.0 / 3.0));
        assert_eq!(whole.median(), Some(3.0));
    }

    #[test]
    fn median_of_even_count() {
        let stats: SessionStatistics = [1, 2, 4, 6]
            .into_iter()
            .map(|guesses| GameOutcome::Solved { guesses })
            .collect();
        assert_eq!(stats.median(), Some(3.0));
    }

    #[test]
    fn empty_session_has_no_average() {
        let stats = SessionStatistics::default();
        assert_eq!(stats.average(), None);
        assert_eq!(stats.median(), None);
        assert!(stats.solve_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn enhanced_beats_baseline_over_1000_games() {
        let dictionary = ills();
        let table = FitnessEstimator::new(&dictionary).estimate_all(dictionary.words(), dictionary.words());
        let enhanced = RankedStrategy::new(&table);
        let secrets = cycled_secrets(&dictionary, 1000);
        let simulator = Simulator::new(&dictionary, SimulationConfig::new(6, Some(2024)));

        let results = simulator.compare(&[&RandomStrategy, &enhanced], &secrets);
        let (_, baseline) = &results[0];
        let (_, ranked) = &results[1];

        assert_eq!(baseline.games, 1000);
        assert_eq!(ranked.games, 1000);
        assert!(ranked.failed() <= baseline.failed());
        assert_eq!(ranked.max_guesses, Some(2));
    }

    #[test]
    fn enhanced_fails_no_more_than_baseline_under_tight_limit() {
        // Ten -ILLS words share one pattern; BFGHM and PTWDK each split five of them.
        let dictionary = words_from_slice(&[
            "bills", "fills", "gills", "hills", "mills", "pills", "tills", "wills", "dills",
            "kills", "bfghm", "ptwdk",
        ])
        .unwrap();
        let table = FitnessEstimator::new(&dictionary).estimate_all(dictionary.words(), dictionary.words());
        let enhanced = RankedStrategy::new(&table);
        let secrets = cycled_secrets(&dictionary, 1200);
        let simulator = Simulator::new(&dictionary, SimulationConfig::new(3, Some(77)));

        let results = simulator.compare(&[&RandomStrategy, &enhanced], &secrets);
        let (_, baseline) = &results[0];
        let (_, ranked) = &results[1];

        assert_eq!(table.best().map(|e| e.word.text()), Some("bfghm"));
        assert!(baseline.out_of_guesses > 0);
        assert_eq!(ranked.failed(), 0);
        assert!(ranked.failed() <= baseline.failed());
    }

    #[test]
    fn sessions_are_reproducible() {
        let dictionary = ills();
        let secrets = cycled_secrets(&dictionary, 200);
        let simulator = Simulator::new(&dictionary, SimulationConfig::new(6, Some(7)));

        let a = simulator.run_session(&RandomStrategy, &secrets);
        let b = simulator.run_session(&RandomStrategy, &secrets);
        assert_eq!(a, b);
    }

    #[test]
    fn collapsed_games_are_counted_separately() {
        let dictionary = words_from_slice(&["bills", "fills", "gills"]).unwrap();
        let secrets: Vec<Word> = ["pills", "bills", "pills"]
            .iter()
            .map(|w| Word::new(w).unwrap())
            .collect();
        let simulator = Simulator::new(&dictionary, SimulationConfig::new(6, Some(0)));

        let stats = simulator.run_session(&RandomStrategy, &secrets);
        assert_eq!(stats.games, 3);
        assert_eq!(stats.solved, 1);
        assert_eq!(stats.collapsed, 2);
        assert_eq!(stats.out_of_guesses, 0);
    }

    #[test]
    fn guess_limit_counts_as_out_of_guesses() {
        let dictionary = ills();
        let secrets = cycled_secrets(&dictionary, 60);
        let simulator = Simulator::new(&dictionary, SimulationConfig::new(1, Some(3)));

        let stats = simulator.run_session(&RandomStrategy, &secrets);
        assert_eq!(stats.collapsed, 0);
        assert_eq!(stats.solved + stats.out_of_guesses, 60);
        assert_eq!(stats.max_guesses.unwrap_or(1), 1);
    }
}
