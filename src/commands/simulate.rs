//! Simulation commands
//!
//! Runs batches of games for one strategy, or several strategies over the same
//! secrets.

use crate::core::Word;
use crate::simulation::{
    SecretSource, SessionStatistics, SimulationConfig, Simulator, secret_rng, select_secrets,
};
use crate::solver::Strategy;
use crate::wordlists::Dictionary;
use std::time::{Duration, Instant};

/// Result of a single-strategy batch
pub struct SimulationReport {
    pub strategy: &'static str,
    pub stats: SessionStatistics,
    pub duration: Duration,
}

impl SimulationReport {
    #[must_use]
    pub fn games_per_second(&self) -> f64 {
        self.stats.games as f64 / self.duration.as_secs_f64().max(f64::EPSILON)
    }
}

/// Result of running several strategies on one secret list
pub struct ComparisonReport {
    pub secrets: usize,
    pub rows: Vec<(&'static str, SessionStatistics)>,
    pub duration: Duration,
}

impl ComparisonReport {
    /// Name of the strategy with the lowest average, if any solved a game
    #[must_use]
    pub fn best(&self) -> Option<&'static str> {
        self.rows
            .iter()
            .filter_map(|(name, stats)| stats.average().map(|avg| (*name, avg)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(name, _)| name)
    }
}

/// Secrets for a batch: `games` random draws, or the whole dictionary
#[must_use]
pub fn batch_secrets(dictionary: &Dictionary, games: Option<usize>, seed: Option<u64>) -> Vec<Word> {
    let source = games.map_or(SecretSource::All, SecretSource::Random);
    select_secrets(dictionary, source, &mut secret_rng(seed))
}

/// Play one game per secret with `strategy`
pub fn simulate<S: Strategy + ?Sized>(
    dictionary: &Dictionary,
    strategy: &S,
    secrets: &[Word],
    config: SimulationConfig,
    show_progress: bool,
) -> SimulationReport {
    let start = Instant::now();
    let stats = Simulator::new(dictionary, config)
        .with_progress(show_progress)
        .run_session(strategy, secrets);

    SimulationReport {
        strategy: strategy.name(),
        stats,
        duration: start.elapsed(),
    }
}

/// Play every strategy against the same secrets and seeds
pub fn compare_strategies(
    dictionary: &Dictionary,
    strategies: &[&dyn Strategy],
    secrets: &[Word],
    config: SimulationConfig,
    show_progress: bool,
) -> ComparisonReport {
    let start = Instant::now();
    let rows = Simulator::new(dictionary, config)
        .with_progress(show_progress)
        .compare(strategies, secrets);

    ComparisonReport {
        secrets: secrets.len(),
        rows,
        duration: start.elapsed(),
    }
}
