//! Multi-pass fitness refinement
//!
//! Scoring every word against a large sample is expensive (dictionary × sample
//! oracle calls), so ranking runs in passes: a cheap pass over every word with a
//! small sample, then repeated passes that keep only the best-ranked words from the
//! previous pass and score them against larger samples.

use super::{FitnessError, FitnessEstimator, FitnessTable};
use crate::core::Word;
use crate::wordlists::Dictionary;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use rand::Rng;
use rand::seq::index::sample;
use std::fmt;

/// How many secrets a pass scores against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleSize {
    /// Every dictionary word
    Full,
    /// A random subset of this size, drawn without replacement (capped at the dictionary size)
    Random(usize),
}

/// Which words a pass scores
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateCount {
    /// Every word the previous stage produced (the whole dictionary for the first pass)
    All,
    /// Only the `n` best-ranked words of the previous pass
    Top(usize),
}

/// Configuration for a single pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassConfig {
    pub sample: SampleSize,
    pub candidates: CandidateCount,
}

impl PassConfig {
    #[must_use]
    pub const fn new(sample: SampleSize, candidates: CandidateCount) -> Self {
        Self { sample, candidates }
    }
}

impl fmt::Display for PassConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.candidates {
            CandidateCount::All => write!(f, "all words")?,
            CandidateCount::Top(n) => write!(f, "top {n} words")?,
        }
        match self.sample {
            SampleSize::Full => write!(f, " × every secret"),
            SampleSize::Random(n) => write!(f, " × {n} sampled secrets"),
        }
    }
}

/// The pass schedule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefinementConfig {
    pub passes: Vec<PassConfig>,
}

impl RefinementConfig {
    /// Coarse pass over all words, then a refined pass over the best `pass2_count`
    #[must_use]
    pub fn two_pass(pass1_sample_size: usize, pass2_sample_size: usize, pass2_count: usize) -> Self {
        Self {
            passes: vec![
                PassConfig::new(SampleSize::Random(pass1_sample_size), CandidateCount::All),
                PassConfig::new(
                    SampleSize::Random(pass2_sample_size),
                    CandidateCount::Top(pass2_count),
                ),
            ],
        }
    }

    /// Five passes narrowing 2500 → 500 → 100 → 20, finishing against the full dictionary
    #[must_use]
    pub fn extended() -> Self {
        use CandidateCount::{All, Top};
        use SampleSize::{Full, Random};

        Self {
            passes: vec![
                PassConfig::new(Random(50), All),
                PassConfig::new(Random(250), Top(2500)),
                PassConfig::new(Random(1000), Top(500)),
                PassConfig::new(Random(2500), Top(100)),
                PassConfig::new(Full, Top(20)),
            ],
        }
    }
}

impl Default for RefinementConfig {
    fn default() -> Self {
        Self::two_pass(50, 250, 2500)
    }
}

/// Draw the secrets for one pass
pub fn draw_samples<R: Rng + ?Sized>(
    dictionary: &Dictionary,
    size: SampleSize,
    rng: &mut R,
) -> Vec<Word> {
    match size {
        SampleSize::Full => dictionary.words().to_vec(),
        SampleSize::Random(n) => {
            let n = n.min(dictionary.len());
            sample(rng, dictionary.len(), n)
                .into_iter()
                .map(|i| dictionary.words()[i])
                .collect()
        }
    }
}

/// Runs a pass schedule against a dictionary
pub struct Refinement<'a> {
    estimator: FitnessEstimator<'a>,
    config: RefinementConfig,
    show_progress: bool,
}

impl<'a> Refinement<'a> {
    #[must_use]
    pub const fn new(dictionary: &'a Dictionary, config: RefinementConfig) -> Self {
        Self {
            estimator: FitnessEstimator::new(dictionary),
            config,
            show_progress: false,
        }
    }

    /// Draw a progress bar per pass
    #[must_use]
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Run every pass and return the final ranking
    ///
    /// # Errors
    ///
    /// - `NoPasses` when the schedule is empty
    /// - `EmptyPass` when a pass would score no words or draw no samples
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use wordle_fitness::fitness::{Refinement, RefinementConfig};
    /// use wordle_fitness::wordlists::words_from_slice;
    ///
    /// let dictionary =
    ///     words_from_slice(&["bills", "fills", "gills", "hills", "mills", "bfghm"]).unwrap();
    /// let config = RefinementConfig::two_pass(6, 6, 3);
    /// let table = Refinement::new(&dictionary, config)
    ///     .run(&mut StdRng::seed_from_u64(7))
    ///     .unwrap();
    ///
    /// assert_eq!(table.len(), 3);
    /// assert_eq!(table.best().unwrap().word.text(), "bfghm");
    /// ```
    pub fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<FitnessTable, FitnessError> {
        if self.config.passes.is_empty() {
            return Err(FitnessError::NoPasses);
        }

        let dictionary = self.estimator.dictionary();
        let mut pool: Vec<Word> = dictionary.words().to_vec();
        let mut table = FitnessTable::default();

        for (i, pass) in self.config.passes.iter().enumerate() {
            let number = i + 1;

            if let CandidateCount::Top(n) = pass.candidates {
                pool.truncate(n);
            }
            let samples = draw_samples(dictionary, pass.sample, rng);
            if pool.is_empty() || samples.is_empty() {
                return Err(FitnessError::EmptyPass { pass: number });
            }

            info!(
                "fitness pass {number}: {} words × {} secrets",
                pool.len(),
                samples.len()
            );

            let progress = self.progress_bar(number, pool.len());
            table = self
                .estimator
                .estimate_all_with_progress(&pool, &samples, &progress);
            progress.finish_and_clear();

            if let Some(best) = table.best() {
                debug!("pass {number} best: {} ({:.3})", best.word, best.score);
            }

            pool = table.words().collect();
        }

        Ok(table)
    }

    fn progress_bar(&self, pass: usize, len: usize) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(len as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} pass {msg} [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb.set_message(pass.to_string());
        pb
    }
}
