//! Wordle Fitness - CLI
//!
//! Computes fitness rankings for guess words and simulates games with them.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use wordle_fitness::{
    commands::{
        batch_secrets, compare_strategies, compute_fitness, simulate, solve_word, truncate_table,
    },
    fitness::{FitnessTable, RefinementConfig},
    output::{
        print_comparison_report, print_fitness_report, print_game_record,
        print_simulation_report, print_truncate_report,
    },
    simulation::SimulationConfig,
    solver::{STRATEGY_NAMES, Strategy, StrategyType},
    wordlists::{Dictionary, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_fitness",
    about = "Rank Wordle guesses by expected remaining candidates and simulate games",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Dictionary file, one five-letter word per line
    #[arg(short, long, global = true, default_value = "dictionary.txt")]
    dictionary: PathBuf,

    /// Seed for every random choice (fitness samples, secrets, strategies)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log progress at info level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a fitness table for every dictionary word
    Fitness {
        /// Secrets sampled in the coarse pass
        #[arg(long, default_value = "50")]
        pass1_sample: usize,

        /// Secrets sampled in the refined pass
        #[arg(long, default_value = "250")]
        pass2_sample: usize,

        /// Words carried from the coarse pass into the refined pass
        #[arg(long, default_value = "2500")]
        pass2_count: usize,

        /// Use the five-pass schedule instead (ignores the pass options)
        #[arg(long)]
        extended: bool,

        /// Write the table here
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Number of words to print
        #[arg(short = 'n', long, default_value = "10")]
        top: usize,
    },

    /// Keep the best N records of a saved table
    Truncate {
        input: PathBuf,
        output: PathBuf,

        #[arg(short = 'n', long, default_value = "2500")]
        keep: usize,
    },

    /// Simulate games with one strategy
    Simulate {
        #[arg(short, long, default_value = "enhanced", value_parser = STRATEGY_NAMES)]
        strategy: String,

        /// Fitness table used by the enhanced and adaptive strategies
        #[arg(short, long)]
        table: Option<PathBuf>,

        /// Number of random secrets (default: every dictionary word)
        #[arg(short = 'g', long)]
        games: Option<usize>,

        #[arg(long, default_value = "6")]
        max_guesses: usize,
    },

    /// Run several strategies on the same secrets
    Compare {
        /// Strategies to run
        #[arg(
            short,
            long,
            value_delimiter = ',',
            default_value = "baseline,enhanced",
            value_parser = STRATEGY_NAMES
        )]
        strategies: Vec<String>,

        #[arg(short, long)]
        table: Option<PathBuf>,

        #[arg(short = 'g', long)]
        games: Option<usize>,

        #[arg(long, default_value = "6")]
        max_guesses: usize,
    },

    /// Solve a specific target word and print every step
    Solve {
        /// The target word to solve
        word: String,

        #[arg(short, long, default_value = "enhanced", value_parser = STRATEGY_NAMES)]
        strategy: String,

        #[arg(short, long)]
        table: Option<PathBuf>,

        #[arg(long, default_value = "6")]
        max_guesses: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    // Nothing else needs the dictionary
    if let Commands::Truncate {
        input,
        output,
        keep,
    } = &cli.command
    {
        let report = truncate_table(input, output, *keep)
            .with_context(|| format!("failed to truncate {}", input.display()))?;
        print_truncate_report(&report);
        return Ok(());
    }

    let dictionary = load_from_file(&cli.dictionary)
        .with_context(|| format!("failed to load dictionary {}", cli.dictionary.display()))?;

    match cli.command {
        Commands::Fitness {
            pass1_sample,
            pass2_sample,
            pass2_count,
            extended,
            output,
            top,
        } => {
            let config = if extended {
                RefinementConfig::extended()
            } else {
                RefinementConfig::two_pass(pass1_sample, pass2_sample, pass2_count)
            };
            run_fitness_command(&dictionary, config, cli.seed, output.as_deref(), top)
        }
        Commands::Truncate { .. } => Ok(()),
        Commands::Simulate {
            strategy,
            table,
            games,
            max_guesses,
        } => {
            let table = load_table(table.as_deref(), &dictionary)?;
            let strategy = strategy_for(&strategy, &table, &dictionary)?;
            let config = SimulationConfig::new(max_guesses, cli.seed);
            let secrets = batch_secrets(&dictionary, games, cli.seed);

            let report = simulate(&dictionary, &strategy, &secrets, config, true);
            print_simulation_report(&report);
            Ok(())
        }
        Commands::Compare {
            strategies,
            table,
            games,
            max_guesses,
        } => {
            let table = load_table(table.as_deref(), &dictionary)?;
            let strategies = strategies
                .iter()
                .map(|name| strategy_for(name, &table, &dictionary))
                .collect::<Result<Vec<_>>>()?;
            let refs: Vec<&dyn Strategy> = strategies.iter().map(|s| s as &dyn Strategy).collect();
            let config = SimulationConfig::new(max_guesses, cli.seed);
            let secrets = batch_secrets(&dictionary, games, cli.seed);

            let report = compare_strategies(&dictionary, &refs, &secrets, config, true);
            print_comparison_report(&report);
            Ok(())
        }
        Commands::Solve {
            word,
            strategy,
            table,
            max_guesses,
        } => {
            let table = load_table(table.as_deref(), &dictionary)?;
            let strategy = strategy_for(&strategy, &table, &dictionary)?;
            let config = SimulationConfig::new(max_guesses, cli.seed);

            let record = solve_word(&dictionary, &strategy, &word, config)
                .with_context(|| format!("invalid target word {word:?}"))?;
            print_game_record(&record, cli.verbose);
            Ok(())
        }
    }
}

fn run_fitness_command(
    dictionary: &Dictionary,
    config: RefinementConfig,
    seed: Option<u64>,
    output: Option<&Path>,
    top: usize,
) -> Result<()> {
    let report = compute_fitness(dictionary, config, seed, true).context("fitness run failed")?;

    if let Some(path) = output {
        report
            .table
            .save(path)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }
    print_fitness_report(&report, top);
    Ok(())
}

/// Load a fitness table and check it against the dictionary
///
/// A missing path yields an empty table, which only matters to strategies that
/// read one.
fn load_table(path: Option<&Path>, dictionary: &Dictionary) -> Result<FitnessTable> {
    let Some(path) = path else {
        return Ok(FitnessTable::default());
    };

    let table = FitnessTable::load(path)
        .with_context(|| format!("failed to load fitness table {}", path.display()))?;
    table
        .validate_against(dictionary)
        .with_context(|| format!("fitness table {} does not match the dictionary", path.display()))?;
    Ok(table)
}

fn strategy_for<'a>(
    name: &str,
    table: &'a FitnessTable,
    dictionary: &'a Dictionary,
) -> Result<StrategyType<'a>> {
    let strategy = StrategyType::from_name(name, table, dictionary);
    if strategy.uses_table() && table.is_empty() {
        bail!("the {name} strategy needs a fitness table (--table)");
    }
    Ok(strategy)
}
