//! Display functions for command results

use super::formatters::{colored_guess, create_progress_bar, optional_stat, percent};
use crate::commands::{ComparisonReport, FitnessReport, SimulationReport, TruncateReport};
use crate::simulation::{FailureKind, GameOutcome, GameRecord, SessionStatistics};
use colored::Colorize;

fn header(title: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", title.bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
}

/// Print the best words of a fitness table
pub fn print_fitness_report(report: &FitnessReport, top: usize) {
    header("FITNESS RANKING");

    println!("\n📊 {}", "Passes:".bright_cyan().bold());
    for (i, pass) in report.passes.iter().enumerate() {
        println!("   {}: {pass}", i + 1);
    }
    println!("   Dictionary:  {} words", report.dictionary_size);
    println!("   Time taken:  {:.2}s", report.duration.as_secs_f64());

    println!("\n🏆 {}", "Best openers:".bright_cyan().bold());
    for (rank, entry) in report.table.entries().iter().take(top).enumerate() {
        let word = entry.word.text().to_uppercase();
        let word = if rank == 0 {
            word.bright_green().bold()
        } else {
            word.normal()
        };
        println!("   {:>3}. {word}  {:.3}", rank + 1, entry.score);
    }
}

pub fn print_truncate_report(report: &TruncateReport) {
    println!(
        "Kept {} of {} records",
        report.kept.to_string().bright_yellow(),
        report.total
    );
}

/// Print the statistics of one simulated batch
pub fn print_simulation_report(report: &SimulationReport) {
    header(&format!("SIMULATION: {}", report.strategy.to_uppercase()));

    print_statistics(&report.stats);

    println!("   Time taken:       {:.2}s", report.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", report.games_per_second());
}

fn print_statistics(stats: &SessionStatistics) {
    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", stats.games);
    println!(
        "   Solved:           {} {}",
        stats.solved,
        format!("({})", percent(stats.solved, stats.games)).green()
    );
    println!(
        "   Average guesses:  {}",
        optional_stat(stats.average()).bright_yellow().bold()
    );
    println!("   Median guesses:   {}", optional_stat(stats.median()));
    if let (Some(min), Some(max)) = (stats.min_guesses, stats.max_guesses) {
        println!("   Best case:        {}", min.to_string().green());
        println!("   Worst case:       {}", max.to_string().yellow());
    }

    let failed = format!("FAILED {}", stats.failed());
    if stats.failed() > 0 {
        println!(
            "   {}  ({} out of guesses, {} collapsed)",
            failed.red().bold(),
            stats.out_of_guesses,
            stats.collapsed
        );
    } else {
        println!("   {}", failed.green());
    }

    if stats.solved == 0 {
        return;
    }
    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let max_count = stats.distribution.values().copied().max().unwrap_or(1);
    for (&guesses, &count) in &stats.distribution {
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!(
            "   {guesses}: {} {count:5} ({:>6})",
            bar.green(),
            percent(count, stats.solved)
        );
    }
}

/// Print strategies side by side
pub fn print_comparison_report(report: &ComparisonReport) {
    header("STRATEGY COMPARISON");
    println!("\n   {} secrets per strategy\n", report.secrets);

    println!(
        "   {:<10} {:>8} {:>8} {:>8} {:>5} {:>5} {:>8}",
        "strategy", "solved", "average", "median", "min", "max", "FAILED"
    );
    let best = report.best();
    for (name, stats) in &report.rows {
        let label = format!("{name:<10}");
        let label = if Some(*name) == best {
            label.bright_green().bold()
        } else {
            label.normal()
        };
        println!(
            "   {label} {:>8} {:>8} {:>8} {:>5} {:>5} {:>8}",
            stats.solved,
            optional_stat(stats.average()),
            optional_stat(stats.median()),
            stats.min_guesses.map_or_else(|| "-".to_string(), |v| v.to_string()),
            stats.max_guesses.map_or_else(|| "-".to_string(), |v| v.to_string()),
            stats.failed()
        );
    }
    println!("\n   Time taken: {:.2}s", report.duration.as_secs_f64());
}

/// Print the trace of one game
pub fn print_game_record(record: &GameRecord, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        record.secret.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in record.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {}  {}",
            i + 1,
            colored_guess(&step.guess, step.pattern),
            step.pattern.to_emoji()
        );
        println!("  Candidates: {} → {}", step.before, step.after);
        if verbose {
            println!("  Grade:      {}", step.pattern);
        }
    }

    println!();
    match record.outcome {
        GameOutcome::Solved { guesses } => println!(
            "{}",
            format!("✅ Solved in {guesses} guesses!").green().bold()
        ),
        GameOutcome::Failed(FailureKind::OutOfGuesses) => println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", record.guesses())
                .red()
                .bold()
        ),
        GameOutcome::Failed(FailureKind::CandidatesExhausted) => println!(
            "{}",
            format!(
                "❌ No candidates left after {} guesses; {} is not in the dictionary",
                record.guesses(),
                record.secret
            )
            .red()
            .bold()
        ),
    }
}
