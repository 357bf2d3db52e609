//! Formatting utilities for terminal output

use crate::core::{Mark, Pattern, Word};
use colored::Colorize;

/// Render a guess as colored letter tiles
#[must_use]
pub fn colored_guess(guess: &Word, pattern: Pattern) -> String {
    guess
        .chars()
        .iter()
        .zip(pattern.marks())
        .map(|(&ch, mark)| {
            let tile = format!(" {} ", (ch as char).to_ascii_uppercase());
            match mark {
                Mark::Exact => tile.black().on_green().bold().to_string(),
                Mark::Present => tile.black().on_yellow().bold().to_string(),
                Mark::Absent => tile.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Percentage with one decimal, `-` when the total is zero
#[must_use]
pub fn percent(part: usize, total: usize) -> String {
    if total == 0 {
        "-".to_string()
    } else {
        format!("{:.1}%", part as f64 / total as f64 * 100.0)
    }
}

/// Format an optional statistic to three decimals
#[must_use]
pub fn optional_stat(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.3}"))
}
