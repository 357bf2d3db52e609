//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_comparison_report, print_fitness_report, print_game_record, print_simulation_report,
    print_truncate_report,
};
