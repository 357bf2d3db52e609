//! Command implementations

pub mod fitness;
pub mod simulate;
pub mod solve;

pub use fitness::{FitnessReport, TruncateReport, compute_fitness, truncate_table};
pub use simulate::{
    ComparisonReport, SimulationReport, batch_secrets, compare_strategies, simulate,
};
pub use solve::solve_word;
