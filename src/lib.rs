//! Wordle Fitness
//!
//! Ranks guess words by how many candidates they leave behind, and simulates
//! games to compare a random baseline against fitness-guided strategies.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_fitness::core::{CandidateSet, Pattern, Word};
//!
//! let secret = Word::new("slate").unwrap();
//! let guess = Word::new("stale").unwrap();
//!
//! // Score the guess and keep the words consistent with the feedback
//! let pattern = Pattern::score(&secret, &guess);
//! let candidates: CandidateSet = ["apple", "angle", "table", "stale", "slate"]
//!     .iter()
//!     .map(|w| Word::new(w).unwrap())
//!     .collect();
//! assert_eq!(candidates.filter(&guess, pattern).len(), 1);
//! ```

// Core domain types
pub mod core;

// Dictionary loading
pub mod wordlists;

// Fitness estimation and ranking
pub mod fitness;

// Guess selection strategies
pub mod solver;

// Game and session simulation
pub mod simulation;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
