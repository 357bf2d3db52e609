//! Wordle solving algorithms
//!
//! This module contains the guess selection strategies.

pub mod adaptive;
pub mod frequency;
pub mod lookahead;
pub mod strategy;

pub use adaptive::{AdaptiveStrategy, AdaptiveTier};
pub use frequency::{FrequencyStrategy, absent_letters};
pub use lookahead::LookaheadStrategy;
pub use strategy::{RandomStrategy, RankedStrategy, STRATEGY_NAMES, Strategy, StrategyType};
