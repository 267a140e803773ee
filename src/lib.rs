//! Tennis Edge - Elo-based value analysis for tennis match odds
//!
//! Given two players, the decimal odds offered on each, and a directory of
//! rated players, this crate derives win probabilities from the rating gap,
//! computes the expected value of backing either side, and produces a
//! deterministic recommendation.

pub mod analysis;
pub mod config;
pub mod directory;
pub mod error;
pub mod rating;
pub mod types;
pub mod utils;

// Re-export commonly used types and functions
pub use error::{Result, ValidationError};
pub use types::*;

pub use analysis::{analyze, render_text, AnalysisEngine};
pub use directory::PlayerDirectory;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
