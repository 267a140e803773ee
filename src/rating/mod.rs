//! Rating lookup and Elo win-probability model
//!
//! This module resolves player ratings from a directory and converts a
//! rating gap into a two-outcome win probability pair.

pub mod probability;
pub mod resolver;

// Re-export commonly used types
pub use probability::{win_probabilities, EloWinModel, WinProbabilities, WinProbabilityModel};
pub use resolver::{resolve, resolve_pair};
