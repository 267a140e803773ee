//! Win-probability model trait and the Elo implementation
//!
//! Probabilities are expressed in percent. Tennis has no draws, so the two
//! sides always sum to exactly 100.

use serde::{Deserialize, Serialize};
use skillratings::elo::{expected_score, EloRating};

/// Win probabilities for both sides of a matchup, in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WinProbabilities {
    pub player1: f64,
    pub player2: f64,
}

impl WinProbabilities {
    /// Build a pair from player 1's percentage; player 2 takes the remainder
    pub fn from_player1(player1: f64) -> Self {
        Self {
            player1,
            player2: 100.0 - player1,
        }
    }
}

/// Trait for converting two ratings into win probabilities
pub trait WinProbabilityModel: Send + Sync {
    /// Probability of each player winning, given their current ratings
    fn win_probabilities(&self, rating1: f64, rating2: f64) -> WinProbabilities;

    /// Get current configuration as JSON
    fn config(&self) -> serde_json::Value;
}

/// Logistic Elo expected-score model (base 10, scale 400)
#[derive(Debug, Clone, Copy, Default)]
pub struct EloWinModel;

impl EloWinModel {
    pub fn new() -> Self {
        Self
    }
}

impl WinProbabilityModel for EloWinModel {
    fn win_probabilities(&self, rating1: f64, rating2: f64) -> WinProbabilities {
        let (expected1, _) = expected_score(
            &EloRating { rating: rating1 },
            &EloRating { rating: rating2 },
        );
        WinProbabilities::from_player1(expected1 * 100.0)
    }

    fn config(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "elo",
            "base": 10,
            "scale": 400
        })
    }
}

/// Win probabilities under the default Elo model
pub fn win_probabilities(rating1: f64, rating2: f64) -> WinProbabilities {
    EloWinModel.win_probabilities(rating1, rating2)
}
