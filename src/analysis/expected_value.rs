//! Expected value of a decimal-odds bet

use serde::{Deserialize, Serialize};

use crate::analysis::recommendation::VALUE_THRESHOLD;
use crate::types::Side;

/// Expected value of a unit stake, in percent
///
/// `probability_percent` is the modelled win probability (0-100) and
/// `decimal_odds` the total payout multiple including the stake. Odds are
/// validated by the caller.
pub fn expected_value(probability_percent: f64, decimal_odds: f64) -> f64 {
    ((probability_percent / 100.0) * decimal_odds - 1.0) * 100.0
}

/// Coarse bucket for a single EV figure, used when presenting results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvTier {
    /// Above the value threshold
    Strong,
    Positive,
    /// Slightly negative, within five points of breakeven
    Neutral,
    Negative,
}

impl EvTier {
    pub fn classify(ev: f64) -> Self {
        if ev > VALUE_THRESHOLD {
            EvTier::Strong
        } else if ev > 0.0 {
            EvTier::Positive
        } else if ev > -VALUE_THRESHOLD {
            EvTier::Neutral
        } else {
            EvTier::Negative
        }
    }

    /// Single-character marker for terminal output
    pub fn marker(&self) -> &'static str {
        match self {
            EvTier::Strong => "▲",
            EvTier::Positive => "△",
            EvTier::Neutral => "–",
            EvTier::Negative => "▼",
        }
    }
}

/// Side with the strictly larger EV, or `None` on a tie
pub fn best_value(ev1: f64, ev2: f64) -> Option<Side> {
    if ev1 > ev2 {
        Some(Side::Player1)
    } else if ev2 > ev1 {
        Some(Side::Player2)
    } else {
        None
    }
}
