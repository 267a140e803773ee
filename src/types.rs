//! Common types shared by the directory, rating and analysis modules

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Player name as submitted or as found in the ratings file
pub type PlayerName = String;

/// A player with a current Elo-style rating
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatedPlayer {
    pub name: PlayerName,
    pub rating: f64,
    /// Ranking position from the source file, display only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ranking_date: Option<NaiveDate>,
}

impl RatedPlayer {
    pub fn new(name: impl Into<PlayerName>, rating: f64) -> Self {
        Self {
            name: name.into(),
            rating,
            rank: None,
            ranking_date: None,
        }
    }
}

/// Which side of the matchup a value refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Player1,
    Player2,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player1 => write!(f, "player1"),
            Side::Player2 => write!(f, "player2"),
        }
    }
}

/// A single matchup submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub player1_name: PlayerName,
    pub player2_name: PlayerName,
    /// Decimal odds offered on player 1
    pub odds1: f64,
    /// Decimal odds offered on player 2
    pub odds2: f64,
}

impl AnalysisRequest {
    pub fn new(
        player1_name: impl Into<PlayerName>,
        odds1: f64,
        player2_name: impl Into<PlayerName>,
        odds2: f64,
    ) -> Self {
        Self {
            player1_name: player1_name.into(),
            player2_name: player2_name.into(),
            odds1,
            odds2,
        }
    }

    /// Build a request from raw form/CLI text, parsing both odds
    ///
    /// Every field must be present before any odds are parsed; blanks are
    /// reported in field order.
    pub fn from_raw(
        player1_name: &str,
        odds1: &str,
        player2_name: &str,
        odds2: &str,
    ) -> Result<Self, ValidationError> {
        let fields = [
            ("player1", player1_name),
            ("player2", player2_name),
            ("odds1", odds1),
            ("odds2", odds2),
        ];
        if let Some((field, _)) = fields.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ValidationError::MissingField {
                field: field.to_string(),
            });
        }

        Ok(Self::new(
            player1_name,
            parse_odds("odds1", odds1)?,
            player2_name,
            parse_odds("odds2", odds2)?,
        ))
    }
}

fn parse_odds(field: &str, raw: &str) -> Result<f64, ValidationError> {
    let trimmed = raw.trim();
    trimmed
        .parse::<f64>()
        .map_err(|_| ValidationError::InvalidOdds {
            field: field.to_string(),
            value: trimmed.to_string(),
        })
}

/// Outcome of the recommendation policy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Verdict {
    /// One side clears the threshold and beats the other side
    ValueBet { side: Side, ev: f64 },
    /// Both sides positive, neither clears the threshold
    BothPositiveBelowThreshold,
    /// Both sides negative
    NoValue,
    /// Everything else: point at the better side with a caution
    Lean { side: Side, ev: f64 },
}

/// Full output of one analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub player1_name: PlayerName,
    pub player2_name: PlayerName,
    pub rating1: f64,
    pub rating2: f64,
    /// Win probability of player 1, in percent
    pub probability1: f64,
    /// Win probability of player 2, in percent
    pub probability2: f64,
    /// Expected value of backing player 1, in percent of stake
    pub ev1: f64,
    /// Expected value of backing player 2, in percent of stake
    pub ev2: f64,
    pub odds1: f64,
    pub odds2: f64,
    pub verdict: Verdict,
    pub recommendation: String,
}

impl AnalysisResult {
    /// Name of the player on the given side
    pub fn name(&self, side: Side) -> &str {
        match side {
            Side::Player1 => &self.player1_name,
            Side::Player2 => &self.player2_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_parses_trimmed_odds() {
        let request = AnalysisRequest::from_raw("A", " 1.85 ", "B", "2.10").unwrap();
        assert_eq!(request.odds1, 1.85);
        assert_eq!(request.odds2, 2.10);
        assert_eq!(request.player1_name, "A");
    }

    #[test]
    fn test_from_raw_rejects_non_numeric_odds() {
        let err = AnalysisRequest::from_raw("A", "1.85", "B", "evens").unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidOdds {
                field: "odds2".to_string(),
                value: "evens".to_string()
            }
        );
    }

    #[test]
    fn test_from_raw_blank_odds_is_missing_field() {
        let err = AnalysisRequest::from_raw("A", "  ", "B", "2.0").unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingField {
                field: "odds1".to_string()
            }
        );
    }

    #[test]
    fn test_from_raw_blank_fields_reported_before_bad_odds() {
        let err = AnalysisRequest::from_raw("", "abc", "B", "2.0").unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingField {
                field: "player1".to_string()
            }
        );

        let err = AnalysisRequest::from_raw("A", "abc", "B", "").unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingField {
                field: "odds2".to_string()
            }
        );

        let err = AnalysisRequest::from_raw("A", "", " ", "2.0").unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingField {
                field: "player2".to_string()
            }
        );
    }

    #[test]
    fn test_verdict_serializes_with_kind_tag() {
        let verdict = Verdict::ValueBet {
            side: Side::Player2,
            ev: 7.5,
        };
        let json = serde_json::to_value(verdict).unwrap();
        assert_eq!(json["kind"], "value_bet");
        assert_eq!(json["side"], "player2");
    }
}
