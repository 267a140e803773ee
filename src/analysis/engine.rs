//! Analysis orchestration
//!
//! Validates a request, resolves both ratings, and assembles the result.
//! Pure: the directory is read-only input and nothing is retained between
//! calls.

use tracing::debug;

use crate::analysis::expected_value::expected_value;
use crate::analysis::recommendation::{classify, describe};
use crate::error::ValidationError;
use crate::rating::probability::{EloWinModel, WinProbabilityModel};
use crate::rating::resolver::resolve_pair;
use crate::types::{AnalysisRequest, AnalysisResult, RatedPlayer};
use crate::utils::rating_difference;

/// Odds analysis over a pluggable win-probability model
#[derive(Debug, Clone, Default)]
pub struct AnalysisEngine<M = EloWinModel> {
    model: M,
}

impl<M: WinProbabilityModel> AnalysisEngine<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Run one analysis against `directory`
    pub fn analyze(
        &self,
        request: &AnalysisRequest,
        directory: &[RatedPlayer],
    ) -> Result<AnalysisResult, ValidationError> {
        let player1_name = required_name("player1", &request.player1_name)?;
        let player2_name = required_name("player2", &request.player2_name)?;
        validate_odds("odds1", request.odds1)?;
        validate_odds("odds2", request.odds2)?;

        let (rating1, rating2) = resolve_pair(player1_name, player2_name, directory)?;

        let probs = self.model.win_probabilities(rating1, rating2);
        let ev1 = expected_value(probs.player1, request.odds1);
        let ev2 = expected_value(probs.player2, request.odds2);
        let verdict = classify(ev1, ev2);

        debug!(
            player1 = player1_name,
            player2 = player2_name,
            rating_gap = rating_difference(rating1, rating2),
            ev1,
            ev2,
            "Analysis complete"
        );

        Ok(AnalysisResult {
            player1_name: player1_name.to_string(),
            player2_name: player2_name.to_string(),
            rating1,
            rating2,
            probability1: probs.player1,
            probability2: probs.player2,
            ev1,
            ev2,
            odds1: request.odds1,
            odds2: request.odds2,
            recommendation: describe(&verdict, player1_name, player2_name),
            verdict,
        })
    }
}

/// Analyze a matchup with the default Elo model
pub fn analyze(
    request: &AnalysisRequest,
    directory: &[RatedPlayer],
) -> Result<AnalysisResult, ValidationError> {
    AnalysisEngine::new(EloWinModel).analyze(request, directory)
}

fn required_name<'a>(field: &str, name: &'a str) -> Result<&'a str, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField {
            field: field.to_string(),
        });
    }
    Ok(trimmed)
}

fn validate_odds(field: &str, odds: f64) -> Result<(), ValidationError> {
    if !odds.is_finite() || odds <= 1.0 {
        return Err(ValidationError::InvalidOdds {
            field: field.to_string(),
            value: odds.to_string(),
        });
    }
    Ok(())
}
