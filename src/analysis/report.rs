//! Plain-text rendering of an analysis result

use std::fmt;

use crate::analysis::expected_value::{best_value, EvTier};
use crate::types::{AnalysisResult, Side};
use crate::utils::format_signed_percent;

/// Display adapter that lays a result out as a terminal report
pub struct TextReport<'a>(pub &'a AnalysisResult);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.0;

        writeln!(f, "Analysis: {} vs {}", result.player1_name, result.player2_name)?;
        writeln!(f)?;
        writeln!(f, "Elo rating")?;
        writeln!(f, "  {:<28} {:>8.1}", result.player1_name, result.rating1)?;
        writeln!(f, "  {:<28} {:>8.1}", result.player2_name, result.rating2)?;
        writeln!(f)?;
        writeln!(f, "Win probability (Elo)")?;
        writeln!(f, "  {:<28} {:>7.1}%", result.player1_name, result.probability1)?;
        writeln!(f, "  {:<28} {:>7.1}%", result.player2_name, result.probability2)?;
        writeln!(f)?;
        writeln!(f, "Expected value, EV = (Prob x Odd) - 1")?;
        for side in [Side::Player1, Side::Player2] {
            let (ev, probability, odds) = match side {
                Side::Player1 => (result.ev1, result.probability1, result.odds1),
                Side::Player2 => (result.ev2, result.probability2, result.odds2),
            };
            writeln!(
                f,
                "  {} {:<26} {:>9}   EV = ({:.1}% x {:.2}) - 1",
                EvTier::classify(ev).marker(),
                result.name(side),
                format_signed_percent(ev),
                probability,
                odds
            )?;
        }
        writeln!(f)?;
        let best = match best_value(result.ev1, result.ev2) {
            Some(side) => result.name(side),
            None => "no value",
        };
        writeln!(f, "Best value: {}", best)?;
        writeln!(f, "{}", result.recommendation)
    }
}

/// Render a result as a multi-line terminal report
pub fn render_text(result: &AnalysisResult) -> String {
    TextReport(result).to_string()
}
