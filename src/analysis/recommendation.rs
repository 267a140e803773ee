//! Recommendation policy over a pair of expected values
//!
//! Rules are evaluated in a fixed order and the first match wins. The
//! conditions overlap (an EV above the threshold is also positive), so the
//! order is part of the contract.

use crate::types::{Side, Verdict};

/// Minimum EV, in percentage points, for a value bet. Strictly exceeded.
pub const VALUE_THRESHOLD: f64 = 5.0;

/// Classify an EV pair
pub fn classify(ev1: f64, ev2: f64) -> Verdict {
    if ev1 > VALUE_THRESHOLD && ev1 > ev2 {
        Verdict::ValueBet {
            side: Side::Player1,
            ev: ev1,
        }
    } else if ev2 > VALUE_THRESHOLD && ev2 > ev1 {
        Verdict::ValueBet {
            side: Side::Player2,
            ev: ev2,
        }
    } else if ev1 > 0.0 && ev2 > 0.0 {
        Verdict::BothPositiveBelowThreshold
    } else if ev1 < 0.0 && ev2 < 0.0 {
        Verdict::NoValue
    } else if ev2 > ev1 {
        Verdict::Lean {
            side: Side::Player2,
            ev: ev2,
        }
    } else {
        // ties lean to player 1
        Verdict::Lean {
            side: Side::Player1,
            ev: ev1,
        }
    }
}

/// Render a verdict as user-facing text
pub fn describe(verdict: &Verdict, name1: &str, name2: &str) -> String {
    let name = |side: &Side| match side {
        Side::Player1 => name1,
        Side::Player2 => name2,
    };

    match verdict {
        Verdict::ValueBet { side, ev } => format!(
            "✓ Value bet identified on {}. An expected value of {:.2}% means the offered odds \
             are favourable relative to the Elo-implied win probability.",
            name(side),
            ev
        ),
        Verdict::BothPositiveBelowThreshold => format!(
            "Both players show positive EV, but below the recommended threshold ({}%). \
             Proceed cautiously or wait for better odds.",
            VALUE_THRESHOLD
        ),
        Verdict::NoValue => "✗ No value bet identified. Both players show negative expected \
                             value, so the odds are unfavourable relative to the Elo-implied \
                             probabilities."
            .to_string(),
        Verdict::Lean { side, ev } => format!(
            "{} has the better EV ({:.2}%), but it is below the ideal threshold for a \
             high-value bet. Consider cautiously.",
            name(side),
            ev
        ),
    }
}

/// Classify an EV pair and render the recommendation text
pub fn recommend(ev1: f64, ev2: f64, name1: &str, name2: &str) -> String {
    describe(&classify(ev1, ev2), name1, name2)
}
