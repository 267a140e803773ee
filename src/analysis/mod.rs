//! Odds analysis: expected value, recommendation policy and the engine
//! that ties them to the rating model.

pub mod engine;
pub mod expected_value;
pub mod recommendation;
pub mod report;

// Re-export commonly used types
pub use engine::{analyze, AnalysisEngine};
pub use expected_value::{best_value, expected_value, EvTier};
pub use recommendation::{recommend, VALUE_THRESHOLD};
pub use report::{render_text, TextReport};
