//! Error types for the odds analysis engine
//!
//! Validation failures from `analyze` are typed so callers can present them
//! per field. Everything around the engine (config, ratings file loading,
//! the CLI) uses anyhow for context-rich errors.

/// Result type alias for application-layer code
pub type Result<T> = anyhow::Result<T>;

/// Reasons a request is rejected before any result is produced
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("missing field: {field}")]
    MissingField { field: String },

    #[error("invalid odds for {field}: {value} (decimal odds must be greater than 1.00)")]
    InvalidOdds { field: String, value: String },

    #[error("player(s) not found: {}", names.join(", "))]
    PlayerNotFound { names: Vec<String> },
}

impl ValidationError {
    /// Short machine-readable kind, stable across message changes
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::MissingField { .. } => "missing_field",
            ValidationError::InvalidOdds { .. } => "invalid_odds",
            ValidationError::PlayerNotFound { .. } => "player_not_found",
        }
    }
}
