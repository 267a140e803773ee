//! Small helpers shared across modules

/// Canonical form used for name comparison: trimmed and lower-cased
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Format a percentage with an explicit `+` for positive values
pub fn format_signed_percent(value: f64) -> String {
    if value > 0.0 {
        format!("+{:.2}%", value)
    } else {
        format!("{:.2}%", value)
    }
}

/// Absolute difference between two ratings
pub fn rating_difference(rating1: f64, rating2: f64) -> f64 {
    (rating1 - rating2).abs()
}
