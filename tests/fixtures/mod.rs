//! Shared test fixtures: sample directories and request builders

#![allow(dead_code)]

use std::path::PathBuf;

use tennis_edge::config::DataSettings;
use tennis_edge::{AnalysisRequest, PlayerDirectory, RatedPlayer};

/// Path of the sample ratings CSV shipped with the tests
pub fn sample_ratings_path() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push("atp_ratings_sample.csv");
    path
}

/// Sample directory loaded through the real CSV loader
pub fn sample_directory() -> PlayerDirectory {
    PlayerDirectory::load(sample_ratings_path(), &DataSettings::default())
        .expect("sample ratings should load")
}

/// Two-player directory used by the reference matchup
pub fn reference_directory() -> Vec<RatedPlayer> {
    vec![
        RatedPlayer::new("A", 2000.0),
        RatedPlayer::new("B", 1800.0),
    ]
}

pub fn request(player1: &str, odds1: f64, player2: &str, odds2: f64) -> AnalysisRequest {
    AnalysisRequest::new(player1, odds1, player2, odds2)
}
