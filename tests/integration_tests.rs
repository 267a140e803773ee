//! Integration tests for tennis-edge
//!
//! These tests run the full path a caller takes:
//! - Loading the player directory from a ratings CSV
//! - Parsing raw odds and analyzing a matchup
//! - Validation failures, including unresolved players
//! - Rendering and JSON encoding of results

mod fixtures;

use std::io::Write;

use tennis_edge::analysis::{render_text, AnalysisEngine};
use tennis_edge::config::{AppConfig, DataSettings, OutputFormat};
use tennis_edge::directory::display_name;
use tennis_edge::rating::EloWinModel;
use tennis_edge::{analyze, AnalysisRequest, PlayerDirectory, Side, ValidationError, Verdict};

use fixtures::{reference_directory, request, sample_directory, sample_ratings_path};

#[test]
fn test_reference_matchup_end_to_end() {
    let result = analyze(&request("A", 2.00, "B", 2.00), &reference_directory()).unwrap();

    assert!((result.probability1 - 75.97).abs() < 0.005);
    assert!((result.probability2 - 24.03).abs() < 0.005);
    assert!((result.ev1 - 51.95).abs() < 0.005);
    assert!((result.ev2 + 51.95).abs() < 0.005);
    assert_eq!(
        result.verdict,
        Verdict::ValueBet {
            side: Side::Player1,
            ev: result.ev1
        }
    );
    assert!(result.recommendation.contains("Value bet identified on A"));
}

#[test]
fn test_sample_directory_loads_valid_rows_only() {
    let directory = sample_directory();

    // one row has no name and one has no numeric rating
    assert_eq!(directory.len(), 11);
    assert!(directory
        .players()
        .iter()
        .all(|player| !player.name.is_empty()));
    assert_eq!(directory.players()[0].name, "Jannik Sinner");
    assert_eq!(directory.players()[0].rank, Some(1));
}

#[test]
fn test_analyze_against_loaded_directory() {
    let directory = sample_directory();
    let request = AnalysisRequest::from_raw("jannik sinner", "1.30", "Carlos Alcaraz", "3.75").unwrap();
    let result = analyze(&request, directory.players()).unwrap();

    assert_eq!(result.rating1, 2210.4);
    assert_eq!(result.rating2, 2155.9);
    assert!(result.probability1 > 50.0);
    assert!((result.probability1 + result.probability2 - 100.0).abs() < 1e-9);
    assert_eq!(result.player1_name, "jannik sinner");
}

#[test]
fn test_unresolved_player_is_never_a_partial_result() {
    let directory = sample_directory();

    let err = analyze(&request("Jannik Sinner", 1.5, "Rafael Nadal", 2.6), directory.players())
        .unwrap_err();
    assert_eq!(
        err,
        ValidationError::PlayerNotFound {
            names: vec!["Rafael Nadal".to_string()]
        }
    );

    // the row with an unparseable rating never made it into the directory
    let err = analyze(&request("Holger Rune", 1.9, "Roger Federer", 1.9), directory.players())
        .unwrap_err();
    assert_eq!(
        err,
        ValidationError::PlayerNotFound {
            names: vec!["Holger Rune".to_string(), "Roger Federer".to_string()]
        }
    );
}

#[test]
fn test_raw_request_validation() {
    assert!(matches!(
        AnalysisRequest::from_raw("A", "2,10", "B", "1.8"),
        Err(ValidationError::InvalidOdds { .. })
    ));

    let request = AnalysisRequest::from_raw("A", "1.00", "B", "1.8").unwrap();
    assert!(matches!(
        analyze(&request, &reference_directory()),
        Err(ValidationError::InvalidOdds { ref field, .. }) if field == "odds1"
    ));

    // a blank name wins over malformed odds
    assert_eq!(
        AnalysisRequest::from_raw("", "abc", "B", "1.8"),
        Err(ValidationError::MissingField {
            field: "player1".to_string()
        })
    );

    let request = AnalysisRequest::new("", 1.5, "B", 1.8);
    assert_eq!(
        analyze(&request, &reference_directory()),
        Err(ValidationError::MissingField {
            field: "player1".to_string()
        })
    );
}

#[test]
fn test_repeated_analysis_is_bit_identical() {
    let directory = sample_directory();
    let request = request("Casper Ruud", 2.45, "Alex de Minaur", 1.62);

    let first = analyze(&request, directory.players()).unwrap();
    let second = analyze(&request, directory.players()).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.probability1.to_bits(), second.probability1.to_bits());
    assert_eq!(first.ev2.to_bits(), second.ev2.to_bits());
    assert_eq!(directory, sample_directory());
}

#[test]
fn test_engine_with_explicit_model_matches_default() {
    let engine = AnalysisEngine::new(EloWinModel::new());
    let request = request("A", 1.7, "B", 2.4);
    assert_eq!(
        engine.analyze(&request, &reference_directory()),
        analyze(&request, &reference_directory())
    );
}

#[test]
fn test_result_json_shape() {
    let result = analyze(&request("A", 2.0, "B", 2.0), &reference_directory()).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["player1_name"], "A");
    assert_eq!(json["rating2"], 1800.0);
    assert_eq!(json["verdict"]["kind"], "value_bet");
    assert_eq!(json["verdict"]["side"], "player1");
    assert!(json["recommendation"].is_string());
}

#[test]
fn test_text_report_for_loaded_matchup() {
    let directory = sample_directory();
    let result = analyze(
        &request("Taylor Fritz", 1.91, "Casper Ruud", 1.91),
        directory.players(),
    )
    .unwrap();
    let text = render_text(&result);

    assert!(text.contains("Taylor Fritz vs Casper Ruud"));
    assert!(text.contains("1985.0"));
    assert!(text.contains(&result.recommendation));
}

#[test]
fn test_search_loaded_directory() {
    let directory = sample_directory();
    let names: Vec<_> = directory
        .search("alex", 10)
        .into_iter()
        .map(|player| player.name.clone())
        .collect();
    assert_eq!(
        names,
        vec!["Alexander Zverev", "Alex de Minaur", "Alexander Bublik"]
    );
}

#[test]
fn test_analyzed_names_map_back_to_directory_spelling() {
    let directory = sample_directory();
    let result = analyze(
        &request("  casper RUUD", 2.3, "alex de minaur", 1.65),
        directory.players(),
    )
    .unwrap();

    assert_eq!(
        display_name(&result.player1_name, directory.players()),
        Some("Casper Ruud")
    );
    assert_eq!(
        display_name(&result.player2_name, directory.players()),
        Some("Alex de Minaur")
    );
}

#[test]
fn test_config_file_drives_directory_loading() {
    let dir = tempfile::TempDir::new().unwrap();

    let ratings_path = dir.path().join("wta.csv");
    let mut ratings = std::fs::File::create(&ratings_path).unwrap();
    writeln!(ratings, "name,rating").unwrap();
    writeln!(ratings, "Iga Swiatek,2150").unwrap();
    writeln!(ratings, "Aryna Sabalenka,2180").unwrap();

    let config_path = dir.path().join("tennis-edge.toml");
    std::fs::write(
        &config_path,
        format!(
            "[data]\nratings_path = {:?}\nname_column = \"name\"\nrating_column = \"rating\"\n\n[output]\nformat = \"json\"\n",
            ratings_path.display().to_string()
        ),
    )
    .unwrap();

    let config = AppConfig::from_file(&config_path).unwrap();
    assert_eq!(config.output.format, OutputFormat::Json);

    let directory = PlayerDirectory::load(&config.data.ratings_path, &config.data).unwrap();
    let result = analyze(
        &request("Aryna Sabalenka", 1.8, "Iga Swiatek", 2.05),
        directory.players(),
    )
    .unwrap();
    assert!(result.probability1 > result.probability2);
}

#[test]
fn test_default_columns_do_not_match_custom_file() {
    let err = PlayerDirectory::from_reader(
        "name,rating\nIga Swiatek,2150\n".as_bytes(),
        &DataSettings::default(),
    )
    .unwrap_err();
    assert!(err.to_string().contains("'player'"));
    assert!(sample_ratings_path().exists());
}
