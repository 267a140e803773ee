//! Command-line entry point for tennis-edge
//!
//! Loads the ratings directory and runs a single analysis or search per
//! invocation. Logs go to stderr so stdout can be piped.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tennis_edge::config::{AppConfig, OutputFormat};
use tennis_edge::directory::display_name;
use tennis_edge::{analyze, render_text, AnalysisRequest, PlayerDirectory};
use tracing::{debug, info};

/// Tennis Edge - compare bookmaker odds against Elo win probabilities
#[derive(Parser)]
#[command(
    name = "tennis-edge",
    version,
    about = "Expected value analysis for tennis match odds using Elo ratings",
    long_about = "Tennis Edge converts the Elo rating gap between two players into win \
                 probabilities, compares them with the decimal odds on offer, and reports the \
                 expected value of backing each side along with a recommendation."
)]
struct Args {
    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// Ratings file override
    #[arg(short, long, value_name = "FILE", help = "Override ratings CSV path")]
    ratings: Option<PathBuf>,

    /// Output format override
    #[arg(short, long, value_name = "FORMAT", help = "Output format (text or json)")]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze a matchup: PLAYER1 ODDS1 PLAYER2 ODDS2
    Analyze {
        player1: String,
        #[arg(allow_negative_numbers = true)]
        odds1: String,
        player2: String,
        #[arg(allow_negative_numbers = true)]
        odds2: String,
    },
    /// Search the ratings directory by name
    Search {
        query: String,
        #[arg(long, help = "Maximum number of players to list")]
        limit: Option<usize>,
    },
    /// Validate configuration and ratings file, then exit
    Check,
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load and merge configuration from file/environment and CLI arguments
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = match &args.config {
        Some(config_path) => AppConfig::from_file(config_path)?,
        None => AppConfig::from_env()?,
    };

    // Apply CLI overrides
    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }
    if let Some(ratings) = &args.ratings {
        config.data.ratings_path = ratings.clone();
    }
    if let Some(format) = args.format {
        config.output.format = format;
    }

    tennis_edge::config::validate_config(&config)?;
    Ok(config)
}

fn load_directory(config: &AppConfig) -> Result<PlayerDirectory> {
    PlayerDirectory::load(&config.data.ratings_path, &config.data)
}

fn run_analyze(
    config: &AppConfig,
    player1: &str,
    odds1: &str,
    player2: &str,
    odds2: &str,
) -> Result<bool> {
    let directory = load_directory(config)?;

    let outcome = AnalysisRequest::from_raw(player1, odds1, player2, odds2)
        .and_then(|request| analyze(&request, directory.players()));

    match outcome {
        Ok(result) => {
            let matched1 = display_name(&result.player1_name, directory.players())
                .unwrap_or(result.player1_name.as_str());
            let matched2 = display_name(&result.player2_name, directory.players())
                .unwrap_or(result.player2_name.as_str());
            info!(
                player1 = matched1,
                player2 = matched2,
                "Analysis complete"
            );
            match config.output.format {
                OutputFormat::Text => {
                    println!("Matched: {} / {}", matched1, matched2);
                    print!("{}", render_text(&result));
                }
                OutputFormat::Json => println!(
                    "{}",
                    serde_json::to_string_pretty(&result).context("Failed to encode result")?
                ),
            }
            Ok(true)
        }
        Err(e) => {
            match config.output.format {
                OutputFormat::Text => eprintln!("Error: {}", e),
                OutputFormat::Json => println!(
                    "{}",
                    serde_json::json!({ "error": e.kind(), "message": e.to_string() })
                ),
            }
            Ok(false)
        }
    }
}

fn run_search(config: &AppConfig, query: &str, limit: Option<usize>) -> Result<bool> {
    let directory = load_directory(config)?;
    let limit = limit.unwrap_or(config.output.search_limit);
    let matches = directory.search(query, limit);
    debug!(query, found = matches.len(), "Search complete");

    match config.output.format {
        OutputFormat::Text => {
            if matches.is_empty() {
                println!("No players found.");
            }
            for player in &matches {
                println!("{:<32} {:>8.1}", player.name, player.rating);
            }
        }
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&matches).context("Failed to encode search results")?
        ),
    }
    Ok(!matches.is_empty())
}

fn run_check(config: &AppConfig) -> Result<bool> {
    let directory = load_directory(config)?;
    println!(
        "Configuration OK: {} players loaded from {}",
        directory.len(),
        config.data.ratings_path.display()
    );
    Ok(!directory.is_empty())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {:#}", e);
        std::process::exit(2);
    });

    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(2);
    }
    debug!(service = %config.service.name, version = tennis_edge::VERSION, "Starting");

    let outcome = match &args.command {
        Command::Analyze {
            player1,
            odds1,
            player2,
            odds2,
        } => run_analyze(&config, player1, odds1, player2, odds2),
        Command::Search { query, limit } => run_search(&config, query, *limit),
        Command::Check => run_check(&config),
    };

    match outcome {
        Ok(true) => Ok(()),
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(2);
        }
    }
}
