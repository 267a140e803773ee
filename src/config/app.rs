//! Main application configuration
//!
//! Settings resolve in layers: built-in defaults, an optional TOML file,
//! then environment variables. CLI flags are applied on top by the binary.

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub data: DataSettings,
    pub output: OutputSettings,
}

/// Service-level settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Service name for logging
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

/// Where the player directory comes from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSettings {
    /// Ratings CSV file
    pub ratings_path: PathBuf,
    /// Header of the player name column
    pub name_column: String,
    /// Header of the rating column
    pub rating_column: String,
}

/// How results are printed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub format: OutputFormat,
    /// Maximum number of players listed by a search
    pub search_limit: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(anyhow!("Invalid output format: {} (expected text or json)", other)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "tennis-edge".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            ratings_path: PathBuf::from("atp_ratings_current.csv"),
            name_column: "player".to_string(),
            rating_column: "elo".to_string(),
        }
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            search_limit: 10,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file, then apply environment overrides
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let mut config = Self::from_toml_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.apply_env()?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Parse configuration from TOML text; missing keys keep their defaults
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    fn apply_env(&mut self) -> Result<()> {
        if let Ok(name) = env::var("TENNIS_EDGE_SERVICE_NAME") {
            self.service.name = name;
        }
        if let Ok(log_level) = env::var("TENNIS_EDGE_LOG_LEVEL") {
            self.service.log_level = log_level;
        }
        if let Ok(path) = env::var("TENNIS_EDGE_RATINGS_PATH") {
            self.data.ratings_path = PathBuf::from(path);
        }
        if let Ok(column) = env::var("TENNIS_EDGE_NAME_COLUMN") {
            self.data.name_column = column;
        }
        if let Ok(column) = env::var("TENNIS_EDGE_RATING_COLUMN") {
            self.data.rating_column = column;
        }
        if let Ok(format) = env::var("TENNIS_EDGE_OUTPUT_FORMAT") {
            self.output.format = format
                .parse()
                .map_err(|_| anyhow!("Invalid TENNIS_EDGE_OUTPUT_FORMAT value: {}", format))?;
        }
        if let Ok(limit) = env::var("TENNIS_EDGE_SEARCH_LIMIT") {
            self.output.search_limit = limit
                .parse()
                .map_err(|_| anyhow!("Invalid TENNIS_EDGE_SEARCH_LIMIT value: {}", limit))?;
        }
        Ok(())
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    // Validate log level
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.service.log_level)),
    }

    if config.service.name.trim().is_empty() {
        return Err(anyhow!("Service name cannot be empty"));
    }

    // Validate data settings
    if config.data.ratings_path.as_os_str().is_empty() {
        return Err(anyhow!("Ratings path cannot be empty"));
    }
    if config.data.name_column.trim().is_empty() {
        return Err(anyhow!("Name column cannot be empty"));
    }
    if config.data.rating_column.trim().is_empty() {
        return Err(anyhow!("Rating column cannot be empty"));
    }

    if config.output.search_limit == 0 {
        return Err(anyhow!("Search limit must be greater than 0"));
    }

    Ok(())
}
