//! Configuration management for tennis-edge
//!
//! This module handles configuration loading from TOML files and environment
//! variables, validation, and default values.

pub mod app;

// Re-export commonly used types
pub use app::{
    validate_config, AppConfig, DataSettings, OutputFormat, OutputSettings, ServiceSettings,
};
