//! # Config Error Types
//!
//! Errors raised while loading, validating or saving the menu config.

use concession_core::CoreError;
use thiserror::Error;

/// Result type alias for config operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Menu configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read or write the config file.
    #[error("Config file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML or has the wrong shape.
    #[error("Failed to parse menu config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config could not be written as TOML.
    #[error("Failed to serialize menu config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// An environment override could not be parsed.
    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },

    /// No path given and no platform config directory available.
    #[error("No menu config path available")]
    NoConfigPath,

    /// Unknown menu name or out-of-range price.
    #[error("Invalid menu: {0}")]
    Menu(#[from] CoreError),
}
