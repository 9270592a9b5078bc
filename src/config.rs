//! Application configuration loaded from environment variables.
//!
//! Every knob has a default so an embedding app can start with no
//! environment at all.

use std::env;
use std::path::PathBuf;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory where the file-backed blob store keeps its snapshots
    pub data_dir: PathBuf,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let data_dir = match env::var("POWDER_DATA_DIR") {
            Ok(value) if value.trim().is_empty() => {
                return Err(ConfigError::Invalid("POWDER_DATA_DIR"));
            }
            Ok(value) => PathBuf::from(value),
            Err(_) => PathBuf::from("data"),
        };

        Ok(Self { data_dir })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}
