//! Configuration module
//!
//! Handles loading and saving diagtap configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::gsmtap::GsmtapVersion;
use crate::protocol::{Decoder, DEFAULT_MAX_FRAME_SIZE};

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Config file not found: {0}")]
    NotFound(PathBuf),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General settings
    #[serde(default)]
    pub general: GeneralConfig,

    /// Frame codec settings
    #[serde(default)]
    pub framing: FramingConfig,

    /// Capture header defaults
    #[serde(default)]
    pub gsmtap: GsmtapConfig,
}

/// General configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Enable verbose logging
    #[serde(default)]
    pub verbose: bool,
    /// `tracing` filter directive, overrides `verbose` (e.g. "diagtap=trace")
    pub log_filter: Option<String>,
}

/// Frame codec configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FramingConfig {
    /// Largest unterminated frame the stream decoder buffers
    #[serde(default = "default_max_frame_size")]
    pub max_frame_size: usize,
}

fn default_max_frame_size() -> usize {
    DEFAULT_MAX_FRAME_SIZE
}

impl Default for FramingConfig {
    fn default() -> Self {
        Self {
            max_frame_size: default_max_frame_size(),
        }
    }
}

impl FramingConfig {
    pub fn decoder(&self) -> Decoder {
        Decoder::with_max_frame_size(self.max_frame_size)
    }
}

/// GSMTAP header defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GsmtapConfig {
    /// Header version (2 or 3)
    #[serde(default)]
    pub version: GsmtapVersion,
    /// Antenna number written into every header
    #[serde(default)]
    pub antenna_nr: u8,
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load configuration from the default location
    pub fn load_default() -> ConfigResult<Self> {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("diagtap/config.toml")),
            Some(PathBuf::from("./diagtap.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                return Self::load(path);
            }
        }

        // Return default config if no file found
        Ok(Self::default())
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> ConfigResult<()> {
        let contents = toml::to_string_pretty(self)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Filter directive for the tracing subscriber
    pub fn log_filter(&self, verbose: bool) -> String {
        match &self.general.log_filter {
            Some(filter) => filter.clone(),
            None if verbose || self.general.verbose => "debug".to_string(),
            None => "info".to_string(),
        }
    }
}

/// Generate a sample configuration file
pub fn generate_sample_config() -> ConfigResult<String> {
    let config = Config {
        general: GeneralConfig {
            verbose: false,
            log_filter: Some("diagtap=debug".to_string()),
        },
        gsmtap: GsmtapConfig {
            version: GsmtapVersion::V3,
            antenna_nr: 0,
        },
        ..Default::default()
    };

    Ok(toml::to_string_pretty(&config)?)
}
