//! Mission configuration.
//!
//! Loaded from `--config <path>` when given, otherwise from
//! `~/.mazerun/config.toml`. Built-in defaults apply when the default
//! file is missing, and to any key a file leaves out.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Mazerun configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    pub search: SearchConfig,
    pub drive: DriveConfig,
    pub radio: RadioConfig,
    pub sensing: SensingConfig,
}

/// When to stop searching and what counts as a wall.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SearchConfig {
    /// Range readings below this are a wall.
    pub wall_threshold_cm: f32,

    /// Field strength magnitude at or above this means the target is here.
    pub magnet_threshold: f32,

    /// Give up after this many cells. Unbounded when absent.
    pub max_cells: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            wall_threshold_cm: 20.0,
            magnet_threshold: 300.0,
            max_cells: None,
        }
    }
}

/// Motion parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct DriveConfig {
    pub turn_speed: u8,
    pub cruise_speed: i16,
    pub cell_length_cm: f32,

    /// Closer than this to a wall, back off before judging it.
    pub too_close_cm: f32,
    pub backoff_cm: f32,
}

impl Default for DriveConfig {
    fn default() -> Self {
        Self {
            turn_speed: 95,
            cruise_speed: 10,
            cell_length_cm: 30.7,
            too_close_cm: 5.0,
            backoff_cm: 3.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RadioConfig {
    /// Both robots must share a group to hear each other.
    pub group: u8,
    pub send_attempts: u32,
}

impl Default for RadioConfig {
    fn default() -> Self {
        Self {
            group: 8,
            send_attempts: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SensingConfig {
    pub read_attempts: u32,
}

impl Default for SensingConfig {
    fn default() -> Self {
        Self { read_attempts: 3 }
    }
}

impl Config {
    /// Load config from an explicit path, or the default location.
    ///
    /// An explicit path must exist. A missing default file yields defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }
        match Self::path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load and validate a config file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// The default config file path: `~/.mazerun/config.toml`.
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".mazerun").join("config.toml"))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("search.wall-threshold-cm", self.search.wall_threshold_cm),
            ("search.magnet-threshold", self.search.magnet_threshold),
            ("drive.cell-length-cm", self.drive.cell_length_cm),
        ];
        for (key, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{key} must be a positive number, got {value}"
                )));
            }
        }
        if !self.drive.too_close_cm.is_finite() || self.drive.too_close_cm < 0.0 {
            return Err(ConfigError::Invalid(
                "drive.too-close-cm must not be negative".to_string(),
            ));
        }
        if self.drive.cruise_speed <= 0 {
            return Err(ConfigError::Invalid(
                "drive.cruise-speed must be positive".to_string(),
            ));
        }
        if self.radio.send_attempts == 0 || self.sensing.read_attempts == 0 {
            return Err(ConfigError::Invalid(
                "attempt counts must be at least 1".to_string(),
            ));
        }
        if self.search.max_cells == Some(0) {
            return Err(ConfigError::Invalid(
                "search.max-cells must be at least 1 when set".to_string(),
            ));
        }
        Ok(())
    }
}
