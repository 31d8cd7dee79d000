// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::filter::DateRange;
use crate::mock::MockSizes;
use crate::theme::{Theme, ThemeError, ThemeVariant};

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Finboard", "finboard"));

pub const CONFIG_ENV: &str = "FINBOARD_CONFIG";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not determine platform-specific config dir")]
    NoConfigDir,
    #[error("config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: ThemeVariant,
    /// Full theme JSON; takes precedence over `theme` when set.
    pub theme_file: Option<PathBuf>,
    pub currency: String,
    pub seed: Option<u64>,
    pub transactions: usize,
    pub assets: usize,
    pub goals: usize,
    pub default_range: DateRange,
}

impl Default for Config {
    fn default() -> Self {
        let sizes = MockSizes::default();
        Self {
            theme: ThemeVariant::default(),
            theme_file: None,
            currency: "USD".into(),
            seed: None,
            transactions: sizes.transactions,
            assets: sizes.assets,
            goals: sizes.goals,
            default_range: DateRange::default(),
        }
    }
}

impl Config {
    pub fn mock_sizes(&self) -> MockSizes {
        MockSizes {
            transactions: self.transactions,
            assets: self.assets,
            goals: self.goals,
        }
    }

    pub fn resolve_theme(&self) -> Result<Theme, ThemeError> {
        match &self.theme_file {
            Some(path) => Theme::from_file(path),
            None => Ok(self.theme.theme()),
        }
    }
}

/// `$FINBOARD_CONFIG`, or `config.json` in the platform config dir.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    if let Some(custom) = std::env::var_os(CONFIG_ENV) {
        return Ok(PathBuf::from(custom));
    }
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2).ok_or(ConfigError::NoConfigDir)?;
    Ok(proj.config_dir().join("config.json"))
}

pub fn load() -> Result<Config, ConfigError> {
    load_from(&config_path()?)
}

/// Reads `path`; a missing file yields the defaults.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }
    let data = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

pub fn save_to(path: &Path, config: &Config) -> Result<(), ConfigError> {
    let io_err = |source: std::io::Error| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    let json = serde_json::to_string_pretty(config).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(io_err)
}
