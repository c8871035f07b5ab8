//! Internal implementation for config module
//!
//! Handles the `[General]` TOML config file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Contents of the groceries config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(rename = "General")]
    pub general: GeneralSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralSection {
    /// Location of the JSON database file
    pub database: PathBuf,
}

impl AppConfig {
    pub fn with_database(path: impl Into<PathBuf>) -> Self {
        Self {
            general: GeneralSection {
                database: path.into(),
            },
        }
    }
}

pub fn load(path: &Path) -> Result<AppConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;

    toml::from_str(&contents).with_context(|| format!("Failed to parse config: {}", path.display()))
}

pub fn save(path: &Path, config: &AppConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
    }

    let contents = toml::to_string_pretty(config)?;
    fs::write(path, contents)
        .with_context(|| format!("Failed to write config: {}", path.display()))?;
    tracing::debug!(path = %path.display(), "config written");
    Ok(())
}
