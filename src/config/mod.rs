//! Config module - where the database lives
//!
//! Manages the groceries config file, a small TOML document with a single
//! `[General]` section:
//!
//! ```toml
//! [General]
//! database = "/home/alice/.alice_groceries.json"
//! ```
//!
//! # Example
//!
//! ```no_run
//! use groceries::{config, paths};
//!
//! let config_path = paths::config_path();
//! config::init_app(&config_path, &paths::default_database_path())?;
//! let db_path = config::database_path(&config_path)?;
//! println!("Database: {}", db_path.display());
//! # Ok::<(), anyhow::Error>(())
//! ```

mod internal;

use anyhow::Result;
use std::path::{Path, PathBuf};

pub use internal::{AppConfig, GeneralSection};

/// Write a fresh config file pointing at `db_path`.
///
/// Creates the config directory if it doesn't exist.
pub fn init_app(config_path: &Path, db_path: &Path) -> Result<()> {
    internal::save(config_path, &AppConfig::with_database(db_path))
}

/// Load the config file. Errors if it is missing or malformed.
pub fn load(config_path: &Path) -> Result<AppConfig> {
    internal::load(config_path)
}

/// The database path recorded under `[General] database`.
pub fn database_path(config_path: &Path) -> Result<PathBuf> {
    Ok(load(config_path)?.general.database)
}
