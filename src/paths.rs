//! Filesystem layout for groceries.
//!
//! This module defines WHERE data lives. It has no I/O and no validation.
//!
//! ```text
//! ~/.config/groceries/
//! └── config.toml                 # [General] database = "..."
//!
//! ~/.<user>_groceries.json        # default database location
//! ```
//!
//! Both locations are only defaults: `groceries init --db-path` picks the
//! database file and `--config` picks the config file.

use std::path::{Path, PathBuf};

/// Application name, used for the config directory.
pub const APP_NAME: &str = "groceries";

/// Config file name inside [`config_dir`].
pub const CONFIG_FILE_NAME: &str = "config.toml";

// =============================================================================
// Config
// =============================================================================

/// Per-user config directory: `~/.config/groceries/` on Linux.
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Default config file: `~/.config/groceries/config.toml`
pub fn config_path() -> PathBuf {
    config_dir().join(CONFIG_FILE_NAME)
}

// =============================================================================
// Database
// =============================================================================

/// Default database file: `~/.<home-dir-name>_groceries.json`
pub fn default_database_path() -> PathBuf {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    database_path_in(&home)
}

/// Database file named after `home`'s last component, placed inside it.
pub fn database_path_in(home: &Path) -> PathBuf {
    let stem = home
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or(APP_NAME);
    home.join(format!(".{stem}_groceries.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path() {
        let path = config_path();
        assert!(path.ends_with("groceries/config.toml"));
        assert!(path.starts_with(config_dir()));
    }

    #[test]
    fn test_database_path_in_home() {
        assert_eq!(
            database_path_in(Path::new("/home/alice")),
            PathBuf::from("/home/alice/.alice_groceries.json")
        );
    }

    #[test]
    fn test_database_path_without_name() {
        assert_eq!(
            database_path_in(Path::new("/")),
            PathBuf::from("/.groceries_groceries.json")
        );
    }
}
