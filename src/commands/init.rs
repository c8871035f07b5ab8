use anyhow::Result;
use std::path::{Path, PathBuf};

use groceries::database::init_database;
use groceries::{config, paths, Outcome};

use super::{print_error, print_success, prompt, EXIT_FAILURE};

/// Write the config file, then create an empty database.
///
/// Without `--db-path` the user is asked, defaulting to
/// `~/.<user>_groceries.json`.
pub fn execute(config_path: &Path, db_path: Option<PathBuf>) -> Result<i32> {
    let db_path = match db_path {
        Some(path) => path,
        None => {
            let default = paths::default_database_path();
            let answer = prompt::ask_with_default(
                "groceries database location?",
                &default.to_string_lossy(),
            )?;
            PathBuf::from(answer)
        }
    };

    if let Err(e) = config::init_app(config_path, &db_path) {
        print_error(&format!("Creating config file failed with \"{e:#}\""));
        return Ok(EXIT_FAILURE);
    }

    if let Outcome::Failure { kind, .. } = init_database(&db_path) {
        print_error(&format!("Creating database failed with \"{kind}\""));
        return Ok(EXIT_FAILURE);
    }

    print_success(&format!("The groceries database is {}", db_path.display()));
    Ok(0)
}
