//! Commands shared by the grocery and recipe banks: resolving the database
//! from config, removing by id and clearing.

use anyhow::Result;
use std::path::Path;

use groceries::{config, ItemController, Outcome, Record};

use super::{print_error, print_success, prompt, EXIT_FAILURE};

/// User-facing words for one bank.
#[derive(Debug, Clone, Copy)]
pub struct Labels {
    /// "grocery"
    pub singular: &'static str,
    /// "groceries"
    pub plural: &'static str,
    /// "GROCERY_ID"
    pub id_name: &'static str,
}

pub const GROCERY: Labels = Labels {
    singular: "grocery",
    plural: "groceries",
    id_name: "GROCERY_ID",
};

pub const RECIPE: Labels = Labels {
    singular: "recipe",
    plural: "recipes",
    id_name: "RECIPE_ID",
};

/// Build a controller for the configured database.
///
/// Prints the reason and returns `None` when the config file or the
/// database is missing.
pub fn controller<R: Record>(config_path: &Path) -> Result<Option<ItemController<R>>> {
    if !config_path.exists() {
        print_error("Config file not found. Please run \"groceries init\"");
        return Ok(None);
    }

    let db_path = config::database_path(config_path)?;
    if !db_path.exists() {
        print_error("Database not found. Please run \"groceries init\"");
        return Ok(None);
    }

    Ok(Some(ItemController::new(db_path)))
}

pub fn remove<R: Record>(
    controller: &ItemController<R>,
    labels: Labels,
    id: usize,
    force: bool,
) -> Result<i32> {
    if !force {
        let Some(record) = controller.get(id) else {
            print_error(&format!("Invalid {}", labels.id_name));
            return Ok(EXIT_FAILURE);
        };
        let question = format!("Delete {} # {}: {}?", labels.singular, id, record.name());
        if !prompt::confirm(&question)? {
            println!("Operation canceled");
            return Ok(0);
        }
    }

    match controller.remove(id) {
        Outcome::Success(record) => {
            print_success(&format!(
                "{} # {}: '{}' was removed",
                labels.singular,
                id,
                record.name()
            ));
            Ok(0)
        }
        Outcome::Failure { kind, .. } => {
            print_error(&format!(
                "Removing {} item # {} failed with \"{}\"",
                labels.singular, id, kind
            ));
            Ok(EXIT_FAILURE)
        }
    }
}

pub fn clear<R: Record>(controller: &ItemController<R>, labels: Labels, force: bool) -> Result<i32> {
    let question = format!("Delete all {} items?", labels.singular);
    if !force && !prompt::confirm(&question)? {
        println!("Operation canceled");
        return Ok(0);
    }

    match controller.clear() {
        Outcome::Success(()) => {
            print_success(&format!("All {} items were removed.", labels.singular));
            Ok(0)
        }
        Outcome::Failure { kind, .. } => {
            print_error(&format!(
                "Removing {} items failed with \"{}\"",
                labels.singular, kind
            ));
            Ok(EXIT_FAILURE)
        }
    }
}

/// Report the outcome of an add. `detail` is appended to the success line.
pub fn report_add<R: Record>(outcome: Outcome<R>, labels: Labels, detail: &str) -> i32 {
    match outcome {
        Outcome::Success(record) => {
            print_success(&format!(
                "{}: \"{}\" was added{}",
                labels.singular,
                record.name(),
                detail
            ));
            0
        }
        Outcome::Failure { kind, .. } => {
            print_error(&format!(
                "Adding {} item failed with \"{}\"",
                labels.singular, kind
            ));
            EXIT_FAILURE
        }
    }
}

/// Message shown by `list` on an empty bank.
pub fn empty_message(labels: Labels) -> String {
    format!("There are no {} in the bank yet", labels.plural)
}

#[cfg(test)]
mod tests {
    use super::*;
    use groceries::database::init_database;
    use groceries::{Category, GroceryController, GroceryItem};
    use tempfile::TempDir;

    fn store_with_egg() -> (TempDir, GroceryController) {
        let tmp = TempDir::new().unwrap();
        let db_path = tmp.path().join("groceries.json");
        init_database(&db_path);
        let gc = GroceryController::new(&db_path);
        gc.add(GroceryItem::new(&["egg"], Category::Dairy));
        (tmp, gc)
    }

    #[test]
    fn test_controller_without_config() {
        let tmp = TempDir::new().unwrap();
        let result = controller::<GroceryItem>(&tmp.path().join("config.toml")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_controller_without_database() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        config::init_app(&config_path, &tmp.path().join("absent.json")).unwrap();

        assert!(controller::<GroceryItem>(&config_path).unwrap().is_none());
    }

    #[test]
    fn test_controller_with_database() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        let db_path = tmp.path().join("groceries.json");
        config::init_app(&config_path, &db_path).unwrap();
        init_database(&db_path);

        let gc = controller::<GroceryItem>(&config_path).unwrap().unwrap();
        assert_eq!(gc.database().path(), db_path.as_path());
    }

    #[test]
    fn test_forced_remove_and_clear_exit_codes() {
        let (_tmp, gc) = store_with_egg();
        assert_eq!(remove(&gc, GROCERY, 2, true).unwrap(), EXIT_FAILURE);
        assert_eq!(remove(&gc, GROCERY, 1, true).unwrap(), 0);
        assert!(gc.list().is_empty());
        assert_eq!(clear(&gc, GROCERY, true).unwrap(), 0);
    }

    #[test]
    fn test_unforced_remove_with_bad_id_fails_before_prompting() {
        let (_tmp, gc) = store_with_egg();
        assert_eq!(remove(&gc, GROCERY, 0, false).unwrap(), EXIT_FAILURE);
        assert_eq!(gc.list().len(), 1);
    }

    #[test]
    fn test_report_add_duplicate() {
        let (_tmp, gc) = store_with_egg();
        let outcome = gc.add(GroceryItem::new(&["egg"], Category::Dairy));
        assert_eq!(report_add(outcome, GROCERY, ""), EXIT_FAILURE);
    }

    #[test]
    fn test_empty_message() {
        assert_eq!(empty_message(GROCERY), "There are no groceries in the bank yet");
        assert_eq!(empty_message(RECIPE), "There are no recipes in the bank yet");
    }
}
