use anyhow::Result;
use colored::*;
use std::path::Path;

use groceries::{Category, GroceryItem};

use super::bank::{self, GROCERY};
use super::{print_table, render, EXIT_FAILURE};

pub fn add(config_path: &Path, name: &[String], category: Category) -> Result<i32> {
    let Some(gc) = bank::controller::<GroceryItem>(config_path)? else {
        return Ok(EXIT_FAILURE);
    };
    let outcome = gc.add(GroceryItem::new(name, category));
    Ok(bank::report_add(
        outcome,
        GROCERY,
        &format!(" with category: {category}"),
    ))
}

pub fn remove(config_path: &Path, id: usize, force: bool) -> Result<i32> {
    let Some(gc) = bank::controller::<GroceryItem>(config_path)? else {
        return Ok(EXIT_FAILURE);
    };
    bank::remove(&gc, GROCERY, id, force)
}

pub fn clear(config_path: &Path, force: bool) -> Result<i32> {
    let Some(gc) = bank::controller::<GroceryItem>(config_path)? else {
        return Ok(EXIT_FAILURE);
    };
    bank::clear(&gc, GROCERY, force)
}

pub fn list(config_path: &Path) -> Result<i32> {
    let Some(gc) = bank::controller::<GroceryItem>(config_path)? else {
        return Ok(EXIT_FAILURE);
    };

    let items = gc.list();
    if items.is_empty() {
        println!("{}", bank::empty_message(GROCERY).red());
        return Ok(0);
    }

    print_table("grocery bank", &render::grocery_table(&items));
    Ok(0)
}
