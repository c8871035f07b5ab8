use anyhow::Result;
use colored::*;
use std::path::Path;

use groceries::Recipe;

use super::bank::{self, RECIPE};
use super::{print_table, render, EXIT_FAILURE};

pub fn add(config_path: &Path, name: &[String], link: &str) -> Result<i32> {
    let Some(rc) = bank::controller::<Recipe>(config_path)? else {
        return Ok(EXIT_FAILURE);
    };
    let outcome = rc.add(Recipe::new(name, link));
    Ok(bank::report_add(outcome, RECIPE, &format!(" with link: {link}")))
}

pub fn remove(config_path: &Path, id: usize, force: bool) -> Result<i32> {
    let Some(rc) = bank::controller::<Recipe>(config_path)? else {
        return Ok(EXIT_FAILURE);
    };
    bank::remove(&rc, RECIPE, id, force)
}

pub fn clear(config_path: &Path, force: bool) -> Result<i32> {
    let Some(rc) = bank::controller::<Recipe>(config_path)? else {
        return Ok(EXIT_FAILURE);
    };
    bank::clear(&rc, RECIPE, force)
}

pub fn list(config_path: &Path) -> Result<i32> {
    let Some(rc) = bank::controller::<Recipe>(config_path)? else {
        return Ok(EXIT_FAILURE);
    };

    let recipes = rc.list();
    if recipes.is_empty() {
        println!("{}", bank::empty_message(RECIPE).red());
        return Ok(0);
    }

    print_table("recipe bank", &render::recipe_table(&recipes));
    Ok(0)
}
