pub mod config;
pub mod database;
pub mod grocery;
pub mod item;
pub mod logging;
pub mod outcome;
pub mod paths;
pub mod recipe;

// Re-export commonly used types
pub use grocery::{Category, GroceryController, GroceryItem};
pub use item::{ItemController, Record};
pub use outcome::{ErrorKind, Outcome};
pub use recipe::{Recipe, RecipeController};
