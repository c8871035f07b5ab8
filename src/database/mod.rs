//! Database module - the JSON document behind both banks
//!
//! The database is one UTF-8 JSON object holding two named collections:
//!
//! ```json
//! {
//!     "grocery bank": [ { "Name": "milk", "Category": "dairy" } ],
//!     "recipe bank": [ { "Name": "white chicken chili", "Link": "https://..." } ]
//! }
//! ```
//!
//! Every read opens and parses the whole file; every write reloads it,
//! replaces one collection and rewrites the whole document. There is no
//! locking: two processes writing the same file can lose updates.
//!
//! Failures come back as [`Outcome`](crate::Outcome) values, never panics.

mod internal;

pub use internal::{init_database, Bank, DatabaseHandler, Store};
