//! Generic item controller over one bank of the database.
//!
//! Positions are 1-based and recomputed on every listing: removing item 1
//! shifts every later item down by one.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use std::path::PathBuf;
use tracing::warn;

use crate::database::{Bank, DatabaseHandler, Store};
use crate::outcome::{ErrorKind, Outcome};

/// A record stored in one bank.
pub trait Record: Serialize + DeserializeOwned + Clone + PartialEq {
    /// Bank the record lives in.
    const BANK: Bank;

    /// Display name.
    fn name(&self) -> &str;

    /// Canonical form used for storage and duplicate checks.
    fn normalized(self) -> Self;
}

/// Join name tokens with single spaces and lower-case the result.
///
/// Whitespace inside tokens is collapsed too, so `["chili  ", "Powder"]`
/// and `["chili powder"]` both become `"chili powder"`.
pub fn normalize_name<S: AsRef<str>>(tokens: &[S]) -> String {
    tokens
        .iter()
        .flat_map(|t| t.as_ref().split_whitespace())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Add/list/remove/clear over the bank of `R`, stored in `S`.
#[derive(Debug, Clone)]
pub struct ItemController<R, S = DatabaseHandler> {
    db: S,
    _record: PhantomData<R>,
}

impl<R: Record> ItemController<R> {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self::with_store(DatabaseHandler::new(db_path))
    }

    pub fn database(&self) -> &DatabaseHandler {
        &self.db
    }
}

impl<R: Record, S: Store> ItemController<R, S> {
    pub fn with_store(store: S) -> Self {
        Self {
            db: store,
            _record: PhantomData,
        }
    }

    /// Append a record unless an identical one is already stored.
    ///
    /// The normalized record is echoed back on every path, including
    /// read/parse failures and duplicates.
    pub fn add(&self, record: R) -> Outcome<R> {
        let record = record.normalized();

        let mut records = match self.db.read::<R>(R::BANK) {
            Outcome::Success(records) => records,
            Outcome::Failure { kind, .. } => return Outcome::failure_with(kind, record),
        };

        if records.contains(&record) {
            return Outcome::failure_with(ErrorKind::Duplicate, record);
        }

        records.push(record.clone());
        match self.db.write(R::BANK, records) {
            Outcome::Success(_) => Outcome::Success(record),
            Outcome::Failure { kind, .. } => Outcome::failure_with(kind, record),
        }
    }

    /// Current bank contents. Empty when the database cannot be read.
    pub fn list(&self) -> Vec<R> {
        match self.db.read::<R>(R::BANK) {
            Outcome::Success(records) => records,
            Outcome::Failure { kind, .. } => {
                warn!(bank = R::BANK.key(), error = %kind, "listing as empty");
                Vec::new()
            }
        }
    }

    /// Record at a 1-based position, if any.
    pub fn get(&self, position: usize) -> Option<R> {
        let index = position.checked_sub(1)?;
        self.list().into_iter().nth(index)
    }

    /// Remove the record at a 1-based position.
    pub fn remove(&self, position: usize) -> Outcome<R> {
        let mut records = match self.db.read::<R>(R::BANK) {
            Outcome::Success(records) => records,
            Outcome::Failure { kind, .. } => return Outcome::failure(kind),
        };

        let index = match position.checked_sub(1) {
            Some(index) if index < records.len() => index,
            _ => return Outcome::failure(ErrorKind::InvalidId),
        };

        let removed = records.remove(index);
        match self.db.write(R::BANK, records) {
            Outcome::Success(_) => Outcome::Success(removed),
            Outcome::Failure { kind, .. } => Outcome::failure_with(kind, removed),
        }
    }

    /// Empty the bank without looking at its current contents.
    pub fn clear(&self) -> Outcome<()> {
        self.db.write::<R>(R::BANK, Vec::new()).map(|_| ())
    }
}
