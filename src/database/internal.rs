//! Internal implementation for database module

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};
use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::outcome::{ErrorKind, Outcome};

type Document = Map<String, Value>;

/// A named collection inside the database document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bank {
    Groceries,
    Recipes,
}

impl Bank {
    pub const ALL: [Bank; 2] = [Bank::Groceries, Bank::Recipes];

    /// JSON key of the collection.
    pub fn key(self) -> &'static str {
        match self {
            Bank::Groceries => "grocery bank",
            Bank::Recipes => "recipe bank",
        }
    }
}

/// Storage behind an item controller: whole-collection reads and writes.
pub trait Store {
    fn read<R: DeserializeOwned>(&self, bank: Bank) -> Outcome<Vec<R>>;

    fn write<R: Serialize>(&self, bank: Bank, records: Vec<R>) -> Outcome<Vec<R>>;
}

/// Reads and rewrites the database file at a fixed path.
#[derive(Debug, Clone)]
pub struct DatabaseHandler {
    path: PathBuf,
}

impl DatabaseHandler {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read one collection.
    ///
    /// A missing key reads as an empty collection. On failure the outcome
    /// carries an empty collection as its partial value.
    pub fn read<R: DeserializeOwned>(&self, bank: Bank) -> Outcome<Vec<R>> {
        let mut document = match load_document(&self.path) {
            Ok(document) => document,
            Err(kind) => return Outcome::failure_with(kind, Vec::new()),
        };

        let records = match document.remove(bank.key()) {
            None => Vec::new(),
            Some(value) => match serde_json::from_value::<Vec<R>>(value) {
                Ok(records) => records,
                Err(e) => {
                    warn!(path = %self.path.display(), bank = bank.key(), error = %e, "collection has unexpected shape");
                    return Outcome::failure_with(ErrorKind::Parse, Vec::new());
                }
            },
        };

        debug!(path = %self.path.display(), bank = bank.key(), count = records.len(), "read collection");
        Outcome::Success(records)
    }

    /// Replace one collection and rewrite the whole document.
    ///
    /// Other keys in the document are preserved. The supplied records are
    /// echoed back whether or not the write succeeds.
    pub fn write<R: Serialize>(&self, bank: Bank, records: Vec<R>) -> Outcome<Vec<R>> {
        let mut document = match load_document(&self.path) {
            Ok(document) => document,
            Err(ErrorKind::Parse) => return Outcome::failure_with(ErrorKind::Parse, records),
            Err(_) => return Outcome::failure_with(ErrorKind::Write, records),
        };

        let value = match serde_json::to_value(&records) {
            Ok(value) => value,
            Err(e) => {
                warn!(bank = bank.key(), error = %e, "failed to serialize collection");
                return Outcome::failure_with(ErrorKind::Write, records);
            }
        };
        document.insert(bank.key().to_string(), value);

        if let Err(e) = store_document(&self.path, &document, OpenMode::Existing) {
            warn!(path = %self.path.display(), error = %e, "failed to write database");
            return Outcome::failure_with(ErrorKind::Write, records);
        }

        debug!(path = %self.path.display(), bank = bank.key(), count = records.len(), "wrote collection");
        Outcome::Success(records)
    }
}

impl Store for DatabaseHandler {
    fn read<R: DeserializeOwned>(&self, bank: Bank) -> Outcome<Vec<R>> {
        DatabaseHandler::read(self, bank)
    }

    fn write<R: Serialize>(&self, bank: Bank, records: Vec<R>) -> Outcome<Vec<R>> {
        DatabaseHandler::write(self, bank, records)
    }
}

/// Create a database at `path` with every bank empty.
///
/// Missing parent directories are created. An existing file is truncated
/// and rewritten in place.
pub fn init_database(path: &Path) -> Outcome<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!(path = %parent.display(), error = %e, "failed to create database directory");
            return Outcome::failure(ErrorKind::Write);
        }
    }

    let document: Document = Bank::ALL
        .iter()
        .map(|bank| (bank.key().to_string(), Value::Array(Vec::new())))
        .collect();

    match store_document(path, &document, OpenMode::Create) {
        Ok(()) => {
            info!(path = %path.display(), "database initialized");
            Outcome::Success(())
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to initialize database");
            Outcome::failure(ErrorKind::Write)
        }
    }
}

fn load_document(path: &Path) -> Result<Document, ErrorKind> {
    let file = File::open(path).map_err(|e| {
        warn!(path = %path.display(), error = %e, "failed to open database");
        ErrorKind::Read
    })?;

    match serde_json::from_reader(BufReader::new(file)) {
        Ok(Value::Object(document)) => Ok(document),
        Ok(_) => {
            warn!(path = %path.display(), "database is not a JSON object");
            Err(ErrorKind::Parse)
        }
        Err(e) if e.is_io() => {
            warn!(path = %path.display(), error = %e, "failed to read database");
            Err(ErrorKind::Read)
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "invalid JSON in database");
            Err(ErrorKind::Parse)
        }
    }
}

/// How [`store_document`] opens the database file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OpenMode {
    /// The file must already exist.
    Existing,
    /// Create the file if it is missing.
    Create,
}

/// Rewrite `path` in place with the 4-space pretty-printed document.
///
/// The document is serialized before the file is touched. Opening the path
/// itself (not a replacement file) follows symlinks and keeps the file's
/// permissions; a read-only file fails here.
fn store_document(path: &Path, document: &Document, mode: OpenMode) -> std::io::Result<()> {
    let bytes = to_pretty_bytes(document)?;

    let file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(mode == OpenMode::Create)
        .open(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(&bytes)?;
    writer.flush()?;
    writer.get_ref().sync_all()
}

fn to_pretty_bytes(document: &Document) -> std::io::Result<Vec<u8>> {
    let mut bytes = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut bytes, PrettyFormatter::with_indent(b"    "));
    document.serialize(&mut serializer)?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Entry {
        #[serde(rename = "Name")]
        name: String,
    }

    fn entry(name: &str) -> Entry {
        Entry {
            name: name.to_string(),
        }
    }

    #[test]
    fn test_init_creates_empty_banks() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("groceries.json");

        assert!(init_database(&path).is_success());

        let value: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value, serde_json::json!({"grocery bank": [], "recipe bank": []}));
    }

    #[test]
    fn test_init_creates_parent_directories() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("a/b/groceries.json");
        assert!(init_database(&path).is_success());
        assert!(path.exists());
    }

    #[test]
    fn test_init_into_directory_fails_with_write_error() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(init_database(tmp.path()).kind(), Some(ErrorKind::Write));
    }

    #[test]
    fn test_write_then_read_roundtrip() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("groceries.json");
        init_database(&path);
        let db = DatabaseHandler::new(&path);

        let records = vec![entry("egg"), entry("milk")];
        assert_eq!(db.write(Bank::Groceries, records.clone()), Outcome::Success(records.clone()));
        assert_eq!(db.read::<Entry>(Bank::Groceries), Outcome::Success(records));
    }

    #[test]
    fn test_write_preserves_other_bank() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("groceries.json");
        init_database(&path);
        let db = DatabaseHandler::new(&path);

        db.write(Bank::Recipes, vec![entry("chili")]);
        db.write(Bank::Groceries, vec![entry("egg")]);

        assert_eq!(db.read::<Entry>(Bank::Recipes).into_result(), Ok(vec![entry("chili")]));
    }

    #[test]
    fn test_write_uses_four_space_indent() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("groceries.json");
        init_database(&path);
        DatabaseHandler::new(&path).write(Bank::Groceries, vec![entry("egg")]);

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("\n    \"grocery bank\": [\n        {\n            \"Name\": \"egg\""));
    }

    #[test]
    fn test_shrinking_write_leaves_no_trailing_content() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("groceries.json");
        init_database(&path);
        let db = DatabaseHandler::new(&path);

        db.write(Bank::Groceries, vec![entry("a long grocery name"), entry("another one")]);
        db.write::<Entry>(Bank::Groceries, Vec::new());

        let value: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["grocery bank"], serde_json::json!([]));
    }

    #[test]
    fn test_read_missing_file() {
        let tmp = TempDir::new().unwrap();
        let db = DatabaseHandler::new(tmp.path().join("absent.json"));
        assert_eq!(
            db.read::<Entry>(Bank::Groceries),
            Outcome::failure_with(ErrorKind::Read, Vec::new())
        );
    }

    #[test]
    fn test_read_empty_file_is_parse_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("groceries.json");
        fs::write(&path, "").unwrap();

        let outcome = DatabaseHandler::new(&path).read::<Entry>(Bank::Groceries);
        assert_eq!(outcome, Outcome::failure_with(ErrorKind::Parse, Vec::new()));
    }

    #[test]
    fn test_read_non_object_is_parse_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("groceries.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        let outcome = DatabaseHandler::new(&path).read::<Entry>(Bank::Groceries);
        assert_eq!(outcome.kind(), Some(ErrorKind::Parse));
    }

    #[test]
    fn test_read_missing_key_is_empty() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("groceries.json");
        fs::write(&path, r#"{"recipe bank": []}"#).unwrap();

        let outcome = DatabaseHandler::new(&path).read::<Entry>(Bank::Groceries);
        assert_eq!(outcome, Outcome::Success(Vec::new()));
    }

    #[test]
    fn test_write_missing_file_is_write_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("absent.json");
        let db = DatabaseHandler::new(&path);

        let outcome = db.write(Bank::Groceries, vec![entry("egg")]);
        assert_eq!(outcome, Outcome::failure_with(ErrorKind::Write, vec![entry("egg")]));
        assert!(!path.exists());
    }

    #[test]
    fn test_write_over_invalid_json_keeps_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("groceries.json");
        fs::write(&path, "not json").unwrap();

        let outcome = DatabaseHandler::new(&path).write(Bank::Groceries, vec![entry("egg")]);
        assert_eq!(outcome.kind(), Some(ErrorKind::Parse));
        assert_eq!(fs::read_to_string(&path).unwrap(), "not json");
    }

    #[cfg(unix)]
    #[test]
    fn test_write_through_symlink_updates_target() {
        let tmp = TempDir::new().unwrap();
        let real = tmp.path().join("real.json");
        let link = tmp.path().join("link.json");
        init_database(&real);
        std::os::unix::fs::symlink(&real, &link).unwrap();

        let db = DatabaseHandler::new(&link);
        assert!(db.write(Bank::Groceries, vec![entry("egg")]).is_success());

        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        let target = DatabaseHandler::new(&real);
        assert_eq!(target.read::<Entry>(Bank::Groceries).into_result(), Ok(vec![entry("egg")]));
    }

    #[cfg(unix)]
    #[test]
    fn test_write_keeps_file_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("groceries.json");
        init_database(&path);
        fs::set_permissions(&path, fs::Permissions::from_mode(0o600)).unwrap();

        assert!(DatabaseHandler::new(&path)
            .write(Bank::Groceries, vec![entry("egg")])
            .is_success());

        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o600);
    }

    #[cfg(unix)]
    #[test]
    fn test_write_into_read_only_directory_succeeds() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("locked");
        let path = dir.join("groceries.json");
        init_database(&path);
        fs::set_permissions(&dir, fs::Permissions::from_mode(0o555)).unwrap();

        let outcome = DatabaseHandler::new(&path).write(Bank::Groceries, vec![entry("egg")]);
        fs::set_permissions(&dir, fs::Permissions::from_mode(0o755)).unwrap();

        assert!(outcome.is_success());
    }

    #[cfg(unix)]
    #[test]
    fn test_write_to_read_only_file_is_write_error() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("groceries.json");
        init_database(&path);
        fs::set_permissions(&path, fs::Permissions::from_mode(0o444)).unwrap();

        // Privileged users can open read-only files for writing
        if OpenOptions::new().write(true).open(&path).is_ok() {
            return;
        }

        let outcome = DatabaseHandler::new(&path).write(Bank::Groceries, vec![entry("egg")]);
        assert_eq!(outcome, Outcome::failure_with(ErrorKind::Write, vec![entry("egg")]));
        assert_eq!(
            DatabaseHandler::new(&path).read::<Entry>(Bank::Groceries),
            Outcome::Success(Vec::new())
        );
    }
}
