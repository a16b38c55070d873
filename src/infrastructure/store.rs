//! Key-value persistence backing the snippet box
//!
//! The store holds a single JSON document with top-level keys such as
//! `categories` and `savedItems`. Each `get`/`set` call is atomic on its
//! own, but nothing groups a read and a later write into a transaction:
//! concurrent writers are last-writer-wins.

use crate::error::{Result, SnipboxError};
use serde_json::{Map, Value};
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Store key holding the ordered category names
pub const CATEGORIES_KEY: &str = "categories";

/// Store key holding the ordered snippet records
pub const SAVED_ITEMS_KEY: &str = "savedItems";

/// Store key holding the next snippet id to hand out
pub const NEXT_ID_KEY: &str = "nextId";

/// Opaque get/set store keyed by string keys
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<Value>>;

    /// Replace the value stored under `key`
    fn set(&self, key: &str, value: Value) -> Result<()>;
}

/// Store backed by one JSON file on disk
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Self {
        JsonFileStore { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_document(&self) -> Result<Map<String, Value>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(SnipboxError::Io(e)),
        };

        if contents.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str(&contents)? {
            Value::Object(map) => Ok(map),
            _ => Err(SnipboxError::Config(format!(
                "Store file is not a JSON object: {}",
                self.path.display()
            ))),
        }
    }

    /// Write the whole document to a temp file next to the store, then
    /// rename it into place.
    fn save_document(&self, document: &Map<String, Value>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_name = format!(
            "{}.snipbox-tmp-{}",
            self.path
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("store.json"),
            std::process::id()
        );
        let tmp_path = self.path.with_file_name(tmp_name);

        let contents = serde_json::to_string_pretty(document)?;
        fs::write(&tmp_path, contents)?;

        if cfg!(windows) && self.path.exists() {
            // rename does not overwrite on Windows
            fs::remove_file(&self.path)?;
        }

        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        let mut document = self.load_document()?;
        debug!(key, path = %self.path.display(), "store get");
        Ok(document.remove(key))
    }

    fn set(&self, key: &str, value: Value) -> Result<()> {
        let mut document = self.load_document()?;
        document.insert(key.to_string(), value);
        self.save_document(&document)?;
        debug!(key, path = %self.path.display(), "store set");
        Ok(())
    }
}

/// In-process store, used for tests and embedding
#[derive(Debug, Default)]
pub struct MemoryStore {
    document: RefCell<Map<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.document.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: Value) -> Result<()> {
        self.document.borrow_mut().insert(key.to_string(), value);
        Ok(())
    }
}
