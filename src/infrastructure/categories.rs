//! Category registry

use crate::domain::category;
use crate::error::Result;
use crate::infrastructure::store::{KeyValueStore, CATEGORIES_KEY};
use serde_json::Value;
use tracing::info;

/// Deduplicated, insertion-ordered list of category names
pub struct CategoryRegistry<'a, S: KeyValueStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: KeyValueStore + ?Sized> CategoryRegistry<'a, S> {
    pub fn new(store: &'a S) -> Self {
        CategoryRegistry { store }
    }

    /// Current categories, empty if none were ever stored
    pub fn list(&self) -> Result<Vec<String>> {
        match self.store.get(CATEGORIES_KEY)? {
            Some(value) => Ok(serde_json::from_value(value)?),
            None => Ok(Vec::new()),
        }
    }

    /// Append `name` if it is non-empty and not yet registered.
    ///
    /// Duplicates and empty names are silently ignored. Returns whether the
    /// registry changed.
    pub fn add_if_absent(&self, name: &str) -> Result<bool> {
        let mut categories = self.list()?;
        if !category::add_if_absent(&mut categories, name) {
            return Ok(false);
        }

        self.store.set(CATEGORIES_KEY, Value::from(categories))?;
        info!(category = name, "registered category");
        Ok(true)
    }
}
