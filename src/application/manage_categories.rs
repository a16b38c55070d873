//! Category listing and creation use case

use crate::error::Result;
use crate::infrastructure::{CategoryRegistry, KeyValueStore};

/// Service for the category selector
pub struct CategoryService<'a, S: KeyValueStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: KeyValueStore + ?Sized> CategoryService<'a, S> {
    pub fn new(store: &'a S) -> Self {
        CategoryService { store }
    }

    /// Categories in the order they were first used
    pub fn list(&self) -> Result<Vec<String>> {
        CategoryRegistry::new(self.store).list()
    }

    /// Register a category ahead of saving anything under it.
    ///
    /// Adding an empty or existing name is a no-op. Returns whether it was new.
    pub fn add(&self, name: &str) -> Result<bool> {
        CategoryRegistry::new(self.store).add_if_absent(name)
    }
}
