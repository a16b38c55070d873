//! Save snippet use case

use crate::domain::{NewSnippet, SnippetRecord};
use crate::error::Result;
use crate::infrastructure::{CategoryRegistry, KeyValueStore, SnippetRepository};

/// Service for saving a snippet and registering its category
pub struct SaveSnippetService<'a, S: KeyValueStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: KeyValueStore + ?Sized> SaveSnippetService<'a, S> {
    pub fn new(store: &'a S) -> Self {
        SaveSnippetService { store }
    }

    /// Validate and append the snippet, then register its category if new.
    /// Nothing is written when validation fails.
    pub fn execute(&self, text: &str, category: &str, url: &str) -> Result<SnippetRecord> {
        let draft = NewSnippet::new(text, category, url)?;

        let record = SnippetRepository::new(self.store).append(draft)?;
        CategoryRegistry::new(self.store).add_if_absent(&record.category)?;
        Ok(record)
    }
}
