//! Search and list snippets use case

use crate::domain::{filter_positions, FilterMode, SnippetRecord};
use crate::error::Result;
use crate::infrastructure::{KeyValueStore, SnippetRepository};

/// A record together with its absolute position in the saved sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetMatch {
    pub index: usize,
    pub record: SnippetRecord,
}

/// Service for listing and searching saved snippets
pub struct SearchService<'a, S: KeyValueStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: KeyValueStore + ?Sized> SearchService<'a, S> {
    pub fn new(store: &'a S) -> Self {
        SearchService { store }
    }

    /// Records matching `query` under `mode`, in save order.
    /// An empty query returns everything.
    pub fn execute(&self, query: &str, mode: FilterMode) -> Result<Vec<SnippetMatch>> {
        let records = SnippetRepository::new(self.store).all()?;

        Ok(filter_positions(&records, query, mode)
            .into_iter()
            .map(|index| SnippetMatch {
                index,
                record: records[index].clone(),
            })
            .collect())
    }

    /// Every saved snippet with its index
    pub fn list_all(&self) -> Result<Vec<SnippetMatch>> {
        self.execute("", FilterMode::All)
    }
}
