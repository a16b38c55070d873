//! Delete snippet use case

use crate::domain::{SnippetId, SnippetRecord};
use crate::error::Result;
use crate::infrastructure::{KeyValueStore, SnippetRepository};

/// How the snippet to delete is addressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteTarget {
    /// Stable id shown by list and search
    Id(SnippetId),
    /// Position in the unfiltered, save-ordered sequence
    Index(usize),
}

/// Service for deleting snippets
pub struct DeleteSnippetService<'a, S: KeyValueStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: KeyValueStore + ?Sized> DeleteSnippetService<'a, S> {
    pub fn new(store: &'a S) -> Self {
        DeleteSnippetService { store }
    }

    /// Delete the targeted snippet and return it
    pub fn execute(&self, target: DeleteTarget) -> Result<SnippetRecord> {
        let repository = SnippetRepository::new(self.store);
        match target {
            DeleteTarget::Id(id) => repository.delete_by_id(id),
            DeleteTarget::Index(index) => repository.delete_at(index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{SaveSnippetService, SearchService};
    use crate::domain::FilterMode;
    use crate::error::SnipboxError;
    use crate::infrastructure::MemoryStore;

    fn seeded() -> MemoryStore {
        let store = MemoryStore::new();
        let save = SaveSnippetService::new(&store);
        save.execute("alpha", "one", "").unwrap();
        save.execute("beta", "two", "").unwrap();
        save.execute("gamma", "two", "").unwrap();
        store
    }

    #[test]
    fn test_delete_from_filtered_view_hits_right_record() {
        let store = seeded();

        // "gamma" is first in the filtered view but third overall
        let matches = SearchService::new(&store)
            .execute("gamma", FilterMode::Text)
            .unwrap();
        assert_eq!(matches.len(), 1);

        let removed = DeleteSnippetService::new(&store)
            .execute(DeleteTarget::Index(matches[0].index))
            .unwrap();
        assert_eq!(removed.text, "gamma");

        let texts: Vec<String> = SearchService::new(&store)
            .list_all()
            .unwrap()
            .into_iter()
            .map(|m| m.record.text)
            .collect();
        assert_eq!(texts, vec!["alpha", "beta"]);
    }

    #[test]
    fn test_delete_by_id() {
        let store = seeded();
        let removed = DeleteSnippetService::new(&store)
            .execute(DeleteTarget::Id(SnippetId(2)))
            .unwrap();
        assert_eq!(removed.text, "beta");
    }

    #[test]
    fn test_delete_out_of_range() {
        let store = seeded();
        let err = DeleteSnippetService::new(&store)
            .execute(DeleteTarget::Index(3))
            .unwrap_err();
        assert!(matches!(err, SnipboxError::IndexOutOfRange { index: 3, len: 3 }));
    }
}
