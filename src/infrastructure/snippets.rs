//! Snippet repository

use crate::domain::{NewSnippet, SnippetId, SnippetRecord};
use crate::error::{Result, SnipboxError};
use crate::infrastructure::store::{KeyValueStore, NEXT_ID_KEY, SAVED_ITEMS_KEY};
use tracing::{debug, info};

/// Ordered sequence of saved snippets, oldest first
pub struct SnippetRepository<'a, S: KeyValueStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: KeyValueStore + ?Sized> SnippetRepository<'a, S> {
    pub fn new(store: &'a S) -> Self {
        SnippetRepository { store }
    }

    /// Full persisted sequence, empty if nothing was saved yet
    pub fn all(&self) -> Result<Vec<SnippetRecord>> {
        let (items, _) = self.load()?;
        Ok(items)
    }

    /// Append a validated snippet and return the stored record
    pub fn append(&self, draft: NewSnippet) -> Result<SnippetRecord> {
        let (mut items, _) = self.load()?;
        let id = self.next_id(&items)?;

        let record = draft.into_record(id);
        items.push(record.clone());
        self.save(&items, Some(id.0 + 1))?;

        info!(id = id.0, category = %record.category, "saved snippet");
        Ok(record)
    }

    /// Remove the record at `index` in the unfiltered sequence.
    ///
    /// Later records shift down by one. Out-of-range indexes leave the
    /// store untouched.
    pub fn delete_at(&self, index: usize) -> Result<SnippetRecord> {
        let (items, next_id) = self.load()?;
        self.remove(items, index, next_id)
    }

    /// Remove the record carrying `id`
    pub fn delete_by_id(&self, id: SnippetId) -> Result<SnippetRecord> {
        let (items, next_id) = self.load()?;
        let index = items
            .iter()
            .position(|record| record.id == id)
            .ok_or(SnipboxError::SnippetNotFound(id.0))?;

        self.remove(items, index, next_id)
    }

    fn remove(
        &self,
        mut items: Vec<SnippetRecord>,
        index: usize,
        next_id: Option<u64>,
    ) -> Result<SnippetRecord> {
        if index >= items.len() {
            return Err(SnipboxError::IndexOutOfRange {
                index,
                len: items.len(),
            });
        }

        let removed = items.remove(index);
        self.save(&items, next_id)?;

        info!(index, id = removed.id.0, "deleted snippet");
        Ok(removed)
    }

    /// Stored records, with ids handed out to any saved without one.
    ///
    /// Assignment follows save order, so repeated loads of the same document
    /// agree. When ids were assigned, the counter value that must be
    /// persisted alongside them is returned too.
    fn load(&self) -> Result<(Vec<SnippetRecord>, Option<u64>)> {
        let mut items: Vec<SnippetRecord> = match self.store.get(SAVED_ITEMS_KEY)? {
            Some(value) => serde_json::from_value(value)?,
            None => Vec::new(),
        };

        if items.iter().all(|record| record.id.is_assigned()) {
            return Ok((items, None));
        }

        let mut next = self.next_id(&items)?.0;
        for record in items.iter_mut().filter(|r| !r.id.is_assigned()) {
            record.id = SnippetId(next);
            next += 1;
        }
        debug!(next_id = next, "assigned ids to stored snippets");

        Ok((items, Some(next)))
    }

    fn save(&self, items: &[SnippetRecord], next_id: Option<u64>) -> Result<()> {
        self.store.set(SAVED_ITEMS_KEY, serde_json::to_value(items)?)?;
        if let Some(next) = next_id {
            self.store.set(NEXT_ID_KEY, serde_json::to_value(next)?)?;
        }
        Ok(())
    }

    /// Next id from the persisted counter, never below any id in use
    fn next_id(&self, items: &[SnippetRecord]) -> Result<SnippetId> {
        let counter: u64 = match self.store.get(NEXT_ID_KEY)? {
            Some(value) => serde_json::from_value(value)?,
            None => 1,
        };
        let above_existing = items.iter().map(|r| r.id.0 + 1).max().unwrap_or(1);

        Ok(SnippetId(counter.max(above_existing)))
    }
}
