//! Export snippets use case

use crate::domain::format_export;
use crate::error::{Result, SnipboxError};
use crate::infrastructure::{ExportSink, KeyValueStore, SnippetRepository};
use tracing::debug;

/// Service for exporting every saved snippet as plain text
pub struct ExportService<'a, S: KeyValueStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: KeyValueStore + ?Sized> ExportService<'a, S> {
    pub fn new(store: &'a S) -> Self {
        ExportService { store }
    }

    /// Format all snippets and hand them to `sink` as `filename`.
    /// Refuses to export an empty snippet box.
    pub fn execute(&self, sink: &mut dyn ExportSink, filename: &str) -> Result<String> {
        let records = SnippetRepository::new(self.store).all()?;
        if records.is_empty() {
            return Err(SnipboxError::Validation("No snippets to export".to_string()));
        }

        let payload = format_export(&records);
        debug!(records = records.len(), filename, "formatted export");
        sink.deliver(filename, &payload)
    }
}
