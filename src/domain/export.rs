//! Plain-text export of saved snippets

use crate::domain::SnippetRecord;

/// Width of the line separating two exported snippets
const SEPARATOR_WIDTH: usize = 50;

/// Default name of the exported file
pub const DEFAULT_EXPORT_FILENAME: &str = "snippets.txt";

/// Format records as a flat text block.
///
/// Each record becomes `Text: ..\nCategory: ..\nURL: ..\n\n`, and
/// consecutive blocks are joined by a line of dashes. No separator follows
/// the last block. An empty slice yields an empty string.
pub fn format_export(records: &[SnippetRecord]) -> String {
    let separator = format!("{}\n", "-".repeat(SEPARATOR_WIDTH));

    records
        .iter()
        .map(|record| {
            format!(
                "Text: {}\nCategory: {}\nURL: {}\n\n",
                record.text, record.category, record.url
            )
        })
        .collect::<Vec<_>>()
        .join(&separator)
}
