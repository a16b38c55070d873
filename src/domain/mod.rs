//! Domain layer - Snippet model, filtering and export formatting

pub mod category;
pub mod export;
pub mod filter;
pub mod snippet;

pub use export::{format_export, DEFAULT_EXPORT_FILENAME};
pub use filter::{filter, filter_positions, FilterMode};
pub use snippet::{NewSnippet, SnippetId, SnippetRecord};
