//! Application layer - Use cases and orchestration

pub mod delete_snippet;
pub mod export_snippets;
pub mod init;
pub mod manage_categories;
pub mod manage_config;
pub mod save_snippet;
pub mod search_snippets;

pub use delete_snippet::{DeleteSnippetService, DeleteTarget};
pub use export_snippets::ExportService;
pub use manage_categories::CategoryService;
pub use manage_config::ConfigService;
pub use save_snippet::SaveSnippetService;
pub use search_snippets::{SearchService, SnippetMatch};
