//! Infrastructure layer - Persistence, workspace discovery and export sinks

pub mod categories;
pub mod config;
pub mod sink;
pub mod snippets;
pub mod store;
pub mod workspace;

pub use categories::CategoryRegistry;
pub use config::{Config, ConfigKey};
pub use sink::{DirectorySink, ExportSink, WriterSink};
pub use snippets::SnippetRepository;
pub use store::{JsonFileStore, KeyValueStore, MemoryStore};
pub use workspace::Workspace;
