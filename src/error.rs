//! Error types for snipbox

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for snipbox
#[derive(Debug, Error)]
pub enum SnipboxError {
    #[error("Not a snipbox directory: {0}")]
    NotSnipboxDirectory(PathBuf),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Index {index} out of range (have {len} snippets)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Snippet not found: #{0}")]
    SnippetNotFound(u64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl SnipboxError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            SnipboxError::NotSnipboxDirectory(_) => 2,
            SnipboxError::Validation(_) => 3,
            SnipboxError::IndexOutOfRange { .. } | SnipboxError::SnippetNotFound(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            SnipboxError::NotSnipboxDirectory(path) => {
                format!(
                    "Not a snipbox directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'snipbox init' in this directory to create a snippet box\n\
                    • Navigate to an existing snipbox directory\n\
                    • Set SNIPBOX_ROOT environment variable to your snippet box path",
                    path.display()
                )
            }
            SnipboxError::Validation(msg) => {
                if msg.contains("export") {
                    format!(
                        "{}\n\n\
                        Save something first: snipbox save \"some text\" --category notes",
                        msg
                    )
                } else {
                    format!(
                        "{}\n\n\
                        Both text and category are required.\n\
                        Example: snipbox save \"fn main() {{}}\" --category rust --url https://example.com",
                        msg
                    )
                }
            }
            SnipboxError::IndexOutOfRange { len, .. } => {
                let range = if *len == 0 {
                    "there are no snippets yet".to_string()
                } else {
                    format!("valid indexes are 0..{}", len - 1)
                };
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Indexes refer to 'snipbox list' order, not search results ({})\n\
                    • Prefer deleting by id: snipbox delete <ID>",
                    self, range
                )
            }
            SnipboxError::SnippetNotFound(_) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Use 'snipbox list' to see snippet ids\n\
                    • Ids are never reused once a snippet is deleted",
                    self
                )
            }
            SnipboxError::Config(msg) => {
                if msg.contains("Invalid filter mode") {
                    format!(
                        "{}\n\n\
                        Valid modes: text, category, all\n\
                        Example: snipbox config default_filter category",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using SnipboxError
pub type Result<T> = std::result::Result<T, SnipboxError>;
