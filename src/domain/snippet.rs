//! Snippet records and save-time validation

use crate::error::{Result, SnipboxError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier assigned when a snippet is appended.
///
/// Ids come from a persisted counter and are never reused, so they stay
/// valid while positions shift underneath deletes and filtered views.
/// Records stored without an id deserialize to `SnippetId(0)` until the
/// repository assigns them one.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SnippetId(pub u64);

impl SnippetId {
    /// Whether the repository has handed out this id
    pub fn is_assigned(&self) -> bool {
        self.0 != 0
    }
}

impl fmt::Display for SnippetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A saved piece of text plus its category and source URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetRecord {
    #[serde(default)]
    pub id: SnippetId,
    pub text: String,
    pub category: String,
    pub url: String,
}

/// A snippet that has passed validation but has no id yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSnippet {
    text: String,
    category: String,
    url: String,
}

impl NewSnippet {
    /// Validate the required fields of a snippet about to be saved.
    ///
    /// Text and category must be non-empty and are kept verbatim. The URL is
    /// free-form and may be empty.
    pub fn new(
        text: impl Into<String>,
        category: impl Into<String>,
        url: impl Into<String>,
    ) -> Result<Self> {
        let text = text.into();
        let category = category.into();

        if text.is_empty() {
            return Err(SnipboxError::Validation(
                "Snippet text must not be empty".to_string(),
            ));
        }
        if category.is_empty() {
            return Err(SnipboxError::Validation(
                "Snippet category must not be empty".to_string(),
            ));
        }

        Ok(NewSnippet {
            text,
            category,
            url: url.into(),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Turn the draft into a persisted record under the given id
    pub fn into_record(self, id: SnippetId) -> SnippetRecord {
        SnippetRecord {
            id,
            text: self.text,
            category: self.category,
            url: self.url,
        }
    }
}
