//! Query filtering over snippet records
//!
//! A query is a plain case-insensitive substring. The filter mode picks
//! which fields it is matched against. Results keep the original relative
//! order; there is no ranking.
//!
//! # Examples
//!
//! ```
//! use snipbox::domain::{filter, FilterMode, SnippetId, SnippetRecord};
//!
//! let records = vec![SnippetRecord {
//!     id: SnippetId(1),
//!     text: "Hello".to_string(),
//!     category: "greetings".to_string(),
//!     url: String::new(),
//! }];
//! assert_eq!(filter(&records, "hello", FilterMode::Text).len(), 1);
//! ```

use crate::domain::SnippetRecord;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which fields a search query is matched against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// Match against the snippet text only
    Text,
    /// Match against the category only
    Category,
    /// Match against text or category
    #[default]
    All,
}

impl FilterMode {
    fn matches(&self, record: &SnippetRecord, needle: &str) -> bool {
        let in_text = || record.text.to_lowercase().contains(needle);
        let in_category = || record.category.to_lowercase().contains(needle);

        match self {
            FilterMode::Text => in_text(),
            FilterMode::Category => in_category(),
            FilterMode::All => in_text() || in_category(),
        }
    }
}

impl FromStr for FilterMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(FilterMode::Text),
            "category" => Ok(FilterMode::Category),
            "all" => Ok(FilterMode::All),
            _ => Err(format!(
                "Invalid filter mode: '{}'. Valid modes are: text, category, all",
                s
            )),
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FilterMode::Text => "text",
            FilterMode::Category => "category",
            FilterMode::All => "all",
        };
        f.write_str(name)
    }
}

/// Absolute positions of the records matching `query`.
///
/// An empty query matches every record.
pub fn filter_positions(records: &[SnippetRecord], query: &str, mode: FilterMode) -> Vec<usize> {
    if query.is_empty() {
        return (0..records.len()).collect();
    }

    let needle = query.to_lowercase();
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| mode.matches(record, &needle))
        .map(|(index, _)| index)
        .collect()
}

/// The subsequence of `records` matching `query`, in original order
pub fn filter(records: &[SnippetRecord], query: &str, mode: FilterMode) -> Vec<SnippetRecord> {
    filter_positions(records, query, mode)
        .into_iter()
        .map(|index| records[index].clone())
        .collect()
}
