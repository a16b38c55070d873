//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{CategoryAction, Cli, Commands};
pub use output::{format_category_list, format_snippet_list};
