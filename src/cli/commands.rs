//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "snipbox")]
#[command(about = "Save, search and export text snippets", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new snippet box
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Save a snippet (reads text from stdin when TEXT is omitted)
    Save {
        /// Snippet text
        text: Option<String>,

        /// Category to file the snippet under (created if new)
        #[arg(short, long)]
        category: String,

        /// Source page URL
        #[arg(short, long, default_value = "")]
        url: String,
    },

    /// List all snippets in save order
    List,

    /// Search snippets by text and/or category
    Search {
        /// Case-insensitive substring to look for
        query: String,

        /// Fields to match (text, category, all); defaults to config
        #[arg(short, long)]
        mode: Option<String>,
    },

    /// Delete a snippet by id, or by its index in 'snipbox list'
    Delete {
        /// Snippet id (as shown with a leading #)
        #[arg(required_unless_present = "index", conflicts_with = "index")]
        id: Option<u64>,

        /// Position in the full, unfiltered list
        #[arg(short, long)]
        index: Option<usize>,
    },

    /// List or add categories
    Categories {
        #[command(subcommand)]
        action: Option<CategoryAction>,
    },

    /// Export all snippets as plain text
    Export {
        /// Directory to write the export file into (default: current directory)
        #[arg(short, long, default_value = ".", conflicts_with = "stdout")]
        output: PathBuf,

        /// Write the export to stdout instead of a file
        #[arg(long)]
        stdout: bool,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum CategoryAction {
    /// Register a new category
    Add {
        /// Category name
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_save() {
        let cli = Cli::try_parse_from([
            "snipbox", "save", "hello", "--category", "greet", "--url", "http://x",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Save {
                text,
                category,
                url,
            }) => {
                assert_eq!(text.as_deref(), Some("hello"));
                assert_eq!(category, "greet");
                assert_eq!(url, "http://x");
            }
            other => panic!("Expected save command, got {:?}", other),
        }
    }

    #[test]
    fn test_delete_requires_id_or_index() {
        assert!(Cli::try_parse_from(["snipbox", "delete"]).is_err());
        assert!(Cli::try_parse_from(["snipbox", "delete", "3", "--index", "1"]).is_err());
        assert!(Cli::try_parse_from(["snipbox", "delete", "--index", "0"]).is_ok());
    }

    #[test]
    fn test_export_stdout_conflicts_with_output() {
        assert!(Cli::try_parse_from(["snipbox", "export", "--stdout", "-o", "out"]).is_err());
    }
}
