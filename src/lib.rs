//! snipbox - Local snippet keeper
//!
//! Saves text snippets with a category and source URL, then lists,
//! searches and exports them. Everything lives in a `.snipbox/` directory
//! holding a JSON store and a TOML config.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::SnipboxError;
