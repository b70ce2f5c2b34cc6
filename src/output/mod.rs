//! Output system for the `lstree` application.
//!
//! Three renderers turn the records produced by [`crate::scan::enumerate`]
//! into a text document, and the sink writes that document out.
//!
//! # Available Formatters
//!
//! - **Tree**: Indented tree with `[DIR]`/`[FILE]` tags and optional columns
//! - **JSON**: Machine-readable document with a `files` array
//! - **List**: One path per line, for piping into other tools
//!
//! Renderers are pure: the same records and configuration always give the
//! same document, and none of them touch the filesystem.

pub mod json;
pub mod list;
pub mod sink;
pub mod tree;

use crate::config::{Config, OutputFormat};
use crate::data::Record;
use crate::error::Result;

/// Emits a document to stdout or the configured file.
///
/// See [`sink::emit`] for full documentation.
pub use sink::emit;

/// Renders `records` in the format selected by `config.format`.
///
/// # Arguments
/// * `records` - Entries in traversal order
/// * `root` - The root path as given by the user
/// * `config` - Display options
///
/// # Errors
/// Only the JSON renderer can fail, if serialization fails.
pub fn render(records: &[Record], root: &str, config: &Config) -> Result<String> {
    match config.format {
        OutputFormat::Tree => Ok(tree::render(records, root, config)),
        OutputFormat::Json => json::render(records, root, config),
        OutputFormat::List => Ok(list::render(records, config)),
    }
}
