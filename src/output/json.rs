//! JSON output formatter.
//!
//! The document has the shape
//!
//! ```json
//! {
//!   "root": "src",
//!   "files": [
//!     { "path": "/abs/src/main.rs", "type": "file", "name": "main.rs", "size": 42 }
//!   ]
//! }
//! ```
//!
//! `size` and `ext` are only present for files, and only when the matching
//! display option is on; `modified` follows the time option. All strings go
//! through `serde_json`, so names containing quotes or backslashes are
//! escaped like paths are.

use crate::config::Config;
use crate::data::{EntryType, Record};
use crate::error::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct JsonDocument<'a> {
    root: &'a str,
    files: Vec<JsonEntry<'a>>,
}

#[derive(Debug, Serialize)]
struct JsonEntry<'a> {
    path: String,
    #[serde(rename = "type")]
    entry_type: EntryType,
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    modified: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ext: Option<&'a str>,
}

impl<'a> JsonEntry<'a> {
    fn new(record: &'a Record, config: &Config) -> Self {
        let is_file = !record.is_dir();
        Self {
            path: record
                .display_path(config.relative)
                .to_string_lossy()
                .into_owned(),
            entry_type: record.entry_type(),
            name: record.name(),
            size: (config.show_size && is_file).then_some(record.size()),
            modified: config.show_time.then_some(record.modified()),
            ext: (config.show_type && is_file).then_some(record.ext()),
        }
    }
}

/// Renders records as a pretty-printed JSON document ending in a newline.
///
/// # Errors
/// Returns [`crate::Error::Json`] if serialization fails.
pub fn render(records: &[Record], root: &str, config: &Config) -> Result<String> {
    let document = JsonDocument {
        root,
        files: records.iter().map(|r| JsonEntry::new(r, config)).collect(),
    };

    let mut out = serde_json::to_string_pretty(&document)?;
    out.push('\n');
    Ok(out)
}
