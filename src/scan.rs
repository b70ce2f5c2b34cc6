//! File system traversal for `lstree`.
//!
//! This module handles:
//! - Depth-first, pre-order directory traversal using `WalkDir`
//! - Depth pruning: directories at the maximum depth are not descended into
//! - Name filtering via [`NameFilter`] and type filtering
//! - Best-effort metadata capture (size, modification time)
//!
//! The entry point is [`enumerate`], which returns the surviving entries as
//! [`Record`]s in traversal order. Entries that cannot be read are skipped;
//! a failure of the walk itself stops the walk and keeps what was collected.

use crate::config::Config;
use crate::data::{EntryType, Record};
use crate::error::{Error, Result};
use crate::pattern::NameFilter;
use crate::utils::{absolute_root, format_time, relative_path};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// Recursively lists a directory tree.
///
/// The root itself is not listed; its direct children have depth 1. Filters
/// decide whether an entry gets a record but never stop descent, only the
/// depth limit does.
///
/// # Arguments
/// * `root` - The directory to list
/// * `config` - Depth limit and filters to apply
///
/// # Returns
/// * `Result<Vec<Record>>` - The surviving entries in pre-order
///
/// # Errors
/// Returns [`Error::PathNotFound`] if `root` does not exist.
pub fn enumerate(root: &Path, config: &Config) -> Result<Vec<Record>> {
    let root = absolute_root(root);
    if !root.exists() {
        return Err(Error::PathNotFound(root));
    }

    let include = NameFilter::new(&config.include_filter);
    let exclude = NameFilter::new(&config.exclude_filter);

    let mut walker = WalkDir::new(&root).follow_links(false);
    if let Some(max) = config.depth {
        walker = walker.max_depth(max);
    }

    let mut records = Vec::new();

    for item in walker {
        let entry = match item {
            Ok(entry) => entry,
            Err(err) => {
                let kind = err.io_error().map(|e| e.kind());
                if matches!(kind, Some(ErrorKind::PermissionDenied | ErrorKind::NotFound)) {
                    debug!("skipping unreadable entry: {}", err);
                    continue;
                }
                // No loop errors without follow_links. Keep what was collected.
                warn!("{}", err);
                break;
            }
        };

        // The root is not listed.
        if entry.depth() == 0 {
            continue;
        }

        if let Some(record) = build_record(&root, &entry, &include, &exclude, config) {
            records.push(record);
        }
    }

    Ok(records)
}

/// Applies the filters to one entry and captures its metadata.
///
/// Returns `None` if the entry is filtered out, its name is not UTF-8, or
/// its metadata cannot be read.
fn build_record(
    root: &Path,
    entry: &DirEntry,
    include: &NameFilter,
    exclude: &NameFilter,
    config: &Config,
) -> Option<Record> {
    let Some(name) = entry.file_name().to_str() else {
        debug!("skipping non UTF-8 name: {}", entry.path().display());
        return None;
    };

    if !include.is_match(name) {
        return None;
    }
    if !exclude.is_any() && exclude.is_match(name) {
        return None;
    }

    // Follows symlinks, so a link to a directory reports as a directory and
    // a dangling link has no metadata at all.
    let metadata = match fs::metadata(entry.path()) {
        Ok(metadata) => metadata,
        Err(err) => {
            debug!("skipping {}: {}", entry.path().display(), err);
            return None;
        }
    };
    let is_dir = metadata.is_dir();

    if (config.dirs_only && !is_dir) || (config.files_only && is_dir) {
        return None;
    }

    let size = if is_dir { 0 } else { metadata.len() };
    let modified = metadata.modified().map(format_time).unwrap_or_default();

    Some(Record::new(
        entry.path().to_path_buf(),
        relative_path(root, entry.path()),
        name.to_string(),
        if is_dir { EntryType::Dir } else { EntryType::File },
        size,
        modified,
        entry.depth(),
    ))
}
