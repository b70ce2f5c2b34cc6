//! Data structures for representing listed file system entries.
//!
//! A [`Record`] is produced by the traversal in [`crate::scan`] for every
//! entry that survives filtering and is consumed read-only by the renderers.

use std::path::{Path, PathBuf};

/// Represents the type of file system entry.
///
/// # Variants
/// * `File` - Anything that is not a directory
/// * `Dir` - A directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    File,
    Dir,
}

impl EntryType {
    /// Returns the tag used by the tree renderer.
    ///
    /// # Returns
    /// * `"FILE"` for `EntryType::File`
    /// * `"DIR"` for `EntryType::Dir`
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryType::File => "FILE",
            EntryType::Dir => "DIR",
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, EntryType::Dir)
    }
}

/// One listed file or directory.
///
/// Records are built once by the traversal and never modified afterwards,
/// so the fields are only reachable through accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    path: PathBuf,
    rel_path: PathBuf,
    name: String,
    entry_type: EntryType,
    size: u64,
    modified: String,
    depth: usize,
}

impl Record {
    /// Creates a record.
    ///
    /// # Arguments
    /// * `path` - Absolute path of the entry
    /// * `rel_path` - Path relative to the traversal root
    /// * `name` - Base name of the entry
    /// * `entry_type` - File or directory
    /// * `size` - Size in bytes, 0 for directories
    /// * `modified` - Modification time as `YYYY-MM-DD HH:MM`, or empty
    /// * `depth` - Depth below the root, 1 for direct children
    pub fn new(
        path: PathBuf,
        rel_path: PathBuf,
        name: String,
        entry_type: EntryType,
        size: u64,
        modified: String,
        depth: usize,
    ) -> Self {
        Self {
            path,
            rel_path,
            name,
            entry_type,
            size,
            modified,
            depth,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn rel_path(&self) -> &Path {
        &self.rel_path
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entry_type(&self) -> EntryType {
        self.entry_type
    }

    pub fn is_dir(&self) -> bool {
        self.entry_type.is_dir()
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    /// Modification time, empty when it could not be read.
    pub fn modified(&self) -> &str {
        &self.modified
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Extension of the name without the leading dot, empty if there is none.
    ///
    /// Names that only start with a dot (`.bashrc`) have no extension.
    pub fn ext(&self) -> &str {
        Path::new(&self.name)
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
    }

    /// Path to display: relative to the root or absolute.
    pub fn display_path(&self, relative: bool) -> &Path {
        if relative { &self.rel_path } else { &self.path }
    }
}
