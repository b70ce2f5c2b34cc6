//! Utility functions for the `lstree` listing tool.
//!
//! This module provides:
//! - Human-readable size formatting
//! - Local-time formatting of modification timestamps
//! - Root resolution and root-relative path computation

use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

const KB: u64 = 1024;
const MB: u64 = 1024 * 1024;

/// Formats a byte count as `B`, `KB` or `MB`.
///
/// Thresholds are binary (1024 and 1024²) and the largest unit is MB, so a
/// 2 GiB file prints as `2048.0 MB`.
///
/// # Examples
/// ```
/// use lstree::utils::format_size;
///
/// assert_eq!(format_size(500), "500 B");
/// assert_eq!(format_size(2048), "2.0 KB");
/// assert_eq!(format_size(3 * 1024 * 1024), "3.0 MB");
/// ```
pub fn format_size(bytes: u64) -> String {
    if bytes < KB {
        format!("{} B", bytes)
    } else if bytes < MB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    }
}

/// Formats a timestamp as local wall-clock time truncated to the minute
/// (`YYYY-MM-DD HH:MM`).
pub fn format_time(time: SystemTime) -> String {
    DateTime::<Local>::from(time)
        .format("%Y-%m-%d %H:%M")
        .to_string()
}

/// Resolves the traversal root to an absolute path.
///
/// Relative roots are joined onto the current directory. The path is not
/// canonicalized, so symlinks and `..` components are kept as given.
pub fn absolute_root(root: &Path) -> PathBuf {
    if root.is_absolute() {
        root.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(root))
            .unwrap_or_else(|_| root.to_path_buf())
    }
}

/// Returns `path` relative to `root`, or `path` itself if it is not below
/// `root`.
pub fn relative_path(root: &Path, path: &Path) -> PathBuf {
    path.strip_prefix(root)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| path.to_path_buf())
}
