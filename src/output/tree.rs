//! Tree output formatter.
//!
//! Produces the root path, a blank line, then one line per record:
//!
//! ```text
//! /srv/project
//!
//! ├── [DIR]  src
//! │   ├── [FILE] main.rs                         1.2 KB
//! ├── [FILE] Cargo.toml                          412 B
//! ```

use crate::config::Config;
use crate::data::Record;
use crate::utils::format_size;

const INDENT: &str = "│   ";
const BRANCH: &str = "├── ";
const SIZE_COLUMN: usize = 50;
const TIME_COLUMN: usize = 65;

/// Renders records as an indented tree.
///
/// # Arguments
/// * `records` - Entries in traversal order
/// * `root` - Header line, the root path as given by the user
/// * `config` - Controls relative paths and the size, time and type columns
///
/// # Note
/// Column padding counts characters rather than bytes, so the box-drawing
/// prefix does not shift the columns.
pub fn render(records: &[Record], root: &str, config: &Config) -> String {
    let mut out = String::new();
    out.push_str(root);
    out.push_str("\n\n");

    for record in records {
        out.push_str(&render_line(record, config));
        out.push('\n');
    }

    out
}

fn render_line(record: &Record, config: &Config) -> String {
    let depth = record.depth();
    let mut line = INDENT.repeat(depth.saturating_sub(1));
    if depth > 0 {
        line.push_str(BRANCH);
    }

    line.push_str(if record.is_dir() { "[DIR]  " } else { "[FILE] " });
    if config.relative {
        line.push_str(&record.rel_path().to_string_lossy());
    } else {
        line.push_str(record.name());
    }

    if config.show_size && !record.is_dir() {
        line = format!(
            "{:<width$}{}",
            line,
            format_size(record.size()),
            width = SIZE_COLUMN
        );
    }
    if config.show_time {
        line = format!("{:<width$}{}", line, record.modified(), width = TIME_COLUMN);
    }
    if config.show_type && !record.is_dir() {
        line.push(' ');
        line.push_str(record.ext());
    }

    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::EntryType;
    use std::path::PathBuf;

    fn record(rel: &str, entry_type: EntryType, size: u64, depth: usize) -> Record {
        let rel_path = PathBuf::from(rel);
        let name = rel_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Record::new(
            PathBuf::from("/root").join(&rel_path),
            rel_path,
            name,
            entry_type,
            size,
            "2024-05-06 07:08".to_string(),
            depth,
        )
    }

    #[test]
    fn test_plain_tree() {
        let records = vec![
            record("src", EntryType::Dir, 0, 1),
            record("src/main.rs", EntryType::File, 10, 2),
            record("README.md", EntryType::File, 10, 1),
        ];

        let out = render(&records, "/root", &Config::default());
        assert_eq!(
            out,
            "/root\n\n├── [DIR]  src\n│   ├── [FILE] main.rs\n├── [FILE] README.md\n"
        );
    }

    #[test]
    fn test_relative_names() {
        let records = vec![record("src/main.rs", EntryType::File, 10, 2)];
        let config = Config {
            relative: true,
            ..Default::default()
        };

        let out = render(&records, "proj", &config);
        assert_eq!(out, "proj\n\n│   ├── [FILE] src/main.rs\n");
    }

    #[test]
    fn test_size_column() {
        let records = vec![
            record("big.bin", EntryType::File, 2048, 1),
            record("docs", EntryType::Dir, 0, 1),
        ];
        let config = Config {
            show_size: true,
            ..Default::default()
        };

        let out = render(&records, "r", &config);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[2].chars().count(), SIZE_COLUMN + "2.0 KB".len());
        assert!(lines[2].ends_with(" 2.0 KB"));
        assert_eq!(lines[3], "├── [DIR]  docs");
    }

    #[test]
    fn test_time_and_type_columns() {
        let records = vec![
            record("a.tar.gz", EntryType::File, 1, 1),
            record("dir", EntryType::Dir, 0, 1),
        ];
        let config = Config {
            show_time: true,
            show_type: true,
            ..Default::default()
        };

        let out = render(&records, "r", &config);
        let lines: Vec<&str> = out.lines().collect();
        let file_line: String = lines[2].chars().skip(TIME_COLUMN).collect();
        assert_eq!(file_line, "2024-05-06 07:08 gz");
        let dir_line: String = lines[3].chars().skip(TIME_COLUMN).collect();
        assert_eq!(dir_line, "2024-05-06 07:08");
    }

    #[test]
    fn test_long_line_is_not_truncated() {
        let long = "x".repeat(80);
        let records = vec![record(&long, EntryType::File, 5, 1)];
        let config = Config {
            show_size: true,
            ..Default::default()
        };

        let out = render(&records, "r", &config);
        assert!(out.contains(&format!("{}5 B", long)));
    }

    #[test]
    fn test_empty_records() {
        assert_eq!(render(&[], "/missing", &Config::default()), "/missing\n\n");
    }
}
