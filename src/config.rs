//! Run configuration shared by traversal, rendering and output.
//!
//! [`Config`] is what the library works from. The CLI builds one from
//! [`crate::cli::Args`]; library users can build one directly, starting from
//! [`Config::default`].

use crate::error::{Error, Result};
use clap::ValueEnum;
use std::path::PathBuf;

/// Document format produced by the renderers.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Indented tree with `[DIR]`/`[FILE]` tags
    #[default]
    Tree,
    /// JSON object with a `files` array
    Json,
    /// One path per line
    List,
}

/// Options controlling a single listing run.
///
/// # Fields
/// * `depth` - Maximum recursion depth, `None` for unbounded
/// * `show_size` - Show file sizes
/// * `show_time` - Show last modification times
/// * `show_type` - Show file extensions
/// * `include_filter` - Pattern-spec an entry name must match (empty = all)
/// * `exclude_filter` - Pattern-spec that drops matching names (empty = none)
/// * `dirs_only` / `files_only` - Type filter, mutually exclusive
/// * `format` - Output document format
/// * `relative` - Print paths relative to the root
/// * `output` - Write to this file instead of stdout
/// * `compress` - Request a `.gz` output file (requires `output`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub depth: Option<usize>,
    pub show_size: bool,
    pub show_time: bool,
    pub show_type: bool,
    pub include_filter: String,
    pub exclude_filter: String,
    pub dirs_only: bool,
    pub files_only: bool,
    pub format: OutputFormat,
    pub relative: bool,
    pub output: Option<PathBuf>,
    pub compress: bool,
}

impl Config {
    /// Checks the option combinations that cannot be honoured together.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArguments`] if both type filters are set or if
    /// compression is requested without an output file.
    pub fn validate(&self) -> Result<()> {
        if self.dirs_only && self.files_only {
            return Err(Error::InvalidArguments(
                "--dirs-only and --files-only cannot be used together".into(),
            ));
        }
        if self.compress && self.output.is_none() {
            return Err(Error::InvalidArguments("--compress requires --output".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.depth, None);
        assert_eq!(config.format, OutputFormat::Tree);
    }

    #[test]
    fn test_conflicting_type_filters() {
        let config = Config {
            dirs_only: true,
            files_only: true,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidArguments(_))
        ));
    }

    #[test]
    fn test_compress_requires_output() {
        let mut config = Config {
            compress: true,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        config.output = Some(PathBuf::from("listing.txt"));
        assert!(config.validate().is_ok());
    }
}
