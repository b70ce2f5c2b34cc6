//! CLI interface definitions for the `lstree` application.
//!
//! This module defines command-line arguments using [`clap`] and exposes:
//!
//! - [`Args`]: the main struct parsed from CLI inputs
//! - [`DepthLimit`]: the value of `--depth`, a level count or `inf`
//!
//! `Args` converts into the library [`Config`], which is what the traversal
//! and renderers work from.
//!
//! # Example
//!
//! ```bash
//! lstree src --depth 2 --filter "*.rs, *.toml" --size --format tree
//! lstree . -F json -o listing.json
//! ```
//!
//! # Dependencies
//! - [`clap`] for argument parsing and help generation

use crate::config::{Config, OutputFormat};
use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;

/// Command-line arguments for `lstree`.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use lstree::Args;
/// use lstree::config::Config;
///
/// let args = Args::try_parse_from(["lstree", "src", "--depth", "2", "-s"]).unwrap();
/// let config = Config::from(args);
/// assert_eq!(config.depth, Some(2));
/// assert!(config.show_size);
/// ```
#[derive(Parser, Debug, Clone)]
#[command(name = "lstree", version, about)]
pub struct Args {
    /// Directory to list
    pub path: PathBuf,

    /// Recursion depth, a number or `inf` (default: inf)
    #[arg(short, long, value_name = "N")]
    pub depth: Option<DepthLimit>,

    /// Show file size
    #[arg(short, long)]
    pub size: bool,

    /// Show modification time
    #[arg(short, long)]
    pub time: bool,

    /// Show file type/extension
    #[arg(short = 'T', long = "type")]
    pub show_type: bool,

    /// Include filter (wildcards such as `*.lua, *.txt`, or `regex:<expr>`)
    #[arg(short, long, value_name = "PATTERN", default_value = "")]
    pub filter: String,

    /// Exclude filter, same syntax as --filter
    #[arg(short, long, value_name = "PATTERN", default_value = "")]
    pub exclude: String,

    /// List directories only
    #[arg(long, conflicts_with = "files_only")]
    pub dirs_only: bool,

    /// List files only
    #[arg(long)]
    pub files_only: bool,

    /// Output format
    #[arg(short = 'F', long, value_enum, default_value_t = OutputFormat::Tree)]
    pub format: OutputFormat,

    /// Use paths relative to the listed directory
    #[arg(short, long)]
    pub relative: bool,

    /// Write output to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Gzip the output file (requires --output, not implemented: writes uncompressed)
    #[arg(short, long, requires = "output")]
    pub compress: bool,
}

/// Value of `--depth`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepthLimit {
    Levels(usize),
    Unbounded,
}

impl DepthLimit {
    /// Maximum depth, `None` when unbounded.
    pub fn max(self) -> Option<usize> {
        match self {
            DepthLimit::Levels(n) => Some(n),
            DepthLimit::Unbounded => None,
        }
    }
}

impl FromStr for DepthLimit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "inf" || s == "INF" {
            return Ok(DepthLimit::Unbounded);
        }
        s.parse::<usize>()
            .map(DepthLimit::Levels)
            .map_err(|_| format!("invalid depth '{}': expected a number or 'inf'", s))
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Config {
            depth: args.depth.and_then(DepthLimit::max),
            show_size: args.size,
            show_time: args.time,
            show_type: args.show_type,
            include_filter: args.filter,
            exclude_filter: args.exclude,
            dirs_only: args.dirs_only,
            files_only: args.files_only,
            format: args.format,
            relative: args.relative,
            output: args.output,
            compress: args.compress,
        }
    }
}
