//! Library crate for lstree
//!
//! This exposes the modules used by the `lstree` binary, for testing and
//! library usage.
//!
//! # Features
//!
//! - **Directory Traversal**: Depth-limited pre-order walk with name and type filters
//! - **Pattern Matching**: Comma-separated shell wildcards or `regex:` expressions
//! - **Output Formats**: Tree, JSON and flat list renderers plus a file/stdout sink
//!
//! # Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: The options a listing run works from
//! - [`data`]: Core data structures (`Record`, `EntryType`)
//! - [`error`]: Library error type
//! - [`output`]: Renderers and the output sink
//! - [`pattern`]: Include/exclude name matching
//! - [`scan`]: File system traversal
//! - [`utils`]: Size, time and path helpers
//!
//! # Example
//!
//! ```no_run
//! use lstree::{Config, OutputFormat, enumerate, output};
//! use std::path::Path;
//!
//! let config = Config {
//!     include_filter: "*.rs".into(),
//!     format: OutputFormat::List,
//!     ..Default::default()
//! };
//! let records = enumerate(Path::new("src"), &config)?;
//! let document = output::render(&records, "src", &config)?;
//! print!("{}", document);
//! # Ok::<(), lstree::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod output;
pub mod pattern;
pub mod scan;
pub mod utils;

pub use cli::Args;
pub use config::{Config, OutputFormat};
pub use data::{EntryType, Record};
pub use error::{Error, Result};
pub use scan::enumerate;
