//! Main entry point for the `lstree` CLI application.
//!
//! `lstree` lists a directory tree. It walks the tree below a root path,
//! keeps the entries that pass the name and type filters, and prints them as
//! a tree, a JSON document or a flat list, to stdout or to a file.
//!
//! # Responsibilities
//! - Installs the stderr log subscriber before any other I/O
//! - Parses CLI arguments via [`clap`] using the [`Args`] struct
//! - Delegates traversal to [`enumerate`] and formatting to [`output::render`]
//! - Maps failures to exit codes
//!
//! # Exit Codes
//! - `0`: Success, including a missing root (reported, empty listing) and an
//!   output file that could not be created (reported, nothing written)
//! - `1`: Invalid arguments, or stdout could not be written

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use lstree::{Args, Config, Error, enumerate, output};
use std::io::{self, IsTerminal};
use std::path::Path;
use std::process;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Installs the global log subscriber. Diagnostics go to stderr so they
/// never mix with the rendered document; `RUST_LOG` overrides the level.
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .without_time()
        .with_target(false)
        .init();
}

/// Walks, renders and emits one listing.
fn run(root: &Path, config: &Config) -> Result<()> {
    let root_arg = root.to_string_lossy();

    let records = match enumerate(root, config) {
        Ok(records) => records,
        Err(e) => {
            error!("{}", e);
            Vec::new()
        }
    };

    let document =
        output::render(&records, &root_arg, config).context("Failed to render output")?;

    match output::emit(&document, config) {
        Ok(Some(path)) => println!("Output saved to: {}", path.display()),
        Ok(None) => {}
        Err(e @ Error::Output { .. }) => error!("{}", e),
        Err(e) => return Err(e).context("Failed to write output"),
    }

    Ok(())
}

fn main() {
    init_logging();

    let args = Args::try_parse().unwrap_or_else(|e| {
        // --help and --version also arrive here, on stdout with exit code 0.
        let _ = e.print();
        process::exit(i32::from(e.use_stderr()));
    });

    let root = args.path.clone();
    let config = Config::from(args);
    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        eprintln!("{}", Args::command().render_usage());
        process::exit(1);
    }

    if let Err(e) = run(&root, &config) {
        error!("{:#}", e);
        process::exit(1);
    }
}
