//! Writes a rendered document to standard output or a file.

use crate::config::Config;
use crate::error::{Error, Result};
use std::ffi::OsString;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Writes `document` to the configured destination.
///
/// Without `config.output` the document goes to stdout. Otherwise the file is
/// created (or truncated) and the document written verbatim. When
/// `config.compress` is set the file name gets a `.gz` suffix, but the content
/// is still written uncompressed.
///
/// # Returns
/// * `Ok(None)` - The document was written to stdout
/// * `Ok(Some(path))` - The document was written to `path`
///
/// # Errors
/// Returns [`Error::Output`] if the file cannot be created or written, and
/// [`Error::Io`] if stdout cannot be written.
pub fn emit(document: &str, config: &Config) -> Result<Option<PathBuf>> {
    let Some(output) = &config.output else {
        let mut stdout = io::stdout().lock();
        stdout.write_all(document.as_bytes())?;
        stdout.flush()?;
        return Ok(None);
    };

    let target = if config.compress {
        warn!("gzip compression not implemented, writing uncompressed output");
        with_gz_suffix(output)
    } else {
        output.clone()
    };

    write_file(&target, document).map_err(|source| Error::Output {
        path: target.clone(),
        source,
    })?;

    Ok(Some(target))
}

fn write_file(path: &Path, document: &str) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(document.as_bytes())?;
    file.flush()
}

fn with_gz_suffix(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".gz");
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_write_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("listing.txt");
        let config = Config {
            output: Some(target.clone()),
            ..Default::default()
        };

        let written = emit("a\nb\n", &config).unwrap();
        assert_eq!(written, Some(target.clone()));
        assert_eq!(fs::read_to_string(&target).unwrap(), "a\nb\n");
    }

    #[test]
    fn test_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("listing.txt");
        fs::write(&target, "old content that is longer").unwrap();
        let config = Config {
            output: Some(target.clone()),
            ..Default::default()
        };

        emit("new", &config).unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), "new");
    }

    #[test]
    fn test_compress_appends_suffix() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("listing.json");
        let config = Config {
            output: Some(target.clone()),
            compress: true,
            ..Default::default()
        };

        let written = emit("{}\n", &config).unwrap().unwrap();
        assert_eq!(written, temp_dir.path().join("listing.json.gz"));
        assert_eq!(fs::read_to_string(&written).unwrap(), "{}\n");
        assert!(!target.exists());
    }

    #[test]
    fn test_unwritable_target() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("no/such/dir/out.txt");
        let config = Config {
            output: Some(target.clone()),
            ..Default::default()
        };

        match emit("x", &config) {
            Err(Error::Output { path, .. }) => assert_eq!(path, target),
            other => panic!("expected output error, got {:?}", other),
        }
    }
}
