use lstree::pattern::{NameFilter, matches, matches_exclude};
use lstree::utils::{format_size, relative_path};
use std::path::{Path, PathBuf};

#[test]
fn test_format_size() {
    assert_eq!(format_size(500), "500 B");
    assert_eq!(format_size(2048), "2.0 KB");
    assert_eq!(format_size(3 * 1024 * 1024), "3.0 MB");
    assert_eq!(format_size(1024 * 1024 + 512 * 1024), "1.5 MB");
}

#[test]
fn test_relative_path() {
    let root = PathBuf::from("/home/user");
    assert_eq!(
        relative_path(&root, Path::new("/home/user/documents")),
        PathBuf::from("documents")
    );
    assert_eq!(
        relative_path(&root, Path::new("/home/user/documents/work/project")),
        PathBuf::from("documents/work/project")
    );
    assert_eq!(
        relative_path(&root, Path::new("/elsewhere/file")),
        PathBuf::from("/elsewhere/file")
    );
}

#[test]
fn test_wildcard_matching() {
    assert!(matches("file.txt", "*.txt"));
    assert!(!matches("file.txt", "*.lua"));
    assert!(matches("a", "?"));
    assert!(!matches("ab", "?"));
    assert!(matches("x.go", "*.txt, *.go"));
    assert!(matches("release-1.2.tar.xz", "release-?.?.tar.*"));
}

#[test]
fn test_empty_and_invalid_specs() {
    for name in ["", "x", "Cargo.toml", "a b c"] {
        assert!(matches(name, ""));
        assert!(!matches(name, "regex:*"));
        assert!(!matches_exclude(name, ""));
    }
}

#[test]
fn test_regex_spec() {
    assert!(matches("init.lua", r"regex:.*\.lua"));
    assert!(!matches("init.lua.orig", r"regex:.*\.lua"));
    assert!(matches_exclude("node_modules", "regex:node_.*|target"));
    assert!(matches_exclude("target", "regex:node_.*|target"));
}

#[test]
fn test_name_filter_matches_helper() {
    let specs = ["", "*.rs", "*.rs, *.toml", "regex:[a-z]+\\.rs", "regex:("];
    let names = ["main.rs", "Cargo.toml", "README", "x.RS"];

    for spec in specs {
        let filter = NameFilter::new(spec);
        for name in names {
            assert_eq!(filter.is_match(name), matches(name, spec), "{} / {}", spec, name);
        }
    }
}
