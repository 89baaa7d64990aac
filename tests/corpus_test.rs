//! Corpus job tests.
//!
//! Each test builds a small notes directory in a temp dir and runs one of
//! the batch jobs over it.

use std::fs;
use std::path::{Path, PathBuf};

use notemark::corpus::{self, CorpusConfig, markup_files};
use notemark::Error;
use tempfile::TempDir;

fn write(root: &Path, relative: &str, contents: impl AsRef<[u8]>) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

fn read(root: &Path, relative: &str) -> String {
    fs::read_to_string(root.join(relative)).unwrap()
}

fn paths(items: &[&str]) -> Vec<PathBuf> {
    items.iter().map(PathBuf::from).collect()
}

// ============================================================================
// Legacy Conversion
// ============================================================================

#[test]
fn test_convert_legacy_writes_topic_folders() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(
        root,
        "docs-rtf/doc-linux.rtf",
        r"{\rtf1\ansi{\fonttbl\f0 Helvetica;}\par # Linux\par\par Some notes\par}",
    );
    write(root, "docs-rtf/doc-.rtf", r"{\rtf1 # Misc\par}");
    write(root, "docs-rtf/readme.txt", "not a source");

    let report = corpus::convert_legacy(&CorpusConfig::new(root)).unwrap();

    assert_eq!(report.written, paths(&["Docs/Docs.md", "Linux/Linux.md"]));
    assert!(report.skipped.is_empty());
    assert_eq!(read(root, "Linux/Linux.md"), "# Linux\n\nSome notes\n");
    assert_eq!(read(root, "Docs/Docs.md"), "# Misc\n");
}

#[test]
fn test_convert_legacy_reads_windows_1252_bytes() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    // 0xE9 is 'é' in Windows-1252 and invalid as UTF-8
    write(root, "docs-rtf/doc-cafe.rtf", b"# Caf\xE9\\par menu");

    corpus::convert_legacy(&CorpusConfig::new(root)).unwrap();

    assert_eq!(read(root, "Cafe/Cafe.md"), "# Caf\u{e9}\nmenu\n");
}

#[test]
fn test_convert_legacy_custom_source_dir() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "legacy/git.rtf", r"# Git\par");

    let config = CorpusConfig::new(root).with_source_dir(root.join("legacy"));
    let report = corpus::convert_legacy(&config).unwrap();

    assert_eq!(report.written, paths(&["Git/Git.md"]));
}

#[test]
fn test_convert_legacy_dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "docs-rtf/doc-linux.rtf", r"# Linux\par");

    let config = CorpusConfig::new(root).with_dry_run(true);
    let report = corpus::convert_legacy(&config).unwrap();

    assert_eq!(report.written, paths(&["Linux/Linux.md"]));
    assert!(!root.join("Linux").exists());
}

#[test]
fn test_convert_legacy_reports_failures_relative_to_root() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "docs-rtf/doc-linux.rtf", r"# Linux\par");
    write(root, "docs-rtf/doc-shell.rtf", r"# Shell\par");
    // A plain file where the topic folder should go
    write(root, "Linux", "in the way");

    let report = corpus::convert_legacy(&CorpusConfig::new(root)).unwrap();

    assert_eq!(report.written, paths(&["Shell/Shell.md"]));
    assert_eq!(report.skipped, paths(&["docs-rtf/doc-linux.rtf"]));
}

#[test]
fn test_convert_legacy_missing_source_dir() {
    let dir = TempDir::new().unwrap();
    let err = corpus::convert_legacy(&CorpusConfig::new(dir.path())).unwrap_err();
    assert!(matches!(err, Error::MissingDirectory(_)));
}

// ============================================================================
// Discovery
// ============================================================================

#[test]
fn test_markup_discovery_excludes() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "README.md", "# Readme");
    write(root, "Linux/README.md", "# Nested readme");
    write(root, "Linux/Linux.md", "# Linux");
    write(root, "scripts/notes.md", "# Script notes");
    write(root, "docs-rtf/stale.md", "# Stale");
    write(root, ".git/info.md", "# Git internals");
    write(root, "Shell/Shell.MD", "# Shell");
    write(root, "Shell/notes.txt", "not markdown");

    let config = CorpusConfig::new(root);
    let found: Vec<PathBuf> = markup_files(root, &config.exclude)
        .unwrap()
        .into_iter()
        .map(|p| p.strip_prefix(root).unwrap().to_path_buf())
        .collect();

    assert_eq!(
        found,
        paths(&["Linux/Linux.md", "Linux/README.md", "README.md", "Shell/Shell.MD"])
    );
}

// ============================================================================
// Restyling
// ============================================================================

#[test]
fn test_restyle_rewrites_only_changed_files() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "Tools/Tools.md", "### Setup\nUse Git\n");
    write(root, "Notes/Notes.md", "# Notes\n\nPlain text\n");
    write(root, "home-lab/todo.md", "plain words\n");
    write(root, "scripts/build.md", "### untouched\n");
    write(root, "README.md", "### untouched\n");

    let report = corpus::restyle(&CorpusConfig::new(root)).unwrap();

    assert_eq!(report.scanned, 3);
    assert_eq!(report.changed, paths(&["Tools/Tools.md", "home-lab/todo.md"]));
    assert_eq!(read(root, "Tools/Tools.md"), "# Setup\n\nUse **Git**\n");
    assert_eq!(read(root, "home-lab/todo.md"), "# home lab\n\nplain words\n");
    assert_eq!(read(root, "Notes/Notes.md"), "# Notes\n\nPlain text\n");
    assert_eq!(read(root, "scripts/build.md"), "### untouched\n");
    assert_eq!(read(root, "README.md"), "### untouched\n");
}

#[test]
fn test_restyle_twice_is_noop() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "Docker/Docker.md", "#\nDocker\n$ docker ps\n-----\nend\n");

    let config = CorpusConfig::new(root);
    let first = corpus::restyle(&config).unwrap();
    let second = corpus::restyle(&config).unwrap();

    assert_eq!(first.changed.len(), 1);
    assert!(second.changed.is_empty());
}

#[test]
fn test_restyle_custom_exclude() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "archive/Old.md", "### Old\n");
    write(root, "scripts/Tool.md", "### Tool\n");

    let config = CorpusConfig::new(root).with_exclude(["archive"]);
    let report = corpus::restyle(&config).unwrap();

    assert_eq!(report.changed, paths(&["scripts/Tool.md"]));
    assert_eq!(read(root, "archive/Old.md"), "### Old\n");
}

#[test]
fn test_restyle_dry_run() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "Tools/Tools.md", "### Setup\n");

    let report = corpus::restyle(&CorpusConfig::new(root).with_dry_run(true)).unwrap();

    assert_eq!(report.changed.len(), 1);
    assert_eq!(read(root, "Tools/Tools.md"), "### Setup\n");
}

// ============================================================================
// Whitespace Cleanup
// ============================================================================

#[test]
fn test_clean_whitespace_counts_replacements() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "Fr/Fr.md", "Bonjour\u{202F}!\nQuoi\u{00A0}?\u{00A0}\n");
    write(root, "En/En.md", "Hello!\n");

    let report = corpus::clean_whitespace(&CorpusConfig::new(root)).unwrap();

    assert_eq!(report.scanned, 2);
    assert_eq!(report.changed, paths(&["Fr/Fr.md"]));
    assert_eq!(report.replacements, 3);
    assert_eq!(read(root, "Fr/Fr.md"), "Bonjour !\nQuoi ? \n");
}

#[test]
fn test_clean_whitespace_includes_root_readme() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "README.md", "Notes\u{00A0}:\n");
    write(root, "scripts/notes.md", "a\u{00A0}b");

    let report = corpus::clean_whitespace(&CorpusConfig::new(root)).unwrap();

    assert_eq!(report.changed, paths(&["README.md"]));
    assert_eq!(read(root, "README.md"), "Notes :\n");
    assert_eq!(read(root, "scripts/notes.md"), "a\u{00A0}b");
}

#[test]
fn test_clean_whitespace_dry_run() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "Fr/Fr.md", "a\u{00A0}b");

    let report = corpus::clean_whitespace(&CorpusConfig::new(root).with_dry_run(true)).unwrap();

    assert_eq!(report.replacements, 1);
    assert_eq!(read(root, "Fr/Fr.md"), "a\u{00A0}b");
}
