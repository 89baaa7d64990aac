//! Batch jobs over a notes corpus.
//!
//! The corpus is a directory of topic folders, each holding one Markdown
//! document, plus a folder of legacy RTF sources. Every job here is a thin
//! I/O wrapper around one of the pure transforms: read, transform, write
//! back. Documents are independent, so files are processed in parallel.
//!
//! A file that cannot be read or written is logged and reported as skipped;
//! only a missing root or source directory fails the whole job.
//!
//! # Example
//!
//! ```no_run
//! use notemark::corpus::{CorpusConfig, convert_legacy, restyle};
//!
//! let config = CorpusConfig::new("notes").with_dry_run(true);
//! let converted = convert_legacy(&config)?;
//! let styled = restyle(&config)?;
//! println!("{} converted, {} restyled", converted.written.len(), styled.changed.len());
//! # Ok::<(), notemark::Error>(())
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::markdown::canonicalize;
use crate::rtf::decode;
use crate::util::decode_text;
use crate::whitespace::normalize_whitespace;

mod discover;
mod naming;

pub use discover::{
    LEGACY_EXTENSION, MARKUP_EXTENSION, is_root_readme, legacy_sources, markup_files,
};
pub use naming::{output_names, title_from_path};

/// Folder under the root that holds legacy sources.
pub const DEFAULT_SOURCE_DIR: &str = "docs-rtf";

/// Directory names never searched for Markdown.
pub const DEFAULT_EXCLUDES: &[&str] = &[".git", "docs-rtf", "scripts"];

/// Where a corpus lives and how jobs treat it.
#[derive(Debug, Clone)]
pub struct CorpusConfig {
    /// Corpus root; topic folders are created here.
    pub root: PathBuf,
    /// Directory scanned for legacy `.rtf` sources.
    pub source_dir: PathBuf,
    /// Directory names skipped when searching for Markdown.
    pub exclude: Vec<String>,
    /// Compute everything, write nothing.
    pub dry_run: bool,
}

impl CorpusConfig {
    /// Configuration with the default source folder and exclusions.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            source_dir: root.join(DEFAULT_SOURCE_DIR),
            root,
            exclude: DEFAULT_EXCLUDES.iter().map(|s| s.to_string()).collect(),
            dry_run: false,
        }
    }

    pub fn with_source_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.source_dir = dir.into();
        self
    }

    /// Replace the excluded directory names.
    pub fn with_exclude<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// `path` relative to the root, for reporting.
    fn relative(&self, path: &Path) -> PathBuf {
        path.strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.to_path_buf())
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        if self.dry_run {
            debug!(path = %path.display(), "dry run, not writing");
            return Ok(());
        }
        fs::write(path, contents).map_err(|e| Error::io(path, e))?;
        info!(path = %path.display(), "wrote");
        Ok(())
    }
}

/// Outcome of [`convert_legacy`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct ConvertReport {
    /// Markdown files written, relative to the root.
    pub written: Vec<PathBuf>,
    /// Sources that could not be converted.
    pub skipped: Vec<PathBuf>,
}

/// Outcome of [`restyle`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct StyleReport {
    pub scanned: usize,
    /// Files whose content changed, relative to the root.
    pub changed: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

/// Outcome of [`clean_whitespace`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct WhitespaceReport {
    pub scanned: usize,
    /// Files that held at least one no-break space, relative to the root.
    pub changed: Vec<PathBuf>,
    /// Total characters replaced across all files.
    pub replacements: usize,
    pub skipped: Vec<PathBuf>,
}

/// Read a document, accepting UTF-8 or Windows-1252.
pub fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
    Ok(decode_text(&bytes).into_owned())
}

/// Convert every legacy source to `<root>/<Folder>/<Folder>.md`.
///
/// Sources are decoded in parallel and written in name order, so when two
/// sources map to the same folder the later one wins deterministically.
pub fn convert_legacy(config: &CorpusConfig) -> Result<ConvertReport> {
    let sources = legacy_sources(&config.source_dir)?;
    debug!(count = sources.len(), dir = %config.source_dir.display(), "found legacy sources");

    let decoded: Vec<Result<(PathBuf, String)>> = sources
        .par_iter()
        .map(|source| {
            let text = read_text(source)?;
            let stem = source
                .file_stem()
                .map(|s| s.to_string_lossy())
                .unwrap_or_default();
            let (folder, file) = output_names(&stem);
            Ok((config.root.join(folder).join(file), decode(&text)))
        })
        .collect();

    let mut report = ConvertReport::default();
    for (source, outcome) in sources.iter().zip(decoded) {
        let result = outcome.and_then(|(target, markdown)| {
            write_creating_dir(config, &target, &markdown)?;
            Ok(target)
        });
        match result {
            Ok(target) => report.written.push(config.relative(&target)),
            Err(e) => {
                warn!(path = %source.display(), error = %e, "skipping legacy source");
                report.skipped.push(config.relative(source));
            }
        }
    }
    Ok(report)
}

fn write_creating_dir(config: &CorpusConfig, target: &Path, contents: &str) -> Result<()> {
    if !config.dry_run
        && let Some(dir) = target.parent()
    {
        fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
    }
    config.write(target, contents)
}

/// Canonicalize every Markdown file, writing back only those that change.
///
/// The fallback title of each document comes from [`title_from_path`]. A
/// `README.md` directly in the root is not a note and is left alone.
pub fn restyle(config: &CorpusConfig) -> Result<StyleReport> {
    let mut files = markup_files(&config.root, &config.exclude)?;
    files.retain(|path| !is_root_readme(&config.root, path));

    let outcomes: Vec<Result<bool>> = files
        .par_iter()
        .map(|path| {
            let text = read_text(path)?;
            let styled = canonicalize(&text, &title_from_path(path));
            if styled == text {
                debug!(path = %path.display(), "already canonical");
                return Ok(false);
            }
            config.write(path, &styled)?;
            Ok(true)
        })
        .collect();

    let mut report = StyleReport {
        scanned: files.len(),
        ..Default::default()
    };
    for (path, outcome) in files.iter().zip(outcomes) {
        match outcome {
            Ok(true) => report.changed.push(config.relative(path)),
            Ok(false) => {}
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipping document");
                report.skipped.push(config.relative(path));
            }
        }
    }
    Ok(report)
}

/// Replace no-break spaces in every Markdown file, root `README.md` included.
pub fn clean_whitespace(config: &CorpusConfig) -> Result<WhitespaceReport> {
    let files = markup_files(&config.root, &config.exclude)?;

    let outcomes: Vec<Result<usize>> = files
        .par_iter()
        .map(|path| {
            let text = read_text(path)?;
            let normalized = normalize_whitespace(&text);
            if normalized.replacements > 0 {
                config.write(path, &normalized.text)?;
            }
            Ok(normalized.replacements)
        })
        .collect();

    let mut report = WhitespaceReport {
        scanned: files.len(),
        ..Default::default()
    };
    for (path, outcome) in files.iter().zip(outcomes) {
        match outcome {
            Ok(0) => {}
            Ok(count) => {
                report.replacements += count;
                report.changed.push(config.relative(path));
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipping document");
                report.skipped.push(config.relative(path));
            }
        }
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = CorpusConfig::new("/notes");
        assert_eq!(config.source_dir, PathBuf::from("/notes/docs-rtf"));
        assert_eq!(config.exclude, vec![".git", "docs-rtf", "scripts"]);
        assert!(!config.dry_run);
    }

    #[test]
    fn test_config_builders() {
        let config = CorpusConfig::new("/notes")
            .with_source_dir("/legacy")
            .with_exclude(["archive"])
            .with_dry_run(true);
        assert_eq!(config.source_dir, PathBuf::from("/legacy"));
        assert_eq!(config.exclude, vec!["archive"]);
        assert!(config.dry_run);
    }

    #[test]
    fn test_relative_paths() {
        let config = CorpusConfig::new("/notes");
        assert_eq!(
            config.relative(Path::new("/notes/Linux/Linux.md")),
            PathBuf::from("Linux/Linux.md")
        );
        assert_eq!(config.relative(Path::new("/elsewhere/a.md")), PathBuf::from("/elsewhere/a.md"));
    }
}
