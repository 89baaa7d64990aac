//! Finding the documents a job operates on.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;
use walkdir::{DirEntry, WalkDir};

use crate::error::{Error, Result};

/// Extension of legacy sources.
pub const LEGACY_EXTENSION: &str = "rtf";
/// Extension of Markdown documents.
pub const MARKUP_EXTENSION: &str = "md";

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(extension))
}

/// Legacy RTF files directly inside `dir`, sorted by path.
pub fn legacy_sources(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(Error::MissingDirectory(dir.to_path_buf()));
    }

    let mut sources = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| Error::io(dir, e))? {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        let path = entry.path();
        if path.is_file() && has_extension(&path, LEGACY_EXTENSION) {
            sources.push(path);
        }
    }
    sources.sort();
    Ok(sources)
}

/// Markdown files under `root`, sorted by path.
///
/// Directories whose name is in `exclude` are not entered. Entries that
/// cannot be read are logged and skipped; only a missing `root` is an error.
pub fn markup_files(root: &Path, exclude: &[String]) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(Error::MissingDirectory(root.to_path_buf()));
    }

    let excluded = |entry: &DirEntry| {
        entry.depth() > 0
            && entry.file_type().is_dir()
            && entry
                .file_name()
                .to_str()
                .is_some_and(|name| exclude.iter().any(|x| x == name))
    };

    let mut files = Vec::new();
    for entry in WalkDir::new(root).into_iter().filter_entry(|e| !excluded(e)) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "skipping unreadable entry");
                continue;
            }
        };
        if entry.file_type().is_file() && has_extension(entry.path(), MARKUP_EXTENSION) {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}

/// True for a `README.md` sitting directly in `root`.
pub fn is_root_readme(root: &Path, path: &Path) -> bool {
    path.parent() == Some(root)
        && path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.eq_ignore_ascii_case("readme.md"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_extension_case_insensitive() {
        assert!(has_extension(Path::new("a/doc-linux.RTF"), "rtf"));
        assert!(has_extension(Path::new("Notes.md"), "md"));
        assert!(!has_extension(Path::new("Notes.markdown"), "md"));
        assert!(!has_extension(Path::new("rtf"), "rtf"));
    }

    #[test]
    fn test_root_readme() {
        let root = Path::new("/corpus");
        assert!(is_root_readme(root, Path::new("/corpus/README.md")));
        assert!(is_root_readme(root, Path::new("/corpus/readme.md")));
        assert!(!is_root_readme(root, Path::new("/corpus/Linux/README.md")));
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_directory_is_skipped() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::TempDir::new().unwrap();
        let root = dir.path();
        let locked = root.join("Locked");
        fs::create_dir_all(root.join("Open")).unwrap();
        fs::create_dir_all(&locked).unwrap();
        fs::write(root.join("Open/Open.md"), "# Open").unwrap();
        fs::write(locked.join("Locked.md"), "# Locked").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        let readable = fs::read_dir(&locked).is_ok();
        let result = markup_files(root, &[]);
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        let files = result.unwrap();
        assert!(files.contains(&root.join("Open/Open.md")));
        // Permission bits do not stop a superuser
        if !readable {
            assert_eq!(files, vec![root.join("Open/Open.md")]);
        }
    }

    #[test]
    fn test_missing_directory() {
        let err = legacy_sources(Path::new("/definitely/not/here")).unwrap_err();
        assert!(matches!(err, Error::MissingDirectory(_)));
    }
}
