//! Error types for corpus I/O.
//!
//! The transforms themselves are total and never fail; only reading and
//! writing documents can.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading or writing a corpus.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("directory not found: {}", .0.display())]
    MissingDirectory(PathBuf),
}

impl Error {
    /// Attach a path to an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
