//! # notemark
//!
//! Converts a personal knowledge base of technical notes from legacy rich
//! text to Markdown and keeps the Markdown in one consistent house style.
//!
//! ## Features
//!
//! - Decode legacy RTF into plain, line-oriented Markdown text
//! - Canonicalize Markdown: heading levels, separators, shell prompt blocks,
//!   keyword emphasis
//! - Replace no-break spaces left behind by word processors
//! - Batch jobs over a whole notes directory, in parallel
//!
//! ## Quick Start
//!
//! ```
//! use notemark::{canonicalize, decode};
//!
//! let text = decode(r"{\rtf1\ansi\par # Notes\par Use Git daily\par}");
//! assert_eq!(text, "# Notes\nUse Git daily\n");
//!
//! let styled = canonicalize(&text, "Notes");
//! assert_eq!(styled, "# Notes\n\nUse **Git** daily\n");
//! ```
//!
//! Both transforms are pure: they take text and return text. File access
//! lives in [`corpus`].

pub mod corpus;
pub mod error;
pub mod markdown;
pub mod rtf;
pub(crate) mod util;
pub mod whitespace;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use corpus::CorpusConfig;
pub use error::{Error, Result};
pub use markdown::canonicalize;
pub use rtf::decode;
pub use whitespace::{Normalized, normalize_whitespace};
