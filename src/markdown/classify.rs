//! Per-line classification.
//!
//! Every line is classified exactly once and the canonicalizer dispatches on
//! the result. Classification is context free; whether a fence is open is
//! the scanner's business.

use super::fence::FenceMarker;

/// Characters that make up a visual separator run.
const SEPARATOR_CHARS: &[char] = &['-', '\u{2013}', '\u{2014}', '_'];

/// Minimum length of a separator run.
const SEPARATOR_MIN_LEN: usize = 5;

/// What a single line of markup is, before any context is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Opens or closes a fenced block.
    Fence(FenceMarker),
    /// Five or more dashes, en/em dashes or underscores.
    Separator,
    /// `$ command`; carries the command without the prompt.
    Prompt(&'a str),
    /// A line holding a lone `#`.
    SyntheticHeading,
    /// `#`+ then whitespace then a title; carries the trimmed title.
    Heading(&'a str),
    Plain,
}

impl LineKind<'_> {
    /// The fence marker, when this line is one.
    pub fn fence_marker(&self) -> Option<FenceMarker> {
        match self {
            LineKind::Fence(marker) => Some(*marker),
            _ => None,
        }
    }
}

/// Classify a line.
///
/// # Examples
///
/// ```
/// use notemark::markdown::{LineKind, classify};
///
/// assert_eq!(classify("## Setup"), LineKind::Heading("Setup"));
/// assert_eq!(classify("$ ls -la"), LineKind::Prompt("ls -la"));
/// assert_eq!(classify("-------"), LineKind::Separator);
/// assert_eq!(classify("#"), LineKind::SyntheticHeading);
/// assert_eq!(classify("#hashtag"), LineKind::Plain);
/// ```
pub fn classify(line: &str) -> LineKind<'_> {
    if let Some(marker) = FenceMarker::parse(line) {
        return LineKind::Fence(marker);
    }
    if is_separator(line) {
        return LineKind::Separator;
    }
    if let Some(command) = prompt_command(line) {
        return LineKind::Prompt(command);
    }
    if line.trim() == "#" {
        return LineKind::SyntheticHeading;
    }
    if let Some(title) = heading_title(line) {
        return LineKind::Heading(title);
    }
    LineKind::Plain
}

fn is_separator(line: &str) -> bool {
    let run = line.trim_end();
    run.chars().count() >= SEPARATOR_MIN_LEN && run.chars().all(|c| SEPARATOR_CHARS.contains(&c))
}

fn prompt_command(line: &str) -> Option<&str> {
    let rest = line.strip_prefix('$')?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    Some(rest.trim())
}

fn heading_title(line: &str) -> Option<&str> {
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    if hashes == 0 {
        return None;
    }
    let rest = &line[hashes..];
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let title = rest.trim();
    (!title.is_empty()).then_some(title)
}

/// The title a lone `#` may adopt from `line`.
///
/// Any non-blank line qualifies unless it starts with `#`, so prompts,
/// fences and separators can all become titles.
pub fn adoptable_title(line: &str) -> Option<&str> {
    let title = line.trim();
    if title.is_empty() || title.starts_with('#') {
        return None;
    }
    Some(title)
}
