//! Keyword emphasis.
//!
//! Wraps vocabulary terms in `**` wherever they occur as whole words in
//! prose. Text that is already emphasized, inline code, link destinations,
//! autolinks and bare URLs are copied through untouched, as is everything
//! inside a fenced block. A term that touches a `*` is left alone, which is
//! what keeps the pass idempotent.

use std::borrow::Cow;

use super::fence::FenceState;

/// Marker placed on both sides of an emphasized term.
pub const MARKER: &str = "**";

/// Emphasize vocabulary terms on every line outside fenced blocks.
pub fn emphasize_document(doc: &str, vocabulary: &[&str]) -> String {
    let mut fence = FenceState::default();
    doc.split('\n')
        .map(|line| {
            if fence.observe(line) {
                Cow::Borrowed(line)
            } else {
                emphasize_line(line, vocabulary)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Emphasize vocabulary terms on a single line of prose.
///
/// Matches are whole-word and non-overlapping; at a given position the
/// earliest vocabulary entry wins.
///
/// # Examples
///
/// ```
/// use notemark::markdown::{KEYWORDS, emphasize_line};
///
/// assert_eq!(emphasize_line("Install Docker on Linux", KEYWORDS), "Install **Docker** on **Linux**");
/// assert_eq!(emphasize_line("**Docker** is bold", KEYWORDS), "**Docker** is bold");
/// assert_eq!(emphasize_line("run `npm install`", KEYWORDS), "run `npm install`");
/// ```
pub fn emphasize_line<'a>(line: &'a str, vocabulary: &[&str]) -> Cow<'a, str> {
    let mut result: Option<String> = None;
    let mut copied = 0;
    let mut pos = 0;

    while pos < line.len() {
        let rest = &line[pos..];

        if let Some(len) = protected_span(rest) {
            pos += len;
            continue;
        }

        if let Some(term) = term_at(line, pos, vocabulary) {
            let out = result.get_or_insert_with(|| String::with_capacity(line.len() + 16));
            out.push_str(&line[copied..pos]);
            out.push_str(MARKER);
            out.push_str(term);
            out.push_str(MARKER);
            pos += term.len();
            copied = pos;
            continue;
        }

        pos += rest.chars().next().map_or(1, char::len_utf8);
    }

    match result {
        Some(mut out) => {
            out.push_str(&line[copied..]);
            Cow::Owned(out)
        }
        None => Cow::Borrowed(line),
    }
}

/// Length of the protected span starting at the head of `rest`, if any.
///
/// An unterminated `**` or backtick run protects only itself.
fn protected_span(rest: &str) -> Option<usize> {
    if let Some(after) = rest.strip_prefix(MARKER) {
        return Some(match after.find(MARKER) {
            Some(end) => MARKER.len() + end + MARKER.len(),
            None => MARKER.len(),
        });
    }

    if rest.starts_with('`') {
        let ticks = backtick_run(rest);
        return Some(ticks + code_span_len(&rest[ticks..], ticks).unwrap_or(0));
    }

    if let Some(after) = rest.strip_prefix("](") {
        return Some(match after.find(')') {
            Some(end) => 2 + end + 1,
            None => 2,
        });
    }

    if rest.starts_with('<')
        && let Some(end) = rest.find('>')
        && end > 1
        && !rest[1..end].contains(char::is_whitespace)
    {
        return Some(end + 1);
    }

    if rest.starts_with("http://") || rest.starts_with("https://") {
        return Some(rest.find(char::is_whitespace).unwrap_or(rest.len()));
    }

    None
}

fn backtick_run(text: &str) -> usize {
    text.bytes().take_while(|&b| b == b'`').count()
}

/// Bytes up to and including the backtick run of exactly `ticks` that closes
/// an inline code span.
fn code_span_len(body: &str, ticks: usize) -> Option<usize> {
    let mut pos = 0;
    while let Some(offset) = body[pos..].find('`') {
        let start = pos + offset;
        let run = backtick_run(&body[start..]);
        if run == ticks {
            return Some(start + run);
        }
        pos = start + run;
    }
    None
}

/// The vocabulary term starting exactly at `pos`, if it stands alone.
fn term_at<'v>(line: &str, pos: usize, vocabulary: &[&'v str]) -> Option<&'v str> {
    if line[..pos].chars().next_back().is_some_and(blocks_term) {
        return None;
    }
    let rest = &line[pos..];
    vocabulary.iter().copied().find(|term| {
        rest.starts_with(term) && !rest[term.len()..].chars().next().is_some_and(blocks_term)
    })
}

/// Characters that may not touch a term: word characters and emphasis.
fn blocks_term(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '*'
}
