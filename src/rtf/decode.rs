//! The full RTF → text pipeline.

use crate::util::{collapse_blank_lines, normalize_line_endings};

use super::control::strip_control_words;
use super::escape::decode_escapes;

/// Convert an RTF document to plain text with Markdown-style headings.
///
/// The passes run in a fixed order and each one assumes the previous ones
/// already ran:
///
/// 1. `\'hh` escapes are decoded through Windows-1252
/// 2. `\par`, `\line` and `\page` become newlines
/// 3. every other control word is removed
/// 4. `{` and `}` are removed
/// 5. CR LF and lone CR become LF
/// 6. runs of 3+ newlines collapse to 2
/// 7. trailing whitespace is stripped from every line
/// 8. leading and trailing blank lines are stripped from the document
/// 9. lines holding a lone `\` are dropped, one trailing `\` is stripped
/// 10. everything before the first `#` line is discarded
/// 11. runs of 3+ newlines collapse to 2 again
/// 12. the result ends with exactly one newline
///
/// Never fails: unknown control words vanish and undefined bytes become
/// U+FFFD. A document with no text at all decodes to the empty string
/// rather than a lone newline.
///
/// # Examples
///
/// ```
/// use notemark::rtf::decode;
///
/// let rtf = r"{\rtf1\ansi{\fonttbl\f0 Helvetica;}\par\f0 # Title\par\par Body\par}";
/// assert_eq!(decode(rtf), "# Title\n\nBody\n");
/// ```
pub fn decode(source: &str) -> String {
    let text = decode_escapes(source);
    let text = strip_control_words(&text);
    let text = normalize_line_endings(&text);
    let text = collapse_blank_lines(&text);
    let text = trim_line_ends(&text);
    let text = text.trim_matches(|c| c == '\n' || c == ' ').trim();

    let lines = drop_continuations(text);
    let body = skip_front_matter(&lines);
    let joined = body.join("\n");
    let text = collapse_blank_lines(&joined);

    let text = text.trim();
    if text.is_empty() {
        String::new()
    } else {
        format!("{text}\n")
    }
}

fn trim_line_ends(text: &str) -> String {
    text.split('\n')
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Drop stray `\` lines and strip one trailing `\` from the others.
///
/// A backslash at the end of a source line is RTF's soft line break; after
/// control words are gone it is the only thing left of it.
fn drop_continuations(text: &str) -> Vec<&str> {
    text.split('\n')
        .filter(|line| line.trim() != "\\")
        .map(|line| match line.strip_suffix('\\') {
            Some(stripped) => stripped.trim_end(),
            None => line,
        })
        .collect()
}

/// Discard the front matter that precedes the first heading line.
///
/// Font tables, color tables and generator names leave residue at the top of
/// the decoded text; the real body starts at the first `#`.
fn skip_front_matter<'a, 'b>(lines: &'b [&'a str]) -> &'b [&'a str] {
    match lines
        .iter()
        .position(|line| line.trim_start().starts_with('#'))
    {
        Some(first) => &lines[first..],
        None => lines,
    }
}
