//! Control word rewriting and group delimiter removal.
//!
//! A control word is a backslash, one or more ASCII letters, an optional
//! signed numeric parameter and an optional single delimiting space. The
//! letters are matched greedily, so `\parent` is one word and never `\par`
//! followed by `ent`.

use std::borrow::Cow;

use memchr::memchr3;
use tracing::trace;

/// Control words that end a line of text.
pub const LINE_BREAK_WORDS: &[&str] = &["par", "line", "page"];

/// A control word located in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlWord<'a> {
    /// The letters of the word, without the backslash.
    pub name: &'a str,
    /// Bytes consumed, from the backslash through the delimiter.
    pub len: usize,
}

impl ControlWord<'_> {
    /// Whether this word is rewritten to a newline rather than dropped.
    pub fn is_line_break(&self) -> bool {
        LINE_BREAK_WORDS.contains(&self.name)
    }
}

/// Parse the control word whose backslash sits at `start`.
///
/// Returns `None` for control symbols (`\\`, `\{`, `\'`, ...) and for a
/// trailing lone backslash; those are left as literal text.
pub fn control_word_at(text: &str, start: usize) -> Option<ControlWord<'_>> {
    let bytes = text.as_bytes();
    debug_assert_eq!(bytes.get(start), Some(&b'\\'));

    let name_start = start + 1;
    let mut i = name_start;
    while i < bytes.len() && bytes[i].is_ascii_alphabetic() {
        i += 1;
    }
    if i == name_start {
        return None;
    }
    let name = &text[name_start..i];

    if bytes.get(i) == Some(&b'-') {
        i += 1;
    }
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if bytes.get(i) == Some(&b' ') {
        i += 1;
    }

    Some(ControlWord {
        name,
        len: i - start,
    })
}

/// Rewrite line-break control words to `\n`, drop every other control word,
/// and remove `{` / `}` group delimiters.
///
/// Control symbols such as `\\` or `\~` survive as literal text. Unknown
/// words vanish; each one is reported at `trace` level.
///
/// # Examples
///
/// ```
/// use notemark::rtf::strip_control_words;
///
/// assert_eq!(strip_control_words(r"{\b bold}\par next"), "bold\nnext");
/// assert_eq!(strip_control_words(r"\parent"), "");
/// ```
pub fn strip_control_words(text: &str) -> Cow<'_, str> {
    let bytes = text.as_bytes();
    let mut result: Option<String> = None;
    let mut copied = 0;
    let mut pos = 0;

    while let Some(offset) = memchr3(b'\\', b'{', b'}', &bytes[pos..]) {
        let start = pos + offset;

        if bytes[start] != b'\\' {
            let out = result.get_or_insert_with(|| String::with_capacity(text.len()));
            out.push_str(&text[copied..start]);
            copied = start + 1;
            pos = start + 1;
            continue;
        }

        let Some(word) = control_word_at(text, start) else {
            pos = start + 1;
            continue;
        };

        let out = result.get_or_insert_with(|| String::with_capacity(text.len()));
        out.push_str(&text[copied..start]);
        if word.is_line_break() {
            out.push('\n');
        } else {
            trace!(word = word.name, offset = start, "dropping control word");
        }
        copied = start + word.len;
        pos = copied;
    }

    match result {
        Some(mut out) => {
            out.push_str(&text[copied..]);
            Cow::Owned(out)
        }
        None => Cow::Borrowed(text),
    }
}
