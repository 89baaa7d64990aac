//! Small text helpers shared by the decoder, the canonicalizer and the
//! corpus layer.

use std::borrow::Cow;

/// Decode bytes read from disk to a string.
///
/// This function:
/// 1. First tries UTF-8 (handles BOM automatically via encoding_rs)
/// 2. Falls back to Windows-1252 (the code page legacy notes were saved in)
///
/// Uses `Cow<str>` to avoid allocation when the input is valid UTF-8.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(decode_text("Hello, World!".as_bytes()), "Hello, World!");
/// assert_eq!(decode_text(b"caf\xe9"), "café");
/// ```
pub fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    // Try UTF-8 first (handles BOM automatically)
    let (result, _encoding, malformed) = encoding_rs::UTF_8.decode(bytes);

    if !malformed {
        return result;
    }

    let (result, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
    result
}

/// Turn CR LF and lone CR into LF.
pub fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}

/// Collapse every run of three or more newlines to exactly two.
///
/// Paragraph breaks survive, excess vertical space does not. Lines that hold
/// only spaces are not newlines and therefore break a run.
pub fn collapse_blank_lines(text: &str) -> Cow<'_, str> {
    if !text.contains("\n\n\n") {
        return Cow::Borrowed(text);
    }

    let mut result = String::with_capacity(text.len());
    let mut run = 0;
    for c in text.chars() {
        if c == '\n' {
            run += 1;
            if run > 2 {
                continue;
            }
        } else {
            run = 0;
        }
        result.push(c);
    }
    Cow::Owned(result)
}

/// True when a line holds nothing but whitespace.
#[inline]
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
