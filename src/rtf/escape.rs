//! Hex escape decoding (`\'hh`).
//!
//! RTF writes every byte outside 7-bit ASCII as a backslash, an apostrophe and
//! two hex digits. The byte is interpreted in the document's ANSI code page,
//! which for the notes corpus is always Windows-1252.

use std::borrow::Cow;

use memchr::memchr;

/// Character substituted for bytes the code page leaves undefined.
pub const REPLACEMENT: char = '\u{FFFD}';

/// Decode a single Windows-1252 byte.
///
/// Bytes 0x81, 0x8D, 0x8F, 0x90 and 0x9D have no assignment in the code
/// page. encoding_rs maps them to C1 controls; they are reported as
/// [`REPLACEMENT`] instead so they show up in the output.
pub fn decode_legacy_byte(byte: u8) -> char {
    let bytes = [byte];
    let (decoded, _) = encoding_rs::WINDOWS_1252.decode_without_bom_handling(&bytes);
    match decoded.chars().next() {
        Some(c) if ('\u{80}'..='\u{9F}').contains(&c) => REPLACEMENT,
        Some(c) => c,
        None => REPLACEMENT,
    }
}

/// Replace every `\'hh` escape with the character it encodes.
///
/// Escapes with fewer than two hex digits are left untouched. Returns the
/// input unchanged (borrowed) when it holds no escapes.
///
/// # Examples
///
/// ```
/// use notemark::rtf::decode_escapes;
///
/// assert_eq!(decode_escapes(r"caf\'e9"), "café");
/// assert_eq!(decode_escapes(r"\'93quoted\'94"), "\u{201C}quoted\u{201D}");
/// ```
pub fn decode_escapes(source: &str) -> Cow<'_, str> {
    let bytes = source.as_bytes();
    let mut result: Option<String> = None;
    let mut copied = 0;
    let mut pos = 0;

    while let Some(offset) = memchr(b'\\', &bytes[pos..]) {
        let start = pos + offset;
        match escape_at(bytes, start) {
            Some(byte) => {
                let out = result.get_or_insert_with(|| String::with_capacity(source.len()));
                out.push_str(&source[copied..start]);
                out.push(decode_legacy_byte(byte));
                copied = start + 4;
                pos = start + 4;
            }
            None => pos = start + 1,
        }
    }

    match result {
        Some(mut out) => {
            out.push_str(&source[copied..]);
            Cow::Owned(out)
        }
        None => Cow::Borrowed(source),
    }
}

/// Parse the escape starting at `start` (which holds a backslash).
fn escape_at(bytes: &[u8], start: usize) -> Option<u8> {
    if bytes.get(start + 1) != Some(&b'\'') {
        return None;
    }
    let hi = hex_value(*bytes.get(start + 2)?)?;
    let lo = hex_value(*bytes.get(start + 3)?)?;
    Some((hi << 4) | lo)
}

/// Parse a single hex digit
fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curly_quote_escape() {
        assert_eq!(decode_escapes(r"\'93"), "\u{201C}");
        assert_eq!(decode_escapes(r"\'94"), "\u{201D}");
    }

    #[test]
    fn test_dash_and_accents() {
        assert_eq!(decode_escapes(r"a \'97 b"), "a \u{2014} b");
        assert_eq!(decode_escapes(r"\'e0 la cr\'e8me"), "à la crème");
    }

    #[test]
    fn test_uppercase_hex() {
        assert_eq!(decode_escapes(r"\'E9t\'E9"), "été");
    }

    #[test]
    fn test_undefined_byte_becomes_replacement() {
        assert_eq!(decode_escapes(r"x\'81y"), "x\u{FFFD}y");
        assert_eq!(decode_escapes(r"\'9d"), "\u{FFFD}");
    }

    #[test]
    fn test_incomplete_escape_is_kept() {
        assert_eq!(decode_escapes(r"\'9"), r"\'9");
        assert_eq!(decode_escapes(r"\'zz"), r"\'zz");
        assert_eq!(decode_escapes("\\"), "\\");
    }

    #[test]
    fn test_doubled_backslash_before_escape() {
        // The second backslash starts the escape
        assert_eq!(decode_escapes(r"\\'41"), "\\A");
    }

    #[test]
    fn test_control_words_untouched() {
        assert_eq!(decode_escapes(r"\par \b bold"), r"\par \b bold");
        assert!(matches!(decode_escapes(r"\par"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_non_ascii_around_escape() {
        assert_eq!(decode_escapes(r"é\'e9é"), "ééé");
    }

    #[test]
    fn test_decode_legacy_byte_ascii() {
        assert_eq!(decode_legacy_byte(b'A'), 'A');
        assert_eq!(decode_legacy_byte(0x80), '\u{20AC}');
        assert_eq!(decode_legacy_byte(0xA0), '\u{00A0}');
    }
}
