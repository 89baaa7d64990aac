//! Non-breaking space cleanup.
//!
//! French typography puts no-break spaces before `:`, `;`, `?` and `!`;
//! word processors also sprinkle them elsewhere. In Markdown they only get in
//! the way of search and diffing.

use std::borrow::Cow;

/// Characters replaced by an ordinary space.
pub const NBSP_VARIANTS: &[char] = &[
    '\u{00A0}', // NO-BREAK SPACE
    '\u{202F}', // NARROW NO-BREAK SPACE
];

/// Result of [`normalize_whitespace`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized<'a> {
    pub text: Cow<'a, str>,
    /// Number of characters replaced.
    pub replacements: usize,
}

/// Replace every non-breaking space variant with `' '`.
///
/// # Examples
///
/// ```
/// use notemark::normalize_whitespace;
///
/// let result = normalize_whitespace("Bonjour\u{202F}!");
/// assert_eq!(result.text, "Bonjour !");
/// assert_eq!(result.replacements, 1);
/// ```
pub fn normalize_whitespace(text: &str) -> Normalized<'_> {
    let replacements = text.chars().filter(|c| NBSP_VARIANTS.contains(c)).count();
    if replacements == 0 {
        return Normalized {
            text: Cow::Borrowed(text),
            replacements,
        };
    }

    let text = text
        .chars()
        .map(|c| if NBSP_VARIANTS.contains(&c) { ' ' } else { c })
        .collect();
    Normalized {
        text: Cow::Owned(text),
        replacements,
    }
}
