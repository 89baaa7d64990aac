//! Legacy RTF decoding.
//!
//! This is not an RTF parser: there is no group stack, no font or color
//! table, no destination handling. The notes being migrated were
//! written as Markdown inside a word processor, so all that has to survive
//! is the text, its line breaks and its non-ASCII characters.
//!
//! - [`decode_escapes`]: `\'hh` byte escapes → Unicode via Windows-1252
//! - [`strip_control_words`]: control words → newline or nothing, braces removed
//! - [`decode()`]: the full ordered pipeline plus line cleanup

mod control;
mod decode;
mod escape;

pub use control::{ControlWord, LINE_BREAK_WORDS, control_word_at, strip_control_words};
pub use decode::decode;
pub use escape::{REPLACEMENT, decode_escapes, decode_legacy_byte};
