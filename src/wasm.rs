//! WASM bindings for in-browser note conversion.
//!
//! The pure transforms are exposed to JavaScript via wasm-bindgen; file
//! access stays on the native side.

use wasm_bindgen::prelude::*;

use crate::markdown::canonicalize;
use crate::rtf::decode;
use crate::whitespace::normalize_whitespace;

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Decode an RTF document to Markdown text.
#[wasm_bindgen(js_name = decodeRtf)]
pub fn decode_rtf(source: &str) -> String {
    decode(source)
}

/// Canonicalize a Markdown document.
///
/// `title` is used only when the document has no heading.
#[wasm_bindgen(js_name = canonicalizeMarkdown)]
pub fn canonicalize_markdown(text: &str, title: &str) -> String {
    canonicalize(text, title)
}

/// Replace no-break spaces with ordinary spaces.
#[wasm_bindgen(js_name = normalizeWhitespace)]
pub fn normalize_whitespace_js(text: &str) -> String {
    normalize_whitespace(text).text.into_owned()
}
