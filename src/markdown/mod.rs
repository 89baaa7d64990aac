//! Markdown canonicalization.
//!
//! Restyles notes that are already Markdown into one house style:
//!
//! - [`classify()`]: one-shot classification of each line into a [`LineKind`]
//! - [`FenceState`]: code fence recognition and tracking
//! - [`canonicalize()`]: the scan that fixes headings, rules and prompt blocks
//! - [`emphasize_document`]: whole-word keyword emphasis outside code
//! - [`KEYWORDS`]: the emphasized vocabulary
//!
//! ## Design Notes
//!
//! - **Heading policy**: the first heading is level 1, every other heading is
//!   level 2. A document with no heading gets one from its caller-supplied title.
//! - **Fences are opaque**: nothing inside a fenced block is rewritten, and
//!   a fence only closes on a bare run at least as long as the one that opened it.
//! - **Idempotence**: every rewrite produces text the same rules leave alone,
//!   so running the canonicalizer over its own output is a no-op.

mod canonicalize;
mod classify;
mod emphasis;
mod fence;
mod keywords;

pub use canonicalize::{
    PROMPT_LANGUAGE, RULE, SECTION_LEVEL, ScanState, TOP_LEVEL, UNTITLED, canonicalize,
};
pub use classify::{LineKind, adoptable_title, classify};
pub use emphasis::{MARKER, emphasize_document, emphasize_line};
pub use fence::{FenceMarker, FenceState, calculate_fence_length};
pub use keywords::KEYWORDS;
