//! Code fence recognition and tracking.
//!
//! A fence opens on any line whose trimmed text starts with three or more
//! backticks and closes on a line made only of at least as many backticks.
//! Everything in between is left verbatim by every pass.

/// A line that starts with a backtick fence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FenceMarker {
    /// Length of the leading backtick run.
    pub ticks: usize,
    /// True when the line holds nothing but the backticks (no info string).
    pub bare: bool,
}

impl FenceMarker {
    /// Recognize a fence delimiter line.
    pub fn parse(line: &str) -> Option<Self> {
        let trimmed = line.trim();
        let ticks = trimmed.bytes().take_while(|&b| b == b'`').count();
        if ticks < 3 {
            return None;
        }
        Some(FenceMarker {
            ticks,
            bare: ticks == trimmed.len(),
        })
    }
}

/// Whether the scan is currently inside a fenced block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FenceState {
    open: Option<usize>,
}

impl FenceState {
    /// True while inside a fenced block.
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Advance past a line given its fence marker, if any.
    ///
    /// Returns true when the line is a delimiter or fenced content, i.e. when
    /// no other rule may touch it.
    pub fn advance(&mut self, marker: Option<FenceMarker>) -> bool {
        match (self.open, marker) {
            (None, None) => false,
            (None, Some(marker)) => {
                self.open = Some(marker.ticks);
                true
            }
            (Some(open), Some(marker)) if marker.bare && marker.ticks >= open => {
                self.open = None;
                true
            }
            (Some(_), _) => true,
        }
    }

    /// Advance past a raw line.
    pub fn observe(&mut self, line: &str) -> bool {
        self.advance(FenceMarker::parse(line))
    }
}

/// Calculate the minimum fence length needed for a code block.
///
/// Returns the smallest number of fence characters (at least 3) that
/// doesn't appear as a run in the content.
///
/// # Examples
///
/// ```
/// use notemark::markdown::calculate_fence_length;
///
/// // Normal content needs 3 backticks
/// assert_eq!(calculate_fence_length("ls -la", '`'), 3);
///
/// // Content with 3 backticks needs 4
/// assert_eq!(calculate_fence_length("echo ```", '`'), 4);
/// ```
pub fn calculate_fence_length(content: &str, fence_char: char) -> usize {
    let mut max_run = 0;
    let mut current_run = 0;

    for c in content.chars() {
        if c == fence_char {
            current_run += 1;
            max_run = max_run.max(current_run);
        } else {
            current_run = 0;
        }
    }

    max_run.max(2) + 1
}
