//! Markup canonicalization.
//!
//! One forward scan over the lines restructures the document; the result is
//! then collapsed, given a title if it has none, and passed through keyword
//! emphasis. No state outlives a call.

use crate::util::{collapse_blank_lines, is_blank, normalize_line_endings};

use super::classify::{LineKind, adoptable_title, classify};
use super::emphasis::emphasize_document;
use super::fence::{FenceState, calculate_fence_length};
use super::keywords::KEYWORDS;

/// Level of the first heading in a document.
pub const TOP_LEVEL: usize = 1;
/// Level of every heading after the first.
pub const SECTION_LEVEL: usize = 2;
/// Token replacing separator runs.
pub const RULE: &str = "---";
/// Info string of fenced blocks built from prompt lines.
pub const PROMPT_LANGUAGE: &str = "bash";
/// Title used when the caller's fallback title is blank.
pub const UNTITLED: &str = "Untitled";

/// Canonicalize a Markdown document.
///
/// - The first heading becomes level 1, every later heading level 2.
/// - A lone `#` line takes the next prose line as its title.
/// - Separator runs become `---` with one blank line on each side.
/// - Consecutive `$ ` lines become one fenced `bash` block.
/// - Vocabulary terms outside code are wrapped in `**`.
/// - A document without headings gets `# {fallback_title}` on top.
///
/// Fenced blocks are never touched. Applying the function to its own output
/// returns that output unchanged.
///
/// # Examples
///
/// ```
/// use notemark::markdown::canonicalize;
///
/// let text = "### Install\n$ brew install git\n$ git --version\n#### Usage\nUse Git daily.";
/// assert_eq!(
///     canonicalize(text, "Git"),
///     "# Install\n\n```bash\nbrew install git\ngit --version\n```\n\n## Usage\n\nUse **Git** daily.\n"
/// );
/// ```
pub fn canonicalize(text: &str, fallback_title: &str) -> String {
    let text = normalize_line_endings(text);
    let lines: Vec<&str> = text.lines().collect();
    let scanned = Scanner::new(&lines).run();

    let mut doc = scanned.lines.join("\n");
    if !scanned.state.saw_top_heading {
        let title = match fallback_title.trim() {
            "" => UNTITLED,
            title => title,
        };
        doc = format!("{}\n\n{doc}", heading(TOP_LEVEL, title));
    }

    let doc = collapse_blank_lines(&doc);
    let doc = emphasize_document(&doc, KEYWORDS);
    finish(&doc)
}

/// State carried across lines during the scan.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanState {
    pub fence: FenceState,
    pub saw_top_heading: bool,
}

impl ScanState {
    /// Level for the next heading emitted.
    fn next_heading_level(&mut self) -> usize {
        if self.saw_top_heading {
            SECTION_LEVEL
        } else {
            self.saw_top_heading = true;
            TOP_LEVEL
        }
    }
}

/// Output of the restructuring scan.
#[derive(Debug)]
struct Scanned {
    lines: Vec<String>,
    state: ScanState,
}

struct Scanner<'a> {
    lines: &'a [&'a str],
    out: Vec<String>,
    state: ScanState,
}

impl<'a> Scanner<'a> {
    fn new(lines: &'a [&'a str]) -> Self {
        Self {
            lines,
            out: Vec::with_capacity(lines.len() + lines.len() / 4),
            state: ScanState::default(),
        }
    }

    fn run(mut self) -> Scanned {
        let mut i = 0;
        while i < self.lines.len() {
            let line = self.lines[i];
            let kind = classify(line);

            if self.state.fence.advance(kind.fence_marker()) {
                self.out.push(line.to_string());
                i += 1;
                continue;
            }

            i = match kind {
                LineKind::Separator => {
                    self.emit_rule();
                    i + 1
                }
                LineKind::Prompt(_) => self.emit_prompt_block(i),
                LineKind::SyntheticHeading => match self.synthetic_title(i) {
                    Some((title_index, title)) => {
                        self.emit_heading(title);
                        title_index + 1
                    }
                    None => {
                        self.out.push(line.to_string());
                        i + 1
                    }
                },
                LineKind::Heading(title) => {
                    self.emit_heading(title);
                    i + 1
                }
                LineKind::Fence(_) | LineKind::Plain => {
                    self.out.push(line.to_string());
                    i + 1
                }
            };
        }

        Scanned {
            lines: self.out,
            state: self.state,
        }
    }

    /// Find the title for the lone `#` at `index`.
    ///
    /// Blank lines are skipped; the first non-blank line is taken unless it
    /// is itself a heading.
    fn synthetic_title(&self, index: usize) -> Option<(usize, &'a str)> {
        let lines = self.lines;
        let (offset, line) = lines[index + 1..]
            .iter()
            .enumerate()
            .find(|(_, line)| !is_blank(line))?;
        let title = adoptable_title(line)?;
        Some((index + 1 + offset, title))
    }

    /// Emit a fenced block for the prompt run starting at `start`.
    ///
    /// Returns the index of the first line after the run.
    fn emit_prompt_block(&mut self, start: usize) -> usize {
        let commands: Vec<&str> = self.lines[start..]
            .iter()
            .map_while(|line| match classify(line) {
                LineKind::Prompt(command) => Some(command),
                _ => None,
            })
            .collect();

        let fence = "`".repeat(calculate_fence_length(&commands.join("\n"), '`'));
        self.blank_before();
        self.out.push(format!("{fence}{PROMPT_LANGUAGE}"));
        self.out.extend(commands.iter().map(|command| command.to_string()));
        self.out.push(fence);
        self.out.push(String::new());

        start + commands.len()
    }

    fn emit_heading(&mut self, title: &str) {
        let level = self.state.next_heading_level();
        self.blank_before();
        self.out.push(heading(level, title));
        self.out.push(String::new());
    }

    fn emit_rule(&mut self) {
        self.blank_before();
        self.out.push(RULE.to_string());
        self.out.push(String::new());
    }

    /// Ensure the next block is separated from preceding text.
    fn blank_before(&mut self) {
        if let Some(last) = self.out.last()
            && !is_blank(last)
        {
            self.out.push(String::new());
        }
    }
}

fn heading(level: usize, title: &str) -> String {
    format!("{} {title}", "#".repeat(level))
}

/// Drop leading blank lines and end with exactly one newline.
fn finish(doc: &str) -> String {
    let mut body = doc;
    while let Some((first, rest)) = body.split_once('\n') {
        if !is_blank(first) {
            break;
        }
        body = rest;
    }
    format!("{}\n", body.trim_end())
}
