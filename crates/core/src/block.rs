//! Line classification and block assembly.
//!
//! This module provides the stateful scan over input lines that groups them
//! into headings, lists, and paragraphs. The scanner carries at most one
//! pending block (an open list or an accumulating paragraph) across lines;
//! a new block type always flushes whichever is pending first.

/// Kind of list a block or open scanner state refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// Items introduced with the `- ` prefix, rendered as `<ul>`.
    Unordered,
    /// Items introduced with the `* ` prefix, rendered as `<ol>`.
    ///
    /// The dialect uses `*` as the ordered-list marker rather than numerals.
    Ordered,
}

impl ListKind {
    /// HTML tag name for this list kind.
    pub fn tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "ul",
            ListKind::Ordered => "ol",
        }
    }
}

/// One fully assembled block unit, materialized before emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// A heading with level 1 through 6 and its raw (untransformed) text.
    Heading {
        /// Heading level, equal to the length of the leading `#` run.
        level: usize,
        /// Heading text, stripped of the `#` run and surrounding whitespace.
        text: String,
    },
    /// A list of one or more items, all of the same kind.
    List {
        /// Whether the list renders as `<ul>` or `<ol>`.
        kind: ListKind,
        /// Item texts in input order, each trimmed of surrounding whitespace.
        items: Vec<String>,
    },
    /// A paragraph of one or more raw content lines.
    ///
    /// Lines are kept untrimmed; the renderer joins them with a line-break
    /// marker and trims the joined text as a whole.
    Paragraph {
        /// Raw content lines in input order.
        lines: Vec<String>,
    },
}

/// Classification of a single input line, evaluated in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineClass<'a> {
    /// Leading `#` run of length 1 through 6.
    Heading { level: usize, text: &'a str },
    /// Leading `#` run longer than 6; the line emits no block.
    TooDeepHeading,
    /// `- ` or `* ` prefixed list item.
    Item { kind: ListKind, text: &'a str },
    /// Non-blank line matching no prefix rule.
    Content,
    /// Whitespace-only line.
    Blank,
}

fn classify(line: &str) -> LineClass<'_> {
    let hashes = line.bytes().take_while(|b| *b == b'#').count();
    if hashes >= 1 {
        return if hashes <= 6 {
            LineClass::Heading {
                level: hashes,
                text: line[hashes..].trim(),
            }
        } else {
            LineClass::TooDeepHeading
        };
    }
    if let Some(rest) = line.strip_prefix("- ") {
        return LineClass::Item {
            kind: ListKind::Unordered,
            text: rest.trim(),
        };
    }
    if let Some(rest) = line.strip_prefix("* ") {
        return LineClass::Item {
            kind: ListKind::Ordered,
            text: rest.trim(),
        };
    }
    if line.trim().is_empty() {
        LineClass::Blank
    } else {
        LineClass::Content
    }
}

/// Pending state carried between lines.
#[derive(Debug, Default)]
enum State {
    /// Nothing pending.
    #[default]
    Idle,
    /// A list of `kind` is open with at least one accumulated item.
    InList { kind: ListKind, items: Vec<String> },
    /// A paragraph is accumulating with at least one buffered line.
    InParagraph { lines: Vec<String> },
}

/// Stateful line scanner for a single conversion run.
///
/// The state is local to one `Scanner` value; independent conversions never
/// share it. Lines are fed with [`Scanner::push_line`] and the run ends with
/// [`Scanner::finish`], which flushes whatever is still pending.
#[derive(Debug, Default)]
pub struct Scanner {
    state: State,
}

impl Scanner {
    /// Create a scanner with nothing pending.
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify one line and append any completed blocks to `out`.
    pub fn push_line(&mut self, line: &str, out: &mut Vec<Block>) {
        match classify(line) {
            LineClass::Heading { level, text } => {
                self.flush_pending(out);
                out.push(Block::Heading {
                    level,
                    text: text.to_string(),
                });
            }
            LineClass::TooDeepHeading => {
                self.flush_pending(out);
                log::warn!("dropping line with more than 6 leading '#': {line:?}");
            }
            LineClass::Item { kind, text } => {
                self.flush_paragraph(out);
                match &mut self.state {
                    State::InList { kind: open, items } if *open == kind => {
                        items.push(text.to_string());
                    }
                    _ => {
                        self.close_list(out);
                        self.state = State::InList {
                            kind,
                            items: vec![text.to_string()],
                        };
                    }
                }
            }
            LineClass::Content => {
                self.close_list(out);
                match &mut self.state {
                    State::InParagraph { lines } => lines.push(line.to_string()),
                    _ => {
                        self.state = State::InParagraph {
                            lines: vec![line.to_string()],
                        };
                    }
                }
            }
            LineClass::Blank => self.flush_pending(out),
        }
    }

    /// End the run, flushing any still-open list or pending paragraph.
    pub fn finish(mut self, out: &mut Vec<Block>) {
        self.flush_pending(out);
    }

    /// Emit whichever block is pending. At most one can be.
    fn flush_pending(&mut self, out: &mut Vec<Block>) {
        match std::mem::take(&mut self.state) {
            State::Idle => {}
            State::InList { kind, items } => out.push(Block::List { kind, items }),
            State::InParagraph { lines } => out.push(Block::Paragraph { lines }),
        }
    }

    fn close_list(&mut self, out: &mut Vec<Block>) {
        if matches!(self.state, State::InList { .. }) {
            self.flush_pending(out);
        }
    }

    fn flush_paragraph(&mut self, out: &mut Vec<Block>) {
        if matches!(self.state, State::InParagraph { .. }) {
            self.flush_pending(out);
        }
    }
}

/// Scan a whole document into its ordered sequence of blocks.
pub fn scan_blocks(input: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut scanner = Scanner::new();
    for line in input.lines() {
        scanner.push_line(line, &mut blocks);
    }
    scanner.finish(&mut blocks);
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heading(level: usize, text: &str) -> Block {
        Block::Heading {
            level,
            text: text.to_string(),
        }
    }

    fn list(kind: ListKind, items: &[&str]) -> Block {
        Block::List {
            kind,
            items: items.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn paragraph(lines: &[&str]) -> Block {
        Block::Paragraph {
            lines: lines.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn headings_emit_immediately_at_every_level() {
        for level in 1..=6 {
            let line = format!("{} Title", "#".repeat(level));
            assert_eq!(scan_blocks(&line), vec![heading(level, "Title")]);
        }
    }

    #[test]
    fn heading_text_is_trimmed_of_marker_run_and_whitespace() {
        assert_eq!(scan_blocks("##   Spaced out  "), vec![heading(2, "Spaced out")]);
        // No space after the marker run is still a heading.
        assert_eq!(scan_blocks("#Tight"), vec![heading(1, "Tight")]);
    }

    #[test]
    fn seven_hashes_emit_nothing() {
        assert_eq!(scan_blocks("####### too deep"), vec![]);
    }

    #[test]
    fn over_deep_heading_still_flushes_pending_paragraph() {
        let blocks = scan_blocks("hello\n####### dropped\nworld");
        assert_eq!(blocks, vec![paragraph(&["hello"]), paragraph(&["world"])]);
    }

    #[test]
    fn consecutive_dash_lines_form_one_unordered_list() {
        let blocks = scan_blocks("- one\n- two\n- three");
        assert_eq!(
            blocks,
            vec![list(ListKind::Unordered, &["one", "two", "three"])]
        );
    }

    #[test]
    fn switching_marker_closes_and_reopens() {
        let blocks = scan_blocks("- one\n- two\n* first\n- back");
        assert_eq!(
            blocks,
            vec![
                list(ListKind::Unordered, &["one", "two"]),
                list(ListKind::Ordered, &["first"]),
                list(ListKind::Unordered, &["back"]),
            ]
        );
    }

    #[test]
    fn heading_closes_an_open_list() {
        let blocks = scan_blocks("- one\n# Title");
        assert_eq!(
            blocks,
            vec![list(ListKind::Unordered, &["one"]), heading(1, "Title")]
        );
    }

    #[test]
    fn content_line_closes_an_open_list() {
        let blocks = scan_blocks("- one\nplain text");
        assert_eq!(
            blocks,
            vec![list(ListKind::Unordered, &["one"]), paragraph(&["plain text"])]
        );
    }

    #[test]
    fn blank_line_terminates_a_paragraph() {
        let blocks = scan_blocks("first\nsecond\n\nthird");
        assert_eq!(
            blocks,
            vec![paragraph(&["first", "second"]), paragraph(&["third"])]
        );
    }

    #[test]
    fn consecutive_blank_lines_emit_no_empty_paragraphs() {
        let blocks = scan_blocks("one\n\n\n\ntwo");
        assert_eq!(blocks, vec![paragraph(&["one"]), paragraph(&["two"])]);
    }

    #[test]
    fn paragraph_lines_are_kept_raw() {
        let blocks = scan_blocks("  indented\ntrailing  ");
        assert_eq!(blocks, vec![paragraph(&["  indented", "trailing  "])]);
    }

    #[test]
    fn item_text_is_trimmed() {
        let blocks = scan_blocks("-   padded item  ");
        assert_eq!(blocks, vec![list(ListKind::Unordered, &["padded item"])]);
    }

    #[test]
    fn bare_dash_is_paragraph_content() {
        // The item prefix is the two-character `"- "`; a lone `-` is content.
        assert_eq!(scan_blocks("-"), vec![paragraph(&["-"])]);
    }

    #[test]
    fn whitespace_only_line_is_blank_not_content() {
        assert_eq!(scan_blocks("one\n   \ntwo").len(), 2);
    }

    #[test]
    fn end_of_input_flushes_open_list_then_paragraph() {
        assert_eq!(scan_blocks("- tail"), vec![list(ListKind::Unordered, &["tail"])]);
        assert_eq!(scan_blocks("tail"), vec![paragraph(&["tail"])]);
    }

    #[test]
    fn empty_input_yields_no_blocks() {
        assert_eq!(scan_blocks(""), vec![]);
    }
}
