//! Block rendering and whole-document conversion.

use crate::block::{Block, scan_blocks};
use crate::error::ConvertError;
use crate::inline::rewrite_inline;
use std::fs;
use std::path::Path;

/// Render one block as its HTML fragment.
///
/// Headings and paragraphs render as a single line. Lists render as three
/// lines: the open tag, every `<li>` on one line, and the close tag.
pub fn render_block(block: &Block) -> String {
    match block {
        Block::Heading { level, text } => {
            let text = rewrite_inline(text);
            format!("<h{level}>{text}</h{level}>")
        }
        Block::List { kind, items } => {
            let tag = kind.tag();
            let items: String = items
                .iter()
                .map(|item| format!("<li>{}</li>", rewrite_inline(item)))
                .collect();
            format!("<{tag}>\n{items}\n</{tag}>")
        }
        Block::Paragraph { lines } => {
            let joined = lines.join("<br />\n");
            // Trim the assembled text as a whole; interior line whitespace
            // up to that trim is preserved.
            let text = rewrite_inline(joined.trim());
            format!("<p>{text}</p>")
        }
    }
}

/// Convert a whole document to HTML.
///
/// Fragments are joined with newlines and the result carries a single
/// trailing newline, matching the output file convention.
pub fn convert_document(input: &str) -> String {
    let blocks = scan_blocks(input);
    log::debug!("classified {} block(s)", blocks.len());
    let fragments: Vec<String> = blocks.iter().map(render_block).collect();
    let mut output = fragments.join("\n");
    output.push('\n');
    output
}

/// Read the document at `input`, convert it, and write the HTML to `output`.
///
/// The input must be an existing regular file; nothing is written otherwise.
pub fn convert_file(input: &Path, output: &Path) -> Result<(), ConvertError> {
    if !input.is_file() {
        return Err(ConvertError::MissingInput {
            path: input.display().to_string(),
        });
    }
    let source = fs::read_to_string(input)?;
    fs::write(output, convert_document(&source))?;
    Ok(())
}
