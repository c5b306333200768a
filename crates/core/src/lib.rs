#![deny(missing_docs)]
//! Marklet core: line classification, inline rewriting, and HTML rendering
//! for a restricted Markdown dialect.

/// Line classification state machine and block types.
pub mod block;
/// Core error types.
pub mod error;
/// Inline markup substitution passes.
pub mod inline;
/// Block rendering and document conversion.
pub mod render;

pub use block::{Block, ListKind, Scanner, scan_blocks};
pub use error::ConvertError;
pub use inline::{content_digest, rewrite_inline};
pub use render::{convert_document, convert_file, render_block};
