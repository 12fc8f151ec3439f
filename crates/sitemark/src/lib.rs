//! # sitemark
//!
//! Convert Markdown documents into an HTML node tree.
//!
//! Conversion happens in two phases. The document is first cut into
//! blank-line separated blocks which are classified as headings, lists,
//! quotes, code or paragraphs. Each block is then compiled into an HTML
//! branch, tokenizing its text into inline spans (bold, italic, code, links
//! and images) along the way.
//!
//! ## Supported syntax
//!
//! - `#` to `######` headings
//! - `- ` unordered and `1. ` ordered lists, one item per line
//! - `>` quotes
//! - fenced code blocks
//! - `**bold**`, `*italic*`, `` `code` ``, `[links](url)` and `![images](url)`
//!
//! Styles do not nest and nothing is escaped.
//!
//! ## Example
//!
//! ```rust
//! use sitemark::{blocks_to_html_tree, render};
//!
//! let tree = blocks_to_html_tree("# Hello\n\nSome **bold** text").unwrap();
//! let html = render(&tree).unwrap();
//! assert_eq!(html, "<div><h1>Hello</h1><p>Some <b>bold</b> text</p></div>");
//! ```

mod block;
mod compile;
mod inline;
mod service;
mod utilities;

pub use block::{classify, parse_blocks, split_blocks, Block, BlockType};
pub use compile::{compile, compile_block, span_to_node};
pub use inline::{
    extract_images, extract_links, split_spans_delimiter, split_spans_images, split_spans_links,
    tokenize,
};
pub use service::{MarkdownOptions, MarkdownService, OrderedMarker};
pub use sitemark_core::{Attributes, InlineSpan, Node, RenderError, SpanKind};

/// Error type for Markdown conversion
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkdownError {
    #[error("Invalid markdown: unmatched delimiter '{delimiter}' in text '{text}'")]
    UnbalancedDelimiter { delimiter: String, text: String },

    #[error("Invalid markdown: image section unclosed in '{text}'")]
    UnclosedImageSection { text: String },

    #[error("Invalid markdown: link section unclosed in '{text}'")]
    UnclosedLinkSection { text: String },

    #[error("Invalid heading level {level} in block '{block}'")]
    InvalidHeadingLevel { level: usize, block: String },

    #[error("Invalid quote block: line does not start with >: {line}")]
    InvalidQuoteLine { line: String },

    #[error("Unsupported block type: {name}")]
    UnsupportedBlockType { name: String },

    #[error(transparent)]
    Render(#[from] RenderError),
}

pub type Result<T> = std::result::Result<T, MarkdownError>;

/// Parse a whole document into a `div` rooted HTML tree using default options
pub fn blocks_to_html_tree(document: &str) -> Result<Node> {
    MarkdownService::new().to_html_tree(document)
}

/// Serialize an HTML tree
pub fn render(node: &Node) -> Result<String> {
    Ok(sitemark_core::render(node)?)
}

/// Convert a document straight to an HTML string using default options
pub fn markdown_to_html(document: &str) -> Result<String> {
    MarkdownService::new().to_html(document)
}
