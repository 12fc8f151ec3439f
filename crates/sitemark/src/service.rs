//! MarkdownService - the main entry point for Markdown to HTML conversion.

use crate::block::parse_blocks;
use crate::compile::compile;
use crate::{Node, Result};

/// How ordered list markers are removed from item lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderedMarker {
    /// Strip the actual `"{n}. "` marker, whatever its digit width
    #[default]
    Matched,
    /// Strip exactly three characters; only correct for items 1 to 9
    Fixed,
}

/// Options for MarkdownService
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownOptions {
    /// Ordered list marker handling
    pub ordered_marker: OrderedMarker,

    /// Tag wrapping `**bold**` spans
    pub strong_tag: String,

    /// Tag wrapping `*italic*` spans
    pub emphasis_tag: String,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self {
            ordered_marker: OrderedMarker::Matched,
            strong_tag: "b".to_string(),
            emphasis_tag: "i".to_string(),
        }
    }
}

/// The main service for converting Markdown to HTML
#[derive(Debug, Clone, Default)]
pub struct MarkdownService {
    options: MarkdownOptions,
}

impl MarkdownService {
    /// Create a new MarkdownService with default options
    pub fn new() -> Self {
        Self {
            options: MarkdownOptions::default(),
        }
    }

    /// Create a MarkdownService with custom options
    pub fn with_options(options: MarkdownOptions) -> Self {
        Self { options }
    }

    /// Convert a document to a `div` rooted HTML tree.
    ///
    /// Any malformed block fails the whole document.
    pub fn to_html_tree(&self, document: &str) -> Result<Node> {
        let blocks = parse_blocks(document);
        compile(&blocks, &self.options)
    }

    /// Convert a document to an HTML string
    pub fn to_html(&self, document: &str) -> Result<String> {
        let tree = self.to_html_tree(document)?;
        crate::render(&tree)
    }

    /// Get the current options
    pub fn options(&self) -> &MarkdownOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut MarkdownOptions {
        &mut self.options
    }
}
