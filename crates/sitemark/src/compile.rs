//! Block-to-node compilation.
//!
//! Every classified block becomes one HTML branch under a single `div` root.
//! Inline text inside a block goes through [`tokenize`] and [`span_to_node`];
//! code blocks are passed through literally.

use crate::block::{Block, BlockType, FENCE};
use crate::inline::tokenize;
use crate::service::{MarkdownOptions, OrderedMarker};
use crate::utilities::{drop_last_chars, heading_level, join_lines, skip_chars};
use crate::{InlineSpan, MarkdownError, Node, Result};

/// Tag of the document root
const ROOT_TAG: &str = "div";

/// Compile classified blocks into a `div` rooted tree
pub fn compile(blocks: &[Block], options: &MarkdownOptions) -> Result<Node> {
    let mut root = Node::element(ROOT_TAG);
    for block in blocks {
        root.add_child(compile_block(&block.text, block.kind, options)?);
    }
    log::debug!("compiled {} blocks", blocks.len());
    Ok(root)
}

/// Compile one block of the given type into its HTML branch
pub fn compile_block(block: &str, kind: BlockType, options: &MarkdownOptions) -> Result<Node> {
    match kind {
        BlockType::Heading => heading_to_node(block, options),
        BlockType::Code => Ok(code_to_node(block)),
        BlockType::UnorderedList => {
            list_to_node("ul", block, options, |line| {
                line.strip_prefix("- ").unwrap_or_else(|| skip_chars(line, 2))
            })
        }
        BlockType::OrderedList => list_to_node("ol", block, options, |line| {
            strip_ordered_marker(line, options.ordered_marker)
        }),
        BlockType::Quote => quote_to_node(block, options),
        BlockType::Paragraph => {
            let paragraph = join_lines(block.split('\n'));
            Ok(Node::branch("p", text_to_children(&paragraph, options)?))
        }
    }
}

/// Convert a single inline span into an HTML node
pub fn span_to_node(span: InlineSpan, options: &MarkdownOptions) -> Node {
    match span {
        InlineSpan::Text(text) => Node::text(text),
        InlineSpan::Bold(text) => Node::leaf(options.strong_tag.as_str(), text),
        InlineSpan::Italic(text) => Node::leaf(options.emphasis_tag.as_str(), text),
        InlineSpan::Code(text) => Node::leaf("code", text),
        InlineSpan::Link { text, url } => {
            Node::leaf_with_attrs("a", text, vec![("href", url.as_str())])
        }
        InlineSpan::Image { alt, url } => Node::leaf_with_attrs(
            "img",
            alt.as_str(),
            vec![("src", url.as_str()), ("alt", alt.as_str())],
        ),
    }
}

fn text_to_children(text: &str, options: &MarkdownOptions) -> Result<Vec<Node>> {
    Ok(tokenize(text)?
        .into_iter()
        .map(|span| span_to_node(span, options))
        .collect())
}

fn heading_to_node(block: &str, options: &MarkdownOptions) -> Result<Node> {
    let level = heading_level(block);
    let invalid = || MarkdownError::InvalidHeadingLevel {
        level,
        block: block.to_string(),
    };

    if !(1..=6).contains(&level) || level + 1 >= block.len() {
        return Err(invalid());
    }
    let content = block.get(level + 1..).ok_or_else(invalid)?;

    Ok(Node::branch(
        format!("h{}", level),
        text_to_children(content, options)?,
    ))
}

/// Drops the opening fence line and the three characters of the closing fence.
fn code_to_node(block: &str) -> Node {
    let body = block.split_once('\n').map_or("", |(_, rest)| rest);
    let code = drop_last_chars(body, FENCE.len());

    Node::branch("pre", vec![Node::branch("code", vec![Node::text(code)])])
}

fn list_to_node<'a, F>(
    tag: &str,
    block: &'a str,
    options: &MarkdownOptions,
    strip: F,
) -> Result<Node>
where
    F: Fn(&'a str) -> &'a str,
{
    let mut list = Node::element(tag);
    for line in block.split('\n') {
        list.add_child(Node::branch("li", text_to_children(strip(line), options)?));
    }
    Ok(list)
}

fn strip_ordered_marker(line: &str, marker: OrderedMarker) -> &str {
    match marker {
        OrderedMarker::Fixed => skip_chars(line, 3),
        OrderedMarker::Matched => line
            .trim_start_matches(|c: char| c.is_ascii_digit())
            .strip_prefix(". ")
            .unwrap_or_else(|| skip_chars(line, 3)),
    }
}

fn quote_to_node(block: &str, options: &MarkdownOptions) -> Result<Node> {
    let lines: Vec<&str> = block.split('\n').collect();

    if let Some(line) = lines.iter().find(|line| !line.starts_with('>')) {
        return Err(MarkdownError::InvalidQuoteLine {
            line: line.to_string(),
        });
    }

    let quote = join_lines(
        lines
            .iter()
            .map(|line| line.trim_start_matches('>').trim()),
    );
    Ok(Node::branch("blockquote", text_to_children(&quote, options)?))
}
