//! HTML serialization
//!
//! Converts a [`Node`] tree into an HTML string. Output is byte-exact: no
//! whitespace is inserted between children and attributes appear in their
//! insertion order.

use crate::node::{is_void, Node, TEXT_TAG};
use crate::{RenderError, Result};

/// Render a node tree to an HTML string
pub fn render(node: &Node) -> Result<String> {
    let mut output = String::with_capacity(1024);
    render_node(node, &mut output)?;
    Ok(output)
}

impl Node {
    /// Render this node to an HTML string
    pub fn to_html(&self) -> Result<String> {
        render(self)
    }
}

fn render_node(node: &Node, out: &mut String) -> Result<()> {
    match node {
        Node::Text(content) => {
            if content.is_empty() {
                return Err(RenderError::MissingLeafValue {
                    tag: TEXT_TAG.to_string(),
                });
            }
            out.push_str(content);
        }

        Node::Leaf { tag, value, .. } => {
            if is_void(tag) {
                open_tag(node, tag, out);
                return Ok(());
            }
            if value.is_empty() {
                return Err(RenderError::MissingLeafValue { tag: tag.clone() });
            }
            open_tag(node, tag, out);
            out.push_str(value);
            close_tag(tag, out);
        }

        Node::Branch { tag, children, .. } => {
            if tag.is_empty() {
                return Err(RenderError::MissingBranchTag);
            }
            let Some(children) = children else {
                return Err(RenderError::MissingChildren { tag: tag.clone() });
            };
            open_tag(node, tag, out);
            for child in children {
                render_node(child, out)?;
            }
            close_tag(tag, out);
        }
    }
    Ok(())
}

fn open_tag(node: &Node, tag: &str, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    out.push_str(&node.attributes_to_html());
    out.push('>');
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
