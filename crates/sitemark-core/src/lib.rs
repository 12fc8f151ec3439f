//! sitemark-core - inline spans and the HTML node tree
//!
//! This crate provides the data structures shared by the `sitemark` parser:
//! the [`InlineSpan`] produced by inline tokenization and the HTML [`Node`]
//! tree the parser builds, together with its serialization.
//!
//! # Architecture
//!
//! ```text
//!                      ┌──────────────┐
//! Inline text ──spans─▶│              │
//!                      │  HTML Node   │ ──render──▶ HTML String
//! Block structure ────▶│     tree     │
//!                      └──────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use sitemark_core::{render, Node};
//!
//! let tree = Node::branch(
//!     "div",
//!     vec![Node::branch(
//!         "p",
//!         vec![
//!             Node::text("This is "),
//!             Node::leaf("b", "bold"),
//!             Node::text(" text."),
//!         ],
//!     )],
//! );
//!
//! let html = render(&tree).unwrap();
//! assert_eq!(html, "<div><p>This is <b>bold</b> text.</p></div>");
//! ```

mod ast;
mod node;
mod serialize;

pub use ast::{InlineSpan, SpanKind};
pub use node::{is_void, Attributes, Node, TEXT_TAG, VOID_ELEMENTS};
pub use serialize::render;

/// Structural violations detected while rendering a [`Node`] tree
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("Invalid HTML: <{tag}> leaf has no value")]
    MissingLeafValue { tag: String },

    #[error("Invalid HTML: branch node has no tag")]
    MissingBranchTag,

    #[error("Invalid HTML: <{tag}> branch has no children")]
    MissingChildren { tag: String },
}

pub type Result<T> = std::result::Result<T, RenderError>;
