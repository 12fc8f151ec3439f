//! HTML node tree
//!
//! The tree has three shapes: a bare text leaf, a tagged leaf holding a single
//! value, and a tagged branch holding ordered children. Trees are built bottom
//! up and every node owns its children outright.
//!
//! Structural requirements (non-empty values, tags, present children) are
//! checked when the tree is rendered, not when it is constructed.

use indexmap::IndexMap;

/// Attribute map; serialization follows insertion order
pub type Attributes = IndexMap<String, String>;

/// Tag reported for bare text leaves in errors
pub const TEXT_TAG: &str = "#text";

/// Void (self-closing) HTML elements
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "command", "embed", "hr", "img", "input", "keygen", "link",
    "meta", "param", "source", "track", "wbr",
];

/// Check if a tag is a void element
pub fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag.to_lowercase().as_str())
}

/// A node in the HTML tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Raw text, rendered without any wrapping element
    Text(String),

    /// Element with a single text value and no children
    Leaf {
        tag: String,
        value: String,
        attributes: Attributes,
    },

    /// Element containing child nodes
    Branch {
        tag: String,
        children: Option<Vec<Node>>,
        attributes: Attributes,
    },
}

impl Node {
    /// Create a text leaf
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    /// Create a tagged leaf without attributes
    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Node::Leaf {
            tag: tag.into(),
            value: value.into(),
            attributes: Attributes::new(),
        }
    }

    /// Create a tagged leaf with attributes, kept in the given order
    pub fn leaf_with_attrs(
        tag: impl Into<String>,
        value: impl Into<String>,
        attrs: Vec<(&str, &str)>,
    ) -> Self {
        Node::Leaf {
            tag: tag.into(),
            value: value.into(),
            attributes: collect_attrs(attrs),
        }
    }

    /// Create a branch holding `children`
    pub fn branch(tag: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Branch {
            tag: tag.into(),
            children: Some(children),
            attributes: Attributes::new(),
        }
    }

    /// Create a branch with attributes
    pub fn branch_with_attrs(
        tag: impl Into<String>,
        children: Vec<Node>,
        attrs: Vec<(&str, &str)>,
    ) -> Self {
        Node::Branch {
            tag: tag.into(),
            children: Some(children),
            attributes: collect_attrs(attrs),
        }
    }

    /// Create an empty branch, ready for [`Node::add_child`]
    pub fn element(tag: impl Into<String>) -> Self {
        Self::branch(tag, Vec::new())
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    pub fn is_branch(&self) -> bool {
        matches!(self, Node::Branch { .. })
    }

    /// Get the tag name; `None` for text leaves
    pub fn tag_name(&self) -> Option<&str> {
        match self {
            Node::Text(_) => None,
            Node::Leaf { tag, .. } | Node::Branch { tag, .. } => Some(tag),
        }
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes()?.get(name).map(String::as_str)
    }

    pub fn attributes(&self) -> Option<&Attributes> {
        match self {
            Node::Text(_) => None,
            Node::Leaf { attributes, .. } | Node::Branch { attributes, .. } => Some(attributes),
        }
    }

    /// Set an attribute; an existing key keeps its original position.
    /// Text leaves carry no attributes and are left unchanged.
    pub fn set_attr(&mut self, name: &str, value: &str) {
        match self {
            Node::Text(_) => {}
            Node::Leaf { attributes, .. } | Node::Branch { attributes, .. } => {
                attributes.insert(name.to_string(), value.to_string());
            }
        }
    }

    /// Get all child nodes
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        let children = match self {
            Node::Branch { children, .. } => children.as_deref(),
            _ => None,
        };
        children.into_iter().flatten()
    }

    /// Add a child node. Only branches accept children; a branch without a
    /// child list gets a fresh one.
    pub fn add_child(&mut self, child: Node) {
        if let Node::Branch { children, .. } = self {
            children.get_or_insert_with(Vec::new).push(child);
        }
    }

    /// Get all text content from this node and descendants
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(content) => content.clone(),
            Node::Leaf { value, .. } => value.clone(),
            Node::Branch { .. } => self.children().map(Node::text_content).collect(),
        }
    }

    /// Render the attribute list as ` key="value"` pairs, with a leading
    /// space when any attribute exists
    pub fn attributes_to_html(&self) -> String {
        self.attributes()
            .map(|attrs| {
                attrs
                    .iter()
                    .map(|(name, value)| format!(" {}=\"{}\"", name, value))
                    .collect()
            })
            .unwrap_or_default()
    }
}

fn collect_attrs(attrs: Vec<(&str, &str)>) -> Attributes {
    attrs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
