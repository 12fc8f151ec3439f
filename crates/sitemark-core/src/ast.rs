//! Inline span model
//!
//! A span is a run of plain text or a single styled run of text. Spans are
//! flat: styles never nest, and the sequence produced for a piece of text is
//! the only intermediate form between raw text and HTML nodes.

use std::fmt;

/// The style of an inline span, without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    Text,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

impl SpanKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpanKind::Text => "text",
            SpanKind::Bold => "bold",
            SpanKind::Italic => "italic",
            SpanKind::Code => "code",
            SpanKind::Link => "link",
            SpanKind::Image => "image",
        }
    }
}

impl fmt::Display for SpanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An inline Markdown span
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineSpan {
    /// Plain text
    Text(String),

    /// Strong emphasis (`**bold**`)
    Bold(String),

    /// Emphasis (`*italic*`)
    Italic(String),

    /// Inline code (`` `code` ``)
    Code(String),

    /// Link with visible text and destination URL
    Link { text: String, url: String },

    /// Image with alt text and source URL
    Image { alt: String, url: String },
}

impl InlineSpan {
    pub fn text(content: impl Into<String>) -> Self {
        InlineSpan::Text(content.into())
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        InlineSpan::Link {
            text: text.into(),
            url: url.into(),
        }
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        InlineSpan::Image {
            alt: alt.into(),
            url: url.into(),
        }
    }

    pub fn kind(&self) -> SpanKind {
        match self {
            InlineSpan::Text(_) => SpanKind::Text,
            InlineSpan::Bold(_) => SpanKind::Bold,
            InlineSpan::Italic(_) => SpanKind::Italic,
            InlineSpan::Code(_) => SpanKind::Code,
            InlineSpan::Link { .. } => SpanKind::Link,
            InlineSpan::Image { .. } => SpanKind::Image,
        }
    }

    /// The visible text of the span (alt text for images)
    pub fn content(&self) -> &str {
        match self {
            InlineSpan::Text(content)
            | InlineSpan::Bold(content)
            | InlineSpan::Italic(content)
            | InlineSpan::Code(content) => content,
            InlineSpan::Link { text, .. } => text,
            InlineSpan::Image { alt, .. } => alt,
        }
    }

    /// The destination URL, present only for links and images
    pub fn destination(&self) -> Option<&str> {
        match self {
            InlineSpan::Link { url, .. } | InlineSpan::Image { url, .. } => Some(url),
            _ => None,
        }
    }
}

impl fmt::Display for InlineSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.destination() {
            Some(url) => write!(f, "{}({}, {})", self.kind(), self.content(), url),
            None => write!(f, "{}({})", self.kind(), self.content()),
        }
    }
}
