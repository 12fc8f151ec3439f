//! Inline tokenization.
//!
//! Text is turned into a flat sequence of [`InlineSpan`]s by a fixed pipeline
//! of passes over the working sequence. Each pass only rescans plain text
//! spans; spans that already carry a style pass through untouched.
//!
//! 1. delimiter splits for `**`, then `*`, then `` ` ``
//! 2. image extraction (`![alt](url)`)
//! 3. link extraction (`[text](url)`, not preceded by `!`)

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{InlineSpan, MarkdownError, Result};

/// Delimiter passes in application order. `**` must run before `*`.
const DELIMITERS: [(&str, fn(String) -> InlineSpan); 3] = [
    ("**", InlineSpan::Bold),
    ("*", InlineSpan::Italic),
    ("`", InlineSpan::Code),
];

static IMAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("Invalid image regex"));

static LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("Invalid link regex"));

/// Tokenize a piece of text into inline spans
pub fn tokenize(text: &str) -> Result<Vec<InlineSpan>> {
    let mut spans = vec![InlineSpan::text(text)];
    for (delimiter, style) in DELIMITERS {
        spans = split_spans_delimiter(spans, delimiter, style)?;
    }
    spans = split_spans_images(spans)?;
    spans = split_spans_links(spans)?;
    Ok(spans)
}

/// Split every text span on `delimiter`, turning the enclosed pieces into
/// spans built by `style`.
///
/// Pieces alternate outside/inside starting outside; an even piece count
/// means a delimiter was left open.
pub fn split_spans_delimiter<F>(
    spans: Vec<InlineSpan>,
    delimiter: &str,
    style: F,
) -> Result<Vec<InlineSpan>>
where
    F: Fn(String) -> InlineSpan,
{
    log::trace!("delimiter pass '{}' over {} spans", delimiter, spans.len());

    let mut result = Vec::with_capacity(spans.len());
    for span in spans {
        let InlineSpan::Text(text) = span else {
            result.push(span);
            continue;
        };

        let parts: Vec<&str> = text.split(delimiter).collect();
        if parts.len() % 2 == 0 {
            return Err(MarkdownError::UnbalancedDelimiter {
                delimiter: delimiter.to_string(),
                text: text.clone(),
            });
        }

        for (i, part) in parts.into_iter().enumerate() {
            if part.is_empty() {
                continue;
            }
            if i % 2 == 0 {
                result.push(InlineSpan::text(part));
            } else {
                result.push(style(part.to_string()));
            }
        }
    }
    Ok(result)
}

/// Find every `![alt](url)` in `text`, in order
pub fn extract_images(text: &str) -> Vec<(String, String)> {
    IMAGE_RE
        .captures_iter(text)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect()
}

/// Find every `[text](url)` in `text` that is not an image
pub fn extract_links(text: &str) -> Vec<(String, String)> {
    let mut links = Vec::new();
    let mut pos = 0;

    while let Some(caps) = LINK_RE.captures_at(text, pos) {
        let Some(whole) = caps.get(0) else {
            break;
        };
        if text[..whole.start()].ends_with('!') {
            // `[` is one byte, so the next position is a char boundary
            pos = whole.start() + 1;
            continue;
        }
        links.push((caps[1].to_string(), caps[2].to_string()));
        pos = whole.end();
    }

    links
}

/// Replace image syntax inside text spans with image spans
pub fn split_spans_images(spans: Vec<InlineSpan>) -> Result<Vec<InlineSpan>> {
    log::trace!("image pass over {} spans", spans.len());
    split_spans_matching(
        spans,
        extract_images,
        |alt, url| format!("![{}]({})", alt, url),
        |alt, url| InlineSpan::Image { alt, url },
        |text| MarkdownError::UnclosedImageSection { text },
    )
}

/// Replace link syntax inside text spans with link spans
pub fn split_spans_links(spans: Vec<InlineSpan>) -> Result<Vec<InlineSpan>> {
    log::trace!("link pass over {} spans", spans.len());
    split_spans_matching(
        spans,
        extract_links,
        |text, url| format!("[{}]({})", text, url),
        |text, url| InlineSpan::Link { text, url },
        |text| MarkdownError::UnclosedLinkSection { text },
    )
}

/// Shared body of the image and link passes.
///
/// Each match must occur exactly once in the text still left to scan,
/// otherwise the split is ambiguous and the pass fails with `unclosed`.
fn split_spans_matching(
    spans: Vec<InlineSpan>,
    extract: fn(&str) -> Vec<(String, String)>,
    literal: fn(&str, &str) -> String,
    build: fn(String, String) -> InlineSpan,
    unclosed: fn(String) -> MarkdownError,
) -> Result<Vec<InlineSpan>> {
    let mut result = Vec::with_capacity(spans.len());
    for span in spans {
        let InlineSpan::Text(text) = span else {
            result.push(span);
            continue;
        };

        let matches = extract(&text);
        if matches.is_empty() {
            result.push(InlineSpan::Text(text));
            continue;
        }

        let mut remaining = text.as_str();
        for (label, url) in matches {
            let syntax = literal(&label, &url);
            if remaining.matches(syntax.as_str()).count() != 1 {
                return Err(unclosed(text.clone()));
            }
            let Some((before, after)) = remaining.split_once(syntax.as_str()) else {
                return Err(unclosed(text.clone()));
            };
            if !before.is_empty() {
                result.push(InlineSpan::text(before));
            }
            result.push(build(label, url));
            remaining = after;
        }

        if !remaining.is_empty() {
            result.push(InlineSpan::text(remaining));
        }
    }
    Ok(result)
}
