//! Block segmentation and classification.

use std::fmt;
use std::str::FromStr;

use crate::utilities::ordered_marker;
use crate::MarkdownError;

/// Separator between blocks
const BLOCK_SEPARATOR: &str = "\n\n";

/// Opening and closing marker of a code block
pub(crate) const FENCE: &str = "```";

/// Block types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    Paragraph,
    Heading,
    OrderedList,
    UnorderedList,
    Quote,
    Code,
}

impl BlockType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockType::Paragraph => "paragraph",
            BlockType::Heading => "heading",
            BlockType::OrderedList => "ordered_list",
            BlockType::UnorderedList => "unordered_list",
            BlockType::Quote => "quote",
            BlockType::Code => "code",
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlockType {
    type Err = MarkdownError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "paragraph" => Ok(BlockType::Paragraph),
            "heading" => Ok(BlockType::Heading),
            "ordered_list" => Ok(BlockType::OrderedList),
            "unordered_list" => Ok(BlockType::UnorderedList),
            "quote" => Ok(BlockType::Quote),
            "code" => Ok(BlockType::Code),
            _ => Err(MarkdownError::UnsupportedBlockType {
                name: name.to_string(),
            }),
        }
    }
}

/// A trimmed block of document text and its classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub text: String,
    pub kind: BlockType,
}

impl Block {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let kind = classify(&text);
        Self { text, kind }
    }
}

/// Split a document into blocks on blank lines.
///
/// Empty pieces are dropped, then the rest are trimmed. A whitespace-only
/// piece therefore survives as an empty block.
pub fn split_blocks(document: &str) -> Vec<String> {
    document
        .split(BLOCK_SEPARATOR)
        .filter(|block| !block.is_empty())
        .map(str::trim)
        .map(str::to_string)
        .collect()
}

/// Split a document into classified blocks
pub fn parse_blocks(document: &str) -> Vec<Block> {
    let blocks: Vec<Block> = split_blocks(document).into_iter().map(Block::new).collect();
    for (i, block) in blocks.iter().enumerate() {
        log::debug!("block {} classified as {}", i, block.kind);
    }
    blocks
}

/// Classify a single block. First match wins.
pub fn classify(block: &str) -> BlockType {
    let lines: Vec<&str> = block.split('\n').collect();

    if is_heading(block) {
        return BlockType::Heading;
    }

    if let [first, .., last] = lines.as_slice() {
        if first.starts_with(FENCE) && last.starts_with(FENCE) {
            return BlockType::Code;
        }
    }

    if block.starts_with('>') {
        return all_lines_or_paragraph(&lines, BlockType::Quote, |_, line| line.starts_with('>'));
    }

    if block.starts_with("- ") {
        return all_lines_or_paragraph(&lines, BlockType::UnorderedList, |_, line| {
            line.starts_with("- ")
        });
    }

    if block.starts_with("1. ") {
        return all_lines_or_paragraph(&lines, BlockType::OrderedList, |i, line| {
            line.starts_with(&ordered_marker(i + 1))
        });
    }

    BlockType::Paragraph
}

/// `# ` through `###### `
fn is_heading(block: &str) -> bool {
    let level = block.bytes().take_while(|b| *b == b'#').count();
    (1..=6).contains(&level) && block[level..].starts_with(' ')
}

/// Every line must match, otherwise the whole block is a paragraph
fn all_lines_or_paragraph<F>(lines: &[&str], kind: BlockType, matches: F) -> BlockType
where
    F: Fn(usize, &str) -> bool,
{
    match lines.iter().enumerate().find(|(i, line)| !matches(*i, line)) {
        Some((i, line)) => {
            log::trace!("{} demoted to paragraph at line {}: {:?}", kind, i + 1, line);
            BlockType::Paragraph
        }
        None => kind,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_split_headings() {
        let markdown = "# Heading 1\n\n## Heading 2\n\n### Heading 3";
        assert_eq!(
            split_blocks(markdown),
            vec!["# Heading 1", "## Heading 2", "### Heading 3"]
        );
    }

    #[test]
    fn test_split_keeps_single_newlines() {
        let markdown = "This is a paragraph.\nAnd this is another paragraph.";
        assert_eq!(
            split_blocks(markdown),
            vec!["This is a paragraph.\nAnd this is another paragraph."]
        );
    }

    #[test]
    fn test_split_trims_and_drops_empty_pieces() {
        let md = "
This is **bolded** paragraph

This is another paragraph with *italic* text and `code` here
This is the same paragraph on a new line



- This is a list
- with items


";
        assert_eq!(
            split_blocks(md),
            vec![
                "This is **bolded** paragraph",
                "This is another paragraph with *italic* text and `code` here\nThis is the same paragraph on a new line",
                "- This is a list\n- with items",
                "",
            ]
        );
    }

    #[test]
    fn test_split_keeps_whitespace_only_block() {
        assert_eq!(split_blocks("a\n\n  \n\nb"), vec!["a", "", "b"]);
        assert_eq!(split_blocks("a\n\n\n"), vec!["a", ""]);
    }

    #[test]
    fn test_split_single_block_is_identity() {
        let block = "> one\n> two";
        assert_eq!(split_blocks(block), vec![block]);
    }

    #[rstest]
    #[case("# Heading", BlockType::Heading)]
    #[case("###### Six", BlockType::Heading)]
    #[case("####### Seven", BlockType::Paragraph)]
    #[case("#NoSpace", BlockType::Paragraph)]
    #[case("> Quote\n> another quote", BlockType::Quote)]
    #[case(">no space is fine", BlockType::Quote)]
    #[case("> Quote\nnot quoted", BlockType::Paragraph)]
    #[case("- List item\n- List item 2", BlockType::UnorderedList)]
    #[case("- List item\nList item 2", BlockType::Paragraph)]
    #[case("-no space", BlockType::Paragraph)]
    #[case("1. List item\n2. Another list item", BlockType::OrderedList)]
    #[case("1. one\n3. three", BlockType::Paragraph)]
    #[case("2. starts at two", BlockType::Paragraph)]
    #[case("```\nCode block\n```", BlockType::Code)]
    #[case("```rust\nfn main() {}\n```", BlockType::Code)]
    #[case("```\nunterminated", BlockType::Paragraph)]
    #[case("```inline```", BlockType::Paragraph)]
    #[case("Just a paragraph", BlockType::Paragraph)]
    fn test_classify(#[case] block: &str, #[case] expected: BlockType) {
        assert_eq!(classify(block), expected);
    }

    #[test]
    fn test_classify_long_ordered_list() {
        let block = (1..=12)
            .map(|i| format!("{}. item {}", i, i))
            .collect::<Vec<_>>()
            .join("\n");
        assert_eq!(classify(&block), BlockType::OrderedList);
    }

    #[test]
    fn test_classify_is_deterministic() {
        for block in ["# a", "- a\n- b", "1. a", "> a", "plain", "```\nx\n```"] {
            assert_eq!(classify(block), classify(block));
        }
    }

    #[test]
    fn test_heading_takes_priority_over_code() {
        assert_eq!(classify("# ```\n```"), BlockType::Heading);
    }

    #[test]
    fn test_parse_blocks() {
        let blocks = parse_blocks("# Title\n\n- a\n- b\n\ntext");
        let kinds: Vec<BlockType> = blocks.iter().map(|b| b.kind).collect();
        assert_eq!(
            kinds,
            vec![BlockType::Heading, BlockType::UnorderedList, BlockType::Paragraph]
        );
        assert_eq!(blocks[1].text, "- a\n- b");
    }

    #[test]
    fn test_block_type_names() {
        for kind in [
            BlockType::Paragraph,
            BlockType::Heading,
            BlockType::OrderedList,
            BlockType::UnorderedList,
            BlockType::Quote,
            BlockType::Code,
        ] {
            assert_eq!(kind.as_str().parse::<BlockType>().unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_block_type_name() {
        assert_eq!(
            "table".parse::<BlockType>().unwrap_err(),
            MarkdownError::UnsupportedBlockType {
                name: "table".to_string()
            }
        );
    }
}
