use pretty_assertions::assert_eq;
use rstest::rstest;
use sitemark::{
    blocks_to_html_tree, classify, markdown_to_html, render, split_blocks, tokenize, BlockType,
    InlineSpan, MarkdownError, MarkdownOptions, MarkdownService, OrderedMarker,
};

#[rstest]
#[case("# Heading", "<div><h1>Heading</h1></div>")]
#[case(
    "> This is a quote.",
    "<div><blockquote>This is a quote.</blockquote></div>"
)]
#[case(
    "- Item 1\n- Item 2\n- Item 3",
    "<div><ul><li>Item 1</li><li>Item 2</li><li>Item 3</li></ul></div>"
)]
#[case(
    "```\nCode block\n```",
    "<div><pre><code>Code block\n</code></pre></div>"
)]
#[case(
    "1. First\n2. Second",
    "<div><ol><li>First</li><li>Second</li></ol></div>"
)]
#[case(
    "- Item 1\nItem 2",
    "<div><p>- Item 1 Item 2</p></div>"
)]
fn test_literal_documents(#[case] markdown: &str, #[case] expected: &str) {
    let tree = blocks_to_html_tree(markdown).unwrap();
    assert_eq!(render(&tree).unwrap(), expected);
}

#[test]
fn test_whitespace_only_block_is_empty_paragraph() {
    assert_eq!(
        markdown_to_html("a\n\n  \n\nb").unwrap(),
        "<div><p>a</p><p></p><p>b</p></div>"
    );
}

#[test]
fn test_full_document() {
    let markdown = "
# Tolkien Fan Club

![JRR Tolkien sitting](/images/tolkien.png)

Here's the deal, **I like Tolkien**.

> \"I am in fact a Hobbit in all but size.\"
>
> -- J.R.R. Tolkien

## Reasons I like Tolkien

- You can spend years studying the *legendarium*
- It's [well written](https://www.goodreads.com)

1. Gandalf
2. Bilbo
3. Sam

```
func main(){
    fmt.Println(\"Aragorn\")
}
```
";
    let expected = concat!(
        "<div>",
        "<h1>Tolkien Fan Club</h1>",
        "<p><img src=\"/images/tolkien.png\" alt=\"JRR Tolkien sitting\"></p>",
        "<p>Here's the deal, <b>I like Tolkien</b>.</p>",
        "<blockquote>\"I am in fact a Hobbit in all but size.\"  -- J.R.R. Tolkien</blockquote>",
        "<h2>Reasons I like Tolkien</h2>",
        "<ul><li>You can spend years studying the <i>legendarium</i></li>",
        "<li>It's <a href=\"https://www.goodreads.com\">well written</a></li></ul>",
        "<ol><li>Gandalf</li><li>Bilbo</li><li>Sam</li></ol>",
        "<pre><code>func main(){\n    fmt.Println(\"Aragorn\")\n}\n</code></pre>",
        "</div>",
    );
    assert_eq!(markdown_to_html(markdown).unwrap(), expected);
}

#[test]
fn test_unbalanced_bold_fails() {
    let err = tokenize("This is **bold text").unwrap_err();
    assert!(matches!(err, MarkdownError::UnbalancedDelimiter { ref delimiter, .. } if delimiter == "**"));
}

#[test]
fn test_broken_list_is_paragraph() {
    assert_eq!(classify("- one\n- two\nthree"), BlockType::Paragraph);
    assert_eq!(classify("- one\n- two"), BlockType::UnorderedList);
}

#[rstest]
#[case("plain words")]
#[case("- a\n- b")]
#[case("> quoted\n> twice")]
#[case("```\ncode\n```")]
fn test_split_blocks_on_single_block(#[case] block: &str) {
    assert_eq!(split_blocks(block), vec![block.to_string()]);
}

#[rstest]
#[case("a **b** c", "a b c")]
#[case("*x* and `y`", "x and y")]
#[case("see [docs](https://d.io) or ![pic](p.png)", "see docs or pic")]
#[case("no markup at all", "no markup at all")]
#[case("**a***b*`c`", "abc")]
#[case("x[l](u)y![i](v)z", "xlyiz")]
#[case("`a` **b** *c*", "a b c")]
#[case("![first](1.png)[second](/2) tail", "firstsecond tail")]
fn test_span_contents_preserve_text(#[case] text: &str, #[case] expected: &str) {
    let joined: String = tokenize(text)
        .unwrap()
        .iter()
        .map(InlineSpan::content)
        .collect();
    assert_eq!(joined, expected);
}

#[test]
fn test_classify_total_and_deterministic() {
    for block in split_blocks("# a\n\n- b\n\n1. c\n\n> d\n\n```\ne\n```\n\nf\n\n-g") {
        let first = classify(&block);
        assert_eq!(classify(&block), first);
    }
}

#[test]
fn test_tenth_ordered_item() {
    let markdown = (1..=10)
        .map(|i| format!("{}. step {}", i, i))
        .collect::<Vec<_>>()
        .join("\n");

    let matched = markdown_to_html(&markdown).unwrap();
    assert!(matched.contains("<li>step 10</li>"));

    let fixed = MarkdownService::with_options(MarkdownOptions {
        ordered_marker: OrderedMarker::Fixed,
        ..Default::default()
    })
    .to_html(&markdown)
    .unwrap();
    assert!(fixed.contains("<li> step 10</li>"));
}

#[test]
fn test_error_aborts_whole_document() {
    let err = markdown_to_html("# ok\n\n[a](x) and [a](x)").unwrap_err();
    assert!(matches!(err, MarkdownError::UnclosedLinkSection { .. }));
}
