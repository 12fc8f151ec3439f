//! Small text helpers shared by the classifier and the compiler.

/// Marker that opens the `n`th ordered list item, e.g. `"3. "`
pub fn ordered_marker(n: usize) -> String {
    format!("{}. ", n)
}

/// Number of leading `#` characters before the first space
pub fn heading_level(block: &str) -> usize {
    let marker = block.find(' ').map_or(block, |end| &block[..end]);
    marker.matches('#').count()
}

/// Join lines with single spaces, collapsing hard line breaks
pub fn join_lines<'a, I>(lines: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    lines.into_iter().collect::<Vec<_>>().join(" ")
}

/// Drop the first `n` characters of `line`
pub fn skip_chars(line: &str, n: usize) -> &str {
    match line.char_indices().nth(n) {
        Some((offset, _)) => &line[offset..],
        None => "",
    }
}

/// Drop the last `n` characters of `text`
pub fn drop_last_chars(text: &str, n: usize) -> &str {
    if n == 0 {
        return text;
    }
    match text.char_indices().rev().nth(n - 1) {
        Some((offset, _)) => &text[..offset],
        None => "",
    }
}
