use std::sync::OnceLock;

use regex::Regex;

/// Splits a document into blank-line separated blocks.
///
/// Each line of a block is trimmed and blank lines are dropped; blocks left
/// empty are dropped entirely. Block order is preserved.
pub fn markdown_to_blocks(markdown: &str) -> Vec<String> {
    static BLANK_LINE_REGEX: OnceLock<Regex> = OnceLock::new();
    let separator =
        BLANK_LINE_REGEX.get_or_init(|| Regex::new(r"\n\s*\n").expect("Invalid blank line regex"));

    separator
        .split(markdown.trim())
        .filter_map(|chunk| {
            let lines: Vec<&str> = chunk
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .collect();
            (!lines.is_empty()).then(|| lines.join("\n"))
        })
        .collect()
}
