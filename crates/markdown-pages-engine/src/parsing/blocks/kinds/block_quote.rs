/// Blockquote block type with owned delimiter constant.
///
/// Only one level of quoting is supported; `>> x` keeps its second `>`.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    pub fn is_quoted(line: &str) -> bool {
        line.starts_with(Self::PREFIX)
    }

    /// Strips a single leading `>` if present, then surrounding whitespace.
    pub fn strip_prefix(line: &str) -> &str {
        line.strip_prefix(Self::PREFIX).unwrap_or(line).trim()
    }

    /// The quoted text of a block, one stripped line per source line.
    pub fn text(block: &str) -> String {
        block
            .lines()
            .map(Self::strip_prefix)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
