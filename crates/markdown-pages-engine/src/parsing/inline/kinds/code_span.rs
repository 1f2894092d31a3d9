/// Code span inline type with owned delimiter constant.
///
/// Code spans are split out before bold and italic, so `**` or `_` inside
/// backticks stays literal.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick that opens and closes a code span.
    pub const TICK: &'static str = "`";
}
