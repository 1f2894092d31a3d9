/// Fenced code block type.
///
/// Only backtick fences are recognised. The info string after the opening
/// fence (`` ```rust ``) is discarded.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    pub fn is_fence(line: &str) -> bool {
        line.starts_with(Self::BACKTICKS)
    }

    /// Whether `lines` open and close with a fence.
    ///
    /// A lone opening fence does not count as a closed block.
    pub fn encloses(lines: &[&str]) -> bool {
        match lines {
            [first, .., last] => Self::is_fence(first) && Self::is_fence(last),
            _ => false,
        }
    }

    /// Returns the verbatim body of a fenced block, newline terminated
    /// unless empty.
    pub fn body(block: &str) -> String {
        let mut lines: Vec<&str> = block.lines().collect();
        if lines.first().is_some_and(|l| Self::is_fence(l)) {
            lines.remove(0);
        }
        if lines.last().is_some_and(|l| Self::is_fence(l)) {
            lines.pop();
        }

        let mut body = lines.join("\n");
        if !body.is_empty() && !body.ends_with('\n') {
            body.push('\n');
        }
        body
    }
}
