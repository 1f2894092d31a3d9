use std::sync::OnceLock;

use regex::Regex;

/// ATX heading block type with owned marker knowledge.
pub struct Heading;

impl Heading {
    /// The character repeated once per heading level.
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: u8 = 6;

    /// A run of markers, at least one whitespace, then non-empty text.
    pub const PATTERN: &'static str = r"^(#+)\s+(\S.*)$";

    /// Returns the heading level if `line` opens a heading.
    ///
    /// `####### x`, `#x` and `# ` are not headings.
    pub fn level(line: &str) -> Option<u8> {
        let caps = Self::regex().captures(line)?;
        u8::try_from(caps.get(1)?.as_str().len())
            .ok()
            .filter(|level| *level <= Self::MAX_LEVEL)
    }

    /// Strips the leading markers and surrounding whitespace from a heading
    /// block. Line breaks inside the block are kept.
    pub fn text(block: &str) -> &str {
        block.trim_start_matches(Self::MARKER).trim()
    }

    fn regex() -> &'static Regex {
        static HEADING_REGEX: OnceLock<Regex> = OnceLock::new();
        HEADING_REGEX.get_or_init(|| Regex::new(Self::PATTERN).expect("Invalid heading regex"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# Title", Some(1))]
    #[case("### Third", Some(3))]
    #[case("###### Sixth", Some(6))]
    #[case("####### Seventh", None)]
    #[case("#NoSpace", None)]
    #[case("#", None)]
    #[case("#   ", None)]
    #[case("Not # a heading", None)]
    fn detects_heading_level(#[case] line: &str, #[case] level: Option<u8>) {
        assert_eq!(Heading::level(line), level);
    }

    #[test]
    fn strips_markers_and_whitespace() {
        assert_eq!(Heading::text("##   Spaced out  "), "Spaced out");
    }

    #[test]
    fn keeps_continuation_lines() {
        assert_eq!(Heading::text("# First\nsecond"), "First\nsecond");
    }
}
