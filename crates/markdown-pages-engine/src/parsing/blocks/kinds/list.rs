use std::sync::OnceLock;

use regex::Regex;

/// `- item` list.
pub struct UnorderedList;

impl UnorderedList {
    pub const PATTERN: &'static str = r"^-\s+(.+)$";

    /// Returns the item text after the marker, if `line` is an item.
    pub fn item_text(line: &str) -> Option<&str> {
        static ITEM_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex =
            ITEM_REGEX.get_or_init(|| Regex::new(Self::PATTERN).expect("Invalid list item regex"));
        Some(regex.captures(line)?.get(1)?.as_str())
    }
}

/// `1. item` list. Items must be numbered `1, 2, 3, ...` without gaps.
pub struct OrderedList;

impl OrderedList {
    pub const PATTERN: &'static str = r"^(\d+)\.\s+(.+)$";

    /// Returns the item number and text, if `line` is an item.
    ///
    /// Numbers too large for `u64` cannot be part of a valid sequence and
    /// are rejected.
    pub fn item(line: &str) -> Option<(u64, &str)> {
        static ITEM_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex = ITEM_REGEX
            .get_or_init(|| Regex::new(Self::PATTERN).expect("Invalid ordered item regex"));
        let caps = regex.captures(line)?;
        let number = caps.get(1)?.as_str().parse().ok()?;
        Some((number, caps.get(2)?.as_str()))
    }

    pub fn item_text(line: &str) -> Option<&str> {
        Self::item(line).map(|(_, text)| text)
    }

    /// Whether `numbers` is exactly `1..=n`.
    pub fn is_sequential(numbers: &[u64]) -> bool {
        numbers.iter().zip(1u64..).all(|(&n, expected)| n == expected)
    }
}
