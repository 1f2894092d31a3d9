use std::fmt;

/// Structural classification of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    /// An ATX heading, `level` in `1..=6`.
    Heading { level: u8 },
    /// A backtick-fenced code block.
    Code,
    /// Every line starts with `>`.
    Quote,
    /// Every line is a `- ` item.
    UnorderedList,
    /// Every line is a `n. ` item, numbered `1..=n`.
    OrderedList,
    /// Default when no other rule matches.
    Paragraph,
}

impl BlockType {
    /// The tag of the element the block converts to.
    pub fn tag(self) -> String {
        match self {
            BlockType::Heading { level } => format!("h{level}"),
            BlockType::Code => "pre".to_string(),
            BlockType::Quote => "blockquote".to_string(),
            BlockType::UnorderedList => "ul".to_string(),
            BlockType::OrderedList => "ol".to_string(),
            BlockType::Paragraph => "p".to_string(),
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockType::Heading { level } => write!(f, "heading {level}"),
            BlockType::Code => f.write_str("code"),
            BlockType::Quote => f.write_str("quote"),
            BlockType::UnorderedList => f.write_str("unordered list"),
            BlockType::OrderedList => f.write_str("ordered list"),
            BlockType::Paragraph => f.write_str("paragraph"),
        }
    }
}
