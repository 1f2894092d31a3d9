use crate::nodes::TextKind;

/// Errors raised while turning Markdown into an HTML string.
///
/// Every variant aborts the conversion of the current document; nothing is
/// recovered locally.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("Invalid Markdown syntax: missing closing delimiter '{delimiter}' in text: {text}")]
    UnclosedDelimiter { delimiter: String, text: String },

    #[error("{kind} text node must have a URL")]
    MissingUrl { kind: TextKind },

    #[error("Leaf node <{}> must have a value", .tag.as_deref().unwrap_or("text"))]
    EmptyLeafValue { tag: Option<String> },

    #[error("Parent node must have a tag")]
    MissingTag,

    #[error("Parent node <{tag}> must have children")]
    NoChildren { tag: String },

    #[error("No level 1 heading found to use as the page title")]
    MissingTitle,
}
