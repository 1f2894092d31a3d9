use std::ops::Range;

/// An image or link reference found in inline text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownRef {
    /// Alt text for images, anchor text for links.
    pub label: String,
    pub url: String,
    /// Byte range of the whole reference, delimiters included.
    pub range: Range<usize>,
}
