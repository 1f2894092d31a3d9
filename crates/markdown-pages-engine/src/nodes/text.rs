use std::fmt;

use crate::error::RenderError;

use super::html::{HtmlNode, LeafNode};

/// The semantic kind of a run of inline content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKind {
    Text,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

impl fmt::Display for TextKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TextKind::Text => "Text",
            TextKind::Bold => "Bold",
            TextKind::Italic => "Italic",
            TextKind::Code => "Code",
            TextKind::Link => "Link",
            TextKind::Image => "Image",
        };
        f.write_str(name)
    }
}

/// An immutable run of inline content produced by the inline parser.
///
/// `url` is `None` when absent. `Some("")` is a present, empty URL and is
/// not equal to `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextNode {
    pub text: String,
    pub kind: TextKind,
    pub url: Option<String>,
}

impl TextNode {
    /// Creates a node without a URL.
    pub fn new(text: impl Into<String>, kind: TextKind) -> Self {
        Self {
            text: text.into(),
            kind,
            url: None,
        }
    }

    /// Creates a node with an explicit URL, whatever its kind.
    pub fn with_url(text: impl Into<String>, kind: TextKind, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind,
            url: Some(url.into()),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new(text, TextKind::Text)
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self::with_url(text, TextKind::Link, url)
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self::with_url(alt, TextKind::Image, url)
    }

    /// Whether inline parsing stages may still split this node.
    pub fn is_plain(&self) -> bool {
        self.kind == TextKind::Text
    }
}

impl fmt::Display for TextNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.url {
            Some(url) => write!(f, "TextNode({}, {}, {})", self.text, self.kind, url),
            None => write!(f, "TextNode({}, {})", self.text, self.kind),
        }
    }
}

/// Maps a text node to the HTML leaf that renders it.
///
/// A URL on a kind that does not take one is ignored.
pub fn text_node_to_html_node(node: &TextNode) -> Result<HtmlNode, RenderError> {
    let leaf = match node.kind {
        TextKind::Text => LeafNode::text(&node.text),
        TextKind::Bold => LeafNode::new("b", &node.text),
        TextKind::Italic => LeafNode::new("i", &node.text),
        TextKind::Code => LeafNode::new("code", &node.text),
        TextKind::Link => {
            let url = required_url(node)?;
            LeafNode::new("a", &node.text).with_attribute("href", url)
        }
        TextKind::Image => {
            let url = required_url(node)?;
            LeafNode::new("img", "")
                .with_attribute("src", url)
                .with_attribute("alt", &node.text)
        }
    };
    Ok(HtmlNode::Leaf(leaf))
}

fn required_url(node: &TextNode) -> Result<&str, RenderError> {
    node.url
        .as_deref()
        .ok_or(RenderError::MissingUrl { kind: node.kind })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn equal_when_all_fields_match() {
        let a = TextNode::new("This is a text node", TextKind::Bold);
        let b = TextNode::new("This is a text node", TextKind::Bold);
        assert_eq!(a, b);
    }

    #[test]
    fn not_equal_on_different_kind() {
        let a = TextNode::new("same", TextKind::Bold);
        let b = TextNode::new("same", TextKind::Italic);
        assert_ne!(a, b);
    }

    #[test]
    fn not_equal_on_different_url() {
        let a = TextNode::link("home", "https://example.com");
        let b = TextNode::link("home", "https://example.org");
        assert_ne!(a, b);
    }

    #[test]
    fn absent_url_differs_from_empty_url() {
        let absent = TextNode::new("x", TextKind::Text);
        let empty = TextNode::with_url("x", TextKind::Text, "");
        assert_ne!(absent, empty);
    }

    #[test]
    fn display_includes_url_when_present() {
        let node = TextNode::link("anchor", "https://www.boot.dev");
        assert_eq!(node.to_string(), "TextNode(anchor, Link, https://www.boot.dev)");
        assert_eq!(
            TextNode::text("plain").to_string(),
            "TextNode(plain, Text)"
        );
    }

    #[rstest]
    #[case(TextKind::Text, "This is a text node", "This is a text node")]
    #[case(TextKind::Bold, "Bold text", "<b>Bold text</b>")]
    #[case(TextKind::Italic, "Italic text", "<i>Italic text</i>")]
    #[case(TextKind::Code, "Code text", "<code>Code text</code>")]
    fn converts_simple_kinds(#[case] kind: TextKind, #[case] text: &str, #[case] html: &str) {
        let node = text_node_to_html_node(&TextNode::new(text, kind)).unwrap();
        assert_eq!(node.to_html().unwrap(), html);
    }

    #[test]
    fn converts_link_with_href() {
        let node = text_node_to_html_node(&TextNode::link("Click me", "https://example.com")).unwrap();
        assert_eq!(
            node.to_html().unwrap(),
            r#"<a href="https://example.com">Click me</a>"#
        );
    }

    #[test]
    fn converts_image_with_src_then_alt() {
        let node =
            text_node_to_html_node(&TextNode::image("Alt text", "https://example.com/image.jpg"))
                .unwrap();
        match &node {
            HtmlNode::Leaf(leaf) => {
                assert_eq!(leaf.tag(), Some("img"));
                assert_eq!(leaf.value(), "");
                assert_eq!(
                    leaf.attributes(),
                    &[
                        ("src".to_string(), "https://example.com/image.jpg".to_string()),
                        ("alt".to_string(), "Alt text".to_string()),
                    ]
                );
            }
            HtmlNode::Parent(_) => panic!("expected a leaf"),
        }
        assert_eq!(
            node.to_html().unwrap(),
            r#"<img src="https://example.com/image.jpg" alt="Alt text">"#
        );
    }

    #[rstest]
    #[case(TextKind::Link)]
    #[case(TextKind::Image)]
    fn missing_url_is_an_error(#[case] kind: TextKind) {
        let err = text_node_to_html_node(&TextNode::new("x", kind)).unwrap_err();
        assert_eq!(err, RenderError::MissingUrl { kind });
        assert_eq!(err.to_string(), format!("{kind} text node must have a URL"));
    }

    #[test]
    fn url_on_plain_kind_is_ignored() {
        let node = TextNode::with_url("bold", TextKind::Bold, "https://example.com");
        let html = text_node_to_html_node(&node).unwrap().to_html().unwrap();
        assert_eq!(html, "<b>bold</b>");
    }
}
