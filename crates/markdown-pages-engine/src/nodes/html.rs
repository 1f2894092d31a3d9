use crate::error::RenderError;

/// Ordered HTML attributes, rendered in insertion order.
pub type Attributes = Vec<(String, String)>;

/// Elements that render without content or a closing tag.
const VOID_TAGS: &[&str] = &["img"];

/// A node of the rendered HTML tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Leaf(LeafNode),
    Parent(ParentNode),
}

impl HtmlNode {
    pub fn to_html(&self) -> Result<String, RenderError> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.to_html(),
            HtmlNode::Parent(parent) => parent.to_html(),
        }
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.tag(),
            HtmlNode::Parent(parent) => Some(parent.tag()),
        }
    }
}

impl From<LeafNode> for HtmlNode {
    fn from(leaf: LeafNode) -> Self {
        HtmlNode::Leaf(leaf)
    }
}

impl From<ParentNode> for HtmlNode {
    fn from(parent: ParentNode) -> Self {
        HtmlNode::Parent(parent)
    }
}

/// Renders attributes as ` key="value"` pairs.
///
/// Values are written verbatim; quotes inside a value are not escaped.
pub fn attributes_to_html(attributes: &[(String, String)]) -> String {
    attributes
        .iter()
        .map(|(key, value)| format!(" {key}=\"{value}\""))
        .collect()
}

/// A terminal node: an optional tag wrapping a string value.
///
/// An empty value is accepted here and rejected by [`LeafNode::to_html`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafNode {
    tag: Option<String>,
    value: String,
    attributes: Attributes,
}

impl LeafNode {
    pub fn new(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            value: value.into(),
            attributes: Attributes::new(),
        }
    }

    /// An untagged leaf that renders as its raw value.
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            tag: None,
            value: value.into(),
            attributes: Attributes::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn to_html(&self) -> Result<String, RenderError> {
        let attrs = attributes_to_html(&self.attributes);
        match self.tag.as_deref() {
            Some(tag) if VOID_TAGS.contains(&tag) => Ok(format!("<{tag}{attrs}>")),
            _ if self.value.is_empty() => Err(RenderError::EmptyLeafValue {
                tag: self.tag.clone(),
            }),
            None => Ok(self.value.clone()),
            Some(tag) => Ok(format!("<{tag}{attrs}>{}</{tag}>", self.value)),
        }
    }
}

/// A branching node owning a non-empty, ordered list of children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentNode {
    tag: String,
    children: Vec<HtmlNode>,
    attributes: Attributes,
}

impl ParentNode {
    /// Builds a parent node, rejecting an empty tag or an empty child list.
    pub fn new(tag: impl Into<String>, children: Vec<HtmlNode>) -> Result<Self, RenderError> {
        Self::with_attributes(tag, children, Attributes::new())
    }

    pub fn with_attributes(
        tag: impl Into<String>,
        children: Vec<HtmlNode>,
        attributes: Attributes,
    ) -> Result<Self, RenderError> {
        let tag = tag.into();
        if tag.is_empty() {
            return Err(RenderError::MissingTag);
        }
        if children.is_empty() {
            return Err(RenderError::NoChildren { tag });
        }
        Ok(Self {
            tag,
            children,
            attributes,
        })
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn children(&self) -> &[HtmlNode] {
        &self.children
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn to_html(&self) -> Result<String, RenderError> {
        let mut out = format!("<{}{}>", self.tag, attributes_to_html(&self.attributes));
        for child in &self.children {
            out.push_str(&child.to_html()?);
        }
        out.push_str(&format!("</{}>", self.tag));
        Ok(out)
    }
}
