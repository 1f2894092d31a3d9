//! # Nodes
//!
//! The two value types flowing through the engine:
//!
//! - **`text`**: `TextNode`, an inline run with a semantic `TextKind`, and its
//!   mapping to an HTML leaf
//! - **`html`**: `HtmlNode` tree (`LeafNode` / `ParentNode`) and its markup
//!   serialization

pub mod html;
pub mod text;

pub use html::{Attributes, HtmlNode, LeafNode, ParentNode, attributes_to_html};
pub use text::{TextKind, TextNode, text_node_to_html_node};
