//! Markdown to HTML engine for markdown-pages.
//!
//! A document flows through a fixed pipeline:
//!
//! 1. [`parsing::blocks::markdown_to_blocks`] cuts it into blocks
//! 2. [`parsing::blocks::block_to_block_type`] classifies each block
//! 3. [`parsing::blocks::block_to_html_node`] builds a subtree per block,
//!    using [`parsing::inline::parse_inline`] for the text inside it
//! 4. [`parsing::markdown_to_html_node`] gathers the subtrees under one `<div>`
//!
//! [`page`] wraps the result in a template and [`io`] drives generation of a
//! whole site from a content directory.

pub mod error;
pub mod io;
pub mod models;
pub mod nodes;
pub mod page;
pub mod parsing;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use error::RenderError;
pub use io::SiteError;
pub use models::MarkdownFile;
pub use nodes::{HtmlNode, LeafNode, ParentNode, TextKind, TextNode};
pub use page::render_page;
pub use parsing::{extract_title, markdown_to_html, markdown_to_html_node};
