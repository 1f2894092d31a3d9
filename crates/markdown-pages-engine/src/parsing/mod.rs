pub mod blocks;
pub mod inline;

use std::sync::OnceLock;

use regex::Regex;

use crate::error::RenderError;
use crate::nodes::{HtmlNode, ParentNode};

use blocks::{block_to_block_type, block_to_html_node, markdown_to_blocks};

/// Converts a whole document into a single `<div>` holding one subtree per
/// block, in document order.
///
/// # Errors
/// Any inline or structural error aborts the conversion. A document without
/// blocks fails with [`RenderError::NoChildren`].
pub fn markdown_to_html_node(markdown: &str) -> Result<ParentNode, RenderError> {
    let children = markdown_to_blocks(markdown)
        .iter()
        .enumerate()
        .map(|(index, block)| {
            let block_type = block_to_block_type(block);
            log::debug!("block {index} classified as {block_type}");
            block_to_html_node(block, block_type).map(HtmlNode::from)
        })
        .collect::<Result<Vec<_>, _>>()?;

    ParentNode::new("div", children)
}

/// Converts a document and serializes it in one step.
pub fn markdown_to_html(markdown: &str) -> Result<String, RenderError> {
    markdown_to_html_node(markdown)?.to_html()
}

/// Returns the text of the first level 1 heading line anywhere in the
/// document, regardless of block boundaries.
pub fn extract_title(markdown: &str) -> Result<String, RenderError> {
    static TITLE_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex =
        TITLE_REGEX.get_or_init(|| Regex::new(r"(?m)^#[ \t]+(.*\S)").expect("Invalid title regex"));

    regex
        .captures(markdown)
        .and_then(|caps| caps.get(1))
        .map(|title| title.as_str().trim().to_string())
        .ok_or(RenderError::MissingTitle)
}
