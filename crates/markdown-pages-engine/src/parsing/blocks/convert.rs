use crate::error::RenderError;
use crate::nodes::{HtmlNode, LeafNode, ParentNode, text_node_to_html_node};
use crate::parsing::inline::parse_inline;

use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::BlockType,
};

/// Parses inline Markdown and maps each resulting text node to an HTML leaf.
pub fn text_to_children(text: &str) -> Result<Vec<HtmlNode>, RenderError> {
    parse_inline(text)?
        .iter()
        .map(text_node_to_html_node)
        .collect()
}

/// Converts a classified block into its HTML subtree.
///
/// Code blocks are wrapped verbatim in `<pre><code>`; every other block runs
/// its text through the inline parser.
pub fn block_to_html_node(block: &str, block_type: BlockType) -> Result<ParentNode, RenderError> {
    match block_type {
        BlockType::Paragraph => {
            let text = block.replace('\n', " ");
            ParentNode::new(block_type.tag(), text_to_children(&text)?)
        }
        BlockType::Heading { .. } => {
            ParentNode::new(block_type.tag(), text_to_children(Heading::text(block))?)
        }
        BlockType::Code => {
            let code = LeafNode::text(CodeFence::body(block));
            let code = ParentNode::new("code", vec![code.into()])?;
            ParentNode::new(block_type.tag(), vec![code.into()])
        }
        BlockType::Quote => {
            ParentNode::new(block_type.tag(), text_to_children(&BlockQuote::text(block))?)
        }
        BlockType::UnorderedList => {
            list_to_html_node(block, block_type, UnorderedList::item_text)
        }
        BlockType::OrderedList => list_to_html_node(block, block_type, OrderedList::item_text),
    }
}

fn list_to_html_node(
    block: &str,
    block_type: BlockType,
    item_text: fn(&str) -> Option<&str>,
) -> Result<ParentNode, RenderError> {
    let items = block
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let text = item_text(line).unwrap_or(line);
            ParentNode::new("li", text_to_children(text)?).map(HtmlNode::from)
        })
        .collect::<Result<Vec<_>, _>>()?;
    ParentNode::new(block_type.tag(), items)
}
