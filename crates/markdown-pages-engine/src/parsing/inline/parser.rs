use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::error::RenderError;
use crate::nodes::{TextKind, TextNode};

use super::{
    kinds::{CodeSpan, Emphasis, ImageRef, LinkRef, Strong},
    types::MarkdownRef,
};

/// Delimiter stages, applied in this order after images and links.
const DELIMITER_STAGES: [(&str, TextKind); 3] = [
    (CodeSpan::TICK, TextKind::Code),
    (Strong::MARKER, TextKind::Bold),
    (Emphasis::MARKER, TextKind::Italic),
];

/// Parses inline Markdown into a flat sequence of [`TextNode`]s.
///
/// Stages run in a fixed order: images, links, code, bold, italic. Each stage
/// only splits `Text` nodes left by the previous ones. An empty input yields
/// no nodes.
///
/// # Errors
/// [`RenderError::UnclosedDelimiter`] when a code, bold or italic delimiter
/// has no partner.
pub fn parse_inline(text: &str) -> Result<Vec<TextNode>, RenderError> {
    let nodes = if text.is_empty() {
        vec![]
    } else {
        vec![TextNode::text(text)]
    };

    let nodes = split_nodes_image(nodes);
    let nodes = split_nodes_link(nodes);

    DELIMITER_STAGES
        .iter()
        .try_fold(nodes, |nodes, &(delimiter, kind)| {
            split_nodes_delimiter(nodes, delimiter, kind)
        })
}

/// Splits every `Text` node on `delimiter`, tagging the inner parts with `kind`.
///
/// Parts alternate outside/inside starting outside; an even part count means
/// the last delimiter was never closed. Empty parts are dropped.
pub fn split_nodes_delimiter(
    nodes: Vec<TextNode>,
    delimiter: &str,
    kind: TextKind,
) -> Result<Vec<TextNode>, RenderError> {
    let mut out = Vec::with_capacity(nodes.len());

    for node in nodes {
        if !node.is_plain() {
            out.push(node);
            continue;
        }

        let parts: Vec<&str> = node.text.split(delimiter).collect();
        if parts.len() % 2 == 0 {
            return Err(RenderError::UnclosedDelimiter {
                delimiter: delimiter.to_string(),
                text: node.text.clone(),
            });
        }

        for (i, part) in parts.into_iter().enumerate() {
            if part.is_empty() {
                continue;
            }
            let part_kind = if i % 2 == 0 { TextKind::Text } else { kind };
            out.push(TextNode::new(part, part_kind));
        }
    }

    Ok(out)
}

/// Splits `![alt](url)` references out of `Text` nodes.
pub fn split_nodes_image(nodes: Vec<TextNode>) -> Vec<TextNode> {
    split_nodes_refs(nodes, TextKind::Image, find_images)
}

/// Splits `[text](url)` references out of `Text` nodes.
pub fn split_nodes_link(nodes: Vec<TextNode>) -> Vec<TextNode> {
    split_nodes_refs(nodes, TextKind::Link, find_links)
}

/// Returns `(alt, url)` for every image reference, left to right.
pub fn extract_markdown_images(text: &str) -> Vec<(String, String)> {
    find_images(text)
        .into_iter()
        .map(|r| (r.label, r.url))
        .collect()
}

/// Returns `(anchor, url)` for every link reference, left to right.
/// Image references are skipped.
pub fn extract_markdown_links(text: &str) -> Vec<(String, String)> {
    find_links(text)
        .into_iter()
        .map(|r| (r.label, r.url))
        .collect()
}

fn split_nodes_refs(
    nodes: Vec<TextNode>,
    kind: TextKind,
    find: fn(&str) -> Vec<MarkdownRef>,
) -> Vec<TextNode> {
    let mut out = Vec::with_capacity(nodes.len());

    for node in nodes {
        if !node.is_plain() {
            out.push(node);
            continue;
        }
        if node.text.is_empty() {
            continue;
        }

        let refs = find(&node.text);
        if refs.is_empty() {
            out.push(node);
            continue;
        }

        let mut rest_start = 0;
        for r in refs {
            let before = &node.text[rest_start..r.range.start];
            if !before.is_empty() {
                out.push(TextNode::text(before));
            }
            out.push(TextNode::with_url(r.label, kind, r.url));
            rest_start = r.range.end;
        }

        let rest = &node.text[rest_start..];
        if !rest.is_empty() {
            out.push(TextNode::text(rest));
        }
    }

    out
}

fn image_regex() -> &'static Regex {
    static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
    IMAGE_REGEX.get_or_init(|| Regex::new(ImageRef::PATTERN).expect("Invalid image regex"))
}

fn link_regex() -> &'static Regex {
    static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
    LINK_REGEX.get_or_init(|| Regex::new(LinkRef::PATTERN).expect("Invalid link regex"))
}

fn find_images(text: &str) -> Vec<MarkdownRef> {
    image_regex()
        .captures_iter(text)
        .filter_map(|caps| to_ref(&caps))
        .collect()
}

fn find_links(text: &str) -> Vec<MarkdownRef> {
    // `regex` has no lookbehind, so the `!` check happens on the match start.
    link_regex()
        .captures_iter(text)
        .filter_map(|caps| to_ref(&caps))
        .filter(|r| r.range.start == 0 || text.as_bytes()[r.range.start - 1] != LinkRef::BANG)
        .collect()
}

fn to_ref(caps: &Captures<'_>) -> Option<MarkdownRef> {
    let whole = caps.get(0)?;
    Some(MarkdownRef {
        label: caps.get(1)?.as_str().to_string(),
        url: caps.get(2)?.as_str().to_string(),
        range: whole.range(),
    })
}
