use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::BlockType,
};

/// Classifies a block by its structure.
///
/// Rules are tried in priority order and the first match wins: heading, code,
/// quote, unordered list, ordered list. Anything else, including a blank
/// block, is a paragraph.
pub fn block_to_block_type(block: &str) -> BlockType {
    if block.trim().is_empty() {
        return BlockType::Paragraph;
    }

    let lines: Vec<&str> = block.lines().collect();

    if let Some(level) = lines.first().and_then(|line| Heading::level(line)) {
        return BlockType::Heading { level };
    }

    if CodeFence::encloses(&lines) {
        return BlockType::Code;
    }

    let content: Vec<&str> = lines
        .iter()
        .copied()
        .filter(|line| !line.trim().is_empty())
        .collect();

    if content.iter().all(|line| BlockQuote::is_quoted(line)) {
        return BlockType::Quote;
    }

    if content
        .iter()
        .all(|line| UnorderedList::item_text(line).is_some())
    {
        return BlockType::UnorderedList;
    }

    let numbers: Option<Vec<u64>> = content
        .iter()
        .map(|line| OrderedList::item(line).map(|(n, _)| n))
        .collect();
    if numbers.is_some_and(|numbers| OrderedList::is_sequential(&numbers)) {
        return BlockType::OrderedList;
    }

    BlockType::Paragraph
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# Heading", BlockType::Heading { level: 1 })]
    #[case("###### Heading", BlockType::Heading { level: 6 })]
    #[case("## Heading\nwith a second line", BlockType::Heading { level: 2 })]
    #[case("####### Too deep", BlockType::Paragraph)]
    #[case("#NoSpace", BlockType::Paragraph)]
    #[case("```\ncode here\n```", BlockType::Code)]
    #[case("```python\nprint('x')\n```", BlockType::Code)]
    #[case("```", BlockType::Paragraph)]
    #[case("```\nnever closed", BlockType::Paragraph)]
    #[case("> quote\n> more quote", BlockType::Quote)]
    #[case(">no space", BlockType::Quote)]
    #[case("> quote\nnot quote", BlockType::Paragraph)]
    #[case("- item 1\n- item 2", BlockType::UnorderedList)]
    #[case("- item 1\nnot item", BlockType::Paragraph)]
    #[case("-item", BlockType::Paragraph)]
    #[case("1. first\n2. second\n3. third", BlockType::OrderedList)]
    #[case("1. a\n3. b", BlockType::Paragraph)]
    #[case("2. a\n3. b", BlockType::Paragraph)]
    #[case("1. a\n1. b", BlockType::Paragraph)]
    #[case("1.a", BlockType::Paragraph)]
    #[case("Just some text", BlockType::Paragraph)]
    #[case("", BlockType::Paragraph)]
    #[case("   ", BlockType::Paragraph)]
    fn classifies_blocks(#[case] block: &str, #[case] expected: BlockType) {
        assert_eq!(block_to_block_type(block), expected);
    }

    #[test]
    fn heading_wins_over_code() {
        assert_eq!(
            block_to_block_type("# Title\n```"),
            BlockType::Heading { level: 1 }
        );
    }

    #[test]
    fn classification_is_stable() {
        for block in ["# H", "```\nx\n```", "> q", "- a", "1. a", "text"] {
            let first = block_to_block_type(block);
            assert_eq!(block_to_block_type(block), first);
        }
    }
}
