//! # Inline Parsing
//!
//! Turns the text of a block into a flat sequence of `TextNode`s.
//!
//! ## Pipeline
//!
//! Each stage only splits nodes of kind `Text`; everything else passes through
//! untouched:
//!
//! 1. images `![alt](url)`
//! 2. links `[text](url)` (never preceded by `!`)
//! 3. code spans `` `code` ``
//! 4. bold `**bold**`
//! 5. italic `_italic_`
//!
//! The order is fixed. Later stages never see content claimed by earlier ones,
//! so `` `**x**` `` stays a code span and underscores inside link URLs are not
//! italics. Delimiters do not nest.
//!
//! ## Modules
//!
//! - **`kinds`**: delimiter and pattern constants
//! - **`types`**: `MarkdownRef`, an image or link match with its byte range
//! - **`parser`**: `parse_inline()` and the individual split stages

pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::{
    extract_markdown_images, extract_markdown_links, parse_inline, split_nodes_delimiter,
    split_nodes_image, split_nodes_link,
};
pub use types::MarkdownRef;
