//! # Block Parsing
//!
//! Turns a document into a sequence of classified blocks and each block into
//! an HTML subtree.
//!
//! ## Phases
//!
//! 1. **Splitting** (`split`): the document is cut on blank lines into block
//!    strings, each line trimmed
//! 2. **Classification** (`classify`): each block gets a `BlockType`
//! 3. **Conversion** (`convert`): each block becomes a `ParentNode`, running
//!    the inline parser on its text
//!
//! ## Modules
//!
//! - **`types`**: `BlockType`
//! - **`kinds`**: block-specific syntax knowledge (Heading, CodeFence,
//!   BlockQuote, UnorderedList, OrderedList)
//! - **`split`**: `markdown_to_blocks`
//! - **`classify`**: `block_to_block_type`
//! - **`convert`**: `block_to_html_node`, `text_to_children`
//!
//! ## Key Invariants
//!
//! - Fenced code blocks are raw zones: no inline parsing inside
//! - Blocks never nest; quotes and lists are a single level deep

pub mod classify;
pub mod convert;
pub mod kinds;
pub mod split;
pub mod types;

pub use classify::block_to_block_type;
pub use convert::{block_to_html_node, text_to_children};
pub use split::markdown_to_blocks;
pub use types::BlockType;
