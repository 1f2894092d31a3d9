//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`CodeSpan`**: `TICK = "\`"`
//! - **`Strong`**: `MARKER = "**"`
//! - **`Emphasis`**: `MARKER = "_"`
//! - **`ImageRef`** / **`LinkRef`**: bracket-exclusive reference patterns
//!
//! The parser calls these constants; it never hardcodes `**` or `` ` ``.

pub mod code_span;
pub mod emphasis;
pub mod reference;

pub use code_span::CodeSpan;
pub use emphasis::{Emphasis, Strong};
pub use reference::{ImageRef, LinkRef};
