/// Bold span, delimited by a pair of double asterisks.
pub struct Strong;

impl Strong {
    pub const MARKER: &'static str = "**";
}

/// Italic span, delimited by a pair of underscores.
pub struct Emphasis;

impl Emphasis {
    pub const MARKER: &'static str = "_";
}
