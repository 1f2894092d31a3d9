/// `![alt](url)` image reference.
///
/// Neither part may contain its own bracket pair: the alt text excludes
/// `[` and `]`, the URL excludes `(` and `)`.
pub struct ImageRef;

impl ImageRef {
    pub const PATTERN: &'static str = r"!\[([^\[\]]*)\]\(([^\(\)]*)\)";
}

/// `[text](url)` link reference.
///
/// A candidate directly preceded by [`LinkRef::BANG`] is image syntax and is
/// never taken as a link.
pub struct LinkRef;

impl LinkRef {
    pub const PATTERN: &'static str = r"\[([^\[\]]*)\]\(([^\(\)]*)\)";
    pub const BANG: u8 = b'!';
}
