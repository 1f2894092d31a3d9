use std::path::{Path, PathBuf};

use relative_path::RelativePathBuf;

/// A Markdown source file addressed relative to the content root.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct MarkdownFile {
    relative_path: RelativePathBuf,
}

impl MarkdownFile {
    pub const EXTENSION: &'static str = "md";
    pub const OUTPUT_EXTENSION: &'static str = "html";

    pub fn new(relative_path: RelativePathBuf) -> Self {
        Self { relative_path }
    }

    /// Create from a relative path string
    pub fn from_relative_str(path: &str) -> Self {
        Self::new(RelativePathBuf::from(path))
    }

    /// The mirrored page path: `blog/post.md` becomes `blog/post.html`.
    pub fn output_path(&self) -> RelativePathBuf {
        self.relative_path.with_extension(Self::OUTPUT_EXTENSION)
    }

    pub fn source_path(&self, content_root: &Path) -> PathBuf {
        self.relative_path.to_path(content_root)
    }

    pub fn destination_path(&self, output_root: &Path) -> PathBuf {
        self.output_path().to_path(output_root)
    }

    /// Whether `path` has the Markdown extension.
    pub fn is_markdown(path: &Path) -> bool {
        path.extension().is_some_and(|ext| ext == Self::EXTENSION)
    }
}
