pub mod markdown_file;

pub use markdown_file::MarkdownFile;
