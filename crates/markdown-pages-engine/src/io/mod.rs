use crate::error::RenderError;
use crate::models::MarkdownFile;
use crate::page::render_page;
use relative_path::RelativePathBuf;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to render {path}: {source}")]
    Render { path: PathBuf, source: RenderError },
    #[error("Invalid content directory: {0}")]
    InvalidContentDir(PathBuf),
    #[error("Path is not a valid relative UTF-8 path: {0}")]
    InvalidPath(PathBuf),
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> SiteError {
    let path = path.to_path_buf();
    move |source| SiteError::Io { path, source }
}

/// Replace `dest_dir` with a recursive copy of `source_dir`.
///
/// A missing source directory leaves an empty destination. Returns the number
/// of files copied.
pub fn copy_static(source_dir: &Path, dest_dir: &Path) -> Result<usize, SiteError> {
    if dest_dir.exists() {
        log::info!("Removing existing directory: {}", dest_dir.display());
        fs::remove_dir_all(dest_dir).map_err(io_error(dest_dir))?;
    }

    log::info!("Creating directory: {}", dest_dir.display());
    fs::create_dir_all(dest_dir).map_err(io_error(dest_dir))?;

    if !source_dir.exists() {
        log::warn!("Static directory {} not found", source_dir.display());
        return Ok(0);
    }

    copy_directory_contents(source_dir, dest_dir)
}

fn copy_directory_contents(source_dir: &Path, dest_dir: &Path) -> Result<usize, SiteError> {
    let mut copied = 0;

    for entry in fs::read_dir(source_dir).map_err(io_error(source_dir))? {
        let entry = entry.map_err(io_error(source_dir))?;
        let source_path = entry.path();
        let dest_path = dest_dir.join(entry.file_name());

        if source_path.is_dir() {
            log::info!("Creating directory: {}", dest_path.display());
            fs::create_dir(&dest_path).map_err(io_error(&dest_path))?;
            copied += copy_directory_contents(&source_path, &dest_path)?;
        } else {
            log::info!(
                "Copying file: {} -> {}",
                source_path.display(),
                dest_path.display()
            );
            fs::copy(&source_path, &dest_path).map_err(io_error(&source_path))?;
            copied += 1;
        }
    }

    Ok(copied)
}

/// Render one Markdown file through the template at `template_path`.
pub fn generate_page(
    from_path: &Path,
    template_path: &Path,
    dest_path: &Path,
    base_path: &str,
) -> Result<(), SiteError> {
    let template = fs::read_to_string(template_path).map_err(io_error(template_path))?;
    write_page(from_path, &template, dest_path, base_path)
}

/// Render every Markdown file under `content_dir` into the mirrored location
/// under `dest_dir`, stopping at the first failure.
///
/// Returns the written page paths in the order they were generated.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template_path: &Path,
    dest_dir: &Path,
    base_path: &str,
) -> Result<Vec<PathBuf>, SiteError> {
    let template = fs::read_to_string(template_path).map_err(io_error(template_path))?;

    scan_markdown_files(content_dir)?
        .into_iter()
        .map(|file| {
            let dest_path = file.destination_path(dest_dir);
            write_page(
                &file.source_path(content_dir),
                &template,
                &dest_path,
                base_path,
            )?;
            Ok::<_, SiteError>(dest_path)
        })
        .collect()
}

fn write_page(
    from_path: &Path,
    template: &str,
    dest_path: &Path,
    base_path: &str,
) -> Result<(), SiteError> {
    log::info!(
        "Generating page from {} to {}",
        from_path.display(),
        dest_path.display()
    );

    let markdown = fs::read_to_string(from_path).map_err(io_error(from_path))?;
    let page =
        render_page(&markdown, template, base_path).map_err(|source| SiteError::Render {
            path: from_path.to_path_buf(),
            source,
        })?;

    if let Some(parent) = dest_path.parent() {
        fs::create_dir_all(parent).map_err(io_error(parent))?;
    }
    fs::write(dest_path, page).map_err(io_error(dest_path))
}

/// Scan for Markdown files under `content_root`, sorted by relative path.
pub fn scan_markdown_files(content_root: &Path) -> Result<Vec<MarkdownFile>, SiteError> {
    if !content_root.is_dir() {
        return Err(SiteError::InvalidContentDir(content_root.to_path_buf()));
    }

    let mut files = Vec::new();
    scan_directory_recursive(content_root, content_root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(
    root: &Path,
    dir: &Path,
    files: &mut Vec<MarkdownFile>,
) -> Result<(), SiteError> {
    for entry in fs::read_dir(dir).map_err(io_error(dir))? {
        let path = entry.map_err(io_error(dir))?.path();

        if path.is_dir() {
            scan_directory_recursive(root, &path, files)?;
        } else if MarkdownFile::is_markdown(&path) {
            let relative = path
                .strip_prefix(root)
                .ok()
                .and_then(|p| RelativePathBuf::from_path(p).ok())
                .ok_or_else(|| SiteError::InvalidPath(path.clone()))?;
            files.push(MarkdownFile::new(relative));
        }
    }

    Ok(())
}
