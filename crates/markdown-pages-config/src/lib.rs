//! `site.toml` settings for markdown-pages.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_FILE_NAME: &str = "site.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read site config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid site config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Where the site's inputs live, where it is written, and the URL prefix it is
/// served under. Keys missing from the file fall back to [`Default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub content_dir: PathBuf,
    pub static_dir: PathBuf,
    /// Wiped and recreated by every build.
    pub output_dir: PathBuf,
    /// Must contain the `{{ Title }}` and `{{ Content }}` placeholders.
    pub template: PathBuf,
    /// Replaces the leading `/` of root-relative `href` and `src` values.
    pub base_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content_dir: "content".into(),
            static_dir: "static".into(),
            output_dir: "public".into(),
            template: "template.html".into(),
            base_path: "/".into(),
        }
    }
}

impl Config {
    /// Reads a site config, or `None` when there is no file at `path`.
    ///
    /// `~` and `$VAR` are expanded in every directory, and relative results
    /// are anchored at the directory holding the file.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Option<Self>, ConfigError> {
        let path = path.as_ref();
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let parsed: Config = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let site_root = path.parent().unwrap_or(Path::new(""));
        Ok(Some(parsed.map_dirs(|dir| site_root.join(expand_vars(dir)))))
    }

    pub fn save_to_path(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    fn map_dirs(self, f: impl Fn(PathBuf) -> PathBuf) -> Self {
        Self {
            content_dir: f(self.content_dir),
            static_dir: f(self.static_dir),
            output_dir: f(self.output_dir),
            template: f(self.template),
            base_path: self.base_path,
        }
    }
}

/// Unresolvable variables leave the path untouched.
fn expand_vars(dir: PathBuf) -> PathBuf {
    let expanded = shellexpand::full(&dir.to_string_lossy()).map(|s| PathBuf::from(s.as_ref()));
    expanded.unwrap_or(dir)
}
