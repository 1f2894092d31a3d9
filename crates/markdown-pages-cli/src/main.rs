use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use markdown_pages_config::{Config, DEFAULT_FILE_NAME};
use markdown_pages_engine::io;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "markdown-pages")]
#[command(about = "Build a static HTML site from a directory of Markdown pages")]
#[command(version)]
struct Cli {
    /// Site config file
    #[arg(short, long, default_value = DEFAULT_FILE_NAME)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Copy static assets and generate every page into the output directory
    Build {
        /// Prefix for root-relative links, e.g. `/my-repo/`
        base_path: Option<String>,
    },
    /// Write a default config file
    Init,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Build { base_path } => {
            let config = load_config(&cli.config)?;
            let config = Config {
                base_path: base_path.unwrap_or(config.base_path),
                ..config
            };
            let pages = build(&config)?;
            log::info!(
                "Built {} page(s) into {}",
                pages.len(),
                config.output_dir.display()
            );
        }
        Commands::Init => init(&cli.config)?,
    }

    Ok(())
}

fn load_config(config_path: &Path) -> Result<Config> {
    log::info!("Config path: {}", config_path.display());

    match Config::load_from_path(config_path)? {
        Some(config) => Ok(config),
        None => {
            log::info!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}

fn build(config: &Config) -> Result<Vec<PathBuf>> {
    io::copy_static(&config.static_dir, &config.output_dir).with_context(|| {
        format!(
            "Failed to copy {} to {}",
            config.static_dir.display(),
            config.output_dir.display()
        )
    })?;

    let pages = io::generate_pages_recursive(
        &config.content_dir,
        &config.template,
        &config.output_dir,
        &config.base_path,
    )
    .with_context(|| format!("Failed to build pages from {}", config.content_dir.display()))?;

    Ok(pages)
}

fn init(config_path: &Path) -> Result<()> {
    if config_path.exists() {
        bail!("Config file already exists at {}", config_path.display());
    }

    Config::default()
        .save_to_path(config_path)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    log::info!("Wrote default config to {}", config_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_cli_parses_build_with_base_path() {
        let cli = Cli::try_parse_from(["markdown-pages", "build", "/repo/"]).unwrap();

        assert_eq!(cli.config, PathBuf::from("site.toml"));
        assert!(matches!(
            cli.command,
            Commands::Build { base_path: Some(ref p) } if p == "/repo/"
        ));
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["markdown-pages"]).is_err());
    }

    #[test]
    fn test_load_config_resolves_against_config_dir() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "site.toml", "output_dir = \"docs\"\n");

        let config = load_config(&dir.path().join("site.toml")).unwrap();

        assert_eq!(config.output_dir, dir.path().join("docs"));
        assert_eq!(config.content_dir, dir.path().join("content"));
    }

    #[test]
    fn test_load_config_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();

        let config = load_config(&dir.path().join("site.toml")).unwrap();

        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_build_copies_static_and_generates_pages() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "static/index.css", "body {}");
        write(dir.path(), "content/index.md", "# Home\n\n[About](/about)");
        write(dir.path(), "content/blog/post.md", "# Post\n\nText");
        write(
            dir.path(),
            "template.html",
            "<title>{{ Title }}</title>{{ Content }}",
        );
        let config = Config {
            content_dir: dir.path().join("content"),
            static_dir: dir.path().join("static"),
            output_dir: dir.path().join("public"),
            template: dir.path().join("template.html"),
            base_path: "/site/".to_string(),
        };

        let pages = build(&config).unwrap();

        let public = dir.path().join("public");
        assert_eq!(
            pages,
            vec![public.join("blog/post.html"), public.join("index.html")]
        );
        assert!(public.join("index.css").exists());
        assert_eq!(
            fs::read_to_string(public.join("index.html")).unwrap(),
            "<title>Home</title><div><h1>Home</h1><p><a href=\"/site/about\">About</a></p></div>"
        );
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("site.toml");

        init(&config_path).unwrap();
        let written = Config::load_from_path(&config_path).unwrap().unwrap();
        assert_eq!(written.output_dir, dir.path().join("public"));
        assert_eq!(written.base_path, "/");

        assert!(init(&config_path).is_err());
    }
}
