//! Page templating: title/content substitution and base path rewriting.

use crate::error::RenderError;
use crate::parsing::{extract_title, markdown_to_html};

pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// Replaces every title and content placeholder in `template`.
pub fn fill_template(template: &str, title: &str, content: &str) -> String {
    template
        .replace(TITLE_PLACEHOLDER, title)
        .replace(CONTENT_PLACEHOLDER, content)
}

/// Rewrites root-relative `href="/` and `src="/` references to start with
/// `base_path`, so the site can be served from a sub path.
pub fn rewrite_base_path(html: &str, base_path: &str) -> String {
    html.replace(r#"href="/"#, &format!(r#"href="{base_path}"#))
        .replace(r#"src="/"#, &format!(r#"src="{base_path}"#))
}

/// Renders a Markdown document into a complete page.
///
/// The title is extracted first, so a document without a level 1 heading
/// fails before any HTML is produced.
pub fn render_page(markdown: &str, template: &str, base_path: &str) -> Result<String, RenderError> {
    let title = extract_title(markdown)?;
    let content = markdown_to_html(markdown)?;
    Ok(rewrite_base_path(
        &fill_template(template, &title, &content),
        base_path,
    ))
}
