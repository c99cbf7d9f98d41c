//! HTML page emitters.
//!
//! | Module      | Output                                           |
//! |-------------|--------------------------------------------------|
//! | [`entry`]   | `{category}/{slug}.html` per published entry     |
//! | [`listing`] | front page and `{category}/index.html`           |
//! | [`search`]  | search page and optional `search.json`           |
//!
//! Pages are plain HTML assembled with `write!`. Every interpolated string
//! goes through [`escape`].

pub mod entry;
pub mod listing;
pub mod search;

use crate::{config::SiteConfig, utils::minify::minify};
use anyhow::{Context, Result};
use std::{borrow::Cow, fmt::Write, fs, path::Path};

/// Escape text for use in HTML content and attribute values.
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Document head plus opening `<body>` and `<header>`.
fn open_page(out: &mut String, title: &str, heading: &str, config: &SiteConfig) {
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(out, "<title>{}</title>", escape(title));
    if let Some(css) = config.base.css.as_deref().filter(|css| !css.is_empty()) {
        let _ = writeln!(
            out,
            "<link rel=\"stylesheet\" type=\"text/css\" media=\"screen\" href=\"{}\" />",
            escape(css)
        );
    }
    out.push_str("</head>\n<body>\n<header>\n");
    let _ = writeln!(out, "<h3>{}</h3>", escape(heading));
}

/// Navigation bar. `category` adds a link to the category index, relative
/// to a page inside that category's directory.
fn nav(out: &mut String, config: &SiteConfig, category: Option<&str>) {
    out.push_str("<nav>\n");
    let _ = write!(out, "<a href=\"{}\">Home</a>", escape(&config.base.home_href()));
    if let Some(category) = category {
        let _ = write!(out, " | <a href=\"index.html\">{}</a>", escape(&title_case(category)));
    }
    let _ = writeln!(
        out,
        " | <a href=\"{}\">Search</a>",
        escape(&config.base.search_href(None))
    );
    out.push_str("</nav>\n</header>\n");
}

fn close_page(out: &mut String) {
    out.push_str("</body>\n</html>\n");
}

/// Uppercase the first letter of every whitespace-separated word.
pub fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Write a page under the output directory, minifying if enabled.
fn write_page(path: &Path, html: &str, config: &SiteConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    let html = minify(html.as_bytes(), config);
    fs::write(path, &*html).with_context(|| format!("Failed to write {}", path.display()))
}

// ============================================================================
// Tests
// ============================================================================
