//! Entry pages.
//!
//! One page per category of each published record, at
//! `{output}/{category}/{slug}.html`:
//!
//! ```text
//! <header>  site title - Category, nav (Home | Category | Search)
//! <article> optional header image, title, rendered body
//! <footer>  authors, formatted date / tag links to search anchors
//! ```

use super::{close_page, escape, nav, open_page, title_case, write_page};
use crate::{config::SiteConfig, site::DocumentRecord, utils::date::format_date};
use anyhow::Result;
use std::fmt::Write;

/// Write the pages of `record`, one per category.
pub fn write_entry(record: &DocumentRecord, config: &SiteConfig) -> Result<()> {
    for category in record.categories() {
        let html = render_entry(record, category, config);
        let path = config.build.output.join(record.link(category));
        write_page(&path, &html, config)?;
    }
    Ok(())
}

/// Render the page of `record` inside `category`.
pub fn render_entry(record: &DocumentRecord, category: &str, config: &SiteConfig) -> String {
    let mut out = String::new();
    let title = format!("{} ({})", record.title(), title_case(category));
    let heading = format!("{} - {}", config.base.title, title_case(category));

    open_page(&mut out, &title, &heading, config);
    nav(&mut out, config, Some(category));

    out.push_str("<article>\n");
    if !record.header_image().is_empty() {
        let src = format!("../{}/{}", config.build.media, record.header_image());
        let _ = writeln!(out, "<figure><img src=\"{}\" /></figure>", escape(&src));
    }
    let _ = writeln!(out, "<h2>{}</h2>", escape(record.title()));
    out.push_str(record.content());
    out.push_str("\n</article>\n<footer>\n");

    let date = format_date(record.date(), &config.base.timestamp_format);
    let _ = writeln!(out, "<h5>{}, {}</h5>", escape(record.authors()), escape(&date));

    let tags: Vec<String> = record
        .normalized_tags()
        .map(|tag| {
            format!(
                "<a href=\"{}\">{}</a>",
                escape(&config.base.search_href(Some(tag.as_str()))),
                escape(&tag)
            )
        })
        .collect();
    if !tags.is_empty() {
        let _ = writeln!(out, "<small>Tags: {}</small>", tags.join(", "));
    }
    out.push_str("</footer>\n");

    close_page(&mut out);
    out
}

// ============================================================================
// Tests
// ============================================================================
