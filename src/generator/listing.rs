//! Front page and category index pages.
//!
//! Both walk the timeline newest-first. The front page shows every
//! category (reverse-sorted by name) truncated to `entries_to_show` with a
//! `more...` link, followed by the word cloud. A category page lists all of
//! its entries with links relative to the category directory.

use super::{close_page, escape, nav, open_page, write_page};
use crate::{config::SiteConfig, log, site::SiteMetadata};
use anyhow::Result;
use std::fmt::Write;

/// Write the front page and one index page per category.
pub fn write_listings(site: &SiteMetadata, config: &SiteConfig) -> Result<()> {
    let output = &config.build.output;

    write_page(&output.join(&config.base.homepage), &render_front(site, config), config)?;
    log!("page"; "{}", config.base.homepage);

    for category in &site.categories {
        let path = output.join(category).join("index.html");
        write_page(&path, &render_category(site, category, config), config)?;
        log!("page"; "{category}/index.html");
    }
    Ok(())
}

/// Render the front page.
pub fn render_front(site: &SiteMetadata, config: &SiteConfig) -> String {
    let mut out = String::new();
    open_page(&mut out, &config.base.title, &config.base.title, config);
    nav(&mut out, config, None);

    let mut categories: Vec<&String> = site.categories.iter().collect();
    categories.sort_unstable_by(|a, b| b.cmp(a));

    for category in categories {
        let _ = writeln!(out, "<h2>{}</h2>\n<ul>", escape(category));

        let mut entries = site.timeline.recent_in(category);
        for (_, page) in entries.by_ref().take(config.build.entries_to_show) {
            let _ = writeln!(
                out,
                "<li><a href=\"{}\">{}</a></li>",
                escape(&page.link),
                escape(&page.title)
            );
        }
        if entries.next().is_some() {
            let _ = writeln!(
                out,
                "<li><a href=\"{}/index.html\">more...</a></li>",
                escape(category)
            );
        }
        out.push_str("</ul>\n");
    }

    render_word_cloud(&mut out, site, config);
    close_page(&mut out);
    out
}

/// Render the index page of one category.
pub fn render_category(site: &SiteMetadata, category: &str, config: &SiteConfig) -> String {
    let mut out = String::new();
    let title = format!("{} - {}", config.base.title, category);
    open_page(&mut out, &title, &title, config);
    nav(&mut out, config, None);

    let prefix = format!("{category}/");
    let _ = writeln!(out, "<h2>{}</h2>\n<ul>", escape(category));
    for (_, page) in site.timeline.recent_in(category) {
        let link = page.link.strip_prefix(&prefix).unwrap_or(&page.link);
        let _ = writeln!(
            out,
            "<li><a href=\"{}\">{}</a></li>",
            escape(link),
            escape(&page.title)
        );
    }
    out.push_str("</ul>\n");

    close_page(&mut out);
    out
}

/// Most linked terms, each pointing at its search anchor.
fn render_word_cloud(out: &mut String, site: &SiteMetadata, config: &SiteConfig) {
    if site.word_cloud.is_empty() || config.build.cloud_size == 0 {
        return;
    }

    out.push_str("<h2>Words</h2>\n<ul class=\"word-cloud\">\n");
    for (term, count) in site.word_cloud.iter().take(config.build.cloud_size) {
        let _ = writeln!(
            out,
            "<li><a href=\"{}\">{}</a> ({count})</li>",
            escape(&config.base.search_href(Some(term.as_str()))),
            escape(term)
        );
    }
    out.push_str("</ul>\n");
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::{AggregateConfig, aggregate_at, record_tests::record};
    use chrono::NaiveDate;
    use std::fs;

    fn site() -> SiteMetadata {
        let records: Vec<_> = (1..=4)
            .map(|day| {
                record(
                    &format!("Blog {day}"),
                    "Blog",
                    "news",
                    &format!("2024-01-0{day}"),
                    &["words"],
                )
            })
            .chain([record("Dear Diary", "Diary", "", "2024-02-01", &["words"])])
            .collect();
        let now = NaiveDate::from_ymd_opt(2030, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        aggregate_at(&records, &AggregateConfig::default(), now).unwrap()
    }

    fn config(entries_to_show: usize) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.build.entries_to_show = entries_to_show;
        config
    }

    #[test]
    fn test_front_page_order_and_truncation() {
        let html = render_front(&site(), &config(2));

        // Categories reverse-sorted
        let diary = html.find("<h2>diary</h2>").unwrap();
        let blog = html.find("<h2>blog</h2>").unwrap();
        assert!(diary < blog);

        // Newest two blog entries, then more...
        let four = html.find("Blog 4").unwrap();
        let three = html.find("Blog 3").unwrap();
        assert!(four < three);
        assert!(!html.contains("Blog 2"));
        assert!(html.contains(r#"<a href="blog/index.html">more...</a>"#));
        assert!(!html.contains(r#"<a href="diary/index.html">more...</a>"#));
    }

    #[test]
    fn test_front_page_no_more_link_when_exact() {
        let html = render_front(&site(), &config(4));
        assert!(html.contains("Blog 1"));
        assert!(!html.contains("more..."));
    }

    #[test]
    fn test_front_page_word_cloud() {
        let html = render_front(&site(), &config(10));

        // "news" is a tag on four pages and survives the threshold
        assert!(html.contains(r#"<a href="/search.html#news">news</a> (4)"#));
        assert!(!html.contains("#words"));
    }

    #[test]
    fn test_category_page_relative_links() {
        let html = render_category(&site(), "blog", &config(1));

        assert!(html.contains(r#"<a href="blog-1.html">Blog 1</a>"#));
        assert!(html.contains(r#"<a href="blog-4.html">Blog 4</a>"#));
        assert!(!html.contains("more..."));
        assert!(!html.contains("Dear Diary"));
    }

    #[test]
    fn test_write_listings() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config(10);
        config.build.output = dir.path().to_path_buf();

        write_listings(&site(), &config).unwrap();

        assert!(dir.path().join("index.html").exists());
        assert!(dir.path().join("blog/index.html").exists());
        let diary = fs::read_to_string(dir.path().join("diary/index.html")).unwrap();
        assert!(diary.contains("dear-diary.html"));
    }
}
