//! Search page and `search.json`.
//!
//! The page lists every term of the filtered index in sorted order, each
//! as a named anchor followed by the pages containing it. Entry pages and
//! the word cloud link to `{searchpage}#{term}`.

use super::{close_page, escape, nav, open_page, write_page};
use crate::{config::SiteConfig, log, site::SearchIndex};
use anyhow::{Context, Result};
use std::{collections::BTreeMap, fmt::Write, fs};

/// Write the search page, and `search.json` if enabled.
pub fn write_search(index: &SearchIndex, config: &SiteConfig) -> Result<()> {
    let output = &config.build.output;

    write_page(&output.join(&config.base.searchpage), &render_search(index, config), config)?;
    log!("search"; "{} ({} terms)", config.base.searchpage, index.len());

    if config.build.search_json {
        let path = output.join("search.json");
        fs::write(&path, search_json(index)?)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        log!("search"; "search.json");
    }
    Ok(())
}

/// Render the search page.
pub fn render_search(index: &SearchIndex, config: &SiteConfig) -> String {
    let mut out = String::new();
    open_page(&mut out, "Search", &config.base.title, config);
    nav(&mut out, config, None);

    out.push_str("<ul>\n");
    for (term, links) in sorted(index) {
        let term = escape(term);
        let _ = writeln!(out, "<li><b><a id=\"{term}\" name=\"{term}\">{term}</a></b>\n<ul>");
        for link in links {
            let link = escape(link);
            let _ = writeln!(out, "<li><a href=\"{link}\">{link}</a></li>");
        }
        out.push_str("</ul></li>\n");
    }
    out.push_str("</ul>\n");

    close_page(&mut out);
    out
}

/// The filtered index as a JSON object, terms sorted.
pub fn search_json(index: &SearchIndex) -> Result<String> {
    let sorted: BTreeMap<&str, Vec<&str>> = sorted(index)
        .map(|(term, links)| (term, links.iter().map(String::as_str).collect()))
        .collect();
    serde_json::to_string_pretty(&sorted).context("Failed to serialize search index")
}

fn sorted(index: &SearchIndex) -> impl Iterator<Item = (&str, &indexmap::IndexSet<String>)> {
    let mut entries: Vec<_> = index.iter().map(|(term, links)| (term.as_str(), links)).collect();
    entries.sort_unstable_by_key(|(term, _)| *term);
    entries.into_iter()
}

// ============================================================================
// Tests
// ============================================================================
