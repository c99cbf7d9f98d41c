//! Entry scaffolding for `quo new`.
//!
//! Writes today's entry to `{source}/{categories}_{YYYY-MM-DD}.md` with a
//! complete metadata header, then opens it in `[new] editor`:
//!
//! ```text
//! Title:          Monday 15 January, 2024
//! Authors:        Alice
//! Date:           2024-01-15
//! Tags:
//! HeaderImage:
//! Category:       Blog, Diary
//! Publish:        True
//! ```

use crate::{
    config::SiteConfig,
    generator::title_case,
    log,
    utils::{
        date::{format_date, today},
        exec::open_with,
    },
};
use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Create today's entry for `categories` and open it in the editor.
pub fn new_entry(config: &SiteConfig, categories: &[String]) -> Result<PathBuf> {
    let date = today();
    let title = format_date(&date, &config.base.timestamp_format);
    let path = entry_path(&config.build.source, categories, &date);

    if create_entry(&path, &title, &date, &config.base.author, categories)? {
        log!("new"; "created {}", path.display());
    } else {
        log!("new"; "{} already exists", path.display());
    }

    if !open_with(&config.new.editor, &path)? {
        log!("new"; "no [new.editor] configured, open {} manually", path.display());
    }

    Ok(path)
}

/// `{source}/{categories joined by _}_{date}.md`, or `{date}.md` without categories.
fn entry_path(source: &Path, categories: &[String], date: &str) -> PathBuf {
    let stem = if categories.is_empty() {
        date.to_owned()
    } else {
        let cats: Vec<String> = categories.iter().map(|c| c.to_lowercase()).collect();
        format!("{}_{date}", cats.join("_"))
    };
    source.join(format!("{stem}.md"))
}

/// Write the header template to `path`.
///
/// Returns `false` without touching the file if it already exists.
fn create_entry(
    path: &Path,
    title: &str,
    date: &str,
    author: &str,
    categories: &[String],
) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let categories: Vec<String> = categories.iter().map(|c| title_case(c)).collect();
    let header = format!(
        "Title:          {title}\n\
         Authors:        {author}\n\
         Date:           {date}\n\
         Tags:           \n\
         HeaderImage:    \n\
         Category:       {}\n\
         Publish:        True\n\n\n",
        categories.join(", ")
    );

    fs::write(path, header).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(true)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_document;

    fn cats(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| (*n).to_owned()).collect()
    }

    #[test]
    fn test_entry_path() {
        let source = Path::new("/site/markdown");

        assert_eq!(
            entry_path(source, &cats(&["Blog", "diary"]), "2024-01-15"),
            source.join("blog_diary_2024-01-15.md")
        );
        assert_eq!(entry_path(source, &[], "2024-01-15"), source.join("2024-01-15.md"));
    }

    #[test]
    fn test_create_entry_parses_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("markdown").join("blog_2024-01-15.md");

        let created = create_entry(
            &path,
            "Monday 15 January, 2024",
            "2024-01-15",
            "Alice",
            &cats(&["blog", "my diary"]),
        )
        .unwrap();
        assert!(created);

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("Category:       Blog, My Diary\n"));

        let record = parse_document(&text).unwrap().unwrap();
        assert_eq!(record.title(), "Monday 15 January, 2024");
        assert_eq!(record.authors(), "Alice");
        assert_eq!(record.date(), "2024-01-15");
        assert_eq!(record.categories(), ["blog", "mydiary"]);
        assert!(record.publish());
        assert_eq!(record.normalized_tags().count(), 0);
    }

    #[test]
    fn test_create_entry_keeps_existing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("entry.md");
        fs::write(&path, "my words").unwrap();

        let created = create_entry(&path, "T", "2024-01-15", "", &cats(&["blog"])).unwrap();
        assert!(!created);
        assert_eq!(fs::read_to_string(&path).unwrap(), "my words");
    }

    #[test]
    fn test_new_entry_without_editor() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = SiteConfig::default();
        config.build.source = dir.path().to_path_buf();

        let path = new_entry(&config, &cats(&["Blog"])).unwrap();
        assert!(path.exists());
        assert!(path.file_name().unwrap().to_string_lossy().starts_with("blog_"));
    }
}
