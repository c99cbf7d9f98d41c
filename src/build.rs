//! Site building orchestration.
//!
//! # Architecture
//!
//! ```text
//! build_site()
//!     │
//!     ├── collect_sources()  ──► sorted Markdown paths
//!     │
//!     ├── parse_sources()    ──► DocumentRecords (parallel, order kept)
//!     │
//!     ├── write_entry()      ──► {category}/{slug}.html (parallel)
//!     │
//!     ├── aggregate()        ──► SiteMetadata (sequential, walk order)
//!     │
//!     └── write_listings() + write_search()
//! ```

use crate::{
    config::SiteConfig,
    generator::{entry::write_entry, listing::write_listings, search::write_search},
    log,
    logger::EntryProgress,
    parser::parse_document,
    site::{DocumentRecord, SiteMetadata, aggregate},
};
use anyhow::{Context, Result, anyhow};
use rayon::prelude::*;
use std::{
    fs,
    path::{Path, PathBuf},
    sync::atomic::{AtomicBool, Ordering},
};
use walkdir::WalkDir;

/// Build the entire site from `config.build.source` into `config.build.output`.
///
/// Returns the aggregated metadata of the published entries.
pub fn build_site(config: &SiteConfig) -> Result<SiteMetadata> {
    let source = &config.build.source;
    if !source.is_dir() {
        return Err(anyhow!("Source directory not found: {}", source.display()));
    }

    let files = collect_sources(source);
    log!("parse"; "reading {} files", files.len());
    let records = parse_sources(&files)?;

    let (published, drafts): (Vec<_>, Vec<_>) =
        records.into_iter().partition(DocumentRecord::publish);
    if !drafts.is_empty() {
        log!("parse"; "skipping {} unpublished", drafts.len());
    }

    write_entries(&published, config)?;

    let site = aggregate(&published, &config.build.aggregate_config())?;
    log_summary(&site);

    write_listings(&site, config)?;
    write_search(&site.index, config)?;

    log!("page"; "done");
    Ok(site)
}

/// Source files under `dir`, sorted by path.
///
/// Skips hidden files and editor backups (`*~`).
fn collect_sources(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            let name = e.file_name().to_string_lossy();
            !name.starts_with('.') && !name.ends_with('~')
        })
        .map(|e| e.into_path())
        .collect()
}

/// Parse every file in parallel, keeping input order.
///
/// Files without a metadata header are not entries and are skipped.
fn parse_sources(files: &[PathBuf]) -> Result<Vec<DocumentRecord>> {
    let parsed = files
        .par_iter()
        .map(|path| -> Result<Option<DocumentRecord>> {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let record = parse_document(&text).with_context(|| format!("in {}", path.display()))?;
            if record.is_none() {
                log!("parse"; "no header, skipping {}", path.display());
            }
            Ok(record)
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(parsed.into_iter().flatten().collect())
}

/// Render entry pages in parallel, stopping at the first failure.
fn write_entries(records: &[DocumentRecord], config: &SiteConfig) -> Result<()> {
    let progress = EntryProgress::new(records.len());
    let has_error = AtomicBool::new(false);

    let result = records.par_iter().try_for_each(|record| {
        if has_error.load(Ordering::Relaxed) {
            return Err(anyhow!("Aborted"));
        }
        if let Err(e) = write_entry(record, config) {
            if !has_error.swap(true, Ordering::Relaxed) {
                log!("error"; "{}: {:#}", record.title(), e);
            }
            return Err(anyhow!("Build failed"));
        }
        if let Some(progress) = &progress {
            progress.tick();
        }
        Ok(())
    });

    if let Some(progress) = &progress {
        progress.finish();
    }
    result?;

    log!("entry"; "{} pages", records.len());
    Ok(())
}

fn log_summary(site: &SiteMetadata) {
    let categories: Vec<&str> = site.categories.iter().map(String::as_str).collect();
    log!("entry"; "categories: {}", categories.join(", "));

    if !site.excluded.is_empty() {
        log!(
            "index";
            "excluding common words (on more than {:.1} of {} pages): {}",
            site.threshold,
            site.page_count,
            site.excluded.join(", ")
        );
    }
    log!("index"; "{} terms", site.index.len());
}

// ============================================================================
// Tests
// ============================================================================
