//! Site-wide metadata aggregation.
//!
//! Folds the published records of one build into everything the listing and
//! search pages need, in a single ordered pass:
//!
//! ```text
//! records ──► aggregate_raw() ──► RawAggregate ──► filter() ──► rank()
//!             (categories, tags,                  (stop words)  (word cloud)
//!              timeline, raw index)
//! ```
//!
//! Record order is part of the result: the first record to claim a
//! timestamp keeps it, later ones are shifted forward. Callers must pass
//! records in a stable order.

use super::{
    cloud::{WordCloud, rank},
    error::SiteError,
    index::{SearchIndex, TagTable, filter, threshold},
    record::DocumentRecord,
    timeline::{PageRef, Timeline},
};
use crate::utils::date::parse_date;
use chrono::{NaiveDateTime, Timelike, Utc};
use educe::Educe;
use indexmap::IndexSet;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeSet, sync::LazyLock};

/// Deduplicated category names, first-seen order.
pub type Categories = IndexSet<String>;

/// Which terms of a record feed the search index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexMode {
    /// Body words only.
    IndexOnly,
    /// Tags only.
    TagsOnly,
    /// Body words and tags (default).
    #[default]
    IndexAndTags,
}

impl IndexMode {
    const fn body(self) -> bool {
        matches!(self, Self::IndexOnly | Self::IndexAndTags)
    }

    const fn tags(self) -> bool {
        matches!(self, Self::TagsOnly | Self::IndexAndTags)
    }
}

/// Settings consumed by the aggregator.
#[derive(Debug, Clone, Copy, Educe)]
#[educe(Default)]
pub struct AggregateConfig {
    pub index_mode: IndexMode,

    /// Terms on more than this share of pages are dropped (unless tags).
    #[educe(Default = 40)]
    pub ignore_threshold_percentage: u32,
}

/// Output of the ordered pass, before stop-word exclusion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawAggregate {
    pub categories: Categories,
    pub tags: TagTable,
    pub timeline: Timeline,
    pub index: SearchIndex,
}

/// Everything the page emitters consume.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteMetadata {
    pub categories: Categories,
    pub tags: TagTable,
    pub timeline: Timeline,
    /// Filtered search index.
    pub index: SearchIndex,
    pub word_cloud: WordCloud,
    /// Terms removed as too common, sorted.
    pub excluded: Vec<String>,
    pub threshold: f64,
    pub page_count: usize,
}

// ============================================================================
// Public API
// ============================================================================

/// Aggregate `records`, treating undated records as written now (UTC).
pub fn aggregate(records: &[DocumentRecord], config: &AggregateConfig) -> Result<SiteMetadata, SiteError> {
    aggregate_at(records, config, now())
}

/// Aggregate `records` with an explicit instant for undated records.
pub fn aggregate_at(
    records: &[DocumentRecord],
    config: &AggregateConfig,
    now: NaiveDateTime,
) -> Result<SiteMetadata, SiteError> {
    let RawAggregate {
        categories,
        tags,
        timeline,
        index,
    } = aggregate_raw(records, config.index_mode, now)?;

    let page_count = records.len();
    let threshold = threshold(page_count, config.ignore_threshold_percentage);
    let (index, excluded) = filter(index, &tags, threshold);
    let word_cloud = rank(&index);

    Ok(SiteMetadata {
        categories,
        tags,
        timeline,
        index,
        word_cloud,
        excluded,
        threshold,
        page_count,
    })
}

/// The ordered pass: categories, tag counts, timeline and raw index.
pub fn aggregate_raw(
    records: &[DocumentRecord],
    mode: IndexMode,
    now: NaiveDateTime,
) -> Result<RawAggregate, SiteError> {
    let mut raw = RawAggregate::default();

    for record in records {
        let timestamp = resolve_timestamp(record, now)?;
        let tags: Vec<String> = record.normalized_tags().collect();
        let terms = candidate_terms(record, &tags, mode);

        for category in record.categories() {
            raw.categories.insert(category.clone());

            for tag in &tags {
                *raw.tags.entry(tag.clone()).or_default() += 1;
            }

            let link = record.link(category);
            raw.timeline
                .insert(category, timestamp, PageRef::new(record.title(), link.as_str()))?;

            for term in &terms {
                raw.index
                    .entry((*term).to_owned())
                    .or_default()
                    .insert(link.clone());
            }
        }
    }

    Ok(raw)
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Current UTC time, truncated to whole seconds.
///
/// Header dates are UTC too, so undated entries sort against dated ones
/// the same way on every machine.
fn now() -> NaiveDateTime {
    let now = Utc::now().naive_utc();
    now.with_nanosecond(0).unwrap_or(now)
}

fn resolve_timestamp(record: &DocumentRecord, now: NaiveDateTime) -> Result<NaiveDateTime, SiteError> {
    let date = record.date();
    if date.is_empty() {
        return Ok(now);
    }
    parse_date(date).ok_or_else(|| SiteError::InvalidDate {
        title: record.title().to_owned(),
        date: date.to_owned(),
    })
}

/// Decimal digit (Unicode `Nd`) at the start of a word.
static LEADING_DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d").unwrap());

/// Body tokens worth indexing: no leading digit, 3+ chars, no underscore.
fn is_index_word(word: &str) -> bool {
    !LEADING_DIGIT.is_match(word)
        && word.chars().count() > 2
        && !word.contains('_')
}

/// Unique candidate terms of one record, sorted.
fn candidate_terms<'a>(
    record: &'a DocumentRecord,
    tags: &'a [String],
    mode: IndexMode,
) -> BTreeSet<&'a str> {
    let mut terms = BTreeSet::new();
    if mode.body() {
        terms.extend(
            record
                .index()
                .iter()
                .map(|word| word.trim())
                .filter(|word| is_index_word(word)),
        );
    }
    if mode.tags() {
        terms.extend(tags.iter().map(String::as_str));
    }
    terms
}

// ============================================================================
// Tests
// ============================================================================
