//! Search index types and the stop-word exclusion pass.
//!
//! A term that links to more than `threshold` pages carries little search
//! value and is dropped, unless it is a tag. Tags are always kept, however
//! common they are.

use indexmap::{IndexMap, IndexSet};

/// Term → unique page links, both in discovery order.
pub type SearchIndex = IndexMap<String, IndexSet<String>>;

/// Lowercase tag → number of occurrences.
pub type TagTable = IndexMap<String, usize>;

/// Link-count cutoff for `page_count` published pages.
///
/// Fractional on purpose: with 2 pages and 40% the cutoff is 0.8, so a term
/// on a single page is already above it.
pub fn threshold(page_count: usize, percentage: u32) -> f64 {
    (page_count as f64 / 100.0) * f64::from(percentage)
}

/// Remove every non-tag term linking to more than `threshold` pages.
///
/// Returns the filtered index (order preserved) and the excluded terms,
/// sorted.
pub fn filter(mut index: SearchIndex, tags: &TagTable, threshold: f64) -> (SearchIndex, Vec<String>) {
    let mut excluded = Vec::new();
    index.retain(|term, links| {
        let common = links.len() as f64 > threshold && !tags.contains_key(term);
        if common {
            excluded.push(term.clone());
        }
        !common
    });
    excluded.sort();
    (index, excluded)
}
