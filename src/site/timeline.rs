//! Collision-free chronological index of entries.
//!
//! Every insertion lands on its own timestamp key. When the requested
//! second is taken (by any category), the entry is pushed forward one
//! second at a time, up to [`SLOT_WINDOW`] candidate seconds in total.
//! Listings then walk the keys newest-first and get a strict total order
//! without secondary sort keys.
//!
//! ```text
//! insert(blog, 10:00:00)  ──► 10:00:00 { blog }
//! insert(blog, 10:00:00)  ──► 10:00:01 { blog }   (shifted)
//! insert(diary, 10:00:00) ──► 10:00:02 { diary }  (shifted)
//! ```

use super::error::SiteError;
use chrono::{NaiveDateTime, TimeDelta};
use serde::Serialize;
use std::collections::BTreeMap;

/// Number of candidate seconds tried, starting at the requested one.
pub const SLOT_WINDOW: i64 = 3600;

/// Title and site-relative link of an entry page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageRef {
    pub title: String,
    pub link: String,
}

impl PageRef {
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
        }
    }
}

/// Timestamp → category → page reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timeline {
    entries: BTreeMap<NaiveDateTime, BTreeMap<String, PageRef>>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `page` for `category` at the first free second `>= timestamp`.
    ///
    /// Returns the effective timestamp. Fails without touching the timeline
    /// if all [`SLOT_WINDOW`] candidate seconds are occupied.
    pub fn insert(
        &mut self,
        category: &str,
        timestamp: NaiveDateTime,
        page: PageRef,
    ) -> Result<NaiveDateTime, SiteError> {
        let slot = (0..SLOT_WINDOW)
            .filter_map(|offset| timestamp.checked_add_signed(TimeDelta::seconds(offset)))
            .find(|candidate| !self.entries.contains_key(candidate))
            .ok_or_else(|| SiteError::TimelineFull {
                category: category.to_owned(),
                timestamp,
                window: SLOT_WINDOW,
            })?;

        self.entries
            .entry(slot)
            .or_default()
            .insert(category.to_owned(), page);
        Ok(slot)
    }

    /// Page stored for `category` at exactly `timestamp`.
    pub fn get(&self, timestamp: &NaiveDateTime, category: &str) -> Option<&PageRef> {
        self.entries.get(timestamp)?.get(category)
    }

    pub fn contains(&self, timestamp: &NaiveDateTime) -> bool {
        self.entries.contains_key(timestamp)
    }

    /// Number of distinct timestamp keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All timestamp keys, oldest first.
    pub fn timestamps(&self) -> impl Iterator<Item = &NaiveDateTime> {
        self.entries.keys()
    }

    /// All entries, newest first.
    pub fn recent(&self) -> impl Iterator<Item = (&NaiveDateTime, &str, &PageRef)> {
        self.entries.iter().rev().flat_map(|(timestamp, pages)| {
            pages
                .iter()
                .map(move |(category, page)| (timestamp, category.as_str(), page))
        })
    }

    /// Entries of one category, newest first.
    pub fn recent_in<'a>(
        &'a self,
        category: &'a str,
    ) -> impl Iterator<Item = (&'a NaiveDateTime, &'a PageRef)> + 'a {
        self.recent()
            .filter(move |(_, cat, _)| *cat == category)
            .map(|(timestamp, _, page)| (timestamp, page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    fn page(n: usize) -> PageRef {
        PageRef::new(format!("Entry {n}"), format!("blog/entry-{n}.html"))
    }

    // ========================================================================
    // Insertion Tests
    // ========================================================================

    #[test]
    fn test_insert_free_slot() {
        let mut timeline = Timeline::new();
        let slot = timeline.insert("blog", at(10, 0, 0), page(1)).unwrap();

        assert_eq!(slot, at(10, 0, 0));
        assert_eq!(timeline.get(&slot, "blog"), Some(&page(1)));
    }

    #[test]
    fn test_insert_collision_shifts_one_second() {
        let mut timeline = Timeline::new();
        timeline.insert("blog", at(10, 0, 0), page(1)).unwrap();
        let slot = timeline.insert("blog", at(10, 0, 0), page(2)).unwrap();

        assert_eq!(slot, at(10, 0, 1));
    }

    #[test]
    fn test_insert_collision_across_categories() {
        let mut timeline = Timeline::new();
        timeline.insert("blog", at(10, 0, 0), page(1)).unwrap();
        let slot = timeline.insert("diary", at(10, 0, 0), page(2)).unwrap();

        assert_eq!(slot, at(10, 0, 1));
        assert!(timeline.get(&at(10, 0, 0), "diary").is_none());
        assert!(timeline.get(&slot, "diary").is_some());
    }

    #[test]
    fn test_insert_takes_first_gap() {
        let mut timeline = Timeline::new();
        timeline.insert("blog", at(10, 0, 0), page(1)).unwrap();
        timeline.insert("blog", at(10, 0, 1), page(2)).unwrap();
        timeline.insert("blog", at(10, 0, 3), page(3)).unwrap();

        // 10:00:02 is the first free second after 10:00:00
        let slot = timeline.insert("blog", at(10, 0, 0), page(4)).unwrap();
        assert_eq!(slot, at(10, 0, 2));
    }

    #[test]
    fn test_each_insert_adds_one_key() {
        let mut timeline = Timeline::new();
        for n in 0..50 {
            let before = timeline.len();
            let slot = timeline.insert("blog", at(10, 0, (n % 3) as u32), page(n)).unwrap();
            assert_eq!(timeline.len(), before + 1);
            assert!(slot >= at(10, 0, (n % 3) as u32));
        }
    }

    #[test]
    fn test_insert_window_exhausted() {
        let mut timeline = Timeline::new();
        for n in 0..SLOT_WINDOW as usize {
            timeline.insert("blog", at(10, 0, 0), page(n)).unwrap();
        }
        assert_eq!(timeline.len(), SLOT_WINDOW as usize);

        let before = timeline.clone();
        let err = timeline.insert("blog", at(10, 0, 0), page(0)).unwrap_err();
        assert!(matches!(err, SiteError::TimelineFull { window: SLOT_WINDOW, .. }));
        assert_eq!(timeline, before);

        // The next hour is still free
        let slot = timeline.insert("blog", at(11, 0, 0), page(0)).unwrap();
        assert_eq!(slot, at(11, 0, 0));
    }

    // ========================================================================
    // Iteration Tests
    // ========================================================================

    #[test]
    fn test_recent_is_newest_first() {
        let mut timeline = Timeline::new();
        timeline.insert("blog", at(9, 0, 0), page(1)).unwrap();
        timeline.insert("diary", at(12, 0, 0), page(2)).unwrap();
        timeline.insert("blog", at(11, 0, 0), page(3)).unwrap();

        let titles: Vec<_> = timeline.recent().map(|(_, _, p)| p.title.as_str()).collect();
        assert_eq!(titles, ["Entry 2", "Entry 3", "Entry 1"]);

        let blog: Vec<_> = timeline
            .recent_in("blog")
            .map(|(_, p)| p.title.as_str())
            .collect();
        assert_eq!(blog, ["Entry 3", "Entry 1"]);
    }
}
