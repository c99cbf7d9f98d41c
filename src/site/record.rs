//! Document records and the metadata header they are built from.
//!
//! A [`DocumentRecord`] is produced in one step from a parsed [`Metadata`]
//! header plus the rendered body. Once built it is never mutated; the
//! aggregator and the page emitters only ever borrow it.
//!
//! # Header Fields
//!
//! | Key           | Record field   | Notes                                  |
//! |---------------|----------------|----------------------------------------|
//! | `Title`       | `title`, `slug`| slug derived from the title            |
//! | `Authors`     | `authors`      |                                        |
//! | `Date`        | `date`         | may be empty ("now")                   |
//! | `Tags`        | `tags`         | split on `,`, kept raw                 |
//! | `HeaderImage` | `header_image` | may be empty                           |
//! | `Category`    | `categories`   | split on `,`, spaces removed, lowercase|
//! | `Publish`     | `publish`      | `true` / `yes`, case-insensitive       |

use super::error::SiteError;
use crate::utils::slug::slugify;
use indexmap::IndexMap;

/// Required header keys, in the order they are checked.
const REQUIRED_FIELDS: [&str; 7] = [
    "title",
    "authors",
    "date",
    "tags",
    "headerimage",
    "category",
    "publish",
];

// ============================================================================
// Metadata
// ============================================================================

/// Raw `Key: value` header of a source document.
///
/// Keys are stored lowercase. A key may span several lines; only the first
/// line is used when building a record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    fields: IndexMap<String, Vec<String>>,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new key, replacing any previous value for it.
    pub fn insert(&mut self, key: &str, value: impl Into<String>) {
        self.fields
            .insert(key.trim().to_lowercase(), vec![value.into()]);
    }

    /// Append a continuation line to an existing key.
    ///
    /// Returns `false` if the key has not been inserted yet.
    pub fn append(&mut self, key: &str, line: impl Into<String>) -> bool {
        match self.fields.get_mut(&key.trim().to_lowercase()) {
            Some(lines) => {
                lines.push(line.into());
                true
            }
            None => false,
        }
    }

    /// First line of the value for `key`.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.fields
            .get(&key.to_lowercase())
            .and_then(|lines| lines.first())
            .map(String::as_str)
    }

    /// All lines of the value for `key`.
    pub fn lines(&self, key: &str) -> Option<&[String]> {
        self.fields.get(&key.to_lowercase()).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    fn require(&self, field: &'static str) -> Result<&str, SiteError> {
        self.first(field)
            .ok_or(SiteError::IncompleteRecord { field })
    }
}

// ============================================================================
// Document Record
// ============================================================================

/// Normalized representation of one parsed document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRecord {
    title: String,
    slug: String,
    categories: Vec<String>,
    authors: String,
    date: String,
    tags: Vec<String>,
    header_image: String,
    publish: bool,
    content: String,
    index: Vec<String>,
}

impl DocumentRecord {
    /// Build a record from a metadata header, rendered HTML and body tokens.
    ///
    /// Fails with [`SiteError::IncompleteRecord`] naming the first missing
    /// header key, or [`SiteError::EmptyCategory`] if `Category` holds no
    /// usable name.
    pub fn from_metadata(
        meta: &Metadata,
        content: String,
        index: Vec<String>,
    ) -> Result<Self, SiteError> {
        for field in REQUIRED_FIELDS {
            meta.require(field)?;
        }

        let title = meta.require("title")?.trim().to_owned();
        let categories = parse_categories(meta.require("category")?);
        if categories.is_empty() {
            return Err(SiteError::EmptyCategory { title });
        }

        Ok(Self {
            slug: slugify(&title),
            title,
            categories,
            authors: meta.require("authors")?.trim().to_owned(),
            date: meta.require("date")?.trim().to_owned(),
            tags: meta.require("tags")?.split(',').map(str::to_owned).collect(),
            header_image: meta.require("headerimage")?.trim().to_owned(),
            publish: parse_publish(meta.require("publish")?),
            content,
            index,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn authors(&self) -> &str {
        &self.authors
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    /// Raw tags as written in the header (untrimmed, case kept).
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn header_image(&self) -> &str {
        &self.header_image
    }

    pub const fn publish(&self) -> bool {
        self.publish
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Lowercase word tokens of the plain-text body.
    pub fn index(&self) -> &[String] {
        &self.index
    }

    /// Trimmed, lowercased tags with empty entries dropped.
    pub fn normalized_tags(&self) -> impl Iterator<Item = String> + '_ {
        self.tags
            .iter()
            .map(|tag| tag.trim().to_lowercase())
            .filter(|tag| !tag.is_empty())
    }

    /// Site-relative link of this record's page within `category`.
    pub fn link(&self, category: &str) -> String {
        format!("{category}/{}.html", self.slug)
    }
}

/// Split a `Category` header into unique, lowercase, space-free names.
fn parse_categories(raw: &str) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for category in raw.split(',') {
        let category: String = category
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();
        if !category.is_empty() && !categories.contains(&category) {
            categories.push(category);
        }
    }
    categories
}

fn parse_publish(raw: &str) -> bool {
    matches!(raw.trim().to_lowercase().as_str(), "true" | "yes")
}
