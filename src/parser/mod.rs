//! Source document parsing.
//!
//! Turns the text of one source file into a [`DocumentRecord`]:
//!
//! ```text
//! text ──► split_header() ──► Metadata ─────────────┐
//!               │                                   ├──► DocumentRecord
//!               └──► body ──► render() ──► html ────┤
//!                                 └──► text ──► tokenize()
//! ```

mod markdown;
mod meta;

pub use markdown::{Rendered, render};
pub use meta::split_header;

use crate::site::{DocumentRecord, SiteError};
use regex::Regex;
use std::sync::LazyLock;

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").unwrap());

/// Lowercase word tokens of `text`, in order, duplicates kept.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD.find_iter(&lowered)
        .map(|m| m.as_str().to_owned())
        .collect()
}

/// Parse one source file.
///
/// Returns `Ok(None)` if the file has no metadata header, and an error if
/// the header is missing a required field.
pub fn parse_document(text: &str) -> Result<Option<DocumentRecord>, SiteError> {
    let Some((meta, body)) = split_header(text) else {
        return Ok(None);
    };

    let Rendered { html, text } = render(body);
    DocumentRecord::from_metadata(&meta, html, tokenize(&text)).map(Some)
}
