//! Metadata header extraction.
//!
//! A source file opens with a block of `Key: value` lines, optionally
//! fenced by a leading `---`. The block ends at the first blank line (which
//! is consumed) or at the first line that is neither a field nor a
//! continuation (which stays in the body).
//!
//! ```text
//! Title:       Monday 15 January, 2024
//! Tags:        rust, notes
//!              continuation of tags
//! Category:    Blog
//!
//! Body starts here.
//! ```

use crate::site::Metadata;
use regex::Regex;
use std::sync::LazyLock;

/// `Key: value`, with at most three spaces of indentation.
static FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ {0,3}([A-Za-z0-9_-]+):\s*(.*?)\s*$").unwrap());

/// Continuation line of the previous key: four or more spaces.
static CONTINUATION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^ {4,}(.*?)\s*$").unwrap());

/// Split `text` into its metadata header and the remaining body.
///
/// Returns `None` when the file has no header at all.
pub fn split_header(text: &str) -> Option<(Metadata, &str)> {
    let mut meta = Metadata::new();
    let mut key: Option<String> = None;
    let mut offset = 0;

    let mut lines = text.split_inclusive('\n').peekable();
    if lines.peek().is_some_and(|line| line.trim_end() == "---") {
        offset += lines.next().map_or(0, str::len);
    }

    for line in lines {
        let content = line.trim_end_matches(['\n', '\r']);

        if content.trim().is_empty() || content.trim_end() == "---" {
            offset += line.len();
            break;
        }

        if let Some(caps) = FIELD.captures(content) {
            meta.insert(&caps[1], &caps[2]);
            key = Some(caps[1].to_owned());
        } else if let (Some(caps), Some(key)) = (CONTINUATION.captures(content), key.as_deref()) {
            meta.append(key, &caps[1]);
        } else {
            break;
        }

        offset += line.len();
    }

    if meta.is_empty() {
        return None;
    }
    Some((meta, &text[offset..]))
}
