//! URL slugification of entry titles.
//!
//! Titles are transliterated to ASCII, stripped of anything that is not a
//! word character, whitespace or hyphen, lowercased, and runs of hyphens and
//! whitespace collapse to a single `-`.
//!
//! | Title                  | Slug                 |
//! |------------------------|----------------------|
//! | `Hello World`          | `hello-world`        |
//! | `Café & Crème`         | `cafe-creme`         |
//! | `Monday 15 January, 2024` | `monday-15-january-2024` |

use deunicode::deunicode;
use regex::Regex;
use std::sync::LazyLock;

static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s-]").unwrap());

static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-\s]+").unwrap());

/// Convert a title to a URL-safe slug.
pub fn slugify(title: &str) -> String {
    let ascii = deunicode(title);
    let stripped = DISALLOWED.replace_all(&ascii, "");
    let lowered = stripped.trim().to_lowercase();
    SEPARATORS.replace_all(&lowered, "-").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_simple() {
        assert_eq!(slugify("Hello World"), "hello-world");
    }

    #[test]
    fn test_slugify_punctuation() {
        assert_eq!(slugify("Monday 15 January, 2024"), "monday-15-january-2024");
        assert_eq!(slugify("What's new?"), "whats-new");
    }

    #[test]
    fn test_slugify_collapses_separators() {
        assert_eq!(slugify("  a  --  b  "), "a-b");
        assert_eq!(slugify("tabs\tand\nnewlines"), "tabs-and-newlines");
    }

    #[test]
    fn test_slugify_keeps_underscores() {
        assert_eq!(slugify("snake_case title"), "snake_case-title");
    }

    #[test]
    fn test_slugify_transliterates() {
        assert_eq!(slugify("Café & Crème"), "cafe-creme");
    }

    #[test]
    fn test_slugify_empty() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("?!"), "");
    }
}
