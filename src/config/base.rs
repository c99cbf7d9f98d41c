//! `[base]` section configuration.
//!
//! Site title, navigation targets and display settings.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[base]` section in quo.toml - site-wide presentation settings.
///
/// # Example
/// ```toml
/// [base]
/// title = "My Journal"
/// author = "Alice"
/// root = "/journal/"
/// css = "/journal/style.css"
/// timestamp_format = "%d %b %Y"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    /// Site title shown in page headers.
    #[serde(default = "defaults::base::title")]
    #[educe(Default = defaults::base::title())]
    pub title: String,

    /// Default author written into new entries.
    #[serde(default)]
    pub author: String,

    /// URL prefix for navigation links (e.g., "/" or "/journal/").
    #[serde(default = "defaults::base::root")]
    #[educe(Default = defaults::base::root())]
    pub root: String,

    /// Front page file name.
    #[serde(default = "defaults::base::homepage")]
    #[educe(Default = defaults::base::homepage())]
    pub homepage: String,

    /// Search page file name.
    #[serde(default = "defaults::base::searchpage")]
    #[educe(Default = defaults::base::searchpage())]
    pub searchpage: String,

    /// Stylesheet href linked from every page.
    #[serde(default)]
    pub css: Option<String>,

    /// strftime format for entry dates.
    #[serde(default = "defaults::base::timestamp_format")]
    #[educe(Default = defaults::base::timestamp_format())]
    pub timestamp_format: String,
}

impl BaseConfig {
    /// Absolute link to the front page.
    pub fn home_href(&self) -> String {
        format!("{}{}", self.root, self.homepage)
    }

    /// Absolute link to the search page, optionally at a term anchor.
    pub fn search_href(&self, term: Option<&str>) -> String {
        match term {
            Some(term) => format!("{}{}#{}", self.root, self.searchpage, term),
            None => format!("{}{}", self.root, self.searchpage),
        }
    }
}
