//! `[new]` section configuration.

use serde::{Deserialize, Serialize};

/// `[new]` section in quo.toml - settings for `quo new`.
///
/// # Example
/// ```toml
/// [new]
/// editor = ["code", "--wait"]
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewConfig {
    /// Editor command and arguments; the entry path is appended.
    /// Empty means the entry is created but not opened.
    #[serde(default)]
    pub editor: Vec<String>,
}
