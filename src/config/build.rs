//! `[build]` section configuration.
//!
//! Source and output paths, indexing and listing settings.

use super::defaults;
use crate::site::{AggregateConfig, IndexMode};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[build]` section in quo.toml - build pipeline configuration.
///
/// # Example
/// ```toml
/// [build]
/// source = "markdown"                 # Source directory
/// output = "public"                   # Output directory
/// index_mode = "tags_only"            # What feeds the search index
/// ignore_threshold_percentage = 50    # Stop-word cutoff
/// entries_to_show = 5                 # Entries per category on the front page
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Project root directory (usually set via CLI `--root`).
    #[serde(default = "defaults::build::root")]
    #[educe(Default = defaults::build::root())]
    pub root: Option<PathBuf>,

    /// Markdown source directory.
    #[serde(default = "defaults::build::source")]
    #[educe(Default = defaults::build::source())]
    pub source: PathBuf,

    /// Build output directory.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// Header image directory, as linked from the output root.
    #[serde(default = "defaults::build::media")]
    #[educe(Default = defaults::build::media())]
    pub media: String,

    /// Which terms feed the search index.
    #[serde(default = "defaults::build::index_mode")]
    #[educe(Default = defaults::build::index_mode())]
    pub index_mode: IndexMode,

    /// Terms on more than this percentage of pages are left out of the
    /// search index, unless they are tags.
    #[serde(default = "defaults::build::ignore_threshold_percentage")]
    #[educe(Default = defaults::build::ignore_threshold_percentage())]
    pub ignore_threshold_percentage: u32,

    /// Entries listed per category on the front page.
    #[serde(default = "defaults::build::entries_to_show")]
    #[educe(Default = defaults::build::entries_to_show())]
    pub entries_to_show: usize,

    /// Terms shown in the front page word cloud.
    #[serde(default = "defaults::build::cloud_size")]
    #[educe(Default = defaults::build::cloud_size())]
    pub cloud_size: usize,

    /// Minify HTML output.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub minify: bool,

    /// Also write the search index as JSON next to the search page.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub search_json: bool,
}

impl BuildConfig {
    pub const fn aggregate_config(&self) -> AggregateConfig {
        AggregateConfig {
            index_mode: self.index_mode,
            ignore_threshold_percentage: self.ignore_threshold_percentage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use super::*;

    #[test]
    fn test_build_config_defaults() {
        let config: SiteConfig = toml::from_str("").unwrap();

        assert_eq!(config.build.source, PathBuf::from("markdown"));
        assert_eq!(config.build.output, PathBuf::from("."));
        assert_eq!(config.build.media, "media");
        assert_eq!(config.build.index_mode, IndexMode::IndexAndTags);
        assert_eq!(config.build.ignore_threshold_percentage, 40);
        assert_eq!(config.build.entries_to_show, 10);
        assert!(!config.build.minify);
        assert!(config.build.search_json);
    }

    #[test]
    fn test_build_config_custom() {
        let config = r#"
            [build]
            source = "posts"
            output = "public"
            index_mode = "index_only"
            ignore_threshold_percentage = 75
            entries_to_show = 3
            minify = true
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.build.source, PathBuf::from("posts"));
        assert_eq!(config.build.index_mode, IndexMode::IndexOnly);
        assert_eq!(config.build.entries_to_show, 3);
        assert!(config.build.minify);

        let aggregate = config.build.aggregate_config();
        assert_eq!(aggregate.index_mode, IndexMode::IndexOnly);
        assert_eq!(aggregate.ignore_threshold_percentage, 75);
    }

    #[test]
    fn test_build_config_invalid_index_mode() {
        let config = r#"
            [build]
            index_mode = "everything"
        "#;
        assert!(toml::from_str::<SiteConfig>(config).is_err());
    }
}
