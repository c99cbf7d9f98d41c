//! `[view]` section configuration.

use serde::{Deserialize, Serialize};

/// `[view]` section in quo.toml - settings for `quo view`.
///
/// # Example
/// ```toml
/// [view]
/// browser = ["firefox", "--new-tab"]
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ViewConfig {
    /// Browser command and arguments; the home page path is appended.
    #[serde(default)]
    pub browser: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;

    #[test]
    fn test_view_config() {
        let config: SiteConfig = toml::from_str(r#"
            [view]
            browser = ["firefox", "--new-tab"]
        "#).unwrap();
        assert_eq!(config.view.browser, ["firefox", "--new-tab"]);

        let config: SiteConfig = toml::from_str("").unwrap();
        assert!(config.view.browser.is_empty());
    }

    #[test]
    fn test_view_config_unknown_field() {
        let result: Result<SiteConfig, _> = toml::from_str("[view]\nbrowzer = [\"x\"]");
        assert!(result.is_err());
    }
}
