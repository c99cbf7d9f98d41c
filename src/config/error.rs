//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or checking `quo.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("config file is not valid TOML for quo")]
    Toml(#[from] toml::de::Error),

    #[error("invalid setting {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use super::*;

    fn validation_message(config: &SiteConfig) -> String {
        let err = config.validate().unwrap_err();
        match err.downcast_ref::<ConfigError>() {
            Some(ConfigError::Validation(message)) => message.clone(),
            other => panic!("expected a validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_threshold_out_of_range_message() {
        let mut config = SiteConfig::default();
        config.build.ignore_threshold_percentage = 140;

        let message = validation_message(&config);
        assert!(message.starts_with("[build.ignore_threshold_percentage]"));
        assert!(message.ends_with("got 140"));
    }

    #[test]
    fn test_entries_to_show_message() {
        let mut config = SiteConfig::default();
        config.build.entries_to_show = 0;

        assert_eq!(validation_message(&config), "[build.entries_to_show] must be at least 1");
    }

    #[test]
    fn test_empty_searchpage_message() {
        let mut config = SiteConfig::default();
        config.base.searchpage.clear();

        assert!(validation_message(&config).contains("[base.searchpage]"));
    }

    #[test]
    fn test_unparseable_toml_is_toml_error() {
        let err = SiteConfig::from_str("[build]\nentries_to_show = \"ten\"").unwrap_err();
        assert!(matches!(err.downcast_ref::<ConfigError>(), Some(ConfigError::Toml(_))));
    }

    #[test]
    fn test_missing_file_names_path() {
        let err = SiteConfig::from_path(std::path::Path::new("/nowhere/quo.toml")).unwrap_err();
        assert_eq!(err.to_string(), "cannot read config file `/nowhere/quo.toml`");
    }
}
