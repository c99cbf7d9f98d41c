//! Site preview for `quo view`.
//!
//! Opens `{output}/{homepage}` in `[view] browser`. Nothing is built here;
//! run `quo build` first.

use crate::{config::SiteConfig, log, utils::exec::open_with};
use anyhow::Result;
use std::path::PathBuf;

/// Open the built home page in the configured browser.
///
/// Returns the page path whether or not a browser was launched.
pub fn view_site(config: &SiteConfig) -> Result<PathBuf> {
    let page = config.build.output.join(&config.base.homepage);

    if !page.exists() {
        log!("view"; "{} not built yet, run `quo build` first", page.display());
    }

    if open_with(&config.view.browser, &page)? {
        log!("view"; "opened {}", page.display());
    } else {
        log!("view"; "no [view.browser] configured, open {} manually", page.display());
    }

    Ok(page)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn config(output: &std::path::Path) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.build.output = output.to_path_buf();
        config
    }

    #[test]
    fn test_view_without_browser() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html"), "<html></html>").unwrap();

        let page = view_site(&config(dir.path())).unwrap();
        assert_eq!(page, dir.path().join("index.html"));
    }

    #[test]
    fn test_view_unbuilt_site_without_browser() {
        let dir = tempfile::tempdir().unwrap();
        let page = view_site(&config(dir.path())).unwrap();
        assert!(!page.exists());
    }

    #[test]
    fn test_view_custom_homepage() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config(dir.path());
        config.base.homepage = "home.html".into();

        assert_eq!(view_site(&config).unwrap(), dir.path().join("home.html"));
    }

    #[test]
    fn test_view_browser_launch_failure() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config(dir.path());
        config.view.browser = vec!["quo-browser-that-does-not-exist".into()];

        let err = view_site(&config).unwrap_err();
        assert!(err.to_string().contains("quo-browser-that-does-not-exist"));
    }
}
