//! Site configuration management for `quo.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                          |
//! |-------------|--------------------------------------------------|
//! | `[base]`    | Site title, navigation targets, date display     |
//! | `[build]`   | Paths, search index and listing settings         |
//! | `[new]`     | Editor used by `quo new`                         |
//! | `[view]`    | Browser used by `quo view`                       |
//!
//! # Example
//!
//! ```toml
//! [base]
//! title = "My Journal"
//! author = "Alice"
//!
//! [build]
//! source = "markdown"
//! output = "public"
//! ignore_threshold_percentage = 40
//!
//! [new]
//! editor = ["vim"]
//!
//! [view]
//! browser = ["firefox"]
//! ```
//!
//! A missing config file is not an error: every field has a default.

mod base;
mod build;
pub mod defaults;
mod error;
mod new;
mod view;

use base::BaseConfig;
use build::BuildConfig;
use error::ConfigError;
use new::NewConfig;
use view::ViewConfig;

use crate::cli::{Cli, Commands};
use anyhow::{Context, Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing quo.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Site presentation
    #[serde(default)]
    pub base: BaseConfig,

    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,

    /// Entry scaffolding settings
    #[serde(default)]
    pub new: NewConfig,

    /// Site preview settings
    #[serde(default)]
    pub view: ViewConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content).with_context(|| format!("in `{}`", path.display()))
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.build.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.build.root = Some(path.to_path_buf())
    }

    /// Serialize back to TOML (used by `quo config`).
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        let root = cli
            .root
            .as_ref()
            .cloned()
            .unwrap_or_else(|| self.get_root().to_owned());

        if let Commands::Build {
            source,
            output,
            minify,
        } = &cli.command
        {
            Self::update_option(&mut self.build.source, source.as_ref());
            Self::update_option(&mut self.build.output, output.as_ref());
            Self::update_option(&mut self.build.minify, minify.as_ref());
        }

        self.update_path_with_root(&root, &cli.config);
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Resolve all paths against the root directory, expanding `~`.
    fn update_path_with_root(&mut self, root: &Path, config_file: &Path) {
        let root = Self::normalize_path(&Self::expand(root));
        self.set_root(&root);

        self.config_path = Self::normalize_path(&root.join(config_file));
        self.build.source = Self::normalize_path(&root.join(Self::expand(&self.build.source)));
        self.build.output = Self::normalize_path(&root.join(Self::expand(&self.build.output)));
    }

    /// Expand a leading `~` to the home directory
    fn expand(path: &Path) -> PathBuf {
        match path.to_str() {
            Some(s) => PathBuf::from(shellexpand::tilde(s).into_owned()),
            None => path.to_path_buf(),
        }
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.build.ignore_threshold_percentage > 100 {
            bail!(ConfigError::Validation(format!(
                "[build.ignore_threshold_percentage] must be between 0 and 100, got {}",
                self.build.ignore_threshold_percentage
            )));
        }

        if self.build.entries_to_show == 0 {
            bail!(ConfigError::Validation(
                "[build.entries_to_show] must be at least 1".into()
            ));
        }

        if self.base.homepage.is_empty() || self.base.searchpage.is_empty() {
            bail!(ConfigError::Validation(
                "[base.homepage] and [base.searchpage] must not be empty".into()
            ));
        }

        if !self.new.editor.is_empty() {
            Self::check_command_installed("[new.editor]", &self.new.editor)?;
        }

        if !self.view.browser.is_empty() {
            Self::check_command_installed("[view.browser]", &self.view.browser)?;
        }

        Ok(())
    }

    /// Check if a command is installed and available
    fn check_command_installed(field: &str, command: &[String]) -> Result<()> {
        let Some(cmd) = command.first() else {
            bail!(ConfigError::Validation(format!(
                "{field} must have at least one element"
            )));
        };

        which::which(cmd)
            .with_context(|| format!("`{cmd}` not found. Please install it first."))?;

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
