//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Quo static journal generator CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory (default: current directory)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Config file name (default: quo.toml)
    #[arg(short = 'C', long, default_value = "quo.toml")]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Render every published entry, the listings and the search page
    Build {
        /// Markdown source directory (relative to project root)
        #[arg(short, long)]
        source: Option<PathBuf>,

        /// Output directory (relative to project root)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Minify the html content
        #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
        minify: Option<bool>,
    },

    /// Create today's entry in the given categories and open it in the editor
    New {
        /// Categories of the new entry
        categories: Vec<String>,
    },

    /// Open the built home page in the configured browser
    View,

    /// Print the effective configuration
    Config,
}

#[allow(unused)]
impl Cli {
    pub const fn is_build(&self) -> bool {
        matches!(self.command, Commands::Build { .. })
    }
    pub const fn is_new(&self) -> bool {
        matches!(self.command, Commands::New { .. })
    }
    pub const fn is_view(&self) -> bool {
        matches!(self.command, Commands::View)
    }
    pub const fn is_config(&self) -> bool {
        matches!(self.command, Commands::Config)
    }
}
