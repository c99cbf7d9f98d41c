//! Quo - A static site generator for Markdown journals.

mod build;
mod cli;
mod config;
mod generator;
mod logger;
mod new;
mod parser;
mod site;
mod utils;
mod view;

use anyhow::Result;
use build::build_site;
use clap::Parser;
use cli::{Cli, Commands};
use config::SiteConfig;
use new::new_entry;
use std::path::Path;
use view::view_site;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match &cli.command {
        Commands::Build { .. } => build_site(&config).map(|_| ()),
        Commands::New { categories } => new_entry(&config, categories).map(|_| ()),
        Commands::View => view_site(&config).map(|_| ()),
        Commands::Config => {
            println!("# {}", config.config_path.display());
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}

/// Load and validate configuration from CLI arguments
fn load_config(cli: &Cli) -> Result<SiteConfig> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let config_path = root.join(&cli.config);

    let mut config = if config_path.exists() {
        SiteConfig::from_path(&config_path)?
    } else {
        log!("config"; "{} not found, using defaults", config_path.display());
        SiteConfig::default()
    };
    config.update_with_cli(cli);
    config.validate()?;

    Ok(config)
}
