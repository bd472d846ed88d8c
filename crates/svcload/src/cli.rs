//! Command line interface
//!
//! Diagnostics for registry resources: what each registry file of a
//! category lists, which of those names the linked provider table knows,
//! and the effective configuration. Applications that link their own
//! provider types can embed [`execute`] to get the same tool with their
//! registry.

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use svcload_application::{StaticTypeResolver, list_provider_types};
use svcload_infrastructure::{
    ConfigLoader, LoaderConfig, RegistryListing, SearchPathLocator, inspect,
};

/// Command line interface for svcload
#[derive(Parser, Debug)]
#[command(name = "svcload")]
#[command(about = "svcload - Inspect provider registries")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List the registry resources of a category and their entries
    Inspect {
        /// Category identifier (registry file name)
        category: String,
    },
    /// List provider types linked into this binary
    Providers,
    /// Print the effective configuration
    Config,
}

impl Cli {
    /// Configuration loader for `--config` or the default locations
    pub fn config_loader(&self) -> ConfigLoader {
        match &self.config {
            Some(path) => ConfigLoader::new().with_config_path(path),
            None => ConfigLoader::new(),
        }
    }
}

#[derive(Serialize)]
struct ProviderInfo {
    name: &'static str,
    description: &'static str,
}

/// Run `command` against `config`, writing the report to `out`
pub fn execute(
    command: &Command,
    config: &LoaderConfig,
    json: bool,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    match command {
        Command::Inspect { category } => {
            let locator = SearchPathLocator::from_config(config);
            let listings = inspect(&locator, &StaticTypeResolver, category)?;
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&listings)?)?;
            } else {
                write_listings(category, &listings, out)?;
            }
        }
        Command::Providers => {
            let mut providers: Vec<ProviderInfo> = list_provider_types()
                .into_iter()
                .map(|(name, description)| ProviderInfo { name, description })
                .collect();
            providers.sort_by_key(|p| p.name);
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&providers)?)?;
            } else if providers.is_empty() {
                writeln!(out, "no provider types linked")?;
            } else {
                for provider in providers {
                    writeln!(out, "{}\t{}", provider.name, provider.description)?;
                }
            }
        }
        Command::Config => {
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(config)?)?;
            } else {
                write!(out, "{}", toml::to_string_pretty(config)?)?;
            }
        }
    }
    Ok(())
}

fn write_listings(
    category: &str,
    listings: &[RegistryListing],
    out: &mut dyn Write,
) -> std::io::Result<()> {
    if listings.is_empty() {
        return writeln!(out, "no registry resources for {category}");
    }
    for listing in listings {
        writeln!(out, "{}", listing.location)?;
        for entry in &listing.entries {
            let status = match (entry.duplicate, entry.contract) {
                (true, _) => "[duplicate]".to_string(),
                (false, Some(contract)) => format!("({contract})"),
                (false, None) => "[unresolved]".to_string(),
            };
            writeln!(out, "  {:>4}  {}  {}", entry.line, entry.name, status)?;
        }
    }
    Ok(())
}
