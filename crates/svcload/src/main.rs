//! svcload - Entry Point
//!
//! Binary entry point for the registry inspection tool.

use clap::Parser;
use svcload::cli::{Cli, execute};
use svcload::infrastructure::logging::{init_logging, log_config_loaded};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let loader = cli.config_loader();
    let config = loader.load()?;
    init_logging(&config.logging)?;
    if let Some(path) = loader.config_source() {
        log_config_loaded(&path, path.exists());
    }

    let stdout = std::io::stdout();
    execute(&cli.command, &config, cli.json, &mut stdout.lock())
}
