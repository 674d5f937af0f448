//! SupplierDB CLI - interactive supplier registry.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use supplierdb::common::config::DEFAULT_CONFIG_PATH;
use supplierdb::{Registry, RegistryConfig, Shell};

/// Pharmacy supplier & vendor registry.
#[derive(Parser)]
#[command(name = "supplierdb", version, about, long_about = None)]
struct Cli {
    /// Path to configuration file.
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Start with an empty registry instead of the sample suppliers.
    #[arg(long)]
    no_seed: bool,

    /// Do not clear the terminal between screens.
    #[arg(long)]
    no_clear: bool,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_found = cli.config.exists();
    let mut config = RegistryConfig::load_or_default(&cli.config)
        .with_context(|| format!("failed to load config from '{}'", cli.config.display()))?;

    let filter = match cli.verbose {
        0 => config.logging.level.to_ascii_lowercase(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    };

    // Logs go to stderr so they never interleave with the menu on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    if !config_found {
        info!(path = %cli.config.display(), "config file not found, using defaults");
    }

    if cli.no_seed {
        config.data.seed_sample_data = false;
    }
    if cli.no_clear {
        config.shell.clear_screen = false;
    }
    info!(config = ?config, "starting supplier registry");

    let registry = if config.data.seed_sample_data {
        Registry::with_sample_data()
    } else {
        Registry::new()
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(registry, stdin.lock(), stdout.lock(), config.shell);
    shell.run().context("interactive session failed")?;

    Ok(())
}
