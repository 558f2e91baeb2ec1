//! Perfect Tic-Tac-Toe - command-line driver.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use perfect_tictactoe_cli::{Cli, CliConfig, run};
use tracing::{debug, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = CliConfig::load(cli.config.as_deref()).context("Failed to load config")?;
    if let Some(format) = cli.format {
        config = config.with_format(format);
    }

    initialize_tracing(&config);
    debug!(?config, "Configuration resolved");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(&cli.command, *config.format(), &mut out)
}

/// Installs the fmt subscriber, preferring `RUST_LOG` over the config filter.
#[instrument(skip(config))]
fn initialize_tracing(config: &CliConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();
}
