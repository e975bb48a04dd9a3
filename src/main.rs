//! bulkinvite - Main entry point

use std::io::{Write, stdout};
use std::path::Path;

use anyhow::Context;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use bulkinvite::cli::{Cli, Commands};
use bulkinvite::{InviteConfig, run};

/// Initialize logging. Logs go to stderr; stdout carries progress lines.
fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Main application entry point
fn main() {
    let cli = Cli::parse_args();
    init_logger(cli.verbose);
    debug!("CLI arguments parsed: {:?}", cli);

    let code = match &cli.command {
        Some(Commands::Validate { config }) => validate_config(config),
        None => match send_invites(&cli) {
            Ok(()) => 0,
            Err(e) => {
                error!("{:#}", e);
                eprintln!("✗ {:#}", e);
                1
            }
        },
    };

    std::process::exit(code);
}

/// Load and validate a configuration file, reporting the result.
fn validate_config(path: &Path) -> i32 {
    info!("Validating configuration file: {:?}", path);
    match InviteConfig::load_from_file(path).and_then(|config| config.validate().map(|_| config)) {
        Ok(config) => {
            println!("✓ Configuration file is valid: {:?}", config);
            0
        }
        Err(e) => {
            error!("Configuration validation failed: {:#}", e);
            eprintln!("✗ Configuration validation failed: {:#}", e);
            1
        }
    }
}

/// Resolve configuration and run every batch.
fn send_invites(cli: &Cli) -> anyhow::Result<()> {
    let base = match &cli.config {
        Some(path) => InviteConfig::load_from_file(path)?,
        None => InviteConfig::default(),
    };
    let config = cli.apply_overrides(base);
    config.validate().context("Invalid configuration")?;

    info!(
        "Sending invites from {:?} (dry_run={})",
        config.input_file, cli.dry_run
    );

    let mut out = stdout().lock();
    let summary = run(&config, cli.dry_run, &mut out)?;
    if summary.batches > 0 {
        writeln!(out, "{summary}")?;
    }
    Ok(())
}
