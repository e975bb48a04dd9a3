use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config_file::InviteConfig;
use crate::types::CliEnvironment;

/// bulkinvite - send invites to a list of wallet addresses in batches
#[derive(Parser, Debug)]
#[command(name = "bulkinvite")]
#[command(about = "Send bulk invites through the invite CLI, one command per batch")]
#[command(version)]
pub struct Cli {
    /// Dry-run mode: print the command for each batch without executing it.
    #[arg(long)]
    pub dry_run: bool,

    /// Path to a JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Address file (one address per line)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Addresses per invite command
    #[arg(short, long)]
    pub batch_size: Option<usize>,

    /// Invite CLI executable
    #[arg(long)]
    pub program: Option<String>,

    /// Deployment passed to the invite CLI (dev, testnet, prod)
    #[arg(short, long, conflicts_with = "no_env")]
    pub env: Option<CliEnvironment>,

    /// Launch the invite CLI without an environment selection
    #[arg(long)]
    pub no_env: bool,

    /// Do not pass --wait to the invite CLI
    #[arg(long)]
    pub no_wait: bool,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a configuration file
    Validate {
        /// Path to configuration file to validate
        config: PathBuf,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }

    /// Apply command-line overrides on top of `config`.
    pub fn apply_overrides(&self, mut config: InviteConfig) -> InviteConfig {
        if let Some(input) = &self.input {
            config.input_file = input.clone();
        }
        if let Some(size) = self.batch_size {
            config.batch_size = size;
        }
        if let Some(program) = &self.program {
            config.program = program.clone();
        }
        if let Some(env) = self.env {
            config.environment = Some(env);
        }
        if self.no_env {
            config.environment = None;
        }
        if self.no_wait {
            config.wait = false;
        }
        config
    }
}
