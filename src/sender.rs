//! Invite sender: one external invocation per batch.
//!
//! A failed batch is reported and returned as `BatchOutcome::Failed`; it is
//! never propagated as an error, so the driver always moves on to the next
//! batch. The only `Err` this module returns is a failure to write console
//! output.

use std::io::Write;

use tracing::{error, info};

use crate::command_args::CommandArgs;
use crate::command_runner::run_command;
use crate::config_file::InviteConfig;
use crate::error::Result;
use crate::invite::InviteBulkArgs;
use crate::types::CliEnvironment;

/// What happened to one batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchOutcome {
    /// Dry run: the command that would have run.
    DryRun { command: String, count: usize },
    /// The invite CLI exited with status zero.
    Sent { count: usize },
    /// The invite CLI exited non-zero, was killed, or could not be launched.
    Failed { count: usize, detail: String },
}

impl BatchOutcome {
    /// Addresses covered by the batch.
    pub fn count(&self) -> usize {
        match self {
            BatchOutcome::DryRun { count, .. }
            | BatchOutcome::Sent { count }
            | BatchOutcome::Failed { count, .. } => *count,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, BatchOutcome::Failed { .. })
    }
}

/// Sends invites for batches using settings from an [`InviteConfig`].
#[derive(Debug, Clone)]
pub struct InviteSender {
    program: String,
    wait: bool,
    environment: Option<(String, CliEnvironment)>,
    dry_run: bool,
}

impl InviteSender {
    pub fn new(config: &InviteConfig, dry_run: bool) -> Self {
        Self {
            program: config.program.clone(),
            wait: config.wait,
            environment: config
                .environment
                .map(|env| (config.environment_variable.clone(), env)),
            dry_run,
        }
    }

    /// Build the invocation record for `batch`.
    pub fn invite_args<'a>(&self, batch: &'a [String]) -> InviteBulkArgs<'a> {
        let args = InviteBulkArgs::new(self.program.clone(), batch).with_wait(self.wait);
        match &self.environment {
            Some((variable, env)) => args.with_environment(variable.clone(), *env),
            None => args,
        }
    }

    /// Send (or, in dry-run mode, print) the invites for one batch.
    pub fn send_batch<W: Write>(&self, batch: &[String], out: &mut W) -> Result<BatchOutcome> {
        let args = self.invite_args(batch);
        let count = args.recipient_count();

        if self.dry_run {
            let command = args.display_command();
            writeln!(out, "Dry run: Command that would be executed:")?;
            writeln!(out, "{command}")?;
            writeln!(out, "This would send invites to {count} addresses.")?;
            return Ok(BatchOutcome::DryRun { command, count });
        }

        let detail = match run_command(&args) {
            Ok(output) => match output.ensure_success(&args.display_command()) {
                Ok(()) => {
                    info!("Sent invites to {} addresses", count);
                    writeln!(out, "Successfully sent invites to {count} addresses.")?;
                    return Ok(BatchOutcome::Sent { count });
                }
                Err(e) => e.to_string(),
            },
            Err(e) => e.to_string(),
        };

        error!("Batch of {} addresses failed: {}", count, detail);
        writeln!(out, "Error sending invites: {detail}")?;
        Ok(BatchOutcome::Failed { count, detail })
    }
}
