//! Driver: load, batch, send, in one sequential pass.

use std::io::Write;

use tracing::info;

use crate::addresses::load_addresses;
use crate::batch::{batch_count, batches};
use crate::config_file::InviteConfig;
use crate::error::{BulkInviteError, Result};
use crate::sender::{BatchOutcome, InviteSender};

/// Totals for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub batches: usize,
    pub addresses: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub dry_run: usize,
}

impl RunSummary {
    fn record(&mut self, outcome: &BatchOutcome) {
        self.batches += 1;
        self.addresses += outcome.count();
        match outcome {
            BatchOutcome::DryRun { .. } => self.dry_run += 1,
            BatchOutcome::Sent { .. } => self.succeeded += 1,
            BatchOutcome::Failed { .. } => self.failed += 1,
        }
    }
}

impl std::fmt::Display for RunSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.dry_run > 0 {
            write!(
                f,
                "Dry run complete: {} batches, {} addresses",
                self.batches, self.addresses
            )
        } else {
            write!(
                f,
                "Done: {} batches ({} succeeded, {} failed), {} addresses",
                self.batches, self.succeeded, self.failed, self.addresses
            )
        }
    }
}

/// Run every batch from `config.input_file`, writing progress to `out`.
///
/// Fails only when the input cannot be read, the batch size is invalid, or
/// console output cannot be written. Batch failures are counted in the
/// returned summary.
pub fn run<W: Write>(config: &InviteConfig, dry_run: bool, out: &mut W) -> Result<RunSummary> {
    let size = config
        .batch_size()
        .map_err(|e| BulkInviteError::validation(e.to_string()))?;
    let addresses = load_addresses(&config.input_file)?;
    let sender = InviteSender::new(config, dry_run);

    info!(
        "Loaded {} addresses from {:?}; {} batches of up to {}",
        addresses.len(),
        config.input_file,
        batch_count(addresses.len(), size),
        size
    );

    let mut summary = RunSummary::default();
    for (index, batch) in batches(&addresses, size).enumerate() {
        writeln!(out, "Processing batch {} ({} addresses)", index + 1, batch.len())?;
        let outcome = sender.send_batch(batch, out)?;
        summary.record(&outcome);
    }

    Ok(summary)
}
