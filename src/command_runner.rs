//! Type-Safe Command Execution
//!
//! `run_command` is the single place an external program is launched. It
//! takes a `CommandArgs` implementor, so argv tokens and environment come
//! from typed data and never pass through a shell.
//!
//! The child inherits stdin/stdout/stderr so the invite CLI's own progress
//! output reaches the operator. There is no timeout: the call blocks until
//! the child exits.

use std::process::Command;

use tracing::{debug, info};

use crate::command_args::CommandArgs;
use crate::error::{BulkInviteError, Result};

/// Execute an external command with type-safe arguments and wait for it.
///
/// # Returns
///
/// - `Ok(output)` - the process ran; check `output.success` for its status
/// - `Err(BulkInviteError::Launch)` - the program could not be started or
///   waited on (not found, not executable, ...)
pub fn run_command<T: CommandArgs>(args: &T) -> Result<CommandOutput> {
    let program = args.program();
    let cli_args = args.to_cli_args();
    let env_vars = args.get_env_vars();

    // Log exact command and environment for transparency
    debug!("run_command: {} args={:?} env={:?}", program, cli_args, env_vars);

    let mut cmd = Command::new(program);
    cmd.args(&cli_args);
    for (key, value) in &env_vars {
        cmd.env(key, value);
    }

    let mut child = cmd
        .spawn()
        .map_err(|e| BulkInviteError::launch(format!("{program}: {e}")))?;

    let status = child
        .wait()
        .map_err(|e| BulkInviteError::launch(format!("failed waiting for {program}: {e}")))?;

    let exit_code = status.code();
    if status.success() {
        info!("{} exited successfully", program);
    } else {
        info!("{} exited with status {:?}", program, exit_code);
    }

    Ok(CommandOutput {
        exit_code,
        success: status.success(),
    })
}

/// Outcome of a finished external command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code (None if terminated by signal).
    pub exit_code: Option<i32>,
    /// Whether the command exited successfully (exit code 0).
    pub success: bool,
}

impl CommandOutput {
    /// Check if the command succeeded and return an error if not.
    pub fn ensure_success(&self, context: &str) -> Result<()> {
        if self.success {
            return Ok(());
        }
        match self.exit_code {
            Some(code) => Err(BulkInviteError::exit(format!(
                "{context} returned non-zero exit status {code}"
            ))),
            None => Err(BulkInviteError::exit(format!(
                "{context} was terminated by a signal"
            ))),
        }
    }
}
