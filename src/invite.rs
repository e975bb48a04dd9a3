//! Type-safe arguments for `<program> invite bulk`.
//!
//! # Field to Flag Mapping
//!
//! | Rust Field     | CLI Flag        | Notes                                  |
//! |----------------|-----------------|----------------------------------------|
//! | (fixed)        | `invite bulk`   | Subcommand of the invite CLI           |
//! | `wait`         | `--wait`        | Block until the invites are confirmed  |
//! | `recipients`   | `-r <address>`  | One pair per address, in batch order   |
//! | `environment`  | N/A (env)       | Sets `<environment_variable>=<env>`    |

use crate::command_args::CommandArgs;
use crate::types::CliEnvironment;

/// Default name of the variable that selects the invite CLI's deployment.
pub const DEFAULT_ENV_VARIABLE: &str = "ETHOS_CLI_ENV";

/// Invocation record for one batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InviteBulkArgs<'a> {
    pub program: String,
    pub recipients: &'a [String],
    pub wait: bool,
    /// Variable name and value exported to the child, if any.
    pub environment: Option<(String, CliEnvironment)>,
}

impl<'a> InviteBulkArgs<'a> {
    /// Invocation with `--wait` and no environment selection.
    pub fn new(program: impl Into<String>, recipients: &'a [String]) -> Self {
        Self {
            program: program.into(),
            recipients,
            wait: true,
            environment: None,
        }
    }

    pub fn with_wait(mut self, wait: bool) -> Self {
        self.wait = wait;
        self
    }

    pub fn with_environment(mut self, variable: impl Into<String>, env: CliEnvironment) -> Self {
        self.environment = Some((variable.into(), env));
        self
    }

    /// Number of addresses this invocation covers.
    pub fn recipient_count(&self) -> usize {
        self.recipients.len()
    }
}

impl CommandArgs for InviteBulkArgs<'_> {
    fn program(&self) -> &str {
        &self.program
    }

    fn to_cli_args(&self) -> Vec<String> {
        let mut args = vec!["invite".to_string(), "bulk".to_string()];
        if self.wait {
            args.push("--wait".to_string());
        }
        for address in self.recipients {
            args.push("-r".to_string());
            args.push(address.clone());
        }
        args
    }

    fn get_env_vars(&self) -> Vec<(String, String)> {
        match &self.environment {
            Some((variable, env)) => vec![(variable.clone(), env.to_string())],
            None => Vec::new(),
        }
    }
}
