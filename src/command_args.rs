//! Type-safe external command contracts.
//!
//! This module provides the `CommandArgs` trait for describing an external
//! program invocation as typed data. Instead of concatenating a shell string,
//! structs implement this trait to produce the program name, the exact argv
//! tokens, and the environment the child needs.
//!
//! # Design Goals
//!
//! 1. **No shell**: tokens go straight to the process launcher, so address
//!    content is passed literally and never re-interpreted.
//! 2. **Single Source of Truth**: the struct definition IS the contract.
//! 3. **Environment Contracts**: settings like `ETHOS_CLI_ENV` are real
//!    environment variables of the child, not argv tokens.

/// Trait for typed external command arguments.
///
/// # Contract
///
/// - `program()`: the executable name, resolved through `PATH` at launch.
/// - `to_cli_args()`: argv tokens after the program name, in order.
/// - `get_env_vars()`: variables set on the child in addition to the
///   inherited environment.
///
/// # Example
///
/// ```
/// use bulkinvite::command_args::CommandArgs;
/// use bulkinvite::invite::InviteBulkArgs;
///
/// let addresses = vec!["0xabc".to_string()];
/// let args = InviteBulkArgs::new("ethos", &addresses);
///
/// assert_eq!(args.to_cli_args(), ["invite", "bulk", "--wait", "-r", "0xabc"]);
/// assert!(args.get_env_vars().is_empty());
/// ```
pub trait CommandArgs {
    /// Get the program to execute.
    fn program(&self) -> &str;

    /// Convert struct fields to CLI arguments.
    fn to_cli_args(&self) -> Vec<String>;

    /// Get required environment variables.
    fn get_env_vars(&self) -> Vec<(String, String)>;

    /// Render the shell-equivalent command line for display.
    ///
    /// Environment assignments come first, then the program and its
    /// arguments, all joined by single spaces. Nothing is quoted.
    fn display_command(&self) -> String {
        let mut tokens: Vec<String> = self
            .get_env_vars()
            .into_iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect();
        tokens.push(self.program().to_string());
        tokens.extend(self.to_cli_args());
        tokens.join(" ")
    }
}
