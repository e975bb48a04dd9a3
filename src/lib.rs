//! bulkinvite library
//!
//! Loads wallet addresses, splits them into fixed-size batches, and hands
//! each batch to an external invite CLI.

pub mod addresses;
pub mod batch;
pub mod cli;
pub mod command_args;
pub mod command_runner;
pub mod config_file;
pub mod driver;
pub mod error;
pub mod invite;
pub mod sender;
pub mod types;

// Re-export main types for convenience
pub use addresses::{load_addresses, parse_addresses};
pub use batch::{DEFAULT_BATCH_SIZE, batch_count, batches};
pub use command_args::CommandArgs;
pub use command_runner::{CommandOutput, run_command};
pub use config_file::InviteConfig;
pub use driver::{RunSummary, run};
pub use error::BulkInviteError;
pub use invite::InviteBulkArgs;
pub use sender::{BatchOutcome, InviteSender};
pub use types::CliEnvironment;
