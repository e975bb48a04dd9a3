//! Type-safe configuration types for bulkinvite
//!
//! Values that map onto the invite CLI's expectations are enums rather than
//! free strings, so a typo in a config file fails at load time instead of
//! at launch time.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Deployment targeted by the invite CLI, passed as `ETHOS_CLI_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CliEnvironment {
    Dev,
    #[default]
    Testnet,
    Prod,
}
