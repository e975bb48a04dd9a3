//! Address loading.
//!
//! The address file is plain text, one address per line. Lines are trimmed
//! and blank lines dropped; nothing else is interpreted.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{BulkInviteError, Result};

/// Read the address file at `path`.
///
/// A missing or unreadable file is a fatal `BulkInviteError::Input`.
pub fn load_addresses<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content =
        fs::read_to_string(path).map_err(|e| BulkInviteError::input(path, e))?;
    let addresses = parse_addresses(&content);
    debug!("Loaded {} addresses from {:?}", addresses.len(), path);
    Ok(addresses)
}

/// Split `content` into trimmed, non-empty lines, preserving order and duplicates.
pub fn parse_addresses(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
