//! Fixed-size batching of the address list.

use std::num::NonZeroUsize;

/// Default number of addresses sent per invite command.
pub const DEFAULT_BATCH_SIZE: NonZeroUsize = match NonZeroUsize::new(25) {
    Some(size) => size,
    None => unreachable!(),
};

/// Contiguous, non-overlapping slices of at most `size` addresses.
///
/// Every batch holds exactly `size` items except possibly the last.
pub fn batches(addresses: &[String], size: NonZeroUsize) -> std::slice::Chunks<'_, String> {
    addresses.chunks(size.get())
}

/// Number of batches `len` addresses produce: `ceil(len / size)`.
pub fn batch_count(len: usize, size: NonZeroUsize) -> usize {
    len.div_ceil(size.get())
}
