//! Aggregate queries over a built directory tree.

use thiserror::Error;

use super::tree::Fs;

/// Errors raised by tree queries.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("no directory is large enough to free {needed} bytes")]
    NoCandidate { needed: u64 },
}

/// Sum of aggregate sizes over directories no larger than `limit`.
///
/// A nested directory contributes to every ancestor summed separately, the
/// quantity is "sum of directory sizes", not unique file bytes.
pub fn sum_of_small_dirs(fs: &Fs, limit: u64) -> u64 {
    fs.walk()
        .map(|id| fs.size(id))
        .filter(|&size| size <= limit)
        .sum()
}

/// Size of the smallest directory whose removal leaves at least `required`
/// bytes free on a disk of `capacity` bytes.
///
/// Returns 0 when enough space is already free. Errors only when no
/// directory is big enough, which would mean the root itself cannot cover
/// the shortfall.
pub fn smallest_deletion(fs: &Fs, capacity: u64, required: u64) -> Result<u64, QueryError> {
    let used = fs.size(fs.root());
    let free = capacity.saturating_sub(used);
    let needed = required.saturating_sub(free);

    if needed == 0 {
        return Ok(0);
    }

    fs.walk()
        .map(|id| fs.size(id))
        .filter(|&size| size >= needed)
        .min()
        .ok_or(QueryError::NoCandidate { needed })
}
