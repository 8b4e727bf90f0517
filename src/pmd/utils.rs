//! Small helpers shared by the section readers.

use encoding_rs::{Encoding, SHIFT_JIS};
use log::warn;

use super::types::error::{PmdError, Result};
use super::types::models::Section;

/// Resolves a WHATWG encoding label, falling back to Shift_JIS.
pub fn parse_encoding(label: &str) -> &'static Encoding {
    Encoding::for_label(label.trim().as_bytes()).unwrap_or_else(|| {
        warn!("Unknown encoding label '{}', falling back to {}", label, SHIFT_JIS.name());
        SHIFT_JIS
    })
}

/// Byte size of `count` records of `stride` bytes each.
pub fn block_len(count: usize, stride: usize, section: Section) -> Result<usize> {
    count
        .checked_mul(stride)
        .ok_or(PmdError::AllocationFailed {
            section,
            requested: (count as u64).saturating_mul(stride as u64),
        })
}

/// An empty vector with room for exactly `count` items, reserved fallibly.
pub fn alloc_vec<T>(count: usize, section: Section) -> Result<Vec<T>> {
    let mut items = Vec::new();
    items
        .try_reserve_exact(count)
        .map_err(|_| PmdError::AllocationFailed {
            section,
            requested: (count as u64).saturating_mul(std::mem::size_of::<T>() as u64),
        })?;
    Ok(items)
}
