//! Index section parsing.

use std::io::Read;

use log::{debug, info};

use crate::pmd::codec::{ByteCursor, ByteSource};
use crate::pmd::types::error::Result;
use crate::pmd::types::models::Section;
use crate::pmd::utils;

/// Parses the flat list of 16-bit vertex indices.
///
/// The list is conventionally a triangle list, but its length is not
/// required to be a multiple of three.
pub fn parse<R: Read>(source: &mut ByteSource<R>) -> Result<Vec<u16>> {
    let count = source.read_u32(Section::Index)? as usize;
    info!("Parsing {} indices", count);

    let block_len = utils::block_len(count, 2, Section::Index)?;
    let block = source.fill(block_len, Section::Index)?;
    debug!("Index block: {} bytes", block_len);
    ByteCursor::new(&block, Section::Index).read_u16_slice(count)
}
