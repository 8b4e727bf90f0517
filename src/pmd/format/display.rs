//! Display list sections: the morph quick-access list and bone group names.
//!
//! Both are simple arrays behind an 8-bit count.

use std::io::Read;

use log::{debug, info};

use crate::pmd::codec::{ByteCursor, ByteSource, TextDecoder};
use crate::pmd::types::error::Result;
use crate::pmd::types::models::{BoneName, Section};
use crate::pmd::utils;

const BONE_NAME_LEN: usize = 50;

/// Parses the list of morph indices shown in the skin panel.
pub fn parse_skin_display<R: Read>(source: &mut ByteSource<R>) -> Result<Vec<u32>> {
    let count = usize::from(source.read_u8(Section::SkinDisplay)?);
    info!("Parsing {} skin display entries", count);

    let block = source.fill(count * 4, Section::SkinDisplay)?;
    debug!("Skin display block: {} bytes", block.len());
    ByteCursor::new(&block, Section::SkinDisplay).read_u32_slice(count)
}

/// Parses the bone group names.
pub fn parse_bone_names<R: Read>(
    source: &mut ByteSource<R>,
    text: &TextDecoder,
) -> Result<Vec<BoneName>> {
    let count = usize::from(source.read_u8(Section::BoneName)?);
    info!("Parsing {} bone names", count);

    let block = source.fill(count * BONE_NAME_LEN, Section::BoneName)?;
    debug!("Bone name block: {} bytes", block.len());
    let mut names = utils::alloc_vec(count, Section::BoneName)?;
    let mut cursor = ByteCursor::new(&block, Section::BoneName);
    for _ in 0..count {
        names.push(BoneName {
            name: text.decode(cursor.read_bytes(BONE_NAME_LEN)?),
        });
    }

    Ok(names)
}
