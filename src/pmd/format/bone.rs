//! Bone section parsing.

use std::io::Read;

use log::{debug, info};

use crate::pmd::codec::{ByteCursor, ByteSource, TextDecoder};
use crate::pmd::types::error::Result;
use crate::pmd::types::models::{Bone, Section};
use crate::pmd::utils;

const NAME_LEN: usize = 50;
const BONE_STRIDE: usize = NAME_LEN + 1 + 2 * 3 + 4 * 3;

/// Parses the bone section.
///
/// # Record Structure
/// ```text
/// [50 bytes] Name (legacy text)
/// [2 bytes]  Parent bone index
/// [2 bytes]  Tail bone index
/// [1 byte]   Bone type
/// [2 bytes]  IK parent bone index
/// [12 bytes] Head position (3 x f32)
/// ```
///
/// Indices are stored as read; `0xFFFF` conventionally means "none".
pub fn parse<R: Read>(source: &mut ByteSource<R>, text: &TextDecoder) -> Result<Vec<Bone>> {
    let count = usize::from(source.read_u16(Section::Bone)?);
    info!("Parsing {} bones", count);

    let block_len = utils::block_len(count, BONE_STRIDE, Section::Bone)?;
    let block = source.fill(block_len, Section::Bone)?;

    let mut bones = utils::alloc_vec(count, Section::Bone)?;
    let mut cursor = ByteCursor::new(&block, Section::Bone);
    for _ in 0..count {
        bones.push(Bone {
            name: text.decode(cursor.read_bytes(NAME_LEN)?),
            parent_index: cursor.read_u16()?,
            tail_index: cursor.read_u16()?,
            bone_type: cursor.read_u8()?,
            ik_parent_index: cursor.read_u16()?,
            head_position: cursor.read_vec3()?,
        });
    }
    debug!("Bone block: {} bytes decoded", cursor.position());

    Ok(bones)
}
