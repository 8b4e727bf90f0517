//! Skin (morph target) section parsing.

use std::io::Read;

use log::{debug, info, trace};

use crate::pmd::codec::{ByteCursor, ByteSource, TextDecoder};
use crate::pmd::types::error::Result;
use crate::pmd::types::models::{Section, Skin, SkinVertex};
use crate::pmd::utils;

const NAME_LEN: usize = 20;
const ENTRY_HEAD_LEN: usize = NAME_LEN + 4 + 1;

/// Vertex index and translation vector.
const SKIN_VERTEX_STRIDE: usize = 4 + 4 * 3;

/// Parses the skin section.
///
/// # Entry Structure
/// ```text
/// [20 bytes] Name (legacy text)
/// [4 bytes]  Vertex count (N)
/// [1 byte]   Skin type
/// [N x 16]   Vertex index (u32) + translation (3 x f32)
/// ```
///
/// Like the IK section, each entry's tail is sized by a count read from
/// the entry's own head.
pub fn parse<R: Read>(source: &mut ByteSource<R>, text: &TextDecoder) -> Result<Vec<Skin>> {
    let start = source.position();
    let count = usize::from(source.read_u16(Section::Skin)?);
    info!("Parsing {} skins", count);

    let mut skins = utils::alloc_vec(count, Section::Skin)?;
    for i in 0..count {
        let head = source.fill(ENTRY_HEAD_LEN, Section::Skin)?;
        let mut cursor = ByteCursor::new(&head, Section::Skin);
        let name = text.decode(cursor.read_bytes(NAME_LEN)?);
        let vertex_count = cursor.read_u32()? as usize;
        let skin_type = cursor.read_u8()?;

        let tail_len = utils::block_len(vertex_count, SKIN_VERTEX_STRIDE, Section::Skin)?;
        let tail = source.fill(tail_len, Section::Skin)?;
        trace!("Skin {} ({:?}): type={}, vertices={}", i, name, skin_type, vertex_count);

        let mut vertices = utils::alloc_vec(vertex_count, Section::Skin)?;
        let mut cursor = ByteCursor::new(&tail, Section::Skin);
        for _ in 0..vertex_count {
            vertices.push(SkinVertex {
                index: cursor.read_u32()?,
                translation: cursor.read_vec3()?,
            });
        }

        skins.push(Skin {
            name,
            skin_type,
            vertices,
        });
    }
    debug!("Skin section: {} bytes", source.position() - start);

    Ok(skins)
}
