//! Material section parsing.

use std::io::Read;

use log::{debug, info};

use crate::pmd::codec::{ByteCursor, ByteSource, TextDecoder};
use crate::pmd::types::error::Result;
use crate::pmd::types::models::{Material, Section};
use crate::pmd::utils;

const TEXTURE_LEN: usize = 20;

/// Eleven floats and the face count, two flag bytes, and the texture field.
const MATERIAL_STRIDE: usize = 4 * 12 + 2 + TEXTURE_LEN;

/// Parses the material section.
///
/// # Record Structure
/// ```text
/// [12 bytes] Diffuse color (3 x f32)
/// [4 bytes]  Alpha (f32)
/// [4 bytes]  Specular power (f32)
/// [12 bytes] Specular color (3 x f32)
/// [12 bytes] Ambient color (3 x f32)
/// [1 byte]   Toon texture index
/// [1 byte]   Edge flag
/// [4 bytes]  Face vertex count (u32)
/// [20 bytes] Texture reference (legacy text)
/// ```
///
/// Face counts are not checked against the index section here; see
/// [`ModelDocument::check_face_counts`](crate::ModelDocument::check_face_counts).
pub fn parse<R: Read>(source: &mut ByteSource<R>, text: &TextDecoder) -> Result<Vec<Material>> {
    let count = source.read_u32(Section::Material)? as usize;
    info!("Parsing {} materials", count);

    let block_len = utils::block_len(count, MATERIAL_STRIDE, Section::Material)?;
    let block = source.fill(block_len, Section::Material)?;

    let mut materials = utils::alloc_vec(count, Section::Material)?;
    let mut cursor = ByteCursor::new(&block, Section::Material);
    for _ in 0..count {
        materials.push(Material {
            diffuse: cursor.read_vec3()?,
            alpha: cursor.read_f32()?,
            specular_power: cursor.read_f32()?,
            specular: cursor.read_vec3()?,
            ambient: cursor.read_vec3()?,
            toon: cursor.read_u8()?,
            edge_flag: cursor.read_u8()?,
            face_count: cursor.read_u32()?,
            texture: text.decode(cursor.read_bytes(TEXTURE_LEN)?),
        });
    }
    debug!("Material block: {} bytes decoded", cursor.position());

    Ok(materials)
}
