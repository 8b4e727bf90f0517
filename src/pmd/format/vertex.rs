//! Vertex section parsing.

use std::io::Read;

use log::{debug, info};

use crate::pmd::codec::{ByteCursor, ByteSource};
use crate::pmd::types::error::Result;
use crate::pmd::types::models::{Section, VertexWeight, Vertices};
use crate::pmd::utils;

/// Position, normal and uv floats, then bone index, weight and edge flag.
const VERTEX_STRIDE: usize = 4 * 9 + 2;

/// Parses the vertex section into four parallel arrays.
///
/// # Record Structure
/// ```text
/// [12 bytes] Position (3 x f32)
/// [12 bytes] Normal (3 x f32)
/// [8 bytes]  Texture coordinate (2 x f32)
/// [4 bytes]  Bone index (u32)
/// [1 byte]   Blend weight (0..=100)
/// [1 byte]   Edge flag
/// ```
///
/// The whole section is read in one block after the 32-bit count. A zero
/// count yields empty arrays.
pub fn parse<R: Read>(source: &mut ByteSource<R>) -> Result<Vertices> {
    let count = source.read_u32(Section::Vertex)? as usize;
    info!("Parsing {} vertices", count);

    let block_len = utils::block_len(count, VERTEX_STRIDE, Section::Vertex)?;
    let block = source.fill(block_len, Section::Vertex)?;

    let mut vertices = Vertices {
        positions: utils::alloc_vec(count, Section::Vertex)?,
        normals: utils::alloc_vec(count, Section::Vertex)?,
        uvs: utils::alloc_vec(count, Section::Vertex)?,
        weights: utils::alloc_vec(count, Section::Vertex)?,
    };

    let mut cursor = ByteCursor::new(&block, Section::Vertex);
    for _ in 0..count {
        vertices.positions.push(cursor.read_vec3()?);
        vertices.normals.push(cursor.read_vec3()?);
        vertices.uvs.push(cursor.read_vec2()?);
        vertices.weights.push(VertexWeight {
            bone_index: cursor.read_u32()?,
            weight: cursor.read_u8()?,
            edge_flag: cursor.read_u8()?,
        });
    }
    debug!("Vertex block: {} bytes decoded", cursor.position());

    Ok(vertices)
}
