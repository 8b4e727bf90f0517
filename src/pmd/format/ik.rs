//! IK chain section parsing.
//!
//! Unlike the fixed-stride sections, every IK entry carries its own chain
//! length, so the section is read entry by entry: a fixed head, then a tail
//! sized by the chain length just decoded.

use std::io::Read;

use log::{debug, info, trace};

use crate::pmd::codec::{ByteCursor, ByteSource};
use crate::pmd::types::error::Result;
use crate::pmd::types::models::{IkChain, Section};
use crate::pmd::utils;

/// Bone, target and iteration fields, the weight, and the chain length byte.
const ENTRY_HEAD_LEN: usize = 2 * 3 + 4 + 1;

/// Parses the IK section.
///
/// # Entry Structure
/// ```text
/// [2 bytes] IK bone index
/// [2 bytes] Target bone index
/// [1 byte]  Chain length (N)
/// [2 bytes] Iterations
/// [4 bytes] Control weight (f32)
/// [N x 2]   Child bone indices
/// ```
pub fn parse<R: Read>(source: &mut ByteSource<R>) -> Result<Vec<IkChain>> {
    let start = source.position();
    let count = usize::from(source.read_u16(Section::Ik)?);
    info!("Parsing {} IK chains", count);

    let mut chains = utils::alloc_vec(count, Section::Ik)?;
    for i in 0..count {
        let head = source.fill(ENTRY_HEAD_LEN, Section::Ik)?;
        let mut cursor = ByteCursor::new(&head, Section::Ik);
        let bone_index = cursor.read_u16()?;
        let target_index = cursor.read_u16()?;
        let chain_length = usize::from(cursor.read_u8()?);
        let iterations = cursor.read_u16()?;
        let control_weight = cursor.read_f32()?;

        let tail = source.fill(chain_length * 2, Section::Ik)?;
        let child_indices = ByteCursor::new(&tail, Section::Ik).read_u16_slice(chain_length)?;
        trace!(
            "IK chain {}: bone={}, target={}, length={}",
            i,
            bone_index,
            target_index,
            chain_length
        );

        chains.push(IkChain {
            bone_index,
            target_index,
            iterations,
            control_weight,
            child_indices,
        });
    }
    debug!("IK section: {} bytes", source.position() - start);

    Ok(chains)
}
