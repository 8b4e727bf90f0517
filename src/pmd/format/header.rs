//! PMD header parsing.

use std::io::Read;

use log::{debug, info};

use crate::pmd::codec::{ByteCursor, ByteSource, TextDecoder};
use crate::pmd::types::error::{PmdError, Result};
use crate::pmd::types::models::{Header, Section};

/// Magic tag at the very start of every PMD stream.
pub const MAGIC: &[u8; 3] = b"Pmd";

const NAME_LEN: usize = 20;
const COMMENT_LEN: usize = 256;

/// Parses the PMD header.
///
/// # Header Structure
/// ```text
/// [3 bytes]   Magic "Pmd"
/// [4 bytes]   Version (f32)
/// [20 bytes]  Model name (legacy text, NUL padded)
/// [256 bytes] Comment (legacy text, NUL padded)
/// ```
///
/// The magic is checked before anything else is read.
pub fn parse<R: Read>(source: &mut ByteSource<R>, text: &TextDecoder) -> Result<Header> {
    info!("Parsing PMD header");

    let magic = source.read_array::<3>(Section::Header)?;
    if &magic != MAGIC {
        return Err(PmdError::InvalidMagic { found: magic });
    }

    let version = source.read_f32(Section::Header)?;

    let block = source.fill(NAME_LEN + COMMENT_LEN, Section::Header)?;
    let mut cursor = ByteCursor::new(&block, Section::Header);
    let name = text.decode(cursor.read_bytes(NAME_LEN)?);
    let comment = text.decode(cursor.read_bytes(COMMENT_LEN)?);

    debug!(
        "Header parsed: {} bytes, version={}, name={:?}",
        source.position(),
        version,
        name
    );

    Ok(Header {
        name,
        comment,
        version,
    })
}
