//! Little-endian field reads over a filled block.

use byteorder::{ByteOrder, LittleEndian};

use crate::pmd::types::error::{PmdError, Result};
use crate::pmd::types::models::Section;

/// A position-tracked view over a block of bytes already read from the stream.
///
/// Multi-byte values are little-endian on the wire; `byteorder` converts them
/// to host order, and floats go through the same 32-bit word conversion.
#[derive(Debug)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    position: usize,
    section: Section,
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8], section: Section) -> Self {
        Self {
            data,
            position: 0,
            section,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        if self.remaining() < len {
            return Err(PmdError::Truncated {
                section: self.section,
                offset: self.position as u64,
                expected: len as u64,
                found: self.remaining() as u64,
            });
        }
        let data = self.data;
        let bytes = &data[self.position..self.position + len];
        self.position += len;
        Ok(bytes)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.read_bytes(1)?[0])
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        Ok(LittleEndian::read_u16(self.read_bytes(2)?))
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(LittleEndian::read_u32(self.read_bytes(4)?))
    }

    pub fn read_f32(&mut self) -> Result<f32> {
        Ok(f32::from_bits(self.read_u32()?))
    }

    pub fn read_vec2(&mut self) -> Result<[f32; 2]> {
        Ok([self.read_f32()?, self.read_f32()?])
    }

    pub fn read_vec3(&mut self) -> Result<[f32; 3]> {
        Ok([self.read_f32()?, self.read_f32()?, self.read_f32()?])
    }

    /// Reads `count` consecutive u16 values in one bulk conversion.
    pub fn read_u16_slice(&mut self, count: usize) -> Result<Vec<u16>> {
        let bytes = self.read_bytes(self.byte_len(count, 2)?)?;
        let mut values = vec![0u16; count];
        LittleEndian::read_u16_into(bytes, &mut values);
        Ok(values)
    }

    /// Reads `count` consecutive u32 values in one bulk conversion.
    pub fn read_u32_slice(&mut self, count: usize) -> Result<Vec<u32>> {
        let bytes = self.read_bytes(self.byte_len(count, 4)?)?;
        let mut values = vec![0u32; count];
        LittleEndian::read_u32_into(bytes, &mut values);
        Ok(values)
    }

    fn byte_len(&self, count: usize, width: usize) -> Result<usize> {
        count.checked_mul(width).ok_or(PmdError::AllocationFailed {
            section: self.section,
            requested: (count as u64).saturating_mul(width as u64),
        })
    }
}
