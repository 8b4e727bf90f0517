//! Forward-only reads from the underlying stream.
//!
//! The PMD format has no table of contents: a section's position is implied
//! by how much every earlier section consumed. [`ByteSource`] is the single
//! cursor shared by all section readers, and it never seeks.

use std::io::Read;

use byteorder::{ByteOrder, LittleEndian};
use log::trace;

use crate::pmd::types::error::{PmdError, Result};
use crate::pmd::types::models::Section;

/// Largest amount of memory reserved ahead of the data actually arriving.
const FILL_CHUNK: usize = 64 * 1024;

/// A position-tracked, forward-only reader over a PMD stream.
#[derive(Debug)]
pub struct ByteSource<R> {
    inner: R,
    position: u64,
}

impl<R: Read> ByteSource<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, position: 0 }
    }

    /// Number of bytes consumed from the stream so far.
    pub fn position(&self) -> u64 {
        self.position
    }

    pub fn read_array<const N: usize>(&mut self, section: Section) -> Result<[u8; N]> {
        let block = self.fill(N, section)?;
        let mut buf = [0u8; N];
        buf.copy_from_slice(&block);
        Ok(buf)
    }

    pub fn read_u8(&mut self, section: Section) -> Result<u8> {
        let [byte] = self.read_array::<1>(section)?;
        Ok(byte)
    }

    pub fn read_u16(&mut self, section: Section) -> Result<u16> {
        Ok(LittleEndian::read_u16(&self.read_array::<2>(section)?))
    }

    pub fn read_u32(&mut self, section: Section) -> Result<u32> {
        Ok(LittleEndian::read_u32(&self.read_array::<4>(section)?))
    }

    pub fn read_f32(&mut self, section: Section) -> Result<f32> {
        Ok(f32::from_bits(self.read_u32(section)?))
    }

    /// Reads exactly `len` bytes into a new block.
    ///
    /// Memory is reserved in bounded chunks as data arrives, so a corrupt
    /// count fails with [`PmdError::Truncated`] once the stream runs dry
    /// rather than reserving the whole declared size up front.
    pub fn fill(&mut self, len: usize, section: Section) -> Result<Vec<u8>> {
        let start = self.position;
        let mut block: Vec<u8> = Vec::new();

        while block.len() < len {
            let want = (len - block.len()).min(FILL_CHUNK);
            block
                .try_reserve_exact(want)
                .map_err(|_| PmdError::AllocationFailed {
                    section,
                    requested: len as u64,
                })?;

            let got = (&mut self.inner).take(want as u64).read_to_end(&mut block)?;
            self.position += got as u64;

            if got < want {
                return Err(PmdError::Truncated {
                    section,
                    offset: start,
                    expected: len as u64,
                    found: block.len() as u64,
                });
            }
        }

        trace!(
            "Filled {} bytes for {} section at offset {}",
            len,
            section,
            start
        );
        Ok(block)
    }
}
