//! Fixed-length legacy text fields.

use encoding_rs::{Encoding, SHIFT_JIS};
use log::debug;

/// Converts fixed-length, NUL-terminated legacy text fields to UTF-8.
///
/// Names and comments are operator-facing only, so decoding never fails:
/// malformed sequences are replaced with U+FFFD.
#[derive(Debug, Clone, Copy)]
pub struct TextDecoder {
    encoding: &'static Encoding,
}

impl TextDecoder {
    pub fn new(encoding: &'static Encoding) -> Self {
        Self { encoding }
    }

    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }

    /// Decodes the meaningful prefix of `field`.
    ///
    /// The field ends at the first NUL; any filler after it is ignored.
    pub fn decode(&self, field: &[u8]) -> String {
        let end = field.iter().position(|&b| b == 0).unwrap_or(field.len());
        let (text, had_errors) = self.encoding.decode_without_bom_handling(&field[..end]);
        if had_errors {
            debug!(
                "Malformed {} text in {}-byte field, replaced invalid sequences",
                self.encoding.name(),
                field.len()
            );
        }
        text.into_owned()
    }
}

impl Default for TextDecoder {
    fn default() -> Self {
        Self::new(SHIFT_JIS)
    }
}
