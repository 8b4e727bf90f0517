//! Custom error types for the pmd-reader crate.

use thiserror::Error;

use super::models::{ModelDocument, Section};

/// The primary error type for all decoding operations in this crate.
#[derive(Debug, Error)]
pub enum PmdError {
    /// An error originating from I/O operations other than running out of input.
    #[error("I/O error: {0:?}")]
    Io(#[from] std::io::Error),

    /// The stream does not start with the `Pmd` magic tag.
    #[error("Invalid magic: expected \"Pmd\", found {found:02x?}")]
    InvalidMagic { found: [u8; 3] },

    /// Fewer bytes were available than a section declared it needs.
    #[error(
        "Truncated {section} section at byte {offset}: expected {expected} bytes, but found {found}"
    )]
    Truncated {
        section: Section,
        offset: u64,
        expected: u64,
        found: u64,
    },

    /// Storage for a section could not be reserved, or its declared size overflows.
    #[error("Allocation of {requested} bytes for the {section} section failed")]
    AllocationFailed { section: Section, requested: u64 },

    /// A declared count of items does not match the items actually present.
    #[error("Count mismatch for {item_type}: expected {expected}, but found {found}")]
    CountMismatch {
        item_type: &'static str,
        expected: u64,
        found: u64,
    },

    /// A stage was requested after an earlier stage already failed.
    #[error("Decoding was aborted at the {section} section; the stream position is lost")]
    Aborted { section: Section },
}

/// A convenience `Result` type alias using the crate's `PmdError` type.
pub type Result<T> = std::result::Result<T, PmdError>;

/// Failure of the decoding pipeline, carrying whatever was decoded before it.
///
/// Fragments of sections that completed before `section` are intact; the
/// failing section and everything after it are left empty.
#[derive(Debug, Error)]
#[error("Failed to decode the {section} section")]
pub struct DecodeFailure {
    pub section: Section,
    #[source]
    pub source: PmdError,
    document: Box<ModelDocument>,
}

impl DecodeFailure {
    pub(crate) fn new(section: Section, source: PmdError, document: ModelDocument) -> Self {
        Self {
            section,
            source,
            document: Box::new(document),
        }
    }

    /// The partially decoded document.
    pub fn partial(&self) -> &ModelDocument {
        &self.document
    }

    /// Takes ownership of the partially decoded document.
    pub fn into_partial(self) -> ModelDocument {
        *self.document
    }
}
