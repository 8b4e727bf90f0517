//! Core PMD decoder module

pub mod codec;
pub mod format;
pub mod iter;
pub mod reader;
pub mod types;
mod utils;

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::info;

pub use reader::{PmdReader, ReaderOptions};
pub use types::error::{DecodeFailure, PmdError, Result};
pub use types::models::*;

/// Decodes a complete PMD stream with default options.
///
/// On failure, the fragments decoded before the failing section are
/// available through [`DecodeFailure::into_partial`].
pub fn open<R: Read>(stream: R) -> std::result::Result<ModelDocument, DecodeFailure> {
    PmdReader::new(stream).finish()
}

/// Decodes a complete PMD stream with the given options.
pub fn open_with<R: Read>(
    stream: R,
    options: &ReaderOptions,
) -> std::result::Result<ModelDocument, DecodeFailure> {
    PmdReader::with_options(stream, *options).finish()
}

/// Opens and decodes a PMD file.
///
/// A file that cannot be opened is reported as a failure of the header
/// section with an empty document.
pub fn open_path(
    path: impl AsRef<Path>,
    options: &ReaderOptions,
) -> std::result::Result<ModelDocument, DecodeFailure> {
    let path = path.as_ref();
    info!("Opening PMD file: {}", path.display());
    let file = File::open(path).map_err(|e| {
        DecodeFailure::new(Section::Header, PmdError::Io(e), ModelDocument::default())
    })?;
    open_with(BufReader::new(file), options)
}
