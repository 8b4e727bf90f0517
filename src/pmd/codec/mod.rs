//! Codec layer for byte-level decoding.
//!
//! # Submodules
//!
//! - [`source`][]: Forward-only, position-tracked reads from the input stream
//! - [`cursor`][]: Little-endian field reads over an already filled block
//! - [`text`][]: Fixed-length legacy text fields to UTF-8

pub mod cursor;
pub mod source;
pub mod text;

pub use cursor::ByteCursor;
pub use source::ByteSource;
pub use text::TextDecoder;
