//! # pmd-reader
//!
//! A decoder for legacy PMD polygon model files.
//!
//! Reads the nine sections of a PMD stream (header, vertices, indices,
//! materials, bones, IK chains, morph targets, and the two display lists)
//! into an owned [`ModelDocument`]. Embedded Shift_JIS text is converted to
//! UTF-8. Decoding is strictly sequential and stops at the first failing
//! section, keeping everything decoded before it.
//!
//! ```no_run
//! let file = std::fs::File::open("model.pmd").unwrap();
//! match pmd_reader::open(std::io::BufReader::new(file)) {
//!     Ok(model) => println!("{} vertices", model.vertex_count()),
//!     Err(failure) => {
//!         eprintln!("{}: {}", failure, failure.source);
//!         let partial = failure.into_partial();
//!         println!("decoded: {:?}", partial.completed_sections());
//!     }
//! }
//! ```
pub mod pmd;

// Re-export the main types for convenience
pub use pmd::{
    iter::MaterialFaces,
    open, open_path, open_with,
    types::models::{
        Bone, BoneKind, BoneName, Header, IkChain, Material, ModelDocument, Section, Skin,
        SkinCategory, SkinVertex, Vertex, VertexWeight, Vertices,
    },
    DecodeFailure, PmdError, PmdReader, ReaderOptions, Result,
};
