//! Iteration over the index ranges consumed by each material.
//!
//! Materials partition the index array in stream order: material `i` owns
//! the `face_count` indices following those of materials `0..i`.

use super::types::error::{PmdError, Result};
use super::types::models::{Material, ModelDocument};

/// Iterator over `(material, indices)` pairs.
///
/// Created by [`ModelDocument::material_faces()`].
pub struct MaterialFaces<'a> {
    document: &'a ModelDocument,
    material_idx: usize,
    offset: usize,
}

impl<'a> Iterator for MaterialFaces<'a> {
    type Item = Result<(&'a Material, &'a [u16])>;

    fn next(&mut self) -> Option<Self::Item> {
        let material = self.document.materials.get(self.material_idx)?;
        self.material_idx += 1;

        let start = self.offset;
        let end = start.saturating_add(material.face_count as usize);
        self.offset = end;

        let indices = &self.document.indices;
        match indices.get(start..end) {
            Some(faces) => Some(Ok((material, faces))),
            None => Some(Err(PmdError::CountMismatch {
                item_type: "material face indices",
                expected: end as u64,
                found: indices.len() as u64,
            })),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.document.materials.len() - self.material_idx;
        (left, Some(left))
    }
}

impl ModelDocument {
    /// Returns an iterator over each material and the indices it draws.
    ///
    /// A material whose range runs past the end of the index array yields
    /// [`PmdError::CountMismatch`].
    pub fn material_faces(&self) -> MaterialFaces<'_> {
        MaterialFaces {
            document: self,
            material_idx: 0,
            offset: 0,
        }
    }
}
