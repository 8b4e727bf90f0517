//! Core data structures for the decoded model.
//!
//! Every fragment is produced by exactly one section reader and is owned by
//! [`ModelDocument`]. Cross-references between fragments (bone parents, IK
//! targets, morph vertex indices) are plain integers and are never validated.

use std::fmt;

use super::error::{PmdError, Result};

/// The nine sections of a PMD stream, in the order they appear on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Header,
    Vertex,
    Index,
    Material,
    Bone,
    Ik,
    Skin,
    SkinDisplay,
    BoneName,
}

impl Section {
    /// All sections in stream order.
    pub const ALL: [Section; 9] = [
        Section::Header,
        Section::Vertex,
        Section::Index,
        Section::Material,
        Section::Bone,
        Section::Ik,
        Section::Skin,
        Section::SkinDisplay,
        Section::BoneName,
    ];
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Section::Header => write!(f, "header"),
            Section::Vertex => write!(f, "vertex"),
            Section::Index => write!(f, "index"),
            Section::Material => write!(f, "material"),
            Section::Bone => write!(f, "bone"),
            Section::Ik => write!(f, "IK"),
            Section::Skin => write!(f, "skin"),
            Section::SkinDisplay => write!(f, "skin display"),
            Section::BoneName => write!(f, "bone name"),
        }
    }
}

/// Model header: display name, comment and format version.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Header {
    pub name: String,
    pub comment: String,
    pub version: f32,
}

/// Skinning data attached to a single vertex.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VertexWeight {
    pub bone_index: u32,
    /// Blend weight on a 0..=100 scale.
    pub weight: u8,
    pub edge_flag: u8,
}

/// A single vertex assembled from the parallel arrays in [`Vertices`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
    pub weight: VertexWeight,
}

/// Vertex section: four parallel arrays of identical length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vertices {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub uvs: Vec<[f32; 2]>,
    pub weights: Vec<VertexWeight>,
}

impl Vertices {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Assembles vertex `index` from the parallel arrays.
    pub fn get(&self, index: usize) -> Option<Vertex> {
        Some(Vertex {
            position: *self.positions.get(index)?,
            normal: *self.normals.get(index)?,
            uv: *self.uvs.get(index)?,
            weight: *self.weights.get(index)?,
        })
    }
}

/// Surface material covering a run of consecutive triangle indices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Material {
    pub diffuse: [f32; 3],
    pub alpha: f32,
    pub specular_power: f32,
    pub specular: [f32; 3],
    pub ambient: [f32; 3],
    /// Index into the external toon texture palette.
    pub toon: u8,
    pub edge_flag: u8,
    /// Number of consecutive index entries this material consumes.
    pub face_count: u32,
    /// Raw texture reference, possibly `texture*sphere` encoded.
    pub texture: String,
}

impl Material {
    /// Splits the texture reference into its texture and sphere map parts.
    ///
    /// The stored string is left untouched; empty parts are reported as `None`.
    pub fn texture_paths(&self) -> (Option<&str>, Option<&str>) {
        match self.texture.split_once('*') {
            Some((texture, sphere)) => (non_empty(texture), non_empty(sphere)),
            None => (non_empty(&self.texture), None),
        }
    }
}

fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

/// Bone kinds as stored in the type byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoneKind {
    Rotate,
    RotateMove,
    Ik,
    Unknown,
    IkInfluenced,
    RotationInfluenced,
    IkTarget,
    Invisible,
    Twist,
    RotationFollow,
}

impl BoneKind {
    pub fn from_raw(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Rotate),
            1 => Some(Self::RotateMove),
            2 => Some(Self::Ik),
            3 => Some(Self::Unknown),
            4 => Some(Self::IkInfluenced),
            5 => Some(Self::RotationInfluenced),
            6 => Some(Self::IkTarget),
            7 => Some(Self::Invisible),
            8 => Some(Self::Twist),
            9 => Some(Self::RotationFollow),
            _ => None,
        }
    }
}

/// A skeleton bone. Indices refer into [`ModelDocument::bones`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bone {
    pub name: String,
    pub bone_type: u8,
    pub parent_index: u16,
    pub tail_index: u16,
    pub ik_parent_index: u16,
    pub head_position: [f32; 3],
}

impl Bone {
    pub fn kind(&self) -> Option<BoneKind> {
        BoneKind::from_raw(self.bone_type)
    }
}

/// An inverse-kinematics chain.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IkChain {
    pub bone_index: u16,
    pub target_index: u16,
    pub iterations: u16,
    pub control_weight: f32,
    /// Bones affected by the chain, in solve order. Its length is the
    /// chain length declared on the wire.
    pub child_indices: Vec<u16>,
}

impl IkChain {
    pub fn chain_length(&self) -> usize {
        self.child_indices.len()
    }
}

/// Morph categories as stored in the skin type byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkinCategory {
    Base,
    Eyebrow,
    Eye,
    Lip,
    Other,
}

impl SkinCategory {
    pub fn from_raw(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Base),
            1 => Some(Self::Eyebrow),
            2 => Some(Self::Eye),
            3 => Some(Self::Lip),
            4 => Some(Self::Other),
            _ => None,
        }
    }
}

/// One displaced vertex of a morph target.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SkinVertex {
    pub index: u32,
    pub translation: [f32; 3],
}

/// A morph target ("skin").
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Skin {
    pub name: String,
    pub skin_type: u8,
    pub vertices: Vec<SkinVertex>,
}

impl Skin {
    pub fn category(&self) -> Option<SkinCategory> {
        SkinCategory::from_raw(self.skin_type)
    }
}

/// A display group name for the bone panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoneName {
    pub name: String,
}

/// The decoded model.
///
/// Sections that were never decoded (because an earlier one failed) stay in
/// their empty default state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelDocument {
    pub header: Option<Header>,
    pub vertices: Vertices,
    pub indices: Vec<u16>,
    pub materials: Vec<Material>,
    pub bones: Vec<Bone>,
    pub ik_chains: Vec<IkChain>,
    pub skins: Vec<Skin>,
    /// Morph indices shown in the quick-access panel.
    pub skin_display: Vec<u32>,
    pub bone_names: Vec<BoneName>,
    completed: usize,
}

impl ModelDocument {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Sections decoded so far, in stream order.
    pub fn completed_sections(&self) -> &[Section] {
        &Section::ALL[..self.completed]
    }

    /// The section the pipeline would decode next, if any.
    pub fn next_section(&self) -> Option<Section> {
        Section::ALL.get(self.completed).copied()
    }

    pub fn is_complete(&self) -> bool {
        self.completed == Section::ALL.len()
    }

    pub(crate) fn mark_completed(&mut self) {
        self.completed = (self.completed + 1).min(Section::ALL.len());
    }

    /// Verifies that material face counts add up to the index count.
    pub fn check_face_counts(&self) -> Result<()> {
        let declared: u64 = self.materials.iter().map(|m| u64::from(m.face_count)).sum();
        let found = self.indices.len() as u64;
        if declared != found {
            return Err(PmdError::CountMismatch {
                item_type: "material face indices",
                expected: declared,
                found,
            });
        }
        Ok(())
    }

    /// Releases the document and everything it owns.
    pub fn close(self) {
        drop(self);
    }
}
