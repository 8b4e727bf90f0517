//! Synthesizes PMD byte streams for the integration tests.
#![allow(dead_code)]

use encoding_rs::SHIFT_JIS;
use pmd_reader::{Bone, Header, IkChain, Material, ModelDocument, Section, Skin, Vertex};

/// Filler byte the format conventionally uses after a text terminator.
pub const FILLER: u8 = 0xFD;

/// Builds a PMD stream section by section, remembering where each ends.
#[derive(Default)]
pub struct PmdBuilder {
    bytes: Vec<u8>,
    section_ends: Vec<usize>,
}

impl PmdBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(mut self, header: &Header) -> Self {
        self.bytes.extend_from_slice(b"Pmd");
        self.f32(header.version);
        self.text(&header.name, 20);
        self.text(&header.comment, 256);
        self.end_section()
    }

    pub fn vertices(mut self, vertices: &[Vertex]) -> Self {
        self.u32(vertices.len() as u32);
        for v in vertices {
            self.floats(&v.position);
            self.floats(&v.normal);
            self.floats(&v.uv);
            self.u32(v.weight.bone_index);
            self.bytes.push(v.weight.weight);
            self.bytes.push(v.weight.edge_flag);
        }
        self.end_section()
    }

    pub fn indices(mut self, indices: &[u16]) -> Self {
        self.u32(indices.len() as u32);
        for &i in indices {
            self.u16(i);
        }
        self.end_section()
    }

    pub fn materials(mut self, materials: &[Material]) -> Self {
        self.u32(materials.len() as u32);
        for m in materials {
            self.floats(&m.diffuse);
            self.f32(m.alpha);
            self.f32(m.specular_power);
            self.floats(&m.specular);
            self.floats(&m.ambient);
            self.bytes.push(m.toon);
            self.bytes.push(m.edge_flag);
            self.u32(m.face_count);
            self.text(&m.texture, 20);
        }
        self.end_section()
    }

    pub fn bones(mut self, bones: &[Bone]) -> Self {
        self.u16(bones.len() as u16);
        for b in bones {
            self.text(&b.name, 50);
            self.u16(b.parent_index);
            self.u16(b.tail_index);
            self.bytes.push(b.bone_type);
            self.u16(b.ik_parent_index);
            self.floats(&b.head_position);
        }
        self.end_section()
    }

    pub fn ik_chains(mut self, chains: &[IkChain]) -> Self {
        self.u16(chains.len() as u16);
        for c in chains {
            self.u16(c.bone_index);
            self.u16(c.target_index);
            self.bytes.push(c.child_indices.len() as u8);
            self.u16(c.iterations);
            self.f32(c.control_weight);
            for &child in &c.child_indices {
                self.u16(child);
            }
        }
        self.end_section()
    }

    pub fn skins(mut self, skins: &[Skin]) -> Self {
        self.u16(skins.len() as u16);
        for s in skins {
            self.text(&s.name, 20);
            self.u32(s.vertices.len() as u32);
            self.bytes.push(s.skin_type);
            for v in &s.vertices {
                self.u32(v.index);
                self.floats(&v.translation);
            }
        }
        self.end_section()
    }

    pub fn skin_display(mut self, entries: &[u32]) -> Self {
        self.bytes.push(entries.len() as u8);
        for &e in entries {
            self.u32(e);
        }
        self.end_section()
    }

    pub fn bone_names(mut self, names: &[&str]) -> Self {
        self.bytes.push(names.len() as u8);
        for name in names {
            self.text(name, 50);
        }
        self.end_section()
    }

    /// Writes every section of `document` after the header.
    pub fn body(self, document: &ModelDocument) -> Self {
        let names: Vec<&str> = document.bone_names.iter().map(|b| b.name.as_str()).collect();
        let vertices: Vec<Vertex> = (0..document.vertex_count())
            .filter_map(|i| document.vertices.get(i))
            .collect();
        self.vertices(&vertices)
            .indices(&document.indices)
            .materials(&document.materials)
            .bones(&document.bones)
            .ik_chains(&document.ik_chains)
            .skins(&document.skins)
            .skin_display(&document.skin_display)
            .bone_names(&names)
    }

    /// Writes all sections after the header with zero counts.
    pub fn empty_body(self) -> Self {
        self.vertices(&[])
            .indices(&[])
            .materials(&[])
            .bones(&[])
            .ik_chains(&[])
            .skins(&[])
            .skin_display(&[])
            .bone_names(&[])
    }

    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.bytes.extend_from_slice(bytes);
        self
    }

    /// Byte offset at which each completed section ends.
    pub fn section_ends(&self) -> &[usize] {
        &self.section_ends
    }

    pub fn build(self) -> Vec<u8> {
        self.bytes
    }

    fn end_section(mut self) -> Self {
        self.section_ends.push(self.bytes.len());
        self
    }

    fn u16(&mut self, v: u16) {
        self.bytes.extend_from_slice(&v.to_le_bytes());
    }

    fn u32(&mut self, v: u32) {
        self.bytes.extend_from_slice(&v.to_le_bytes());
    }

    fn f32(&mut self, v: f32) {
        self.bytes.extend_from_slice(&v.to_le_bytes());
    }

    fn floats(&mut self, values: &[f32]) {
        for &v in values {
            self.f32(v);
        }
    }

    /// Shift_JIS text, NUL terminated and padded with filler to `len` bytes.
    fn text(&mut self, s: &str, len: usize) {
        let (encoded, _, _) = SHIFT_JIS.encode(s);
        let mut field = encoded.into_owned();
        field.truncate(len);
        if field.len() < len {
            field.push(0);
        }
        field.resize(len, FILLER);
        self.bytes.extend_from_slice(&field);
    }
}

pub fn sample_header() -> Header {
    Header {
        name: "初音ミク".to_string(),
        comment: "テスト用モデル\nsample comment".to_string(),
        version: 1.0,
    }
}

/// A small but complete model touching every section.
pub fn sample_document() -> ModelDocument {
    use pmd_reader::{BoneName, SkinVertex, VertexWeight};

    let mut document = ModelDocument::default();
    document.header = Some(sample_header());

    for i in 0..4u32 {
        let f = i as f32;
        document.vertices.positions.push([f, f * 0.5, -f]);
        document.vertices.normals.push([0.0, 1.0, 0.0]);
        document.vertices.uvs.push([f * 0.25, 1.0 - f * 0.25]);
        document.vertices.weights.push(VertexWeight {
            bone_index: i % 2,
            weight: 100 - (i as u8) * 25,
            edge_flag: (i % 2) as u8,
        });
    }
    document.indices = vec![0, 1, 2, 0, 2, 3];
    document.materials = vec![
        Material {
            diffuse: [0.8, 0.7, 0.6],
            alpha: 1.0,
            specular_power: 5.0,
            specular: [0.1, 0.1, 0.1],
            ambient: [0.4, 0.35, 0.3],
            toon: 0,
            edge_flag: 1,
            face_count: 3,
            texture: "body.bmp*body.sph".to_string(),
        },
        Material {
            diffuse: [1.0, 1.0, 1.0],
            alpha: 0.5,
            specular_power: 10.0,
            specular: [0.0, 0.0, 0.0],
            ambient: [0.5, 0.5, 0.5],
            toon: 255,
            edge_flag: 0,
            face_count: 3,
            texture: String::new(),
        },
    ];
    document.bones = vec![
        Bone {
            name: "センター".to_string(),
            bone_type: 1,
            parent_index: 0xFFFF,
            tail_index: 1,
            ik_parent_index: 0,
            head_position: [0.0, 8.0, 0.0],
        },
        Bone {
            name: "左足ＩＫ".to_string(),
            bone_type: 2,
            parent_index: 0,
            tail_index: 0,
            ik_parent_index: 7,
            head_position: [1.0, 1.0, 0.5],
        },
    ];
    document.ik_chains = vec![IkChain {
        bone_index: 1,
        target_index: 0,
        iterations: 40,
        control_weight: 0.5,
        child_indices: vec![0, 1],
    }];
    document.skins = vec![
        Skin {
            name: "base".to_string(),
            skin_type: 0,
            vertices: vec![
                SkinVertex { index: 0, translation: [0.0, 0.0, 0.0] },
                SkinVertex { index: 3, translation: [1.0, 2.0, 3.0] },
            ],
        },
        Skin {
            name: "まばたき".to_string(),
            skin_type: 2,
            vertices: vec![SkinVertex { index: 1, translation: [0.0, -0.1, 0.0] }],
        },
    ];
    document.skin_display = vec![1];
    document.bone_names = vec![
        BoneName { name: "ＩＫ".to_string() },
        BoneName { name: "体(上)".to_string() },
    ];
    document
}

/// Builds the stream for `document`.
pub fn build_document(document: &ModelDocument) -> PmdBuilder {
    let header = document.header.clone().unwrap_or_default();
    PmdBuilder::new().header(&header).body(document)
}

/// True if the fragment for `section` is the same in both documents.
pub fn fragment_eq(a: &ModelDocument, b: &ModelDocument, section: Section) -> bool {
    match section {
        Section::Header => a.header == b.header,
        Section::Vertex => a.vertices == b.vertices,
        Section::Index => a.indices == b.indices,
        Section::Material => a.materials == b.materials,
        Section::Bone => a.bones == b.bones,
        Section::Ik => a.ik_chains == b.ik_chains,
        Section::Skin => a.skins == b.skins,
        Section::SkinDisplay => a.skin_display == b.skin_display,
        Section::BoneName => a.bone_names == b.bone_names,
    }
}

/// True if the fragment for `section` was never populated.
pub fn fragment_is_empty(document: &ModelDocument, section: Section) -> bool {
    fragment_eq(document, &ModelDocument::default(), section)
}
