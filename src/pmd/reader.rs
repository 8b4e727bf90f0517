use std::io::Read;

use encoding_rs::{Encoding, SHIFT_JIS};
use log::{debug, info, warn};

use super::codec::{ByteSource, TextDecoder};
use super::format::{bone, display, header, ik, index, material, skin, vertex};
use super::types::error::{DecodeFailure, PmdError, Result};
use super::types::models::{ModelDocument, Section};
use super::utils;

/// Options controlling how a PMD stream is decoded.
#[derive(Debug, Clone, Copy)]
pub struct ReaderOptions {
    /// Encoding of the embedded name, comment and texture fields.
    pub encoding: &'static Encoding,
}

impl ReaderOptions {
    /// Overrides the text encoding by WHATWG label (e.g. `"shift_jis"`, `"gbk"`).
    ///
    /// Unknown labels fall back to Shift_JIS.
    pub fn with_encoding_label(mut self, label: &str) -> Self {
        self.encoding = utils::parse_encoding(label);
        self
    }
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self { encoding: SHIFT_JIS }
    }
}

/// Drives the section readers over a PMD stream, in order.
///
/// Every section depends on the stream position left by the one before it,
/// so sections can only be decoded sequentially. Once a section fails the
/// reader refuses to continue; the document keeps every fragment that was
/// completed before the failure.
///
/// # Example
/// ```no_run
/// # use pmd_reader::PmdReader;
/// # let file = std::fs::File::open("model.pmd").unwrap();
/// let mut reader = PmdReader::new(std::io::BufReader::new(file));
/// while let Some(section) = reader.decode_next().unwrap() {
///     println!("decoded {} section", section);
/// }
/// let document = reader.into_document();
/// ```
#[derive(Debug)]
pub struct PmdReader<R> {
    source: ByteSource<R>,
    text: TextDecoder,
    document: ModelDocument,
    failed: Option<Section>,
}

impl<R: Read> PmdReader<R> {
    pub fn new(stream: R) -> Self {
        Self::with_options(stream, ReaderOptions::default())
    }

    pub fn with_options(stream: R, options: ReaderOptions) -> Self {
        debug!("Decoding PMD text fields as {}", options.encoding.name());
        Self {
            source: ByteSource::new(stream),
            text: TextDecoder::new(options.encoding),
            document: ModelDocument::default(),
            failed: None,
        }
    }

    /// The document as decoded so far.
    pub fn document(&self) -> &ModelDocument {
        &self.document
    }

    /// Encoding used for the embedded text fields.
    pub fn encoding(&self) -> &'static Encoding {
        self.text.encoding()
    }

    /// Bytes consumed from the stream so far.
    pub fn position(&self) -> u64 {
        self.source.position()
    }

    /// Decodes the next section.
    ///
    /// Returns the section that was completed, or `None` when all nine
    /// sections are done.
    pub fn decode_next(&mut self) -> Result<Option<Section>> {
        self.step().map_err(|(_, e)| e)
    }

    /// Decodes all remaining sections.
    ///
    /// On failure the partial document travels inside the returned
    /// [`DecodeFailure`].
    pub fn finish(mut self) -> std::result::Result<ModelDocument, DecodeFailure> {
        loop {
            match self.step() {
                Ok(Some(_)) => {}
                Ok(None) => break,
                Err((section, e)) => return Err(DecodeFailure::new(section, e, self.document)),
            }
        }

        info!(
            "PMD decoded: {} vertices, {} indices, {} materials, {} bones, \
             {} IK chains, {} skins ({} bytes)",
            self.document.vertex_count(),
            self.document.index_count(),
            self.document.materials.len(),
            self.document.bones.len(),
            self.document.ik_chains.len(),
            self.document.skins.len(),
            self.source.position()
        );
        Ok(self.document)
    }

    /// Takes the document, complete or not.
    pub fn into_document(self) -> ModelDocument {
        self.document
    }

    fn step(&mut self) -> std::result::Result<Option<Section>, (Section, PmdError)> {
        if let Some(section) = self.failed {
            return Err((section, PmdError::Aborted { section }));
        }
        let Some(section) = self.document.next_section() else {
            return Ok(None);
        };

        if let Err(e) = self.run_stage(section) {
            warn!(
                "Decoding stopped in {} section at byte {}: {}",
                section,
                self.source.position(),
                e
            );
            self.failed = Some(section);
            return Err((section, e));
        }

        self.document.mark_completed();
        Ok(Some(section))
    }

    /// Runs one section reader. The fragment is only stored on success.
    fn run_stage(&mut self, section: Section) -> Result<()> {
        let source = &mut self.source;
        let text = &self.text;
        let document = &mut self.document;

        match section {
            Section::Header => document.header = Some(header::parse(source, text)?),
            Section::Vertex => document.vertices = vertex::parse(source)?,
            Section::Index => document.indices = index::parse(source)?,
            Section::Material => document.materials = material::parse(source, text)?,
            Section::Bone => document.bones = bone::parse(source, text)?,
            Section::Ik => document.ik_chains = ik::parse(source)?,
            Section::Skin => document.skins = skin::parse(source, text)?,
            Section::SkinDisplay => document.skin_display = display::parse_skin_display(source)?,
            Section::BoneName => document.bone_names = display::parse_bone_names(source, text)?,
        }
        Ok(())
    }
}
