//! Section readers for the PMD stream.
//!
//! Each submodule decodes one section. A reader consumes exactly the bytes
//! its section occupies from the shared [`ByteSource`](crate::pmd::codec::ByteSource),
//! leaving the stream positioned at the next section.
//!
//! # Architecture
//!
//! ```text
//! File Structure:
//! ┌─────────────────┐
//! │  Header         │ ← header::parse()
//! ├─────────────────┤
//! │  Vertices       │ ← vertex::parse()
//! │  Indices        │ ← index::parse()
//! │  Materials      │ ← material::parse()
//! ├─────────────────┤
//! │  Bones          │ ← bone::parse()
//! │  IK chains      │ ← ik::parse()       (count-dependent tail per entry)
//! │  Skins          │ ← skin::parse()     (count-dependent tail per entry)
//! ├─────────────────┤
//! │  Skin display   │ ← display::parse_skin_display()
//! │  Bone names     │ ← display::parse_bone_names()
//! └─────────────────┘
//! ```

pub mod bone;
pub mod display;
pub mod header;
pub mod ik;
pub mod index;
pub mod material;
pub mod skin;
pub mod vertex;
