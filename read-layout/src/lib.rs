//! Reading OpenType layout tables and shaping glyph sequences.
//!
//! A font's layout tables are parsed eagerly, once, into an owned table
//! graph ([`LayoutFont`]); the graph is immutable afterwards and safe to
//! share between concurrent shaping calls. Shaping mutates a caller-owned
//! glyph sequence through the capability traits in [`shaping`].

#![deny(rustdoc::broken_intra_doc_links)]

pub mod font_data;
pub mod read;
pub mod shaping;
pub mod table_directory;
pub mod tables;

mod font;

pub use font::LayoutFont;
pub use font_data::FontData;
pub use read::{FontRead, ReadError};

/// Re-export of the scalar types crate.
pub extern crate layout_types as types;

pub use types::{GlyphId, Offset16, Offset32, Tag};
