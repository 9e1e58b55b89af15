//! Scalar types used in OpenType layout tables.
//!
//! These are the small value types shared by every table parser: tags,
//! glyph identifiers, and offsets, along with the [`ReadScalar`] trait
//! that decodes them from raw big-endian bytes.

#![deny(rustdoc::broken_intra_doc_links)]

mod glyph_id;
mod offset;
mod raw;
mod tag;

pub use glyph_id::GlyphId;
pub use offset::{Offset16, Offset32};
pub use raw::ReadScalar;
pub use tag::Tag;
