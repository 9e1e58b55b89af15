//! Glyph identifiers.
//!
//! Although these are treated as u16s in the spec, we choose to represent
//! them as a distinct type.

use crate::ReadScalar;

/// A 16-bit glyph identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GlyphId(u16);

impl GlyphId {
    /// The identifier reserved for unknown glyphs.
    pub const NOTDEF: GlyphId = GlyphId(0);

    /// Construct a new `GlyphId`.
    pub const fn new(raw: u16) -> Self {
        GlyphId(raw)
    }

    /// The identifier as a u16.
    pub const fn to_u16(self) -> u16 {
        self.0
    }
}

impl Default for GlyphId {
    fn default() -> Self {
        GlyphId::NOTDEF
    }
}

impl From<u16> for GlyphId {
    fn from(raw: u16) -> Self {
        GlyphId(raw)
    }
}

impl ReadScalar for GlyphId {
    const RAW_BYTE_LEN: usize = 2;

    fn read(bytes: &[u8]) -> Option<Self> {
        u16::read(bytes).map(GlyphId)
    }
}

impl std::fmt::Display for GlyphId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GID_{}", self.0)
    }
}
