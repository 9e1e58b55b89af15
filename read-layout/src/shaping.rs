//! The mutable glyph-sequence interfaces used during shaping.
//!
//! The engines never own the sequence being shaped: the caller passes it in
//! through one of these narrow traits for the duration of a single call.
//! Implementations backed by a resizable array must keep the indices of the
//! remainder of the sequence stable across a resize.

use layout_types::GlyphId;

/// The GDEF glyph class of a glyph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum GlyphClassKind {
    /// Not classified.
    #[default]
    Zero = 0,
    Base = 1,
    Ligature = 2,
    Mark = 3,
    Component = 4,
}

impl GlyphClassKind {
    /// Map a raw GDEF class value; anything out of range is [`Zero`](Self::Zero).
    pub fn from_raw(raw: u16) -> Self {
        match raw {
            1 => GlyphClassKind::Base,
            2 => GlyphClassKind::Ligature,
            3 => GlyphClassKind::Mark,
            4 => GlyphClassKind::Component,
            _ => GlyphClassKind::Zero,
        }
    }
}

/// A mutable glyph-index sequence, the subject of substitution.
///
/// Indexing past `len()` is caller misuse and may panic.
pub trait GlyphIndexList {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The glyph at `index`.
    fn glyph(&self, index: usize) -> GlyphId;

    /// Replace one glyph with another (1:1).
    fn replace(&mut self, index: usize, glyph: GlyphId);

    /// Replace one glyph with a sequence (1:N).
    fn replace_with_many(&mut self, index: usize, glyphs: &[GlyphId]);

    /// Replace `count` glyphs starting at `index` with one glyph (N:1).
    fn replace_many_with_one(&mut self, index: usize, count: usize, glyph: GlyphId);
}

/// A mutable glyph-position sequence, the subject of positioning.
pub trait GlyphPositions {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The glyph at `index` and its current horizontal advance.
    fn glyph_and_advance(&self, index: usize) -> (GlyphId, i16);

    fn glyph(&self, index: usize) -> GlyphId {
        self.glyph_and_advance(index).0
    }

    /// The current (x, y) offset at `index`.
    fn offset(&self, index: usize) -> (i16, i16);

    /// The GDEF class of the glyph at `index`, used for skip/attach
    /// decisions.
    fn class_kind(&self, index: usize) -> GlyphClassKind;

    /// Add to the (x, y) offset at `index`.
    fn append_offset(&mut self, index: usize, dx: i16, dy: i16);

    /// Add to the (x, y) advance at `index`.
    fn append_advance(&mut self, index: usize, dx: i16, dy: i16);
}

/// A plain `Vec`-backed [`GlyphIndexList`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GlyphBuffer {
    glyphs: Vec<GlyphId>,
}

impl GlyphBuffer {
    pub fn new(glyphs: Vec<GlyphId>) -> Self {
        GlyphBuffer { glyphs }
    }

    pub fn glyphs(&self) -> &[GlyphId] {
        &self.glyphs
    }
}

impl FromIterator<u16> for GlyphBuffer {
    fn from_iter<I: IntoIterator<Item = u16>>(iter: I) -> Self {
        GlyphBuffer {
            glyphs: iter.into_iter().map(GlyphId::new).collect(),
        }
    }
}

impl GlyphIndexList for GlyphBuffer {
    fn len(&self) -> usize {
        self.glyphs.len()
    }

    fn glyph(&self, index: usize) -> GlyphId {
        self.glyphs[index]
    }

    fn replace(&mut self, index: usize, glyph: GlyphId) {
        self.glyphs[index] = glyph;
    }

    fn replace_with_many(&mut self, index: usize, glyphs: &[GlyphId]) {
        self.glyphs.splice(index..index + 1, glyphs.iter().copied());
    }

    fn replace_many_with_one(&mut self, index: usize, count: usize, glyph: GlyphId) {
        self.glyphs.splice(index..index + count, std::iter::once(glyph));
    }
}

/// One glyph in a [`PositionBuffer`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PositionEntry {
    pub glyph: GlyphId,
    pub class: GlyphClassKind,
    pub x_advance: i16,
    pub y_advance: i16,
    pub x_offset: i16,
    pub y_offset: i16,
}

/// A plain `Vec`-backed [`GlyphPositions`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PositionBuffer {
    entries: Vec<PositionEntry>,
}

impl PositionBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, glyph: GlyphId, class: GlyphClassKind, x_advance: i16) {
        self.entries.push(PositionEntry {
            glyph,
            class,
            x_advance,
            ..Default::default()
        });
    }

    pub fn entries(&self) -> &[PositionEntry] {
        &self.entries
    }
}

impl GlyphPositions for PositionBuffer {
    fn len(&self) -> usize {
        self.entries.len()
    }

    fn glyph_and_advance(&self, index: usize) -> (GlyphId, i16) {
        let entry = &self.entries[index];
        (entry.glyph, entry.x_advance)
    }

    fn offset(&self, index: usize) -> (i16, i16) {
        let entry = &self.entries[index];
        (entry.x_offset, entry.y_offset)
    }

    fn class_kind(&self, index: usize) -> GlyphClassKind {
        self.entries[index].class
    }

    fn append_offset(&mut self, index: usize, dx: i16, dy: i16) {
        let entry = &mut self.entries[index];
        entry.x_offset = entry.x_offset.wrapping_add(dx);
        entry.y_offset = entry.y_offset.wrapping_add(dy);
    }

    fn append_advance(&mut self, index: usize, dx: i16, dy: i16) {
        let entry = &mut self.entries[index];
        entry.x_advance = entry.x_advance.wrapping_add(dx);
        entry.y_advance = entry.y_advance.wrapping_add(dy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_resize_keeps_following_indices_stable() {
        let mut buffer: GlyphBuffer = [1u16, 2, 3, 4].into_iter().collect();
        buffer.replace_with_many(1, &[GlyphId::new(20), GlyphId::new(21)]);
        assert_eq!(
            buffer.glyphs(),
            &[1, 20, 21, 3, 4].map(GlyphId::new)
        );
        buffer.replace_many_with_one(1, 3, GlyphId::new(99));
        assert_eq!(buffer.glyphs(), &[1, 99, 4].map(GlyphId::new));
    }

    #[test]
    fn position_buffer_appends() {
        let mut buffer = PositionBuffer::new();
        buffer.push(GlyphId::new(7), GlyphClassKind::Base, 500);
        buffer.append_offset(0, -10, 4);
        buffer.append_offset(0, -10, 0);
        buffer.append_advance(0, 25, 0);
        assert_eq!(buffer.offset(0), (-20, 4));
        assert_eq!(buffer.glyph_and_advance(0), (GlyphId::new(7), 525));
    }

    #[test]
    fn class_kind_from_raw() {
        assert_eq!(GlyphClassKind::from_raw(3), GlyphClassKind::Mark);
        assert_eq!(GlyphClassKind::from_raw(9), GlyphClassKind::Zero);
    }
}
