//! The [SVG](https://learn.microsoft.com/typography/opentype/spec/svg)
//! table (tag `SVG `): glyph descriptions as SVG documents.
//!
//! Documents are exposed as raw bytes; each is either plain UTF-8 or a
//! gzip stream, flagged by magic-number detection. Decompression and XML
//! parsing are left to the caller.

use layout_types::GlyphId;

use crate::font_data::FontData;
use crate::read::{FontRead, ReadError};

const GZIP_MAGIC: [u8; 2] = [0x1F, 0x8B];

/// The SVG glyph table, version 0.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Svg {
    /// In order of increasing start glyph.
    pub entries: Vec<SvgDocumentRecord>,
}

/// One document index entry and its document bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SvgDocumentRecord {
    pub start_glyph: GlyphId,
    pub end_glyph: GlyphId,
    data: Vec<u8>,
}

/// A borrowed SVG document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SvgDocument<'a> {
    pub data: &'a [u8],
    /// Whether `data` is a gzip stream rather than plain UTF-8.
    pub compressed: bool,
}

impl FontRead for Svg {
    fn read(data: FontData) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        let version: u16 = cursor.read()?;
        if version != 0 {
            return Err(ReadError::InvalidFormat(version.into()));
        }
        let doc_index_offset: u32 = cursor.read()?;
        if doc_index_offset == 0 {
            return Err(ReadError::NullOffset);
        }
        let _reserved: u32 = cursor.read()?;
        // document offsets are relative to the index start
        let index_data = data
            .split_off(doc_index_offset as usize)
            .ok_or(ReadError::OutOfBounds)?;
        let mut index_cursor = index_data.cursor();
        let num_entries: u16 = index_cursor.read()?;
        let mut raw_entries = Vec::with_capacity(num_entries as usize);
        for _ in 0..num_entries {
            let start_glyph: GlyphId = index_cursor.read()?;
            let end_glyph: GlyphId = index_cursor.read()?;
            let doc_offset: u32 = index_cursor.read()?;
            let doc_len: u32 = index_cursor.read()?;
            if end_glyph < start_glyph {
                return Err(ReadError::MalformedData("SVG glyph range is inverted"));
            }
            if doc_offset == 0 || doc_len == 0 {
                return Err(ReadError::MalformedData("empty SVG document entry"));
            }
            raw_entries.push((start_glyph, end_glyph, doc_offset, doc_len));
        }
        let mut entries = Vec::with_capacity(raw_entries.len());
        for (start_glyph, end_glyph, doc_offset, doc_len) in raw_entries {
            let start = doc_offset as usize;
            let end = start
                .checked_add(doc_len as usize)
                .ok_or(ReadError::OutOfBounds)?;
            let doc_data = index_data.slice(start..end).ok_or(ReadError::OutOfBounds)?;
            entries.push(SvgDocumentRecord {
                start_glyph,
                end_glyph,
                data: doc_data.as_bytes().to_vec(),
            });
        }
        Ok(Svg { entries })
    }
}

impl Svg {
    /// The document containing `glyph`, if any.
    pub fn document_for(&self, glyph: GlyphId) -> Option<SvgDocument> {
        self.entries
            .iter()
            .find(|entry| entry.start_glyph <= glyph && glyph <= entry.end_glyph)
            .map(SvgDocumentRecord::document)
    }
}

impl SvgDocumentRecord {
    pub fn document(&self) -> SvgDocument {
        SvgDocument {
            data: &self.data,
            compressed: self.data.starts_with(&GZIP_MAGIC),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use layout_test_data::svg as test_data;

    #[test]
    fn plain_and_gzip_documents() {
        let svg = Svg::read(FontData::new(test_data::TWO_DOCUMENTS)).unwrap();
        assert_eq!(svg.entries.len(), 2);

        let plain = svg.document_for(GlyphId::new(2)).unwrap();
        assert!(!plain.compressed);
        assert!(plain.data.starts_with(b"<svg"));
        // the first entry spans glyphs 1..=2
        assert_eq!(svg.document_for(GlyphId::new(1)).unwrap(), plain);

        let packed = svg.document_for(GlyphId::new(5)).unwrap();
        assert!(packed.compressed);

        assert!(svg.document_for(GlyphId::new(9)).is_none());
    }

    #[test]
    fn idempotent_load() {
        let data = FontData::new(test_data::TWO_DOCUMENTS);
        assert_eq!(Svg::read(data).unwrap(), Svg::read(data).unwrap());
    }
}
