//! The top-level font facade over the supported layout tables.

use std::collections::BTreeSet;

use layout_types::{GlyphId, Tag};

use crate::font_data::FontData;
use crate::read::{FontRead, ReadError};
use crate::shaping::{GlyphClassKind, GlyphIndexList, GlyphPositions};
use crate::table_directory::TableDirectory;
use crate::tables::base::Base;
use crate::tables::cbdt::Cbdt;
use crate::tables::cblc::Cblc;
use crate::tables::ebdt::Ebdt;
use crate::tables::eblc::Eblc;
use crate::tables::gdef::Gdef;
use crate::tables::gpos::Gpos;
use crate::tables::gsub::Gsub;
use crate::tables::jstf::Jstf;
use crate::tables::math::Math;
use crate::tables::svg::Svg;

/// All layout tables of one font, each independently optional.
///
/// A structurally broken table is dropped with a warning at load time;
/// the rest of the font stays usable.
#[derive(Clone, Debug, Default)]
pub struct LayoutFont {
    pub gsub: Option<Gsub>,
    pub gpos: Option<Gpos>,
    pub gdef: Option<Gdef>,
    pub base: Option<Base>,
    pub jstf: Option<Jstf>,
    pub math: Option<Math>,
    pub cblc: Option<Cblc>,
    pub cbdt: Option<Cbdt>,
    pub eblc: Option<Eblc>,
    pub ebdt: Option<Ebdt>,
    pub svg: Option<Svg>,
}

fn load_table<T: FontRead>(
    directory: &TableDirectory,
    font: FontData,
    tag: &[u8; 4],
) -> Option<T> {
    let tag = Tag::new(tag);
    let table_data = directory.table_data(font, tag)?;
    match T::read(table_data) {
        Ok(table) => Some(table),
        Err(err) => {
            log::warn!("dropping malformed {tag} table: {err}");
            None
        }
    }
}

impl LayoutFont {
    /// Load the layout tables from complete font bytes.
    ///
    /// Only an unreadable table directory fails the load; individual
    /// tables degrade to `None`.
    pub fn load(bytes: &[u8]) -> Result<Self, ReadError> {
        let font = FontData::new(bytes);
        let directory = TableDirectory::read(font)?;
        Ok(LayoutFont {
            gsub: load_table(&directory, font, b"GSUB"),
            gpos: load_table(&directory, font, b"GPOS"),
            gdef: load_table(&directory, font, b"GDEF"),
            base: load_table(&directory, font, b"BASE"),
            jstf: load_table(&directory, font, b"JSTF"),
            math: load_table(&directory, font, b"MATH"),
            cblc: load_table(&directory, font, b"CBLC"),
            cbdt: load_table(&directory, font, b"CBDT"),
            eblc: load_table(&directory, font, b"EBLC"),
            ebdt: load_table(&directory, font, b"EBDT"),
            svg: load_table(&directory, font, b"SVG "),
        })
    }

    /// Apply GSUB lookups to a glyph sequence; a no-op without GSUB.
    pub fn shape_substitute(&self, glyphs: &mut dyn GlyphIndexList, lookup_indices: &[u16]) {
        if let Some(gsub) = &self.gsub {
            gsub.substitute(glyphs, lookup_indices);
        }
    }

    /// Apply GPOS lookups to a position sequence; a no-op without GPOS.
    pub fn shape_position(&self, positions: &mut dyn GlyphPositions, lookup_indices: &[u16]) {
        if let Some(gpos) = &self.gpos {
            gpos.position(positions, lookup_indices);
        }
    }

    /// The active GSUB lookup indices for a script/language/feature
    /// selection.
    pub fn substitution_lookups(
        &self,
        script: Tag,
        lang: Option<Tag>,
        feature_filter: Option<&[Tag]>,
    ) -> Vec<u16> {
        self.gsub
            .as_ref()
            .map(|gsub| gsub.lookup_indices(script, lang, feature_filter))
            .unwrap_or_default()
    }

    /// The active GPOS lookup indices for a script/language/feature
    /// selection.
    pub fn positioning_lookups(
        &self,
        script: Tag,
        lang: Option<Tag>,
        feature_filter: Option<&[Tag]>,
    ) -> Vec<u16> {
        self.gpos
            .as_ref()
            .map(|gpos| gpos.lookup_indices(script, lang, feature_filter))
            .unwrap_or_default()
    }

    /// The GDEF class of a glyph; `Zero` without GDEF.
    pub fn class_of_glyph(&self, glyph: GlyphId) -> GlyphClassKind {
        self.gdef
            .as_ref()
            .map(|gdef| gdef.glyph_class(glyph))
            .unwrap_or(GlyphClassKind::Zero)
    }

    /// The GDEF mark attachment class of a glyph, 0 without GDEF.
    pub fn mark_class_of_glyph(&self, glyph: GlyphId) -> u16 {
        self.gdef
            .as_ref()
            .map(|gdef| gdef.mark_attach_class(glyph))
            .unwrap_or(0)
    }

    /// Every glyph reachable by substitution for one script/language.
    pub fn collect_reachable_substitution_glyphs(
        &self,
        script: Tag,
        lang: Option<Tag>,
    ) -> BTreeSet<GlyphId> {
        self.gsub
            .as_ref()
            .map(|gsub| gsub.collect_reachable_substitution_glyphs(script, lang))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shaping::GlyphBuffer;
    use layout_test_data::{gdef, gsub};

    const SFNT_TRUETYPE: u32 = 0x0001_0000;

    /// Assemble a minimal sfnt wrapper around raw table bytes.
    fn build_font(tables: &[(&[u8; 4], &[u8])]) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&SFNT_TRUETYPE.to_be_bytes());
        bytes.extend_from_slice(&(tables.len() as u16).to_be_bytes());
        // searchRange, entrySelector, rangeShift are ignored by the reader
        bytes.extend_from_slice(&[0; 6]);
        let mut offset = 12 + tables.len() * 16;
        for (tag, data) in tables {
            bytes.extend_from_slice(*tag);
            bytes.extend_from_slice(&0u32.to_be_bytes()); // checksum
            bytes.extend_from_slice(&(offset as u32).to_be_bytes());
            bytes.extend_from_slice(&(data.len() as u32).to_be_bytes());
            offset += data.len();
        }
        for (_, data) in tables {
            bytes.extend_from_slice(data);
        }
        bytes
    }

    #[test]
    fn shapes_with_loaded_tables() {
        let bytes = build_font(&[(b"GDEF", gdef::SIMPLE), (b"GSUB", gsub::SINGLE_DELTA)]);
        let font = LayoutFont::load(&bytes).unwrap();
        assert!(font.gsub.is_some());
        assert!(font.gdef.is_some());
        assert!(font.gpos.is_none());

        let lookups = font.substitution_lookups(Tag::new(b"latn"), None, None);
        assert_eq!(lookups, vec![0]);

        let mut buffer: GlyphBuffer = [5u16, 9].into_iter().collect();
        font.shape_substitute(&mut buffer, &lookups);
        assert_eq!(buffer.glyphs(), &[7, 9].map(GlyphId::new));

        assert_eq!(font.class_of_glyph(GlyphId::new(100)), GlyphClassKind::Base);
        assert_eq!(font.mark_class_of_glyph(GlyphId::new(200)), 1);

        let reachable = font.collect_reachable_substitution_glyphs(Tag::new(b"latn"), None);
        assert_eq!(reachable.into_iter().collect::<Vec<_>>(), vec![GlyphId::new(7)]);
    }

    #[test]
    fn broken_table_degrades_to_none() {
        let _ = env_logger::builder().is_test(true).try_init();
        // truncate GSUB mid-header
        let bytes = build_font(&[(b"GDEF", gdef::SIMPLE), (b"GSUB", &gsub::SINGLE_DELTA[..6])]);
        let font = LayoutFont::load(&bytes).unwrap();
        assert!(font.gsub.is_none());
        assert!(font.gdef.is_some());

        // shaping through the missing table is a no-op
        let mut buffer: GlyphBuffer = [5u16].into_iter().collect();
        font.shape_substitute(&mut buffer, &[0]);
        assert_eq!(buffer.glyphs(), &[GlyphId::new(5)]);
    }

    #[test]
    fn missing_directory_is_an_error() {
        assert!(LayoutFont::load(&[0xDE, 0xAD]).is_err());
    }
}
