//! The [GDEF](https://learn.microsoft.com/typography/opentype/spec/gdef)
//! (glyph definition) table.
//!
//! GDEF classifies glyphs (base/ligature/mark/component) and carries the
//! attachment point and ligature caret lists; GSUB/GPOS consume the
//! classes as filtering input.

use layout_types::{GlyphId, Offset16, Offset32};

use super::layout::{ClassDef, CoverageTable};
use crate::font_data::FontData;
use crate::read::{FontRead, ReadError};
use crate::shaping::GlyphClassKind;

/// The glyph definition table, versions 1.0, 1.2 and 1.3.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gdef {
    pub glyph_class_def: Option<ClassDef>,
    pub attach_list: Option<AttachList>,
    pub lig_caret_list: Option<LigCaretList>,
    pub mark_attach_class_def: Option<ClassDef>,
    /// Version 1.2 and later.
    pub mark_glyph_sets: Option<MarkGlyphSets>,
}

impl FontRead for Gdef {
    fn read(data: FontData) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        let major: u16 = cursor.read()?;
        let minor: u16 = cursor.read()?;
        if major != 1 || !matches!(minor, 0 | 2 | 3) {
            return Err(ReadError::InvalidFormat(
                ((major as i64) << 16) | minor as i64,
            ));
        }
        let glyph_class_def_offset: Offset16 = cursor.read()?;
        let attach_list_offset: Offset16 = cursor.read()?;
        let lig_caret_list_offset: Offset16 = cursor.read()?;
        let mark_attach_class_def_offset: Offset16 = cursor.read()?;
        let mark_glyph_sets_offset: Option<Offset16> =
            if minor >= 2 { Some(cursor.read()?) } else { None };
        if minor >= 3 {
            let item_var_store: Offset32 = cursor.read()?;
            if !item_var_store.is_null() {
                log::warn!("GDEF: ItemVariationStore is not supported; ignoring");
            }
        }
        Ok(Gdef {
            glyph_class_def: data.resolve_opt(glyph_class_def_offset)?,
            attach_list: data.resolve_opt(attach_list_offset)?,
            lig_caret_list: data.resolve_opt(lig_caret_list_offset)?,
            mark_attach_class_def: data.resolve_opt(mark_attach_class_def_offset)?,
            mark_glyph_sets: match mark_glyph_sets_offset {
                Some(offset) => data.resolve_opt(offset)?,
                None => None,
            },
        })
    }
}

impl Gdef {
    /// The GDEF class of a glyph; `Zero` if there is no class definition.
    pub fn glyph_class(&self, glyph: GlyphId) -> GlyphClassKind {
        match &self.glyph_class_def {
            Some(class_def) => GlyphClassKind::from_raw(class_def.get(glyph)),
            None => GlyphClassKind::Zero,
        }
    }

    /// The mark attachment class of a glyph, 0 if unassigned.
    pub fn mark_attach_class(&self, glyph: GlyphId) -> u16 {
        self.mark_attach_class_def
            .as_ref()
            .map(|class_def| class_def.get(glyph))
            .unwrap_or(0)
    }

    /// Whether the given mark glyph set covers `glyph`.
    pub fn mark_glyph_set_covers(&self, set_index: u16, glyph: GlyphId) -> bool {
        self.mark_glyph_sets
            .as_ref()
            .and_then(|sets| sets.coverages.get(set_index as usize))
            .and_then(|coverage| coverage.get(glyph))
            .is_some()
    }

    /// The attachment point indices for a glyph, if any.
    pub fn attach_points(&self, glyph: GlyphId) -> Option<&[u16]> {
        let list = self.attach_list.as_ref()?;
        let index = list.coverage.get(glyph)?;
        list.points.get(index as usize).map(Vec::as_slice)
    }

    /// The ligature caret values for a glyph, if any.
    pub fn ligature_carets(&self, glyph: GlyphId) -> Option<&[CaretValue]> {
        let list = self.lig_caret_list.as_ref()?;
        let index = list.coverage.get(glyph)?;
        list.carets.get(index as usize).map(Vec::as_slice)
    }
}

/// Attachment point indices per covered glyph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttachList {
    pub coverage: CoverageTable,
    /// Contour point indices, indexed by coverage index.
    pub points: Vec<Vec<u16>>,
}

impl FontRead for AttachList {
    fn read(data: FontData) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        let coverage_offset: Offset16 = cursor.read()?;
        let glyph_count: u16 = cursor.read()?;
        let point_offsets: Vec<Offset16> = cursor.read_array(glyph_count as usize)?;
        let mut points = Vec::with_capacity(point_offsets.len());
        for offset in point_offsets {
            let point_data = data
                .split_off(offset.non_null().ok_or(ReadError::NullOffset)?)
                .ok_or(ReadError::OutOfBounds)?;
            let mut point_cursor = point_data.cursor();
            let count: u16 = point_cursor.read()?;
            points.push(point_cursor.read_array(count as usize)?);
        }
        Ok(AttachList {
            coverage: data.resolve(coverage_offset)?,
            points,
        })
    }
}

/// A single ligature caret position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaretValue {
    /// Format 1: an x (or y, vertical) coordinate in design units.
    Coordinate(i16),
    /// Format 2: a contour point index.
    ContourPoint(u16),
    /// Format 3: a coordinate plus a device table offset (not evaluated).
    DeviceAdjusted { coordinate: i16, device: Offset16 },
}

impl FontRead for CaretValue {
    fn read(data: FontData) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        let format: u16 = cursor.read()?;
        match format {
            1 => Ok(CaretValue::Coordinate(cursor.read()?)),
            2 => Ok(CaretValue::ContourPoint(cursor.read()?)),
            3 => Ok(CaretValue::DeviceAdjusted {
                coordinate: cursor.read()?,
                device: cursor.read()?,
            }),
            other => Err(ReadError::InvalidFormat(other.into())),
        }
    }
}

/// Caret positions per covered ligature glyph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LigCaretList {
    pub coverage: CoverageTable,
    /// Caret values, indexed by coverage index.
    pub carets: Vec<Vec<CaretValue>>,
}

impl FontRead for LigCaretList {
    fn read(data: FontData) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        let coverage_offset: Offset16 = cursor.read()?;
        let lig_glyph_count: u16 = cursor.read()?;
        let lig_glyph_offsets: Vec<Offset16> = cursor.read_array(lig_glyph_count as usize)?;
        let mut carets = Vec::with_capacity(lig_glyph_offsets.len());
        for offset in lig_glyph_offsets {
            let glyph_data = data
                .split_off(offset.non_null().ok_or(ReadError::NullOffset)?)
                .ok_or(ReadError::OutOfBounds)?;
            let mut glyph_cursor = glyph_data.cursor();
            let caret_count: u16 = glyph_cursor.read()?;
            let caret_offsets: Vec<Offset16> = glyph_cursor.read_array(caret_count as usize)?;
            let mut values = Vec::with_capacity(caret_offsets.len());
            for caret_offset in caret_offsets {
                values.push(glyph_data.resolve(caret_offset)?);
            }
            carets.push(values);
        }
        Ok(LigCaretList {
            coverage: data.resolve(coverage_offset)?,
            carets,
        })
    }
}

/// Mark glyph sets, referenced by lookups via `markFilteringSet`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkGlyphSets {
    pub coverages: Vec<CoverageTable>,
}

impl FontRead for MarkGlyphSets {
    fn read(data: FontData) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        let format: u16 = cursor.read()?;
        if format != 1 {
            return Err(ReadError::InvalidFormat(format.into()));
        }
        let count: u16 = cursor.read()?;
        let offsets: Vec<Offset32> = cursor.read_array(count as usize)?;
        let mut coverages = Vec::with_capacity(offsets.len());
        for offset in offsets {
            coverages.push(data.resolve(offset)?);
        }
        Ok(MarkGlyphSets { coverages })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use layout_test_data::gdef as test_data;

    fn gid(raw: u16) -> GlyphId {
        GlyphId::new(raw)
    }

    #[test]
    fn glyph_classes() {
        let gdef = Gdef::read(FontData::new(test_data::SIMPLE)).unwrap();
        assert_eq!(gdef.glyph_class(gid(100)), GlyphClassKind::Base);
        assert_eq!(gdef.glyph_class(gid(200)), GlyphClassKind::Mark);
        assert_eq!(gdef.glyph_class(gid(999)), GlyphClassKind::Zero);
    }

    #[test]
    fn mark_attach_classes() {
        let gdef = Gdef::read(FontData::new(test_data::SIMPLE)).unwrap();
        assert_eq!(gdef.mark_attach_class(gid(200)), 1);
        assert_eq!(gdef.mark_attach_class(gid(100)), 0);
    }

    #[test]
    fn ligature_carets() {
        let gdef = Gdef::read(FontData::new(test_data::SIMPLE)).unwrap();
        let carets = gdef.ligature_carets(gid(300)).unwrap();
        assert_eq!(carets, &[CaretValue::Coordinate(250)]);
        assert!(gdef.ligature_carets(gid(100)).is_none());
    }

    #[test]
    fn missing_subtables_default_cleanly() {
        let gdef = Gdef::default();
        assert_eq!(gdef.glyph_class(gid(1)), GlyphClassKind::Zero);
        assert_eq!(gdef.mark_attach_class(gid(1)), 0);
        assert!(!gdef.mark_glyph_set_covers(0, gid(1)));
    }

    #[test]
    fn idempotent_load() {
        let data = FontData::new(test_data::SIMPLE);
        assert_eq!(Gdef::read(data).unwrap(), Gdef::read(data).unwrap());
    }
}
