//! The [MATH](https://learn.microsoft.com/typography/opentype/spec/math)
//! table: layout constants, per-glyph info and growable-glyph variants
//! for mathematical typesetting.

use layout_types::{GlyphId, Offset16, ReadScalar};

use super::layout::CoverageTable;
use crate::font_data::FontData;
use crate::read::{FontRead, ReadError};

/// A design-unit value with an optional device table offset.
///
/// The device offset is retained but not evaluated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MathValueRecord {
    pub value: i16,
    pub device: Offset16,
}

impl ReadScalar for MathValueRecord {
    const RAW_BYTE_LEN: usize = 4;

    fn read(bytes: &[u8]) -> Option<Self> {
        Some(MathValueRecord {
            value: i16::read(bytes)?,
            device: Offset16::read(bytes.get(2..)?)?,
        })
    }
}

/// The math table, version 1.0.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Math {
    pub constants: Option<MathConstants>,
    pub glyph_info: Option<MathGlyphInfo>,
    pub variants: Option<MathVariants>,
}

impl FontRead for Math {
    fn read(data: FontData) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        let major: u16 = cursor.read()?;
        let minor: u16 = cursor.read()?;
        if major != 1 || minor != 0 {
            return Err(ReadError::InvalidFormat(
                ((major as i64) << 16) | minor as i64,
            ));
        }
        let constants_offset: Offset16 = cursor.read()?;
        let glyph_info_offset: Offset16 = cursor.read()?;
        let variants_offset: Offset16 = cursor.read()?;
        Ok(Math {
            constants: data.resolve_opt(constants_offset)?,
            glyph_info: data.resolve_opt(glyph_info_offset)?,
            variants: data.resolve_opt(variants_offset)?,
        })
    }
}

impl Math {
    /// Expand the per-glyph info and variants into one entry per glyph.
    ///
    /// `glyph_count` is the font's glyph count; covered glyphs at or past
    /// it are skipped.
    pub fn expand_per_glyph(&self, glyph_count: usize) -> Vec<Option<MathGlyphEntry>> {
        let mut entries: Vec<Option<MathGlyphEntry>> = vec![None; glyph_count];
        if let Some(info) = &self.glyph_info {
            if let Some(italics) = &info.italics_corrections {
                for (glyph, value) in italics.coverage.iter().zip(&italics.values) {
                    if let Some(entry) = entry_at(&mut entries, glyph) {
                        entry.italic_correction = Some(*value);
                    }
                }
            }
            if let Some(top_accent) = &info.top_accent_attachments {
                for (glyph, value) in top_accent.coverage.iter().zip(&top_accent.values) {
                    if let Some(entry) = entry_at(&mut entries, glyph) {
                        entry.top_accent_attachment = Some(*value);
                    }
                }
            }
            if let Some(coverage) = &info.extended_shape_coverage {
                for glyph in coverage.iter() {
                    if let Some(entry) = entry_at(&mut entries, glyph) {
                        entry.is_extended_shape = true;
                    }
                }
            }
            if let Some(kern_info) = &info.kern_info {
                for (glyph, record) in kern_info.coverage.iter().zip(&kern_info.records) {
                    if let Some(entry) = entry_at(&mut entries, glyph) {
                        entry.kerns = Some(record.clone());
                    }
                }
            }
        }
        if let Some(variants) = &self.variants {
            if let Some(coverage) = &variants.vert_coverage {
                for (glyph, construction) in coverage.iter().zip(&variants.vert_constructions) {
                    if let Some(entry) = entry_at(&mut entries, glyph) {
                        entry.vert_construction = Some(construction.clone());
                    }
                }
            }
            if let Some(coverage) = &variants.horiz_coverage {
                for (glyph, construction) in coverage.iter().zip(&variants.horiz_constructions) {
                    if let Some(entry) = entry_at(&mut entries, glyph) {
                        entry.horiz_construction = Some(construction.clone());
                    }
                }
            }
        }
        entries
    }
}

fn entry_at(
    entries: &mut [Option<MathGlyphEntry>],
    glyph: GlyphId,
) -> Option<&mut MathGlyphEntry> {
    entries
        .get_mut(glyph.to_u16() as usize)
        .map(|slot| slot.get_or_insert_with(MathGlyphEntry::default))
}

/// All math info attached to a single glyph after expansion.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MathGlyphEntry {
    pub italic_correction: Option<MathValueRecord>,
    pub top_accent_attachment: Option<MathValueRecord>,
    pub is_extended_shape: bool,
    pub kerns: Option<MathKernInfoRecord>,
    pub vert_construction: Option<MathGlyphConstruction>,
    pub horiz_construction: Option<MathGlyphConstruction>,
}

/// The MathConstants table, in file order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MathConstants {
    pub script_percent_scale_down: i16,
    pub script_script_percent_scale_down: i16,
    pub delimited_sub_formula_min_height: u16,
    pub display_operator_min_height: u16,
    pub math_leading: MathValueRecord,
    pub axis_height: MathValueRecord,
    pub accent_base_height: MathValueRecord,
    pub flattened_accent_base_height: MathValueRecord,
    pub subscript_shift_down: MathValueRecord,
    pub subscript_top_max: MathValueRecord,
    pub subscript_baseline_drop_min: MathValueRecord,
    pub superscript_shift_up: MathValueRecord,
    pub superscript_shift_up_cramped: MathValueRecord,
    pub superscript_bottom_min: MathValueRecord,
    pub superscript_baseline_drop_max: MathValueRecord,
    pub sub_superscript_gap_min: MathValueRecord,
    pub superscript_bottom_max_with_subscript: MathValueRecord,
    pub space_after_script: MathValueRecord,
    pub upper_limit_gap_min: MathValueRecord,
    pub upper_limit_baseline_rise_min: MathValueRecord,
    pub lower_limit_gap_min: MathValueRecord,
    pub lower_limit_baseline_drop_min: MathValueRecord,
    pub stack_top_shift_up: MathValueRecord,
    pub stack_top_display_style_shift_up: MathValueRecord,
    pub stack_bottom_shift_down: MathValueRecord,
    pub stack_bottom_display_style_shift_down: MathValueRecord,
    pub stack_gap_min: MathValueRecord,
    pub stack_display_style_gap_min: MathValueRecord,
    pub stretch_stack_top_shift_up: MathValueRecord,
    pub stretch_stack_bottom_shift_down: MathValueRecord,
    pub stretch_stack_gap_above_min: MathValueRecord,
    pub stretch_stack_gap_below_min: MathValueRecord,
    pub fraction_numerator_shift_up: MathValueRecord,
    pub fraction_numerator_display_style_shift_up: MathValueRecord,
    pub fraction_denominator_shift_down: MathValueRecord,
    pub fraction_denominator_display_style_shift_down: MathValueRecord,
    pub fraction_numerator_gap_min: MathValueRecord,
    pub fraction_num_display_style_gap_min: MathValueRecord,
    pub fraction_rule_thickness: MathValueRecord,
    pub fraction_denominator_gap_min: MathValueRecord,
    pub fraction_denom_display_style_gap_min: MathValueRecord,
    pub skewed_fraction_horizontal_gap: MathValueRecord,
    pub skewed_fraction_vertical_gap: MathValueRecord,
    pub overbar_vertical_gap: MathValueRecord,
    pub overbar_rule_thickness: MathValueRecord,
    pub overbar_extra_ascender: MathValueRecord,
    pub underbar_vertical_gap: MathValueRecord,
    pub underbar_rule_thickness: MathValueRecord,
    pub underbar_extra_descender: MathValueRecord,
    pub radical_vertical_gap: MathValueRecord,
    pub radical_display_style_vertical_gap: MathValueRecord,
    pub radical_rule_thickness: MathValueRecord,
    pub radical_extra_ascender: MathValueRecord,
    pub radical_kern_before_degree: MathValueRecord,
    pub radical_kern_after_degree: MathValueRecord,
    pub radical_degree_bottom_raise_percent: i16,
}

impl FontRead for MathConstants {
    fn read(data: FontData) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        Ok(MathConstants {
            script_percent_scale_down: cursor.read()?,
            script_script_percent_scale_down: cursor.read()?,
            delimited_sub_formula_min_height: cursor.read()?,
            display_operator_min_height: cursor.read()?,
            math_leading: cursor.read()?,
            axis_height: cursor.read()?,
            accent_base_height: cursor.read()?,
            flattened_accent_base_height: cursor.read()?,
            subscript_shift_down: cursor.read()?,
            subscript_top_max: cursor.read()?,
            subscript_baseline_drop_min: cursor.read()?,
            superscript_shift_up: cursor.read()?,
            superscript_shift_up_cramped: cursor.read()?,
            superscript_bottom_min: cursor.read()?,
            superscript_baseline_drop_max: cursor.read()?,
            sub_superscript_gap_min: cursor.read()?,
            superscript_bottom_max_with_subscript: cursor.read()?,
            space_after_script: cursor.read()?,
            upper_limit_gap_min: cursor.read()?,
            upper_limit_baseline_rise_min: cursor.read()?,
            lower_limit_gap_min: cursor.read()?,
            lower_limit_baseline_drop_min: cursor.read()?,
            stack_top_shift_up: cursor.read()?,
            stack_top_display_style_shift_up: cursor.read()?,
            stack_bottom_shift_down: cursor.read()?,
            stack_bottom_display_style_shift_down: cursor.read()?,
            stack_gap_min: cursor.read()?,
            stack_display_style_gap_min: cursor.read()?,
            stretch_stack_top_shift_up: cursor.read()?,
            stretch_stack_bottom_shift_down: cursor.read()?,
            stretch_stack_gap_above_min: cursor.read()?,
            stretch_stack_gap_below_min: cursor.read()?,
            fraction_numerator_shift_up: cursor.read()?,
            fraction_numerator_display_style_shift_up: cursor.read()?,
            fraction_denominator_shift_down: cursor.read()?,
            fraction_denominator_display_style_shift_down: cursor.read()?,
            fraction_numerator_gap_min: cursor.read()?,
            fraction_num_display_style_gap_min: cursor.read()?,
            fraction_rule_thickness: cursor.read()?,
            fraction_denominator_gap_min: cursor.read()?,
            fraction_denom_display_style_gap_min: cursor.read()?,
            skewed_fraction_horizontal_gap: cursor.read()?,
            skewed_fraction_vertical_gap: cursor.read()?,
            overbar_vertical_gap: cursor.read()?,
            overbar_rule_thickness: cursor.read()?,
            overbar_extra_ascender: cursor.read()?,
            underbar_vertical_gap: cursor.read()?,
            underbar_rule_thickness: cursor.read()?,
            underbar_extra_descender: cursor.read()?,
            radical_vertical_gap: cursor.read()?,
            radical_display_style_vertical_gap: cursor.read()?,
            radical_rule_thickness: cursor.read()?,
            radical_extra_ascender: cursor.read()?,
            radical_kern_before_degree: cursor.read()?,
            radical_kern_after_degree: cursor.read()?,
            radical_degree_bottom_raise_percent: cursor.read()?,
        })
    }
}

/// Coverage-parallel math values (italics corrections, top accents).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MathValueList {
    pub coverage: CoverageTable,
    pub values: Vec<MathValueRecord>,
}

impl FontRead for MathValueList {
    fn read(data: FontData) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        let coverage_offset: Offset16 = cursor.read()?;
        let count: u16 = cursor.read()?;
        let values = cursor.read_array(count as usize)?;
        Ok(MathValueList {
            coverage: data.resolve(coverage_offset)?,
            values,
        })
    }
}

/// Per-glyph positioning info.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MathGlyphInfo {
    pub italics_corrections: Option<MathValueList>,
    pub top_accent_attachments: Option<MathValueList>,
    pub extended_shape_coverage: Option<CoverageTable>,
    pub kern_info: Option<MathKernInfo>,
}

impl FontRead for MathGlyphInfo {
    fn read(data: FontData) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        let italics_offset: Offset16 = cursor.read()?;
        let top_accent_offset: Offset16 = cursor.read()?;
        let extended_shape_offset: Offset16 = cursor.read()?;
        let kern_info_offset: Offset16 = cursor.read()?;
        Ok(MathGlyphInfo {
            italics_corrections: data.resolve_opt(italics_offset)?,
            top_accent_attachments: data.resolve_opt(top_accent_offset)?,
            extended_shape_coverage: data.resolve_opt(extended_shape_offset)?,
            kern_info: data.resolve_opt(kern_info_offset)?,
        })
    }
}

/// Height-dependent kerning info for covered glyphs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MathKernInfo {
    pub coverage: CoverageTable,
    pub records: Vec<MathKernInfoRecord>,
}

impl FontRead for MathKernInfo {
    fn read(data: FontData) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        let coverage_offset: Offset16 = cursor.read()?;
        let count: u16 = cursor.read()?;
        // four corner offsets per record
        let corner_offsets: Vec<Offset16> = cursor.read_array(count as usize * 4)?;
        let mut records = Vec::with_capacity(count as usize);
        for corners in corner_offsets.chunks_exact(4) {
            records.push(MathKernInfoRecord {
                top_right: data.resolve_opt(corners[0])?,
                top_left: data.resolve_opt(corners[1])?,
                bottom_right: data.resolve_opt(corners[2])?,
                bottom_left: data.resolve_opt(corners[3])?,
            });
        }
        Ok(MathKernInfo {
            coverage: data.resolve(coverage_offset)?,
            records,
        })
    }
}

/// The four corner kern tables of one glyph, any of which may be absent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MathKernInfoRecord {
    pub top_right: Option<MathKern>,
    pub top_left: Option<MathKern>,
    pub bottom_right: Option<MathKern>,
    pub bottom_left: Option<MathKern>,
}

/// A height-keyed kern value table for one glyph corner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MathKern {
    /// Heights at which the kern value changes, sorted ascending.
    pub correction_heights: Vec<MathValueRecord>,
    /// One more value than heights; `kern_values[i]` applies below
    /// `correction_heights[i]`, the last value above all heights.
    pub kern_values: Vec<MathValueRecord>,
}

impl FontRead for MathKern {
    fn read(data: FontData) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        let height_count: u16 = cursor.read()?;
        Ok(MathKern {
            correction_heights: cursor.read_array(height_count as usize)?,
            kern_values: cursor.read_array(height_count as usize + 1)?,
        })
    }
}

impl MathKern {
    /// The kern value applying at the given correction height.
    pub fn value_for_height(&self, height: i16) -> Option<MathValueRecord> {
        let index = self
            .correction_heights
            .iter()
            .position(|record| height <= record.value)
            .unwrap_or(self.correction_heights.len());
        self.kern_values.get(index).copied()
    }
}

/// Growable-glyph variant data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MathVariants {
    /// Minimum connector overlap during glyph assembly, in design units.
    pub min_connector_overlap: u16,
    pub vert_coverage: Option<CoverageTable>,
    pub horiz_coverage: Option<CoverageTable>,
    /// In vertical coverage order.
    pub vert_constructions: Vec<MathGlyphConstruction>,
    /// In horizontal coverage order.
    pub horiz_constructions: Vec<MathGlyphConstruction>,
}

impl FontRead for MathVariants {
    fn read(data: FontData) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        let min_connector_overlap: u16 = cursor.read()?;
        let vert_coverage_offset: Offset16 = cursor.read()?;
        let horiz_coverage_offset: Offset16 = cursor.read()?;
        let vert_count: u16 = cursor.read()?;
        let horiz_count: u16 = cursor.read()?;
        let vert_offsets: Vec<Offset16> = cursor.read_array(vert_count as usize)?;
        let horiz_offsets: Vec<Offset16> = cursor.read_array(horiz_count as usize)?;
        let mut vert_constructions = Vec::with_capacity(vert_offsets.len());
        for offset in vert_offsets {
            vert_constructions.push(data.resolve(offset)?);
        }
        let mut horiz_constructions = Vec::with_capacity(horiz_offsets.len());
        for offset in horiz_offsets {
            horiz_constructions.push(data.resolve(offset)?);
        }
        Ok(MathVariants {
            min_connector_overlap,
            vert_coverage: data.resolve_opt(vert_coverage_offset)?,
            horiz_coverage: data.resolve_opt(horiz_coverage_offset)?,
            vert_constructions,
            horiz_constructions,
        })
    }
}

/// Ready-made variants and an optional assembly recipe for one glyph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MathGlyphConstruction {
    pub assembly: Option<GlyphAssembly>,
    /// Growing variants, smallest first.
    pub variants: Vec<MathGlyphVariantRecord>,
}

impl FontRead for MathGlyphConstruction {
    fn read(data: FontData) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        let assembly_offset: Offset16 = cursor.read()?;
        let variant_count: u16 = cursor.read()?;
        let variants = cursor.read_array(variant_count as usize)?;
        Ok(MathGlyphConstruction {
            assembly: data.resolve_opt(assembly_offset)?,
            variants,
        })
    }
}

/// A single ready-made glyph variant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MathGlyphVariantRecord {
    pub variant_glyph: GlyphId,
    /// Advance in the direction of extension, in design units.
    pub advance_measurement: u16,
}

impl ReadScalar for MathGlyphVariantRecord {
    const RAW_BYTE_LEN: usize = 4;

    fn read(bytes: &[u8]) -> Option<Self> {
        Some(MathGlyphVariantRecord {
            variant_glyph: GlyphId::read(bytes)?,
            advance_measurement: u16::read(bytes.get(2..)?)?,
        })
    }
}

/// How to assemble an arbitrarily large shape from parts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphAssembly {
    pub italics_correction: MathValueRecord,
    /// Left to right, or bottom to top for vertical assemblies.
    pub parts: Vec<GlyphPartRecord>,
}

impl FontRead for GlyphAssembly {
    fn read(data: FontData) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        let italics_correction: MathValueRecord = cursor.read()?;
        let part_count: u16 = cursor.read()?;
        Ok(GlyphAssembly {
            italics_correction,
            parts: cursor.read_array(part_count as usize)?,
        })
    }
}

/// One building block of a glyph assembly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GlyphPartRecord {
    pub glyph: GlyphId,
    pub start_connector_length: u16,
    pub end_connector_length: u16,
    pub full_advance: u16,
    pub part_flags: u16,
}

impl GlyphPartRecord {
    const EXTENDER_FLAG: u16 = 0x0001;

    /// Whether this part can be skipped or repeated.
    pub fn is_extender(self) -> bool {
        self.part_flags & Self::EXTENDER_FLAG != 0
    }
}

impl ReadScalar for GlyphPartRecord {
    const RAW_BYTE_LEN: usize = 10;

    fn read(bytes: &[u8]) -> Option<Self> {
        Some(GlyphPartRecord {
            glyph: GlyphId::read(bytes)?,
            start_connector_length: u16::read(bytes.get(2..)?)?,
            end_connector_length: u16::read(bytes.get(4..)?)?,
            full_advance: u16::read(bytes.get(6..)?)?,
            part_flags: u16::read(bytes.get(8..)?)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push_u16s(bytes: &mut Vec<u8>, words: &[u16]) {
        for word in words {
            bytes.extend_from_slice(&word.to_be_bytes());
        }
    }

    fn sample_constants() -> Vec<u8> {
        let mut bytes = Vec::new();
        // two percent scales, two min heights
        push_u16s(&mut bytes, &[80, 70, 1500, 1450]);
        // 51 math value records, values 100..=150
        for value in 100u16..=150 {
            push_u16s(&mut bytes, &[value, 0]);
        }
        // radicalDegreeBottomRaisePercent
        push_u16s(&mut bytes, &[60]);
        bytes
    }

    #[test]
    fn constants_in_file_order() {
        let bytes = sample_constants();
        let constants = MathConstants::read(FontData::new(&bytes)).unwrap();
        assert_eq!(constants.script_percent_scale_down, 80);
        assert_eq!(constants.script_script_percent_scale_down, 70);
        assert_eq!(constants.delimited_sub_formula_min_height, 1500);
        assert_eq!(constants.display_operator_min_height, 1450);
        assert_eq!(constants.math_leading.value, 100);
        assert_eq!(constants.axis_height.value, 101);
        assert_eq!(constants.radical_kern_before_degree.value, 149);
        assert_eq!(constants.radical_kern_after_degree.value, 150);
        assert_eq!(constants.radical_degree_bottom_raise_percent, 60);
    }

    fn sample_variants() -> Vec<u8> {
        let mut bytes = Vec::new();
        // minConnectorOverlap 54, vert coverage at 14, no horizontal,
        // one vertical construction at 20
        push_u16s(&mut bytes, &[54, 14, 0, 1, 0, 20]);
        push_u16s(&mut bytes, &[0]); // padding to offset 14
        // coverage format 1: glyph 20
        push_u16s(&mut bytes, &[1, 1, 20]);
        // construction at 20: assembly at 12, variants (21, 1000) (22, 2000)
        push_u16s(&mut bytes, &[12, 2, 21, 1000, 22, 2000]);
        // assembly: italics (5, 0), one extender part
        push_u16s(&mut bytes, &[5, 0, 1, 23, 100, 100, 1200, 0x0001]);
        bytes
    }

    #[test]
    fn variants_and_assembly() {
        let bytes = sample_variants();
        let variants = MathVariants::read(FontData::new(&bytes)).unwrap();
        assert_eq!(variants.min_connector_overlap, 54);
        assert!(variants.horiz_coverage.is_none());
        assert_eq!(variants.vert_constructions.len(), 1);
        let construction = &variants.vert_constructions[0];
        assert_eq!(construction.variants.len(), 2);
        assert_eq!(construction.variants[0].variant_glyph, GlyphId::new(21));
        assert_eq!(construction.variants[1].advance_measurement, 2000);
        let assembly = construction.assembly.as_ref().unwrap();
        assert_eq!(assembly.italics_correction.value, 5);
        assert_eq!(assembly.parts.len(), 1);
        assert!(assembly.parts[0].is_extender());
        assert_eq!(assembly.parts[0].full_advance, 1200);
    }

    #[test]
    fn per_glyph_expansion_respects_glyph_count() {
        let variant_bytes = sample_variants();
        let math = Math {
            constants: None,
            glyph_info: None,
            variants: Some(MathVariants::read(FontData::new(&variant_bytes)).unwrap()),
        };
        let expanded = math.expand_per_glyph(32);
        assert!(expanded[19].is_none());
        let entry = expanded[20].as_ref().unwrap();
        assert!(entry.vert_construction.is_some());
        assert!(entry.horiz_construction.is_none());
        assert!(!entry.is_extended_shape);

        // covered glyph past the glyph count is dropped
        assert!(math.expand_per_glyph(20).iter().all(Option::is_none));
    }

    #[test]
    fn kern_value_lookup_by_height() {
        let kern = MathKern {
            correction_heights: vec![
                MathValueRecord { value: 100, device: Offset16::new(0) },
                MathValueRecord { value: 400, device: Offset16::new(0) },
            ],
            kern_values: vec![
                MathValueRecord { value: -10, device: Offset16::new(0) },
                MathValueRecord { value: -20, device: Offset16::new(0) },
                MathValueRecord { value: -30, device: Offset16::new(0) },
            ],
        };
        assert_eq!(kern.value_for_height(50).unwrap().value, -10);
        assert_eq!(kern.value_for_height(100).unwrap().value, -10);
        assert_eq!(kern.value_for_height(250).unwrap().value, -20);
        assert_eq!(kern.value_for_height(900).unwrap().value, -30);
    }
}
