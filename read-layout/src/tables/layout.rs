//! Common layout tables: Coverage, ClassDef, the script/feature/lookup
//! lists, and the (chained) sequence context formats shared by GSUB and
//! GPOS.
//!
//! See <https://learn.microsoft.com/typography/opentype/spec/chapter2>

use std::cmp::Ordering;

use layout_types::{GlyphId, Offset16, Offset32, ReadScalar, Tag};

use crate::font_data::FontData;
use crate::read::{FontRead, ReadError};

/// Maps a glyph id to a dense coverage index.
///
/// Format 1 stores a sorted glyph array; format 2 stores sorted,
/// non-overlapping ranges. Lookups on out-of-order data are tolerated and
/// report "not covered".
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CoverageTable {
    Format1(Vec<GlyphId>),
    Format2(Vec<RangeRecord>),
}

/// A glyph range plus the coverage index of its first glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RangeRecord {
    pub start: GlyphId,
    pub end: GlyphId,
    pub start_coverage_index: u16,
}

impl FontRead for CoverageTable {
    fn read(data: FontData) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        let format: u16 = cursor.read()?;
        match format {
            1 => {
                let count: u16 = cursor.read()?;
                Ok(CoverageTable::Format1(cursor.read_array(count as usize)?))
            }
            2 => {
                let count: u16 = cursor.read()?;
                let mut ranges = Vec::with_capacity(count.min(1024) as usize);
                for _ in 0..count {
                    ranges.push(RangeRecord {
                        start: cursor.read()?,
                        end: cursor.read()?,
                        start_coverage_index: cursor.read()?,
                    });
                }
                Ok(CoverageTable::Format2(ranges))
            }
            other => Err(ReadError::InvalidFormat(other.into())),
        }
    }
}

impl CoverageTable {
    /// The coverage index of `glyph`, or `None` if it is not covered.
    pub fn get(&self, glyph: GlyphId) -> Option<u16> {
        match self {
            CoverageTable::Format1(glyphs) => {
                glyphs.binary_search(&glyph).ok().map(|ix| ix as u16)
            }
            CoverageTable::Format2(ranges) => {
                let ix = match ranges.binary_search_by(|rec| rec.end.cmp(&glyph)) {
                    Ok(ix) => ix,
                    Err(ix) => ix,
                };
                let range = ranges.get(ix)?;
                if glyph < range.start {
                    return None;
                }
                Some(
                    range
                        .start_coverage_index
                        .wrapping_add(glyph.to_u16() - range.start.to_u16()),
                )
            }
        }
    }

    /// Iterate the covered glyphs, in coverage order.
    pub fn iter(&self) -> CoverageIter<'_> {
        CoverageIter {
            coverage: self,
            pos: 0,
            offset_in_range: 0,
        }
    }
}

/// An iterator over the glyphs covered by a [`CoverageTable`].
pub struct CoverageIter<'a> {
    coverage: &'a CoverageTable,
    pos: usize,
    offset_in_range: u32,
}

impl Iterator for CoverageIter<'_> {
    type Item = GlyphId;

    fn next(&mut self) -> Option<GlyphId> {
        match self.coverage {
            CoverageTable::Format1(glyphs) => {
                let next = glyphs.get(self.pos).copied();
                self.pos += 1;
                next
            }
            CoverageTable::Format2(ranges) => loop {
                let range = ranges.get(self.pos)?;
                let gid = range.start.to_u16() as u32 + self.offset_in_range;
                if gid > range.end.to_u16() as u32 {
                    self.pos += 1;
                    self.offset_in_range = 0;
                    continue;
                }
                self.offset_in_range += 1;
                return Some(GlyphId::new(gid as u16));
            },
        }
    }
}

/// Maps a glyph id to a small integer class; uncovered glyphs belong to
/// class 0.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClassDef {
    Format1 {
        start_glyph: GlyphId,
        classes: Vec<u16>,
    },
    Format2(Vec<ClassRangeRecord>),
}

/// A glyph range sharing one class value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClassRangeRecord {
    pub start: GlyphId,
    pub end: GlyphId,
    pub class: u16,
}

impl FontRead for ClassDef {
    fn read(data: FontData) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        let format: u16 = cursor.read()?;
        match format {
            1 => {
                let start_glyph: GlyphId = cursor.read()?;
                let count: u16 = cursor.read()?;
                Ok(ClassDef::Format1 {
                    start_glyph,
                    classes: cursor.read_array(count as usize)?,
                })
            }
            2 => {
                let count: u16 = cursor.read()?;
                let mut ranges = Vec::with_capacity(count.min(1024) as usize);
                for _ in 0..count {
                    ranges.push(ClassRangeRecord {
                        start: cursor.read()?,
                        end: cursor.read()?,
                        class: cursor.read()?,
                    });
                }
                Ok(ClassDef::Format2(ranges))
            }
            other => Err(ReadError::InvalidFormat(other.into())),
        }
    }
}

impl ClassDef {
    /// The class of `glyph`.
    pub fn get(&self, glyph: GlyphId) -> u16 {
        let gid = glyph.to_u16();
        match self {
            ClassDef::Format1 {
                start_glyph,
                classes,
            } => {
                let start = start_glyph.to_u16();
                if gid >= start && ((gid - start) as usize) < classes.len() {
                    classes[(gid - start) as usize]
                } else {
                    0
                }
            }
            ClassDef::Format2(ranges) => ranges
                .binary_search_by(|rec| {
                    if rec.end.to_u16() < gid {
                        Ordering::Less
                    } else if rec.start.to_u16() > gid {
                        Ordering::Greater
                    } else {
                        Ordering::Equal
                    }
                })
                .map(|ix| ranges[ix].class)
                .unwrap_or(0),
        }
    }
}

/// A language system: the feature indices active for one script/language
/// pair, plus an optional required feature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LangSys {
    required_feature_index: u16,
    pub feature_indices: Vec<u16>,
}

/// Sentinel for "no required feature".
const NO_REQUIRED_FEATURE: u16 = 0xFFFF;

impl FontRead for LangSys {
    fn read(data: FontData) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        // lookupOrderOffset, reserved
        cursor.advance_by(2);
        let required_feature_index: u16 = cursor.read()?;
        let count: u16 = cursor.read()?;
        Ok(LangSys {
            required_feature_index,
            feature_indices: cursor.read_array(count as usize)?,
        })
    }
}

impl LangSys {
    /// The required feature index, if any.
    pub fn required_feature(&self) -> Option<u16> {
        (self.required_feature_index != NO_REQUIRED_FEATURE).then_some(self.required_feature_index)
    }
}

/// A language system tagged with its language tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LangSysRecord {
    pub tag: Tag,
    pub lang_sys: LangSys,
}

/// One script: a default language system plus named language systems.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Script {
    pub default_lang_sys: Option<LangSys>,
    pub lang_sys_records: Vec<LangSysRecord>,
}

impl FontRead for Script {
    fn read(data: FontData) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        let default_offset: Offset16 = cursor.read()?;
        let default_lang_sys = data.resolve_opt(default_offset)?;
        let count: u16 = cursor.read()?;
        let mut lang_sys_records = Vec::with_capacity(count.min(1024) as usize);
        for _ in 0..count {
            let tag: Tag = cursor.read()?;
            let offset: Offset16 = cursor.read()?;
            lang_sys_records.push(LangSysRecord {
                tag,
                lang_sys: data.resolve(offset)?,
            });
        }
        Ok(Script {
            default_lang_sys,
            lang_sys_records,
        })
    }
}

impl Script {
    /// The language system for `lang`, falling back to the default.
    pub fn lang_sys(&self, lang: Option<Tag>) -> Option<&LangSys> {
        lang.and_then(|tag| {
            self.lang_sys_records
                .iter()
                .find(|rec| rec.tag == tag)
                .map(|rec| &rec.lang_sys)
        })
        .or(self.default_lang_sys.as_ref())
    }
}

/// A script tagged with its script tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptRecord {
    pub tag: Tag,
    pub script: Script,
}

/// The ScriptList: scripts in tag order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptList {
    pub records: Vec<ScriptRecord>,
}

impl FontRead for ScriptList {
    fn read(data: FontData) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        let count: u16 = cursor.read()?;
        let mut records = Vec::with_capacity(count.min(1024) as usize);
        for _ in 0..count {
            let tag: Tag = cursor.read()?;
            let offset: Offset16 = cursor.read()?;
            records.push(ScriptRecord {
                tag,
                script: data.resolve(offset)?,
            });
        }
        Ok(ScriptList { records })
    }
}

impl ScriptList {
    /// The script with the given tag.
    pub fn get(&self, tag: Tag) -> Option<&Script> {
        self.records
            .iter()
            .find(|rec| rec.tag == tag)
            .map(|rec| &rec.script)
    }
}

/// One feature: a set of lookup list indices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feature {
    /// Offset to the feature params table; retained but not interpreted.
    pub feature_params: Offset16,
    pub lookup_indices: Vec<u16>,
}

impl FontRead for Feature {
    fn read(data: FontData) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        let feature_params: Offset16 = cursor.read()?;
        let count: u16 = cursor.read()?;
        Ok(Feature {
            feature_params,
            lookup_indices: cursor.read_array(count as usize)?,
        })
    }
}

/// A feature tagged with its feature tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeatureRecord {
    pub tag: Tag,
    pub feature: Feature,
}

/// The FeatureList: features referenced by index from language systems.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeatureList {
    pub records: Vec<FeatureRecord>,
}

impl FontRead for FeatureList {
    fn read(data: FontData) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        let count: u16 = cursor.read()?;
        let mut records = Vec::with_capacity(count.min(1024) as usize);
        for _ in 0..count {
            let tag: Tag = cursor.read()?;
            let offset: Offset16 = cursor.read()?;
            records.push(FeatureRecord {
                tag,
                feature: data.resolve(offset)?,
            });
        }
        Ok(FeatureList { records })
    }
}

/// The flags field of a lookup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LookupFlag(u16);

impl LookupFlag {
    pub const RIGHT_TO_LEFT: u16 = 0x0001;
    pub const IGNORE_BASE_GLYPHS: u16 = 0x0002;
    pub const IGNORE_LIGATURES: u16 = 0x0004;
    pub const IGNORE_MARKS: u16 = 0x0008;
    pub const USE_MARK_FILTERING_SET: u16 = 0x0010;

    pub fn new(bits: u16) -> Self {
        LookupFlag(bits)
    }

    pub fn to_bits(self) -> u16 {
        self.0
    }

    pub fn right_to_left(self) -> bool {
        self.0 & Self::RIGHT_TO_LEFT != 0
    }

    pub fn ignore_base_glyphs(self) -> bool {
        self.0 & Self::IGNORE_BASE_GLYPHS != 0
    }

    pub fn ignore_ligatures(self) -> bool {
        self.0 & Self::IGNORE_LIGATURES != 0
    }

    pub fn ignore_marks(self) -> bool {
        self.0 & Self::IGNORE_MARKS != 0
    }

    /// If set, the lookup carries a mark filtering set field.
    pub fn use_mark_filtering_set(self) -> bool {
        self.0 & Self::USE_MARK_FILTERING_SET != 0
    }

    /// The mark attachment type, from the high byte.
    pub fn mark_attachment_type(self) -> u8 {
        (self.0 >> 8) as u8
    }
}

impl ReadScalar for LookupFlag {
    const RAW_BYTE_LEN: usize = u16::RAW_BYTE_LEN;

    fn read(bytes: &[u8]) -> Option<Self> {
        u16::read(bytes).map(LookupFlag)
    }
}

/// A lookup as stored on disk, before the type-specific subtables are
/// interpreted.
pub(crate) struct RawLookup<'a> {
    pub lookup_type: u16,
    pub flag: LookupFlag,
    pub mark_filtering_set: Option<u16>,
    pub subtables: Vec<FontData<'a>>,
}

/// The shared GSUB/GPOS header: script list, feature list, lookup list.
pub(crate) struct LayoutHeader<'a> {
    pub script_list: ScriptList,
    pub feature_list: FeatureList,
    pub lookups: Vec<RawLookup<'a>>,
}

/// Read the header shared by GSUB and GPOS (versions 1.0 and 1.1).
pub(crate) fn read_layout_header<'a>(
    data: FontData<'a>,
    table: &'static str,
) -> Result<LayoutHeader<'a>, ReadError> {
    let mut cursor = data.cursor();
    let major: u16 = cursor.read()?;
    let minor: u16 = cursor.read()?;
    if major != 1 || minor > 1 {
        return Err(ReadError::InvalidFormat(
            ((major as i64) << 16) | minor as i64,
        ));
    }
    let script_offset: Offset16 = cursor.read()?;
    let feature_offset: Offset16 = cursor.read()?;
    let lookup_offset: Offset16 = cursor.read()?;
    if minor == 1 {
        let feature_variations: Offset32 = cursor.read()?;
        if !feature_variations.is_null() {
            log::warn!("{table}: FeatureVariations is not supported; ignoring");
        }
    }
    let script_list = data.resolve(script_offset)?;
    let feature_list = data.resolve(feature_offset)?;

    let lookup_list = data
        .split_off(lookup_offset.non_null().ok_or(ReadError::NullOffset)?)
        .ok_or(ReadError::OutOfBounds)?;
    let mut list_cursor = lookup_list.cursor();
    let lookup_count: u16 = list_cursor.read()?;
    let lookup_offsets: Vec<Offset16> = list_cursor.read_array(lookup_count as usize)?;

    let mut lookups = Vec::with_capacity(lookup_offsets.len());
    for offset in lookup_offsets {
        let lookup_data = lookup_list
            .split_off(offset.non_null().ok_or(ReadError::NullOffset)?)
            .ok_or(ReadError::OutOfBounds)?;
        let mut cursor = lookup_data.cursor();
        let lookup_type: u16 = cursor.read()?;
        let flag: LookupFlag = cursor.read()?;
        let subtable_count: u16 = cursor.read()?;
        let subtable_offsets: Vec<Offset16> = cursor.read_array(subtable_count as usize)?;
        let mark_filtering_set = if flag.use_mark_filtering_set() {
            Some(cursor.read()?)
        } else {
            None
        };
        let mut subtables = Vec::with_capacity(subtable_offsets.len());
        for sub_offset in subtable_offsets {
            subtables.push(
                lookup_data
                    .split_off(sub_offset.non_null().ok_or(ReadError::NullOffset)?)
                    .ok_or(ReadError::OutOfBounds)?,
            );
        }
        lookups.push(RawLookup {
            lookup_type,
            flag,
            mark_filtering_set,
            subtables,
        });
    }

    Ok(LayoutHeader {
        script_list,
        feature_list,
        lookups,
    })
}

/// Resolve the lookup indices active for one script/language/feature set.
///
/// The result is ascending and deduplicated: lookup application order is
/// determined purely by lookup list index, never by feature order.
pub fn resolve_lookups(
    scripts: &ScriptList,
    features: &FeatureList,
    script: Tag,
    lang: Option<Tag>,
    feature_filter: Option<&[Tag]>,
) -> Vec<u16> {
    let Some(lang_sys) = scripts.get(script).and_then(|s| s.lang_sys(lang)) else {
        return Vec::new();
    };
    let mut indices: Vec<u16> = Vec::new();
    let mut add_feature = |feature_index: u16| {
        if let Some(record) = features.records.get(feature_index as usize) {
            let wanted = match feature_filter {
                Some(filter) => filter.contains(&record.tag),
                None => true,
            };
            if wanted {
                indices.extend_from_slice(&record.feature.lookup_indices);
            }
        }
    };
    if let Some(required) = lang_sys.required_feature() {
        add_feature(required);
    }
    for &feature_index in &lang_sys.feature_indices {
        add_feature(feature_index);
    }
    indices.sort_unstable();
    indices.dedup();
    indices
}

/// A nested lookup invocation within a context rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SequenceLookupRecord {
    pub sequence_index: u16,
    pub lookup_index: u16,
}

fn read_lookup_records(
    cursor: &mut crate::font_data::Cursor,
    count: usize,
) -> Result<Vec<SequenceLookupRecord>, ReadError> {
    let mut records = Vec::with_capacity(count.min(1024));
    for _ in 0..count {
        records.push(SequenceLookupRecord {
            sequence_index: cursor.read()?,
            lookup_index: cursor.read()?,
        });
    }
    Ok(records)
}

/// One rule in a format 1 sequence context: exact glyphs to match after
/// the covered first glyph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SequenceRule {
    /// The input sequence, excluding the first (covered) glyph.
    pub input: Vec<GlyphId>,
    pub records: Vec<SequenceLookupRecord>,
}

impl FontRead for SequenceRule {
    fn read(data: FontData) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        let glyph_count: u16 = cursor.read()?;
        if glyph_count == 0 {
            return Err(ReadError::MalformedData("empty sequence rule"));
        }
        let record_count: u16 = cursor.read()?;
        let input = cursor.read_array(glyph_count as usize - 1)?;
        let records = read_lookup_records(&mut cursor, record_count as usize)?;
        Ok(SequenceRule { input, records })
    }
}

/// One rule in a format 2 sequence context: input classes after the
/// covered first glyph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassSequenceRule {
    /// Classes of the input sequence, excluding the first glyph.
    pub input_classes: Vec<u16>,
    pub records: Vec<SequenceLookupRecord>,
}

impl FontRead for ClassSequenceRule {
    fn read(data: FontData) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        let glyph_count: u16 = cursor.read()?;
        if glyph_count == 0 {
            return Err(ReadError::MalformedData("empty class sequence rule"));
        }
        let record_count: u16 = cursor.read()?;
        let input_classes = cursor.read_array(glyph_count as usize - 1)?;
        let records = read_lookup_records(&mut cursor, record_count as usize)?;
        Ok(ClassSequenceRule {
            input_classes,
            records,
        })
    }
}

fn read_rule_sets<T: FontRead>(
    data: FontData,
    cursor: &mut crate::font_data::Cursor,
    count: usize,
) -> Result<Vec<Option<Vec<T>>>, ReadError> {
    let mut sets = Vec::with_capacity(count.min(1024));
    for _ in 0..count {
        let set_offset: Offset16 = cursor.read()?;
        let Some(pos) = set_offset.non_null() else {
            sets.push(None);
            continue;
        };
        let set_data = data.split_off(pos).ok_or(ReadError::OutOfBounds)?;
        let mut set_cursor = set_data.cursor();
        let rule_count: u16 = set_cursor.read()?;
        let rule_offsets: Vec<Offset16> = set_cursor.read_array(rule_count as usize)?;
        let mut rules = Vec::with_capacity(rule_offsets.len());
        for rule_offset in rule_offsets {
            rules.push(set_data.resolve(rule_offset)?);
        }
        sets.push(Some(rules));
    }
    Ok(sets)
}

fn read_coverages(
    data: FontData,
    cursor: &mut crate::font_data::Cursor,
    count: usize,
) -> Result<Vec<CoverageTable>, ReadError> {
    let mut coverages = Vec::with_capacity(count.min(1024));
    for _ in 0..count {
        let offset: Offset16 = cursor.read()?;
        coverages.push(data.resolve(offset)?);
    }
    Ok(coverages)
}

/// A sequence context subtable (GSUB type 5 / GPOS type 7).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SequenceContext {
    Format1 {
        coverage: CoverageTable,
        rule_sets: Vec<Option<Vec<SequenceRule>>>,
    },
    Format2 {
        coverage: CoverageTable,
        class_def: ClassDef,
        rule_sets: Vec<Option<Vec<ClassSequenceRule>>>,
    },
    Format3 {
        coverages: Vec<CoverageTable>,
        records: Vec<SequenceLookupRecord>,
    },
}

impl FontRead for SequenceContext {
    fn read(data: FontData) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        let format: u16 = cursor.read()?;
        match format {
            1 => {
                let coverage_offset: Offset16 = cursor.read()?;
                let set_count: u16 = cursor.read()?;
                Ok(SequenceContext::Format1 {
                    coverage: data.resolve(coverage_offset)?,
                    rule_sets: read_rule_sets(data, &mut cursor, set_count as usize)?,
                })
            }
            2 => {
                let coverage_offset: Offset16 = cursor.read()?;
                let class_def_offset: Offset16 = cursor.read()?;
                let set_count: u16 = cursor.read()?;
                Ok(SequenceContext::Format2 {
                    coverage: data.resolve(coverage_offset)?,
                    class_def: data.resolve(class_def_offset)?,
                    rule_sets: read_rule_sets(data, &mut cursor, set_count as usize)?,
                })
            }
            3 => {
                let glyph_count: u16 = cursor.read()?;
                let record_count: u16 = cursor.read()?;
                let coverages = read_coverages(data, &mut cursor, glyph_count as usize)?;
                let records = read_lookup_records(&mut cursor, record_count as usize)?;
                Ok(SequenceContext::Format3 { coverages, records })
            }
            other => Err(ReadError::InvalidFormat(other.into())),
        }
    }
}

impl SequenceContext {
    /// Try to match this context at `pos` in a sequence of `len` glyphs.
    ///
    /// On a match, returns the matched input length (including the glyph at
    /// `pos`) and the nested lookup records to apply.
    pub(crate) fn match_at(
        &self,
        glyph_at: &dyn Fn(usize) -> GlyphId,
        pos: usize,
        len: usize,
    ) -> Option<(usize, &[SequenceLookupRecord])> {
        if pos >= len {
            return None;
        }
        match self {
            SequenceContext::Format1 {
                coverage,
                rule_sets,
            } => {
                let cov_ix = coverage.get(glyph_at(pos))?;
                let rules = rule_sets.get(cov_ix as usize)?.as_ref()?;
                for rule in rules {
                    let input_len = rule.input.len() + 1;
                    if pos + input_len > len {
                        continue;
                    }
                    if rule
                        .input
                        .iter()
                        .enumerate()
                        .all(|(i, glyph)| glyph_at(pos + 1 + i) == *glyph)
                    {
                        return Some((input_len, &rule.records));
                    }
                }
                None
            }
            SequenceContext::Format2 {
                coverage,
                class_def,
                rule_sets,
            } => {
                coverage.get(glyph_at(pos))?;
                let class = class_def.get(glyph_at(pos));
                let rules = rule_sets.get(class as usize)?.as_ref()?;
                for rule in rules {
                    let input_len = rule.input_classes.len() + 1;
                    if pos + input_len > len {
                        continue;
                    }
                    if rule
                        .input_classes
                        .iter()
                        .enumerate()
                        .all(|(i, class)| class_def.get(glyph_at(pos + 1 + i)) == *class)
                    {
                        return Some((input_len, &rule.records));
                    }
                }
                None
            }
            SequenceContext::Format3 { coverages, records } => {
                if coverages.is_empty() || pos + coverages.len() > len {
                    return None;
                }
                for (i, coverage) in coverages.iter().enumerate() {
                    coverage.get(glyph_at(pos + i))?;
                }
                Some((coverages.len(), records))
            }
        }
    }
}

/// One rule in a format 1 chained context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChainRule {
    /// Backtrack glyphs, nearest first.
    pub backtrack: Vec<GlyphId>,
    /// Input glyphs, excluding the first (covered) glyph.
    pub input: Vec<GlyphId>,
    pub lookahead: Vec<GlyphId>,
    pub records: Vec<SequenceLookupRecord>,
}

impl FontRead for ChainRule {
    fn read(data: FontData) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        let backtrack_count: u16 = cursor.read()?;
        let backtrack = cursor.read_array(backtrack_count as usize)?;
        let input_count: u16 = cursor.read()?;
        if input_count == 0 {
            return Err(ReadError::MalformedData("empty chain rule input"));
        }
        let input = cursor.read_array(input_count as usize - 1)?;
        let lookahead_count: u16 = cursor.read()?;
        let lookahead = cursor.read_array(lookahead_count as usize)?;
        let record_count: u16 = cursor.read()?;
        let records = read_lookup_records(&mut cursor, record_count as usize)?;
        Ok(ChainRule {
            backtrack,
            input,
            lookahead,
            records,
        })
    }
}

/// One rule in a format 2 chained context, matching by class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChainClassRule {
    pub backtrack: Vec<u16>,
    pub input: Vec<u16>,
    pub lookahead: Vec<u16>,
    pub records: Vec<SequenceLookupRecord>,
}

impl FontRead for ChainClassRule {
    fn read(data: FontData) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        let backtrack_count: u16 = cursor.read()?;
        let backtrack = cursor.read_array(backtrack_count as usize)?;
        let input_count: u16 = cursor.read()?;
        if input_count == 0 {
            return Err(ReadError::MalformedData("empty chain class rule input"));
        }
        let input = cursor.read_array(input_count as usize - 1)?;
        let lookahead_count: u16 = cursor.read()?;
        let lookahead = cursor.read_array(lookahead_count as usize)?;
        let record_count: u16 = cursor.read()?;
        let records = read_lookup_records(&mut cursor, record_count as usize)?;
        Ok(ChainClassRule {
            backtrack,
            input,
            lookahead,
            records,
        })
    }
}

/// A chained sequence context subtable (GSUB type 6 / GPOS type 8).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChainContext {
    Format1 {
        coverage: CoverageTable,
        rule_sets: Vec<Option<Vec<ChainRule>>>,
    },
    Format2 {
        coverage: CoverageTable,
        backtrack_class_def: ClassDef,
        input_class_def: ClassDef,
        lookahead_class_def: ClassDef,
        rule_sets: Vec<Option<Vec<ChainClassRule>>>,
    },
    Format3 {
        /// Backtrack coverages, nearest first.
        backtrack: Vec<CoverageTable>,
        input: Vec<CoverageTable>,
        lookahead: Vec<CoverageTable>,
        records: Vec<SequenceLookupRecord>,
    },
}

impl FontRead for ChainContext {
    fn read(data: FontData) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        let format: u16 = cursor.read()?;
        match format {
            1 => {
                let coverage_offset: Offset16 = cursor.read()?;
                let set_count: u16 = cursor.read()?;
                Ok(ChainContext::Format1 {
                    coverage: data.resolve(coverage_offset)?,
                    rule_sets: read_rule_sets(data, &mut cursor, set_count as usize)?,
                })
            }
            2 => {
                let coverage_offset: Offset16 = cursor.read()?;
                let backtrack_offset: Offset16 = cursor.read()?;
                let input_offset: Offset16 = cursor.read()?;
                let lookahead_offset: Offset16 = cursor.read()?;
                let set_count: u16 = cursor.read()?;
                Ok(ChainContext::Format2 {
                    coverage: data.resolve(coverage_offset)?,
                    backtrack_class_def: data.resolve(backtrack_offset)?,
                    input_class_def: data.resolve(input_offset)?,
                    lookahead_class_def: data.resolve(lookahead_offset)?,
                    rule_sets: read_rule_sets(data, &mut cursor, set_count as usize)?,
                })
            }
            3 => {
                let backtrack_count: u16 = cursor.read()?;
                let backtrack = read_coverages(data, &mut cursor, backtrack_count as usize)?;
                let input_count: u16 = cursor.read()?;
                let input = read_coverages(data, &mut cursor, input_count as usize)?;
                let lookahead_count: u16 = cursor.read()?;
                let lookahead = read_coverages(data, &mut cursor, lookahead_count as usize)?;
                let record_count: u16 = cursor.read()?;
                let records = read_lookup_records(&mut cursor, record_count as usize)?;
                Ok(ChainContext::Format3 {
                    backtrack,
                    input,
                    lookahead,
                    records,
                })
            }
            other => Err(ReadError::InvalidFormat(other.into())),
        }
    }
}

impl ChainContext {
    /// Try to match this chained context at `pos`.
    ///
    /// Backtrack is matched at `pos - 1 - i`, input at `pos + i`, lookahead
    /// at `pos + input_len + i`.
    pub(crate) fn match_at(
        &self,
        glyph_at: &dyn Fn(usize) -> GlyphId,
        pos: usize,
        len: usize,
    ) -> Option<(usize, &[SequenceLookupRecord])> {
        if pos >= len {
            return None;
        }
        match self {
            ChainContext::Format1 {
                coverage,
                rule_sets,
            } => {
                let cov_ix = coverage.get(glyph_at(pos))?;
                let rules = rule_sets.get(cov_ix as usize)?.as_ref()?;
                for rule in rules {
                    let input_len = rule.input.len() + 1;
                    if pos < rule.backtrack.len() || pos + input_len + rule.lookahead.len() > len {
                        continue;
                    }
                    let backtrack_ok = rule
                        .backtrack
                        .iter()
                        .enumerate()
                        .all(|(i, glyph)| glyph_at(pos - 1 - i) == *glyph);
                    let input_ok = rule
                        .input
                        .iter()
                        .enumerate()
                        .all(|(i, glyph)| glyph_at(pos + 1 + i) == *glyph);
                    let lookahead_ok = rule
                        .lookahead
                        .iter()
                        .enumerate()
                        .all(|(i, glyph)| glyph_at(pos + input_len + i) == *glyph);
                    if backtrack_ok && input_ok && lookahead_ok {
                        return Some((input_len, &rule.records));
                    }
                }
                None
            }
            ChainContext::Format2 {
                coverage,
                backtrack_class_def,
                input_class_def,
                lookahead_class_def,
                rule_sets,
            } => {
                coverage.get(glyph_at(pos))?;
                let class = input_class_def.get(glyph_at(pos));
                let rules = rule_sets.get(class as usize)?.as_ref()?;
                for rule in rules {
                    let input_len = rule.input.len() + 1;
                    if pos < rule.backtrack.len() || pos + input_len + rule.lookahead.len() > len {
                        continue;
                    }
                    let backtrack_ok = rule
                        .backtrack
                        .iter()
                        .enumerate()
                        .all(|(i, class)| backtrack_class_def.get(glyph_at(pos - 1 - i)) == *class);
                    let input_ok = rule
                        .input
                        .iter()
                        .enumerate()
                        .all(|(i, class)| input_class_def.get(glyph_at(pos + 1 + i)) == *class);
                    let lookahead_ok = rule.lookahead.iter().enumerate().all(|(i, class)| {
                        lookahead_class_def.get(glyph_at(pos + input_len + i)) == *class
                    });
                    if backtrack_ok && input_ok && lookahead_ok {
                        return Some((input_len, &rule.records));
                    }
                }
                None
            }
            ChainContext::Format3 {
                backtrack,
                input,
                lookahead,
                records,
            } => {
                if input.is_empty() {
                    return None;
                }
                let input_len = input.len();
                if pos < backtrack.len() || pos + input_len + lookahead.len() > len {
                    return None;
                }
                for (i, coverage) in backtrack.iter().enumerate() {
                    coverage.get(glyph_at(pos - 1 - i))?;
                }
                for (i, coverage) in input.iter().enumerate() {
                    coverage.get(glyph_at(pos + i))?;
                }
                for (i, coverage) in lookahead.iter().enumerate() {
                    coverage.get(glyph_at(pos + input_len + i))?;
                }
                Some((input_len, records))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use layout_test_data::layout as test_data;

    fn gid(raw: u16) -> GlyphId {
        GlyphId::new(raw)
    }

    #[test]
    fn coverage_format1_binary_search() {
        let coverage =
            CoverageTable::Format1(vec![gid(3), gid(7), gid(9), gid(300)]);
        assert_eq!(coverage.get(gid(3)), Some(0));
        assert_eq!(coverage.get(gid(9)), Some(2));
        assert_eq!(coverage.get(gid(300)), Some(3));
        assert_eq!(coverage.get(gid(8)), None);
    }

    #[test]
    fn coverage_format2_ranges() {
        let coverage = CoverageTable::read(FontData::new(test_data::COVERAGE_FORMAT2)).unwrap();
        assert_eq!(coverage.get(gid(11)), Some(1));
        assert_eq!(coverage.get(gid(20)), Some(3));
        assert_eq!(coverage.get(gid(15)), None);
        assert_eq!(coverage.get(gid(25)), Some(8));
        assert_eq!(coverage.get(gid(26)), None);
    }

    #[test]
    fn coverage_roundtrip_through_iter() {
        let coverage = CoverageTable::read(FontData::new(test_data::COVERAGE_FORMAT2)).unwrap();
        for (ix, glyph) in coverage.iter().enumerate() {
            assert_eq!(coverage.get(glyph), Some(ix as u16), "glyph {glyph}");
        }
        assert_eq!(coverage.iter().count(), 9);
    }

    #[test]
    fn class_def_format1_corrected_bound() {
        let class_def = ClassDef::Format1 {
            start_glyph: gid(10),
            classes: vec![2, 0, 3],
        };
        assert_eq!(class_def.get(gid(9)), 0);
        assert_eq!(class_def.get(gid(10)), 2);
        assert_eq!(class_def.get(gid(12)), 3);
        // one past the declared array, not one past the array length
        assert_eq!(class_def.get(gid(13)), 0);
    }

    #[test]
    fn class_def_format2_default_class_is_zero() {
        let class_def = ClassDef::read(FontData::new(test_data::CLASS_DEF_FORMAT2)).unwrap();
        assert_eq!(class_def.get(gid(5)), 1);
        assert_eq!(class_def.get(gid(7)), 1);
        assert_eq!(class_def.get(gid(30)), 2);
        assert_eq!(class_def.get(gid(8)), 0);
        assert_eq!(class_def.get(gid(1000)), 0);
    }

    #[test]
    fn script_list_with_default_lang_sys() {
        let list = ScriptList::read(FontData::new(test_data::SCRIPT_LIST)).unwrap();
        let script = list.get(Tag::new(b"latn")).unwrap();
        let lang_sys = script.lang_sys(None).unwrap();
        assert_eq!(lang_sys.required_feature(), None);
        assert_eq!(lang_sys.feature_indices, vec![0]);
        // unknown language tags fall back to the default language system
        let fallback = script.lang_sys(Some(Tag::new(b"TRK "))).unwrap();
        assert_eq!(fallback, lang_sys);
        assert!(list.get(Tag::new(b"arab")).is_none());
    }

    #[test]
    fn feature_list_lookup_indices() {
        let list = FeatureList::read(FontData::new(test_data::FEATURE_LIST)).unwrap();
        assert_eq!(list.records.len(), 1);
        assert_eq!(list.records[0].tag, Tag::new(b"liga"));
        assert_eq!(list.records[0].feature.lookup_indices, vec![0]);
    }

    #[test]
    fn lookup_flag_bits() {
        let flag = LookupFlag::new(0x0210);
        assert!(flag.use_mark_filtering_set());
        assert!(!flag.ignore_marks());
        assert_eq!(flag.mark_attachment_type(), 2);
    }

    #[test]
    fn idempotent_load() {
        let data = FontData::new(test_data::COVERAGE_FORMAT2);
        assert_eq!(
            CoverageTable::read(data).unwrap(),
            CoverageTable::read(data).unwrap()
        );
    }
}
