//! The [GPOS](https://learn.microsoft.com/typography/opentype/spec/gpos)
//! (glyph positioning) table.

#[path = "./value_record.rs"]
mod value_record;

pub use value_record::{ValueFormat, ValueRecord};

use layout_types::{GlyphId, Offset16, Offset32, Tag};

use super::gsub::MAX_NESTING_DEPTH;
use super::layout::{
    read_layout_header, resolve_lookups, ChainContext, ClassDef, CoverageTable, FeatureList,
    LookupFlag, RawLookup, ScriptList, SequenceContext,
};
use crate::font_data::FontData;
use crate::read::{FontRead, ReadError};
use crate::shaping::{GlyphClassKind, GlyphPositions};

/// The glyph positioning table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gpos {
    pub script_list: ScriptList,
    pub feature_list: FeatureList,
    lookups: Vec<PositioningLookup>,
    long_lookback: bool,
}

impl FontRead for Gpos {
    fn read(data: FontData) -> Result<Self, ReadError> {
        let header = read_layout_header(data, "GPOS")?;
        // Fonts that route positioning through extension lookups (emoji,
        // complex scripts) expect mark attachment to search the whole run.
        // Computed here, fixed for the life of the table.
        let long_lookback = header.lookups.iter().any(|raw| raw.lookup_type == 9);
        let lookups = header
            .lookups
            .into_iter()
            .map(PositioningLookup::from_raw)
            .collect::<Result<_, _>>()?;
        Ok(Gpos {
            script_list: header.script_list,
            feature_list: header.feature_list,
            lookups,
            long_lookback,
        })
    }
}

impl Gpos {
    /// The lookup list.
    pub fn lookups(&self) -> &[PositioningLookup] {
        &self.lookups
    }

    /// `true` if mark attachment searches back to the start of the run.
    pub fn long_lookback(&self) -> bool {
        self.long_lookback
    }

    /// The lookup indices active for a script/language/feature selection,
    /// ascending and deduplicated.
    pub fn lookup_indices(
        &self,
        script: Tag,
        lang: Option<Tag>,
        feature_filter: Option<&[Tag]>,
    ) -> Vec<u16> {
        resolve_lookups(
            &self.script_list,
            &self.feature_list,
            script,
            lang,
            feature_filter,
        )
    }

    /// Apply the given lookups to a position sequence, in the order given.
    pub fn position(&self, positions: &mut dyn GlyphPositions, lookup_indices: &[u16]) {
        for &index in lookup_indices {
            if let Some(lookup) = self.lookups.get(index as usize) {
                lookup.apply(self, positions);
            }
        }
    }
}

/// One positioning lookup: an ordered run of same-type subtables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PositioningLookup {
    pub flag: LookupFlag,
    pub mark_filtering_set: Option<u16>,
    subtables: Vec<PositioningSubtable>,
}

impl PositioningLookup {
    fn from_raw(raw: RawLookup) -> Result<Self, ReadError> {
        let subtables = raw
            .subtables
            .iter()
            .map(|data| PositioningSubtable::read_typed(raw.lookup_type, *data))
            .collect::<Result<_, _>>()?;
        Ok(PositioningLookup {
            flag: raw.flag,
            mark_filtering_set: raw.mark_filtering_set,
            subtables,
        })
    }

    /// The subtables, in application preference order.
    pub fn subtables(&self) -> &[PositioningSubtable] {
        &self.subtables
    }

    fn apply(&self, gpos: &Gpos, positions: &mut dyn GlyphPositions) {
        let mut pos = 0;
        while pos < positions.len() {
            self.apply_at(gpos, positions, pos, 0);
            pos += 1;
        }
    }

    /// Apply this lookup at a single position. The first subtable that
    /// changes the position finishes the lookup there.
    fn apply_at(
        &self,
        gpos: &Gpos,
        positions: &mut dyn GlyphPositions,
        pos: usize,
        depth: u32,
    ) -> bool {
        for subtable in &self.subtables {
            if subtable.position_at(gpos, positions, pos, depth) {
                return true;
            }
        }
        false
    }
}

/// An attachment coordinate on a glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Anchor {
    pub x: i16,
    pub y: i16,
    /// Format 2: a contour point refining the position when hinting.
    pub anchor_point: Option<u16>,
    /// Format 3 device table offsets; retained, not evaluated.
    pub x_device: Option<Offset16>,
    pub y_device: Option<Offset16>,
}

impl FontRead for Anchor {
    fn read(data: FontData) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        let format: u16 = cursor.read()?;
        let x: i16 = cursor.read()?;
        let y: i16 = cursor.read()?;
        match format {
            1 => Ok(Anchor {
                x,
                y,
                anchor_point: None,
                x_device: None,
                y_device: None,
            }),
            2 => Ok(Anchor {
                x,
                y,
                anchor_point: Some(cursor.read()?),
                x_device: None,
                y_device: None,
            }),
            3 => Ok(Anchor {
                x,
                y,
                anchor_point: None,
                x_device: Some(cursor.read()?),
                y_device: Some(cursor.read()?),
            }),
            other => Err(ReadError::InvalidFormat(other.into())),
        }
    }
}

/// One mark: its class plus its attachment anchor.
///
/// `anchor` is `None` when the record carried an invalid anchor offset;
/// some real fonts ship those, and they are skipped rather than failing
/// the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MarkRecord {
    pub class: u16,
    pub anchor: Option<Anchor>,
}

/// One second-glyph entry in a pair adjustment set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PairValueRecord {
    pub second_glyph: GlyphId,
    pub value1: ValueRecord,
    pub value2: ValueRecord,
}

/// A positioning subtable of any lookup type.
///
/// Extension subtables (type 9) are resolved at parse time and never
/// appear here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PositioningSubtable {
    /// Type 1 format 1: one shared adjustment.
    SingleShared {
        coverage: CoverageTable,
        value: ValueRecord,
    },
    /// Type 1 format 2: per-glyph adjustments by coverage index.
    SinglePerGlyph {
        coverage: CoverageTable,
        values: Vec<ValueRecord>,
    },
    /// Type 2 format 1: pairs keyed by the second glyph id.
    PairGlyphs {
        coverage: CoverageTable,
        pair_sets: Vec<Vec<PairValueRecord>>,
    },
    /// Type 2 format 2: pairs keyed by glyph classes.
    PairClasses {
        coverage: CoverageTable,
        class1: ClassDef,
        class2: ClassDef,
        class2_count: u16,
        /// `class1_count * class2_count` records, row-major by class 1.
        records: Vec<(ValueRecord, ValueRecord)>,
    },
    /// Type 3: recognized but not applied.
    Cursive,
    /// Type 4: attach a mark to the nearest preceding base glyph.
    MarkToBase {
        mark_coverage: CoverageTable,
        base_coverage: CoverageTable,
        marks: Vec<MarkRecord>,
        /// Per base glyph (by coverage index), one anchor per mark class.
        base_anchors: Vec<Vec<Option<Anchor>>>,
    },
    /// Type 5: parsed, but attachment is not applied.
    MarkToLigature {
        mark_coverage: CoverageTable,
        ligature_coverage: CoverageTable,
        marks: Vec<MarkRecord>,
        /// Per ligature, per component, one anchor per mark class.
        ligature_anchors: Vec<Vec<Vec<Option<Anchor>>>>,
    },
    /// Type 6: attach a mark to the preceding mark.
    MarkToMark {
        mark1_coverage: CoverageTable,
        mark2_coverage: CoverageTable,
        mark1: Vec<MarkRecord>,
        /// Per mark2 glyph (by coverage index), one anchor per mark1 class.
        mark2_anchors: Vec<Vec<Option<Anchor>>>,
    },
    /// Type 7.
    Context(SequenceContext),
    /// Type 8.
    ChainContext(ChainContext),
    /// A recognized lookup type/format with no implementation.
    Unsupported { lookup_type: u16, format: u16 },
}

impl PositioningSubtable {
    fn read_typed(lookup_type: u16, data: FontData) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        match lookup_type {
            1 => {
                let format: u16 = cursor.read()?;
                match format {
                    1 => {
                        let coverage_offset: Offset16 = cursor.read()?;
                        let value_format: ValueFormat = cursor.read()?;
                        let value = ValueRecord::read(&mut cursor, value_format)?;
                        Ok(PositioningSubtable::SingleShared {
                            coverage: data.resolve(coverage_offset)?,
                            value,
                        })
                    }
                    2 => {
                        let coverage_offset: Offset16 = cursor.read()?;
                        let value_format: ValueFormat = cursor.read()?;
                        let count: u16 = cursor.read()?;
                        let mut values = Vec::with_capacity(count.min(1024) as usize);
                        for _ in 0..count {
                            values.push(ValueRecord::read(&mut cursor, value_format)?);
                        }
                        Ok(PositioningSubtable::SinglePerGlyph {
                            coverage: data.resolve(coverage_offset)?,
                            values,
                        })
                    }
                    _ => Ok(Self::unsupported(lookup_type, format)),
                }
            }
            2 => {
                let format: u16 = cursor.read()?;
                match format {
                    1 => {
                        let coverage_offset: Offset16 = cursor.read()?;
                        let value_format1: ValueFormat = cursor.read()?;
                        let value_format2: ValueFormat = cursor.read()?;
                        let set_count: u16 = cursor.read()?;
                        let set_offsets: Vec<Offset16> =
                            cursor.read_array(set_count as usize)?;
                        let mut pair_sets = Vec::with_capacity(set_offsets.len());
                        for offset in set_offsets {
                            pair_sets.push(read_pair_set(
                                data,
                                offset,
                                value_format1,
                                value_format2,
                            )?);
                        }
                        Ok(PositioningSubtable::PairGlyphs {
                            coverage: data.resolve(coverage_offset)?,
                            pair_sets,
                        })
                    }
                    2 => {
                        let coverage_offset: Offset16 = cursor.read()?;
                        let value_format1: ValueFormat = cursor.read()?;
                        let value_format2: ValueFormat = cursor.read()?;
                        let class_def1_offset: Offset16 = cursor.read()?;
                        let class_def2_offset: Offset16 = cursor.read()?;
                        let class1_count: u16 = cursor.read()?;
                        let class2_count: u16 = cursor.read()?;
                        let total = class1_count as usize * class2_count as usize;
                        let mut records = Vec::with_capacity(total.min(4096));
                        for _ in 0..total {
                            records.push((
                                ValueRecord::read(&mut cursor, value_format1)?,
                                ValueRecord::read(&mut cursor, value_format2)?,
                            ));
                        }
                        Ok(PositioningSubtable::PairClasses {
                            coverage: data.resolve(coverage_offset)?,
                            class1: data.resolve(class_def1_offset)?,
                            class2: data.resolve(class_def2_offset)?,
                            class2_count,
                            records,
                        })
                    }
                    _ => Ok(Self::unsupported(lookup_type, format)),
                }
            }
            3 => {
                log::warn!("GPOS: cursive attachment is not applied");
                Ok(PositioningSubtable::Cursive)
            }
            4 => {
                let format: u16 = cursor.read()?;
                if format != 1 {
                    return Ok(Self::unsupported(lookup_type, format));
                }
                let mark_coverage_offset: Offset16 = cursor.read()?;
                let base_coverage_offset: Offset16 = cursor.read()?;
                let class_count: u16 = cursor.read()?;
                let mark_array_offset: Offset16 = cursor.read()?;
                let base_array_offset: Offset16 = cursor.read()?;
                Ok(PositioningSubtable::MarkToBase {
                    mark_coverage: data.resolve(mark_coverage_offset)?,
                    base_coverage: data.resolve(base_coverage_offset)?,
                    marks: read_mark_array(data, mark_array_offset)?,
                    base_anchors: read_anchor_matrix(data, base_array_offset, class_count)?,
                })
            }
            5 => {
                let format: u16 = cursor.read()?;
                if format != 1 {
                    return Ok(Self::unsupported(lookup_type, format));
                }
                log::warn!("GPOS: mark-to-ligature attachment is parsed but not applied");
                let mark_coverage_offset: Offset16 = cursor.read()?;
                let ligature_coverage_offset: Offset16 = cursor.read()?;
                let class_count: u16 = cursor.read()?;
                let mark_array_offset: Offset16 = cursor.read()?;
                let ligature_array_offset: Offset16 = cursor.read()?;
                Ok(PositioningSubtable::MarkToLigature {
                    mark_coverage: data.resolve(mark_coverage_offset)?,
                    ligature_coverage: data.resolve(ligature_coverage_offset)?,
                    marks: read_mark_array(data, mark_array_offset)?,
                    ligature_anchors: read_ligature_array(
                        data,
                        ligature_array_offset,
                        class_count,
                    )?,
                })
            }
            6 => {
                let format: u16 = cursor.read()?;
                if format != 1 {
                    return Ok(Self::unsupported(lookup_type, format));
                }
                let mark1_coverage_offset: Offset16 = cursor.read()?;
                let mark2_coverage_offset: Offset16 = cursor.read()?;
                let class_count: u16 = cursor.read()?;
                let mark1_array_offset: Offset16 = cursor.read()?;
                let mark2_array_offset: Offset16 = cursor.read()?;
                Ok(PositioningSubtable::MarkToMark {
                    mark1_coverage: data.resolve(mark1_coverage_offset)?,
                    mark2_coverage: data.resolve(mark2_coverage_offset)?,
                    mark1: read_mark_array(data, mark1_array_offset)?,
                    mark2_anchors: read_anchor_matrix(data, mark2_array_offset, class_count)?,
                })
            }
            7 => SequenceContext::read(data).map(PositioningSubtable::Context),
            8 => ChainContext::read(data).map(PositioningSubtable::ChainContext),
            9 => {
                let format: u16 = cursor.read()?;
                if format != 1 {
                    return Err(ReadError::InvalidFormat(format.into()));
                }
                let extension_type: u16 = cursor.read()?;
                if extension_type == 9 {
                    return Err(ReadError::MalformedData(
                        "extension positioning wraps another extension",
                    ));
                }
                let extension_offset: Offset32 = cursor.read()?;
                let extension_data = data
                    .split_off(extension_offset.non_null().ok_or(ReadError::NullOffset)?)
                    .ok_or(ReadError::OutOfBounds)?;
                Self::read_typed(extension_type, extension_data)
            }
            other => Ok(Self::unsupported(other, 0)),
        }
    }

    fn unsupported(lookup_type: u16, format: u16) -> Self {
        log::warn!("GPOS: lookup type {lookup_type} format {format} is not supported");
        PositioningSubtable::Unsupported {
            lookup_type,
            format,
        }
    }

    /// Try to adjust the glyph at `pos`; `true` if anything changed.
    fn position_at(
        &self,
        gpos: &Gpos,
        positions: &mut dyn GlyphPositions,
        pos: usize,
        depth: u32,
    ) -> bool {
        match self {
            PositioningSubtable::SingleShared { coverage, value } => {
                if coverage.get(positions.glyph(pos)).is_none() {
                    return false;
                }
                value.apply(positions, pos)
            }
            PositioningSubtable::SinglePerGlyph { coverage, values } => {
                let Some(cov_ix) = coverage.get(positions.glyph(pos)) else {
                    return false;
                };
                match values.get(cov_ix as usize) {
                    Some(value) => value.apply(positions, pos),
                    None => false,
                }
            }
            PositioningSubtable::PairGlyphs {
                coverage,
                pair_sets,
            } => {
                if pos + 1 >= positions.len() {
                    return false;
                }
                let Some(cov_ix) = coverage.get(positions.glyph(pos)) else {
                    return false;
                };
                let Some(set) = pair_sets.get(cov_ix as usize) else {
                    return false;
                };
                let second = positions.glyph(pos + 1);
                let Some(pair) = set.iter().find(|pair| pair.second_glyph == second) else {
                    return false;
                };
                let first_changed = pair.value1.apply(positions, pos);
                let second_changed = pair.value2.apply(positions, pos + 1);
                first_changed || second_changed
            }
            PositioningSubtable::PairClasses {
                coverage,
                class1,
                class2,
                class2_count,
                records,
            } => {
                if pos + 1 >= positions.len() {
                    return false;
                }
                if coverage.get(positions.glyph(pos)).is_none() {
                    return false;
                }
                let class1_value = class1.get(positions.glyph(pos));
                let class2_value = class2.get(positions.glyph(pos + 1));
                let index =
                    class1_value as usize * *class2_count as usize + class2_value as usize;
                let Some((value1, value2)) = records.get(index) else {
                    return false;
                };
                let first_changed = value1.apply(positions, pos);
                let second_changed = value2.apply(positions, pos + 1);
                first_changed || second_changed
            }
            PositioningSubtable::MarkToBase {
                mark_coverage,
                base_coverage,
                marks,
                base_anchors,
            } => {
                if pos == 0 {
                    return false;
                }
                let Some(mark_ix) = mark_coverage.get(positions.glyph(pos)) else {
                    return false;
                };
                let start = pos - 1;
                let stop = if gpos.long_lookback { 0 } else { start };
                let Some(base_pos) =
                    find_backward_by_kind(positions, GlyphClassKind::Base, start, stop).or_else(
                        || find_backward_by_kind(positions, GlyphClassKind::Zero, start, stop),
                    )
                else {
                    return false;
                };
                let Some(base_ix) = base_coverage.get(positions.glyph(base_pos)) else {
                    return false;
                };
                let Some(mark) = marks.get(mark_ix as usize) else {
                    return false;
                };
                let Some(mark_anchor) = mark.anchor else {
                    return false;
                };
                let Some(base_anchor) = base_anchors
                    .get(base_ix as usize)
                    .and_then(|anchors| anchors.get(mark.class as usize))
                    .and_then(|anchor| anchor.as_ref())
                else {
                    return false;
                };
                attach(positions, base_pos, *base_anchor, pos, mark_anchor);
                true
            }
            PositioningSubtable::MarkToLigature { .. } => false,
            PositioningSubtable::MarkToMark {
                mark1_coverage,
                mark2_coverage,
                mark1,
                mark2_anchors,
            } => {
                if pos == 0 {
                    return false;
                }
                let Some(mark1_ix) = mark1_coverage.get(positions.glyph(pos)) else {
                    return false;
                };
                let start = pos - 1;
                let stop = if gpos.long_lookback { 0 } else { start };
                let Some(prev_pos) =
                    find_backward_by_kind(positions, GlyphClassKind::Mark, start, stop)
                else {
                    return false;
                };
                let Some(mark2_ix) = mark2_coverage.get(positions.glyph(prev_pos)) else {
                    return false;
                };
                let Some(mark) = mark1.get(mark1_ix as usize) else {
                    return false;
                };
                let Some(mark_anchor) = mark.anchor else {
                    return false;
                };
                let Some(prev_anchor) = mark2_anchors
                    .get(mark2_ix as usize)
                    .and_then(|anchors| anchors.get(mark.class as usize))
                    .and_then(|anchor| anchor.as_ref())
                else {
                    return false;
                };
                if mark_anchor.y < 0 {
                    // Observed in Thai fonts: a negative-y mark anchor is
                    // applied to the preceding mark directly.
                    positions.append_offset(prev_pos, mark_anchor.x, mark_anchor.y);
                } else {
                    attach(positions, prev_pos, *prev_anchor, pos, mark_anchor);
                }
                true
            }
            PositioningSubtable::Context(context) => {
                if depth >= MAX_NESTING_DEPTH {
                    return false;
                }
                let Some((_, records)) =
                    context.match_at(&|i| positions.glyph(i), pos, positions.len())
                else {
                    return false;
                };
                for record in records {
                    if let Some(lookup) = gpos.lookups.get(record.lookup_index as usize) {
                        lookup.apply_at(
                            gpos,
                            positions,
                            pos + record.sequence_index as usize,
                            depth + 1,
                        );
                    }
                }
                true
            }
            PositioningSubtable::ChainContext(context) => {
                if depth >= MAX_NESTING_DEPTH {
                    return false;
                }
                let Some((_, records)) =
                    context.match_at(&|i| positions.glyph(i), pos, positions.len())
                else {
                    return false;
                };
                for record in records {
                    if let Some(lookup) = gpos.lookups.get(record.lookup_index as usize) {
                        lookup.apply_at(
                            gpos,
                            positions,
                            pos + record.sequence_index as usize,
                            depth + 1,
                        );
                    }
                }
                true
            }
            PositioningSubtable::Cursive | PositioningSubtable::Unsupported { .. } => false,
        }
    }
}

/// Scan class kinds from `from` down to `stop`, both inclusive.
fn find_backward_by_kind(
    positions: &dyn GlyphPositions,
    kind: GlyphClassKind,
    from: usize,
    stop: usize,
) -> Option<usize> {
    let mut i = from;
    loop {
        if positions.class_kind(i) == kind {
            return Some(i);
        }
        if i == stop {
            return None;
        }
        i -= 1;
    }
}

/// Align `mark_anchor` on the glyph at `mark_pos` with `prev_anchor` on the
/// glyph at `prev_pos`.
///
/// The resulting offset replaces the mark's current offset (the current
/// offset cancels out of the appended delta).
fn attach(
    positions: &mut dyn GlyphPositions,
    prev_pos: usize,
    prev_anchor: Anchor,
    mark_pos: usize,
    mark_anchor: Anchor,
) {
    let (_, prev_advance) = positions.glyph_and_advance(prev_pos);
    let (prev_x, prev_y) = positions.offset(prev_pos);
    let (mark_x, mark_y) = positions.offset(mark_pos);
    let dx = prev_x as i32 + prev_anchor.x as i32
        - (prev_advance as i32 + mark_x as i32 + mark_anchor.x as i32);
    let dy = prev_y as i32 + prev_anchor.y as i32 - (mark_y as i32 + mark_anchor.y as i32);
    positions.append_offset(mark_pos, dx as i16, dy as i16);
}

fn read_pair_set(
    data: FontData,
    offset: Offset16,
    value_format1: ValueFormat,
    value_format2: ValueFormat,
) -> Result<Vec<PairValueRecord>, ReadError> {
    let set_data = data
        .split_off(offset.non_null().ok_or(ReadError::NullOffset)?)
        .ok_or(ReadError::OutOfBounds)?;
    let mut cursor = set_data.cursor();
    let count: u16 = cursor.read()?;
    let mut pairs = Vec::with_capacity(count.min(1024) as usize);
    for _ in 0..count {
        pairs.push(PairValueRecord {
            second_glyph: cursor.read()?,
            value1: ValueRecord::read(&mut cursor, value_format1)?,
            value2: ValueRecord::read(&mut cursor, value_format2)?,
        });
    }
    Ok(pairs)
}

/// Read a MarkArray: `(class, anchor)` per covered mark.
fn read_mark_array(data: FontData, offset: Offset16) -> Result<Vec<MarkRecord>, ReadError> {
    let array_data = data
        .split_off(offset.non_null().ok_or(ReadError::NullOffset)?)
        .ok_or(ReadError::OutOfBounds)?;
    let mut cursor = array_data.cursor();
    let count: u16 = cursor.read()?;
    let mut marks = Vec::with_capacity(count.min(1024) as usize);
    for _ in 0..count {
        let class: u16 = cursor.read()?;
        let anchor_offset: Offset16 = cursor.read()?;
        // real-world fonts ship invalid anchor offsets; skip the record
        let anchor = match array_data.resolve_opt::<Anchor>(anchor_offset) {
            Ok(anchor) => anchor,
            Err(_) => None,
        };
        marks.push(MarkRecord { class, anchor });
    }
    Ok(marks)
}

/// Read a BaseArray/Mark2Array: per record, one anchor offset per class.
fn read_anchor_matrix(
    data: FontData,
    offset: Offset16,
    class_count: u16,
) -> Result<Vec<Vec<Option<Anchor>>>, ReadError> {
    let array_data = data
        .split_off(offset.non_null().ok_or(ReadError::NullOffset)?)
        .ok_or(ReadError::OutOfBounds)?;
    let mut cursor = array_data.cursor();
    let record_count: u16 = cursor.read()?;
    let mut matrix = Vec::with_capacity(record_count.min(1024) as usize);
    for _ in 0..record_count {
        let mut anchors = Vec::with_capacity(class_count.min(1024) as usize);
        for _ in 0..class_count {
            let anchor_offset: Offset16 = cursor.read()?;
            let anchor = match array_data.resolve_opt::<Anchor>(anchor_offset) {
                Ok(anchor) => anchor,
                Err(_) => None,
            };
            anchors.push(anchor);
        }
        matrix.push(anchors);
    }
    Ok(matrix)
}

/// Read a LigatureArray: per ligature, per component, one anchor per class.
fn read_ligature_array(
    data: FontData,
    offset: Offset16,
    class_count: u16,
) -> Result<Vec<Vec<Vec<Option<Anchor>>>>, ReadError> {
    let array_data = data
        .split_off(offset.non_null().ok_or(ReadError::NullOffset)?)
        .ok_or(ReadError::OutOfBounds)?;
    let mut cursor = array_data.cursor();
    let ligature_count: u16 = cursor.read()?;
    let attach_offsets: Vec<Offset16> = cursor.read_array(ligature_count as usize)?;
    let mut ligatures = Vec::with_capacity(attach_offsets.len());
    for attach_offset in attach_offsets {
        let attach_data = array_data
            .split_off(attach_offset.non_null().ok_or(ReadError::NullOffset)?)
            .ok_or(ReadError::OutOfBounds)?;
        let mut attach_cursor = attach_data.cursor();
        let component_count: u16 = attach_cursor.read()?;
        let mut components = Vec::with_capacity(component_count.min(1024) as usize);
        for _ in 0..component_count {
            let mut anchors = Vec::with_capacity(class_count.min(1024) as usize);
            for _ in 0..class_count {
                let anchor_offset: Offset16 = attach_cursor.read()?;
                let anchor = match attach_data.resolve_opt::<Anchor>(anchor_offset) {
                    Ok(anchor) => anchor,
                    Err(_) => None,
                };
                anchors.push(anchor);
            }
            components.push(anchors);
        }
        ligatures.push(components);
    }
    Ok(ligatures)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shaping::PositionBuffer;
    use layout_test_data::gpos as test_data;

    fn gid(raw: u16) -> GlyphId {
        GlyphId::new(raw)
    }

    fn anchor(x: i16, y: i16) -> Anchor {
        Anchor {
            x,
            y,
            anchor_point: None,
            x_device: None,
            y_device: None,
        }
    }

    fn empty_gpos() -> Gpos {
        Gpos {
            script_list: ScriptList { records: vec![] },
            feature_list: FeatureList { records: vec![] },
            lookups: vec![],
            long_lookback: false,
        }
    }

    fn lookup(subtables: Vec<PositioningSubtable>) -> PositioningLookup {
        PositioningLookup {
            flag: LookupFlag::default(),
            mark_filtering_set: None,
            subtables,
        }
    }

    #[test]
    fn mark_to_base_alignment() {
        let gpos = Gpos::read(FontData::new(test_data::MARK_TO_BASE)).unwrap();
        let mut buffer = PositionBuffer::new();
        buffer.push(gid(100), GlyphClassKind::Base, 500);
        buffer.push(gid(200), GlyphClassKind::Mark, 0);
        gpos.position(&mut buffer, &[0]);
        assert_eq!(buffer.offset(0), (0, 0));
        assert_eq!(buffer.offset(1), (-500, 100));
    }

    #[test]
    fn mark_to_base_needs_an_eligible_base() {
        let gpos = Gpos::read(FontData::new(test_data::MARK_TO_BASE)).unwrap();
        let mut buffer = PositionBuffer::new();
        buffer.push(gid(100), GlyphClassKind::Ligature, 500);
        buffer.push(gid(200), GlyphClassKind::Mark, 0);
        gpos.position(&mut buffer, &[0]);
        assert_eq!(buffer.offset(1), (0, 0));
    }

    #[test]
    fn out_of_bounds_mark_anchor_loads_as_none() {
        let gpos = Gpos::read(FontData::new(test_data::MARK_TO_BASE_BAD_ANCHOR)).unwrap();
        let PositioningSubtable::MarkToBase { marks, .. } = &gpos.lookups()[0].subtables()[0]
        else {
            panic!("expected a mark-to-base subtable");
        };
        assert_eq!(marks.len(), 1);
        assert!(marks[0].anchor.is_none());

        // the anchorless mark attaches nothing, and nothing panics
        let mut buffer = PositionBuffer::new();
        buffer.push(gid(100), GlyphClassKind::Base, 500);
        buffer.push(gid(200), GlyphClassKind::Mark, 0);
        gpos.position(&mut buffer, &[0]);
        assert_eq!(buffer.offset(1), (0, 0));
    }

    #[test]
    fn pair_kerning_from_table_bytes() {
        let gpos = Gpos::read(FontData::new(test_data::PAIR_KERN)).unwrap();
        let indices = gpos.lookup_indices(Tag::new(b"latn"), None, Some(&[Tag::new(b"kern")]));
        assert_eq!(indices, vec![0]);
        let mut buffer = PositionBuffer::new();
        buffer.push(gid(36), GlyphClassKind::Base, 600); // A
        buffer.push(gid(60), GlyphClassKind::Base, 550); // Y
        gpos.position(&mut buffer, &indices);
        assert_eq!(buffer.glyph_and_advance(0).1, 600 - 80);
        assert_eq!(buffer.glyph_and_advance(1).1, 550);
    }

    #[test]
    fn extension_sets_long_lookback() {
        let gpos = Gpos::read(FontData::new(test_data::MARK_TO_BASE_VIA_EXTENSION)).unwrap();
        assert!(gpos.long_lookback());
        let direct = Gpos::read(FontData::new(test_data::MARK_TO_BASE)).unwrap();
        assert!(!direct.long_lookback());
        assert_eq!(direct.lookups()[0].subtables(), gpos.lookups()[0].subtables());
    }

    #[test]
    fn long_lookback_widens_the_search() {
        let mut gpos = Gpos::read(FontData::new(test_data::MARK_TO_BASE)).unwrap();
        // base, intervening ligature, mark: the immediate-predecessor search
        // must fail
        let mut buffer = PositionBuffer::new();
        buffer.push(gid(100), GlyphClassKind::Base, 500);
        buffer.push(gid(150), GlyphClassKind::Ligature, 300);
        buffer.push(gid(200), GlyphClassKind::Mark, 0);
        gpos.position(&mut buffer, &[0]);
        assert_eq!(buffer.offset(2), (0, 0));

        gpos.long_lookback = true;
        gpos.position(&mut buffer, &[0]);
        assert_eq!(buffer.offset(2), (-500, 100));
    }

    #[test]
    fn single_adjustment_respects_coverage() {
        let gpos = empty_gpos();
        let lookup = lookup(vec![PositioningSubtable::SingleShared {
            coverage: CoverageTable::Format1(vec![gid(5)]),
            value: ValueRecord {
                x_advance: Some(-40),
                ..Default::default()
            },
        }]);
        let mut buffer = PositionBuffer::new();
        buffer.push(gid(5), GlyphClassKind::Base, 500);
        buffer.push(gid(6), GlyphClassKind::Base, 500);
        lookup.apply(&gpos, &mut buffer);
        assert_eq!(buffer.glyph_and_advance(0).1, 460);
        assert_eq!(buffer.glyph_and_advance(1).1, 500);
    }

    #[test]
    fn first_changing_subtable_finishes_the_lookup() {
        let gpos = empty_gpos();
        let lookup = lookup(vec![
            PositioningSubtable::SingleShared {
                coverage: CoverageTable::Format1(vec![gid(5)]),
                value: ValueRecord {
                    x_advance: Some(-40),
                    ..Default::default()
                },
            },
            PositioningSubtable::SingleShared {
                coverage: CoverageTable::Format1(vec![gid(5)]),
                value: ValueRecord {
                    x_advance: Some(-100),
                    ..Default::default()
                },
            },
        ]);
        let mut buffer = PositionBuffer::new();
        buffer.push(gid(5), GlyphClassKind::Base, 500);
        lookup.apply(&gpos, &mut buffer);
        assert_eq!(buffer.glyph_and_advance(0).1, 460);
    }

    #[test]
    fn mark_to_mark_negative_y_applies_to_previous_mark() {
        let gpos = empty_gpos();
        let lookup = lookup(vec![PositioningSubtable::MarkToMark {
            mark1_coverage: CoverageTable::Format1(vec![gid(301)]),
            mark2_coverage: CoverageTable::Format1(vec![gid(300)]),
            mark1: vec![MarkRecord {
                class: 0,
                anchor: Some(anchor(12, -30)),
            }],
            mark2_anchors: vec![vec![Some(anchor(0, 50))]],
        }]);
        let mut buffer = PositionBuffer::new();
        buffer.push(gid(300), GlyphClassKind::Mark, 0);
        buffer.push(gid(301), GlyphClassKind::Mark, 0);
        lookup.apply(&gpos, &mut buffer);
        // the offset lands on the preceding mark, not the current one
        assert_eq!(buffer.offset(0), (12, -30));
        assert_eq!(buffer.offset(1), (0, 0));
    }

    #[test]
    fn idempotent_load() {
        let data = FontData::new(test_data::MARK_TO_BASE);
        assert_eq!(Gpos::read(data).unwrap(), Gpos::read(data).unwrap());
    }
}
