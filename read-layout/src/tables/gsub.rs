//! The [GSUB](https://learn.microsoft.com/typography/opentype/spec/gsub)
//! (glyph substitution) table.

use std::collections::BTreeSet;

use layout_types::{GlyphId, Offset16, Offset32, Tag};

use super::layout::{
    read_layout_header, resolve_lookups, ChainContext, CoverageTable, FeatureList, LookupFlag,
    RawLookup, ScriptList, SequenceContext,
};
use crate::font_data::FontData;
use crate::read::{FontRead, ReadError};
use crate::shaping::GlyphIndexList;

/// Hard cap on nested lookup invocation in context/chaining rules.
///
/// Malformed fonts can build lookup cycles; past this depth a context rule
/// silently fails to match.
pub(crate) const MAX_NESTING_DEPTH: u32 = 8;

/// The glyph substitution table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gsub {
    pub script_list: ScriptList,
    pub feature_list: FeatureList,
    lookups: Vec<SubstitutionLookup>,
}

impl FontRead for Gsub {
    fn read(data: FontData) -> Result<Self, ReadError> {
        let header = read_layout_header(data, "GSUB")?;
        let lookups = header
            .lookups
            .into_iter()
            .map(SubstitutionLookup::from_raw)
            .collect::<Result<_, _>>()?;
        Ok(Gsub {
            script_list: header.script_list,
            feature_list: header.feature_list,
            lookups,
        })
    }
}

impl Gsub {
    /// The lookup list.
    pub fn lookups(&self) -> &[SubstitutionLookup] {
        &self.lookups
    }

    /// The lookup indices active for a script/language/feature selection,
    /// ascending and deduplicated.
    ///
    /// `feature_filter` of `None` activates every feature in the language
    /// system.
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

    /// Apply the given lookups to a glyph sequence, in the order given.
    ///
    /// Callers resolve features to lookup indices up front (see
    /// [`lookup_indices`](Self::lookup_indices)) and pass them in ascending
    /// order; application order is lookup-list order, never feature order.
    pub fn substitute(&self, glyphs: &mut dyn GlyphIndexList, lookup_indices: &[u16]) {
        for &index in lookup_indices {
            if let Some(lookup) = self.lookups.get(index as usize) {
                lookup.apply(self, glyphs);
            }
        }
    }

    /// Every glyph reachable by substitution for one script/language, for
    /// callers that pre-build glyph textures without shaping.
    pub fn collect_reachable_substitution_glyphs(
        &self,
        script: Tag,
        lang: Option<Tag>,
    ) -> BTreeSet<GlyphId> {
        let mut pending = self.lookup_indices(script, lang, None);
        let mut visited = BTreeSet::new();
        let mut output = BTreeSet::new();
        while let Some(index) = pending.pop() {
            if !visited.insert(index) {
                continue;
            }
            let Some(lookup) = self.lookups.get(index as usize) else {
                continue;
            };
            for subtable in &lookup.subtables {
                subtable.collect_associated_glyphs(&mut output);
                subtable.nested_lookup_indices(&mut pending);
            }
        }
        output
    }
}

/// One substitution lookup: an ordered run of same-type subtables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubstitutionLookup {
    pub flag: LookupFlag,
    pub mark_filtering_set: Option<u16>,
    subtables: Vec<SubstitutionSubtable>,
}

impl SubstitutionLookup {
    fn from_raw(raw: RawLookup) -> Result<Self, ReadError> {
        let subtables = raw
            .subtables
            .iter()
            .map(|data| SubstitutionSubtable::read_typed(raw.lookup_type, *data))
            .collect::<Result<_, _>>()?;
        Ok(SubstitutionLookup {
            flag: raw.flag,
            mark_filtering_set: raw.mark_filtering_set,
            subtables,
        })
    }

    /// The subtables, in application preference order.
    pub fn subtables(&self) -> &[SubstitutionSubtable] {
        &self.subtables
    }

    fn apply(&self, gsub: &Gsub, glyphs: &mut dyn GlyphIndexList) {
        let mut pos = 0;
        while pos < glyphs.len() {
            self.apply_at(gsub, glyphs, pos, 0);
            pos += 1;
        }
    }

    /// Apply this lookup at a single position. The first subtable that
    /// substitutes finishes the lookup for this position.
    fn apply_at(&self, gsub: &Gsub, glyphs: &mut dyn GlyphIndexList, pos: usize, depth: u32) -> bool {
        for subtable in &self.subtables {
            if subtable.substitute_at(gsub, glyphs, pos, depth) {
                return true;
            }
        }
        false
    }
}

/// A ligature: N input components mapping to one output glyph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ligature {
    /// The output glyph.
    pub glyph: GlyphId,
    /// The input components after the first (covered) glyph.
    pub components: Vec<GlyphId>,
}

/// A substitution subtable of any lookup type.
///
/// Extension subtables (type 7) are resolved at parse time, so they never
/// appear here; shaping through an extension is identical to shaping
/// through the wrapped lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubstitutionSubtable {
    /// Type 1 format 1: output is input plus a delta.
    SingleDelta {
        coverage: CoverageTable,
        delta_glyph_id: i16,
    },
    /// Type 1 format 2: output indexed by coverage index.
    SingleList {
        coverage: CoverageTable,
        substitutes: Vec<GlyphId>,
    },
    /// Type 2: one glyph becomes a sequence.
    Multiple {
        coverage: CoverageTable,
        sequences: Vec<Vec<GlyphId>>,
    },
    /// Type 3: one glyph has design alternates; the first is used.
    Alternate {
        coverage: CoverageTable,
        alternate_sets: Vec<Vec<GlyphId>>,
    },
    /// Type 4: consecutive glyphs become one ligature glyph.
    Ligature {
        coverage: CoverageTable,
        ligature_sets: Vec<Vec<Ligature>>,
    },
    /// Type 5.
    Context(SequenceContext),
    /// Type 6.
    ChainContext(ChainContext),
    /// Type 8: recognized but not applied.
    ReverseChainSingle,
    /// A recognized lookup type/format with no implementation; never
    /// applies any change.
    Unsupported { lookup_type: u16, format: u16 },
}

impl SubstitutionSubtable {
    /// Read a subtable of the given lookup type.
    fn read_typed(lookup_type: u16, data: FontData) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        match lookup_type {
            1 => {
                let format: u16 = cursor.read()?;
                match format {
                    1 => {
                        let coverage_offset: Offset16 = cursor.read()?;
                        let delta_glyph_id: i16 = cursor.read()?;
                        Ok(SubstitutionSubtable::SingleDelta {
                            coverage: data.resolve(coverage_offset)?,
                            delta_glyph_id,
                        })
                    }
                    2 => {
                        let coverage_offset: Offset16 = cursor.read()?;
                        let count: u16 = cursor.read()?;
                        Ok(SubstitutionSubtable::SingleList {
                            coverage: data.resolve(coverage_offset)?,
                            substitutes: cursor.read_array(count as usize)?,
                        })
                    }
                    _ => Ok(Self::unsupported(lookup_type, format)),
                }
            }
            2 => {
                let format: u16 = cursor.read()?;
                if format != 1 {
                    return Ok(Self::unsupported(lookup_type, format));
                }
                let coverage_offset: Offset16 = cursor.read()?;
                let count: u16 = cursor.read()?;
                let sequence_offsets: Vec<Offset16> = cursor.read_array(count as usize)?;
                let mut sequences = Vec::with_capacity(sequence_offsets.len());
                for offset in sequence_offsets {
                    let sequence = read_glyph_sequence(data, offset)?;
                    if sequence.is_empty() {
                        return Err(ReadError::MalformedData(
                            "empty sequence in multiple substitution",
                        ));
                    }
                    sequences.push(sequence);
                }
                Ok(SubstitutionSubtable::Multiple {
                    coverage: data.resolve(coverage_offset)?,
                    sequences,
                })
            }
            3 => {
                let format: u16 = cursor.read()?;
                if format != 1 {
                    return Ok(Self::unsupported(lookup_type, format));
                }
                let coverage_offset: Offset16 = cursor.read()?;
                let count: u16 = cursor.read()?;
                let set_offsets: Vec<Offset16> = cursor.read_array(count as usize)?;
                let mut alternate_sets = Vec::with_capacity(set_offsets.len());
                for offset in set_offsets {
                    alternate_sets.push(read_glyph_sequence(data, offset)?);
                }
                Ok(SubstitutionSubtable::Alternate {
                    coverage: data.resolve(coverage_offset)?,
                    alternate_sets,
                })
            }
            4 => {
                let format: u16 = cursor.read()?;
                if format != 1 {
                    return Ok(Self::unsupported(lookup_type, format));
                }
                let coverage_offset: Offset16 = cursor.read()?;
                let count: u16 = cursor.read()?;
                let set_offsets: Vec<Offset16> = cursor.read_array(count as usize)?;
                let mut ligature_sets = Vec::with_capacity(set_offsets.len());
                for offset in set_offsets {
                    ligature_sets.push(read_ligature_set(data, offset)?);
                }
                Ok(SubstitutionSubtable::Ligature {
                    coverage: data.resolve(coverage_offset)?,
                    ligature_sets,
                })
            }
            5 => SequenceContext::read(data).map(SubstitutionSubtable::Context),
            6 => ChainContext::read(data).map(SubstitutionSubtable::ChainContext),
            7 => {
                let format: u16 = cursor.read()?;
                if format != 1 {
                    return Err(ReadError::InvalidFormat(format.into()));
                }
                let extension_type: u16 = cursor.read()?;
                if extension_type == 7 {
                    return Err(ReadError::MalformedData(
                        "extension substitution wraps another extension",
                    ));
                }
                let extension_offset: Offset32 = cursor.read()?;
                let extension_data = data
                    .split_off(extension_offset.non_null().ok_or(ReadError::NullOffset)?)
                    .ok_or(ReadError::OutOfBounds)?;
                Self::read_typed(extension_type, extension_data)
            }
            8 => {
                log::warn!("GSUB: reverse chaining substitution is not applied");
                Ok(SubstitutionSubtable::ReverseChainSingle)
            }
            other => Ok(Self::unsupported(other, 0)),
        }
    }

    fn unsupported(lookup_type: u16, format: u16) -> Self {
        log::warn!("GSUB: lookup type {lookup_type} format {format} is not supported");
        SubstitutionSubtable::Unsupported {
            lookup_type,
            format,
        }
    }

    /// Try to substitute at `pos`; `true` if the sequence changed.
    fn substitute_at(
        &self,
        gsub: &Gsub,
        glyphs: &mut dyn GlyphIndexList,
        pos: usize,
        depth: u32,
    ) -> bool {
        match self {
            SubstitutionSubtable::SingleDelta {
                coverage,
                delta_glyph_id,
            } => {
                let glyph = glyphs.glyph(pos);
                if coverage.get(glyph).is_none() {
                    return false;
                }
                let substitute = (glyph.to_u16() as i32 + *delta_glyph_id as i32) as u16;
                glyphs.replace(pos, GlyphId::new(substitute));
                true
            }
            SubstitutionSubtable::SingleList {
                coverage,
                substitutes,
            } => {
                let Some(cov_ix) = coverage.get(glyphs.glyph(pos)) else {
                    return false;
                };
                let Some(substitute) = substitutes.get(cov_ix as usize) else {
                    return false;
                };
                glyphs.replace(pos, *substitute);
                true
            }
            SubstitutionSubtable::Multiple {
                coverage,
                sequences,
            } => {
                let Some(cov_ix) = coverage.get(glyphs.glyph(pos)) else {
                    return false;
                };
                let Some(sequence) = sequences.get(cov_ix as usize) else {
                    return false;
                };
                glyphs.replace_with_many(pos, sequence);
                true
            }
            SubstitutionSubtable::Alternate {
                coverage,
                alternate_sets,
            } => {
                let Some(cov_ix) = coverage.get(glyphs.glyph(pos)) else {
                    return false;
                };
                let Some(alternate) = alternate_sets
                    .get(cov_ix as usize)
                    .and_then(|set| set.first())
                else {
                    return false;
                };
                glyphs.replace(pos, *alternate);
                true
            }
            SubstitutionSubtable::Ligature {
                coverage,
                ligature_sets,
            } => {
                let Some(cov_ix) = coverage.get(glyphs.glyph(pos)) else {
                    return false;
                };
                let Some(set) = ligature_sets.get(cov_ix as usize) else {
                    return false;
                };
                for ligature in set {
                    let total = ligature.components.len() + 1;
                    if pos + total > glyphs.len() {
                        continue;
                    }
                    let matches = ligature
                        .components
                        .iter()
                        .enumerate()
                        .all(|(i, component)| glyphs.glyph(pos + 1 + i) == *component);
                    if matches {
                        glyphs.replace_many_with_one(pos, total, ligature.glyph);
                        return true;
                    }
                }
                false
            }
            SubstitutionSubtable::Context(context) => {
                if depth >= MAX_NESTING_DEPTH {
                    return false;
                }
                let Some((_, records)) = context.match_at(&|i| glyphs.glyph(i), pos, glyphs.len())
                else {
                    return false;
                };
                for record in records {
                    if let Some(lookup) = gsub.lookups.get(record.lookup_index as usize) {
                        lookup.apply_at(
                            gsub,
                            glyphs,
                            pos + record.sequence_index as usize,
                            depth + 1,
                        );
                    }
                }
                true
            }
            SubstitutionSubtable::ChainContext(context) => {
                if depth >= MAX_NESTING_DEPTH {
                    return false;
                }
                let Some((_, records)) = context.match_at(&|i| glyphs.glyph(i), pos, glyphs.len())
                else {
                    return false;
                };
                for record in records {
                    if let Some(lookup) = gsub.lookups.get(record.lookup_index as usize) {
                        lookup.apply_at(
                            gsub,
                            glyphs,
                            pos + record.sequence_index as usize,
                            depth + 1,
                        );
                    }
                }
                true
            }
            SubstitutionSubtable::ReverseChainSingle
            | SubstitutionSubtable::Unsupported { .. } => false,
        }
    }

    /// Collect every output glyph this subtable could produce.
    fn collect_associated_glyphs(&self, output: &mut BTreeSet<GlyphId>) {
        match self {
            SubstitutionSubtable::SingleDelta {
                coverage,
                delta_glyph_id,
            } => {
                for glyph in coverage.iter() {
                    let substitute = (glyph.to_u16() as i32 + *delta_glyph_id as i32) as u16;
                    output.insert(GlyphId::new(substitute));
                }
            }
            SubstitutionSubtable::SingleList { substitutes, .. } => {
                output.extend(substitutes.iter().copied());
            }
            SubstitutionSubtable::Multiple { sequences, .. } => {
                for sequence in sequences {
                    output.extend(sequence.iter().copied());
                }
            }
            SubstitutionSubtable::Alternate { alternate_sets, .. } => {
                for set in alternate_sets {
                    output.extend(set.iter().copied());
                }
            }
            SubstitutionSubtable::Ligature { ligature_sets, .. } => {
                for set in ligature_sets {
                    for ligature in set {
                        output.insert(ligature.glyph);
                    }
                }
            }
            SubstitutionSubtable::Context(_)
            | SubstitutionSubtable::ChainContext(_)
            | SubstitutionSubtable::ReverseChainSingle
            | SubstitutionSubtable::Unsupported { .. } => {}
        }
    }

    /// Push the lookup indices referenced by nested context records.
    fn nested_lookup_indices(&self, out: &mut Vec<u16>) {
        match self {
            SubstitutionSubtable::Context(context) => match context {
                SequenceContext::Format1 { rule_sets, .. } => {
                    for rule in rule_sets.iter().flatten().flatten() {
                        out.extend(rule.records.iter().map(|rec| rec.lookup_index));
                    }
                }
                SequenceContext::Format2 { rule_sets, .. } => {
                    for rule in rule_sets.iter().flatten().flatten() {
                        out.extend(rule.records.iter().map(|rec| rec.lookup_index));
                    }
                }
                SequenceContext::Format3 { records, .. } => {
                    out.extend(records.iter().map(|rec| rec.lookup_index));
                }
            },
            SubstitutionSubtable::ChainContext(context) => match context {
                ChainContext::Format1 { rule_sets, .. } => {
                    for rule in rule_sets.iter().flatten().flatten() {
                        out.extend(rule.records.iter().map(|rec| rec.lookup_index));
                    }
                }
                ChainContext::Format2 { rule_sets, .. } => {
                    for rule in rule_sets.iter().flatten().flatten() {
                        out.extend(rule.records.iter().map(|rec| rec.lookup_index));
                    }
                }
                ChainContext::Format3 { records, .. } => {
                    out.extend(records.iter().map(|rec| rec.lookup_index));
                }
            },
            _ => {}
        }
    }
}

/// Read a `(count, glyphs[count])` table at `offset`.
fn read_glyph_sequence(data: FontData, offset: Offset16) -> Result<Vec<GlyphId>, ReadError> {
    let sequence_data = data
        .split_off(offset.non_null().ok_or(ReadError::NullOffset)?)
        .ok_or(ReadError::OutOfBounds)?;
    let mut cursor = sequence_data.cursor();
    let count: u16 = cursor.read()?;
    cursor.read_array(count as usize)
}

fn read_ligature_set(data: FontData, offset: Offset16) -> Result<Vec<Ligature>, ReadError> {
    let set_data = data
        .split_off(offset.non_null().ok_or(ReadError::NullOffset)?)
        .ok_or(ReadError::OutOfBounds)?;
    let mut cursor = set_data.cursor();
    let count: u16 = cursor.read()?;
    let ligature_offsets: Vec<Offset16> = cursor.read_array(count as usize)?;
    let mut ligatures = Vec::with_capacity(ligature_offsets.len());
    for offset in ligature_offsets {
        let ligature_data = set_data
            .split_off(offset.non_null().ok_or(ReadError::NullOffset)?)
            .ok_or(ReadError::OutOfBounds)?;
        let mut cursor = ligature_data.cursor();
        let glyph: GlyphId = cursor.read()?;
        let component_count: u16 = cursor.read()?;
        if component_count == 0 {
            return Err(ReadError::MalformedData("ligature with zero components"));
        }
        ligatures.push(Ligature {
            glyph,
            components: cursor.read_array(component_count as usize - 1)?,
        });
    }
    Ok(ligatures)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shaping::GlyphBuffer;
    use layout_test_data::gsub as test_data;

    fn gid(raw: u16) -> GlyphId {
        GlyphId::new(raw)
    }

    fn buffer(glyphs: &[u16]) -> GlyphBuffer {
        glyphs.iter().copied().collect()
    }

    fn empty_gsub() -> Gsub {
        Gsub {
            script_list: ScriptList { records: vec![] },
            feature_list: FeatureList { records: vec![] },
            lookups: vec![],
        }
    }

    fn lookup(subtables: Vec<SubstitutionSubtable>) -> SubstitutionLookup {
        SubstitutionLookup {
            flag: LookupFlag::default(),
            mark_filtering_set: None,
            subtables,
        }
    }

    #[test]
    fn single_delta_from_table_bytes() {
        let gsub = Gsub::read(FontData::new(test_data::SINGLE_DELTA)).unwrap();
        let indices = gsub.lookup_indices(Tag::new(b"latn"), None, None);
        assert_eq!(indices, vec![0]);
        let mut glyphs = buffer(&[5, 6, 5]);
        gsub.substitute(&mut glyphs, &indices);
        assert_eq!(glyphs.glyphs(), &[7, 6, 7].map(gid));
    }

    #[test]
    fn ligature_replaces_n_with_one() {
        let gsub = Gsub::read(FontData::new(test_data::LIGATURE)).unwrap();
        let mut glyphs = buffer(&[10, 11, 12, 99]);
        gsub.substitute(&mut glyphs, &[0]);
        assert_eq!(glyphs.glyphs(), &[42, 99].map(gid));
    }

    #[test]
    fn ligature_requires_full_component_match() {
        let gsub = Gsub::read(FontData::new(test_data::LIGATURE)).unwrap();
        // too short: components [11, 12] cannot match
        let mut glyphs = buffer(&[10, 11]);
        gsub.substitute(&mut glyphs, &[0]);
        assert_eq!(glyphs.glyphs(), &[10, 11].map(gid));
        // wrong middle glyph
        let mut glyphs = buffer(&[10, 11, 13, 12]);
        gsub.substitute(&mut glyphs, &[0]);
        assert_eq!(glyphs.glyphs(), &[10, 11, 13, 12].map(gid));
    }

    #[test]
    fn extension_is_transparent() {
        let direct = Gsub::read(FontData::new(test_data::SINGLE_DELTA)).unwrap();
        let wrapped = Gsub::read(FontData::new(test_data::SINGLE_DELTA_VIA_EXTENSION)).unwrap();
        assert_eq!(direct.lookups()[0].subtables(), wrapped.lookups()[0].subtables());

        let mut direct_glyphs = buffer(&[5, 6]);
        direct.substitute(&mut direct_glyphs, &[0]);
        let mut wrapped_glyphs = buffer(&[5, 6]);
        wrapped.substitute(&mut wrapped_glyphs, &[0]);
        assert_eq!(direct_glyphs, wrapped_glyphs);
    }

    #[test]
    fn nested_extension_is_rejected() {
        let result = Gsub::read(FontData::new(test_data::NESTED_EXTENSION));
        assert_eq!(
            result,
            Err(ReadError::MalformedData(
                "extension substitution wraps another extension"
            ))
        );
    }

    #[test]
    fn first_matching_subtable_finishes_the_lookup() {
        let gsub = empty_gsub();
        // both subtables cover glyph 5; only the first may fire
        let lookup = lookup(vec![
            SubstitutionSubtable::SingleDelta {
                coverage: CoverageTable::Format1(vec![gid(5)]),
                delta_glyph_id: 1,
            },
            SubstitutionSubtable::SingleDelta {
                coverage: CoverageTable::Format1(vec![gid(5), gid(6)]),
                delta_glyph_id: 100,
            },
        ]);
        let mut glyphs = buffer(&[5]);
        lookup.apply(&gsub, &mut glyphs);
        assert_eq!(glyphs.glyphs(), &[gid(6)]);
    }

    #[test]
    fn multiple_substitution_expands_in_place() {
        let gsub = empty_gsub();
        let lookup = lookup(vec![SubstitutionSubtable::Multiple {
            coverage: CoverageTable::Format1(vec![gid(8)]),
            sequences: vec![vec![gid(20), gid(21), gid(22)]],
        }]);
        let mut glyphs = buffer(&[7, 8, 9]);
        lookup.apply(&gsub, &mut glyphs);
        assert_eq!(glyphs.glyphs(), &[7, 20, 21, 22, 9].map(gid));
    }

    #[test]
    fn alternate_picks_first() {
        let gsub = empty_gsub();
        let lookup = lookup(vec![SubstitutionSubtable::Alternate {
            coverage: CoverageTable::Format1(vec![gid(5)]),
            alternate_sets: vec![vec![gid(40), gid(41)]],
        }]);
        let mut glyphs = buffer(&[5]);
        lookup.apply(&gsub, &mut glyphs);
        assert_eq!(glyphs.glyphs(), &[gid(40)]);
    }

    #[test]
    fn chain_context_applies_nested_lookup() {
        let gsub = Gsub::read(FontData::new(test_data::CHAIN_CONTEXT_FORMAT3)).unwrap();
        // backtrack [1], input [5], lookahead [9]; nested single delta +2 at 0
        let mut glyphs = buffer(&[1, 5, 9]);
        gsub.substitute(&mut glyphs, &[0]);
        assert_eq!(glyphs.glyphs(), &[1, 7, 9].map(gid));
        // missing lookahead: no match
        let mut glyphs = buffer(&[1, 5]);
        gsub.substitute(&mut glyphs, &[0]);
        assert_eq!(glyphs.glyphs(), &[1, 5].map(gid));
        // missing backtrack: no match
        let mut glyphs = buffer(&[5, 9]);
        gsub.substitute(&mut glyphs, &[0]);
        assert_eq!(glyphs.glyphs(), &[5, 9].map(gid));
    }

    #[test]
    fn recursion_depth_is_bounded() {
        let gsub = Gsub {
            script_list: ScriptList { records: vec![] },
            feature_list: FeatureList { records: vec![] },
            // lookup 0 matches glyph 5 and re-invokes itself at the same position
            lookups: vec![lookup(vec![SubstitutionSubtable::Context(
                SequenceContext::Format3 {
                    coverages: vec![CoverageTable::Format1(vec![gid(5)])],
                    records: vec![super::super::layout::SequenceLookupRecord {
                        sequence_index: 0,
                        lookup_index: 0,
                    }],
                },
            )])],
        };
        let mut glyphs = buffer(&[5]);
        // terminates because nesting is capped
        gsub.substitute(&mut glyphs, &[0]);
        assert_eq!(glyphs.glyphs(), &[gid(5)]);
    }

    #[test]
    fn collect_reachable_glyphs_includes_nested_lookups() {
        let gsub = Gsub::read(FontData::new(test_data::CHAIN_CONTEXT_FORMAT3)).unwrap();
        let reachable =
            gsub.collect_reachable_substitution_glyphs(Tag::new(b"latn"), None);
        // the nested single-delta lookup maps 5 -> 7
        assert!(reachable.contains(&gid(7)));
    }

    #[test]
    fn idempotent_load() {
        let data = FontData::new(test_data::LIGATURE);
        assert_eq!(Gsub::read(data).unwrap(), Gsub::read(data).unwrap());
    }
}
