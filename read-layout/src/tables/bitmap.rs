//! Structures shared by the embedded-bitmap locator tables
//! ([CBLC](https://learn.microsoft.com/typography/opentype/spec/cblc) and
//! [EBLC](https://learn.microsoft.com/typography/opentype/spec/eblc)).
//!
//! A strike is the set of bitmaps for one size. Each strike carries index
//! subtables that locate glyph image data in the companion data table
//! (CBDT/EBDT); the locator walk flattens them into [`BitmapLocation`]
//! entries.

use layout_types::{GlyphId, ReadScalar};

use crate::font_data::FontData;
use crate::read::ReadError;

/// Strike count bound; more than this is treated as a structural error.
pub(crate) const MAX_BITMAP_STRIKES: u32 = 1024;

/// Horizontal or vertical line metrics of a strike, 12 bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SbitLineMetrics {
    pub ascender: i8,
    pub descender: i8,
    pub width_max: u8,
    pub caret_slope_numerator: i8,
    pub caret_slope_denominator: i8,
    pub caret_offset: i8,
    pub min_origin_sb: i8,
    pub min_advance_sb: i8,
    pub max_before_bl: i8,
    pub min_after_bl: i8,
    pub pad1: i8,
    pub pad2: i8,
}

impl ReadScalar for SbitLineMetrics {
    const RAW_BYTE_LEN: usize = 12;

    fn read(bytes: &[u8]) -> Option<Self> {
        let bytes: &[u8; 12] = bytes.get(..12)?.try_into().ok()?;
        Some(SbitLineMetrics {
            ascender: bytes[0] as i8,
            descender: bytes[1] as i8,
            width_max: bytes[2],
            caret_slope_numerator: bytes[3] as i8,
            caret_slope_denominator: bytes[4] as i8,
            caret_offset: bytes[5] as i8,
            min_origin_sb: bytes[6] as i8,
            min_advance_sb: bytes[7] as i8,
            max_before_bl: bytes[8] as i8,
            min_after_bl: bytes[9] as i8,
            pad1: bytes[10] as i8,
            pad2: bytes[11] as i8,
        })
    }
}

/// Metrics for both layout directions, 8 bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BigGlyphMetrics {
    pub height: u8,
    pub width: u8,
    pub hori_bearing_x: i8,
    pub hori_bearing_y: i8,
    pub hori_advance: u8,
    pub vert_bearing_x: i8,
    pub vert_bearing_y: i8,
    pub vert_advance: u8,
}

impl ReadScalar for BigGlyphMetrics {
    const RAW_BYTE_LEN: usize = 8;

    fn read(bytes: &[u8]) -> Option<Self> {
        let bytes: &[u8; 8] = bytes.get(..8)?.try_into().ok()?;
        Some(BigGlyphMetrics {
            height: bytes[0],
            width: bytes[1],
            hori_bearing_x: bytes[2] as i8,
            hori_bearing_y: bytes[3] as i8,
            hori_advance: bytes[4],
            vert_bearing_x: bytes[5] as i8,
            vert_bearing_y: bytes[6] as i8,
            vert_advance: bytes[7],
        })
    }
}

/// Metrics for one layout direction, 5 bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SmallGlyphMetrics {
    pub height: u8,
    pub width: u8,
    pub bearing_x: i8,
    pub bearing_y: i8,
    pub advance: u8,
}

impl ReadScalar for SmallGlyphMetrics {
    const RAW_BYTE_LEN: usize = 5;

    fn read(bytes: &[u8]) -> Option<Self> {
        let bytes: &[u8; 5] = bytes.get(..5)?.try_into().ok()?;
        Some(SmallGlyphMetrics {
            height: bytes[0],
            width: bytes[1],
            bearing_x: bytes[2] as i8,
            bearing_y: bytes[3] as i8,
            advance: bytes[4],
        })
    }
}

/// One strike: the BitmapSize header plus its resolved index subtables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitmapSize {
    pub hori: SbitLineMetrics,
    pub vert: SbitLineMetrics,
    pub start_glyph: GlyphId,
    pub end_glyph: GlyphId,
    pub ppem_x: u8,
    pub ppem_y: u8,
    pub bit_depth: u8,
    pub flags: i8,
    pub subtables: Vec<IndexSubtableRecord>,
}

impl BitmapSize {
    /// Flatten this strike's index subtables into locator entries.
    pub fn locations(&self) -> Vec<BitmapLocation> {
        let mut out = Vec::new();
        for record in &self.subtables {
            record.locations(&mut out);
        }
        out
    }

    /// The locator entry for one glyph, if the strike covers it.
    pub fn location_of(&self, glyph: GlyphId) -> Option<BitmapLocation> {
        self.subtables
            .iter()
            .filter(|record| record.first_glyph <= glyph && glyph <= record.last_glyph)
            .find_map(|record| {
                let mut entries = Vec::new();
                record.locations(&mut entries);
                entries.into_iter().find(|entry| entry.glyph == glyph)
            })
    }
}

/// A glyph range and the index subtable locating its image data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexSubtableRecord {
    pub first_glyph: GlyphId,
    pub last_glyph: GlyphId,
    /// Format of the image data in the companion data table.
    pub image_format: u16,
    /// Offset of this range's image data from the start of the data table.
    pub image_data_offset: u32,
    pub subtable: IndexSubtable,
}

/// The per-range glyph locator, formats 1 to 5.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IndexSubtable {
    /// Format 1: variable metrics, 4-byte offsets with end sentinel.
    Offsets32(Vec<u32>),
    /// Format 2: constant metrics and image size.
    ConstantMetrics {
        image_size: u32,
        metrics: BigGlyphMetrics,
    },
    /// Format 3: variable metrics, 2-byte offsets with end sentinel.
    Offsets16(Vec<u16>),
    /// Format 4: sparse glyph codes, offset pairs with end sentinel.
    SparseOffsets(Vec<GlyphIdOffsetPair>),
    /// Format 5: constant metrics, sparse glyph codes.
    SparseConstantMetrics {
        image_size: u32,
        metrics: BigGlyphMetrics,
        glyphs: Vec<GlyphId>,
    },
    /// Recognized but unknown index format; locates nothing.
    Unsupported { index_format: u16 },
}

/// A sparse-range entry: glyph present and its data offset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GlyphIdOffsetPair {
    pub glyph: GlyphId,
    pub offset: u16,
}

impl ReadScalar for GlyphIdOffsetPair {
    const RAW_BYTE_LEN: usize = 4;

    fn read(bytes: &[u8]) -> Option<Self> {
        Some(GlyphIdOffsetPair {
            glyph: GlyphId::read(bytes)?,
            offset: u16::read(bytes.get(2..)?)?,
        })
    }
}

/// One glyph image located in the companion data table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BitmapLocation {
    pub glyph: GlyphId,
    /// Offset from the start of the data table.
    pub data_offset: u32,
    pub data_len: u32,
    pub image_format: u16,
}

impl IndexSubtableRecord {
    /// Append one locator entry per present glyph in this range.
    ///
    /// Zero-length entries in the variable-metrics formats mark missing
    /// glyphs and are skipped, as are entries whose data offset would
    /// overflow u32.
    pub fn locations(&self, out: &mut Vec<BitmapLocation>) {
        match &self.subtable {
            IndexSubtable::Offsets32(offsets) => {
                for (n, pair) in offsets.windows(2).enumerate() {
                    let len = pair[1].saturating_sub(pair[0]);
                    let Some(data_offset) = self.image_data_offset.checked_add(pair[0]) else {
                        continue;
                    };
                    if len == 0 {
                        continue;
                    }
                    out.push(BitmapLocation {
                        glyph: GlyphId::new(self.first_glyph.to_u16() + n as u16),
                        data_offset,
                        data_len: len,
                        image_format: self.image_format,
                    });
                }
            }
            IndexSubtable::Offsets16(offsets) => {
                for (n, pair) in offsets.windows(2).enumerate() {
                    let len = pair[1].saturating_sub(pair[0]);
                    let Some(data_offset) =
                        self.image_data_offset.checked_add(pair[0] as u32)
                    else {
                        continue;
                    };
                    if len == 0 {
                        continue;
                    }
                    out.push(BitmapLocation {
                        glyph: GlyphId::new(self.first_glyph.to_u16() + n as u16),
                        data_offset,
                        data_len: len as u32,
                        image_format: self.image_format,
                    });
                }
            }
            IndexSubtable::ConstantMetrics { image_size, .. } => {
                let mut offset = self.image_data_offset;
                for raw in self.first_glyph.to_u16()..=self.last_glyph.to_u16() {
                    out.push(BitmapLocation {
                        glyph: GlyphId::new(raw),
                        data_offset: offset,
                        data_len: *image_size,
                        image_format: self.image_format,
                    });
                    offset = match offset.checked_add(*image_size) {
                        Some(next) => next,
                        None => break,
                    };
                }
            }
            IndexSubtable::SparseOffsets(pairs) => {
                for pair in pairs.windows(2) {
                    let len = pair[1].offset.saturating_sub(pair[0].offset);
                    let Some(data_offset) =
                        self.image_data_offset.checked_add(pair[0].offset as u32)
                    else {
                        continue;
                    };
                    if len == 0 {
                        continue;
                    }
                    out.push(BitmapLocation {
                        glyph: pair[0].glyph,
                        data_offset,
                        data_len: len as u32,
                        image_format: self.image_format,
                    });
                }
            }
            IndexSubtable::SparseConstantMetrics {
                image_size, glyphs, ..
            } => {
                let mut offset = self.image_data_offset;
                for glyph in glyphs {
                    out.push(BitmapLocation {
                        glyph: *glyph,
                        data_offset: offset,
                        data_len: *image_size,
                        image_format: self.image_format,
                    });
                    offset = match offset.checked_add(*image_size) {
                        Some(next) => next,
                        None => break,
                    };
                }
            }
            IndexSubtable::Unsupported { .. } => {}
        }
    }
}

/// Read the strike array of a CBLC/EBLC table.
///
/// `data` is the whole locator table; offsets within strikes are relative
/// to its start.
pub(crate) fn read_strikes(data: FontData, table: &'static str) -> Result<Vec<BitmapSize>, ReadError> {
    let mut cursor = data.cursor();
    // major/minor already validated by the caller
    cursor.advance_by(4);
    let num_sizes: u32 = cursor.read()?;
    if num_sizes > MAX_BITMAP_STRIKES {
        return Err(ReadError::MalformedData("too many bitmap strikes"));
    }
    let mut headers = Vec::with_capacity(num_sizes as usize);
    for _ in 0..num_sizes {
        let index_subtable_array_offset: u32 = cursor.read()?;
        cursor.advance_by(4); // indexTablesSize
        let number_of_index_subtables: u32 = cursor.read()?;
        cursor.advance_by(4); // colorRef
        let hori: SbitLineMetrics = cursor.read()?;
        let vert: SbitLineMetrics = cursor.read()?;
        let start_glyph: GlyphId = cursor.read()?;
        let end_glyph: GlyphId = cursor.read()?;
        let ppem_x: u8 = cursor.read()?;
        let ppem_y: u8 = cursor.read()?;
        let bit_depth: u8 = cursor.read()?;
        let flags = cursor.read::<u8>()? as i8;
        headers.push((
            index_subtable_array_offset,
            number_of_index_subtables,
            BitmapSize {
                hori,
                vert,
                start_glyph,
                end_glyph,
                ppem_x,
                ppem_y,
                bit_depth,
                flags,
                subtables: Vec::new(),
            },
        ));
    }
    let mut strikes = Vec::with_capacity(headers.len());
    for (array_offset, subtable_count, mut strike) in headers {
        let array_data = data
            .split_off(array_offset as usize)
            .ok_or(ReadError::OutOfBounds)?;
        let mut array_cursor = array_data.cursor();
        // cap the preallocation; a hostile count still fails on the read
        let mut ranges = Vec::with_capacity(subtable_count.min(1024) as usize);
        for _ in 0..subtable_count {
            let first_glyph: GlyphId = array_cursor.read()?;
            let last_glyph: GlyphId = array_cursor.read()?;
            let additional_offset: u32 = array_cursor.read()?;
            ranges.push((first_glyph, last_glyph, additional_offset));
        }
        for (first_glyph, last_glyph, additional_offset) in ranges {
            let subtable_data = array_data
                .split_off(additional_offset as usize)
                .ok_or(ReadError::OutOfBounds)?;
            strike
                .subtables
                .push(read_index_subtable(subtable_data, table, first_glyph, last_glyph)?);
        }
        strikes.push(strike);
    }
    Ok(strikes)
}

fn read_index_subtable(
    data: FontData,
    table: &'static str,
    first_glyph: GlyphId,
    last_glyph: GlyphId,
) -> Result<IndexSubtableRecord, ReadError> {
    if last_glyph < first_glyph {
        return Err(ReadError::MalformedData("index subtable range is inverted"));
    }
    let mut cursor = data.cursor();
    let index_format: u16 = cursor.read()?;
    let image_format: u16 = cursor.read()?;
    let image_data_offset: u32 = cursor.read()?;
    let range_len = (last_glyph.to_u16() - first_glyph.to_u16()) as usize + 1;
    let subtable = match index_format {
        // variable metrics formats carry one sentinel offset past the range
        1 => IndexSubtable::Offsets32(cursor.read_array(range_len + 1)?),
        2 => IndexSubtable::ConstantMetrics {
            image_size: cursor.read()?,
            metrics: cursor.read()?,
        },
        3 => IndexSubtable::Offsets16(cursor.read_array(range_len + 1)?),
        4 => {
            let num_glyphs: u32 = cursor.read()?;
            IndexSubtable::SparseOffsets(cursor.read_array(num_glyphs as usize + 1)?)
        }
        5 => {
            let image_size: u32 = cursor.read()?;
            let metrics: BigGlyphMetrics = cursor.read()?;
            let num_glyphs: u32 = cursor.read()?;
            IndexSubtable::SparseConstantMetrics {
                image_size,
                metrics,
                glyphs: cursor.read_array(num_glyphs as usize)?,
            }
        }
        other => {
            log::warn!("{table}: index subtable format {other} is not supported");
            IndexSubtable::Unsupported {
                index_format: other,
            }
        }
    };
    Ok(IndexSubtableRecord {
        first_glyph,
        last_glyph,
        image_format,
        image_data_offset,
        subtable,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn scalar_layouts() {
        let metrics = BigGlyphMetrics::read(&[16, 14, 0xFE, 12, 15, 0, 0, 17]).unwrap();
        assert_eq!(metrics.hori_bearing_x, -2);
        assert_eq!(metrics.hori_advance, 15);
        assert_eq!(metrics.vert_advance, 17);
        assert!(SmallGlyphMetrics::read(&[1, 2, 3]).is_none());
    }

    #[test]
    fn offset16_range_skips_missing_glyphs() {
        let record = IndexSubtableRecord {
            first_glyph: GlyphId::new(10),
            last_glyph: GlyphId::new(12),
            image_format: 17,
            image_data_offset: 1000,
            // glyph 11 has no data
            subtable: IndexSubtable::Offsets16(vec![0, 40, 40, 90]),
        };
        let mut out = Vec::new();
        record.locations(&mut out);
        assert_eq!(
            out,
            vec![
                BitmapLocation {
                    glyph: GlyphId::new(10),
                    data_offset: 1000,
                    data_len: 40,
                    image_format: 17,
                },
                BitmapLocation {
                    glyph: GlyphId::new(12),
                    data_offset: 1040,
                    data_len: 50,
                    image_format: 17,
                },
            ]
        );
    }

    #[test]
    fn constant_metrics_step_by_image_size() {
        let record = IndexSubtableRecord {
            first_glyph: GlyphId::new(4),
            last_glyph: GlyphId::new(5),
            image_format: 5,
            image_data_offset: 0,
            subtable: IndexSubtable::ConstantMetrics {
                image_size: 32,
                metrics: BigGlyphMetrics::default(),
            },
        };
        let mut out = Vec::new();
        record.locations(&mut out);
        assert_eq!(out.len(), 2);
        assert_eq!(out[1].glyph, GlyphId::new(5));
        assert_eq!(out[1].data_offset, 32);
        assert_eq!(out[1].data_len, 32);
    }

    #[test]
    fn offset_overflow_entries_are_skipped() {
        let record = IndexSubtableRecord {
            first_glyph: GlyphId::new(10),
            last_glyph: GlyphId::new(11),
            image_format: 17,
            image_data_offset: u32::MAX - 4,
            subtable: IndexSubtable::Offsets16(vec![0, 8, 16]),
        };
        let mut out = Vec::new();
        record.locations(&mut out);
        // only the first entry's data offset still fits in u32
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].glyph, GlyphId::new(10));
        assert_eq!(out[0].data_offset, u32::MAX - 4);
    }

    #[test]
    fn constant_metrics_offset_overflow_stops_the_walk() {
        let record = IndexSubtableRecord {
            first_glyph: GlyphId::new(1),
            last_glyph: GlyphId::new(4),
            image_format: 1,
            image_data_offset: u32::MAX - 40,
            subtable: IndexSubtable::ConstantMetrics {
                image_size: 32,
                metrics: BigGlyphMetrics::default(),
            },
        };
        let mut out = Vec::new();
        record.locations(&mut out);
        // the walk ends where the next step would overflow
        assert_eq!(out.len(), 2);
        assert_eq!(out[1].data_offset, u32::MAX - 8);
    }

    #[test]
    fn sparse_offsets_use_sentinel_for_length() {
        let record = IndexSubtableRecord {
            first_glyph: GlyphId::new(1),
            last_glyph: GlyphId::new(90),
            image_format: 18,
            image_data_offset: 16,
            subtable: IndexSubtable::SparseOffsets(vec![
                GlyphIdOffsetPair { glyph: GlyphId::new(7), offset: 0 },
                GlyphIdOffsetPair { glyph: GlyphId::new(90), offset: 64 },
                GlyphIdOffsetPair { glyph: GlyphId::NOTDEF, offset: 100 },
            ]),
        };
        let mut out = Vec::new();
        record.locations(&mut out);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].glyph, GlyphId::new(7));
        assert_eq!(out[0].data_len, 64);
        assert_eq!(out[1].data_offset, 80);
        assert_eq!(out[1].data_len, 36);
    }
}
