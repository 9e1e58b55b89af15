//! CBLC/EBLC strikes and CBDT glyph data.

/// CBLC 3.0 with a single 32 ppem color strike. Its one format 3 index
/// subtable spans glyphs 10..=12; equal adjacent offsets leave glyph 11
/// without data.
#[rustfmt::skip]
pub static CBLC_ONE_STRIKE: &[u8] = &[
    0x00, 0x03, 0x00, 0x00, // version 3.0
    0x00, 0x00, 0x00, 0x01, // numSizes 1
    // BitmapSize (offset 8)
    0x00, 0x00, 0x00, 0x38, // indexSubTableArrayOffset 56
    0x00, 0x00, 0x00, 0x18, // indexTablesSize 24
    0x00, 0x00, 0x00, 0x01, // numberOfIndexSubTables 1
    0x00, 0x00, 0x00, 0x00, // colorRef
    // hori SbitLineMetrics
    0x1C, 0xF8, 0x20, 0x01, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // vert SbitLineMetrics
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x0A, // startGlyphIndex 10
    0x00, 0x0C, // endGlyphIndex 12
    0x20,       // ppemX 32
    0x20,       // ppemY 32
    0x20,       // bitDepth 32
    0x01,       // flags: horizontal metrics
    // IndexSubTableArray (offset 56)
    0x00, 0x0A,             // firstGlyphIndex 10
    0x00, 0x0C,             // lastGlyphIndex 12
    0x00, 0x00, 0x00, 0x08, // additionalOffsetToIndexSubtable 8
    // IndexSubTable format 3 (offset 64)
    0x00, 0x03,             // indexFormat 3
    0x00, 0x11,             // imageFormat 17
    0x00, 0x00, 0x00, 0x04, // imageDataOffset 4
    0x00, 0x00, // offsets[0] = 0   (glyph 10)
    0x00, 0x28, // offsets[1] = 40  (glyph 11: empty, no data)
    0x00, 0x28, // offsets[2] = 40  (glyph 12)
    0x00, 0x5A, // offsets[3] = 90  (sentinel)
];

/// EBLC 2.0 with a single monochrome strike: one format 2 (constant
/// metrics) index subtable covering only glyph 10.
#[rustfmt::skip]
pub static EBLC_ONE_STRIKE: &[u8] = &[
    0x00, 0x02, 0x00, 0x00, // version 2.0
    0x00, 0x00, 0x00, 0x01, // numSizes 1
    // BitmapSize (offset 8)
    0x00, 0x00, 0x00, 0x38, // indexSubTableArrayOffset 56
    0x00, 0x00, 0x00, 0x1C, // indexTablesSize 28
    0x00, 0x00, 0x00, 0x01, // numberOfIndexSubTables 1
    0x00, 0x00, 0x00, 0x00, // colorRef
    // hori SbitLineMetrics
    0x0D, 0xFD, 0x10, 0x01, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // vert SbitLineMetrics
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x0A, // startGlyphIndex 10
    0x00, 0x0A, // endGlyphIndex 10
    0x10,       // ppemX 16
    0x10,       // ppemY 16
    0x01,       // bitDepth 1
    0x01,       // flags: horizontal metrics
    // IndexSubTableArray (offset 56)
    0x00, 0x0A,             // firstGlyphIndex 10
    0x00, 0x0A,             // lastGlyphIndex 10
    0x00, 0x00, 0x00, 0x08, // additionalOffsetToIndexSubtable 8
    // IndexSubTable format 2 (offset 64)
    0x00, 0x02,             // indexFormat 2
    0x00, 0x01,             // imageFormat 1
    0x00, 0x00, 0x00, 0x00, // imageDataOffset 0
    0x00, 0x00, 0x00, 0x20, // imageSize 32
    // BigGlyphMetrics
    0x10, // height 16
    0x10, // width 16
    0x00, // horiBearingX 0
    0x0E, // horiBearingY 14
    0x11, // horiAdvance 17
    0x00, // vertBearingX 0
    0x00, // vertBearingY 0
    0x11, // vertAdvance 17
];

/// Byte offset of the format 17 record inside [`CBDT_SAMPLE`].
pub const CBDT_FORMAT17_OFFSET: u32 = 4;
/// Byte length of the format 17 record inside [`CBDT_SAMPLE`].
pub const CBDT_FORMAT17_LEN: u32 = 21;

/// CBDT 3.0 holding one format 17 glyph record: small metrics plus a
/// truncated PNG stream.
#[rustfmt::skip]
pub static CBDT_SAMPLE: &[u8] = &[
    0x00, 0x03, 0x00, 0x00, // version 3.0
    // format 17 record (offset 4)
    0x20, // height 32
    0x20, // width 32
    0x02, // bearingX 2
    0x1E, // bearingY 30
    0x21, // advance 33
    0x00, 0x00, 0x00, 0x0C, // dataLen 12
    0x89, 0x50, 0x4E, 0x47, // PNG signature
    0x0D, 0x0A, 0x1A, 0x0A,
    0x00, 0x00, 0x00, 0x0D, // first chunk length
];
