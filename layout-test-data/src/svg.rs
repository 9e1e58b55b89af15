//! SVG tables.

/// An SVG table with two document entries: glyphs 1..=2 share a plain
/// XML document and glyph 5 has a gzip-compressed one.
#[rustfmt::skip]
pub static TWO_DOCUMENTS: &[u8] = &[
    0x00, 0x00,             // version 0
    0x00, 0x00, 0x00, 0x0A, // svgDocumentListOffset 10
    0x00, 0x00, 0x00, 0x00, // reserved
    // SVGDocumentList (offset 10)
    0x00, 0x02,             // numEntries 2
    0x00, 0x01,             // entry 0: startGlyphID 1
    0x00, 0x02,             //          endGlyphID 2
    0x00, 0x00, 0x00, 0x1A, //          svgDocOffset 26
    0x00, 0x00, 0x00, 0x06, //          svgDocLength 6
    0x00, 0x05,             // entry 1: startGlyphID 5
    0x00, 0x05,             //          endGlyphID 5
    0x00, 0x00, 0x00, 0x20, //          svgDocOffset 32
    0x00, 0x00, 0x00, 0x06, //          svgDocLength 6
    // plain document (list offset 26)
    b'<', b's', b'v', b'g', b'/', b'>',
    // gzip document (list offset 32)
    0x1F, 0x8B, // gzip magic
    0x08, 0x00, 0x00, 0x00,
];
