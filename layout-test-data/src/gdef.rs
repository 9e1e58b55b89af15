//! GDEF tables.

/// GDEF 1.0: glyph 100 is a base, glyph 200 a mark (attach class 1),
/// and ligature glyph 300 has one caret at coordinate 250.
#[rustfmt::skip]
pub static SIMPLE: &[u8] = &[
    0x00, 0x01, 0x00, 0x00, // version 1.0
    0x00, 0x0C,             // glyphClassDefOffset 12
    0x00, 0x00,             // attachListOffset: null
    0x00, 0x1C,             // ligCaretListOffset 28
    0x00, 0x30,             // markAttachClassDefOffset 48
    // glyph ClassDef (offset 12)
    0x00, 0x02, // format 2
    0x00, 0x02, // classRangeCount 2
    0x00, 0x64, // range 0: start 100
    0x00, 0x64, //          end 100
    0x00, 0x01, //          class 1 (base)
    0x00, 0xC8, // range 1: start 200
    0x00, 0xC8, //          end 200
    0x00, 0x03, //          class 3 (mark)
    // LigCaretList (offset 28)
    0x00, 0x0E, // coverageOffset 14
    0x00, 0x01, // ligGlyphCount 1
    0x00, 0x06, // ligGlyphOffsets[0] = 6
    // LigGlyph (offset 34)
    0x00, 0x01, // caretCount 1
    0x00, 0x04, // caretValueOffsets[0] = 4
    // CaretValue (offset 38)
    0x00, 0x01, // format 1
    0x00, 0xFA, // coordinate 250
    // ligature Coverage (offset 42)
    0x00, 0x01, // format 1
    0x00, 0x01, // glyphCount 1
    0x01, 0x2C, // glyph 300
    // mark attach ClassDef (offset 48)
    0x00, 0x02, // format 2
    0x00, 0x01, // classRangeCount 1
    0x00, 0xC8, // range 0: start 200
    0x00, 0xC8, //          end 200
    0x00, 0x01, //          class 1
];
