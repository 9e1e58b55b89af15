//! JSTF tables.

/// JSTF 1.0 with one 'arab' script: extender glyph 5 and a default
/// language system carrying one priority level whose only non-null
/// deck offset is shrinkage-enable GPOS.
#[rustfmt::skip]
pub static SIMPLE: &[u8] = &[
    0x00, 0x01, 0x00, 0x00, // version 1.0
    0x00, 0x01,             // jstfScriptCount 1
    b'a', b'r', b'a', b'b', // script record: tag
    0x00, 0x0C,             //                offset 12
    // JstfScript (offset 12)
    0x00, 0x06, // extenderGlyphOffset 6
    0x00, 0x0A, // defJstfLangSysOffset 10
    0x00, 0x00, // jstfLangSysCount 0
    // ExtenderGlyph (offset 18)
    0x00, 0x01, // glyphCount 1
    0x00, 0x05, // glyph 5
    // JstfLangSys (offset 22)
    0x00, 0x01, // jstfPriorityCount 1
    0x00, 0x04, // jstfPriorityOffsets[0] = 4
    // JstfPriority (offset 26)
    0x00, 0x00, // shrinkageEnableGsub: null
    0x00, 0x00, // shrinkageDisableGsub: null
    0x00, 0xAA, // shrinkageEnableGpos 0x00AA
    0x00, 0x00, // shrinkageDisableGpos: null
    0x00, 0x00, // shrinkageJstfMax: null
    0x00, 0x00, // extensionEnableGsub: null
    0x00, 0x00, // extensionDisableGsub: null
    0x00, 0x00, // extensionEnableGpos: null
    0x00, 0x00, // extensionDisableGpos: null
    0x00, 0x00, // extensionJstfMax: null
];
