//! Complete GPOS tables.

/// GPOS 1.0 with one type 4 lookup: mark {200} (class 0, anchor 0,0)
/// attaches to base {100} at anchor (0, 100).
#[rustfmt::skip]
pub static MARK_TO_BASE: &[u8] = &[
    0x00, 0x01, 0x00, 0x00, // version 1.0
    0x00, 0x0A,             // scriptListOffset 10
    0x00, 0x1E,             // featureListOffset 30
    0x00, 0x2C,             // lookupListOffset 44
    // ScriptList (offset 10)
    0x00, 0x01,             // scriptCount 1
    b'l', b'a', b't', b'n', // script record: tag
    0x00, 0x08,             //                offset 8
    // Script (offset 18)
    0x00, 0x04, // defaultLangSysOffset 4
    0x00, 0x00, // langSysCount 0
    // LangSys (offset 22)
    0x00, 0x00, // lookupOrderOffset
    0xFF, 0xFF, // requiredFeatureIndex: none
    0x00, 0x01, // featureIndexCount 1
    0x00, 0x00, // featureIndices[0] = 0
    // FeatureList (offset 30)
    0x00, 0x01,             // featureCount 1
    b'm', b'a', b'r', b'k', // feature record: tag
    0x00, 0x08,             //                 offset 8
    // Feature (offset 38)
    0x00, 0x00, // featureParamsOffset: null
    0x00, 0x01, // lookupIndexCount 1
    0x00, 0x00, // lookupListIndices[0] = 0
    // LookupList (offset 44)
    0x00, 0x01, // lookupCount 1
    0x00, 0x04, // lookupOffsets[0] = 4
    // Lookup 0 (offset 48)
    0x00, 0x04, // lookupType 4 (mark-to-base)
    0x00, 0x00, // lookupFlag
    0x00, 0x01, // subTableCount 1
    0x00, 0x08, // subtableOffsets[0] = 8
    // MarkBasePos format 1 (offset 56)
    0x00, 0x01, // format 1
    0x00, 0x0C, // markCoverageOffset 12
    0x00, 0x12, // baseCoverageOffset 18
    0x00, 0x01, // markClassCount 1
    0x00, 0x18, // markArrayOffset 24
    0x00, 0x24, // baseArrayOffset 36
    // mark Coverage (offset 68)
    0x00, 0x01, // format 1
    0x00, 0x01, // glyphCount 1
    0x00, 0xC8, // glyph 200
    // base Coverage (offset 74)
    0x00, 0x01, // format 1
    0x00, 0x01, // glyphCount 1
    0x00, 0x64, // glyph 100
    // MarkArray (offset 80)
    0x00, 0x01, // markCount 1
    0x00, 0x00, // record 0: markClass 0
    0x00, 0x06, //           markAnchorOffset 6
    // mark Anchor (offset 86)
    0x00, 0x01, // format 1
    0x00, 0x00, // x 0
    0x00, 0x00, // y 0
    // BaseArray (offset 92)
    0x00, 0x01, // baseCount 1
    0x00, 0x04, // baseAnchorOffsets[0][class 0] = 4
    // base Anchor (offset 96)
    0x00, 0x01, // format 1
    0x00, 0x00, // x 0
    0x00, 0x64, // y 100
];

/// [`MARK_TO_BASE`] with the mark's anchor offset pointing far past the
/// end of the table.
#[rustfmt::skip]
pub static MARK_TO_BASE_BAD_ANCHOR: &[u8] = &[
    0x00, 0x01, 0x00, 0x00, // version 1.0
    0x00, 0x0A,             // scriptListOffset 10
    0x00, 0x1E,             // featureListOffset 30
    0x00, 0x2C,             // lookupListOffset 44
    // ScriptList (offset 10)
    0x00, 0x01,             // scriptCount 1
    b'l', b'a', b't', b'n', // script record: tag
    0x00, 0x08,             //                offset 8
    // Script (offset 18)
    0x00, 0x04, // defaultLangSysOffset 4
    0x00, 0x00, // langSysCount 0
    // LangSys (offset 22)
    0x00, 0x00, // lookupOrderOffset
    0xFF, 0xFF, // requiredFeatureIndex: none
    0x00, 0x01, // featureIndexCount 1
    0x00, 0x00, // featureIndices[0] = 0
    // FeatureList (offset 30)
    0x00, 0x01,             // featureCount 1
    b'm', b'a', b'r', b'k', // feature record: tag
    0x00, 0x08,             //                 offset 8
    // Feature (offset 38)
    0x00, 0x00, // featureParamsOffset: null
    0x00, 0x01, // lookupIndexCount 1
    0x00, 0x00, // lookupListIndices[0] = 0
    // LookupList (offset 44)
    0x00, 0x01, // lookupCount 1
    0x00, 0x04, // lookupOffsets[0] = 4
    // Lookup 0 (offset 48)
    0x00, 0x04, // lookupType 4 (mark-to-base)
    0x00, 0x00, // lookupFlag
    0x00, 0x01, // subTableCount 1
    0x00, 0x08, // subtableOffsets[0] = 8
    // MarkBasePos format 1 (offset 56)
    0x00, 0x01, // format 1
    0x00, 0x0C, // markCoverageOffset 12
    0x00, 0x12, // baseCoverageOffset 18
    0x00, 0x01, // markClassCount 1
    0x00, 0x18, // markArrayOffset 24
    0x00, 0x24, // baseArrayOffset 36
    // mark Coverage (offset 68)
    0x00, 0x01, // format 1
    0x00, 0x01, // glyphCount 1
    0x00, 0xC8, // glyph 200
    // base Coverage (offset 74)
    0x00, 0x01, // format 1
    0x00, 0x01, // glyphCount 1
    0x00, 0x64, // glyph 100
    // MarkArray (offset 80)
    0x00, 0x01, // markCount 1
    0x00, 0x00, // record 0: markClass 0
    0x0F, 0x00, //           markAnchorOffset 3840 (out of bounds)
    // unused mark Anchor (offset 86)
    0x00, 0x01, // format 1
    0x00, 0x00, // x 0
    0x00, 0x00, // y 0
    // BaseArray (offset 92)
    0x00, 0x01, // baseCount 1
    0x00, 0x04, // baseAnchorOffsets[0][class 0] = 4
    // base Anchor (offset 96)
    0x00, 0x01, // format 1
    0x00, 0x00, // x 0
    0x00, 0x64, // y 100
];

/// GPOS 1.0 with a 'kern' feature and one type 2 format 1 lookup:
/// pair (36, 60) shortens the first advance by 80.
#[rustfmt::skip]
pub static PAIR_KERN: &[u8] = &[
    0x00, 0x01, 0x00, 0x00, // version 1.0
    0x00, 0x0A,             // scriptListOffset 10
    0x00, 0x1E,             // featureListOffset 30
    0x00, 0x2C,             // lookupListOffset 44
    // ScriptList (offset 10)
    0x00, 0x01,             // scriptCount 1
    b'l', b'a', b't', b'n', // script record: tag
    0x00, 0x08,             //                offset 8
    // Script (offset 18)
    0x00, 0x04, // defaultLangSysOffset 4
    0x00, 0x00, // langSysCount 0
    // LangSys (offset 22)
    0x00, 0x00, // lookupOrderOffset
    0xFF, 0xFF, // requiredFeatureIndex: none
    0x00, 0x01, // featureIndexCount 1
    0x00, 0x00, // featureIndices[0] = 0
    // FeatureList (offset 30)
    0x00, 0x01,             // featureCount 1
    b'k', b'e', b'r', b'n', // feature record: tag
    0x00, 0x08,             //                 offset 8
    // Feature (offset 38)
    0x00, 0x00, // featureParamsOffset: null
    0x00, 0x01, // lookupIndexCount 1
    0x00, 0x00, // lookupListIndices[0] = 0
    // LookupList (offset 44)
    0x00, 0x01, // lookupCount 1
    0x00, 0x04, // lookupOffsets[0] = 4
    // Lookup 0 (offset 48)
    0x00, 0x02, // lookupType 2 (pair)
    0x00, 0x00, // lookupFlag
    0x00, 0x01, // subTableCount 1
    0x00, 0x08, // subtableOffsets[0] = 8
    // PairPos format 1 (offset 56)
    0x00, 0x01, // format 1
    0x00, 0x12, // coverageOffset 18
    0x00, 0x04, // valueFormat1: X_ADVANCE
    0x00, 0x00, // valueFormat2: none
    0x00, 0x01, // pairSetCount 1
    0x00, 0x0C, // pairSetOffsets[0] = 12
    // PairSet (offset 68)
    0x00, 0x01, // pairValueCount 1
    0x00, 0x3C, // record 0: secondGlyph 60
    0xFF, 0xB0, //           value1.xAdvance -80
    // Coverage (offset 74)
    0x00, 0x01, // format 1
    0x00, 0x01, // glyphCount 1
    0x00, 0x24, // glyph 36
];

/// [`MARK_TO_BASE`]'s lookup wrapped in a type 9 extension subtable.
#[rustfmt::skip]
pub static MARK_TO_BASE_VIA_EXTENSION: &[u8] = &[
    0x00, 0x01, 0x00, 0x00, // version 1.0
    0x00, 0x0A,             // scriptListOffset 10
    0x00, 0x1E,             // featureListOffset 30
    0x00, 0x2C,             // lookupListOffset 44
    // ScriptList (offset 10)
    0x00, 0x01,             // scriptCount 1
    b'l', b'a', b't', b'n', // script record: tag
    0x00, 0x08,             //                offset 8
    // Script (offset 18)
    0x00, 0x04, // defaultLangSysOffset 4
    0x00, 0x00, // langSysCount 0
    // LangSys (offset 22)
    0x00, 0x00, // lookupOrderOffset
    0xFF, 0xFF, // requiredFeatureIndex: none
    0x00, 0x01, // featureIndexCount 1
    0x00, 0x00, // featureIndices[0] = 0
    // FeatureList (offset 30)
    0x00, 0x01,             // featureCount 1
    b'm', b'a', b'r', b'k', // feature record: tag
    0x00, 0x08,             //                 offset 8
    // Feature (offset 38)
    0x00, 0x00, // featureParamsOffset: null
    0x00, 0x01, // lookupIndexCount 1
    0x00, 0x00, // lookupListIndices[0] = 0
    // LookupList (offset 44)
    0x00, 0x01, // lookupCount 1
    0x00, 0x04, // lookupOffsets[0] = 4
    // Lookup 0 (offset 48)
    0x00, 0x09, // lookupType 9 (extension)
    0x00, 0x00, // lookupFlag
    0x00, 0x01, // subTableCount 1
    0x00, 0x08, // subtableOffsets[0] = 8
    // ExtensionPos format 1 (offset 56)
    0x00, 0x01,             // format 1
    0x00, 0x04,             // extensionLookupType 4
    0x00, 0x00, 0x00, 0x08, // extensionOffset 8
    // MarkBasePos format 1 (offset 64)
    0x00, 0x01, // format 1
    0x00, 0x0C, // markCoverageOffset 12
    0x00, 0x12, // baseCoverageOffset 18
    0x00, 0x01, // markClassCount 1
    0x00, 0x18, // markArrayOffset 24
    0x00, 0x24, // baseArrayOffset 36
    // mark Coverage (offset 76)
    0x00, 0x01, // format 1
    0x00, 0x01, // glyphCount 1
    0x00, 0xC8, // glyph 200
    // base Coverage (offset 82)
    0x00, 0x01, // format 1
    0x00, 0x01, // glyphCount 1
    0x00, 0x64, // glyph 100
    // MarkArray (offset 88)
    0x00, 0x01, // markCount 1
    0x00, 0x00, // record 0: markClass 0
    0x00, 0x06, //           markAnchorOffset 6
    // mark Anchor (offset 94)
    0x00, 0x01, // format 1
    0x00, 0x00, // x 0
    0x00, 0x00, // y 0
    // BaseArray (offset 100)
    0x00, 0x01, // baseCount 1
    0x00, 0x04, // baseAnchorOffsets[0][class 0] = 4
    // base Anchor (offset 104)
    0x00, 0x01, // format 1
    0x00, 0x00, // x 0
    0x00, 0x64, // y 100
];
