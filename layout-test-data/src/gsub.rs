//! Complete GSUB tables.
//!
//! Each table carries the same 'latn' script and 'liga' feature scaffold
//! (feature 0 naming lookup 0) ahead of the lookup under test.

/// GSUB 1.0 with one type 1 format 1 lookup: coverage {5}, delta +2.
#[rustfmt::skip]
pub static SINGLE_DELTA: &[u8] = &[
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
    b'l', b'i', b'g', b'a', // feature record: tag
    0x00, 0x08,             //                 offset 8
    // Feature (offset 38)
    0x00, 0x00, // featureParamsOffset: null
    0x00, 0x01, // lookupIndexCount 1
    0x00, 0x00, // lookupListIndices[0] = 0
    // LookupList (offset 44)
    0x00, 0x01, // lookupCount 1
    0x00, 0x04, // lookupOffsets[0] = 4
    // Lookup 0 (offset 48)
    0x00, 0x01, // lookupType 1 (single)
    0x00, 0x00, // lookupFlag
    0x00, 0x01, // subTableCount 1
    0x00, 0x08, // subtableOffsets[0] = 8
    // SingleSubst format 1 (offset 56)
    0x00, 0x01, // format 1
    0x00, 0x06, // coverageOffset 6
    0x00, 0x02, // deltaGlyphID +2
    // Coverage (offset 62)
    0x00, 0x01, // format 1
    0x00, 0x01, // glyphCount 1
    0x00, 0x05, // glyph 5
];

/// GSUB 1.0 with one type 4 lookup: glyphs 10 11 12 ligate to glyph 42.
#[rustfmt::skip]
pub static LIGATURE: &[u8] = &[
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
    b'l', b'i', b'g', b'a', // feature record: tag
    0x00, 0x08,             //                 offset 8
    // Feature (offset 38)
    0x00, 0x00, // featureParamsOffset: null
    0x00, 0x01, // lookupIndexCount 1
    0x00, 0x00, // lookupListIndices[0] = 0
    // LookupList (offset 44)
    0x00, 0x01, // lookupCount 1
    0x00, 0x04, // lookupOffsets[0] = 4
    // Lookup 0 (offset 48)
    0x00, 0x04, // lookupType 4 (ligature)
    0x00, 0x00, // lookupFlag
    0x00, 0x01, // subTableCount 1
    0x00, 0x08, // subtableOffsets[0] = 8
    // LigatureSubst format 1 (offset 56)
    0x00, 0x01, // format 1
    0x00, 0x14, // coverageOffset 20
    0x00, 0x01, // ligatureSetCount 1
    0x00, 0x08, // ligatureSetOffsets[0] = 8
    // LigatureSet (offset 64)
    0x00, 0x01, // ligatureCount 1
    0x00, 0x04, // ligatureOffsets[0] = 4
    // Ligature (offset 68)
    0x00, 0x2A, // ligatureGlyph 42
    0x00, 0x03, // componentCount 3
    0x00, 0x0B, // components[1] = 11
    0x00, 0x0C, // components[2] = 12
    // Coverage (offset 76)
    0x00, 0x01, // format 1
    0x00, 0x01, // glyphCount 1
    0x00, 0x0A, // glyph 10
];

/// [`SINGLE_DELTA`]'s lookup wrapped in a type 7 extension subtable.
#[rustfmt::skip]
pub static SINGLE_DELTA_VIA_EXTENSION: &[u8] = &[
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
    b'l', b'i', b'g', b'a', // feature record: tag
    0x00, 0x08,             //                 offset 8
    // Feature (offset 38)
    0x00, 0x00, // featureParamsOffset: null
    0x00, 0x01, // lookupIndexCount 1
    0x00, 0x00, // lookupListIndices[0] = 0
    // LookupList (offset 44)
    0x00, 0x01, // lookupCount 1
    0x00, 0x04, // lookupOffsets[0] = 4
    // Lookup 0 (offset 48)
    0x00, 0x07, // lookupType 7 (extension)
    0x00, 0x00, // lookupFlag
    0x00, 0x01, // subTableCount 1
    0x00, 0x08, // subtableOffsets[0] = 8
    // ExtensionSubst format 1 (offset 56)
    0x00, 0x01,             // format 1
    0x00, 0x01,             // extensionLookupType 1
    0x00, 0x00, 0x00, 0x08, // extensionOffset 8
    // SingleSubst format 1 (offset 64)
    0x00, 0x01, // format 1
    0x00, 0x06, // coverageOffset 6
    0x00, 0x02, // deltaGlyphID +2
    // Coverage (offset 70)
    0x00, 0x01, // format 1
    0x00, 0x01, // glyphCount 1
    0x00, 0x05, // glyph 5
];

/// A type 7 extension claiming to wrap another extension; must not parse.
#[rustfmt::skip]
pub static NESTED_EXTENSION: &[u8] = &[
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
    b'l', b'i', b'g', b'a', // feature record: tag
    0x00, 0x08,             //                 offset 8
    // Feature (offset 38)
    0x00, 0x00, // featureParamsOffset: null
    0x00, 0x01, // lookupIndexCount 1
    0x00, 0x00, // lookupListIndices[0] = 0
    // LookupList (offset 44)
    0x00, 0x01, // lookupCount 1
    0x00, 0x04, // lookupOffsets[0] = 4
    // Lookup 0 (offset 48)
    0x00, 0x07, // lookupType 7 (extension)
    0x00, 0x00, // lookupFlag
    0x00, 0x01, // subTableCount 1
    0x00, 0x08, // subtableOffsets[0] = 8
    // ExtensionSubst format 1 (offset 56)
    0x00, 0x01,             // format 1
    0x00, 0x07,             // extensionLookupType 7: invalid
    0x00, 0x00, 0x00, 0x08, // extensionOffset 8
];

/// GSUB 1.0 with a chained context (format 3) in lookup 0 and a single
/// substitution (delta +2 over {5}) in lookup 1, invoked by the chain.
/// The chain matches backtrack {1}, input {5}, lookahead {9}.
#[rustfmt::skip]
pub static CHAIN_CONTEXT_FORMAT3: &[u8] = &[
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
    b'c', b'a', b'l', b't', // feature record: tag
    0x00, 0x08,             //                 offset 8
    // Feature (offset 38): only the chain lookup is feature-visible
    0x00, 0x00, // featureParamsOffset: null
    0x00, 0x01, // lookupIndexCount 1
    0x00, 0x00, // lookupListIndices[0] = 0
    // LookupList (offset 44)
    0x00, 0x02, // lookupCount 2
    0x00, 0x06, // lookupOffsets[0] = 6
    0x00, 0x34, // lookupOffsets[1] = 52
    // Lookup 0 (offset 50)
    0x00, 0x06, // lookupType 6 (chained context)
    0x00, 0x00, // lookupFlag
    0x00, 0x01, // subTableCount 1
    0x00, 0x08, // subtableOffsets[0] = 8
    // ChainContext format 3 (offset 58)
    0x00, 0x03, // format 3
    0x00, 0x01, // backtrackGlyphCount 1
    0x00, 0x14, // backtrackCoverageOffsets[0] = 20
    0x00, 0x01, // inputGlyphCount 1
    0x00, 0x1A, // inputCoverageOffsets[0] = 26
    0x00, 0x01, // lookaheadGlyphCount 1
    0x00, 0x20, // lookaheadCoverageOffsets[0] = 32
    0x00, 0x01, // seqLookupCount 1
    0x00, 0x00, // record 0: sequenceIndex 0
    0x00, 0x01, //           lookupListIndex 1
    // backtrack Coverage (offset 78)
    0x00, 0x01, // format 1
    0x00, 0x01, // glyphCount 1
    0x00, 0x01, // glyph 1
    // input Coverage (offset 84)
    0x00, 0x01, // format 1
    0x00, 0x01, // glyphCount 1
    0x00, 0x05, // glyph 5
    // lookahead Coverage (offset 90)
    0x00, 0x01, // format 1
    0x00, 0x01, // glyphCount 1
    0x00, 0x09, // glyph 9
    // Lookup 1 (offset 96)
    0x00, 0x01, // lookupType 1 (single)
    0x00, 0x00, // lookupFlag
    0x00, 0x01, // subTableCount 1
    0x00, 0x08, // subtableOffsets[0] = 8
    // SingleSubst format 1 (offset 104)
    0x00, 0x01, // format 1
    0x00, 0x06, // coverageOffset 6
    0x00, 0x02, // deltaGlyphID +2
    // Coverage (offset 110)
    0x00, 0x01, // format 1
    0x00, 0x01, // glyphCount 1
    0x00, 0x05, // glyph 5
];
