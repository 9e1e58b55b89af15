//! Coverage, ClassDef and the script/feature lists.

/// Coverage format 2: glyphs 10..=12 (indices 0..=2) and 20..=25
/// (indices 3..=8).
#[rustfmt::skip]
pub static COVERAGE_FORMAT2: &[u8] = &[
    0x00, 0x02, // format 2
    0x00, 0x02, // rangeCount 2
    0x00, 0x0A, // range 0: start 10
    0x00, 0x0C, //          end 12
    0x00, 0x00, //          startCoverageIndex 0
    0x00, 0x14, // range 1: start 20
    0x00, 0x19, //          end 25
    0x00, 0x03, //          startCoverageIndex 3
];

/// ClassDef format 2: glyphs 5..=7 are class 1, glyph 30 is class 2.
#[rustfmt::skip]
pub static CLASS_DEF_FORMAT2: &[u8] = &[
    0x00, 0x02, // format 2
    0x00, 0x02, // classRangeCount 2
    0x00, 0x05, // range 0: start 5
    0x00, 0x07, //          end 7
    0x00, 0x01, //          class 1
    0x00, 0x1E, // range 1: start 30
    0x00, 0x1E, //          end 30
    0x00, 0x02, //          class 2
];

/// A ScriptList with one 'latn' script carrying only a default language
/// system: no required feature, feature index 0.
#[rustfmt::skip]
pub static SCRIPT_LIST: &[u8] = &[
    0x00, 0x01,             // scriptCount 1
    b'l', b'a', b't', b'n', // script record: tag
    0x00, 0x08,             //                offset 8
    // Script (offset 8)
    0x00, 0x04, // defaultLangSysOffset 4
    0x00, 0x00, // langSysCount 0
    // LangSys (script + 4)
    0x00, 0x00, // lookupOrderOffset (reserved)
    0xFF, 0xFF, // requiredFeatureIndex: none
    0x00, 0x01, // featureIndexCount 1
    0x00, 0x00, // featureIndices[0] = 0
];

/// A FeatureList with a single 'liga' feature naming lookup 0.
#[rustfmt::skip]
pub static FEATURE_LIST: &[u8] = &[
    0x00, 0x01,             // featureCount 1
    b'l', b'i', b'g', b'a', // feature record: tag
    0x00, 0x08,             //                 offset 8
    // Feature (offset 8)
    0x00, 0x00, // featureParamsOffset: null
    0x00, 0x01, // lookupIndexCount 1
    0x00, 0x00, // lookupListIndices[0] = 0
];
