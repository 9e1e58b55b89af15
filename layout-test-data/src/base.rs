//! BASE tables.

/// BASE 1.0 with a horizontal axis only: baseline tags 'ideo' and
/// 'romn', and a 'latn' script whose default baseline is 'romn'
/// (index 1) with coordinates -120 and 0.
#[rustfmt::skip]
pub static HORIZONTAL: &[u8] = &[
    0x00, 0x01, 0x00, 0x00, // version 1.0
    0x00, 0x08,             // horizAxisOffset 8
    0x00, 0x00,             // vertAxisOffset: null
    // Axis (offset 8)
    0x00, 0x04, // baseTagListOffset 4
    0x00, 0x0E, // baseScriptListOffset 14
    // BaseTagList (offset 12)
    0x00, 0x02,             // baseTagCount 2
    b'i', b'd', b'e', b'o', // tag 'ideo'
    b'r', b'o', b'm', b'n', // tag 'romn'
    // BaseScriptList (offset 22)
    0x00, 0x01,             // baseScriptCount 1
    b'l', b'a', b't', b'n', // script record: tag
    0x00, 0x08,             //                offset 8
    // BaseScript (offset 30)
    0x00, 0x06, // baseValuesOffset 6
    0x00, 0x00, // defaultMinMaxOffset: null
    0x00, 0x00, // baseLangSysCount 0
    // BaseValues (offset 36)
    0x00, 0x01, // defaultBaselineIndex 1 ('romn')
    0x00, 0x02, // baseCoordCount 2
    0x00, 0x08, // baseCoordOffsets[0] = 8
    0x00, 0x0C, // baseCoordOffsets[1] = 12
    // BaseCoord 'ideo' (offset 44)
    0x00, 0x01, // format 1
    0xFF, 0x88, // coordinate -120
    // BaseCoord 'romn' (offset 48)
    0x00, 0x01, // format 1
    0x00, 0x00, // coordinate 0
];
