//! Value records, the sparse position adjustments used by GPOS.

use layout_types::{Offset16, ReadScalar};

use crate::font_data::Cursor;
use crate::read::ReadError;
use crate::shaping::GlyphPositions;

/// The bitmask naming which fields a [`ValueRecord`] carries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ValueFormat(u16);

impl ValueFormat {
    pub const X_PLACEMENT: u16 = 0x0001;
    pub const Y_PLACEMENT: u16 = 0x0002;
    pub const X_ADVANCE: u16 = 0x0004;
    pub const Y_ADVANCE: u16 = 0x0008;
    pub const X_PLACEMENT_DEVICE: u16 = 0x0010;
    pub const Y_PLACEMENT_DEVICE: u16 = 0x0020;
    pub const X_ADVANCE_DEVICE: u16 = 0x0040;
    pub const Y_ADVANCE_DEVICE: u16 = 0x0080;

    pub fn new(bits: u16) -> Self {
        ValueFormat(bits)
    }

    pub fn bits(self) -> u16 {
        self.0
    }

    fn contains(self, bit: u16) -> bool {
        self.0 & bit != 0
    }

    /// The on-disk size of one record with this format.
    pub fn record_byte_len(self) -> usize {
        (self.0 & 0x00FF).count_ones() as usize * 2
    }
}

impl ReadScalar for ValueFormat {
    const RAW_BYTE_LEN: usize = u16::RAW_BYTE_LEN;

    fn read(bytes: &[u8]) -> Option<Self> {
        u16::read(bytes).map(ValueFormat)
    }
}

/// A sparse position adjustment.
///
/// Absent fields are absent, not zero: they are never applied. Device
/// table offsets are retained but not evaluated (no variation support).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ValueRecord {
    pub x_placement: Option<i16>,
    pub y_placement: Option<i16>,
    pub x_advance: Option<i16>,
    pub y_advance: Option<i16>,
    pub x_placement_device: Option<Offset16>,
    pub y_placement_device: Option<Offset16>,
    pub x_advance_device: Option<Offset16>,
    pub y_advance_device: Option<Offset16>,
}

impl ValueRecord {
    /// Read a record; fields are present in bitmask order.
    pub(crate) fn read(cursor: &mut Cursor, format: ValueFormat) -> Result<Self, ReadError> {
        let mut record = ValueRecord::default();
        if format.contains(ValueFormat::X_PLACEMENT) {
            record.x_placement = Some(cursor.read()?);
        }
        if format.contains(ValueFormat::Y_PLACEMENT) {
            record.y_placement = Some(cursor.read()?);
        }
        if format.contains(ValueFormat::X_ADVANCE) {
            record.x_advance = Some(cursor.read()?);
        }
        if format.contains(ValueFormat::Y_ADVANCE) {
            record.y_advance = Some(cursor.read()?);
        }
        if format.contains(ValueFormat::X_PLACEMENT_DEVICE) {
            record.x_placement_device = Some(cursor.read()?);
        }
        if format.contains(ValueFormat::Y_PLACEMENT_DEVICE) {
            record.y_placement_device = Some(cursor.read()?);
        }
        if format.contains(ValueFormat::X_ADVANCE_DEVICE) {
            record.x_advance_device = Some(cursor.read()?);
        }
        if format.contains(ValueFormat::Y_ADVANCE_DEVICE) {
            record.y_advance_device = Some(cursor.read()?);
        }
        Ok(record)
    }

    /// `true` if no placement or advance field is present.
    pub fn is_empty(&self) -> bool {
        self.x_placement.is_none()
            && self.y_placement.is_none()
            && self.x_advance.is_none()
            && self.y_advance.is_none()
    }

    /// Apply the present fields at `index`; `true` if anything changed.
    pub(crate) fn apply(&self, positions: &mut dyn GlyphPositions, index: usize) -> bool {
        let mut changed = false;
        if self.x_placement.is_some() || self.y_placement.is_some() {
            positions.append_offset(
                index,
                self.x_placement.unwrap_or(0),
                self.y_placement.unwrap_or(0),
            );
            changed = true;
        }
        if self.x_advance.is_some() || self.y_advance.is_some() {
            positions.append_advance(
                index,
                self.x_advance.unwrap_or(0),
                self.y_advance.unwrap_or(0),
            );
            changed = true;
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font_data::FontData;
    use crate::shaping::{GlyphClassKind, PositionBuffer};
    use layout_types::GlyphId;

    #[test]
    fn reads_fields_in_bit_order() {
        // xPlacement -10, xAdvance 30
        let data = FontData::new(&[0xFF, 0xF6, 0x00, 0x1E]);
        let mut cursor = data.cursor();
        let format = ValueFormat::new(ValueFormat::X_PLACEMENT | ValueFormat::X_ADVANCE);
        assert_eq!(format.record_byte_len(), 4);
        let record = ValueRecord::read(&mut cursor, format).unwrap();
        assert_eq!(record.x_placement, Some(-10));
        assert_eq!(record.y_placement, None);
        assert_eq!(record.x_advance, Some(30));
    }

    #[test]
    fn absent_fields_are_not_applied() {
        let record = ValueRecord {
            y_placement: Some(15),
            ..Default::default()
        };
        let mut buffer = PositionBuffer::new();
        buffer.push(GlyphId::new(1), GlyphClassKind::Base, 600);
        assert!(record.apply(&mut buffer, 0));
        assert_eq!(buffer.offset(0), (0, 15));
        assert_eq!(buffer.glyph_and_advance(0).1, 600);

        assert!(!ValueRecord::default().apply(&mut buffer, 0));
    }
}
