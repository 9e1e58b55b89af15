//! The [EBDT](https://learn.microsoft.com/typography/opentype/spec/ebdt)
//! (embedded bitmap data) table.
//!
//! A raw data block; monochrome/grayscale glyph images are sliced out of
//! it using locator entries from the companion EBLC table. The bit-level
//! image formats are not decoded.

use super::bitmap::BitmapLocation;
use crate::font_data::FontData;
use crate::read::{FontRead, ReadError};

/// The embedded bitmap data table, version 2.0.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ebdt {
    data: Vec<u8>,
}

impl FontRead for Ebdt {
    fn read(data: FontData) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        let major: u16 = cursor.read()?;
        let minor: u16 = cursor.read()?;
        if major != 2 {
            return Err(ReadError::InvalidFormat(
                ((major as i64) << 16) | minor as i64,
            ));
        }
        Ok(Ebdt {
            data: data.as_bytes().to_vec(),
        })
    }
}

impl Ebdt {
    /// The raw data slice of one located glyph image.
    pub fn glyph_data(&self, location: &BitmapLocation) -> Option<&[u8]> {
        let start = location.data_offset as usize;
        let end = start.checked_add(location.data_len as usize)?;
        self.data.get(start..end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use layout_types::GlyphId;

    #[test]
    fn slices_by_location() {
        let mut bytes = vec![0x00, 0x02, 0x00, 0x00];
        bytes.extend_from_slice(&[0xAA, 0xBB, 0xCC, 0xDD]);
        let ebdt = Ebdt::read(FontData::new(&bytes)).unwrap();
        let location = BitmapLocation {
            glyph: GlyphId::new(3),
            data_offset: 5,
            data_len: 2,
            image_format: 1,
        };
        assert_eq!(ebdt.glyph_data(&location), Some(&[0xBB, 0xCC][..]));

        let past_end = BitmapLocation {
            data_len: 100,
            ..location
        };
        assert!(ebdt.glyph_data(&past_end).is_none());
    }

    #[test]
    fn wrong_version_is_rejected() {
        assert!(matches!(
            Ebdt::read(FontData::new(&[0x00, 0x03, 0x00, 0x00])),
            Err(ReadError::InvalidFormat(_))
        ));
    }
}
