//! The [EBLC](https://learn.microsoft.com/typography/opentype/spec/eblc)
//! (embedded bitmap location) table.
//!
//! Identical in structure to CBLC apart from its 2.0 version number and
//! monochrome/grayscale bit depths.

use layout_types::GlyphId;

use super::bitmap::{read_strikes, BitmapLocation, BitmapSize};
use crate::font_data::FontData;
use crate::read::{FontRead, ReadError};

/// The embedded bitmap locator table, version 2.0.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Eblc {
    pub strikes: Vec<BitmapSize>,
}

impl FontRead for Eblc {
    fn read(data: FontData) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        let major: u16 = cursor.read()?;
        let minor: u16 = cursor.read()?;
        if major != 2 {
            return Err(ReadError::InvalidFormat(
                ((major as i64) << 16) | minor as i64,
            ));
        }
        Ok(Eblc {
            strikes: read_strikes(data, "EBLC")?,
        })
    }
}

impl Eblc {
    /// A glyph's locator entry in the first strike that covers it.
    pub fn location_of(&self, glyph: GlyphId) -> Option<BitmapLocation> {
        self.strikes
            .iter()
            .find_map(|strike| strike.location_of(glyph))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use layout_test_data::bitmap as test_data;

    #[test]
    fn monochrome_strike() {
        let eblc = Eblc::read(FontData::new(test_data::EBLC_ONE_STRIKE)).unwrap();
        assert_eq!(eblc.strikes.len(), 1);
        assert_eq!(eblc.strikes[0].bit_depth, 1);
        let location = eblc.location_of(GlyphId::new(10)).unwrap();
        assert_eq!(location.image_format, 1);
        assert!(eblc.location_of(GlyphId::new(99)).is_none());
    }

    #[test]
    fn idempotent_load() {
        let data = FontData::new(test_data::EBLC_ONE_STRIKE);
        assert_eq!(Eblc::read(data).unwrap(), Eblc::read(data).unwrap());
    }
}
