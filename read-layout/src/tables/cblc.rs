//! The [CBLC](https://learn.microsoft.com/typography/opentype/spec/cblc)
//! (color bitmap location) table.

use layout_types::GlyphId;

use super::bitmap::{read_strikes, BitmapLocation, BitmapSize};
use crate::font_data::FontData;
use crate::read::{FontRead, ReadError};

/// The color bitmap locator table, version 3.0.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cblc {
    pub strikes: Vec<BitmapSize>,
}

impl FontRead for Cblc {
    fn read(data: FontData) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        let major: u16 = cursor.read()?;
        let minor: u16 = cursor.read()?;
        if major != 3 {
            return Err(ReadError::InvalidFormat(
                ((major as i64) << 16) | minor as i64,
            ));
        }
        Ok(Cblc {
            strikes: read_strikes(data, "CBLC")?,
        })
    }
}

impl Cblc {
    /// The locator entries of one strike.
    pub fn strike_locations(&self, strike_index: usize) -> Option<Vec<BitmapLocation>> {
        self.strikes
            .get(strike_index)
            .map(BitmapSize::locations)
    }

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
    fn one_strike_with_png_range() {
        let cblc = Cblc::read(FontData::new(test_data::CBLC_ONE_STRIKE)).unwrap();
        assert_eq!(cblc.strikes.len(), 1);
        let strike = &cblc.strikes[0];
        assert_eq!(strike.ppem_x, 32);
        assert_eq!(strike.bit_depth, 32);

        let locations = cblc.strike_locations(0).unwrap();
        assert_eq!(locations.len(), 2);
        assert_eq!(locations[0].glyph, GlyphId::new(10));
        assert_eq!(locations[0].image_format, 17);

        let location = cblc.location_of(GlyphId::new(12)).unwrap();
        assert_eq!(location.data_offset, locations[1].data_offset);
        assert!(cblc.location_of(GlyphId::new(500)).is_none());
    }

    #[test]
    fn wrong_major_version_is_rejected() {
        let mut bytes = test_data::CBLC_ONE_STRIKE.to_vec();
        bytes[1] = 2;
        assert!(matches!(
            Cblc::read(FontData::new(&bytes)),
            Err(ReadError::InvalidFormat(_))
        ));
    }

    #[test]
    fn idempotent_load() {
        let data = FontData::new(test_data::CBLC_ONE_STRIKE);
        assert_eq!(Cblc::read(data).unwrap(), Cblc::read(data).unwrap());
    }
}
