//! The [CBDT](https://learn.microsoft.com/typography/opentype/spec/cbdt)
//! (color bitmap data) table.
//!
//! CBDT owns a copy of its raw bytes; glyph images are sliced out of it
//! using [`BitmapLocation`] entries from the companion CBLC table.

use super::bitmap::{BigGlyphMetrics, BitmapLocation, SmallGlyphMetrics};
use crate::font_data::FontData;
use crate::read::{FontRead, ReadError};

/// The color bitmap data table, version 3.0.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cbdt {
    data: Vec<u8>,
}

/// The embedded metrics of a color glyph image, when the format carries any.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmbeddedMetrics {
    Small(SmallGlyphMetrics),
    Big(BigGlyphMetrics),
}

/// A decoded glyph image: optional embedded metrics plus raw PNG bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlyphImage<'a> {
    pub metrics: Option<EmbeddedMetrics>,
    pub png_data: &'a [u8],
}

impl FontRead for Cbdt {
    fn read(data: FontData) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        let major: u16 = cursor.read()?;
        let minor: u16 = cursor.read()?;
        if major != 3 {
            return Err(ReadError::InvalidFormat(
                ((major as i64) << 16) | minor as i64,
            ));
        }
        // locator offsets are relative to the table start, keep it whole
        Ok(Cbdt {
            data: data.as_bytes().to_vec(),
        })
    }
}

impl Cbdt {
    /// The raw data slice of one located glyph image.
    pub fn glyph_data(&self, location: &BitmapLocation) -> Option<&[u8]> {
        let start = location.data_offset as usize;
        let end = start.checked_add(location.data_len as usize)?;
        self.data.get(start..end)
    }

    /// Decode a located glyph image in format 17, 18 or 19.
    pub fn glyph_image(&self, location: &BitmapLocation) -> Result<GlyphImage, ReadError> {
        let raw = self
            .glyph_data(location)
            .ok_or(ReadError::OutOfBounds)?;
        let data = FontData::new(raw);
        let mut cursor = data.cursor();
        let metrics = match location.image_format {
            17 => Some(EmbeddedMetrics::Small(cursor.read()?)),
            18 => Some(EmbeddedMetrics::Big(cursor.read()?)),
            // format 19 keeps its metrics in CBLC
            19 => None,
            other => return Err(ReadError::InvalidFormat(other.into())),
        };
        let data_len: u32 = cursor.read()?;
        let png_start = cursor.position();
        let png_end = png_start
            .checked_add(data_len as usize)
            .ok_or(ReadError::OutOfBounds)?;
        let png_data = raw.get(png_start..png_end).ok_or(ReadError::OutOfBounds)?;
        Ok(GlyphImage { metrics, png_data })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use layout_test_data::bitmap as test_data;
    use layout_types::GlyphId;

    fn sample_location() -> BitmapLocation {
        BitmapLocation {
            glyph: GlyphId::new(10),
            data_offset: test_data::CBDT_FORMAT17_OFFSET,
            data_len: test_data::CBDT_FORMAT17_LEN,
            image_format: 17,
        }
    }

    #[test]
    fn format17_small_metrics_and_png() {
        let cbdt = Cbdt::read(FontData::new(test_data::CBDT_SAMPLE)).unwrap();
        let image = cbdt.glyph_image(&sample_location()).unwrap();
        match image.metrics {
            Some(EmbeddedMetrics::Small(metrics)) => {
                assert_eq!(metrics.width, 32);
                assert_eq!(metrics.height, 32);
                assert_eq!(metrics.advance, 33);
            }
            other => panic!("expected small metrics, got {other:?}"),
        }
        // PNG signature
        assert_eq!(&image.png_data[..4], &[0x89, b'P', b'N', b'G']);
    }

    #[test]
    fn unknown_image_format_is_an_error() {
        let cbdt = Cbdt::read(FontData::new(test_data::CBDT_SAMPLE)).unwrap();
        let mut location = sample_location();
        location.image_format = 6;
        assert!(matches!(
            cbdt.glyph_image(&location),
            Err(ReadError::InvalidFormat(6))
        ));
    }

    #[test]
    fn out_of_range_location_is_an_error() {
        let cbdt = Cbdt::read(FontData::new(test_data::CBDT_SAMPLE)).unwrap();
        let mut location = sample_location();
        location.data_offset = 0xFFFF_0000;
        assert!(cbdt.glyph_data(&location).is_none());
        assert!(cbdt.glyph_image(&location).is_err());
    }
}
