//! The sfnt table directory.

use layout_types::Tag;

use crate::font_data::FontData;
use crate::read::{FontRead, ReadError};

/// TrueType outlines.
const SFNT_TRUETYPE: u32 = 0x0001_0000;
/// CFF outlines ('OTTO').
const SFNT_CFF: u32 = 0x4F54_544F;
/// Apple's alias for TrueType outlines ('true').
const SFNT_APPLE_TRUE: u32 = 0x7472_7565;

/// The font's table directory: an ordered set of records naming the
/// top-level tables and the byte range each occupies.
///
/// Created once at font load; immutable afterward.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableDirectory {
    pub sfnt_version: u32,
    pub records: Vec<TableRecord>,
}

/// One table directory record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableRecord {
    pub tag: Tag,
    pub checksum: u32,
    pub offset: u32,
    pub length: u32,
}

impl FontRead for TableDirectory {
    fn read(data: FontData) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        let sfnt_version: u32 = cursor.read()?;
        if !matches!(sfnt_version, SFNT_TRUETYPE | SFNT_CFF | SFNT_APPLE_TRUE) {
            return Err(ReadError::InvalidSfnt(sfnt_version));
        }
        let num_tables: u16 = cursor.read()?;
        // searchRange, entrySelector, rangeShift
        cursor.advance_by(6);
        let mut records = Vec::with_capacity(num_tables as usize);
        for _ in 0..num_tables {
            records.push(TableRecord {
                tag: cursor.read()?,
                checksum: cursor.read()?,
                offset: cursor.read()?,
                length: cursor.read()?,
            });
        }
        Ok(TableDirectory {
            sfnt_version,
            records,
        })
    }
}

impl TableDirectory {
    /// The record for `tag`, if the table is present.
    pub fn table_record(&self, tag: Tag) -> Option<&TableRecord> {
        self.records.iter().find(|rec| rec.tag == tag)
    }

    /// The bytes of the table with the given tag.
    ///
    /// `font` must be the same data this directory was read from.
    pub fn table_data<'a>(&self, font: FontData<'a>, tag: Tag) -> Option<FontData<'a>> {
        let record = self.table_record(tag)?;
        let start = record.offset as usize;
        font.slice(start..start.checked_add(record.length as usize)?)
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_font() -> Vec<u8> {
        let mut bytes = vec![
            0x00, 0x01, 0x00, 0x00, // sfnt version 1.0
            0x00, 0x01, // numTables
            0x00, 0x10, // searchRange
            0x00, 0x00, // entrySelector
            0x00, 0x00, // rangeShift
            b'G', b'S', b'U', b'B', // tag
            0x00, 0x00, 0x00, 0x00, // checksum
            0x00, 0x00, 0x00, 0x1C, // offset (28)
            0x00, 0x00, 0x00, 0x02, // length
        ];
        bytes.extend_from_slice(&[0xAB, 0xCD]);
        bytes
    }

    #[test]
    fn directory_slices_table_bytes() {
        let bytes = sample_font();
        let data = FontData::new(&bytes);
        let dir = TableDirectory::read(data).unwrap();
        assert_eq!(dir.records.len(), 1);
        let gsub = dir.table_data(data, Tag::new(b"GSUB")).unwrap();
        assert_eq!(gsub.as_bytes(), &[0xAB, 0xCD]);
        assert!(dir.table_data(data, Tag::new(b"GPOS")).is_none());
    }

    #[test]
    fn bad_sfnt_version_is_rejected() {
        let data = FontData::new(&[0xDE, 0xAD, 0xBE, 0xEF, 0x00, 0x00]);
        assert_eq!(
            TableDirectory::read(data),
            Err(ReadError::InvalidSfnt(0xDEADBEEF))
        );
    }

}
