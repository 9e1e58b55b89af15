//! Raw font bytes.

use std::ops::{Bound, RangeBounds};

use layout_types::ReadScalar;

use crate::read::{FontRead, ReadError, TableOffset};

/// A reference to raw binary font data.
///
/// This is a wrapper around a byte slice, with convenience methods for
/// parsing. Each table or subtable parser receives a `FontData` whose
/// start is the (sub)table's own start, so that the offsets stored in the
/// table resolve with [`split_off`](Self::split_off) alone.
#[derive(Debug, Default, Clone, Copy)]
pub struct FontData<'a> {
    bytes: &'a [u8],
}

impl<'a> FontData<'a> {
    /// Create a new `FontData` with these bytes.
    pub const fn new(bytes: &'a [u8]) -> Self {
        FontData { bytes }
    }

    /// The length of the data, in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// `true` if the data has a length of zero bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The data from `pos` to the end, or `None` if `pos` is out of bounds.
    pub fn split_off(&self, pos: usize) -> Option<FontData<'a>> {
        self.bytes.get(pos..).map(FontData::new)
    }

    /// A sub-range of the data, or `None` if the range is out of bounds.
    pub fn slice(&self, range: impl RangeBounds<usize>) -> Option<FontData<'a>> {
        let bounds = (range.start_bound().cloned(), range.end_bound().cloned());
        self.bytes.get(bounds).map(FontData::new)
    }

    /// Read a scalar at the given byte offset.
    pub fn read_at<T: ReadScalar>(&self, offset: usize) -> Result<T, ReadError> {
        self.bytes
            .get(offset..)
            .and_then(T::read)
            .ok_or(ReadError::OutOfBounds)
    }

    /// Read a table whose data begins at `offset` from our start.
    pub fn read_table_at<T: FontRead>(&self, offset: usize) -> Result<T, ReadError> {
        let data = self.split_off(offset).ok_or(ReadError::OutOfBounds)?;
        T::read(data)
    }

    /// Resolve a non-null offset to a table.
    ///
    /// A null offset is an error here; use [`resolve_opt`](Self::resolve_opt)
    /// where the table is optional.
    pub fn resolve<T: FontRead>(&self, offset: impl TableOffset) -> Result<T, ReadError> {
        let pos = offset.non_null().ok_or(ReadError::NullOffset)?;
        self.read_table_at(pos)
    }

    /// Resolve an offset to a table, mapping a null offset to `None`.
    pub fn resolve_opt<T: FontRead>(
        &self,
        offset: impl TableOffset,
    ) -> Result<Option<T>, ReadError> {
        match offset.non_null() {
            Some(pos) => self.read_table_at(pos).map(Some),
            None => Ok(None),
        }
    }

    /// A cursor at the start of the data.
    pub fn cursor(&self) -> Cursor<'a> {
        Cursor {
            pos: 0,
            data: *self,
        }
    }

    /// The underlying bytes.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }
}

impl AsRef<[u8]> for FontData<'_> {
    fn as_ref(&self) -> &[u8] {
        self.bytes
    }
}

/// A position over a [`FontData`], for reading fields in declaration order.
pub struct Cursor<'a> {
    pos: usize,
    data: FontData<'a>,
}

impl<'a> Cursor<'a> {
    /// Read a scalar and advance past it.
    pub fn read<T: ReadScalar>(&mut self) -> Result<T, ReadError> {
        let temp = self.data.read_at(self.pos);
        self.pos += T::RAW_BYTE_LEN;
        temp
    }

    /// Read `len` consecutive scalars.
    pub fn read_array<T: ReadScalar>(&mut self, len: usize) -> Result<Vec<T>, ReadError> {
        let mut out = Vec::with_capacity(len.min(1024));
        for _ in 0..len {
            out.push(self.read()?);
        }
        Ok(out)
    }

    /// Skip `n_bytes` bytes.
    pub fn advance_by(&mut self, n_bytes: usize) {
        self.pos += n_bytes;
    }

    /// The current position, relative to the start of the data.
    pub fn position(&self) -> usize {
        self.pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_reads_in_order() {
        let data = FontData::new(&[0x00, 0x01, 0x00, 0x02, 0xDE, 0xAD, 0xBE, 0xEF]);
        let mut cursor = data.cursor();
        assert_eq!(cursor.read::<u16>().unwrap(), 1);
        assert_eq!(cursor.read::<u16>().unwrap(), 2);
        assert_eq!(cursor.read::<u32>().unwrap(), 0xDEAD_BEEF);
        assert!(cursor.read::<u8>().is_err());
    }

    #[test]
    fn split_off_rebases_reads() {
        let data = FontData::new(&[0xFF, 0xFF, 0x00, 0x2A]);
        let sub = data.split_off(2).unwrap();
        assert_eq!(sub.read_at::<u16>(0).unwrap(), 42);
        assert!(data.split_off(5).is_none());
    }

    #[test]
    fn read_array_is_bounds_checked() {
        let data = FontData::new(&[0x00, 0x01, 0x00, 0x02]);
        let mut cursor = data.cursor();
        assert!(cursor.read_array::<u16>(3).is_err());
    }
}
