//! Traits for interpreting font data.

use layout_types::{Offset16, Offset32};

use crate::font_data::FontData;

/// A table that can be read from raw font data.
///
/// The `data` argument always begins at the table's own start, so the
/// offsets stored in the table resolve against `data` directly.
///
/// Implementations validate as they read: version and format fields must be
/// recognized, and array lengths must be in bounds. The resulting value is
/// owned and immutable; parsing happens once, at font load.
pub trait FontRead: Sized {
    /// Read an instance of `Self` from the provided data.
    fn read(data: FontData) -> Result<Self, ReadError>;
}

/// An offset stored in a table, where zero means "no table".
pub trait TableOffset: Copy {
    /// The offset as a usize, or `None` if it is null.
    fn non_null(self) -> Option<usize>;
}

impl TableOffset for Offset16 {
    fn non_null(self) -> Option<usize> {
        Offset16::non_null(self)
    }
}

impl TableOffset for Offset32 {
    fn non_null(self) -> Option<usize> {
        Offset32::non_null(self)
    }
}

/// An error that occurs when reading font data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadError {
    OutOfBounds,
    // i64 is flexible enough to store any value we might encounter
    InvalidFormat(i64),
    InvalidSfnt(u32),
    NullOffset,
    MalformedData(&'static str),
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReadError::OutOfBounds => write!(f, "An offset was out of bounds"),
            ReadError::InvalidFormat(x) => write!(f, "Invalid format '{x}'"),
            ReadError::InvalidSfnt(ver) => write!(f, "Invalid sfnt version 0x{ver:08X}"),
            ReadError::NullOffset => write!(f, "An offset was unexpectedly null"),
            ReadError::MalformedData(msg) => write!(f, "Malformed data: '{msg}'"),
        }
    }
}

impl std::error::Error for ReadError {}
