//! Four-byte table and feature identifiers.

use crate::ReadScalar;

/// An OpenType tag.
///
/// A tag is a four-byte array where each byte is in the printable ASCII
/// range (0x20..=0x7E). Tags identify tables, scripts, languages, and
/// features.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Tag([u8; 4]);

impl Tag {
    /// Construct a `Tag` from raw bytes.
    ///
    /// Validity of the bytes is not checked; garbage in, garbage out.
    pub const fn new(src: &[u8; 4]) -> Tag {
        Tag(*src)
    }

    /// Construct a `Tag` from a big-endian `u32`.
    pub const fn from_u32(src: u32) -> Tag {
        Tag(src.to_be_bytes())
    }

    /// The tag as a big-endian `u32`.
    pub const fn to_u32(self) -> u32 {
        u32::from_be_bytes(self.0)
    }

    /// The raw bytes of the tag.
    pub const fn to_be_bytes(self) -> [u8; 4] {
        self.0
    }

    /// The tag bytes as a slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl ReadScalar for Tag {
    const RAW_BYTE_LEN: usize = 4;

    fn read(bytes: &[u8]) -> Option<Self> {
        bytes.get(..4).map(|b| Tag(b.try_into().unwrap()))
    }
}

impl std::borrow::Borrow<[u8; 4]> for Tag {
    fn borrow(&self) -> &[u8; 4] {
        &self.0
    }
}

impl PartialEq<[u8; 4]> for Tag {
    fn eq(&self, other: &[u8; 4]) -> bool {
        &self.0 == other
    }
}

impl PartialEq<&str> for Tag {
    fn eq(&self, other: &&str) -> bool {
        self.0 == other.as_bytes()
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for byte in self.0 {
            if byte.is_ascii_graphic() || byte == b' ' {
                (byte as char).fmt(f)?;
            } else {
                write!(f, "\\{byte:02x}")?;
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "\"{self}\"")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn u32_roundtrip() {
        let tag = Tag::new(b"GSUB");
        assert_eq!(tag, Tag::from_u32(0x4753_5542));
        assert_eq!(tag.to_u32(), 0x4753_5542);
    }

    #[test]
    fn display() {
        assert_eq!(Tag::new(b"math").to_string(), "math");
        assert_eq!(Tag::new(&[0x47, 0x50, 0x4f, 0x02]).to_string(), "GPO\\02");
    }

    #[test]
    fn str_eq() {
        assert_eq!(Tag::new(b"BASE"), "BASE");
        assert_ne!(Tag::new(b"BASE"), "JSTF");
    }
}
