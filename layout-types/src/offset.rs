//! Offsets to tables and subtables.
//!
//! Offsets in OpenType are always relative to the start of some containing
//! table, and an offset of zero is interpreted as the absence of the
//! referenced table.

use crate::ReadScalar;

macro_rules! offset_impl {
    ($name:ident, $raw:ty, $docs:literal) => {
        #[doc = $docs]
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(transparent)]
        pub struct $name($raw);

        impl $name {
            /// Create a new offset.
            pub const fn new(raw: $raw) -> Self {
                Self(raw)
            }

            /// `true` if this is a null (zero) offset.
            pub const fn is_null(self) -> bool {
                self.0 == 0
            }

            /// The raw offset value, as a usize.
            pub const fn to_usize(self) -> usize {
                self.0 as usize
            }

            /// The offset as a usize, or `None` if it is null.
            pub fn non_null(self) -> Option<usize> {
                (self.0 != 0).then_some(self.0 as usize)
            }
        }

        impl ReadScalar for $name {
            const RAW_BYTE_LEN: usize = <$raw>::RAW_BYTE_LEN;

            fn read(bytes: &[u8]) -> Option<Self> {
                <$raw>::read(bytes).map(Self)
            }
        }
    };
}

offset_impl!(Offset16, u16, "A 16-bit offset to a table.");
offset_impl!(Offset32, u32, "A 32-bit offset to a table.");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_is_none() {
        assert!(Offset16::new(0).is_null());
        assert_eq!(Offset16::new(0).non_null(), None);
        assert_eq!(Offset16::new(10).non_null(), Some(10));
        assert_eq!(Offset32::new(0x1_0000).non_null(), Some(0x1_0000));
    }
}
