//! Decoding scalars from raw big-endian bytes.

/// A type that can be decoded from raw big-endian bytes.
pub trait ReadScalar: Sized {
    /// The number of bytes this type occupies in a font table.
    const RAW_BYTE_LEN: usize;

    /// Decode this type from the front of `bytes`.
    ///
    /// Returns `None` if fewer than [`RAW_BYTE_LEN`](Self::RAW_BYTE_LEN)
    /// bytes are available.
    fn read(bytes: &[u8]) -> Option<Self>;
}

macro_rules! int_scalar {
    ($ty:ty, $len:literal) => {
        impl ReadScalar for $ty {
            const RAW_BYTE_LEN: usize = $len;

            #[inline]
            fn read(bytes: &[u8]) -> Option<Self> {
                bytes
                    .get(..$len)
                    .map(|b| <$ty>::from_be_bytes(b.try_into().unwrap()))
            }
        }
    };
}

int_scalar!(u8, 1);
int_scalar!(i8, 1);
int_scalar!(u16, 2);
int_scalar!(i16, 2);
int_scalar!(u32, 4);
int_scalar!(i32, 4);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn big_endian_ints() {
        let bytes = [0x01, 0x02, 0x03, 0x04];
        assert_eq!(u16::read(&bytes), Some(0x0102));
        assert_eq!(u32::read(&bytes), Some(0x0102_0304));
        assert_eq!(i16::read(&[0xff, 0xfe]), Some(-2));
    }

    #[test]
    fn short_buffer() {
        assert_eq!(u32::read(&[0, 1, 2]), None);
        assert_eq!(u16::read(&[]), None);
    }
}
