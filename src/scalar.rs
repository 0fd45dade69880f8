//! Fixed-width scalar fields
//!
//! Scalars are written as their raw bytes with no length prefix. The wire
//! byte order is always little-endian, independent of the host.

/// A fixed-width integer or floating-point field
pub trait Scalar: Copy {
    /// Encoded width in bytes
    const SIZE: usize;

    /// Write the little-endian representation into `out[..Self::SIZE]`
    fn write_le(self, out: &mut [u8]);

    /// Read a value from the little-endian bytes in `bytes[..Self::SIZE]`
    fn read_le(bytes: &[u8]) -> Self;
}

macro_rules! impl_scalar {
    ($($t:ty),* $(,)?) => {
        $(
            impl Scalar for $t {
                const SIZE: usize = core::mem::size_of::<$t>();

                #[inline]
                fn write_le(self, out: &mut [u8]) {
                    out[..Self::SIZE].copy_from_slice(&self.to_le_bytes());
                }

                #[inline]
                fn read_le(bytes: &[u8]) -> Self {
                    let mut raw = [0u8; core::mem::size_of::<$t>()];
                    raw.copy_from_slice(&bytes[..Self::SIZE]);
                    <$t>::from_le_bytes(raw)
                }
            }
        )*
    };
}

impl_scalar!(u8, i8, u16, i16, u32, i32, u64, i64, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes() {
        assert_eq!(<u8 as Scalar>::SIZE, 1);
        assert_eq!(<i16 as Scalar>::SIZE, 2);
        assert_eq!(<f32 as Scalar>::SIZE, 4);
        assert_eq!(<f64 as Scalar>::SIZE, 8);
    }

    #[test]
    fn test_little_endian_layout() {
        let mut out = [0u8; 4];
        0x0403_0201u32.write_le(&mut out);
        assert_eq!(out, [1, 2, 3, 4]);
        assert_eq!(u16::read_le(&[0x01, 0x02]), 0x0201);
        assert_eq!(i16::read_le(&[0xFF, 0xFF]), -1);

        let mut out = [0u8; 8];
        1.5f64.write_le(&mut out);
        assert_eq!(out, [0, 0, 0, 0, 0, 0, 0xF8, 0x3F]);
    }
}
