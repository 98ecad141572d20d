//! Fixed-size little-endian element codec.
//!
//! Everything stored in a blob column is a [`FixedElement`]: a `Copy`
//! value with a fixed byte length and a defined little-endian layout.
//! The codec is byte-oriented, so regions need no alignment and the
//! blob stays relocatable across address spaces.

/// A fixed-size value with a defined little-endian byte layout.
///
/// Implemented for the primitive integers, floats, `bool`, and
/// `[T; N]` arrays of fixed elements. Fixed-size nested aggregates
/// compose either as arrays or via a manual impl that concatenates
/// the encodings of their fields in declaration order.
///
/// # Contract
///
/// `encode` must write exactly [`FixedElement::BYTE_LEN`] bytes and
/// `decode` must read exactly that many; `decode(encode(v)) == v` for
/// every value `v` (for floats, equality up to bit pattern).
pub trait FixedElement: Copy {
    /// Encoded size in bytes. Must be non-zero.
    const BYTE_LEN: usize;

    /// Write this value's little-endian encoding into `out[..BYTE_LEN]`.
    fn encode(&self, out: &mut [u8]);

    /// Decode a value from `bytes[..BYTE_LEN]`.
    fn decode(bytes: &[u8]) -> Self;
}

macro_rules! fixed_primitive {
    ($($ty:ty),* $(,)?) => {$(
        impl FixedElement for $ty {
            const BYTE_LEN: usize = std::mem::size_of::<$ty>();

            fn encode(&self, out: &mut [u8]) {
                out[..Self::BYTE_LEN].copy_from_slice(&self.to_le_bytes());
            }

            fn decode(bytes: &[u8]) -> Self {
                let mut raw = [0u8; std::mem::size_of::<$ty>()];
                raw.copy_from_slice(&bytes[..Self::BYTE_LEN]);
                Self::from_le_bytes(raw)
            }
        }
    )*};
}

fixed_primitive!(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64);

impl FixedElement for bool {
    const BYTE_LEN: usize = 1;

    fn encode(&self, out: &mut [u8]) {
        out[0] = u8::from(*self);
    }

    fn decode(bytes: &[u8]) -> Self {
        bytes[0] != 0
    }
}

impl<T: FixedElement, const N: usize> FixedElement for [T; N] {
    const BYTE_LEN: usize = T::BYTE_LEN * N;

    fn encode(&self, out: &mut [u8]) {
        for (i, elem) in self.iter().enumerate() {
            elem.encode(&mut out[i * T::BYTE_LEN..]);
        }
    }

    fn decode(bytes: &[u8]) -> Self {
        std::array::from_fn(|i| T::decode(&bytes[i * T::BYTE_LEN..]))
    }
}
