//! Fixed-width binary layouts.

use crate::error::EncodingError;
use crate::order::ByteOrder;
use crate::reader::Reader;

/// A value with a fixed-width binary representation.
///
/// Implemented for every [`FixedSize`] type and for slices/`Vec`s of them.
/// Structs get it through `#[derive(FixedLayout)]`, which encodes fields in
/// declaration order with no padding.
///
/// Sequences are not length-prefixed: a slice or `Vec` encodes its elements
/// back to back, and decoding fills exactly as many elements as the target
/// already holds. Because of that a sequence can only be the outermost value
/// passed to `read_data`/`write_data`, never a struct field.
///
/// Types without a fixed width have no implementation, so they are rejected
/// at compile time:
///
/// ```compile_fail
/// let mut buf = bufferio::Buffer::with_capacity(16);
/// buf.write_data_le(&String::from("variable")).unwrap();
/// ```
///
/// ```compile_fail
/// let mut buf = bufferio::Buffer::with_capacity(16);
/// buf.write_data_le(&7usize).unwrap();
/// ```
pub trait FixedLayout {
    /// Number of bytes [`encode`](FixedLayout::encode) produces for this value.
    fn encoded_len(&self) -> usize;

    /// Appends the encoded form of `self` to `out`.
    fn encode(&self, order: ByteOrder, out: &mut Vec<u8>);

    /// Overwrites `self` with a value decoded from `src`.
    fn decode(&mut self, order: ByteOrder, src: &mut Reader<'_>) -> Result<(), EncodingError>;
}

/// A [`FixedLayout`] whose encoded length depends only on its type.
///
/// Numbers, `bool`, [`Complex`], arrays and derived structs implement it.
/// Derived structs require it of every field, so sequences and boxes cannot
/// be nested inside one:
///
/// ```compile_fail
/// use bufferio::FixedLayout;
///
/// #[derive(FixedLayout)]
/// struct WithTail {
///     tag: u32,
///     tail: Vec<u16>,
/// }
/// ```
///
/// ```compile_fail
/// use bufferio::FixedLayout;
///
/// #[derive(FixedLayout)]
/// struct WithBox {
///     tag: u32,
///     boxed: Box<u8>,
/// }
/// ```
pub trait FixedSize: FixedLayout {
    /// Encoded length of every value of this type.
    const SIZE: usize;
}

/// Encodes `value` into a freshly allocated byte vector.
///
/// # Example
///
/// ```
/// use bufferio::{encode_to_vec, ByteOrder};
///
/// assert_eq!(encode_to_vec(ByteOrder::BigEndian, &0x0102u16), vec![1, 2]);
/// assert_eq!(encode_to_vec(ByteOrder::LittleEndian, &0x0102u16), vec![2, 1]);
/// ```
pub fn encode_to_vec<T: FixedLayout + ?Sized>(order: ByteOrder, value: &T) -> Vec<u8> {
    let mut out = Vec::with_capacity(value.encoded_len());
    value.encode(order, &mut out);
    out
}

macro_rules! impl_fixed_layout_for_number {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FixedSize for $ty {
                const SIZE: usize = std::mem::size_of::<$ty>();
            }

            impl FixedLayout for $ty {
                #[inline]
                fn encoded_len(&self) -> usize {
                    std::mem::size_of::<$ty>()
                }

                #[inline]
                fn encode(&self, order: ByteOrder, out: &mut Vec<u8>) {
                    match order {
                        ByteOrder::LittleEndian => out.extend_from_slice(&self.to_le_bytes()),
                        ByteOrder::BigEndian => out.extend_from_slice(&self.to_be_bytes()),
                    }
                }

                #[inline]
                fn decode(
                    &mut self,
                    order: ByteOrder,
                    src: &mut Reader<'_>,
                ) -> Result<(), EncodingError> {
                    let bytes = src.array::<{ std::mem::size_of::<$ty>() }>()?;
                    *self = match order {
                        ByteOrder::LittleEndian => <$ty>::from_le_bytes(bytes),
                        ByteOrder::BigEndian => <$ty>::from_be_bytes(bytes),
                    };
                    Ok(())
                }
            }
        )*
    };
}

impl_fixed_layout_for_number!(u8, i8, u16, i16, u32, i32, u64, i64, f32, f64);

impl FixedSize for bool {
    const SIZE: usize = 1;
}

/// One byte: `1` for `true`, `0` for `false`. Any non-zero byte decodes as
/// `true`.
impl FixedLayout for bool {
    fn encoded_len(&self) -> usize {
        1
    }

    fn encode(&self, _order: ByteOrder, out: &mut Vec<u8>) {
        out.push(u8::from(*self));
    }

    fn decode(&mut self, _order: ByteOrder, src: &mut Reader<'_>) -> Result<(), EncodingError> {
        let [byte] = src.array::<1>()?;
        *self = byte != 0;
        Ok(())
    }
}

impl<T: FixedSize, const N: usize> FixedSize for [T; N] {
    const SIZE: usize = N * T::SIZE;
}

impl<T: FixedSize, const N: usize> FixedLayout for [T; N] {
    fn encoded_len(&self) -> usize {
        Self::SIZE
    }

    fn encode(&self, order: ByteOrder, out: &mut Vec<u8>) {
        self.as_slice().encode(order, out);
    }

    fn decode(&mut self, order: ByteOrder, src: &mut Reader<'_>) -> Result<(), EncodingError> {
        self.as_mut_slice().decode(order, src)
    }
}

impl<T: FixedSize> FixedLayout for [T] {
    fn encoded_len(&self) -> usize {
        self.len() * T::SIZE
    }

    fn encode(&self, order: ByteOrder, out: &mut Vec<u8>) {
        for item in self {
            item.encode(order, out);
        }
    }

    fn decode(&mut self, order: ByteOrder, src: &mut Reader<'_>) -> Result<(), EncodingError> {
        for item in self.iter_mut() {
            item.decode(order, src)?;
        }
        Ok(())
    }
}

impl<T: FixedSize> FixedLayout for Vec<T> {
    fn encoded_len(&self) -> usize {
        self.as_slice().encoded_len()
    }

    fn encode(&self, order: ByteOrder, out: &mut Vec<u8>) {
        self.as_slice().encode(order, out);
    }

    fn decode(&mut self, order: ByteOrder, src: &mut Reader<'_>) -> Result<(), EncodingError> {
        self.as_mut_slice().decode(order, src)
    }
}

/// A complex number stored as its real part followed by its imaginary part.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Complex<T> {
    pub re: T,
    pub im: T,
}

impl<T> Complex<T> {
    pub fn new(re: T, im: T) -> Self {
        Self { re, im }
    }
}

impl<T: FixedSize> FixedSize for Complex<T> {
    const SIZE: usize = 2 * T::SIZE;
}

impl<T: FixedSize> FixedLayout for Complex<T> {
    fn encoded_len(&self) -> usize {
        Self::SIZE
    }

    fn encode(&self, order: ByteOrder, out: &mut Vec<u8>) {
        self.re.encode(order, out);
        self.im.encode(order, out);
    }

    fn decode(&mut self, order: ByteOrder, src: &mut Reader<'_>) -> Result<(), EncodingError> {
        self.re.decode(order, src)?;
        self.im.decode(order, src)
    }
}
