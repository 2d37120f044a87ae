//! Bounds-checked little-endian reading of primitive integers.
//!
//! Trace files are little-endian throughout. The only fixed-width field is the entry kind
//! byte, so [`WireIO`] is implemented for `u8`; everything else is a compressed integer.
//! [`read_le_at`] reads one value at an offset and advances it, failing with
//! [`crate::Error::OutOfBounds`] instead of panicking.

use crate::{Error::OutOfBounds, Result};

/// Primitive types that can be read from a little-endian byte buffer.
pub trait WireIO: Sized {
    /// Byte array type for this numeric type.
    type Bytes: Sized + for<'a> TryFrom<&'a [u8]>;

    /// Read T from a byte buffer in little-endian
    fn from_le_bytes(bytes: Self::Bytes) -> Self;
}

macro_rules! impl_wire_io {
    ($($ty:ty),*) => {
        $(
            impl WireIO for $ty {
                type Bytes = [u8; std::mem::size_of::<$ty>()];

                fn from_le_bytes(bytes: Self::Bytes) -> Self {
                    <$ty>::from_le_bytes(bytes)
                }
            }
        )*
    };
}

impl_wire_io!(u8);

/// Reads a `T` at `offset` and advances `offset` past it.
///
/// # Errors
/// Returns [`crate::Error::OutOfBounds`] if fewer than `size_of::<T>()` bytes remain.
pub fn read_le_at<T: WireIO>(data: &[u8], offset: &mut usize) -> Result<T> {
    let type_len = std::mem::size_of::<T>();
    let Some(end) = offset.checked_add(type_len) else {
        return Err(OutOfBounds);
    };
    if end > data.len() {
        return Err(OutOfBounds);
    }

    let Ok(read) = data[*offset..end].try_into() else {
        return Err(OutOfBounds);
    };

    *offset = end;

    Ok(T::from_le_bytes(read))
}
