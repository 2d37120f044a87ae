//! Cursor-based byte parser for trace records.
//!
//! [`Parser`] keeps a position within a byte slice and offers bounds-checked reads of
//! fixed-width little-endian integers, ECMA-335 style compressed unsigned integers and raw
//! byte runs. [`write_compressed_uint`] is the matching encoder.
//!
//! # Examples
//!
//! ```rust
//! use pathflip::file::parser::{write_compressed_uint, Parser};
//!
//! let mut buffer = Vec::new();
//! write_compressed_uint(0x1234, &mut buffer)?;
//! assert_eq!(buffer, [0x92, 0x34]);
//!
//! let mut parser = Parser::new(&buffer);
//! assert_eq!(parser.read_compressed_uint()?, 0x1234);
//! assert!(!parser.has_more_data());
//! # Ok::<(), pathflip::Error>(())
//! ```

use crate::{
    file::io::{read_le_at, WireIO},
    Result,
};

/// Largest value representable by the compressed unsigned integer encoding.
pub const MAX_COMPRESSED_UINT: u32 = 0x1FFF_FFFF;

/// A cursor over a borrowed byte slice.
///
/// The parser never reads past the end of its data; every read either succeeds and advances
/// the position, or fails with [`crate::Error::OutOfBounds`] / [`crate::Error::Malformed`].
pub struct Parser<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser positioned at the start of `data`.
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        Parser { data, position: 0 }
    }

    /// Returns `true` while unread bytes remain.
    #[must_use]
    pub fn has_more_data(&self) -> bool {
        self.position < self.data.len()
    }

    /// Number of unread bytes.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.position)
    }

    /// Move the cursor to an absolute position.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if `pos` is past the end of the data.
    pub fn seek(&mut self, pos: usize) -> Result<()> {
        if pos > self.data.len() {
            return Err(out_of_bounds_error!());
        }

        self.position = pos;
        Ok(())
    }

    /// Current cursor position.
    #[must_use]
    pub fn pos(&self) -> usize {
        self.position
    }

    /// Read a little-endian `T` and advance.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if not enough data remains.
    pub fn read_le<T: WireIO>(&mut self) -> Result<T> {
        read_le_at::<T>(self.data, &mut self.position)
    }

    /// Borrow the next `len` bytes and advance past them.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if fewer than `len` bytes remain.
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        if len > self.remaining() {
            return Err(out_of_bounds_error!());
        }

        let start = self.position;
        self.position += len;
        Ok(&self.data[start..self.position])
    }

    /// Read a compressed unsigned integer (ECMA-335 II.23.2).
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] on truncated input or
    /// [`crate::Error::Malformed`] for an invalid leading byte.
    pub fn read_compressed_uint(&mut self) -> Result<u32> {
        let first_byte = self.read_le::<u8>()?;

        // 1-byte encoding: 0xxxxxxx
        if (first_byte & 0x80) == 0 {
            return Ok(u32::from(first_byte));
        }

        // 2-byte encoding: 10xxxxxx xxxxxxxx
        if (first_byte & 0xC0) == 0x80 {
            let second_byte = self.read_le::<u8>()?;
            let value = ((u32::from(first_byte) & 0x3F) << 8) | u32::from(second_byte);
            return Ok(value);
        }

        // 4-byte encoding: 110xxxxx xxxxxxxx xxxxxxxx xxxxxxxx
        if (first_byte & 0xE0) == 0xC0 {
            let b1 = u32::from(self.read_le::<u8>()?);
            let b2 = u32::from(self.read_le::<u8>()?);
            let b3 = u32::from(self.read_le::<u8>()?);
            let value = ((u32::from(first_byte) & 0x1F) << 24) | (b1 << 16) | (b2 << 8) | b3;
            return Ok(value);
        }

        Err(malformed_error!("Invalid compressed uint - {}", first_byte))
    }
}

/// Append `value` to `buffer` in compressed unsigned integer encoding.
///
/// # Errors
/// Returns [`crate::Error::Malformed`] if `value` exceeds [`MAX_COMPRESSED_UINT`].
pub fn write_compressed_uint(value: u32, buffer: &mut Vec<u8>) -> Result<()> {
    match value {
        0..=0x7F => buffer.push(value as u8),
        0x80..=0x3FFF => {
            buffer.push(0x80 | (value >> 8) as u8);
            buffer.push(value as u8);
        }
        0x4000..=MAX_COMPRESSED_UINT => {
            buffer.push(0xC0 | (value >> 24) as u8);
            buffer.push((value >> 16) as u8);
            buffer.push((value >> 8) as u8);
            buffer.push(value as u8);
        }
        _ => {
            return Err(malformed_error!(
                "Value {:#x} exceeds compressed uint range",
                value
            ))
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compressed_uint_boundaries() {
        let cases: [(u32, &[u8]); 6] = [
            (0x03, &[0x03]),
            (0x7F, &[0x7F]),
            (0x80, &[0x80, 0x80]),
            (0x3FFF, &[0xBF, 0xFF]),
            (0x4000, &[0xC0, 0x00, 0x40, 0x00]),
            (MAX_COMPRESSED_UINT, &[0xDF, 0xFF, 0xFF, 0xFF]),
        ];

        for (value, encoded) in cases {
            let mut buffer = Vec::new();
            write_compressed_uint(value, &mut buffer).unwrap();
            assert_eq!(buffer, encoded, "encoding {value:#x}");

            let mut parser = Parser::new(encoded);
            assert_eq!(parser.read_compressed_uint().unwrap(), value);
            assert_eq!(parser.pos(), encoded.len());
        }
    }

    #[test]
    fn compressed_uint_too_large() {
        let mut buffer = Vec::new();
        assert!(matches!(
            write_compressed_uint(MAX_COMPRESSED_UINT + 1, &mut buffer),
            Err(crate::Error::Malformed { .. })
        ));
        assert!(buffer.is_empty());
    }

    #[test]
    fn compressed_uint_invalid_prefix() {
        let mut parser = Parser::new(&[0xE0, 0x00, 0x00, 0x00]);
        assert!(matches!(
            parser.read_compressed_uint(),
            Err(crate::Error::Malformed { .. })
        ));
    }

    #[test]
    fn compressed_uint_truncated() {
        let mut parser = Parser::new(&[0xC0, 0x00]);
        assert!(matches!(
            parser.read_compressed_uint(),
            Err(crate::Error::OutOfBounds)
        ));
    }

    #[test]
    fn navigation() {
        let data = [0x01, 0x02, 0x03, 0x04];
        let mut parser = Parser::new(&data);

        parser.seek(2).unwrap();
        assert_eq!(parser.pos(), 2);
        assert_eq!(parser.remaining(), 2);
        assert_eq!(parser.read_bytes(2).unwrap(), &[0x03, 0x04]);
        assert!(!parser.has_more_data());
        assert!(parser.read_le::<u8>().is_err());
        assert!(parser.read_bytes(1).is_err());

        parser.seek(1).unwrap();
        assert_eq!(parser.read_le::<u8>().unwrap(), 0x02);
        parser.seek(4).unwrap();
        assert!(parser.seek(5).is_err());
    }
}
