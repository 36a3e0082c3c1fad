// physical/common.rs
//! Byte parsing helpers shared by the physical layer.
//!
//! Every multi-byte primitive in a PQDIF file is little-endian, including
//! the fields of the record header and the payloads of scalar and vector
//! elements. Tag identifiers use the Microsoft GUID byte layout (the first
//! three fields little-endian), which [`read_guid`] maps to a [`Uuid`].

use crate::{Error, Result};
use uuid::Uuid;

/// Read a u16 from a byte slice at the given offset (little-endian).
///
/// # Panics
/// Panics if `offset + 2 > bytes.len()`. Validate with
/// [`validate_buffer_size`] first.
#[inline]
pub fn read_u16(bytes: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
}

/// Read a u32 from a byte slice at the given offset (little-endian).
#[inline]
pub fn read_u32(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

/// Read an i32 from a byte slice at the given offset (little-endian).
#[inline]
pub fn read_i32(bytes: &[u8], offset: usize) -> i32 {
    i32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

/// Read an f32 from a byte slice at the given offset (little-endian).
#[inline]
pub fn read_f32(bytes: &[u8], offset: usize) -> f32 {
    f32::from_bits(read_u32(bytes, offset))
}

/// Read an f64 from a byte slice at the given offset (little-endian).
#[inline]
pub fn read_f64(bytes: &[u8], offset: usize) -> f64 {
    f64::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
        bytes[offset + 4],
        bytes[offset + 5],
        bytes[offset + 6],
        bytes[offset + 7],
    ])
}

/// Read a 16-byte tag identifier at the given offset.
///
/// Tags are stored in GUID byte order (mixed-endian), so this uses the
/// little-endian constructor to make the parsed [`Uuid`] display with the
/// canonical hyphenated form the PQDIF specification documents.
#[inline]
pub fn read_guid(bytes: &[u8], offset: usize) -> Uuid {
    let mut raw = [0u8; 16];
    raw.copy_from_slice(&bytes[offset..offset + 16]);
    Uuid::from_bytes_le(raw)
}

/// Validate that a buffer has at least `expected` bytes.
///
/// Returns `Err(TooShortBuffer)` if the buffer is too small.
#[inline]
pub fn validate_buffer_size(bytes: &[u8], expected: usize) -> Result<()> {
    if bytes.len() < expected {
        return Err(Error::TooShortBuffer {
            actual: bytes.len(),
            expected,
            file: file!(),
            line: line!(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn little_endian_primitives() {
        let bytes = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
        assert_eq!(read_u16(&bytes, 0), 0x0201);
        assert_eq!(read_u32(&bytes, 0), 0x0403_0201);
        assert_eq!(read_i32(&bytes, 4), 0x0807_0605);
    }

    #[test]
    fn guid_byte_order() {
        // GUID byte layout: first three fields little-endian.
        let tag = uuid::uuid!("89738606-f1c3-11cf-9d89-0080c72e70a3");
        let bytes = tag.to_bytes_le();
        assert_eq!(read_guid(&bytes, 0), tag);
        assert_eq!(bytes[0], 0x06);
        assert_eq!(bytes[3], 0x89);
    }

    #[test]
    fn buffer_size_check() {
        assert!(validate_buffer_size(&[0u8; 4], 4).is_ok());
        assert!(validate_buffer_size(&[0u8; 3], 4).is_err());
    }
}
