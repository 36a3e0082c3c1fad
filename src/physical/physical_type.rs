// physical/physical_type.rs
//! The fixed table of primitive value encodings.

use crate::{Error, Result};

/// Physical type of a scalar or vector value.
///
/// Each type has a fixed byte width given by [`byte_size`](Self::byte_size).
/// The discriminants match the type bytes stored in PQDIF element headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PhysicalType {
    /// 1-byte boolean, nonzero is true
    Boolean1 = 1,
    /// 2-byte boolean, nonzero is true
    Boolean2 = 2,
    /// 4-byte boolean, nonzero is true
    Boolean4 = 3,
    /// 1-byte character (ASCII)
    Char1 = 10,
    /// 2-byte character (UTF-16 code unit)
    Char2 = 11,
    /// 8-bit signed integer
    Integer1 = 20,
    /// 16-bit signed integer
    Integer2 = 21,
    /// 32-bit signed integer
    Integer4 = 22,
    /// 8-bit unsigned integer
    UnsignedInteger1 = 30,
    /// 16-bit unsigned integer
    UnsignedInteger2 = 31,
    /// 32-bit unsigned integer
    UnsignedInteger4 = 32,
    /// 32-bit float
    Real4 = 40,
    /// 64-bit float
    Real8 = 41,
    /// Complex pair of two 32-bit floats
    Complex8 = 42,
    /// Complex pair of two 64-bit floats
    Complex16 = 43,
    /// 12-byte timestamp: u32 days since 1900-01-01 + f64 second of day
    Timestamp = 50,
    /// 16-byte tag identifier
    Guid = 60,
}

impl PhysicalType {
    /// Convert a raw type byte to the corresponding `PhysicalType`.
    ///
    /// Bytes outside the fixed table yield [`Error::UnknownPhysicalType`].
    pub fn from_u8(value: u8) -> Result<Self> {
        match value {
            1 => Ok(PhysicalType::Boolean1),
            2 => Ok(PhysicalType::Boolean2),
            3 => Ok(PhysicalType::Boolean4),
            10 => Ok(PhysicalType::Char1),
            11 => Ok(PhysicalType::Char2),
            20 => Ok(PhysicalType::Integer1),
            21 => Ok(PhysicalType::Integer2),
            22 => Ok(PhysicalType::Integer4),
            30 => Ok(PhysicalType::UnsignedInteger1),
            31 => Ok(PhysicalType::UnsignedInteger2),
            32 => Ok(PhysicalType::UnsignedInteger4),
            40 => Ok(PhysicalType::Real4),
            41 => Ok(PhysicalType::Real8),
            42 => Ok(PhysicalType::Complex8),
            43 => Ok(PhysicalType::Complex16),
            50 => Ok(PhysicalType::Timestamp),
            60 => Ok(PhysicalType::Guid),
            value => Err(Error::UnknownPhysicalType { value }),
        }
    }

    /// Convert to the raw type byte stored in element headers.
    pub fn to_u8(self) -> u8 {
        self as u8
    }

    /// Fixed byte width of one value of this type.
    pub fn byte_size(self) -> usize {
        match self {
            PhysicalType::Boolean1
            | PhysicalType::Char1
            | PhysicalType::Integer1
            | PhysicalType::UnsignedInteger1 => 1,
            PhysicalType::Boolean2
            | PhysicalType::Char2
            | PhysicalType::Integer2
            | PhysicalType::UnsignedInteger2 => 2,
            PhysicalType::Boolean4
            | PhysicalType::Integer4
            | PhysicalType::UnsignedInteger4
            | PhysicalType::Real4 => 4,
            PhysicalType::Real8 | PhysicalType::Complex8 => 8,
            PhysicalType::Timestamp => 12,
            PhysicalType::Complex16 | PhysicalType::Guid => 16,
        }
    }
}

impl core::fmt::Display for PhysicalType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PhysicalType::Boolean1 => write!(f, "bool (1 byte)"),
            PhysicalType::Boolean2 => write!(f, "bool (2 bytes)"),
            PhysicalType::Boolean4 => write!(f, "bool (4 bytes)"),
            PhysicalType::Char1 => write!(f, "char (1 byte)"),
            PhysicalType::Char2 => write!(f, "char (2 bytes)"),
            PhysicalType::Integer1 => write!(f, "int (1 byte)"),
            PhysicalType::Integer2 => write!(f, "int (2 bytes)"),
            PhysicalType::Integer4 => write!(f, "int (4 bytes)"),
            PhysicalType::UnsignedInteger1 => write!(f, "uint (1 byte)"),
            PhysicalType::UnsignedInteger2 => write!(f, "uint (2 bytes)"),
            PhysicalType::UnsignedInteger4 => write!(f, "uint (4 bytes)"),
            PhysicalType::Real4 => write!(f, "float (4 bytes)"),
            PhysicalType::Real8 => write!(f, "float (8 bytes)"),
            PhysicalType::Complex8 => write!(f, "complex (8 bytes)"),
            PhysicalType::Complex16 => write!(f, "complex (16 bytes)"),
            PhysicalType::Timestamp => write!(f, "timestamp"),
            PhysicalType::Guid => write!(f, "tag identifier"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_known_types() {
        for raw in [1u8, 2, 3, 10, 11, 20, 21, 22, 30, 31, 32, 40, 41, 42, 43, 50, 60] {
            let ty = PhysicalType::from_u8(raw).unwrap();
            assert_eq!(ty.to_u8(), raw);
            assert!(ty.byte_size() > 0);
        }
    }

    #[test]
    fn unknown_type_byte() {
        let err = PhysicalType::from_u8(99).unwrap_err();
        assert!(matches!(err, Error::UnknownPhysicalType { value: 99 }));
    }

    #[test]
    fn fixed_widths() {
        assert_eq!(PhysicalType::Timestamp.byte_size(), 12);
        assert_eq!(PhysicalType::Guid.byte_size(), 16);
        assert_eq!(PhysicalType::Complex8.byte_size(), 8);
        assert_eq!(PhysicalType::Complex16.byte_size(), 16);
    }
}
