//! Shared value types used across the library.
//!
//! PQDIF stores every primitive as one of a fixed table of physical types
//! (see [`PhysicalType`](crate::physical::PhysicalType)). Decoded primitives
//! surface as the closed [`Value`] variant so callers pattern-match instead
//! of downcasting.

use uuid::Uuid;

/// A complex number stored as a real/imaginary pair.
///
/// Backs the `Complex8` (two 4-byte floats) and `Complex16` (two 8-byte
/// floats) physical types.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Complex {
    /// Real part
    pub real: f64,
    /// Imaginary part
    pub imag: f64,
}

impl Complex {
    /// Create a complex number from its real and imaginary parts.
    pub fn new(real: f64, imag: f64) -> Self {
        Complex { real, imag }
    }
}

/// Number of days between 1900-01-01 (the PQDIF epoch) and 1970-01-01.
const DAYS_TO_UNIX_EPOCH: i64 = 25_567;

/// A PQDIF timestamp: a day count since 1900-01-01 plus seconds since
/// midnight of that day.
///
/// The 12-byte wire encoding is a little-endian u32 day count followed by a
/// little-endian f64 second-of-day. No calendar conversion is applied during
/// decoding; [`to_unix_seconds`](Self::to_unix_seconds) is provided for
/// callers that want an absolute time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timestamp {
    /// Days since 1900-01-01
    pub days: u32,
    /// Seconds since midnight of the day
    pub seconds: f64,
}

impl Timestamp {
    /// Create a timestamp from its day count and second-of-day parts.
    pub fn new(days: u32, seconds: f64) -> Self {
        Timestamp { days, seconds }
    }

    /// Convert to seconds since the Unix epoch (1970-01-01T00:00:00).
    ///
    /// Timestamps before 1970 yield negative values.
    pub fn to_unix_seconds(&self) -> f64 {
        (self.days as i64 - DAYS_TO_UNIX_EPOCH) as f64 * 86_400.0 + self.seconds
    }
}

/// A decoded primitive value.
///
/// One variant per family in the physical type table. Integer widths are
/// widened to 64 bits and float widths to f64; the original width is
/// recoverable from the element's physical type.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Boolean (1, 2, or 4 byte encoding; nonzero is true)
    Boolean(bool),
    /// Single character (1-byte ASCII or 2-byte UTF-16 code unit)
    Char(char),
    /// Signed integer (1, 2, or 4 bytes on the wire)
    SignedInteger(i64),
    /// Unsigned integer (1, 2, or 4 bytes on the wire)
    UnsignedInteger(u64),
    /// Floating point value (4 or 8 bytes on the wire)
    Real(f64),
    /// Complex pair (two floats or two doubles)
    Complex(Complex),
    /// Timestamp (day count + second of day)
    Timestamp(Timestamp),
    /// 16-byte tag identifier
    Tag(Uuid),
}

impl Value {
    /// Returns true if this is an integer value (signed or unsigned).
    #[inline]
    pub fn is_integer(&self) -> bool {
        matches!(self, Value::SignedInteger(_) | Value::UnsignedInteger(_))
    }

    /// Returns true if this is a floating point value.
    #[inline]
    pub fn is_real(&self) -> bool {
        matches!(self, Value::Real(_))
    }

    /// Attempts to convert to f64, useful for numeric transforms.
    ///
    /// Returns `None` for booleans, characters, complex pairs, timestamps,
    /// and tags.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::SignedInteger(v) => Some(*v as f64),
            Value::UnsignedInteger(v) => Some(*v as f64),
            Value::Real(v) => Some(*v),
            _ => None,
        }
    }

    /// Attempts to convert to u64.
    ///
    /// Succeeds for unsigned integers and non-negative signed integers.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::UnsignedInteger(v) => Some(*v),
            Value::SignedInteger(v) if *v >= 0 => Some(*v as u64),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unix_epoch_conversion() {
        let ts = Timestamp::new(25_567, 0.0);
        assert_eq!(ts.to_unix_seconds(), 0.0);

        let ts = Timestamp::new(25_568, 43_200.0);
        assert_eq!(ts.to_unix_seconds(), 86_400.0 + 43_200.0);
    }

    #[test]
    fn value_numeric_conversions() {
        assert_eq!(Value::UnsignedInteger(3).as_f64(), Some(3.0));
        assert_eq!(Value::SignedInteger(-2).as_f64(), Some(-2.0));
        assert_eq!(Value::Real(1.5).as_f64(), Some(1.5));
        assert_eq!(Value::Boolean(true).as_f64(), None);

        assert_eq!(Value::SignedInteger(-2).as_u64(), None);
        assert_eq!(Value::SignedInteger(7).as_u64(), Some(7));
    }
}
