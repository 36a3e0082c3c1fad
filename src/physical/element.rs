// physical/element.rs
//! The generic tagged-element tree decoded from record bodies.
//!
//! A record body is one top-level [`CollectionElement`]; its children are any
//! mix of the three element kinds:
//! - [`ScalarElement`]: exactly one primitive value
//! - [`VectorElement`]: a homogeneous run of primitive values
//! - [`CollectionElement`]: an ordered list of child elements
//!
//! Elements are immutable once decoded. Tag-keyed lookup preserves original
//! order and supports repeated tags; the single-match accessors treat a
//! duplicate tag as a recoverable schema violation (logged, first match
//! wins) rather than a hard failure, since vendor extensions may legally
//! repeat tags.

use crate::physical::PhysicalType;
use crate::physical::common::{read_f32, read_f64, read_guid, read_u16, read_u32};
use crate::{Complex, Error, Result, Timestamp, Value};
use log::warn;
use uuid::Uuid;

/// Kind of an element node.
///
/// The discriminants match the kind bytes stored in PQDIF element headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ElementType {
    /// Ordered list of child elements
    Collection = 1,
    /// Single primitive value
    Scalar = 2,
    /// Homogeneous run of primitive values
    Vector = 3,
}

impl ElementType {
    /// Convert a raw kind byte to the corresponding `ElementType`.
    pub fn from_u8(value: u8) -> Result<Self> {
        match value {
            1 => Ok(ElementType::Collection),
            2 => Ok(ElementType::Scalar),
            3 => Ok(ElementType::Vector),
            value => Err(Error::UnknownElementType { value }),
        }
    }

    /// Convert to the raw kind byte stored in element headers.
    pub fn to_u8(self) -> u8 {
        self as u8
    }
}

/// Decode one primitive value of `value_type` from the front of `bytes`.
///
/// The caller guarantees `bytes` holds at least `value_type.byte_size()`
/// bytes.
fn decode_value(value_type: PhysicalType, bytes: &[u8]) -> Value {
    match value_type {
        PhysicalType::Boolean1 => Value::Boolean(bytes[0] != 0),
        PhysicalType::Boolean2 => Value::Boolean(read_u16(bytes, 0) != 0),
        PhysicalType::Boolean4 => Value::Boolean(read_u32(bytes, 0) != 0),
        PhysicalType::Char1 => Value::Char(bytes[0] as char),
        PhysicalType::Char2 => {
            let unit = read_u16(bytes, 0);
            Value::Char(char::from_u32(unit as u32).unwrap_or(char::REPLACEMENT_CHARACTER))
        }
        PhysicalType::Integer1 => Value::SignedInteger(bytes[0] as i8 as i64),
        PhysicalType::Integer2 => Value::SignedInteger(read_u16(bytes, 0) as i16 as i64),
        PhysicalType::Integer4 => Value::SignedInteger(read_u32(bytes, 0) as i32 as i64),
        PhysicalType::UnsignedInteger1 => Value::UnsignedInteger(bytes[0] as u64),
        PhysicalType::UnsignedInteger2 => Value::UnsignedInteger(read_u16(bytes, 0) as u64),
        PhysicalType::UnsignedInteger4 => Value::UnsignedInteger(read_u32(bytes, 0) as u64),
        PhysicalType::Real4 => Value::Real(read_f32(bytes, 0) as f64),
        PhysicalType::Real8 => Value::Real(read_f64(bytes, 0)),
        PhysicalType::Complex8 => Value::Complex(Complex::new(
            read_f32(bytes, 0) as f64,
            read_f32(bytes, 4) as f64,
        )),
        PhysicalType::Complex16 => {
            Value::Complex(Complex::new(read_f64(bytes, 0), read_f64(bytes, 8)))
        }
        PhysicalType::Timestamp => {
            Value::Timestamp(Timestamp::new(read_u32(bytes, 0), read_f64(bytes, 4)))
        }
        PhysicalType::Guid => Value::Tag(read_guid(bytes, 0)),
    }
}

/// A scalar element: one primitive value with a fixed byte width.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarElement {
    tag: Uuid,
    value_type: PhysicalType,
    value: [u8; 16],
}

impl ScalarElement {
    /// Build a scalar from its raw little-endian value bytes.
    ///
    /// `bytes` must hold at least `value_type.byte_size()` bytes.
    pub fn new(tag: Uuid, value_type: PhysicalType, bytes: &[u8]) -> Result<Self> {
        let size = value_type.byte_size();
        if bytes.len() < size {
            return Err(Error::TooShortBuffer {
                actual: bytes.len(),
                expected: size,
                file: file!(),
                line: line!(),
            });
        }

        let mut value = [0u8; 16];
        value[..size].copy_from_slice(&bytes[..size]);

        Ok(ScalarElement {
            tag,
            value_type,
            value,
        })
    }

    /// Tag identifier naming the semantic role of this element.
    pub fn tag(&self) -> Uuid {
        self.tag
    }

    /// Physical type of the stored value.
    pub fn value_type(&self) -> PhysicalType {
        self.value_type
    }

    /// Raw little-endian value bytes, exactly `value_type().byte_size()` long.
    pub fn raw_value(&self) -> &[u8] {
        &self.value[..self.value_type.byte_size()]
    }

    /// Decode the stored value.
    pub fn value(&self) -> Value {
        decode_value(self.value_type, &self.value)
    }

    /// Decode as an unsigned 32-bit integer.
    ///
    /// Accepts any integer-valued physical type that fits; anything else is
    /// a [`Error::StructuralMismatch`].
    pub fn get_u32(&self) -> Result<u32> {
        self.value()
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .ok_or_else(|| Error::StructuralMismatch {
                message: format!(
                    "expected an unsigned integer scalar, found {}",
                    self.value_type
                ),
            })
    }

    /// Decode as a 64-bit float.
    ///
    /// Accepts any integer or real physical type.
    pub fn get_f64(&self) -> Result<f64> {
        self.value()
            .as_f64()
            .ok_or_else(|| Error::StructuralMismatch {
                message: format!("expected a numeric scalar, found {}", self.value_type),
            })
    }

    /// Decode as a timestamp.
    pub fn get_timestamp(&self) -> Result<Timestamp> {
        match self.value() {
            Value::Timestamp(ts) => Ok(ts),
            _ => Err(Error::StructuralMismatch {
                message: format!("expected a timestamp scalar, found {}", self.value_type),
            }),
        }
    }

    /// Decode as a tag identifier.
    pub fn get_guid(&self) -> Result<Uuid> {
        match self.value() {
            Value::Tag(tag) => Ok(tag),
            _ => Err(Error::StructuralMismatch {
                message: format!(
                    "expected a tag identifier scalar, found {}",
                    self.value_type
                ),
            }),
        }
    }
}

/// A vector element: a homogeneous run of primitive values.
///
/// The byte buffer is exactly `len() * value_type().byte_size()` bytes;
/// values are accessed by index with type-specific decoding.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorElement {
    tag: Uuid,
    value_type: PhysicalType,
    values: Vec<u8>,
}

impl VectorElement {
    /// Build a vector from its declared element count and raw byte buffer.
    ///
    /// The buffer length must equal `size * value_type.byte_size()`.
    pub fn new(tag: Uuid, value_type: PhysicalType, size: usize, values: Vec<u8>) -> Result<Self> {
        let expected = size
            .checked_mul(value_type.byte_size())
            .ok_or_else(|| Error::StructuralMismatch {
                message: format!("vector size {size} overflows its byte length"),
            })?;

        if values.len() != expected {
            return Err(Error::StructuralMismatch {
                message: format!(
                    "vector declares {size} values of {} but holds {} bytes (expected {expected})",
                    value_type,
                    values.len()
                ),
            });
        }

        Ok(VectorElement {
            tag,
            value_type,
            values,
        })
    }

    /// Tag identifier naming the semantic role of this element.
    pub fn tag(&self) -> Uuid {
        self.tag
    }

    /// Physical type of the stored values.
    pub fn value_type(&self) -> PhysicalType {
        self.value_type
    }

    /// Number of values in the vector.
    pub fn len(&self) -> usize {
        self.values.len() / self.value_type.byte_size()
    }

    /// Returns true if the vector holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Raw little-endian buffer backing all values.
    pub fn raw_values(&self) -> &[u8] {
        &self.values
    }

    /// Decode the value at `index`.
    pub fn get(&self, index: usize) -> Result<Value> {
        if index >= self.len() {
            return Err(Error::StructuralMismatch {
                message: format!(
                    "vector index {index} out of range for {} values",
                    self.len()
                ),
            });
        }

        let width = self.value_type.byte_size();
        Ok(decode_value(self.value_type, &self.values[index * width..]))
    }

    /// Decode the value at `index` as an unsigned 32-bit integer.
    pub fn get_u32(&self, index: usize) -> Result<u32> {
        self.get(index)?
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .ok_or_else(|| Error::StructuralMismatch {
                message: format!(
                    "expected an unsigned integer vector value, found {}",
                    self.value_type
                ),
            })
    }

    /// Decode the whole vector as text, trimming NUL padding.
    ///
    /// `Char2` vectors decode as UTF-16; everything else is treated as
    /// Latin-1, matching how producers store names and labels.
    pub fn as_text(&self) -> String {
        let text: String = if self.value_type == PhysicalType::Char2 {
            let units: Vec<u16> = self
                .values
                .chunks_exact(2)
                .map(|chunk| u16::from_le_bytes([chunk[0], chunk[1]]))
                .collect();
            String::from_utf16_lossy(&units)
        } else {
            self.values.iter().map(|&b| b as char).collect()
        };

        text.trim_matches('\0').to_string()
    }
}

/// A collection element: an ordered list of child elements.
///
/// Children may repeat tags; lookup accessors preserve original order.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionElement {
    tag: Uuid,
    elements: Vec<Element>,
}

impl CollectionElement {
    /// Build a collection from its ordered children.
    pub fn new(tag: Uuid, elements: Vec<Element>) -> Self {
        CollectionElement { tag, elements }
    }

    /// Tag identifier naming the semantic role of this element.
    ///
    /// For a record body's top-level collection this is the enclosing
    /// record's type tag.
    pub fn tag(&self) -> Uuid {
        self.tag
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if the collection has no children.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// All direct children in original order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// All direct children matching `tag`, preserving original order.
    pub fn elements_by_tag(&self, tag: Uuid) -> impl Iterator<Item = &Element> {
        self.elements.iter().filter(move |e| e.tag() == tag)
    }

    /// The single direct child matching `tag`, if any.
    ///
    /// A duplicate tag is a schema violation from the producer; the first
    /// match wins and a warning is logged rather than failing the decode.
    fn single_by_tag(&self, tag: Uuid) -> Option<&Element> {
        let mut matches = self.elements_by_tag(tag);
        let first = matches.next()?;
        if matches.next().is_some() {
            warn!("duplicate tag {tag} in collection {}; using first match", self.tag);
        }
        Some(first)
    }

    /// The single collection child matching `tag`, if present and a collection.
    pub fn collection_by_tag(&self, tag: Uuid) -> Option<&CollectionElement> {
        self.single_by_tag(tag).and_then(Element::as_collection)
    }

    /// The single scalar child matching `tag`, if present and a scalar.
    pub fn scalar_by_tag(&self, tag: Uuid) -> Option<&ScalarElement> {
        self.single_by_tag(tag).and_then(Element::as_scalar)
    }

    /// The single vector child matching `tag`, if present and a vector.
    pub fn vector_by_tag(&self, tag: Uuid) -> Option<&VectorElement> {
        self.single_by_tag(tag).and_then(Element::as_vector)
    }
}

/// A generic node in a record body's element tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// Ordered list of child elements
    Collection(CollectionElement),
    /// Single primitive value
    Scalar(ScalarElement),
    /// Homogeneous run of primitive values
    Vector(VectorElement),
}

impl Element {
    /// Tag identifier naming the semantic role of this element.
    pub fn tag(&self) -> Uuid {
        match self {
            Element::Collection(c) => c.tag(),
            Element::Scalar(s) => s.tag(),
            Element::Vector(v) => v.tag(),
        }
    }

    /// Kind of this element.
    pub fn type_of(&self) -> ElementType {
        match self {
            Element::Collection(_) => ElementType::Collection,
            Element::Scalar(_) => ElementType::Scalar,
            Element::Vector(_) => ElementType::Vector,
        }
    }

    /// Borrow as a collection, if this is one.
    pub fn as_collection(&self) -> Option<&CollectionElement> {
        match self {
            Element::Collection(c) => Some(c),
            _ => None,
        }
    }

    /// Borrow as a scalar, if this is one.
    pub fn as_scalar(&self) -> Option<&ScalarElement> {
        match self {
            Element::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow as a vector, if this is one.
    pub fn as_vector(&self) -> Option<&VectorElement> {
        match self {
            Element::Vector(v) => Some(v),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::uuid;

    const TAG_A: Uuid = uuid!("00000000-0000-0000-0000-00000000000a");
    const TAG_B: Uuid = uuid!("00000000-0000-0000-0000-00000000000b");

    #[test]
    fn scalar_decoding() {
        let s = ScalarElement::new(TAG_A, PhysicalType::UnsignedInteger4, &7u32.to_le_bytes())
            .unwrap();
        assert_eq!(s.value(), Value::UnsignedInteger(7));
        assert_eq!(s.get_u32().unwrap(), 7);
        assert_eq!(s.get_f64().unwrap(), 7.0);

        let s = ScalarElement::new(TAG_A, PhysicalType::Real8, &1.5f64.to_le_bytes()).unwrap();
        assert_eq!(s.value(), Value::Real(1.5));
        assert!(s.get_timestamp().is_err());

        let mut ts_bytes = Vec::new();
        ts_bytes.extend_from_slice(&25_567u32.to_le_bytes());
        ts_bytes.extend_from_slice(&30.0f64.to_le_bytes());
        let s = ScalarElement::new(TAG_A, PhysicalType::Timestamp, &ts_bytes).unwrap();
        assert_eq!(s.get_timestamp().unwrap(), Timestamp::new(25_567, 30.0));
    }

    #[test]
    fn scalar_guid_roundtrip() {
        let s = ScalarElement::new(TAG_A, PhysicalType::Guid, &TAG_B.to_bytes_le()).unwrap();
        assert_eq!(s.get_guid().unwrap(), TAG_B);
    }

    #[test]
    fn scalar_too_short() {
        assert!(ScalarElement::new(TAG_A, PhysicalType::Real8, &[0u8; 4]).is_err());
    }

    #[test]
    fn vector_indexing() {
        let mut bytes = Vec::new();
        for v in [1.0f64, 2.0, 3.0] {
            bytes.extend_from_slice(&v.to_le_bytes());
        }
        let v = VectorElement::new(TAG_A, PhysicalType::Real8, 3, bytes).unwrap();
        assert_eq!(v.len(), 3);
        assert_eq!(v.get(1).unwrap(), Value::Real(2.0));
        assert!(v.get(3).is_err());
    }

    #[test]
    fn vector_size_mismatch() {
        let result = VectorElement::new(TAG_A, PhysicalType::Real8, 3, vec![0u8; 16]);
        assert!(matches!(result, Err(Error::StructuralMismatch { .. })));
    }

    #[test]
    fn vector_complex_pairs() {
        let mut bytes = Vec::new();
        for v in [1.0f32, -1.0, 2.0, -2.0] {
            bytes.extend_from_slice(&v.to_le_bytes());
        }
        let v = VectorElement::new(TAG_A, PhysicalType::Complex8, 2, bytes).unwrap();
        assert_eq!(v.get(0).unwrap(), Value::Complex(Complex::new(1.0, -1.0)));
        assert_eq!(v.get(1).unwrap(), Value::Complex(Complex::new(2.0, -2.0)));
    }

    #[test]
    fn vector_text() {
        let v = VectorElement::new(
            TAG_A,
            PhysicalType::Char1,
            8,
            b"monitor\0".to_vec(),
        )
        .unwrap();
        assert_eq!(v.as_text(), "monitor");
    }

    #[test]
    fn collection_lookup_preserves_order() {
        let s1 = ScalarElement::new(TAG_A, PhysicalType::UnsignedInteger1, &[1]).unwrap();
        let s2 = ScalarElement::new(TAG_B, PhysicalType::UnsignedInteger1, &[2]).unwrap();
        let s3 = ScalarElement::new(TAG_A, PhysicalType::UnsignedInteger1, &[3]).unwrap();
        let collection = CollectionElement::new(
            TAG_B,
            vec![
                Element::Scalar(s1),
                Element::Scalar(s2),
                Element::Scalar(s3),
            ],
        );

        let matches: Vec<_> = collection.elements_by_tag(TAG_A).collect();
        assert_eq!(matches.len(), 2);

        // Duplicate tags resolve to the first match.
        let first = collection.scalar_by_tag(TAG_A).unwrap();
        assert_eq!(first.value(), Value::UnsignedInteger(1));

        // Kind-checked lookup yields nothing for a mismatched kind.
        assert!(collection.vector_by_tag(TAG_A).is_none());
        assert!(collection.collection_by_tag(TAG_B).is_none());
    }
}
