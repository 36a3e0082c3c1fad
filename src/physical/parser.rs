// physical/parser.rs
//! The physical parser: record framing, body decompression, and recursive
//! element decoding with offset-indirected values.

use crate::physical::common::{read_guid, read_i32, validate_buffer_size};
use crate::physical::element::{
    CollectionElement, Element, ElementType, ScalarElement, VectorElement,
};
use crate::physical::record::{RECORD_HEADER_SIZE, Record, RecordHeader};
use crate::physical::PhysicalType;
use crate::{Error, Result};

/// How compression is applied across the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum CompressionStyle {
    /// No compression.
    None = 0,
    /// Compress the entire file after the container record.
    ///
    /// Deprecated by the format and intentionally unsupported here.
    TotalFile = 1,
    /// Compress the body of each record.
    RecordLevel = 2,
}

impl CompressionStyle {
    /// Convert from the raw field value stored in the container record.
    pub fn from_u32(value: u32) -> Option<Self> {
        match value {
            0 => Some(CompressionStyle::None),
            1 => Some(CompressionStyle::TotalFile),
            2 => Some(CompressionStyle::RecordLevel),
            _ => None,
        }
    }
}

/// Which algorithm compresses record bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum CompressionAlgorithm {
    /// No compression.
    None = 0,
    /// Zlib (deflate with zlib framing).
    Zlib = 1,
    /// PKZIP compression.
    ///
    /// Deprecated by the format and intentionally unsupported here.
    Pkzip = 64,
}

impl CompressionAlgorithm {
    /// Convert from the raw field value stored in the container record.
    pub fn from_u32(value: u32) -> Option<Self> {
        match value {
            0 => Some(CompressionAlgorithm::None),
            1 => Some(CompressionAlgorithm::Zlib),
            64 => Some(CompressionAlgorithm::Pkzip),
            _ => None,
        }
    }
}

/// Parses the physical structure of a PQDIF file.
///
/// The parser owns the whole file as an in-memory buffer plus a cursor and
/// walks the record chain strictly forward. Bodies are inflated on demand
/// once the caller has configured the compression mode from the container
/// record; the very first record is always read with compression off.
///
/// # Example
///
/// ```no_run
/// use pqdif_rs::physical::PhysicalParser;
/// use pqdif_rs::Result;
///
/// fn dump(path: &str) -> Result<()> {
///     let mut parser = PhysicalParser::open(path)?;
///     while parser.has_next_record() {
///         let record = parser.next_record()?;
///         println!("{:?}", record.header.record_type());
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct PhysicalParser {
    /// File contents. Stored whole to allow the forward record walk and the
    /// body-internal offset seeks without touching the filesystem again.
    buffer: Vec<u8>,
    position: usize,
    has_next_record: bool,
    compression_style: CompressionStyle,
    compression_algorithm: CompressionAlgorithm,
}

impl PhysicalParser {
    /// Open a PQDIF file from disk.
    pub fn open(path: &str) -> Result<Self> {
        Ok(Self::from_bytes(std::fs::read(path)?))
    }

    /// Construct a parser over complete file contents.
    pub fn from_bytes(buffer: Vec<u8>) -> Self {
        PhysicalParser {
            buffer,
            position: 0,
            has_next_record: true,
            compression_style: CompressionStyle::None,
            compression_algorithm: CompressionAlgorithm::None,
        }
    }

    /// Compression style currently applied to record bodies.
    pub fn compression_style(&self) -> CompressionStyle {
        self.compression_style
    }

    /// Set the compression style, normally from the container record.
    ///
    /// Whole-file compression fails immediately with
    /// [`Error::UnsupportedCompression`].
    pub fn set_compression_style(&mut self, style: CompressionStyle) -> Result<()> {
        if style == CompressionStyle::TotalFile {
            return Err(Error::UnsupportedCompression(
                "total file compression has been deprecated and is not supported".to_string(),
            ));
        }

        self.compression_style = style;
        Ok(())
    }

    /// Compression algorithm currently applied to record bodies.
    pub fn compression_algorithm(&self) -> CompressionAlgorithm {
        self.compression_algorithm
    }

    /// Set the compression algorithm, normally from the container record.
    ///
    /// PKZIP fails immediately with [`Error::UnsupportedCompression`].
    pub fn set_compression_algorithm(&mut self, algorithm: CompressionAlgorithm) -> Result<()> {
        if algorithm == CompressionAlgorithm::Pkzip {
            return Err(Error::UnsupportedCompression(
                "PKZIP compression has been deprecated and is not supported".to_string(),
            ));
        }

        self.compression_algorithm = algorithm;
        Ok(())
    }

    /// Returns true if this parser has not reached the end of the file.
    pub fn has_next_record(&self) -> bool {
        self.has_next_record
    }

    /// Read the record at the current position and advance to the next one.
    ///
    /// The returned record's body collection carries the header's
    /// record-type tag. A next-record offset of 0 marks end of stream; any
    /// other offset must land strictly forward of the current header and
    /// inside the file.
    pub fn next_record(&mut self) -> Result<Record> {
        if !self.has_next_record {
            return Err(Error::ProtocolViolation {
                message: "attempted to read past the end of the record stream".to_string(),
            });
        }

        let offset = self.position as u64;
        if self.position + RECORD_HEADER_SIZE > self.buffer.len() {
            return Err(Error::MalformedHeader {
                offset,
                message: format!(
                    "record header extends past end of file ({} bytes)",
                    self.buffer.len()
                ),
            });
        }

        let header = RecordHeader::from_bytes(&self.buffer[self.position..], offset)?;
        let body = self.read_record_body(&header)?;

        let next = header.next_record_position;
        if next == 0 {
            self.has_next_record = false;
        } else {
            let next = next as usize;
            if next <= self.position || next + RECORD_HEADER_SIZE > self.buffer.len() {
                return Err(Error::MalformedHeader {
                    offset,
                    message: format!("next record position {next} is not a valid forward offset"),
                });
            }
            self.position = next;
        }

        Ok(Record { header, body })
    }

    /// Set the parser back to the beginning of the file.
    ///
    /// Keeps the compression configuration; the file is not reopened.
    pub fn reset(&mut self) {
        self.position = 0;
        self.has_next_record = true;
    }

    /// Release the file contents. Further reads report end of stream.
    pub fn close(&mut self) {
        self.buffer = Vec::new();
        self.position = 0;
        self.has_next_record = false;
    }

    // Reads and decodes the body of the record framed by `header`.
    fn read_record_body(&self, header: &RecordHeader) -> Result<Option<CollectionElement>> {
        if header.body_size == 0 {
            return Ok(None);
        }

        let body_start = self.position + RECORD_HEADER_SIZE;
        let body_end = body_start + header.body_size as usize;
        if body_end > self.buffer.len() {
            return Err(Error::MalformedHeader {
                offset: header.position,
                message: format!(
                    "record body of {} bytes extends past end of file",
                    header.body_size
                ),
            });
        }

        let raw = &self.buffer[body_start..body_end];
        let decompressed;
        let body = if self.compression_style != CompressionStyle::None
            && self.compression_algorithm != CompressionAlgorithm::None
        {
            decompressed = miniz_oxide::inflate::decompress_to_vec_zlib(raw).map_err(|e| {
                Error::DecompressionFailure {
                    offset: header.position,
                    message: format!("{e:?}"),
                }
            })?;
            decompressed.as_slice()
        } else {
            raw
        };

        let mut reader = BodyReader::new(body, header.position);
        let elements = reader.read_element_list()?;
        Ok(Some(CollectionElement::new(header.type_tag, elements)))
    }
}

/// Cursor over one decompressed record body.
///
/// Element links are byte offsets relative to the start of the body, so the
/// reader never needs the enclosing file; `record_offset` is carried only
/// for error messages.
struct BodyReader<'a> {
    bytes: &'a [u8],
    position: usize,
    record_offset: u64,
}

impl<'a> BodyReader<'a> {
    fn new(bytes: &'a [u8], record_offset: u64) -> Self {
        BodyReader {
            bytes,
            position: 0,
            record_offset,
        }
    }

    fn take(&mut self, count: usize) -> Result<&'a [u8]> {
        validate_buffer_size(&self.bytes[self.position..], count)?;
        let slice = &self.bytes[self.position..self.position + count];
        self.position += count;
        Ok(slice)
    }

    fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    fn read_i32(&mut self) -> Result<i32> {
        Ok(read_i32(self.take(4)?, 0))
    }

    fn seek(&mut self, position: usize) -> Result<()> {
        if position > self.bytes.len() {
            return Err(Error::StructuralMismatch {
                message: format!(
                    "element link {position} is outside the record body at offset {:#x}",
                    self.record_offset
                ),
            });
        }

        self.position = position;
        Ok(())
    }

    /// Read an int32 child count followed by that many encoded elements.
    ///
    /// Used for the top-level body collection (which has no element header
    /// of its own) and for nested collection payloads.
    fn read_element_list(&mut self) -> Result<Vec<Element>> {
        let size = self.read_i32()?;
        if size < 0 {
            return Err(Error::StructuralMismatch {
                message: format!(
                    "collection declares negative size {size} in record at offset {:#x}",
                    self.record_offset
                ),
            });
        }

        // Each encoded element occupies at least 20 bytes, so a declared
        // count the remaining body cannot hold is rejected before any
        // allocation is sized from it.
        let remaining = self.bytes.len() - self.position;
        if size as usize > remaining / 20 {
            return Err(Error::StructuralMismatch {
                message: format!(
                    "collection declares {size} elements but only {remaining} bytes remain \
                     in record at offset {:#x}",
                    self.record_offset
                ),
            });
        }

        let mut elements = Vec::with_capacity(size as usize);
        for _ in 0..size {
            elements.push(self.read_element()?);
        }

        Ok(elements)
    }

    /// Decode one element at the cursor.
    ///
    /// Layout: 16-byte tag, kind byte, physical type byte, embedded flag,
    /// reserved byte. Unless the element is an embedded scalar, a 4-byte
    /// body-relative link follows and the payload lives wherever it points;
    /// the cursor is restored to the byte after the link once the payload is
    /// consumed, so sibling decoding is unaffected by where the link landed.
    fn read_element(&mut self) -> Result<Element> {
        let tag = read_guid(self.take(16)?, 0);
        let element_type = ElementType::from_u8(self.read_u8()?)?;
        let raw_value_type = self.read_u8()?;
        let is_embedded = self.read_u8()? != 0;
        let _reserved = self.read_u8()?;

        let mut return_position = None;
        if !is_embedded || element_type != ElementType::Scalar {
            let link = self.read_i32()?;
            if link < 0 {
                return Err(Error::StructuralMismatch {
                    message: format!(
                        "negative element link {link} in record at offset {:#x}",
                        self.record_offset
                    ),
                });
            }

            return_position = Some(self.position);
            self.seek(link as usize)?;
        }

        let element = match element_type {
            ElementType::Collection => {
                let elements = self.read_element_list()?;
                Element::Collection(CollectionElement::new(tag, elements))
            }
            ElementType::Scalar => {
                let value_type = PhysicalType::from_u8(raw_value_type)?;
                let bytes = self.take(value_type.byte_size())?;
                Element::Scalar(ScalarElement::new(tag, value_type, bytes)?)
            }
            ElementType::Vector => {
                let value_type = PhysicalType::from_u8(raw_value_type)?;
                let size = self.read_i32()?;
                if size < 0 {
                    return Err(Error::StructuralMismatch {
                        message: format!(
                            "vector declares negative size {size} in record at offset {:#x}",
                            self.record_offset
                        ),
                    });
                }

                let byte_len = (size as usize).checked_mul(value_type.byte_size()).ok_or_else(
                    || Error::StructuralMismatch {
                        message: format!("vector size {size} overflows its byte length"),
                    },
                )?;
                let bytes = self.take(byte_len)?.to_vec();
                Element::Vector(VectorElement::new(tag, value_type, size as usize, bytes)?)
            }
        };

        if let Some(position) = return_position {
            self.seek(position)?;
        }

        Ok(element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deprecated_compression_modes_rejected() {
        let mut parser = PhysicalParser::from_bytes(Vec::new());

        let err = parser
            .set_compression_style(CompressionStyle::TotalFile)
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedCompression(_)));

        let err = parser
            .set_compression_algorithm(CompressionAlgorithm::Pkzip)
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedCompression(_)));

        // The failed setters must leave the configuration untouched.
        assert_eq!(parser.compression_style(), CompressionStyle::None);
        assert_eq!(parser.compression_algorithm(), CompressionAlgorithm::None);

        parser
            .set_compression_style(CompressionStyle::RecordLevel)
            .unwrap();
        parser
            .set_compression_algorithm(CompressionAlgorithm::Zlib)
            .unwrap();
    }

    #[test]
    fn compression_mode_values() {
        assert_eq!(CompressionStyle::from_u32(2), Some(CompressionStyle::RecordLevel));
        assert_eq!(CompressionStyle::from_u32(3), None);
        assert_eq!(
            CompressionAlgorithm::from_u32(64),
            Some(CompressionAlgorithm::Pkzip)
        );
        assert_eq!(CompressionAlgorithm::from_u32(2), None);
    }

    #[test]
    fn body_reader_rejects_impossible_element_counts() {
        // A 4-byte body cannot hold even one element, let alone i32::MAX.
        let body = i32::MAX.to_le_bytes();

        let mut reader = BodyReader::new(&body, 0);
        assert!(matches!(
            reader.read_element_list(),
            Err(Error::StructuralMismatch { .. })
        ));
    }

    #[test]
    fn body_reader_rejects_bad_links() {
        // One element whose link points past the end of the body.
        let tag = uuid::uuid!("00000000-0000-0000-0000-00000000000a");
        let mut body = Vec::new();
        body.extend_from_slice(&1i32.to_le_bytes()); // collection size
        body.extend_from_slice(&tag.to_bytes_le());
        body.push(ElementType::Scalar.to_u8());
        body.push(PhysicalType::UnsignedInteger4.to_u8());
        body.push(0); // not embedded
        body.push(0); // reserved
        body.extend_from_slice(&1000i32.to_le_bytes()); // link out of range

        let mut reader = BodyReader::new(&body, 0);
        assert!(reader.read_element_list().is_err());
    }
}
