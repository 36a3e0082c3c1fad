// physical/record.rs
//! Record framing: the 64-byte record header and the (header, body) pair.

use crate::physical::CollectionElement;
use crate::physical::common::{read_guid, read_i32, read_u32, validate_buffer_size};
use crate::{Error, Result};
use uuid::{Uuid, uuid};

/// Fixed signature carried by every record header.
pub const RECORD_SIGNATURE: Uuid = uuid!("4a111440-e49f-11cf-9900-505144494600");

/// Record header size (64 bytes), fixed for every record.
pub const RECORD_HEADER_SIZE: usize = 64;

/// Tag identifying Container records.
pub const CONTAINER_RECORD_TAG: Uuid = uuid!("89738606-f1c3-11cf-9d89-0080c72e70a3");

/// Tag identifying Data Source records.
pub const DATA_SOURCE_RECORD_TAG: Uuid = uuid!("89738619-f1c3-11cf-9d89-0080c72e70a3");

/// Tag identifying Monitor Settings records.
pub const MONITOR_SETTINGS_RECORD_TAG: Uuid = uuid!("b48d858c-f5f5-11cf-9d89-0080c72e70a3");

/// Tag identifying Observation records.
pub const OBSERVATION_RECORD_TAG: Uuid = uuid!("8973861a-f1c3-11cf-9d89-0080c72e70a3");

/// Classification of a record by its type tag.
///
/// Unrecognized tags classify as [`Unknown`](Self::Unknown) and never abort
/// parsing; newer producers may add vendor record types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordType {
    /// The mandatory first record; carries format version and compression
    /// configuration.
    Container,
    /// Describes the measuring device and its channel definitions.
    DataSource,
    /// Monitor configuration, e.g. the nominal line frequency.
    MonitorSettings,
    /// One captured event/interval with per-channel instance data.
    Observation,
    /// Any record type this library does not recognize.
    Unknown,
}

impl RecordType {
    /// Classify a record-type tag.
    pub fn from_tag(tag: Uuid) -> Self {
        match tag {
            CONTAINER_RECORD_TAG => RecordType::Container,
            DATA_SOURCE_RECORD_TAG => RecordType::DataSource,
            MONITOR_SETTINGS_RECORD_TAG => RecordType::MonitorSettings,
            OBSERVATION_RECORD_TAG => RecordType::Observation,
            _ => RecordType::Unknown,
        }
    }

    /// The tag identifying this record type, if it is a known type.
    pub fn tag(self) -> Option<Uuid> {
        match self {
            RecordType::Container => Some(CONTAINER_RECORD_TAG),
            RecordType::DataSource => Some(DATA_SOURCE_RECORD_TAG),
            RecordType::MonitorSettings => Some(MONITOR_SETTINGS_RECORD_TAG),
            RecordType::Observation => Some(OBSERVATION_RECORD_TAG),
            RecordType::Unknown => None,
        }
    }
}

/// The fixed 64-byte header framing one physical record.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordHeader {
    /// Absolute file offset of this header.
    pub position: u64,
    /// Record signature; always [`RECORD_SIGNATURE`] in a well-formed file.
    pub signature: Uuid,
    /// Tag classifying the record's type.
    pub type_tag: Uuid,
    /// Header byte length; always 64.
    pub header_size: i32,
    /// Body byte length; 0 means the record has no body.
    pub body_size: i32,
    /// Absolute file offset of the next record header; 0 signals end of file.
    pub next_record_position: i32,
    /// Checksum over the record body. Not verified by this library.
    pub checksum: u32,
    /// Reserved padding.
    pub reserved: [u8; 16],
}

impl RecordHeader {
    /// Parse a record header from the first 64 bytes of `bytes`.
    ///
    /// `position` is the header's absolute file offset, used for error
    /// reporting and for the forward-offset invariant checked by the
    /// physical parser.
    pub fn from_bytes(bytes: &[u8], position: u64) -> Result<Self> {
        validate_buffer_size(bytes, RECORD_HEADER_SIZE)?;

        let signature = read_guid(bytes, 0);
        if signature != RECORD_SIGNATURE {
            return Err(Error::MalformedHeader {
                offset: position,
                message: format!(
                    "bad record signature {signature}, expected {RECORD_SIGNATURE}"
                ),
            });
        }

        let type_tag = read_guid(bytes, 16);
        let header_size = read_i32(bytes, 32);
        let body_size = read_i32(bytes, 36);
        let next_record_position = read_i32(bytes, 40);
        let checksum = read_u32(bytes, 44);
        let mut reserved = [0u8; 16];
        reserved.copy_from_slice(&bytes[48..64]);

        if header_size != RECORD_HEADER_SIZE as i32 {
            return Err(Error::MalformedHeader {
                offset: position,
                message: format!("header size {header_size}, expected {RECORD_HEADER_SIZE}"),
            });
        }

        if body_size < 0 {
            return Err(Error::MalformedHeader {
                offset: position,
                message: format!("negative body size {body_size}"),
            });
        }

        if next_record_position < 0 {
            return Err(Error::MalformedHeader {
                offset: position,
                message: format!("negative next record position {next_record_position}"),
            });
        }

        Ok(RecordHeader {
            position,
            signature,
            type_tag,
            header_size,
            body_size,
            next_record_position,
            checksum,
            reserved,
        })
    }

    /// Classify this record by its type tag.
    pub fn record_type(&self) -> RecordType {
        RecordType::from_tag(self.type_tag)
    }
}

/// One framed unit of the file: a header and an optional decoded body.
///
/// The body, when present, is the record's top-level element collection.
/// Its tag is assigned from the header's record-type tag at parse time so
/// logical views can treat the collection and the record interchangeably.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// The record's fixed-size header.
    pub header: RecordHeader,
    /// The decoded body collection; `None` when the body size was 0.
    pub body: Option<CollectionElement>,
}

impl Record {
    /// Borrow the body collection, failing if the record has none.
    pub fn body(&self) -> Result<&CollectionElement> {
        self.body.as_ref().ok_or_else(|| Error::StructuralMismatch {
            message: format!(
                "record at offset {:#x} has no body",
                self.header.position
            ),
        })
    }
}
