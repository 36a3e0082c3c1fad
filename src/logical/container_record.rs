// logical/container_record.rs
//! The container record: file metadata and compression configuration.

use crate::physical::{CompressionAlgorithm, CompressionStyle, Record, RecordType};
use crate::{Error, Result, Timestamp};
use uuid::{Uuid, uuid};

/// Tag that identifies the version info.
pub const VERSION_INFO_TAG: Uuid = uuid!("89738607-f1c3-11cf-9d89-0080c72e70a3");

/// Tag that identifies the file name.
pub const FILE_NAME_TAG: Uuid = uuid!("89738608-f1c3-11cf-9d89-0080c72e70a3");

/// Tag that identifies the date and time of creation.
pub const CREATION_TAG: Uuid = uuid!("89738609-f1c3-11cf-9d89-0080c72e70a3");

/// Tag that identifies the compression style of the file.
pub const COMPRESSION_STYLE_TAG: Uuid = uuid!("8973861b-f1c3-11cf-9d89-0080c72e70a3");

/// Tag that identifies the compression algorithm used when writing the file.
pub const COMPRESSION_ALGORITHM_TAG: Uuid = uuid!("8973861c-f1c3-11cf-9d89-0080c72e70a3");

/// The container record of a PQDIF file.
///
/// There is exactly one container record per file and it is always the first
/// physical record. It names the file, carries the writer's format version,
/// and declares how the bodies of all subsequent records are compressed.
#[derive(Debug, Clone)]
pub struct ContainerRecord {
    record: Record,
}

impl ContainerRecord {
    /// Interpret a physical record as a container record.
    ///
    /// Fails with [`Error::ProtocolViolation`] if the record is of any other
    /// type.
    pub fn from_record(record: Record) -> Result<Self> {
        if record.header.record_type() != RecordType::Container {
            return Err(Error::ProtocolViolation {
                message: format!(
                    "expected a container record, found {:?} at offset {:#x}",
                    record.header.record_type(),
                    record.header.position
                ),
            });
        }

        Ok(ContainerRecord { record })
    }

    /// The underlying physical record.
    pub fn physical_record(&self) -> &Record {
        &self.record
    }

    fn version_info(&self, index: usize) -> Result<u32> {
        self.record
            .body()?
            .vector_by_tag(VERSION_INFO_TAG)
            .ok_or_else(|| Error::StructuralMismatch {
                message: "container record has no version info".to_string(),
            })?
            .get_u32(index)
    }

    /// Major version number of the file writer.
    pub fn writer_major_version(&self) -> Result<u32> {
        self.version_info(0)
    }

    /// Minor version number of the file writer.
    pub fn writer_minor_version(&self) -> Result<u32> {
        self.version_info(1)
    }

    /// Major version the file is compatible with when read.
    pub fn compatible_major_version(&self) -> Result<u32> {
        self.version_info(2)
    }

    /// Minor version the file is compatible with when read.
    pub fn compatible_minor_version(&self) -> Result<u32> {
        self.version_info(3)
    }

    /// Name of the file at the time it was written.
    pub fn file_name(&self) -> Result<String> {
        self.record
            .body()?
            .vector_by_tag(FILE_NAME_TAG)
            .map(|v| v.as_text())
            .ok_or_else(|| Error::StructuralMismatch {
                message: "container record has no file name".to_string(),
            })
    }

    /// Date and time of file creation.
    pub fn creation(&self) -> Result<Timestamp> {
        self.record
            .body()?
            .scalar_by_tag(CREATION_TAG)
            .ok_or_else(|| Error::StructuralMismatch {
                message: "container record has no creation timestamp".to_string(),
            })?
            .get_timestamp()
    }

    /// Style of compression applied to record bodies.
    ///
    /// Defaults to [`CompressionStyle::None`] when the element is absent.
    /// An out-of-range value is an [`Error::UnsupportedCompression`].
    pub fn compression_style(&self) -> Result<CompressionStyle> {
        match self.record.body()?.scalar_by_tag(COMPRESSION_STYLE_TAG) {
            None => Ok(CompressionStyle::None),
            Some(scalar) => {
                let raw = scalar.get_u32()?;
                CompressionStyle::from_u32(raw).ok_or_else(|| {
                    Error::UnsupportedCompression(format!("unknown compression style {raw}"))
                })
            }
        }
    }

    /// Algorithm used to compress record bodies.
    ///
    /// Defaults to [`CompressionAlgorithm::None`] when the element is absent.
    /// An out-of-range value is an [`Error::UnsupportedCompression`].
    pub fn compression_algorithm(&self) -> Result<CompressionAlgorithm> {
        match self.record.body()?.scalar_by_tag(COMPRESSION_ALGORITHM_TAG) {
            None => Ok(CompressionAlgorithm::None),
            Some(scalar) => {
                let raw = scalar.get_u32()?;
                CompressionAlgorithm::from_u32(raw).ok_or_else(|| {
                    Error::UnsupportedCompression(format!("unknown compression algorithm {raw}"))
                })
            }
        }
    }
}
