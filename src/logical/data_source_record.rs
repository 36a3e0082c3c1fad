// logical/data_source_record.rs
//! The data source record: the measuring device and its channel definitions.

use crate::logical::channel_definition::ChannelDefinition;
use crate::physical::{Record, RecordType};
use crate::{Error, Result};
use uuid::{Uuid, uuid};

/// Tag that identifies the data source name.
pub const DATA_SOURCE_NAME_TAG: Uuid = uuid!("b48d8587-f5f5-11cf-9d89-0080c72e70a3");

/// Tag that identifies the channel definitions collection.
pub const CHANNEL_DEFINITIONS_TAG: Uuid = uuid!("b48d858d-f5f5-11cf-9d89-0080c72e70a3");

/// Tag that identifies a single channel definition within the collection.
pub const ONE_CHANNEL_DEFINITION_TAG: Uuid = uuid!("b48d858e-f5f5-11cf-9d89-0080c72e70a3");

/// A data source record in a PQDIF file.
///
/// Defines the channels a device records; observation records reference
/// these definitions by index. A file may carry several data source records
/// and each applies to the observations that follow it.
#[derive(Debug, Clone)]
pub struct DataSourceRecord {
    record: Record,
}

impl DataSourceRecord {
    /// Interpret a physical record as a data source record.
    ///
    /// Fails with [`Error::ProtocolViolation`] if the record is of any other
    /// type.
    pub fn from_record(record: Record) -> Result<Self> {
        if record.header.record_type() != RecordType::DataSource {
            return Err(Error::ProtocolViolation {
                message: format!(
                    "expected a data source record, found {:?} at offset {:#x}",
                    record.header.record_type(),
                    record.header.position
                ),
            });
        }

        Ok(DataSourceRecord { record })
    }

    /// The underlying physical record.
    pub fn physical_record(&self) -> &Record {
        &self.record
    }

    /// Name of the data source, if present.
    pub fn data_source_name(&self) -> Result<Option<String>> {
        Ok(self
            .record
            .body()?
            .vector_by_tag(DATA_SOURCE_NAME_TAG)
            .map(|v| v.as_text()))
    }

    /// The channel definitions in this data source, in file order.
    ///
    /// Channel instances refer to this list positionally, so the order is
    /// significant.
    pub fn channel_definitions(&self) -> Result<Vec<ChannelDefinition<'_>>> {
        let collection = self
            .record
            .body()?
            .collection_by_tag(CHANNEL_DEFINITIONS_TAG)
            .ok_or_else(|| Error::StructuralMismatch {
                message: "data source record has no channel definitions".to_string(),
            })?;

        Ok(collection
            .elements_by_tag(ONE_CHANNEL_DEFINITION_TAG)
            .filter_map(|e| e.as_collection())
            .map(|c| ChannelDefinition::new(c, self))
            .collect())
    }
}
