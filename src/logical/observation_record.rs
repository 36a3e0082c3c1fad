// logical/observation_record.rs
//! Observation records: one captured event or interval of channel data.

use std::sync::Arc;

use crate::logical::channel_instance::ChannelInstance;
use crate::logical::data_source_record::DataSourceRecord;
use crate::logical::monitor_settings_record::MonitorSettingsRecord;
use crate::physical::{Record, RecordType};
use crate::{Error, Result, Timestamp};
use uuid::{Uuid, uuid};

/// Tag that identifies the name of the observation record.
pub const OBSERVATION_NAME_TAG: Uuid = uuid!("3d786f8a-f76e-11cf-9d89-0080c72e70a3");

/// Tag that identifies the time the observation record was created.
pub const TIME_CREATE_TAG: Uuid = uuid!("3d786f8b-f76e-11cf-9d89-0080c72e70a3");

/// Tag that identifies the start time of the data in the observation record.
pub const TIME_START_TAG: Uuid = uuid!("3d786f8c-f76e-11cf-9d89-0080c72e70a3");

/// Tag that identifies the type of trigger that caused the observation.
pub const TRIGGER_METHOD_TAG: Uuid = uuid!("3d786f8d-f76e-11cf-9d89-0080c72e70a3");

/// Tag that identifies the channel instances collection.
pub const CHANNEL_INSTANCES_TAG: Uuid = uuid!("3d786f91-f76e-11cf-9d89-0080c72e70a3");

/// Tag that identifies a single channel instance in the collection.
pub const ONE_CHANNEL_INSTANCE_TAG: Uuid = uuid!("3d786f92-f76e-11cf-9d89-0080c72e70a3");

/// An observation record in a PQDIF file.
///
/// Holds the captured data of one event or logging interval. Each
/// observation is associated with the data source and monitor settings
/// records that most recently preceded it in the file; the channel instances
/// inside the observation are defined by that data source's channel
/// definitions.
#[derive(Debug, Clone)]
pub struct ObservationRecord {
    record: Record,
    data_source: Option<Arc<DataSourceRecord>>,
    settings: Option<Arc<MonitorSettingsRecord>>,
}

impl ObservationRecord {
    /// Interpret a physical record as an observation record, associating it
    /// with the data source and monitor settings in effect at its position
    /// in the file.
    ///
    /// Fails with [`Error::ProtocolViolation`] if the record is of any other
    /// type.
    pub fn from_record(
        record: Record,
        data_source: Option<Arc<DataSourceRecord>>,
        settings: Option<Arc<MonitorSettingsRecord>>,
    ) -> Result<Self> {
        if record.header.record_type() != RecordType::Observation {
            return Err(Error::ProtocolViolation {
                message: format!(
                    "expected an observation record, found {:?} at offset {:#x}",
                    record.header.record_type(),
                    record.header.position
                ),
            });
        }

        Ok(ObservationRecord {
            record,
            data_source,
            settings,
        })
    }

    /// The underlying physical record.
    pub fn physical_record(&self) -> &Record {
        &self.record
    }

    /// The data source record that defines the channels in this observation,
    /// if one preceded it in the file.
    pub fn data_source(&self) -> Option<&DataSourceRecord> {
        self.data_source.as_deref()
    }

    /// The monitor settings in effect for this observation, if any preceded
    /// it in the file.
    pub fn settings(&self) -> Option<&MonitorSettingsRecord> {
        self.settings.as_deref()
    }

    /// Name of the observation record.
    pub fn name(&self) -> Result<String> {
        self.record
            .body()?
            .vector_by_tag(OBSERVATION_NAME_TAG)
            .map(|v| v.as_text())
            .ok_or_else(|| Error::StructuralMismatch {
                message: "observation record has no name".to_string(),
            })
    }

    /// Time the observation record was created, if present.
    pub fn time_create(&self) -> Result<Option<Timestamp>> {
        self.record
            .body()?
            .scalar_by_tag(TIME_CREATE_TAG)
            .map(|s| s.get_timestamp())
            .transpose()
    }

    /// Starting time of the data in the observation record.
    pub fn start_time(&self) -> Result<Timestamp> {
        self.record
            .body()?
            .scalar_by_tag(TIME_START_TAG)
            .ok_or_else(|| Error::StructuralMismatch {
                message: "observation record has no start time".to_string(),
            })?
            .get_timestamp()
    }

    /// Identifier of the trigger that caused the observation, if present.
    pub fn trigger_method_id(&self) -> Result<Option<Uuid>> {
        self.record
            .body()?
            .scalar_by_tag(TRIGGER_METHOD_TAG)
            .map(|s| s.get_guid())
            .transpose()
    }

    /// The channel instances in this observation record, in file order.
    pub fn channel_instances(&self) -> Result<Vec<ChannelInstance<'_>>> {
        let collection = self
            .record
            .body()?
            .collection_by_tag(CHANNEL_INSTANCES_TAG)
            .ok_or_else(|| Error::StructuralMismatch {
                message: "observation record has no channel instances".to_string(),
            })?;

        Ok(collection
            .elements_by_tag(ONE_CHANNEL_INSTANCE_TAG)
            .filter_map(|e| e.as_collection())
            .map(|c| ChannelInstance::new(c, self))
            .collect())
    }
}
