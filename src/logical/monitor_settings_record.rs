// logical/monitor_settings_record.rs
//! The monitor settings record.

use crate::physical::{Record, RecordType};
use crate::{Error, Result};
use uuid::{Uuid, uuid};

/// Tag that identifies the nominal line frequency.
pub const NOMINAL_FREQUENCY_TAG: Uuid = uuid!("0fa118c3-cb4a-11d2-b30b-fe25cb9a1760");

/// A monitor settings record in a PQDIF file.
///
/// Settings apply to the observation records that follow until superseded by
/// a later monitor settings record.
#[derive(Debug, Clone)]
pub struct MonitorSettingsRecord {
    record: Record,
}

impl MonitorSettingsRecord {
    /// Interpret a physical record as a monitor settings record.
    ///
    /// Fails with [`Error::ProtocolViolation`] if the record is of any other
    /// type.
    pub fn from_record(record: Record) -> Result<Self> {
        if record.header.record_type() != RecordType::MonitorSettings {
            return Err(Error::ProtocolViolation {
                message: format!(
                    "expected a monitor settings record, found {:?} at offset {:#x}",
                    record.header.record_type(),
                    record.header.position
                ),
            });
        }

        Ok(MonitorSettingsRecord { record })
    }

    /// The underlying physical record.
    pub fn physical_record(&self) -> &Record {
        &self.record
    }

    /// Nominal line frequency in hertz. Defaults to 60 Hz when absent.
    pub fn nominal_frequency(&self) -> Result<f64> {
        match self.record.body()?.scalar_by_tag(NOMINAL_FREQUENCY_TAG) {
            None => Ok(60.0),
            Some(scalar) => scalar.get_f64(),
        }
    }
}
