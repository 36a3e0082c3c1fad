// logical/parser.rs
//! The logical parser: a pull-based reader of observation records.

use std::sync::Arc;

use crate::logical::container_record::ContainerRecord;
use crate::logical::data_source_record::DataSourceRecord;
use crate::logical::monitor_settings_record::MonitorSettingsRecord;
use crate::logical::observation_record::ObservationRecord;
use crate::physical::{PhysicalParser, RecordType};
use crate::{Error, Result};
use log::debug;

/// Parses the logical structure of a PQDIF file.
///
/// Opening the parser consumes the mandatory container record and configures
/// body decompression from it. After that the parser walks the record chain
/// on demand, tracking the most recent data source and monitor settings
/// records so each observation can be handed out with the context that
/// applies to it.
///
/// # Example
///
/// ```no_run
/// use pqdif_rs::logical::LogicalParser;
/// use pqdif_rs::Result;
///
/// fn channel_names(path: &str) -> Result<()> {
///     let mut parser = LogicalParser::open(path)?;
///     while let Some(observation) = parser.next_observation_record()? {
///         for channel in observation.channel_instances()? {
///             let definition = channel.definition()?;
///             println!("{:?}", definition.channel_name());
///         }
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct LogicalParser {
    physical_parser: PhysicalParser,
    container_record: ContainerRecord,
    current_data_source: Option<Arc<DataSourceRecord>>,
    current_monitor_settings: Option<Arc<MonitorSettingsRecord>>,
    next_observation: Option<ObservationRecord>,
}

impl LogicalParser {
    /// Open a PQDIF file from disk and parse its container record.
    pub fn open(path: &str) -> Result<Self> {
        Self::new(PhysicalParser::open(path)?)
    }

    /// Construct a parser over complete file contents and parse the
    /// container record.
    pub fn from_bytes(buffer: Vec<u8>) -> Result<Self> {
        Self::new(PhysicalParser::from_bytes(buffer))
    }

    fn new(mut physical_parser: PhysicalParser) -> Result<Self> {
        // The container record must come first and is always uncompressed;
        // it declares the compression applied to every record after it.
        let container_record = ContainerRecord::from_record(physical_parser.next_record()?)?;
        physical_parser.set_compression_style(container_record.compression_style()?)?;
        physical_parser.set_compression_algorithm(container_record.compression_algorithm()?)?;

        Ok(LogicalParser {
            physical_parser,
            container_record,
            current_data_source: None,
            current_monitor_settings: None,
            next_observation: None,
        })
    }

    /// The container record, parsed when the file was opened.
    pub fn container_record(&self) -> &ContainerRecord {
        &self.container_record
    }

    /// Returns true if another observation record can be read.
    ///
    /// Reads ahead through the record chain, caching data source and monitor
    /// settings records as it encounters them, until an observation record
    /// or the end of the file is found. Idempotent until the buffered
    /// observation is taken by [`next_observation_record`](Self::next_observation_record).
    pub fn has_next_observation_record(&mut self) -> Result<bool> {
        while self.next_observation.is_none() && self.physical_parser.has_next_record() {
            let record = self.physical_parser.next_record()?;

            match record.header.record_type() {
                RecordType::DataSource => {
                    self.current_data_source = Some(Arc::new(DataSourceRecord::from_record(record)?));
                }
                RecordType::MonitorSettings => {
                    self.current_monitor_settings =
                        Some(Arc::new(MonitorSettingsRecord::from_record(record)?));
                }
                RecordType::Observation => {
                    self.next_observation = Some(ObservationRecord::from_record(
                        record,
                        self.current_data_source.clone(),
                        self.current_monitor_settings.clone(),
                    )?);
                }
                RecordType::Container => {
                    // The container record was consumed on open; a second one
                    // means the record chain is not trustworthy.
                    return Err(Error::ProtocolViolation {
                        message: format!(
                            "found a second container record at offset {:#x}",
                            record.header.position
                        ),
                    });
                }
                RecordType::Unknown => {
                    // The rest of the file may still be valid.
                    debug!(
                        "skipping unrecognized record type {} at offset {:#x}",
                        record.header.type_tag, record.header.position
                    );
                }
            }
        }

        Ok(self.next_observation.is_some())
    }

    /// Read the next observation record, or `None` at end of file.
    pub fn next_observation_record(&mut self) -> Result<Option<ObservationRecord>> {
        self.has_next_observation_record()?;
        Ok(self.next_observation.take())
    }

    /// Set the parser back to the first record after the container record.
    ///
    /// Clears the cached data source and monitor settings, so observations
    /// read after a reset re-associate from the start of the file.
    pub fn reset(&mut self) -> Result<()> {
        self.current_data_source = None;
        self.current_monitor_settings = None;
        self.next_observation = None;

        self.physical_parser.reset();
        // Skip the container record.
        self.physical_parser.next_record()?;
        Ok(())
    }

    /// Iterate over the remaining observation records.
    ///
    /// Each item is the result of one
    /// [`next_observation_record`](Self::next_observation_record) call, so a
    /// damaged record surfaces as an `Err` item and the iterator ends at end
    /// of file.
    pub fn observations(&mut self) -> Observations<'_> {
        Observations { parser: self }
    }

    /// Release the file contents. Further reads report end of file.
    pub fn close(&mut self) {
        self.next_observation = None;
        self.physical_parser.close();
    }
}

/// Iterator over the observation records remaining in a [`LogicalParser`].
///
/// Created by [`LogicalParser::observations`].
#[derive(Debug)]
pub struct Observations<'a> {
    parser: &'a mut LogicalParser,
}

impl Iterator for Observations<'_> {
    type Item = Result<ObservationRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        self.parser.next_observation_record().transpose()
    }
}
