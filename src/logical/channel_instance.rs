// logical/channel_instance.rs
//! Channel instances: per-observation data for one defined channel.

use crate::logical::channel_definition::ChannelDefinition;
use crate::logical::observation_record::ObservationRecord;
use crate::logical::series_instance::SeriesInstance;
use crate::physical::CollectionElement;
use crate::{Error, Result};
use uuid::{Uuid, uuid};

/// Tag that identifies the channel definition index.
pub const CHANNEL_DEFINITION_INDEX_TAG: Uuid = uuid!("b48d858f-f5f5-11cf-9d89-0080c72e70a3");

/// Tag that identifies the series instances collection.
pub const SERIES_INSTANCES_TAG: Uuid = uuid!("3d786f93-f76e-11cf-9d89-0080c72e70a3");

/// Tag that identifies a single series instance in the collection.
pub const ONE_SERIES_INSTANCE_TAG: Uuid = uuid!("3d786f94-f76e-11cf-9d89-0080c72e70a3");

/// Tag that identifies the channel trigger module name.
pub const CHANNEL_TRIGGER_MODULE_NAME_TAG: Uuid = uuid!("0fa118c6-cb4a-11cf-9d89-0080c72e70a3");

/// Tag that identifies the cross trigger device name.
pub const CROSS_TRIGGER_DEVICE_NAME_TAG: Uuid = uuid!("0fa118c5-cb4a-11cf-9d89-0080c72e70a3");

/// A channel instance within an observation record.
///
/// Carries the recorded series for one channel. The channel is described by
/// a [`ChannelDefinition`] in the observation's data source record, located
/// by index.
#[derive(Debug, Clone, Copy)]
pub struct ChannelInstance<'a> {
    collection: &'a CollectionElement,
    observation: &'a ObservationRecord,
}

impl<'a> ChannelInstance<'a> {
    pub(crate) fn new(
        collection: &'a CollectionElement,
        observation: &'a ObservationRecord,
    ) -> Self {
        ChannelInstance {
            collection,
            observation,
        }
    }

    /// The observation record in which this channel instance resides.
    pub fn observation(&self) -> &'a ObservationRecord {
        self.observation
    }

    /// Index into the data source's channel definitions identifying the
    /// definition of this channel.
    pub fn channel_definition_index(&self) -> Result<u32> {
        self.collection
            .scalar_by_tag(CHANNEL_DEFINITION_INDEX_TAG)
            .ok_or_else(|| Error::StructuralMismatch {
                message: "channel instance has no channel definition index".to_string(),
            })?
            .get_u32()
    }

    /// The channel definition that defines this channel instance.
    ///
    /// Fails with [`Error::StructuralMismatch`] when no data source record
    /// preceded the observation or the stored index is out of range.
    pub fn definition(&self) -> Result<ChannelDefinition<'a>> {
        let data_source =
            self.observation
                .data_source()
                .ok_or_else(|| Error::StructuralMismatch {
                    message: "observation record has no associated data source record".to_string(),
                })?;

        let index = self.channel_definition_index()? as usize;
        let definitions = data_source.channel_definitions()?;
        let count = definitions.len();

        definitions
            .into_iter()
            .nth(index)
            .ok_or_else(|| Error::StructuralMismatch {
                message: format!(
                    "channel definition index {index} out of range for {count} definitions"
                ),
            })
    }

    /// Name of the device-specific module or rule that caused this channel
    /// to be recorded, if present.
    pub fn trigger_module_name(&self) -> Option<String> {
        self.collection
            .vector_by_tag(CHANNEL_TRIGGER_MODULE_NAME_TAG)
            .map(|v| v.as_text())
    }

    /// Name of the device involved in an external cross-trigger scenario,
    /// if present.
    pub fn cross_trigger_device_name(&self) -> Option<String> {
        self.collection
            .vector_by_tag(CROSS_TRIGGER_DEVICE_NAME_TAG)
            .map(|v| v.as_text())
    }

    /// The series instances in this channel, paired positionally with the
    /// series definitions of the channel's definition.
    ///
    /// Fails with [`Error::StructuralMismatch`] when the instance and
    /// definition counts disagree, since a positional pairing would silently
    /// misattribute data.
    pub fn series_instances(&self) -> Result<Vec<SeriesInstance<'a>>> {
        let collection = self
            .collection
            .collection_by_tag(SERIES_INSTANCES_TAG)
            .ok_or_else(|| Error::StructuralMismatch {
                message: "channel instance has no series instances".to_string(),
            })?;

        let instances: Vec<&CollectionElement> = collection
            .elements_by_tag(ONE_SERIES_INSTANCE_TAG)
            .filter_map(|e| e.as_collection())
            .collect();

        let definitions = self.definition()?.series_definitions()?;
        if instances.len() != definitions.len() {
            return Err(Error::StructuralMismatch {
                message: format!(
                    "channel has {} series instances but its definition declares {} series",
                    instances.len(),
                    definitions.len()
                ),
            });
        }

        Ok(instances
            .into_iter()
            .zip(definitions)
            .map(|(c, d)| SeriesInstance::new(c, d))
            .collect())
    }
}
