// logical/channel_definition.rs
//! Channel definitions and their phase/quantity classifications.

use crate::logical::data_source_record::DataSourceRecord;
use crate::logical::series_definition::SeriesDefinition;
use crate::physical::CollectionElement;
use crate::{Error, Result};
use uuid::{Uuid, uuid};

/// Tag that identifies the channel name.
pub const CHANNEL_NAME_TAG: Uuid = uuid!("b48d8590-f5f5-11cf-9d89-0080c72e70a3");

/// Tag that identifies the phase ID.
pub const PHASE_ID_TAG: Uuid = uuid!("b48d8591-f5f5-11cf-9d89-0080c72e70a3");

/// Tag that identifies the quantity type.
pub const QUANTITY_TYPE_ID_TAG: Uuid = uuid!("b48d8592-f5f5-11cf-9d89-0080c72e70a3");

/// Tag that identifies the quantity measured ID.
pub const QUANTITY_MEASURED_ID_TAG: Uuid = uuid!("c690e872-f755-11cf-9d89-0080c72e70a3");

/// Tag that identifies the quantity name.
pub const QUANTITY_NAME_TAG: Uuid = uuid!("b48d8595-f5f5-11cf-9d89-0080c72e70a3");

/// Tag that identifies the series definitions collection.
pub const SERIES_DEFINITIONS_TAG: Uuid = uuid!("b48d8598-f5f5-11cf-9d89-0080c72e70a3");

/// Tag that identifies a single series definition within the collection.
pub const ONE_SERIES_DEFINITION_TAG: Uuid = uuid!("b48d859a-f5f5-11cf-9d89-0080c72e70a3");

/// Phase measured by a channel.
///
/// Values outside the defined range classify as
/// [`Unknown`](Self::Unknown) rather than failing the decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Phase is not applicable
    None,
    /// A-to-neutral
    An,
    /// B-to-neutral
    Bn,
    /// C-to-neutral
    Cn,
    /// Neutral-to-ground
    Ng,
    /// A-to-B
    Ab,
    /// B-to-C
    Bc,
    /// C-to-A
    Ca,
    /// Vector sum of phases A, B, and C
    Residual,
    /// Vector sum of phases A, B, C, and neutral
    Net,
    /// Positive sequence
    PositiveSequence,
    /// Negative sequence
    NegativeSequence,
    /// Zero sequence
    ZeroSequence,
    /// Total or summarizing value in a multi-phase system
    Total,
    /// Average of the 3 line-to-neutral values
    LineToNeutralAverage,
    /// Average of the 3 line-to-line values
    LineToLineAverage,
    /// The worst of the 3 phases
    Worst,
    /// DC positive
    Plus,
    /// DC negative
    Minus,
    /// Generic phase 1 through 16
    General(u8),
    /// Any phase ID this library does not recognize
    Unknown,
}

impl Phase {
    /// Classify a raw phase ID.
    pub fn from_u32(value: u32) -> Self {
        match value {
            0 => Phase::None,
            1 => Phase::An,
            2 => Phase::Bn,
            3 => Phase::Cn,
            4 => Phase::Ng,
            5 => Phase::Ab,
            6 => Phase::Bc,
            7 => Phase::Ca,
            8 => Phase::Residual,
            9 => Phase::Net,
            10 => Phase::PositiveSequence,
            11 => Phase::NegativeSequence,
            12 => Phase::ZeroSequence,
            13 => Phase::Total,
            14 => Phase::LineToNeutralAverage,
            15 => Phase::LineToLineAverage,
            16 => Phase::Worst,
            17 => Phase::Plus,
            18 => Phase::Minus,
            19..=34 => Phase::General((value - 18) as u8),
            _ => Phase::Unknown,
        }
    }
}

/// Physical quantity under measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityMeasured {
    /// None or not applicable
    None,
    /// Voltage
    Voltage,
    /// Current
    Current,
    /// Power, derived from multiplying voltage and current components
    Power,
    /// Energy, an integration of power over time
    Energy,
    /// Temperature
    Temperature,
    /// Pressure
    Pressure,
    /// Charge
    Charge,
    /// Electrical field
    ElectricalField,
    /// Magnetic field
    MagneticField,
    /// Velocity
    Velocity,
    /// Compass bearing
    Bearing,
    /// Applied force
    Force,
    /// Torque
    Torque,
    /// Spatial position
    Position,
    /// Flux linkage in weber-turns
    FluxLinkage,
    /// Magnetic field density
    FluxDensity,
    /// Status data
    Status,
    /// Any quantity ID this library does not recognize
    Unknown,
}

impl QuantityMeasured {
    /// Classify a raw quantity measured ID.
    pub fn from_u32(value: u32) -> Self {
        match value {
            0 => QuantityMeasured::None,
            1 => QuantityMeasured::Voltage,
            2 => QuantityMeasured::Current,
            3 => QuantityMeasured::Power,
            4 => QuantityMeasured::Energy,
            5 => QuantityMeasured::Temperature,
            6 => QuantityMeasured::Pressure,
            7 => QuantityMeasured::Charge,
            8 => QuantityMeasured::ElectricalField,
            9 => QuantityMeasured::MagneticField,
            10 => QuantityMeasured::Velocity,
            11 => QuantityMeasured::Bearing,
            12 => QuantityMeasured::Force,
            13 => QuantityMeasured::Torque,
            14 => QuantityMeasured::Position,
            15 => QuantityMeasured::FluxLinkage,
            16 => QuantityMeasured::FluxDensity,
            17 => QuantityMeasured::Status,
            _ => QuantityMeasured::Unknown,
        }
    }
}

/// A channel definition within a data source record.
///
/// Defines one channel a device records; the channel instances in
/// observation records refer back to these definitions by index.
#[derive(Debug, Clone, Copy)]
pub struct ChannelDefinition<'a> {
    collection: &'a CollectionElement,
    data_source: &'a DataSourceRecord,
}

impl<'a> ChannelDefinition<'a> {
    pub(crate) fn new(
        collection: &'a CollectionElement,
        data_source: &'a DataSourceRecord,
    ) -> Self {
        ChannelDefinition {
            collection,
            data_source,
        }
    }

    /// The data source record in which this channel definition resides.
    pub fn data_source(&self) -> &'a DataSourceRecord {
        self.data_source
    }

    /// String identifier for the channel, if present.
    pub fn channel_name(&self) -> Option<String> {
        self.collection
            .vector_by_tag(CHANNEL_NAME_TAG)
            .map(|v| v.as_text())
    }

    /// The phase measured by the device.
    pub fn phase(&self) -> Result<Phase> {
        self.collection
            .scalar_by_tag(PHASE_ID_TAG)
            .ok_or_else(|| Error::StructuralMismatch {
                message: "channel definition has no phase ID".to_string(),
            })?
            .get_u32()
            .map(Phase::from_u32)
    }

    /// Quantity type ID, which determines how the data inside instances of
    /// this definition is to be interpreted.
    ///
    /// See [`quantity_type`](crate::logical::quantity_type) for the defined
    /// identifiers.
    pub fn quantity_type_id(&self) -> Result<Uuid> {
        self.collection
            .scalar_by_tag(QUANTITY_TYPE_ID_TAG)
            .ok_or_else(|| Error::StructuralMismatch {
                message: "channel definition has no quantity type ID".to_string(),
            })?
            .get_guid()
    }

    /// The physical quantity under measurement.
    pub fn quantity_measured(&self) -> Result<QuantityMeasured> {
        self.collection
            .scalar_by_tag(QUANTITY_MEASURED_ID_TAG)
            .ok_or_else(|| Error::StructuralMismatch {
                message: "channel definition has no quantity measured ID".to_string(),
            })?
            .get_u32()
            .map(QuantityMeasured::from_u32)
    }

    /// Name of the quantity, if present.
    pub fn quantity_name(&self) -> Option<String> {
        self.collection
            .vector_by_tag(QUANTITY_NAME_TAG)
            .map(|v| v.as_text())
    }

    /// The series definitions in this channel definition, in file order.
    ///
    /// Series instances pair with this list positionally.
    pub fn series_definitions(&self) -> Result<Vec<SeriesDefinition<'a>>> {
        let collection = self
            .collection
            .collection_by_tag(SERIES_DEFINITIONS_TAG)
            .ok_or_else(|| Error::StructuralMismatch {
                message: "channel definition has no series definitions".to_string(),
            })?;

        Ok(collection
            .elements_by_tag(ONE_SERIES_DEFINITION_TAG)
            .filter_map(|e| e.as_collection())
            .map(SeriesDefinition::new)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_classification() {
        assert_eq!(Phase::from_u32(0), Phase::None);
        assert_eq!(Phase::from_u32(1), Phase::An);
        assert_eq!(Phase::from_u32(10), Phase::PositiveSequence);
        assert_eq!(Phase::from_u32(19), Phase::General(1));
        assert_eq!(Phase::from_u32(34), Phase::General(16));
        assert_eq!(Phase::from_u32(35), Phase::Unknown);
    }

    #[test]
    fn quantity_measured_classification() {
        assert_eq!(QuantityMeasured::from_u32(1), QuantityMeasured::Voltage);
        assert_eq!(QuantityMeasured::from_u32(17), QuantityMeasured::Status);
        assert_eq!(QuantityMeasured::from_u32(18), QuantityMeasured::Unknown);
    }
}
