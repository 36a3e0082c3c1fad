// logical/series_definition.rs
//! Series definitions: value type, units, and storage method of a series.

use crate::physical::CollectionElement;
use crate::{Error, Result};
use uuid::{Uuid, uuid};

/// Tag that identifies the value type ID of the series.
pub const VALUE_TYPE_ID_TAG: Uuid = uuid!("b48d859c-f5f5-11cf-9d89-0080c72e70a3");

/// Tag that identifies the quantity units ID of the series.
pub const QUANTITY_UNITS_ID_TAG: Uuid = uuid!("b48d859b-f5f5-11cf-9d89-0080c72e70a3");

/// Tag that identifies the characteristic ID of the series.
pub const QUANTITY_CHARACTERISTIC_ID_TAG: Uuid = uuid!("3d786f9e-f76e-11cf-9d89-0080c72e70a3");

/// Tag that identifies the storage method ID of the series.
pub const STORAGE_METHOD_ID_TAG: Uuid = uuid!("b48d85a1-f5f5-11cf-9d89-0080c72e70a3");

/// Tag that identifies the value type name of the series.
pub const VALUE_TYPE_NAME_TAG: Uuid = uuid!("b48d859d-f5f5-11cf-9d89-0080c72e70a3");

/// Flags that determine how the data of a series instance is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorageMethods(u32);

impl StorageMethods {
    /// Straight array of data points.
    pub const VALUES: u32 = 1 << 0;

    /// Data values are scaled.
    pub const SCALED: u32 = 1 << 1;

    /// Start, count, and increment are stored and the
    /// series is recreated from those three values.
    pub const INCREMENT: u32 = 1 << 2;

    /// Wrap a raw storage method ID.
    pub fn new(bits: u32) -> Self {
        StorageMethods(bits)
    }

    /// Raw flag bits.
    pub fn bits(self) -> u32 {
        self.0
    }

    /// True if the series stores its values scaled.
    pub fn is_scaled(self) -> bool {
        self.0 & Self::SCALED != 0
    }

    /// True if the series stores a start/count/increment triple.
    pub fn is_incremented(self) -> bool {
        self.0 & Self::INCREMENT != 0
    }
}

/// Units of the data in a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityUnits {
    /// Unitless
    None,
    /// Absolute time stored as timestamps
    Timestamp,
    /// Seconds relative to the start time of an observation
    Seconds,
    /// Cycles relative to the start time of an observation
    Cycles,
    /// Volts
    Volts,
    /// Amperes
    Amps,
    /// Volt-amperes
    VoltAmps,
    /// Watts
    Watts,
    /// Volt-amperes reactive
    Vars,
    /// Ohms
    Ohms,
    /// Siemens
    Siemens,
    /// Volts per ampere
    VoltsPerAmp,
    /// Joules
    Joules,
    /// Hertz
    Hertz,
    /// Degrees Celsius
    Celsius,
    /// Degrees of arc
    Degrees,
    /// Decibels
    Decibels,
    /// Percent
    Percent,
    /// Per-unit
    PerUnit,
    /// Number of counts or samples
    Samples,
    /// Energy in var-hours
    VarHours,
    /// Energy in watt-hours
    WattHours,
    /// Energy in VA-hours
    VoltAmpHours,
    /// Meters per second
    MetersPerSecond,
    /// Miles per hour
    MilesPerHour,
    /// Pressure in bars
    Bars,
    /// Pressure in pascals
    Pascals,
    /// Force in newtons
    Newtons,
    /// Torque in newton-meters
    NewtonMeters,
    /// Revolutions per minute
    RevolutionsPerMinute,
    /// Radians per second
    RadiansPerSecond,
    /// Meters
    Meters,
    /// Flux linkage in weber-turns
    WeberTurns,
    /// Flux density in teslas
    Teslas,
    /// Magnetic field in webers
    Webers,
    /// Volts-per-volt transfer function
    VoltsPerVolt,
    /// Amps-per-amp transfer function
    AmpsPerAmp,
    /// Impedance transfer function
    AmpsPerVolt,
    /// Any units ID this library does not recognize
    Unknown,
}

impl QuantityUnits {
    /// Classify a raw quantity units ID.
    pub fn from_u32(value: u32) -> Self {
        match value {
            0 => QuantityUnits::None,
            1 => QuantityUnits::Timestamp,
            2 => QuantityUnits::Seconds,
            3 => QuantityUnits::Cycles,
            6 => QuantityUnits::Volts,
            7 => QuantityUnits::Amps,
            8 => QuantityUnits::VoltAmps,
            9 => QuantityUnits::Watts,
            10 => QuantityUnits::Vars,
            11 => QuantityUnits::Ohms,
            12 => QuantityUnits::Siemens,
            13 => QuantityUnits::VoltsPerAmp,
            14 => QuantityUnits::Joules,
            15 => QuantityUnits::Hertz,
            16 => QuantityUnits::Celsius,
            17 => QuantityUnits::Degrees,
            18 => QuantityUnits::Decibels,
            19 => QuantityUnits::Percent,
            20 => QuantityUnits::PerUnit,
            21 => QuantityUnits::Samples,
            22 => QuantityUnits::VarHours,
            23 => QuantityUnits::WattHours,
            24 => QuantityUnits::VoltAmpHours,
            25 => QuantityUnits::MetersPerSecond,
            26 => QuantityUnits::MilesPerHour,
            27 => QuantityUnits::Bars,
            28 => QuantityUnits::Pascals,
            29 => QuantityUnits::Newtons,
            30 => QuantityUnits::NewtonMeters,
            31 => QuantityUnits::RevolutionsPerMinute,
            32 => QuantityUnits::RadiansPerSecond,
            33 => QuantityUnits::Meters,
            34 => QuantityUnits::WeberTurns,
            35 => QuantityUnits::Teslas,
            36 => QuantityUnits::Webers,
            37 => QuantityUnits::VoltsPerVolt,
            38 => QuantityUnits::AmpsPerAmp,
            39 => QuantityUnits::AmpsPerVolt,
            _ => QuantityUnits::Unknown,
        }
    }
}

/// Definition of one series within a channel definition.
#[derive(Debug, Clone, Copy)]
pub struct SeriesDefinition<'a> {
    collection: &'a CollectionElement,
}

impl<'a> SeriesDefinition<'a> {
    pub(crate) fn new(collection: &'a CollectionElement) -> Self {
        SeriesDefinition { collection }
    }

    /// Value type ID of the series.
    ///
    /// See [`series_value_type`](crate::logical::series_value_type) for the
    /// defined identifiers.
    pub fn value_type_id(&self) -> Result<Uuid> {
        self.collection
            .scalar_by_tag(VALUE_TYPE_ID_TAG)
            .ok_or_else(|| Error::StructuralMismatch {
                message: "series definition has no value type ID".to_string(),
            })?
            .get_guid()
    }

    /// Units of the data in the series.
    pub fn quantity_units(&self) -> Result<QuantityUnits> {
        self.collection
            .scalar_by_tag(QUANTITY_UNITS_ID_TAG)
            .ok_or_else(|| Error::StructuralMismatch {
                message: "series definition has no quantity units ID".to_string(),
            })?
            .get_u32()
            .map(QuantityUnits::from_u32)
    }

    /// Additional detail about the meaning of the series data.
    pub fn quantity_characteristic_id(&self) -> Result<Uuid> {
        self.collection
            .scalar_by_tag(QUANTITY_CHARACTERISTIC_ID_TAG)
            .ok_or_else(|| Error::StructuralMismatch {
                message: "series definition has no quantity characteristic ID".to_string(),
            })?
            .get_guid()
    }

    /// Storage method flags determining how instance data is stored.
    pub fn storage_method_id(&self) -> Result<StorageMethods> {
        self.collection
            .scalar_by_tag(STORAGE_METHOD_ID_TAG)
            .ok_or_else(|| Error::StructuralMismatch {
                message: "series definition has no storage method ID".to_string(),
            })?
            .get_u32()
            .map(StorageMethods::new)
    }

    /// Value type name of the series, if present.
    pub fn value_type_name(&self) -> Option<String> {
        self.collection
            .vector_by_tag(VALUE_TYPE_NAME_TAG)
            .map(|v| v.as_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_method_flags() {
        let methods = StorageMethods::new(StorageMethods::VALUES | StorageMethods::SCALED);
        assert!(methods.is_scaled());
        assert!(!methods.is_incremented());

        let methods = StorageMethods::new(StorageMethods::INCREMENT);
        assert!(methods.is_incremented());
        assert!(!methods.is_scaled());
    }

    #[test]
    fn quantity_units_classification() {
        assert_eq!(QuantityUnits::from_u32(6), QuantityUnits::Volts);
        assert_eq!(QuantityUnits::from_u32(15), QuantityUnits::Hertz);
        // IDs 4 and 5 are not defined by the format.
        assert_eq!(QuantityUnits::from_u32(4), QuantityUnits::Unknown);
        assert_eq!(QuantityUnits::from_u32(40), QuantityUnits::Unknown);
    }
}
