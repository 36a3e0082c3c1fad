// logical/series_instance.rs
//! Series instances and the recovery of their original data values.

use crate::logical::series_definition::SeriesDefinition;
use crate::physical::{CollectionElement, ScalarElement, VectorElement};
use crate::{Error, Result, Value};
use uuid::{Uuid, uuid};

/// Tag that identifies the scale value to apply to the series.
pub const SERIES_SCALE_TAG: Uuid = uuid!("3d786f96-f76e-11cf-9d89-0080c72e70a3");

/// Tag that identifies the offset value to apply to the series.
pub const SERIES_OFFSET_TAG: Uuid = uuid!("3d786f97-f76e-11cf-9d89-0080c72e70a3");

/// Tag that identifies the values contained in the series.
pub const SERIES_VALUES_TAG: Uuid = uuid!("3d786f99-f76e-11cf-9d89-0080c72e70a3");

/// One series of data within a channel instance.
///
/// The stored values may be transformed per the storage method flags of the
/// paired [`SeriesDefinition`]; [`original_values`](Self::original_values)
/// undoes those transformations.
#[derive(Debug, Clone, Copy)]
pub struct SeriesInstance<'a> {
    collection: &'a CollectionElement,
    definition: SeriesDefinition<'a>,
}

impl<'a> SeriesInstance<'a> {
    pub(crate) fn new(collection: &'a CollectionElement, definition: SeriesDefinition<'a>) -> Self {
        SeriesInstance {
            collection,
            definition,
        }
    }

    /// The series definition paired with this instance.
    pub fn definition(&self) -> SeriesDefinition<'a> {
        self.definition
    }

    /// The scale factor to apply when restoring original values, if stored.
    pub fn series_scale(&self) -> Option<&'a ScalarElement> {
        self.collection.scalar_by_tag(SERIES_SCALE_TAG)
    }

    /// The offset to apply when restoring original values, if stored.
    pub fn series_offset(&self) -> Option<&'a ScalarElement> {
        self.collection.scalar_by_tag(SERIES_OFFSET_TAG)
    }

    /// The values stored in this series instance, as written.
    pub fn series_values(&self) -> Result<&'a VectorElement> {
        self.collection
            .vector_by_tag(SERIES_VALUES_TAG)
            .ok_or_else(|| Error::StructuralMismatch {
                message: "series instance has no values".to_string(),
            })
    }

    /// Restore the original data values.
    ///
    /// When the storage method has the increment flag, the stored vector is
    /// a start/count/increment triple that expands to `start + i * increment`
    /// for each index. When the scaled flag is set, each numeric value is
    /// then mapped through `offset + value * scale`; scale defaults to 1 and
    /// offset to 0 when the corresponding scalars are absent. Without the
    /// scaled flag, values pass through with their stored types intact.
    pub fn original_values(&self) -> Result<Vec<Value>> {
        let vector = self.series_values()?;
        let methods = self.definition.storage_method_id()?;

        let mut values = if methods.is_incremented() {
            if vector.len() != 3 {
                return Err(Error::StructuralMismatch {
                    message: format!(
                        "incremented series must store exactly 3 values, found {}",
                        vector.len()
                    ),
                });
            }

            let start = self.numeric(vector, 0)?;
            let count = self.numeric(vector, 1)?;
            let increment = self.numeric(vector, 2)?;

            if count < 0.0 || count.fract() != 0.0 {
                return Err(Error::StructuralMismatch {
                    message: format!("incremented series has invalid count {count}"),
                });
            }

            (0..count as usize)
                .map(|i| Value::Real(start + i as f64 * increment))
                .collect()
        } else {
            (0..vector.len())
                .map(|i| vector.get(i))
                .collect::<Result<Vec<Value>>>()?
        };

        if methods.is_scaled() {
            let scale = match self.series_scale() {
                Some(scalar) => scalar.get_f64()?,
                None => 1.0,
            };
            let offset = match self.series_offset() {
                Some(scalar) => scalar.get_f64()?,
                None => 0.0,
            };

            for value in &mut values {
                // Non-numeric values, e.g. timestamps, pass through unscaled.
                if let Some(v) = value.as_f64() {
                    *value = Value::Real(offset + v * scale);
                }
            }
        }

        Ok(values)
    }

    fn numeric(&self, vector: &VectorElement, index: usize) -> Result<f64> {
        vector
            .get(index)?
            .as_f64()
            .ok_or_else(|| Error::StructuralMismatch {
                message: format!(
                    "incremented series value {index} is not numeric ({})",
                    vector.value_type()
                ),
            })
    }
}
