// logical/quantity_type.rs
//! The fixed set of quantity type identifiers.
//!
//! A channel definition's quantity type determines how the data in its
//! channel instances is to be interpreted, e.g. as a waveform, a phasor, or
//! a magnitude-duration pair.

use uuid::{Uuid, uuid};

/// Point-on-wave measurements of a sampled waveform.
pub const WAVE_FORM: Uuid = uuid!("67f6af80-f753-11cf-9d89-0080c72e70a3");

/// A log of time-based values.
pub const VALUE_LOG: Uuid = uuid!("67f6af82-f753-11cf-9d89-0080c72e70a3");

/// Phasor measurements: magnitude and phase angle.
pub const PHASOR: Uuid = uuid!("67f6af81-f753-11cf-9d89-0080c72e70a3");

/// Frequency response: magnitude and phase versus frequency.
pub const RESPONSE: Uuid = uuid!("67f6af85-f753-11cf-9d89-0080c72e70a3");

/// Lightning flash data.
pub const FLASH: Uuid = uuid!("67f6af83-f753-11cf-9d89-0080c72e70a3");

/// Histogram of values.
pub const HISTOGRAM: Uuid = uuid!("67f6af87-f753-11cf-9d89-0080c72e70a3");

/// Three-dimensional histogram of values.
pub const HISTOGRAM_3D: Uuid = uuid!("67f6af88-f753-11cf-9d89-0080c72e70a3");

/// Cumulative probability function.
pub const CPF: Uuid = uuid!("67f6af89-f753-11cf-9d89-0080c72e70a3");

/// X values versus Y values.
pub const XY: Uuid = uuid!("67f6af8a-f753-11cf-9d89-0080c72e70a3");

/// Magnitude versus duration.
pub const MAG_DUR: Uuid = uuid!("67f6af8b-f753-11cf-9d89-0080c72e70a3");

/// X, Y, and Z values.
pub const XYZ: Uuid = uuid!("67f6af8c-f753-11cf-9d89-0080c72e70a3");

/// Magnitude-duration events plotted over time.
pub const MAG_DUR_TIME: Uuid = uuid!("67f6af8d-f753-11cf-9d89-0080c72e70a3");

/// Binned count of magnitude-duration events.
pub const MAG_DUR_COUNT: Uuid = uuid!("67f6af8e-f753-11cf-9d89-0080c72e70a3");

/// Human-readable name of a quantity type identifier, if recognized.
pub fn name(id: Uuid) -> Option<&'static str> {
    const NAMES: &[(Uuid, &str)] = &[
        (WAVE_FORM, "WaveForm"),
        (VALUE_LOG, "ValueLog"),
        (PHASOR, "Phasor"),
        (RESPONSE, "Response"),
        (FLASH, "Flash"),
        (HISTOGRAM, "Histogram"),
        (HISTOGRAM_3D, "Histogram3D"),
        (CPF, "CPF"),
        (XY, "XY"),
        (MAG_DUR, "MagDur"),
        (XYZ, "XYZ"),
        (MAG_DUR_TIME, "MagDurTime"),
        (MAG_DUR_COUNT, "MagDurCount"),
    ];

    NAMES.iter().find(|(tag, _)| *tag == id).map(|(_, n)| *n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_and_unknown_ids() {
        assert_eq!(name(WAVE_FORM), Some("WaveForm"));
        assert_eq!(name(MAG_DUR_COUNT), Some("MagDurCount"));
        assert_eq!(name(Uuid::nil()), None);
    }
}
