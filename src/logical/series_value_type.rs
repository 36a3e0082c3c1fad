// logical/series_value_type.rs
//! The fixed set of series value type identifiers.
//!
//! A series definition's value type names the role a series plays within
//! its channel, e.g. the measured values, the time axis, or a min/max/avg
//! aggregate.

use uuid::{Uuid, uuid};

/// The measured values of the series.
pub const VAL: Uuid = uuid!("67f6af97-f753-11cf-9d89-0080c72e70a3");

/// The time axis of the series.
pub const TIME: Uuid = uuid!("c690e862-f755-11cf-9d89-0080c72e70a3");

/// Minimum values.
pub const MIN: Uuid = uuid!("67f6af98-f753-11cf-9d89-0080c72e70a3");

/// Maximum values.
pub const MAX: Uuid = uuid!("67f6af99-f753-11cf-9d89-0080c72e70a3");

/// Average values.
pub const AVG: Uuid = uuid!("67f6af9a-f753-11cf-9d89-0080c72e70a3");

/// Instantaneous values.
pub const INST: Uuid = uuid!("67f6af9b-f753-11cf-9d89-0080c72e70a3");

/// Phase angle values.
pub const PHASE_ANGLE: Uuid = uuid!("67f6af9d-f753-11cf-9d89-0080c72e70a3");

/// Minimum phase angle.
pub const PHASE_ANGLE_MIN: Uuid = uuid!("dc762340-3c56-11cf-9d89-0080c72e70a3");

/// Maximum phase angle.
pub const PHASE_ANGLE_MAX: Uuid = uuid!("dc762341-3c56-11cf-9d89-0080c72e70a3");

/// Average phase angle.
pub const PHASE_ANGLE_AVG: Uuid = uuid!("dc762342-3c56-11cf-9d89-0080c72e70a3");

/// Area under the curve.
pub const AREA: Uuid = uuid!("c7825ce0-8ace-11cf-9d89-0080c72e70a3");

/// Latitude.
pub const LATITUDE: Uuid = uuid!("c690e864-f755-11cf-9d89-0080c72e70a3");

/// Duration values.
pub const DURATION: Uuid = uuid!("c690e863-f755-11cf-9d89-0080c72e70a3");

/// Longitude.
pub const LONGITUDE: Uuid = uuid!("c690e865-f755-11cf-9d89-0080c72e70a3");

/// Polarity of the values.
pub const POLARITY: Uuid = uuid!("c690e866-f755-11cf-9d89-0080c72e70a3");

/// Ellipse data.
pub const ELLIPSE: Uuid = uuid!("c690e867-f755-11cf-9d89-0080c72e70a3");

/// Histogram bin identifiers.
pub const BIN_ID: Uuid = uuid!("c690e869-f755-11cf-9d89-0080c72e70a3");

/// Histogram bin upper bounds.
pub const BIN_HIGH: Uuid = uuid!("c690e86a-f755-11cf-9d89-0080c72e70a3");

/// Histogram bin lower bounds.
pub const BIN_LOW: Uuid = uuid!("c690e86b-f755-11cf-9d89-0080c72e70a3");

/// X-axis bin upper bounds.
pub const X_BIN_HIGH: Uuid = uuid!("c690e86c-f755-11cf-9d89-0080c72e70a3");

/// X-axis bin lower bounds.
pub const X_BIN_LOW: Uuid = uuid!("c690e86d-f755-11cf-9d89-0080c72e70a3");

/// Y-axis bin upper bounds.
pub const Y_BIN_HIGH: Uuid = uuid!("c690e86e-f755-11cf-9d89-0080c72e70a3");

/// Y-axis bin lower bounds.
pub const Y_BIN_LOW: Uuid = uuid!("c690e86f-f755-11cf-9d89-0080c72e70a3");

/// Count of events or samples.
pub const COUNT: Uuid = uuid!("c690e870-f755-11cf-9d89-0080c72e70a3");

/// State transition data.
pub const TRANSITION: Uuid = uuid!("5369c260-c347-11d2-923f-00104b2b84b1");

/// Probability values.
pub const PROB: Uuid = uuid!("6763cc71-17d6-11d4-9f1c-002078e0b723");

/// Time interval values.
pub const INTERVAL: Uuid = uuid!("72e82a40-336c-11d5-a4b3-444553540000");

/// Status values.
pub const STATUS: Uuid = uuid!("b82b5c82-55c7-11d5-a4b3-444553540000");

/// 1st percentile.
pub const P1: Uuid = uuid!("67f6af9c-f753-11cf-9d89-0080c72e70a3");

/// 10th percentile.
pub const P10: Uuid = uuid!("67f6af9e-f753-11cf-9d89-0080c72e70a3");

/// 90th percentile.
pub const P90: Uuid = uuid!("67f6af9f-f753-11cf-9d89-0080c72e70a3");

/// 95th percentile.
pub const P95: Uuid = uuid!("c690e860-f755-11cf-9d89-0080c72e70a3");

/// 99th percentile.
pub const P99: Uuid = uuid!("c690e861-f755-11cf-9d89-0080c72e70a3");

/// Frequency values.
pub const FREQUENCY: Uuid = uuid!("c690e868-f755-11cf-9d89-0080c72e70a3");

/// Human-readable name of a series value type identifier, if recognized.
pub fn name(id: Uuid) -> Option<&'static str> {
    const NAMES: &[(Uuid, &str)] = &[
        (VAL, "Val"),
        (TIME, "Time"),
        (MIN, "Min"),
        (MAX, "Max"),
        (AVG, "Avg"),
        (INST, "Inst"),
        (PHASE_ANGLE, "PhaseAngle"),
        (PHASE_ANGLE_MIN, "PhaseAngleMin"),
        (PHASE_ANGLE_MAX, "PhaseAngleMax"),
        (PHASE_ANGLE_AVG, "PhaseAngleAvg"),
        (AREA, "Area"),
        (LATITUDE, "Latitude"),
        (DURATION, "Duration"),
        (LONGITUDE, "Longitude"),
        (POLARITY, "Polarity"),
        (ELLIPSE, "Ellipse"),
        (BIN_ID, "BinID"),
        (BIN_HIGH, "BinHigh"),
        (BIN_LOW, "BinLow"),
        (X_BIN_HIGH, "XBinHigh"),
        (X_BIN_LOW, "XBinLow"),
        (Y_BIN_HIGH, "YBinHigh"),
        (Y_BIN_LOW, "YBinLow"),
        (COUNT, "Count"),
        (TRANSITION, "Transition"),
        (PROB, "Prob"),
        (INTERVAL, "Interval"),
        (STATUS, "Status"),
        (P1, "P1"),
        (P10, "P10"),
        (P90, "P90"),
        (P95, "P95"),
        (P99, "P99"),
        (FREQUENCY, "Frequency"),
    ];

    NAMES.iter().find(|(tag, _)| *tag == id).map(|(_, n)| *n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_and_unknown_ids() {
        assert_eq!(name(VAL), Some("Val"));
        assert_eq!(name(TIME), Some("Time"));
        assert_eq!(name(Uuid::nil()), None);
    }
}
