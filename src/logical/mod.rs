// logical/mod.rs
//! The logical layer: typed views over physical records.
//!
//! PQDIF assigns meaning to four record types. The container record opens
//! the file; data source and monitor settings records establish context;
//! observation records carry the measured data. The views in this module
//! wrap physical records and resolve tagged elements into typed accessors,
//! and [`LogicalParser`] walks a file observation by observation while
//! maintaining the contextual association between record types.
//!
//! Each view's module also exposes the tag identifiers of the elements the
//! view reads, for callers that need to walk record bodies directly.

pub mod channel_definition;
pub mod channel_instance;
pub mod container_record;
pub mod data_source_record;
pub mod monitor_settings_record;
pub mod observation_record;
mod parser;
pub mod quantity_type;
pub mod series_definition;
pub mod series_instance;
pub mod series_value_type;

pub use channel_definition::{ChannelDefinition, Phase, QuantityMeasured};
pub use channel_instance::ChannelInstance;
pub use container_record::ContainerRecord;
pub use data_source_record::DataSourceRecord;
pub use monitor_settings_record::MonitorSettingsRecord;
pub use observation_record::ObservationRecord;
pub use parser::{LogicalParser, Observations};
pub use series_definition::{QuantityUnits, SeriesDefinition, StorageMethods};
pub use series_instance::SeriesInstance;
