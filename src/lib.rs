#![forbid(unsafe_code)]

//! # pqdif-rs
//!
//! A Rust library for reading PQDIF (Power Quality Data Interchange Format)
//! files.
//!
//! PQDIF is the binary interchange format defined by IEEE 1159.3 for power
//! quality measurement data. Monitoring devices write their captured events
//! and trend logs as PQDIF files, and this crate decodes them at two levels:
//!
//! - **Physical**: the file as a forward-linked chain of records, each a
//!   64-byte header plus an optionally compressed body that decodes to a
//!   tree of tagged elements.
//! - **Logical**: typed views that give the records meaning. The container
//!   record describes the file, data source records describe the measuring
//!   device and its channels, monitor settings records carry device
//!   configuration, and observation records hold the measured data.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pqdif_rs::logical::LogicalParser;
//! use pqdif_rs::Result;
//!
//! fn main() -> Result<()> {
//!     let mut parser = LogicalParser::open("event.pqd")?;
//!     println!("file: {}", parser.container_record().file_name()?);
//!
//!     while let Some(observation) = parser.next_observation_record()? {
//!         println!("observation: {}", observation.name()?);
//!
//!         for channel in observation.channel_instances()? {
//!             let definition = channel.definition()?;
//!             println!("  channel: {:?}", definition.channel_name());
//!
//!             for series in channel.series_instances()? {
//!                 println!("    {} values", series.original_values()?.len());
//!             }
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`physical`] | Record framing, compression, and the element tree |
//! | [`logical`] | Typed record views and the [`logical::LogicalParser`] |
//! | [`error`] | Error types and [`Result`] alias |
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T>`], which is an alias for
//! `std::result::Result<T, Error>`. The [`Error`] enum distinguishes
//! malformed framing, unsupported compression, unknown type bytes, and
//! structural or protocol-level inconsistencies.

pub mod error;
pub mod logical;
pub mod physical;

mod types;

// Re-export commonly used types at the crate root
pub use error::{Error, Result};
pub use logical::LogicalParser;
pub use physical::PhysicalParser;
pub use types::{Complex, Timestamp, Value};
