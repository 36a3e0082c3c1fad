// physical/mod.rs
//! The physical layer: record framing, compression, and the element tree.
//!
//! A PQDIF file is a forward-linked chain of records. Each record is a
//! 64-byte header followed by an optional body, and each body decodes to a
//! tree of tagged elements (collections, scalars, and vectors). This module
//! decodes that structure without interpreting what any tag means; the
//! [`logical`](crate::logical) layer assigns meaning.

pub mod common;
mod element;
mod parser;
mod physical_type;
mod record;

pub use element::{CollectionElement, Element, ElementType, ScalarElement, VectorElement};
pub use parser::{CompressionAlgorithm, CompressionStyle, PhysicalParser};
pub use physical_type::PhysicalType;
pub use record::{
    CONTAINER_RECORD_TAG, DATA_SOURCE_RECORD_TAG, MONITOR_SETTINGS_RECORD_TAG,
    OBSERVATION_RECORD_TAG, RECORD_HEADER_SIZE, RECORD_SIGNATURE, Record, RecordHeader, RecordType,
};
