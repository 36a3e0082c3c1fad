// tests/physical.rs
//! Integration tests for the physical layer: record framing, element
//! decoding, and record-level compression.

mod common;

use common::{Element, build_body, build_file, build_file_with, record_header};
use pqdif_rs::physical::{
    CompressionAlgorithm, CompressionStyle, CONTAINER_RECORD_TAG, DATA_SOURCE_RECORD_TAG,
    OBSERVATION_RECORD_TAG, PhysicalParser, PhysicalType, RecordType,
};
use pqdif_rs::{Error, Value};
use uuid::{Uuid, uuid};

const TAG_A: Uuid = uuid!("00000000-0000-0000-0000-00000000000a");
const TAG_B: Uuid = uuid!("00000000-0000-0000-0000-00000000000b");
const TAG_C: Uuid = uuid!("00000000-0000-0000-0000-00000000000c");

#[test]
fn walks_record_chain_in_order() {
    let file = build_file(&[
        (CONTAINER_RECORD_TAG, build_body(&[])),
        (DATA_SOURCE_RECORD_TAG, build_body(&[])),
        (OBSERVATION_RECORD_TAG, build_body(&[])),
    ]);

    let mut parser = PhysicalParser::from_bytes(file);
    let mut types = Vec::new();
    while parser.has_next_record() {
        types.push(parser.next_record().unwrap().header.record_type());
    }

    assert_eq!(
        types,
        vec![
            RecordType::Container,
            RecordType::DataSource,
            RecordType::Observation
        ]
    );
}

#[test]
fn read_past_end_is_a_protocol_violation() {
    let file = build_file(&[(CONTAINER_RECORD_TAG, build_body(&[]))]);
    let mut parser = PhysicalParser::from_bytes(file);

    parser.next_record().unwrap();
    assert!(!parser.has_next_record());
    assert!(matches!(
        parser.next_record(),
        Err(Error::ProtocolViolation { .. })
    ));
}

#[test]
fn reset_restarts_the_chain() {
    let file = build_file(&[
        (CONTAINER_RECORD_TAG, build_body(&[])),
        (OBSERVATION_RECORD_TAG, build_body(&[])),
    ]);

    let mut parser = PhysicalParser::from_bytes(file);
    while parser.has_next_record() {
        parser.next_record().unwrap();
    }

    parser.reset();
    assert!(parser.has_next_record());
    let record = parser.next_record().unwrap();
    assert_eq!(record.header.record_type(), RecordType::Container);
}

#[test]
fn empty_body_decodes_to_none() {
    let file = record_header(CONTAINER_RECORD_TAG, 0, 0);

    let mut parser = PhysicalParser::from_bytes(file);
    let record = parser.next_record().unwrap();
    assert!(record.body.is_none());
    assert!(record.body().is_err());
}

#[test]
fn body_collection_carries_the_record_type_tag() {
    let body = build_body(&[Element::scalar_u32(TAG_A, 1)]);
    let file = build_file(&[(CONTAINER_RECORD_TAG, body)]);

    let mut parser = PhysicalParser::from_bytes(file);
    let record = parser.next_record().unwrap();
    let collection = record.body().unwrap();
    assert_eq!(collection.tag(), CONTAINER_RECORD_TAG);
    assert_eq!(collection.len(), 1);
}

#[test]
fn decodes_nested_elements() {
    let body = build_body(&[
        Element::scalar_u32(TAG_A, 42),
        Element::collection(
            TAG_B,
            vec![
                Element::vector_real8(TAG_C, &[1.0, 2.0, 3.0]),
                Element::text(TAG_A, "nested"),
            ],
        ),
    ]);
    let file = build_file(&[(OBSERVATION_RECORD_TAG, body)]);

    let mut parser = PhysicalParser::from_bytes(file);
    let record = parser.next_record().unwrap();
    let collection = record.body().unwrap();

    assert_eq!(collection.scalar_by_tag(TAG_A).unwrap().get_u32().unwrap(), 42);

    let nested = collection.collection_by_tag(TAG_B).unwrap();
    let values = nested.vector_by_tag(TAG_C).unwrap();
    assert_eq!(values.len(), 3);
    assert_eq!(values.get(2).unwrap(), Value::Real(3.0));
    assert_eq!(nested.vector_by_tag(TAG_A).unwrap().as_text(), "nested");
}

// Sibling elements after a linked element must decode from the byte right
// after the 4-byte link, regardless of where the link pointed.
#[test]
fn linked_payloads_do_not_displace_siblings() {
    let body = build_body(&[
        Element::vector_u32(TAG_A, &[10, 20]),
        Element::vector_u32(TAG_B, &[30]),
        Element::scalar_u32(TAG_C, 99),
    ]);
    let file = build_file(&[(OBSERVATION_RECORD_TAG, body)]);

    let mut parser = PhysicalParser::from_bytes(file);
    let record = parser.next_record().unwrap();
    let collection = record.body().unwrap();

    assert_eq!(collection.vector_by_tag(TAG_A).unwrap().get_u32(1).unwrap(), 20);
    assert_eq!(collection.vector_by_tag(TAG_B).unwrap().get_u32(0).unwrap(), 30);
    assert_eq!(collection.scalar_by_tag(TAG_C).unwrap().get_u32().unwrap(), 99);
}

#[test]
fn rejects_bad_signature() {
    let mut file = build_file(&[(CONTAINER_RECORD_TAG, build_body(&[]))]);
    file[0] ^= 0xff;

    let mut parser = PhysicalParser::from_bytes(file);
    assert!(matches!(
        parser.next_record(),
        Err(Error::MalformedHeader { offset: 0, .. })
    ));
}

#[test]
fn rejects_backward_next_pointer() {
    // Three empty-bodied records, 68 bytes each.
    let mut file = build_file(&[
        (CONTAINER_RECORD_TAG, build_body(&[])),
        (DATA_SOURCE_RECORD_TAG, build_body(&[])),
        (OBSERVATION_RECORD_TAG, build_body(&[])),
    ]);
    // Redirect the second record's link back into the first record.
    file[68 + 40..68 + 44].copy_from_slice(&64i32.to_le_bytes());

    let mut parser = PhysicalParser::from_bytes(file);
    parser.next_record().unwrap();
    assert!(matches!(
        parser.next_record(),
        Err(Error::MalformedHeader { .. })
    ));
}

#[test]
fn rejects_body_past_end_of_file() {
    let file = record_header(CONTAINER_RECORD_TAG, 1024, 0);
    let mut parser = PhysicalParser::from_bytes(file);
    assert!(matches!(
        parser.next_record(),
        Err(Error::MalformedHeader { .. })
    ));
}

#[test]
fn rejects_element_count_the_body_cannot_hold() {
    // The body is nothing but a count claiming i32::MAX children.
    let body = i32::MAX.to_le_bytes().to_vec();
    let file = build_file(&[(CONTAINER_RECORD_TAG, body)]);

    let mut parser = PhysicalParser::from_bytes(file);
    assert!(matches!(
        parser.next_record(),
        Err(Error::StructuralMismatch { .. })
    ));
}

#[test]
fn rejects_unknown_physical_type() {
    let mut body = Vec::new();
    body.extend_from_slice(&1i32.to_le_bytes());
    body.extend_from_slice(&TAG_A.to_bytes_le());
    body.push(2); // scalar
    body.push(99); // not in the type table
    body.push(1); // embedded
    body.push(0);
    body.extend_from_slice(&[0u8; 4]);
    let file = build_file(&[(OBSERVATION_RECORD_TAG, body)]);

    let mut parser = PhysicalParser::from_bytes(file);
    assert!(matches!(
        parser.next_record(),
        Err(Error::UnknownPhysicalType { value: 99 })
    ));
}

#[test]
fn rejects_unknown_element_kind() {
    let mut body = Vec::new();
    body.extend_from_slice(&1i32.to_le_bytes());
    body.extend_from_slice(&TAG_A.to_bytes_le());
    body.push(7); // not a known kind
    body.push(PhysicalType::UnsignedInteger4.to_u8());
    body.push(1);
    body.push(0);
    body.extend_from_slice(&[0u8; 4]);
    let file = build_file(&[(OBSERVATION_RECORD_TAG, body)]);

    let mut parser = PhysicalParser::from_bytes(file);
    assert!(matches!(
        parser.next_record(),
        Err(Error::UnknownElementType { value: 7 })
    ));
}

#[test]
fn decompresses_record_level_bodies() {
    let body = build_body(&[Element::vector_real8(TAG_A, &[1.5, 2.5])]);
    let file = build_file_with(
        &[
            (CONTAINER_RECORD_TAG, build_body(&[])),
            (OBSERVATION_RECORD_TAG, body),
        ],
        true,
    );

    let mut parser = PhysicalParser::from_bytes(file);
    // The container record is read before compression is configured.
    parser.next_record().unwrap();

    parser
        .set_compression_style(CompressionStyle::RecordLevel)
        .unwrap();
    parser
        .set_compression_algorithm(CompressionAlgorithm::Zlib)
        .unwrap();

    let record = parser.next_record().unwrap();
    let values = record.body().unwrap().vector_by_tag(TAG_A).unwrap();
    assert_eq!(values.get(0).unwrap(), Value::Real(1.5));
    assert_eq!(values.get(1).unwrap(), Value::Real(2.5));
}

#[test]
fn corrupt_compressed_body_is_a_decompression_failure() {
    let file = build_file(&[
        (CONTAINER_RECORD_TAG, build_body(&[])),
        // Not valid zlib data.
        (OBSERVATION_RECORD_TAG, vec![0xde, 0xad, 0xbe, 0xef]),
    ]);

    let mut parser = PhysicalParser::from_bytes(file);
    parser.next_record().unwrap();
    parser
        .set_compression_style(CompressionStyle::RecordLevel)
        .unwrap();
    parser
        .set_compression_algorithm(CompressionAlgorithm::Zlib)
        .unwrap();

    assert!(matches!(
        parser.next_record(),
        Err(Error::DecompressionFailure { .. })
    ));
}

#[test]
fn close_releases_the_stream() {
    let file = build_file(&[
        (CONTAINER_RECORD_TAG, build_body(&[])),
        (OBSERVATION_RECORD_TAG, build_body(&[])),
    ]);

    let mut parser = PhysicalParser::from_bytes(file);
    parser.next_record().unwrap();
    parser.close();
    assert!(!parser.has_next_record());
}
