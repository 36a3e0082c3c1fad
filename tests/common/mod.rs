// tests/common/mod.rs
//! Helpers for constructing synthetic PQDIF files in memory.
//!
//! Element payloads that require links are appended after the element list
//! that references them, with the links patched in afterwards, which is the
//! layout real writers produce.

#![allow(dead_code)]

use pqdif_rs::physical::{PhysicalType, RECORD_SIGNATURE};
use uuid::Uuid;

/// One element to serialize into a record body.
pub enum Element {
    Scalar {
        tag: Uuid,
        value_type: PhysicalType,
        bytes: Vec<u8>,
    },
    Vector {
        tag: Uuid,
        value_type: PhysicalType,
        count: i32,
        bytes: Vec<u8>,
    },
    Collection {
        tag: Uuid,
        children: Vec<Element>,
    },
}

impl Element {
    pub fn scalar_u32(tag: Uuid, value: u32) -> Element {
        Element::Scalar {
            tag,
            value_type: PhysicalType::UnsignedInteger4,
            bytes: value.to_le_bytes().to_vec(),
        }
    }

    pub fn scalar_real8(tag: Uuid, value: f64) -> Element {
        Element::Scalar {
            tag,
            value_type: PhysicalType::Real8,
            bytes: value.to_le_bytes().to_vec(),
        }
    }

    pub fn scalar_guid(tag: Uuid, id: Uuid) -> Element {
        Element::Scalar {
            tag,
            value_type: PhysicalType::Guid,
            bytes: id.to_bytes_le().to_vec(),
        }
    }

    pub fn scalar_timestamp(tag: Uuid, days: u32, seconds: f64) -> Element {
        let mut bytes = Vec::with_capacity(12);
        bytes.extend_from_slice(&days.to_le_bytes());
        bytes.extend_from_slice(&seconds.to_le_bytes());
        Element::Scalar {
            tag,
            value_type: PhysicalType::Timestamp,
            bytes,
        }
    }

    pub fn vector_u32(tag: Uuid, values: &[u32]) -> Element {
        let mut bytes = Vec::with_capacity(values.len() * 4);
        for v in values {
            bytes.extend_from_slice(&v.to_le_bytes());
        }
        Element::Vector {
            tag,
            value_type: PhysicalType::UnsignedInteger4,
            count: values.len() as i32,
            bytes,
        }
    }

    pub fn vector_real8(tag: Uuid, values: &[f64]) -> Element {
        let mut bytes = Vec::with_capacity(values.len() * 8);
        for v in values {
            bytes.extend_from_slice(&v.to_le_bytes());
        }
        Element::Vector {
            tag,
            value_type: PhysicalType::Real8,
            count: values.len() as i32,
            bytes,
        }
    }

    pub fn text(tag: Uuid, text: &str) -> Element {
        let mut bytes = text.as_bytes().to_vec();
        bytes.push(0);
        Element::Vector {
            tag,
            value_type: PhysicalType::Char1,
            count: bytes.len() as i32,
            bytes,
        }
    }

    pub fn collection(tag: Uuid, children: Vec<Element>) -> Element {
        Element::Collection { tag, children }
    }
}

/// Append an element list (count + headers + linked payloads) to `body`.
///
/// `body` must be the record body buffer from its first byte, since element
/// links are body-relative.
pub fn append_element_list(body: &mut Vec<u8>, elements: &[Element]) {
    body.extend_from_slice(&(elements.len() as i32).to_le_bytes());

    let mut links = Vec::new();
    for element in elements {
        match element {
            Element::Scalar {
                tag,
                value_type,
                bytes,
            } => {
                body.extend_from_slice(&tag.to_bytes_le());
                body.push(2);
                body.push(value_type.to_u8());
                body.push(1); // embedded
                body.push(0);
                body.extend_from_slice(bytes);
            }
            Element::Vector { tag, value_type, .. } => {
                body.extend_from_slice(&tag.to_bytes_le());
                body.push(3);
                body.push(value_type.to_u8());
                body.push(0);
                body.push(0);
                links.push(body.len());
                body.extend_from_slice(&0i32.to_le_bytes());
            }
            Element::Collection { tag, .. } => {
                body.extend_from_slice(&tag.to_bytes_le());
                body.push(1);
                body.push(0);
                body.push(0);
                body.push(0);
                links.push(body.len());
                body.extend_from_slice(&0i32.to_le_bytes());
            }
        }
    }

    let mut links = links.into_iter();
    for element in elements {
        match element {
            Element::Scalar { .. } => {}
            Element::Vector { count, bytes, .. } => {
                patch_link(body, links.next().unwrap());
                body.extend_from_slice(&count.to_le_bytes());
                body.extend_from_slice(bytes);
            }
            Element::Collection { children, .. } => {
                patch_link(body, links.next().unwrap());
                append_element_list(body, children);
            }
        }
    }
}

fn patch_link(body: &mut Vec<u8>, link_position: usize) {
    let target = body.len() as i32;
    body[link_position..link_position + 4].copy_from_slice(&target.to_le_bytes());
}

/// Serialize a record body from its top-level element list.
pub fn build_body(elements: &[Element]) -> Vec<u8> {
    let mut body = Vec::new();
    append_element_list(&mut body, elements);
    body
}

/// Serialize a 64-byte record header.
pub fn record_header(type_tag: Uuid, body_size: i32, next: i32) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(64);
    bytes.extend_from_slice(&RECORD_SIGNATURE.to_bytes_le());
    bytes.extend_from_slice(&type_tag.to_bytes_le());
    bytes.extend_from_slice(&64i32.to_le_bytes());
    bytes.extend_from_slice(&body_size.to_le_bytes());
    bytes.extend_from_slice(&next.to_le_bytes());
    bytes.extend_from_slice(&0u32.to_le_bytes());
    bytes.extend_from_slice(&[0u8; 16]);
    bytes
}

/// Assemble a file from (record type, body) pairs, chaining the records in
/// order. When `compress_after_first` is set, every body but the first is
/// deflated, matching record-level compression.
pub fn build_file_with(records: &[(Uuid, Vec<u8>)], compress_after_first: bool) -> Vec<u8> {
    let mut file = Vec::new();

    for (i, (type_tag, body)) in records.iter().enumerate() {
        let compressed;
        let body = if compress_after_first && i > 0 {
            compressed = miniz_oxide::deflate::compress_to_vec_zlib(body, 6);
            compressed.as_slice()
        } else {
            body.as_slice()
        };

        let next = if i + 1 == records.len() {
            0
        } else {
            (file.len() + 64 + body.len()) as i32
        };

        file.extend_from_slice(&record_header(*type_tag, body.len() as i32, next));
        file.extend_from_slice(body);
    }

    file
}

/// Assemble an uncompressed file from (record type, body) pairs.
pub fn build_file(records: &[(Uuid, Vec<u8>)]) -> Vec<u8> {
    build_file_with(records, false)
}
