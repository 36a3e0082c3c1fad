//! Error types for PQDIF operations.
//!
//! This module defines the [`Error`] enum which represents all possible failures
//! that can occur while decoding a PQDIF file.
//!
//! # Example
//!
//! ```no_run
//! use pqdif_rs::{LogicalParser, Error, Result};
//!
//! fn process_file(path: &str) -> Result<()> {
//!     match LogicalParser::open(path) {
//!         Ok(mut parser) => {
//!             while parser.has_next_observation_record()? {
//!                 if let Some(observation) = parser.next_observation_record()? {
//!                     println!("{}", observation.name()?);
//!                 }
//!             }
//!             Ok(())
//!         }
//!         Err(Error::Io(e)) => {
//!             eprintln!("File I/O error: {}", e);
//!             Err(Error::Io(e))
//!         }
//!         Err(e) => Err(e),
//!     }
//! }
//! ```

use core::fmt;

/// Errors that can occur while decoding a PQDIF file.
///
/// Every failure is terminal for the current parse position: the parser
/// never retries internally, and the stream state is undefined for further
/// reads after an error. Variants carry the file byte offset involved
/// where one is known.
#[derive(Debug)]
pub enum Error {
    /// An I/O error occurred while reading the file.
    Io(std::io::Error),

    /// Buffer provided for decoding was too small.
    ///
    /// This typically indicates file corruption or a truncated read.
    TooShortBuffer {
        /// Actual number of bytes available
        actual: usize,
        /// Minimum number of bytes required
        expected: usize,
        /// Source file where the error was detected
        file: &'static str,
        /// Line number where the error was detected
        line: u32,
    },

    /// A record header's fields are inconsistent.
    ///
    /// Covers bad record signatures, negative sizes, and next-record
    /// positions that point outside the file or backwards.
    MalformedHeader {
        /// File offset of the offending header
        offset: u64,
        /// Description of the inconsistency
        message: String,
    },

    /// A deprecated compression mode was requested.
    ///
    /// Whole-file compression and the PKZIP algorithm are intentionally
    /// unsupported, not silently degraded.
    UnsupportedCompression(String),

    /// Inflating a record body failed.
    DecompressionFailure {
        /// File offset of the record whose body failed to inflate
        offset: u64,
        /// Description from the inflate routine
        message: String,
    },

    /// A physical type byte is not in the fixed type table.
    UnknownPhysicalType {
        /// The type byte that was found
        value: u8,
    },

    /// An element kind byte is not Collection, Scalar, or Vector.
    UnknownElementType {
        /// The kind byte that was found
        value: u8,
    },

    /// The decoded structure disagrees with its own declarations.
    ///
    /// Covers out-of-range element links, channel-instance definition
    /// indices out of range, series instance/definition list length
    /// mismatches, and required fields that are absent or mistyped.
    StructuralMismatch {
        /// Description of the mismatch
        message: String,
    },

    /// The record stream violates the container-first protocol.
    ///
    /// Raised when the first record is not a Container record or when a
    /// second Container record is encountered mid-file.
    ProtocolViolation {
        /// Description of the violation
        message: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {e}"),
            Error::TooShortBuffer {
                actual,
                expected,
                file,
                line,
            } => write!(
                f,
                "Buffer too small at {file}:{line}: need at least {expected} bytes, got {actual}"
            ),
            Error::MalformedHeader { offset, message } => {
                write!(f, "Malformed record header at offset {offset:#x}: {message}")
            }
            Error::UnsupportedCompression(message) => {
                write!(f, "Unsupported compression: {message}")
            }
            Error::DecompressionFailure { offset, message } => {
                write!(
                    f,
                    "Failed to decompress record body at offset {offset:#x}: {message}"
                )
            }
            Error::UnknownPhysicalType { value } => {
                write!(f, "Unknown physical type: {value}")
            }
            Error::UnknownElementType { value } => {
                write!(f, "Unknown element type: {value}")
            }
            Error::StructuralMismatch { message } => {
                write!(f, "Structural mismatch: {message}")
            }
            Error::ProtocolViolation { message } => {
                write!(f, "Protocol violation: {message}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

/// A specialized Result type for PQDIF operations.
pub type Result<T> = core::result::Result<T, Error>;
