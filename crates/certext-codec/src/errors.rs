use thiserror::Error;

use crate::validation::ValidationError;

/// Errors raised when bytes do not have the expected ASN.1 shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Malformed DER: wrong tag, bad length, invalid UTF-8 or trailing bytes.
    #[error("malformed DER: {0}")]
    Der(#[from] der::Error),
    /// A `SEQUENCE` that must carry at least one element was empty.
    #[error("sequence contains no elements")]
    EmptySequence,
    /// A `SEQUENCE` carried the wrong number of elements.
    #[error("expected {expected} sequence elements, found {actual}")]
    FieldCount {
        /// Number of elements required.
        expected: usize,
        /// Number of elements present.
        actual: usize,
    },
}

/// Umbrella error for hosts that handle both directions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtensionError {
    /// Input rejected before encoding.
    #[error("invalid value: {0}")]
    Validation(#[from] ValidationError),
    /// Bytes rejected while decoding.
    #[error("decode failed: {0}")]
    Decode(#[from] DecodeError),
}
