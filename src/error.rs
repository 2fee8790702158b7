//! Error types for QR symbol encoding and PIX payload building

use crate::models::{ECLevel, Version};
use thiserror::Error;

/// Result type alias for crate operations
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised while building a QR symbol
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QrError {
    /// Logarithm of zero, division by zero, or another argument outside the
    /// domain of a field operation
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Content does not fit any version up to 40 at the requested level.
    /// Lowering the error correction level increases usable capacity.
    #[error("Data too long: {len} bytes do not fit a version 40 symbol at level {ec_level:?}")]
    DataTooLong {
        /// Content length in bytes
        len: usize,
        /// Requested error correction level
        ec_level: ECLevel,
    },

    /// Packed data exceeds the data codeword capacity of the chosen version
    #[error("Code length overflow: {bits} bits exceed {capacity_bits} bits of version {version}")]
    CodeLengthOverflow {
        /// Bit length of the encoded segments
        bits: usize,
        /// Data capacity of the symbol in bits
        capacity_bits: usize,
        /// Symbol version
        version: Version,
    },

    /// Invariant violation inside the encoder, reported by the public
    /// encode functions in place of [`QrError::CodeLengthOverflow`]
    #[error("Internal encoder error: {0}")]
    Internal(String),

    /// Version number outside 1..=40
    #[error("Invalid version: {0} (expected 1-40)")]
    InvalidVersion(u8),

    /// Mask pattern outside 0..=7
    #[error("Invalid mask pattern: {0} (expected 0-7)")]
    InvalidMask(u8),

    /// Unrecognized error correction level name
    #[error("Unknown error correction level: {0} (expected L, M, Q or H)")]
    UnknownEcLevel(String),
}

/// Errors raised while validating and serializing PIX payload fields
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PixError {
    /// A required field is empty
    #[error("Field '{0}' is required")]
    MissingField(&'static str),

    /// A field exceeds its maximum length
    #[error("Field '{field}' too long: {actual} characters (max {max})")]
    FieldTooLong {
        /// Field name
        field: &'static str,
        /// Maximum accepted length
        max: usize,
        /// Actual length
        actual: usize,
    },

    /// A field has an invalid format
    #[error("Field '{field}' is invalid: {reason}")]
    InvalidField {
        /// Field name
        field: &'static str,
        /// Description of the violated constraint
        reason: String,
    },
}

/// Top-level error for operations that build a payload and encode it
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// QR symbol encoding error
    #[error(transparent)]
    Qr(#[from] QrError),

    /// PIX payload error
    #[error(transparent)]
    Pix(#[from] PixError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_field() {
        let err = PixError::FieldTooLong {
            field: "merchantName",
            max: 25,
            actual: 26,
        };
        assert_eq!(
            err.to_string(),
            "Field 'merchantName' too long: 26 characters (max 25)"
        );
    }

    #[test]
    fn test_internal_message_keeps_context() {
        let overflow = QrError::CodeLengthOverflow {
            bits: 400,
            capacity_bits: 128,
            version: Version::MIN,
        };
        let err = QrError::Internal(overflow.to_string());
        assert_eq!(
            err.to_string(),
            "Internal encoder error: Code length overflow: 400 bits exceed 128 bits of version 1"
        );
    }

    #[test]
    fn test_top_level_conversion() {
        let err: Error = QrError::InvalidVersion(41).into();
        assert!(matches!(err, Error::Qr(QrError::InvalidVersion(41))));
        assert_eq!(err.to_string(), "Invalid version: 41 (expected 1-40)");
    }
}
