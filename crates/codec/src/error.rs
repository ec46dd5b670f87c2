//! Codec error types.

use thiserror::Error;

use tensix_core::IndexError;

/// Errors from encoding or decoding persisted indices.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Underlying stream failure (including truncation).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A decoded field violated an Index invariant, or an invalid Index
    /// was handed to the encoder.
    #[error(transparent)]
    Index(#[from] IndexError),

    /// The kind tag read from the stream names no storable kind.
    #[error("unknown index kind tag {tag}")]
    BadKindTag {
        /// The unrecognized tag value.
        tag: u32,
    },

    /// A decoded field is impossible for any correctly written stream.
    #[error("corrupt index record: {reason}")]
    Corrupt {
        /// What was wrong with the record.
        reason: String,
    },

    /// String longer than the wire format allows.
    #[error("string of {len} bytes exceeds the wire limit")]
    StringTooLong {
        /// The unencodable length.
        len: usize,
    },

    /// Length-prefixed text was not valid UTF-8.
    #[error("persisted string is not valid UTF-8")]
    InvalidString,
}

/// Result type for codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;
