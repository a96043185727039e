//! Error types for nodebuf.

use thiserror::Error;

use crate::hash::Backend;

/// Errors that can occur while building, converting or accessing a buffer.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BufferError {
    /// The requested allocation size is negative, not an integer, or too large.
    #[error(
        "The \"size\" argument must be of type number and a valid length. Received {received}"
    )]
    InvalidSize {
        /// The offending value, rendered for display.
        received: String,
    },

    /// A non-empty allocation was asked to fill itself from an empty pattern.
    #[error("The argument \"value\" is invalid. Received {type_name} []")]
    InvalidFillValue {
        /// Origin type of the empty pattern (`Uint8Array` or `Buffer`).
        type_name: &'static str,
    },

    /// The encoding name is not in the encoding table.
    #[error("Unkown encoding: {0}")]
    UnknownEncoding(String),

    /// The encoding is recognized, but no codec is compiled in for it.
    #[error("Not implemented: \"{0}\" encoding")]
    EncodingNotImplemented(String),

    /// Input text is not valid for the requested encoding.
    #[error("invalid {encoding} input: {reason}")]
    InvalidEncodedText {
        /// Canonical name of the encoding.
        encoding: &'static str,
        /// What was wrong with the input.
        reason: String,
    },

    /// An offset or length falls outside the buffer.
    #[error("{0}")]
    OutOfBounds(String),

    /// The JSON projection could not be parsed.
    #[error("invalid buffer json: {0}")]
    Json(#[from] serde_json::Error),
}

impl BufferError {
    /// Builds the error reported when a fixed-size access does not fit at `offset`.
    pub(crate) fn offset_out_of_range(offset: usize, size: usize, len: usize) -> Self {
        match len.checked_sub(size) {
            Some(max) => BufferError::OutOfBounds(format!(
                "The value of \"offset\" is out of range. It must be >= 0 and <= {max}. Received {offset}"
            )),
            None => BufferError::OutOfBounds("Attempt to access memory outside buffer bounds".into()),
        }
    }
}

/// Errors raised when selecting a hash provider.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HashError {
    /// No algorithm with this name is known to either backend.
    #[error("unknown hash: {0}")]
    UnknownAlgorithm(String),

    /// No backend with this name exists.
    #[error("unknown hash backend: {0}")]
    UnknownBackend(String),

    /// The backend was not compiled into this build.
    #[error("hash backend `{0}` is not available in this build")]
    BackendUnavailable(Backend),
}

/// Errors raised by the benchmark driver.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BenchError {
    /// The hash provider could not be created.
    #[error(transparent)]
    Hash(#[from] HashError),

    /// The input file could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
