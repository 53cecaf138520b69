//! Decoder error type.

use blob_tree_buffers::BufferError;
use thiserror::Error;

/// Error type for decoding operations.
///
/// Any of these means the input is not a well-formed encoding (or exceeds
/// the configured guards); the partially-built tree is discarded and no
/// caller state is mutated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The input ended before the encoding was complete, either inside a
    /// fixed-width payload or because a length prefix claimed more bytes
    /// than remain.
    #[error("unexpected end of input")]
    UnexpectedEof,

    /// An unknown tag byte was encountered where a node was expected.
    #[error("invalid tag byte: {0:#04x}")]
    InvalidTag(u8),

    /// A string payload (or object key) was not valid UTF-8.
    #[error("invalid UTF-8 in string payload")]
    InvalidUtf8,

    /// Container nesting exceeded the decoder's depth guard.
    #[error("nesting depth limit exceeded ({0})")]
    DepthLimitExceeded(usize),

    /// Extra bytes remain after the root node.
    #[error("trailing data after root node: {0} bytes remaining")]
    TrailingData(usize),
}

impl From<BufferError> for DecodeError {
    fn from(e: BufferError) -> Self {
        match e {
            BufferError::EndOfBuffer => DecodeError::UnexpectedEof,
            BufferError::InvalidUtf8 => DecodeError::InvalidUtf8,
        }
    }
}
