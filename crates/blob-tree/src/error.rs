//! Error type for tree accessor and mutation operations.

use thiserror::Error;

use crate::Tag;

/// Error type for operations on a [`Node`](crate::Node).
///
/// These are usage errors: the tree itself stays valid, the failing call has
/// no effect.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NodeError {
    /// A typed accessor or mutator was invoked against the wrong tag.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch { expected: Tag, actual: Tag },

    /// An object lookup missed.
    #[error("key not found: {0:?}")]
    KeyNotFound(String),

    /// An array index was at or past the end.
    #[error("index {index} out of range for array of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}
