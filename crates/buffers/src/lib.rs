//! Little-endian binary buffer primitives.
//!
//! [`Writer`] is an auto-growing output buffer; [`Reader`] is a cursor over
//! a borrowed byte slice whose accessors are bounds-checked and return
//! [`BufferError`] instead of panicking.

use thiserror::Error;

mod reader;
mod writer;

pub use reader::Reader;
pub use writer::Writer;

/// Error type for buffer read operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    #[error("unexpected end of buffer")]
    EndOfBuffer,
    #[error("invalid UTF-8")]
    InvalidUtf8,
}
