//! The binary codec: a recursive, depth-first, pre-order wire format.
//!
//! Every node is encoded as a 1-byte tag (see [`Tag`](crate::Tag)) followed
//! by a tag-specific payload. All multi-byte values are little-endian:
//!
//! | Tag    | Byte | Payload                                              |
//! |--------|------|------------------------------------------------------|
//! | Null   | 0x00 | —                                                    |
//! | Bool   | 0x01 | 1 byte (`0x00`/`0x01`)                               |
//! | Int    | 0x02 | i64, 8 bytes                                         |
//! | Float  | 0x03 | f64 IEEE 754, 8 bytes                                |
//! | Str    | 0x04 | u32 byte length + UTF-8 bytes, no terminator         |
//! | Bin    | 0x05 | u32 byte length + raw bytes                          |
//! | Array  | 0x06 | u32 count + `count` encoded children                 |
//! | Object | 0x07 | u32 count + `count` × (u32 key length + key + child) |
//!
//! Object entries are written in insertion order, so encoding is a pure
//! function of the tree: identical trees produce byte-identical output.
//! When decoding, a duplicate key keeps its first position and takes the
//! last value, matching [`Node::set`](crate::Node::set) semantics.

mod decoder;
mod encoder;
mod error;

pub use decoder::{decode, decode_with_consumed, Decoder, DEFAULT_MAX_DEPTH};
pub use encoder::{encode, Encoder};
pub use error::DecodeError;
