//! Tree decoder.

use blob_tree_buffers::Reader;
use indexmap::IndexMap;

use super::error::DecodeError;
use crate::{Node, Tag};

/// Default nesting depth guard.
///
/// Bounds decoder stack usage on adversarial input; a well-formed document
/// deeper than this fails with [`DecodeError::DepthLimitExceeded`] unless
/// the limit is raised via [`Decoder::with_max_depth`].
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Decodes binary data back into a [`Node`] tree.
///
/// Decoding either produces a complete tree or fails without mutating any
/// caller state.
///
/// # Example
///
/// ```
/// use blob_tree::{codec, Node};
///
/// let bytes = codec::encode(&Node::from(42i64));
/// let node = codec::decode(&bytes).unwrap();
/// assert_eq!(node, Node::Int(42));
/// ```
pub struct Decoder<'a> {
    reader: Reader<'a>,
    max_depth: usize,
}

impl<'a> Decoder<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_max_depth(data, DEFAULT_MAX_DEPTH)
    }

    /// Creates a decoder with a custom nesting depth guard.
    pub fn with_max_depth(data: &'a [u8], max_depth: usize) -> Self {
        Self {
            reader: Reader::new(data),
            max_depth,
        }
    }

    /// Decodes a single tree and requires the buffer to be fully consumed.
    pub fn decode(mut self) -> Result<Node, DecodeError> {
        let node = self.read_node(0)?;
        let remaining = self.reader.size();
        if remaining > 0 {
            return Err(DecodeError::TrailingData(remaining));
        }
        Ok(node)
    }

    /// Decodes a single tree and returns it together with the number of
    /// bytes consumed, leaving any trailing bytes for the caller.
    pub fn decode_with_consumed(mut self) -> Result<(Node, usize), DecodeError> {
        let node = self.read_node(0)?;
        Ok((node, self.reader.x))
    }

    fn read_node(&mut self, depth: usize) -> Result<Node, DecodeError> {
        if depth > self.max_depth {
            return Err(DecodeError::DepthLimitExceeded(self.max_depth));
        }

        let byte = self.reader.try_u8()?;
        let tag = Tag::from_u8(byte).ok_or(DecodeError::InvalidTag(byte))?;

        match tag {
            Tag::Null => Ok(Node::Null),
            Tag::Bool => Ok(Node::Bool(self.reader.try_u8()? != 0)),
            Tag::Int => Ok(Node::Int(self.reader.try_i64()?)),
            Tag::Float => Ok(Node::Float(self.reader.try_f64()?)),
            Tag::Str => {
                let len = self.reader.try_u32()? as usize;
                Ok(Node::Str(self.reader.try_utf8(len)?.to_string()))
            }
            Tag::Bin => {
                let len = self.reader.try_u32()? as usize;
                Ok(Node::Bin(self.reader.try_buf(len)?.to_vec()))
            }
            Tag::Array => {
                let count = self.reader.try_u32()? as usize;
                // The count is untrusted input; never preallocate from it.
                let mut items = Vec::new();
                for _ in 0..count {
                    items.push(self.read_node(depth + 1)?);
                }
                Ok(Node::Array(items))
            }
            Tag::Object => {
                let count = self.reader.try_u32()? as usize;
                let mut map = IndexMap::new();
                for _ in 0..count {
                    let key_len = self.reader.try_u32()? as usize;
                    let key = self.reader.try_utf8(key_len)?.to_string();
                    let value = self.read_node(depth + 1)?;
                    map.insert(key, value);
                }
                Ok(Node::Object(map))
            }
        }
    }
}

/// Decodes a buffer holding exactly one encoded tree.
pub fn decode(data: &[u8]) -> Result<Node, DecodeError> {
    Decoder::new(data).decode()
}

/// Decodes one tree from the front of `data`, returning the tree and the
/// number of bytes consumed.
pub fn decode_with_consumed(data: &[u8]) -> Result<(Node, usize), DecodeError> {
    Decoder::new(data).decode_with_consumed()
}
