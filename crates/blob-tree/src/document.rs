//! Versioned document framing.
//!
//! A document is a root node prefixed with a caller-supplied `u32` version
//! word, so readers can dispatch on schema changes before touching the tree.

use blob_tree_buffers::{Reader, Writer};

use crate::{codec, DecodeError, Node};

/// A root [`Node`] together with its format version word.
///
/// # Example
///
/// ```
/// use blob_tree::{Document, Node};
///
/// let mut root = Node::object();
/// root.set("ok", Node::from(true)).unwrap();
///
/// let bytes = Document::new(3, root.clone()).to_bytes();
/// let doc = Document::from_bytes(&bytes).unwrap();
/// assert_eq!(doc.version, 3);
/// assert_eq!(doc.root, root);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub version: u32,
    pub root: Node,
}

impl Document {
    pub fn new(version: u32, root: Node) -> Self {
        Self { version, root }
    }

    /// Serializes the version word followed by the encoded root.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut writer = Writer::new();
        writer.u32(self.version);
        writer.buf(&codec::encode(&self.root));
        writer.flush()
    }

    /// Deserializes a framed document, requiring the buffer to be fully
    /// consumed.
    pub fn from_bytes(data: &[u8]) -> Result<Self, DecodeError> {
        let mut reader = Reader::new(data);
        let version = reader.try_u32()?;
        let root = codec::decode(&data[reader.x..])?;
        Ok(Self { version, root })
    }
}
