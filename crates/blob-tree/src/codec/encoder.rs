//! Tree encoder.

use blob_tree_buffers::Writer;

use crate::{Node, Tag};

/// Encodes a [`Node`] tree to its binary form.
///
/// Encoding never fails: every constructible tree has an encoding.
///
/// # Example
///
/// ```
/// use blob_tree::{codec, Node};
///
/// let mut root = Node::object();
/// root.set("on", Node::from(true)).unwrap();
/// let bytes = codec::encode(&root);
/// assert_eq!(bytes[0], 0x07); // object tag
/// ```
pub struct Encoder {
    writer: Writer,
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoder {
    pub fn new() -> Self {
        Self {
            writer: Writer::new(),
        }
    }

    /// Encodes a tree and returns the produced bytes.
    pub fn encode(&mut self, node: &Node) -> Vec<u8> {
        self.write_node(node);
        self.writer.flush()
    }

    fn write_node(&mut self, node: &Node) {
        match node {
            Node::Null => self.writer.u8(Tag::Null as u8),
            Node::Bool(b) => {
                self.writer.u8(Tag::Bool as u8);
                self.writer.u8(*b as u8);
            }
            Node::Int(i) => {
                self.writer.u8(Tag::Int as u8);
                self.writer.i64(*i);
            }
            Node::Float(f) => {
                self.writer.u8(Tag::Float as u8);
                self.writer.f64(*f);
            }
            Node::Str(s) => {
                self.writer.u8u32(Tag::Str as u8, s.len() as u32);
                self.writer.utf8(s);
            }
            Node::Bin(b) => {
                self.writer.u8u32(Tag::Bin as u8, b.len() as u32);
                self.writer.buf(b);
            }
            Node::Array(items) => {
                self.writer.u8u32(Tag::Array as u8, items.len() as u32);
                for item in items {
                    self.write_node(item);
                }
            }
            Node::Object(map) => {
                self.writer.u8u32(Tag::Object as u8, map.len() as u32);
                for (key, value) in map {
                    self.writer.u32(key.len() as u32);
                    self.writer.utf8(key);
                    self.write_node(value);
                }
            }
        }
    }
}

/// Encodes a tree with a fresh [`Encoder`].
pub fn encode(node: &Node) -> Vec<u8> {
    Encoder::new().encode(node)
}
