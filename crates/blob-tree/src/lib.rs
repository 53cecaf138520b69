//! Hierarchical, JSON-like tree structure for binary data.
//!
//! A document is a tree of typed [`Node`]s (scalar leaves, arrays, and
//! insertion-ordered objects) with a compact, deterministic binary codec,
//! delimited-path accessors, and optional versioned framing.
//!
//! # Example
//!
//! ```
//! use blob_tree::{codec, Node};
//!
//! let mut samples = Node::array();
//! samples.push(Node::from(10i64)).unwrap();
//! samples.push(Node::from(20i64)).unwrap();
//!
//! let mut root = Node::object();
//! root.set("name", Node::from("sensor-7")).unwrap();
//! root.set("samples", samples).unwrap();
//!
//! let bytes = codec::encode(&root);
//! let back = codec::decode(&bytes).unwrap();
//! assert_eq!(back, root);
//! assert_eq!(back.at_path("samples.1", '.').unwrap().as_int().unwrap(), 20);
//! ```

pub mod cli;
pub mod codec;
mod document;
mod error;
pub mod json;
mod node;
pub mod path;
mod tag;

pub use codec::{DecodeError, Decoder, Encoder, DEFAULT_MAX_DEPTH};
pub use document::Document;
pub use error::NodeError;
pub use node::Node;
pub use tag::Tag;
