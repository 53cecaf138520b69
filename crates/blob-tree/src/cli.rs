//! Command-line logic for the `blob-pack`/`blob-unpack` binaries.
//!
//! Keeps the binary entry points thin:
//! - `blob-pack`   — encode JSON → blob-tree binary
//! - `blob-unpack` — decode blob-tree binary → JSON

use serde_json::Value;
use thiserror::Error;

use crate::{codec, DecodeError, Document, Node};

/// Error type for the CLI entry points.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Options for [`pack`].
#[derive(Debug, Clone)]
pub struct PackOptions {
    /// Wrap the encoding in a versioned [`Document`] frame.
    pub framed: bool,
    /// Version word written when `framed` is set.
    pub version: u32,
}

impl Default for PackOptions {
    fn default() -> Self {
        Self {
            framed: false,
            version: 1,
        }
    }
}

/// Encodes a JSON string to blob-tree bytes.
pub fn pack(json_text: &str, options: &PackOptions) -> Result<Vec<u8>, CliError> {
    let value: Value = serde_json::from_str(json_text)?;
    let node = Node::from(value);
    let bytes = if options.framed {
        Document::new(options.version, node).to_bytes()
    } else {
        codec::encode(&node)
    };
    Ok(bytes)
}

/// Decodes blob-tree bytes to a pretty-printed JSON string.
pub fn unpack(bytes: &[u8], framed: bool) -> Result<String, CliError> {
    let node = if framed {
        Document::from_bytes(bytes)?.root
    } else {
        codec::decode(bytes)?
    };
    let value = Value::from(node);
    Ok(serde_json::to_string_pretty(&value)?)
}
