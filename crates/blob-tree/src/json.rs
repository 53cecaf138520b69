//! JSON interop: convert trees to and from `serde_json::Value`.
//!
//! JSON cannot natively carry binary data, so `Bin` nodes cross into JSON
//! as data URI strings and are recognized and unwrapped on the way back.
//! Object key order survives both directions.

use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine;
use serde_json::Value;

use crate::Node;

/// Data URI prefix used to carry binary payloads through JSON strings.
pub const BIN_URI_START: &str = "data:application/octet-stream;base64,";

impl From<Node> for Value {
    fn from(node: Node) -> Self {
        match node {
            Node::Null => Value::Null,
            Node::Bool(b) => Value::Bool(b),
            Node::Int(i) => Value::from(i),
            // Non-finite floats have no JSON spelling and collapse to null.
            Node::Float(f) => Value::from(f),
            Node::Str(s) => Value::String(s),
            Node::Bin(b) => Value::String(format!("{}{}", BIN_URI_START, B64.encode(&b))),
            Node::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            Node::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Node::Null,
            Value::Bool(b) => Node::Bool(b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Node::Int(i)
                } else {
                    Node::Float(n.as_f64().unwrap_or(0.0))
                }
            }
            Value::String(s) => match s.strip_prefix(BIN_URI_START) {
                Some(b64) => match B64.decode(b64) {
                    Ok(bytes) => Node::Bin(bytes),
                    Err(_) => Node::Str(s),
                },
                None => Node::Str(s),
            },
            Value::Array(arr) => Node::Array(arr.into_iter().map(Node::from).collect()),
            Value::Object(obj) => Node::Object(
                obj.into_iter()
                    .map(|(k, v)| (k, Node::from(v)))
                    .collect(),
            ),
        }
    }
}

/// Serializes a tree to a JSON string, wrapping binary payloads as data
/// URIs.
pub fn stringify(node: Node) -> Result<String, serde_json::Error> {
    serde_json::to_string(&Value::from(node))
}

/// Parses a JSON string, unwrapping any binary data URI strings.
pub fn parse(json: &str) -> Result<Node, serde_json::Error> {
    let parsed: Value = serde_json::from_str(json)?;
    Ok(Node::from(parsed))
}
