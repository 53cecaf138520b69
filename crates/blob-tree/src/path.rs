//! Delimited path navigation, e.g. `"a.b.2.c"` with a `'.'` separator.
//!
//! Each segment is interpreted by the tag of the node reached so far: at an
//! `Array` the segment must be a numeric index, at an `Object` it is a key.
//! A miss of any kind resolves to `None`; callers cannot distinguish an
//! absent entry from a malformed path, which keeps lookups infallible and
//! repeatable.

use crate::Node;

/// Checks that a segment is a valid non-negative array index.
///
/// Leading-zero forms other than `"0"` are rejected so that every index has
/// exactly one spelling.
fn parse_index(segment: &str) -> Option<usize> {
    if segment.is_empty() {
        return None;
    }
    let bytes = segment.as_bytes();
    if bytes.len() > 1 && bytes[0] == b'0' {
        return None;
    }
    if !bytes.iter().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

/// Resolves a delimited path against a tree.
///
/// The empty path resolves to `node` itself.
pub fn get<'a>(node: &'a Node, path: &str, separator: char) -> Option<&'a Node> {
    if path.is_empty() {
        return Some(node);
    }

    let mut current = node;
    for segment in path.split(separator) {
        match current {
            Node::Array(items) => {
                let idx = parse_index(segment)?;
                current = items.get(idx)?;
            }
            Node::Object(map) => {
                current = map.get(segment)?;
            }
            _ => return None,
        }
    }
    Some(current)
}

/// Mutable variant of [`get`].
pub fn get_mut<'a>(node: &'a mut Node, path: &str, separator: char) -> Option<&'a mut Node> {
    if path.is_empty() {
        return Some(node);
    }

    let mut current = node;
    for segment in path.split(separator) {
        match current {
            Node::Array(items) => {
                let idx = parse_index(segment)?;
                current = items.get_mut(idx)?;
            }
            Node::Object(map) => {
                current = map.get_mut(segment)?;
            }
            _ => return None,
        }
    }
    Some(current)
}
