//! Node type discriminators and their wire byte values.

use std::fmt;

/// Identifies the concrete type of a [`Node`](crate::Node).
///
/// The enum discriminants are the tag bytes of the binary format: every
/// encoded node starts with one of these values.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Tag {
    Null = 0x00,
    Bool = 0x01,
    Int = 0x02,
    Float = 0x03,
    Str = 0x04,
    Bin = 0x05,
    Array = 0x06,
    Object = 0x07,
}

impl Tag {
    /// Converts a raw tag byte into a `Tag`, or `None` for unknown bytes.
    pub const fn from_u8(byte: u8) -> Option<Self> {
        match byte {
            0x00 => Some(Tag::Null),
            0x01 => Some(Tag::Bool),
            0x02 => Some(Tag::Int),
            0x03 => Some(Tag::Float),
            0x04 => Some(Tag::Str),
            0x05 => Some(Tag::Bin),
            0x06 => Some(Tag::Array),
            0x07 => Some(Tag::Object),
            _ => None,
        }
    }

    /// Returns `true` for tags whose payload is a fixed-width scalar or
    /// length-prefixed leaf (everything except `Array` and `Object`).
    pub const fn is_leaf(self) -> bool {
        !self.is_container()
    }

    /// Returns `true` for the container tags: `Array` and `Object`.
    pub const fn is_container(self) -> bool {
        matches!(self, Tag::Array | Tag::Object)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tag::Null => "null",
            Tag::Bool => "bool",
            Tag::Int => "int",
            Tag::Float => "float",
            Tag::Str => "string",
            Tag::Bin => "binary",
            Tag::Array => "array",
            Tag::Object => "object",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_u8_covers_all_tags() {
        for byte in 0x00..=0x07u8 {
            let tag = Tag::from_u8(byte).unwrap();
            assert_eq!(tag as u8, byte);
        }
        assert_eq!(Tag::from_u8(0x08), None);
        assert_eq!(Tag::from_u8(0xff), None);
    }

    #[test]
    fn container_predicate() {
        assert!(Tag::Array.is_container());
        assert!(Tag::Object.is_container());
        assert!(Tag::Null.is_leaf());
        assert!(Tag::Bin.is_leaf());
        assert!(!Tag::Int.is_container());
    }
}
