use blob_tree::{codec, codec::Decoder, DecodeError, Node};

#[test]
fn empty_input_is_eof() {
    assert_eq!(codec::decode(&[]), Err(DecodeError::UnexpectedEof));
}

#[test]
fn unknown_tag_byte() {
    assert_eq!(codec::decode(&[0x5a]), Err(DecodeError::InvalidTag(0x5a)));
    assert_eq!(codec::decode(&[0xff]), Err(DecodeError::InvalidTag(0xff)));
}

#[test]
fn truncated_bool_payload() {
    assert_eq!(codec::decode(&[0x01]), Err(DecodeError::UnexpectedEof));
}

#[test]
fn truncated_int_payload() {
    assert_eq!(
        codec::decode(&[0x02, 0x01, 0x02]),
        Err(DecodeError::UnexpectedEof)
    );
}

#[test]
fn string_length_past_buffer_end() {
    // Claims 10 bytes, only 3 present.
    let data = [0x04, 0x0a, 0x00, 0x00, 0x00, b'a', b'b', b'c'];
    assert_eq!(codec::decode(&data), Err(DecodeError::UnexpectedEof));
}

#[test]
fn binary_length_past_buffer_end() {
    let data = [0x05, 0xff, 0xff, 0xff, 0xff];
    assert_eq!(codec::decode(&data), Err(DecodeError::UnexpectedEof));
}

#[test]
fn array_count_exceeds_children() {
    // Count says 3, only one null child follows.
    let data = [0x06, 0x03, 0x00, 0x00, 0x00, 0x00];
    assert_eq!(codec::decode(&data), Err(DecodeError::UnexpectedEof));
}

#[test]
fn object_key_truncated() {
    // One entry, key length 5, only one key byte present.
    let data = [0x07, 0x01, 0x00, 0x00, 0x00, 0x05, 0x00, 0x00, 0x00, b'a'];
    assert_eq!(codec::decode(&data), Err(DecodeError::UnexpectedEof));
}

#[test]
fn invalid_utf8_in_string() {
    let data = [0x04, 0x01, 0x00, 0x00, 0x00, 0xff];
    assert_eq!(codec::decode(&data), Err(DecodeError::InvalidUtf8));
}

#[test]
fn invalid_utf8_in_object_key() {
    let data = [
        0x07, 0x01, 0x00, 0x00, 0x00, // one entry
        0x01, 0x00, 0x00, 0x00, 0xff, // 1-byte key, invalid UTF-8
        0x00, // child: null
    ];
    assert_eq!(codec::decode(&data), Err(DecodeError::InvalidUtf8));
}

#[test]
fn trailing_data_rejected() {
    let mut bytes = codec::encode(&Node::Null);
    bytes.extend_from_slice(&[0xaa, 0xbb]);
    assert_eq!(codec::decode(&bytes), Err(DecodeError::TrailingData(2)));
}

#[test]
fn decode_with_consumed_leaves_trailing_bytes() {
    let mut bytes = codec::encode(&Node::Int(7));
    bytes.extend_from_slice(&[0xde, 0xad]);
    let (node, consumed) = codec::decode_with_consumed(&bytes).unwrap();
    assert_eq!(node, Node::Int(7));
    assert_eq!(consumed, 9);
}

fn nest_arrays(levels: usize) -> Vec<u8> {
    let mut node = Node::from(1i64);
    for _ in 0..levels {
        let mut arr = Node::array();
        arr.push(node).unwrap();
        node = arr;
    }
    codec::encode(&node)
}

#[test]
fn depth_guard_boundary() {
    // 128 container levels is the deepest the default decoder accepts.
    assert!(codec::decode(&nest_arrays(128)).is_ok());
    assert_eq!(
        codec::decode(&nest_arrays(129)),
        Err(DecodeError::DepthLimitExceeded(128))
    );
}

#[test]
fn depth_guard_is_configurable() {
    let bytes = nest_arrays(10);
    assert_eq!(
        Decoder::with_max_depth(&bytes, 4).decode(),
        Err(DecodeError::DepthLimitExceeded(4))
    );
    assert!(Decoder::with_max_depth(&bytes, 10).decode().is_ok());
}

#[test]
fn huge_count_does_not_allocate_or_crash() {
    // Array claiming u32::MAX children with an empty body must fail cleanly.
    let data = [0x06, 0xff, 0xff, 0xff, 0xff];
    assert_eq!(codec::decode(&data), Err(DecodeError::UnexpectedEof));
}
