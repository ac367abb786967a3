use super::{deserialize_bounded, serialize};
use crate::error::CodecErrorKind;

#[test]
fn oversized_payload_is_rejected_before_decode() {
    let bytes = vec![0u8; 32];
    let err = deserialize_bounded::<u8>(&bytes, Some(16)).expect_err("payload over limit must fail");

    assert_eq!(err.kind(), CodecErrorKind::PayloadTooLarge);
    assert!(
        err.to_string().contains("payload size 32 exceeds limit 16"),
        "unexpected error: {err:?}"
    );
}

#[test]
fn unbounded_decode_skips_size_check() {
    let bytes = serialize(&"x".repeat(64)).expect("encode");
    let value: String = deserialize_bounded(&bytes, None).expect("decode");

    assert_eq!(value.len(), 64);
}

#[test]
fn truncated_input_classifies_as_truncated() {
    let mut bytes = serialize(&vec![1u32, 2, 3]).expect("encode");
    bytes.pop();

    let err = deserialize_bounded::<Vec<u32>>(&bytes, None).expect_err("truncated input must fail");
    assert_eq!(err.kind(), CodecErrorKind::StreamTruncated);
}

#[test]
fn wrong_wire_type_classifies_as_stream_type() {
    let bytes = serialize(&7u64).expect("encode");

    let err = deserialize_bounded::<String>(&bytes, None).expect_err("integer is not a string");
    assert_eq!(err.kind(), CodecErrorKind::StreamType);
}

#[test]
fn trailing_bytes_classify_as_stream_type() {
    let mut bytes = serialize(&true).expect("encode");
    bytes.extend(serialize(&false).expect("encode"));

    let err = deserialize_bounded::<bool>(&bytes, None).expect_err("trailing value must fail");
    assert_eq!(err.kind(), CodecErrorKind::StreamType);
}
