use crate::{
    error::CodecError,
    serialize::{classify_decode, classify_encode},
};
use serde::{Serialize, de::DeserializeOwned};
use std::{
    io::Write,
    panic::{AssertUnwindSafe, catch_unwind},
};

/// Serialize a value into CBOR bytes.
pub(crate) fn serialize<T>(value: &T) -> Result<Vec<u8>, CodecError>
where
    T: Serialize,
{
    serde_cbor::to_vec(value).map_err(|e| classify_encode(&e))
}

/// Serialize a value onto a writer.
pub(crate) fn serialize_into<W, T>(writer: W, value: &T) -> Result<(), CodecError>
where
    W: Write,
    T: Serialize,
{
    serde_cbor::to_writer(writer, value).map_err(|e| classify_encode(&e))
}

/// Deserialize exactly one value from CBOR bytes.
///
/// Safety guarantees:
/// - Input size is checked against `max_bytes` before decode.
/// - Trailing bytes after the value are rejected.
/// - Any panic during decode is caught and reported as a stream type error.
pub(crate) fn deserialize_bounded<T>(bytes: &[u8], max_bytes: Option<usize>) -> Result<T, CodecError>
where
    T: DeserializeOwned,
{
    if let Some(max_bytes) = max_bytes
        && bytes.len() > max_bytes
    {
        return Err(CodecError::PayloadTooLarge {
            len: bytes.len(),
            max_bytes,
        });
    }

    let result = catch_unwind(AssertUnwindSafe(|| serde_cbor::from_slice::<T>(bytes)));

    match result {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(err)) => Err(classify_decode(&err)),
        Err(_) => Err(CodecError::StreamType(
            "panic during CBOR deserialization".into(),
        )),
    }
}
