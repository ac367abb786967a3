//! Packed-binary stream format.
//!
//! Format-level only: CBOR plus the mapping of backend failures onto the
//! codec error taxonomy. Entity layout lives in `codec`; payload size policy
//! is passed in by the caller.

mod cbor;

#[cfg(test)]
mod tests;

use crate::error::CodecError;
use serde_cbor::error::Category;

pub(crate) use cbor::{deserialize_bounded, serialize, serialize_into};

/// Classify a backend decode failure by category, never by message text.
pub(crate) fn classify_decode(err: &serde_cbor::Error) -> CodecError {
    let message = err.to_string();

    match err.classify() {
        Category::Eof => CodecError::StreamTruncated(message),
        Category::Io => CodecError::Io(message),
        Category::Syntax | Category::Data => CodecError::StreamType(message),
    }
}

/// Classify a backend encode failure.
pub(crate) fn classify_encode(err: &serde_cbor::Error) -> CodecError {
    let message = err.to_string();

    match err.classify() {
        Category::Io => CodecError::Io(message),
        _ => CodecError::Serialize(message),
    }
}
