use std::fmt;
use thiserror::Error as ThisError;

///
/// CodecError
///
/// Every schema codec failure. None of these are recoverable at the codec
/// layer; a failed decode yields no value.
///

#[derive(Debug, ThisError)]
pub enum CodecError {
    /// The next value's wire type does not match what the field expects.
    #[error("stream type error: {0}")]
    StreamType(String),

    /// The stream ended before a declared map/array length was satisfied.
    #[error("stream truncated: {0}")]
    StreamTruncated(String),

    #[error("stream i/o error: {0}")]
    Io(String),

    #[error("serialize error: {0}")]
    Serialize(String),

    #[error("payload size {len} exceeds limit {max_bytes}")]
    PayloadTooLarge { len: usize, max_bytes: usize },
}

impl CodecError {
    /// Return a stable error kind independent of backend error-message text.
    #[must_use]
    pub const fn kind(&self) -> CodecErrorKind {
        match self {
            Self::StreamType(_) => CodecErrorKind::StreamType,
            Self::StreamTruncated(_) => CodecErrorKind::StreamTruncated,
            Self::Io(_) => CodecErrorKind::Io,
            Self::Serialize(_) => CodecErrorKind::Serialize,
            Self::PayloadTooLarge { .. } => CodecErrorKind::PayloadTooLarge,
        }
    }
}

///
/// CodecErrorKind
///
/// Stable error-kind taxonomy for codec failures.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum CodecErrorKind {
    StreamType,
    StreamTruncated,
    Io,
    Serialize,
    PayloadTooLarge,
}

impl CodecErrorKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StreamType => "stream_type",
            Self::StreamTruncated => "stream_truncated",
            Self::Io => "io",
            Self::Serialize => "serialize",
            Self::PayloadTooLarge => "payload_too_large",
        }
    }
}

impl fmt::Display for CodecErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
