use serde::Deserialize;

/// Default ceiling for one-shot decode payloads (64 MiB).
pub const DEFAULT_MAX_PAYLOAD_BYTES: usize = 64 * 1024 * 1024;

///
/// CodecConfig
///
/// Caller decode policy. Size limits are host policy, not format policy, so
/// hosts may embed this in their own configuration and override it.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct CodecConfig {
    /// Reject one-shot payloads larger than this; `None` disables the check.
    pub max_payload_bytes: Option<usize>,
}

impl CodecConfig {
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            max_payload_bytes: None,
        }
    }

    #[must_use]
    pub const fn with_max_payload_bytes(max_bytes: usize) -> Self {
        Self {
            max_payload_bytes: Some(max_bytes),
        }
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self::with_max_payload_bytes(DEFAULT_MAX_PAYLOAD_BYTES)
    }
}
