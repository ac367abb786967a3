//! Observability: codec telemetry (counters + tracing) and sink abstractions.
//!
//! Codec logic never touches counters directly; everything flows through
//! `CodecEvent` and `CodecSink`.

pub(crate) mod metrics;
pub(crate) mod sink;


// re-exports
pub use metrics::CodecCounters;
pub use sink::{CodecEvent, CodecSink, EntityLabel, codec_report, codec_reset_all, with_codec_sink};
