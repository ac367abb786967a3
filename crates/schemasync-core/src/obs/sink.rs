//! Codec event sink boundary.
//!
//! This module is the only bridge between codec logic and the per-thread
//! counters and log output.
use crate::{
    error::CodecErrorKind,
    model::PrimaryKeyType,
    obs::metrics::{self, CodecCounters, bump},
};
use std::{cell::RefCell, fmt, rc::Rc};

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<Rc<dyn CodecSink>>> = RefCell::new(None);
}

///
/// EntityLabel
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum EntityLabel {
    Column,
    Key,
    Table,
    Database,
}

impl EntityLabel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Column => "column",
            Self::Key => "key",
            Self::Table => "table",
            Self::Database => "database",
        }
    }
}

impl fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

///
/// CodecEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CodecEvent<'a> {
    Encoded {
        entity: EntityLabel,
    },
    Decoded {
        entity: EntityLabel,
    },
    UnknownKeySkipped {
        entity: EntityLabel,
        key: &'a str,
    },
    PrimaryKeyTypeBackfilled {
        table: &'a str,
        inferred: PrimaryKeyType,
    },
    UnrecognizedKeyType {
        key: &'a str,
        key_type: &'a str,
    },
    DecodeFailed {
        kind: CodecErrorKind,
    },
}

///
/// CodecSink
///

pub trait CodecSink {
    fn record(&self, event: CodecEvent<'_>);
}

/// DefaultCodecSink
/// Writes into the per-thread counters and emits `tracing` events.
/// Used whenever no scoped override is installed.

pub(crate) struct DefaultCodecSink;

impl CodecSink for DefaultCodecSink {
    fn record(&self, event: CodecEvent<'_>) {
        match event {
            CodecEvent::Encoded { entity } => {
                tracing::trace!(%entity, "schema entity encoded");
                metrics::with_state_mut(|m| match entity {
                    EntityLabel::Column => bump(&mut m.columns_encoded),
                    EntityLabel::Key => bump(&mut m.keys_encoded),
                    EntityLabel::Table => bump(&mut m.tables_encoded),
                    EntityLabel::Database => bump(&mut m.databases_encoded),
                });
            }

            CodecEvent::Decoded { entity } => {
                tracing::trace!(%entity, "schema entity decoded");
                metrics::with_state_mut(|m| match entity {
                    EntityLabel::Column => bump(&mut m.columns_decoded),
                    EntityLabel::Key => bump(&mut m.keys_decoded),
                    EntityLabel::Table => bump(&mut m.tables_decoded),
                    EntityLabel::Database => bump(&mut m.databases_decoded),
                });
            }

            CodecEvent::UnknownKeySkipped { entity, key } => {
                tracing::debug!(%entity, key, "skipped unrecognized wire key");
                metrics::with_state_mut(|m| bump(&mut m.unknown_keys_skipped));
            }

            CodecEvent::PrimaryKeyTypeBackfilled { table, inferred } => {
                tracing::debug!(
                    table,
                    ?inferred,
                    "primary_key_type absent on the wire, inferred from primary key columns"
                );
                metrics::with_state_mut(|m| bump(&mut m.primary_key_type_backfills));
            }

            CodecEvent::UnrecognizedKeyType { key, key_type } => {
                tracing::debug!(key, key_type, "ignored unrecognized key_type value");
                metrics::with_state_mut(|m| bump(&mut m.unrecognized_key_types));
            }

            CodecEvent::DecodeFailed { kind } => {
                tracing::debug!(%kind, "schema decode failed");
                metrics::with_state_mut(|m| bump(&mut m.decode_failures));
            }
        }
    }
}

pub(crate) fn record(event: CodecEvent<'_>) {
    let sink = SINK_OVERRIDE.with(|cell| cell.borrow().clone());

    match sink {
        Some(sink) => sink.record(event),
        None => DefaultCodecSink.record(event),
    }
}

/// Snapshot this thread's codec counters.
#[must_use]
pub fn codec_report() -> CodecCounters {
    metrics::snapshot()
}

/// Reset this thread's codec counters.
pub fn codec_reset_all() {
    metrics::reset_all();
}

/// Run a closure with a temporary codec sink override on this thread.
///
/// The previous sink is restored on every exit, including unwind.
pub fn with_codec_sink<T>(sink: Rc<dyn CodecSink>, f: impl FnOnce() -> T) -> T {
    struct Guard(Option<Rc<dyn CodecSink>>);

    impl Drop for Guard {
        fn drop(&mut self) {
            let prev = self.0.take();
            SINK_OVERRIDE.with(|cell| {
                *cell.borrow_mut() = prev;
            });
        }
    }

    let prev = SINK_OVERRIDE.with(|cell| cell.borrow_mut().replace(sink));
    let _guard = Guard(prev);

    f()
}
