use std::cell::RefCell;

///
/// CodecCounters
/// Ephemeral, per-thread counters for codec activity.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CodecCounters {
    // Entities handled
    pub columns_encoded: u64,
    pub keys_encoded: u64,
    pub tables_encoded: u64,
    pub databases_encoded: u64,
    pub columns_decoded: u64,
    pub keys_decoded: u64,
    pub tables_decoded: u64,
    pub databases_decoded: u64,

    // Compatibility branches
    pub unknown_keys_skipped: u64,
    pub primary_key_type_backfills: u64,
    pub unrecognized_key_types: u64,

    pub decode_failures: u64,
}

thread_local! {
    static STATE: RefCell<CodecCounters> = RefCell::new(CodecCounters::default());
}

pub(crate) fn with_state_mut<R>(f: impl FnOnce(&mut CodecCounters) -> R) -> R {
    STATE.with(|s| f(&mut s.borrow_mut()))
}

pub(crate) fn snapshot() -> CodecCounters {
    STATE.with(|s| s.borrow().clone())
}

pub(crate) fn reset_all() {
    STATE.with(|s| *s.borrow_mut() = CodecCounters::default());
}

pub(crate) const fn bump(counter: &mut u64) {
    *counter = counter.saturating_add(1);
}
