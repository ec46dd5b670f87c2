//! Process-wide display configuration.
//!
//! One flag lives here: whether `Display` output for an Index includes a
//! short form of its identity. It affects rendering only, never data or
//! comparison semantics. (The legacy serialization width is deliberately
//! *not* a global: it is passed explicitly to the codec.)

use std::sync::atomic::{AtomicBool, Ordering};

static SHOW_IDS: AtomicBool = AtomicBool::new(false);

/// Enable or disable identity display in Index rendering.
pub fn set_show_ids(show: bool) {
    SHOW_IDS.store(show, Ordering::Relaxed);
}

/// Whether Index rendering currently includes identities.
pub fn show_ids() -> bool {
    SHOW_IDS.load(Ordering::Relaxed)
}
