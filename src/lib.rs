#![doc(test(attr(deny(warnings))))]

//! Spendguard turns categorized transactions, budget definitions, and plan
//! quota counters into derived usage views: spent amounts, percentages,
//! lifecycle statuses, remaining-time figures, and a ranked alert feed.
//!
//! The engine is pure: every evaluation takes its inputs (including `now`)
//! as immutable snapshots and returns freshly constructed values. Callers
//! own persistence, notification delivery, and dismissal state.

pub mod core;
pub mod domain;
pub mod errors;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Spendguard tracing initialized.");
    });
}
