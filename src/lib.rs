#![doc(test(attr(deny(warnings))))]

//! Cashflow Core expands recurring transaction definitions into dated
//! instances and rolls account balances forward over a finite horizon,
//! producing the day-by-day projection and "available to spend" figure
//! behind dashboards, low-balance alerts, and what-if views.
//!
//! The crate owns no I/O: callers supply account and transaction
//! snapshots (however sourced) plus an explicit `today`, and get back
//! projection series. Every entry point is deterministic for identical
//! inputs.

pub mod errors;
pub mod ledger;
pub mod projection;
pub mod simulation;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Cashflow Core tracing initialized.");
    });
}
