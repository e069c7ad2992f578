#![doc(test(attr(deny(warnings))))]

//! Ledger Core records deposits and withdrawals in a flat CSV-backed ledger
//! and reports running balances for the `ledger_cli` command-line tool.

pub mod cli;
pub mod errors;
pub mod ledger;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Ledger Core tracing initialized.");
    });
}
