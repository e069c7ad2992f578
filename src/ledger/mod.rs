//! Ledger domain model and the file-backed store.

pub mod entry;
pub mod store;

pub use entry::{Entry, DATE_FORMAT};
pub use store::{LedgerStore, CURRENCY_SYMBOL, DEFAULT_LEDGER_FILE};
