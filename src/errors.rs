use thiserror::Error;

/// Error type that captures common ledger failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("No such entry: {0}")]
    NoSuchEntry(usize),
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}
