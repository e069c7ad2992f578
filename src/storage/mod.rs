pub mod csv_backend;

use crate::errors::LedgerError;

pub type Result<T> = std::result::Result<T, LedgerError>;

pub use csv_backend::{load_entries_from_path, save_entries_to_path, HEADERS};
