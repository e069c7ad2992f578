use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::debug;

use crate::{errors::LedgerError, storage::csv_backend};

use super::entry::Entry;

/// Legacy fixed storage name, resolved against the working directory.
pub const DEFAULT_LEDGER_FILE: &str = "ledger.csv";

/// Currency symbol prefixed to every amount in textual reports.
pub const CURRENCY_SYMBOL: &str = "$";

/// How many entries the non-verbose table view shows.
const RECENT_WINDOW: usize = 5;

/// File-backed in-memory ledger. Every mutation is flushed to storage before
/// it returns, so no uncommitted state is ever observable.
///
/// Entries are addressed by their current 0-based position. Positions are not
/// stable identifiers: deleting an entry shifts every later position down.
pub struct LedgerStore {
    path: PathBuf,
    entries: Vec<Entry>,
}

impl LedgerStore {
    /// Opens the ledger at `path`. When the file does not exist yet, a
    /// header-only table is written immediately so a fresh environment always
    /// has a valid, readable storage file.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, LedgerError> {
        let path = path.into();
        let entries = if path.exists() {
            csv_backend::load_entries_from_path(&path)?
        } else {
            csv_backend::save_entries_to_path(&[], &path)?;
            Vec::new()
        };
        Ok(Self { path, entries })
    }

    /// Opens `ledger.csv` in the current working directory.
    pub fn open_default() -> Result<Self, LedgerError> {
        Self::open(DEFAULT_LEDGER_FILE)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends an income entry dated today and persists the table.
    pub fn deposit(
        &mut self,
        amount: f64,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<(), LedgerError> {
        let entry = Entry::deposit(Local::now().date_naive(), amount, description, category);
        debug!(amount, category = %entry.category, "recording deposit");
        self.entries.push(entry);
        self.persist()
    }

    /// Appends an expense entry dated today and persists the table.
    pub fn withdraw(
        &mut self,
        amount: f64,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<(), LedgerError> {
        let entry = Entry::withdrawal(Local::now().date_naive(), amount, description, category);
        debug!(amount, category = %entry.category, "recording withdrawal");
        self.entries.push(entry);
        self.persist()
    }

    /// Returns the entry at `position`, or `NoSuchEntry` when out of range.
    pub fn select_entry(&self, position: usize) -> Result<&Entry, LedgerError> {
        self.entries
            .get(position)
            .ok_or(LedgerError::NoSuchEntry(position))
    }

    /// Rewrites the entry at `position`. A silent no-op on an empty ledger.
    ///
    /// The amount overwrites whichever numeric side the existing entry uses;
    /// an entry carrying zero on both sides keeps both numeric fields
    /// untouched. Description and category are always overwritten.
    pub fn edit_entry(
        &mut self,
        position: usize,
        amount: f64,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<(), LedgerError> {
        if self.entries.is_empty() {
            return Ok(());
        }
        let entry = self
            .entries
            .get_mut(position)
            .ok_or(LedgerError::NoSuchEntry(position))?;
        if entry.deposit == 0.0 {
            if entry.withdrawal != 0.0 {
                entry.withdrawal = amount;
            }
        } else if entry.withdrawal == 0.0 {
            entry.deposit = amount;
        }
        entry.description = description.into();
        entry.category = category.into();
        debug!(position, "edited entry");
        self.persist()
    }

    /// Removes the entry at `position`; later positions shift down by one.
    /// A silent no-op on an empty ledger.
    pub fn delete_entry(&mut self, position: usize) -> Result<(), LedgerError> {
        if self.entries.is_empty() {
            return Ok(());
        }
        if position >= self.entries.len() {
            return Err(LedgerError::NoSuchEntry(position));
        }
        self.entries.remove(position);
        debug!(position, "deleted entry");
        self.persist()
    }

    pub fn total_income(&self) -> f64 {
        // Fold from positive zero: `Iterator::sum` for floats starts at -0.0,
        // which would render an empty ledger's total as "-0.00".
        self.entries.iter().fold(0.0, |acc, entry| acc + entry.deposit)
    }

    pub fn total_expense(&self) -> f64 {
        self.entries
            .iter()
            .fold(0.0, |acc, entry| acc + entry.withdrawal)
    }

    pub fn balance(&self) -> f64 {
        self.total_income() - self.total_expense()
    }

    /// Three-line balance report, amounts prefixed with the currency symbol.
    pub fn summary_text(&self) -> String {
        format!(
            "Balance: {sym}{balance:.2}\nTotal income: {sym}{income:.2}\nTotal expense: {sym}{expense:.2}",
            sym = CURRENCY_SYMBOL,
            balance = self.balance(),
            income = self.total_income(),
            expense = self.total_expense(),
        )
    }

    /// Read-only table view: the full ledger when `verbose`, otherwise the
    /// last five entries in original order. Callers recover original
    /// positions from `len() - view.len()`.
    pub fn display(&self, verbose: bool) -> &[Entry] {
        if verbose {
            &self.entries
        } else {
            &self.entries[self.entries.len().saturating_sub(RECENT_WINDOW)..]
        }
    }

    /// Serializes the whole table to the storage file, replacing it.
    pub fn persist(&self) -> Result<(), LedgerError> {
        csv_backend::save_entries_to_path(&self.entries, &self.path)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use crate::errors::LedgerError;

    use super::LedgerStore;

    fn temp_store(dir: &tempfile::TempDir) -> LedgerStore {
        LedgerStore::open(dir.path().join("ledger.csv")).unwrap()
    }

    #[test]
    fn balance_is_income_minus_expense() {
        let dir = tempdir().unwrap();
        let mut store = temp_store(&dir);
        store.deposit(100.0, "salary", "Income").unwrap();
        store.withdraw(30.0, "food", "Expense").unwrap();
        store.deposit(12.5, "refund", "Income").unwrap();

        assert_eq!(store.total_income(), 112.5);
        assert_eq!(store.total_expense(), 30.0);
        assert_eq!(store.balance(), store.total_income() - store.total_expense());
    }

    #[test]
    fn deposit_appends_with_zero_withdrawal() {
        let dir = tempdir().unwrap();
        let mut store = temp_store(&dir);
        store.deposit(42.0, "gift", "Income").unwrap();

        let last = store.select_entry(store.len() - 1).unwrap();
        assert_eq!(last.deposit, 42.0);
        assert_eq!(last.withdrawal, 0.0);
    }

    #[test]
    fn delete_shifts_later_positions_down() {
        let dir = tempdir().unwrap();
        let mut store = temp_store(&dir);
        store.deposit(1.0, "a", "Income").unwrap();
        store.deposit(2.0, "b", "Income").unwrap();
        store.deposit(3.0, "c", "Income").unwrap();

        store.delete_entry(1).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.select_entry(1).unwrap().description, "c");
    }

    #[test]
    fn edit_on_income_entry_leaves_withdrawal_zero() {
        let dir = tempdir().unwrap();
        let mut store = temp_store(&dir);
        store.deposit(100.0, "salary", "Income").unwrap();

        store.edit_entry(0, 250.0, "bonus", "Extra").unwrap();
        let entry = store.select_entry(0).unwrap();
        assert_eq!(entry.deposit, 250.0);
        assert_eq!(entry.withdrawal, 0.0);
        assert_eq!(entry.description, "bonus");
        assert_eq!(entry.category, "Extra");
    }

    #[test]
    fn edit_on_expense_entry_overwrites_withdrawal() {
        let dir = tempdir().unwrap();
        let mut store = temp_store(&dir);
        store.withdraw(30.0, "food", "Expense").unwrap();

        store.edit_entry(0, 45.0, "groceries", "Expense").unwrap();
        let entry = store.select_entry(0).unwrap();
        assert_eq!(entry.withdrawal, 45.0);
        assert_eq!(entry.deposit, 0.0);
    }

    #[test]
    fn edit_with_both_sides_zero_keeps_amounts_untouched() {
        let dir = tempdir().unwrap();
        let mut store = temp_store(&dir);
        store.deposit(0.0, "odd", "Income").unwrap();

        store.edit_entry(0, 99.0, "still odd", "Misc").unwrap();
        let entry = store.select_entry(0).unwrap();
        assert_eq!(entry.deposit, 0.0);
        assert_eq!(entry.withdrawal, 0.0);
        assert_eq!(entry.description, "still odd");
    }

    #[test]
    fn edit_and_delete_on_empty_ledger_are_soft_noops() {
        let dir = tempdir().unwrap();
        let mut store = temp_store(&dir);
        store.edit_entry(3, 1.0, "x", "y").unwrap();
        store.delete_entry(3).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn out_of_range_positions_report_no_such_entry() {
        let dir = tempdir().unwrap();
        let mut store = temp_store(&dir);
        store.deposit(1.0, "a", "Income").unwrap();

        assert!(matches!(
            store.select_entry(7),
            Err(LedgerError::NoSuchEntry(7))
        ));
        assert!(matches!(
            store.edit_entry(7, 2.0, "b", "c"),
            Err(LedgerError::NoSuchEntry(7))
        ));
        assert!(matches!(
            store.delete_entry(7),
            Err(LedgerError::NoSuchEntry(7))
        ));
    }

    #[test]
    fn display_tail_keeps_original_order() {
        let dir = tempdir().unwrap();
        let mut store = temp_store(&dir);
        for i in 0..7 {
            store.deposit(i as f64, format!("entry {i}"), "Income").unwrap();
        }

        let tail = store.display(false);
        assert_eq!(tail.len(), 5);
        assert_eq!(tail[0].description, "entry 2");
        assert_eq!(tail[4].description, "entry 6");
        assert_eq!(store.display(true).len(), 7);
    }

    #[test]
    fn display_on_short_ledger_returns_everything() {
        let dir = tempdir().unwrap();
        let mut store = temp_store(&dir);
        store.deposit(1.0, "a", "Income").unwrap();
        store.withdraw(2.0, "b", "Expense").unwrap();

        assert_eq!(store.display(false).len(), 2);
    }
}
