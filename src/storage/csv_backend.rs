use std::{
    fs,
    path::{Path, PathBuf},
};

use csv::{Reader, WriterBuilder};

use crate::ledger::Entry;

use super::Result;

/// Column order of the persisted table.
pub const HEADERS: [&str; 5] = ["date", "description", "deposit", "withdrawal", "category"];

const TMP_SUFFIX: &str = "tmp";

/// Writes the full entry table to disk atomically by staging to a temporary
/// file. An empty table still gets its header row.
pub fn save_entries_to_path(entries: &[Entry], path: &Path) -> Result<()> {
    let tmp = tmp_path(path);
    write_table(entries, &tmp)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

/// Loads the entry table, returning structured errors on malformed rows.
pub fn load_entries_from_path(path: &Path) -> Result<Vec<Entry>> {
    let mut reader = Reader::from_path(path)?;
    let mut entries = Vec::new();
    for record in reader.deserialize() {
        entries.push(record?);
    }
    Ok(entries)
}

fn write_table(entries: &[Entry], path: &Path) -> Result<()> {
    let mut writer = WriterBuilder::new().has_headers(false).from_path(path)?;
    writer.write_record(HEADERS)?;
    for entry in entries {
        writer.serialize(entry)?;
    }
    writer.flush()?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{existing}.{TMP_SUFFIX}"),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use tempfile::tempdir;

    use crate::ledger::Entry;

    use super::{load_entries_from_path, save_entries_to_path};

    #[test]
    fn empty_table_round_trips_with_header_row() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ledger.csv");
        save_entries_to_path(&[], &path).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            raw.trim_end(),
            "date,description,deposit,withdrawal,category"
        );
        assert!(load_entries_from_path(&path).unwrap().is_empty());
    }

    #[test]
    fn rows_survive_a_save_and_load_cycle() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ledger.csv");
        let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        let entries = vec![
            Entry::deposit(date, 100.0, "salary", "Income"),
            Entry::withdrawal(date, 29.99, "books, used", "Expense"),
        ];

        save_entries_to_path(&entries, &path).unwrap();
        let loaded = load_entries_from_path(&path).unwrap();
        assert_eq!(loaded, entries);
    }
}
