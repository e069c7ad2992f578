use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date layout used both on disk and in table views.
pub const DATE_FORMAT: &str = "%d-%m-%y";

/// A single ledger row. Exactly one of `deposit` / `withdrawal` is expected
/// to be nonzero, though nothing enforces that at creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(with = "ledger_date")]
    pub date: NaiveDate,
    pub description: String,
    pub deposit: f64,
    pub withdrawal: f64,
    pub category: String,
}

impl Entry {
    pub fn deposit(
        date: NaiveDate,
        amount: f64,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            date,
            description: description.into(),
            deposit: amount,
            withdrawal: 0.0,
            category: category.into(),
        }
    }

    pub fn withdrawal(
        date: NaiveDate,
        amount: f64,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            date,
            description: description.into(),
            deposit: 0.0,
            withdrawal: amount,
            category: category.into(),
        }
    }

    /// The entry's date rendered in the on-disk `DD-MM-YY` layout.
    pub fn date_label(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

mod ledger_date {
    use chrono::NaiveDate;
    use serde::{self, Deserialize, Deserializer, Serializer};

    use super::DATE_FORMAT;

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(DATE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&raw, DATE_FORMAT).map_err(serde::de::Error::custom)
    }
}
