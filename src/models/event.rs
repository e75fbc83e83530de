use super::source::EventSource;
use chrono::NaiveDate;

/// One row of the backing file.
///
/// Identity is the row position; duplicate titles and dates are allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    pub title: String,
    pub date: NaiveDate, // ⇔ events.csv `date` ("YYYY-MM-DD")
    pub address: String,
    pub description: String,
    pub source: EventSource, // ⇔ events.csv `source`, backfilled with "official"
}

impl EventRecord {
    pub fn new(
        title: impl Into<String>,
        date: NaiveDate,
        address: impl Into<String>,
        description: impl Into<String>,
        source: EventSource,
    ) -> Self {
        Self {
            title: title.into(),
            date,
            address: address.into(),
            description: description.into(),
            source,
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Fields in backing-file column order.
    pub fn to_csv_row(&self) -> [String; 5] {
        [
            self.title.clone(),
            self.date_str(),
            self.address.clone(),
            self.description.clone(),
            self.source.as_str().to_string(),
        ]
    }
}
