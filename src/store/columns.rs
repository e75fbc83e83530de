use crate::errors::{AppError, AppResult};
use crate::models::{EventRecord, EventSource};
use crate::utils::date;
use csv::StringRecord;

/// Canonical header written by the store.
pub const HEADER: [&str; 5] = ["title", "date", "address", "description", "source"];

/// Column positions resolved from a file header.
///
/// Files created by older releases spelled the address column `adress`;
/// both spellings resolve to the same field.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Columns {
    title: usize,
    date: usize,
    address: usize,
    description: usize,
    source: Option<usize>,
}

impl Columns {
    pub(crate) fn from_headers(headers: &StringRecord) -> AppResult<Self> {
        let find = |names: &[&str]| {
            headers
                .iter()
                .position(|h| names.contains(&h.trim().to_lowercase().as_str()))
        };

        let required = |names: &[&str]| {
            find(names).ok_or_else(|| {
                AppError::InvalidHeader(format!(
                    "missing column '{}' (found: {})",
                    names[0],
                    headers.iter().collect::<Vec<_>>().join(",")
                ))
            })
        };

        Ok(Self {
            title: required(&["title"])?,
            date: required(&["date"])?,
            address: required(&["address", "adress"])?,
            description: required(&["description"])?,
            source: find(&["source"]),
        })
    }

    pub(crate) fn has_source(&self) -> bool {
        self.source.is_some()
    }

    /// Turn one CSV row into a record, or explain why it cannot be one.
    pub(crate) fn parse_row(&self, row: &StringRecord) -> Result<EventRecord, String> {
        let field = |idx: usize, name: &str| -> Result<String, String> {
            match row.get(idx) {
                Some(v) if !v.trim().is_empty() => Ok(v.to_string()),
                Some(_) => Err(format!("empty field '{name}'")),
                None => Err(format!("missing field '{name}'")),
            }
        };

        let title = field(self.title, "title")?;
        let raw_date = field(self.date, "date")?;
        let address = field(self.address, "address")?;
        let description = field(self.description, "description")?;

        let date = date::parse_date(&raw_date)
            .ok_or_else(|| format!("invalid date '{raw_date}' (expected YYYY-MM-DD)"))?;

        let source = match self.source.and_then(|idx| row.get(idx)) {
            None => EventSource::Official,
            Some(raw) => EventSource::from_csv_str(raw)
                .ok_or_else(|| format!("unknown source '{raw}'"))?,
        };

        Ok(EventRecord {
            title,
            date,
            address,
            description,
            source,
        })
    }
}
