// src/export/model.rs

use crate::models::EventRecord;
use serde::Serialize;

/// Flat row used by every export format.
#[derive(Serialize, Clone, Debug)]
pub struct EventExport {
    pub row: usize,
    pub title: String,
    pub date: String,
    pub address: String,
    pub description: String,
    pub source: String,
}

impl EventExport {
    /// `row` is the 1-based position in the backing file.
    pub fn from_record(row: usize, ev: &EventRecord) -> Self {
        Self {
            row,
            title: ev.title.clone(),
            date: ev.date_str(),
            address: ev.address.clone(),
            description: ev.description.clone(),
            source: ev.source.as_str().to_string(),
        }
    }
}

/// Header per CSV / JSON / XLSX
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec!["row", "title", "date", "address", "description", "source"]
}

pub(crate) fn event_to_row(e: &EventExport) -> Vec<String> {
    vec![
        e.row.to_string(),
        e.title.clone(),
        e.date.clone(),
        e.address.clone(),
        e.description.clone(),
        e.source.clone(),
    ]
}
