// src/export/logic.rs

use crate::core::query::EventFilter;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::EventExport;
use crate::export::xlsx::export_xlsx;
use crate::store::EventStore;
use crate::ui::messages::warning;
use crate::utils::fs_utils::ensure_writable;
use std::path::Path;
use tracing::debug;

/// High-level export of the event list.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the events matching `filter`.
    ///
    /// - `file`: absolute path of the output file
    /// - `force`: overwrite an existing file without asking
    ///
    /// Returns the number of exported rows (0 → nothing written).
    pub fn export(
        store: &EventStore,
        format: ExportFormat,
        file: &str,
        filter: &EventFilter,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        let events = store.load()?;
        let rows: Vec<EventExport> = filter
            .select(&events)
            .map(|(row, ev)| EventExport::from_record(row, ev))
            .collect();

        if rows.is_empty() {
            warning("No events found for the selected range.");
            return Ok(0);
        }

        ensure_writable(path, force)?;

        debug!(format = format.as_str(), rows = rows.len(), "exporting events");

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
            ExportFormat::Xlsx => export_xlsx(&rows, path)?,
        }

        Ok(rows.len())
    }
}
