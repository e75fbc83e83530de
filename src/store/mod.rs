//! CSV-backed event store.
//!
//! The backing file is the only persistence layer. Every append reads the
//! whole file, adds one record and rewrites it through a temporary sibling
//! that is renamed into place. There is no locking: two processes appending
//! at the same time can lose one of the two updates.

mod columns;

pub use columns::HEADER;

use crate::errors::AppResult;
use crate::models::EventRecord;
use crate::utils::fs_utils::ensure_parent_dir;
use crate::utils::path::with_suffix;
use columns::Columns;
use csv::{ByteRecord, StringRecord};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// A row that could not be turned into an [`EventRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedRow {
    /// 1-based line number in the backing file (header is line 1).
    pub line: u64,
    pub reason: String,
    pub raw: Vec<String>,
}

/// Outcome of a full read of the backing file.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub events: Vec<EventRecord>,
    pub malformed: Vec<MalformedRow>,
    /// `false` when the file had no `source` column and every record was
    /// backfilled with `official`.
    pub had_source_column: bool,
}

pub struct EventStore {
    path: PathBuf,
}

impl EventStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sidecar file collecting rows dropped from the backing file.
    pub fn rejected_path(&self) -> PathBuf {
        with_suffix(&self.path, ".rejected.csv")
    }

    /// Create the backing file with only the header row if it does not exist.
    ///
    /// Returns `true` when the file was created.
    pub fn ensure_exists(&self) -> AppResult<bool> {
        if self.path.exists() {
            return Ok(false);
        }

        ensure_parent_dir(&self.path)?;

        let mut wtr = csv::Writer::from_path(&self.path)?;
        wtr.write_record(HEADER)?;
        wtr.flush()?;

        debug!(path = %self.path.display(), "created empty events file");
        Ok(true)
    }

    /// All valid records in file order (oldest first).
    pub fn load(&self) -> AppResult<Vec<EventRecord>> {
        Ok(self.load_report()?.events)
    }

    /// Read the backing file, keeping track of rows that were skipped.
    pub fn load_report(&self) -> AppResult<LoadReport> {
        self.ensure_exists()?;

        // zero-byte file: nothing written yet, not even a header
        if fs::metadata(&self.path)?.len() == 0 {
            return Ok(LoadReport {
                had_source_column: true,
                ..LoadReport::default()
            });
        }

        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(&self.path)?;

        let columns = Columns::from_headers(rdr.headers()?)?;
        let mut report = LoadReport {
            had_source_column: columns.has_source(),
            ..LoadReport::default()
        };

        for row in rdr.byte_records() {
            let row = row?;
            let line = row.position().map(|p| p.line()).unwrap_or(0);

            let parsed = match StringRecord::from_byte_record(row) {
                Ok(row) => columns
                    .parse_row(&row)
                    .map_err(|reason| (reason, lossy(row.as_byte_record()))),
                Err(err) => Err((
                    "invalid UTF-8".to_string(),
                    lossy(&err.into_byte_record()),
                )),
            };

            match parsed {
                Ok(ev) => report.events.push(ev),
                Err((reason, raw)) => {
                    warn!(line, %reason, "skipping malformed event row");
                    report.malformed.push(MalformedRow { line, reason, raw });
                }
            }
        }

        debug!(
            path = %self.path.display(),
            events = report.events.len(),
            malformed = report.malformed.len(),
            "loaded events"
        );

        Ok(report)
    }

    /// Append one record and rewrite the whole file.
    ///
    /// Returns the new number of records in the store.
    pub fn append(&self, record: EventRecord) -> AppResult<usize> {
        let report = self.load_report()?;

        let mut events = report.events;
        events.push(record);
        self.write_all(&events)?;

        // sidecar is written only once the rewrite has landed
        if !report.malformed.is_empty() {
            self.quarantine(&report.malformed)?;
        }

        Ok(events.len())
    }

    /// Replace the file content with `events`, header first.
    fn write_all(&self, events: &[EventRecord]) -> AppResult<()> {
        let tmp = with_suffix(&self.path, ".tmp");

        let written = Self::write_rows(&tmp, events).and_then(|()| {
            fs::rename(&tmp, &self.path)?;
            Ok(())
        });
        if let Err(e) = written {
            fs::remove_file(&tmp).ok();
            return Err(e);
        }
        debug!(path = %self.path.display(), rows = events.len(), "rewrote events file");
        Ok(())
    }

    fn write_rows(path: &Path, events: &[EventRecord]) -> AppResult<()> {
        let mut wtr = csv::Writer::from_path(path)?;
        wtr.write_record(HEADER)?;
        for ev in events {
            wtr.write_record(ev.to_csv_row())?;
        }
        wtr.flush()?;
        Ok(())
    }

    /// Copy rows dropped from the backing file by a rewrite to the rejected
    /// sidecar, field for field as they were read.
    fn quarantine(&self, rows: &[MalformedRow]) -> AppResult<()> {
        let path = self.rejected_path();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        let mut wtr = csv::WriterBuilder::new()
            .flexible(true)
            .from_writer(file);

        for row in rows {
            wtr.write_record(&row.raw)?;
        }
        wtr.flush()?;

        warn!(
            count = rows.len(),
            path = %path.display(),
            "quarantined malformed event rows"
        );
        Ok(())
    }
}

/// Fields of a row that failed to load, with invalid UTF-8 replaced.
fn lossy(row: &ByteRecord) -> Vec<String> {
    row.iter()
        .map(|f| String::from_utf8_lossy(f).into_owned())
        .collect()
}
