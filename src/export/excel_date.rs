// src/export/excel_date.rs

use chrono::NaiveDate;

/// Number format applied to date cells.
pub(crate) const DATE_NUM_FORMAT: &str = "yyyy-mm-dd";

/// Interpret a `YYYY-MM-DD` string as an Excel serial day number.
pub(crate) fn parse_to_excel_date(s: &str) -> Option<f64> {
    let d = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?;
    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    Some((d - excel_epoch).num_days() as f64)
}
