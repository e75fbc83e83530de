use super::{event::EventRecord, source::EventSource};
use crate::errors::{AppError, AppResult};
use crate::utils::date;

/// Raw values of the "Add Your Event" form.
///
/// Every field is optional here so that all missing fields can be
/// reported at once instead of failing on the first one.
#[derive(Debug, Clone, Default)]
pub struct EventSubmission {
    pub title: Option<String>,
    pub date: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
}

impl EventSubmission {
    /// Validate the form and build the record to append.
    ///
    /// - blank or absent fields → `AppError::MissingFields` (form order)
    /// - unparsable date → `AppError::InvalidDate`
    pub fn validate(&self, source: EventSource) -> AppResult<EventRecord> {
        let fields = [
            ("title", &self.title),
            ("date", &self.date),
            ("address", &self.address),
            ("description", &self.description),
        ];

        let missing: Vec<&'static str> = fields
            .iter()
            .filter(|(_, v)| filled(v).is_none())
            .map(|(name, _)| *name)
            .collect();

        if !missing.is_empty() {
            return Err(AppError::MissingFields(missing));
        }

        // all four are present past this point
        let raw_date = filled(&self.date).unwrap_or_default();
        let d = date::parse_date(raw_date)
            .ok_or_else(|| AppError::InvalidDate(raw_date.to_string()))?;

        Ok(EventRecord::new(
            filled(&self.title).unwrap_or_default(),
            d,
            filled(&self.address).unwrap_or_default(),
            filled(&self.description).unwrap_or_default(),
            source,
        ))
    }
}

fn filled(v: &Option<String>) -> Option<&str> {
    v.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
