use crate::errors::AppResult;
use crate::models::{EventRecord, EventSource, EventSubmission};
use crate::store::EventStore;
use tracing::info;

pub struct AddLogic;

impl AddLogic {
    /// Validate a submission and append it to the store.
    ///
    /// Nothing is written unless every field passes validation.
    pub fn apply(
        store: &EventStore,
        submission: &EventSubmission,
        source: EventSource,
    ) -> AppResult<(EventRecord, usize)> {
        let record = submission.validate(source)?;
        let count = store.append(record.clone())?;

        info!(
            title = %record.title,
            date = %record.date_str(),
            source = %record.source,
            count,
            "event appended"
        );

        Ok((record, count))
    }
}
