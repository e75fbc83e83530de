use crate::errors::AppResult;
use crate::export::range::parse_period;
use crate::models::{EventRecord, EventSource};
use chrono::NaiveDate;

/// Selection shared by `list` and `export`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFilter {
    pub bounds: Option<(NaiveDate, NaiveDate)>,
    pub source: Option<EventSource>,
}

impl EventFilter {
    /// Build from the raw `--period`/`--range` and `--source` values.
    pub fn from_args(period: Option<&str>, source: Option<EventSource>) -> AppResult<Self> {
        Ok(Self {
            bounds: parse_period(period)?,
            source,
        })
    }

    pub fn matches(&self, ev: &EventRecord) -> bool {
        let in_range = self
            .bounds
            .is_none_or(|(start, end)| ev.date >= start && ev.date <= end);
        let same_source = self.source.is_none_or(|s| s == ev.source);
        in_range && same_source
    }

    /// Matching events with their 1-based row number, in file order.
    pub fn select<'a>(
        &'a self,
        events: &'a [EventRecord],
    ) -> impl Iterator<Item = (usize, &'a EventRecord)> + 'a {
        events
            .iter()
            .enumerate()
            .map(|(i, ev)| (i + 1, ev))
            .filter(move |(_, ev)| self.matches(ev))
    }
}
