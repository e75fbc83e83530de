pub mod event;
pub mod source;
pub mod submission;

pub use event::EventRecord;
pub use source::EventSource;
pub use submission::EventSubmission;
