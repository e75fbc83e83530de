use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::errors::AppResult;
use crate::models::{EventSource, EventSubmission};
use crate::store::EventStore;
use crate::ui::messages::success;

/// Submit a new event.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        title,
        date,
        address,
        description,
        official,
    } = cmd
    {
        let submission = EventSubmission {
            title: title.clone(),
            date: date.clone(),
            address: address.clone(),
            description: description.clone(),
        };

        let source = if *official {
            EventSource::Official
        } else {
            EventSource::User
        };

        let store = EventStore::open(cfg.events_path());
        let (record, count) = AddLogic::apply(&store, &submission, source)?;

        success(format!(
            "Your event '{}' has been successfully added! ({} events in total)",
            record.title, count
        ));
    }

    Ok(())
}
