use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::query::EventFilter;
use crate::export::ExportLogic;
use crate::errors::AppResult;
use crate::store::EventStore;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        source,
        force,
    } = cmd
    {
        let filter = EventFilter::from_args(range.as_deref(), *source)?;
        let store = EventStore::open(cfg.events_path());
        ExportLogic::export(&store, *format, file, &filter, *force)?;
    }
    Ok(())
}
