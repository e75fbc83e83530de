use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::EventStore;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the events file with its header row
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.events_file.as_deref(), cli.test)?;

    info("Initializing FLINTA Space…");
    if !cli.test {
        info(format!("Config file : {}", Config::config_file().display()));
    }
    info(format!("Events file : {}", cfg.events_path().display()));

    let store = EventStore::open(cfg.events_path());
    if store.ensure_exists()? {
        success(format!("Events file created at {}", store.path().display()));
    } else {
        info("Events file already present, left untouched.");
    }

    success("Initialization completed!");
    Ok(())
}
