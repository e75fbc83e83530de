use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::render::RenderLogic;
use crate::errors::AppResult;
use crate::store::EventStore;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Render { file, page, force } = cmd {
        let out = match file {
            Some(f) => expand_tilde(f),
            None => cfg.carousel_path(),
        };

        let store = EventStore::open(cfg.events_path());
        let bytes = RenderLogic::write(&store, &cfg.carousel_options(), &out, *page, *force)?;

        success(format!("Carousel written to {} ({bytes} bytes)", out.display()));
    }
    Ok(())
}
