use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::query::EventFilter;
use crate::errors::AppResult;
use crate::store::EventStore;
use crate::ui::messages::{header, info, warning};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period, source } = cmd {
        let filter = EventFilter::from_args(period.as_deref(), *source)?;
        let store = EventStore::open(cfg.events_path());
        let report = store.load_report()?;

        for row in &report.malformed {
            warning(format!(
                "Skipping malformed row at line {}: {}",
                row.line, row.reason
            ));
        }

        if !report.had_source_column {
            info("No 'source' column in the events file: all events are treated as official.");
        }

        let mut table = Table::new(vec![
            Column::new("#", 5),
            Column::new("DATE", 10),
            Column::new("SOURCE", 8),
            Column::new("TITLE", 32),
            Column::new("ADDRESS", 40),
        ]);

        for (row, ev) in filter.select(&report.events) {
            table.add_row(vec![
                row.to_string(),
                ev.date_str(),
                ev.source.to_string(),
                ev.title.clone(),
                ev.address.clone(),
            ]);
        }

        if table.rows.is_empty() {
            info("No events found.");
            return Ok(());
        }

        header(format!("Events ({})", table.rows.len()));
        print!("{}", table.render());
    }
    Ok(())
}
