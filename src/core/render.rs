use crate::carousel::{CarouselOptions, render_carousel, render_page};
use crate::errors::AppResult;
use crate::store::EventStore;
use crate::ui::messages::warning;
use crate::utils::fs_utils::{ensure_parent_dir, ensure_writable};
use std::fs;
use std::path::Path;

/// Title of the standalone preview page.
const PAGE_TITLE: &str = "Upcoming Events for FLINTA People";

pub struct RenderLogic;

impl RenderLogic {
    /// Build the carousel from the current store content.
    ///
    /// With `page` the fragment is wrapped in a full HTML document.
    pub fn build(store: &EventStore, opts: &CarouselOptions, page: bool) -> AppResult<String> {
        let report = store.load_report()?;

        for row in &report.malformed {
            warning(format!(
                "Skipping malformed row at line {}: {}",
                row.line, row.reason
            ));
        }

        let fragment = render_carousel(&report.events, opts);

        Ok(if page {
            render_page(&fragment, PAGE_TITLE)
        } else {
            fragment
        })
    }

    /// Build the carousel and write it to `out`. Returns the bytes written.
    pub fn write(
        store: &EventStore,
        opts: &CarouselOptions,
        out: &Path,
        page: bool,
        force: bool,
    ) -> AppResult<usize> {
        let html = Self::build(store, opts, page)?;

        ensure_writable(out, force)?;
        ensure_parent_dir(out)?;
        fs::write(out, &html)?;

        Ok(html.len())
    }
}
