//! `dialpick list` — the full picker pipeline behind one command.

use tabled::Tabled;

use dialpick_core::{RegionRecord, SelectorManager};

use crate::catalog::CatalogSource;
use crate::cli::{GlobalOpts, ListArgs};
use crate::error::CliError;
use crate::output;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct RegionRow {
    #[tabled(rename = "Code")]
    code: String,
    #[tabled(rename = "Dial")]
    dial_code: String,
    #[tabled(rename = "Name")]
    name: String,
}

impl From<&RegionRecord> for RegionRow {
    fn from(r: &RegionRecord) -> Self {
        Self {
            code: r.code.clone(),
            dial_code: r.dial_code.clone(),
            name: r.name.clone(),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(args: &ListArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let source = CatalogSource::from_path(global.catalog.clone());
    let mut manager = SelectorManager::new(source);
    manager.load_data().await?;

    if !args.restrict.is_empty() {
        manager.restrict_regions(args.restrict.clone());
    }
    if !args.pin.is_empty() {
        manager.pin_regions(args.pin.clone());
    }
    if let Some(field) = args.sort {
        // Rebuilds from the canonical list and replays the commands above.
        manager.sort(field.into());
    }

    let out = output::render_list(
        &global.output,
        manager.regions(),
        |r| RegionRow::from(r),
        |r| r.code.clone(),
    );
    output::print_output(&out, global.quiet);
    Ok(())
}
