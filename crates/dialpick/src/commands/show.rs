//! `dialpick show` — single-region lookup by country code.

use dialpick_core::{RegionDataLoader, RegionRecord};

use crate::catalog::CatalogSource;
use crate::cli::{GlobalOpts, ShowArgs};
use crate::error::CliError;
use crate::output;

fn detail(region: &RegionRecord) -> String {
    format!(
        "Name:      {}\nCode:      {}\nDial code: {}",
        region.name, region.code, region.dial_code
    )
}

pub async fn handle(args: &ShowArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let source = CatalogSource::from_path(global.catalog.clone());
    let regions = source.load().await?;

    let region = regions
        .iter()
        .find(|r| r.code.eq_ignore_ascii_case(&args.code))
        .ok_or_else(|| CliError::UnknownCode(args.code.clone()))?;

    let out = output::render_single(&global.output, region, detail, |r| r.code.clone());
    output::print_output(&out, global.quiet);
    Ok(())
}
