use anyhow::Result;
use coursecal_core::{ExportSettings, RawCourse, export_events};

use super::print_diagnostics;

pub fn run(records: &[RawCourse], settings: &ExportSettings) -> Result<()> {
    let export = export_events(records, settings);

    println!("{}", serde_json::to_string_pretty(&export.events)?);
    print_diagnostics(&export.diagnostics);

    Ok(())
}
