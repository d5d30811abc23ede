use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use coursecal_core::RawCourse;
use log::debug;

/// Read course records from a JSON file, or stdin when `path` is "-".
pub fn read_records(path: &Path) -> Result<Vec<RawCourse>> {
    let records = if path == Path::new("-") {
        let mut json = String::new();
        std::io::stdin()
            .read_to_string(&mut json)
            .context("Could not read course records from stdin")?;
        RawCourse::from_json(&json).context("stdin is not a JSON array of course records")?
    } else {
        RawCourse::load(path)
            .with_context(|| format!("Could not load course records from {}", path.display()))?
    };

    debug!("Read {} course records", records.len());
    Ok(records)
}
