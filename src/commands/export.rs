use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use coursecal_core::{ExportSettings, RawCourse, export_ics};
use owo_colors::OwoColorize;

use super::print_diagnostics;

pub fn run(records: &[RawCourse], settings: &ExportSettings, output: Option<&Path>) -> Result<()> {
    let export = export_ics(records, settings, Utc::now());

    match output {
        Some(path) => {
            std::fs::write(path, &export.document)
                .with_context(|| format!("Could not write {}", path.display()))?;
            eprintln!(
                "{}",
                format!(
                    "  Wrote {} {} to {}",
                    export.exported.len(),
                    pluralize("course", export.exported.len()),
                    path.display()
                )
                .green()
            );
        }
        None => print!("{}", export.document),
    }

    print_diagnostics(&export.diagnostics);

    Ok(())
}

fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}
