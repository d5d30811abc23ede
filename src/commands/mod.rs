pub mod events;
pub mod export;
pub mod list;

use coursecal_core::Diagnostic;

use crate::render::Render;

/// Print skipped records to stderr so they never mix with document output.
pub fn print_diagnostics(diagnostics: &[Diagnostic]) {
    if diagnostics.is_empty() {
        return;
    }

    eprintln!();
    for diagnostic in diagnostics {
        eprintln!("{}", diagnostic.render());
    }
}
