//! Colored terminal rendering for coursecal types.

use coursecal_core::{Diagnostic, EnrollmentStatus, SkipReason};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for EnrollmentStatus {
    fn render(&self) -> String {
        match self {
            EnrollmentStatus::Enrolled => self.as_str().green().to_string(),
            EnrollmentStatus::Waitlisted => self.as_str().yellow().to_string(),
            EnrollmentStatus::Unknown => self.as_str().dimmed().to_string(),
        }
    }
}

impl Render for SkipReason {
    fn render(&self) -> String {
        match self {
            SkipReason::Online | SkipReason::Unscheduled => self.to_string().yellow().to_string(),
            SkipReason::Invalid(_) => self.to_string().red().to_string(),
        }
    }
}

impl Render for Diagnostic {
    fn render(&self) -> String {
        let title = self.title.as_deref().unwrap_or("(untitled)");
        let mut line = format!(
            "  {} {} {}",
            "-".yellow(),
            title,
            format!("(record {}, {})", self.index + 1, self.reason.render()).dimmed()
        );

        if let Some(preview) = &self.preview {
            let rules = preview.recurrence.join(" ");
            line.push_str(&format!(
                "\n      {}",
                format!(
                    "would start {} {}",
                    preview.start.date_time.format("%Y-%m-%d %H:%M"),
                    rules
                )
                .dimmed()
            ));
        }

        if let Some(error) = &self.preview_error {
            line.push_str(&format!("\n      {}", format!("no preview: {}", error).red()));
        }

        line
    }
}
