//! Batch export of course records.
//!
//! Both outputs run every record through the same classification: records
//! that extract cleanly, have a room, and have an announced schedule become
//! events; everything else becomes a [`Diagnostic`]. One bad record never
//! stops the batch.

use std::fmt;

use chrono::{DateTime, Utc};
use log::{info, warn};

use crate::config::ExportSettings;
use crate::course::{Course, normalize_title};
use crate::event::{CalendarEvent, Meeting};
use crate::ics::{PACIFIC_TZID, assemble, generate_vevent};
use crate::source::{Field, FieldReader};

/// Why a record produced no event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// No room: the course is fully online.
    Online,
    /// Days and times are still to be announced.
    Unscheduled,
    /// The record broke the schedule's format contract.
    Invalid(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Online => f.write_str("online course"),
            SkipReason::Unscheduled => f.write_str("days and times to be announced"),
            SkipReason::Invalid(message) => write!(f, "invalid record: {}", message),
        }
    }
}

/// A record left out of the primary output.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// Position of the record in the input.
    pub index: usize,
    pub title: Option<String>,
    pub reason: SkipReason,
    /// What the event would have looked like, when it could be built.
    pub preview: Option<CalendarEvent>,
    /// Why the preview could not be built.
    pub preview_error: Option<String>,
}

impl Diagnostic {
    fn new(index: usize, title: Option<String>, reason: SkipReason) -> Self {
        Diagnostic {
            index,
            title,
            reason,
            preview: None,
            preview_error: None,
        }
    }
}

/// Result of an .ics export.
#[derive(Debug, Clone)]
pub struct IcsExport {
    pub document: String,
    /// Titles of the courses written as events, in input order.
    pub exported: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Result of a generic-event export.
#[derive(Debug, Clone)]
pub struct EventExport {
    pub events: Vec<CalendarEvent>,
    pub diagnostics: Vec<Diagnostic>,
}

enum Planned {
    Ready(Course, Meeting),
    Skipped(Diagnostic),
}

fn plan<R: FieldReader>(index: usize, record: &R, settings: &ExportSettings) -> Planned {
    let course = match Course::extract(record, &settings.date_format) {
        Ok(course) => course,
        Err(e) => {
            let title = record.read(Field::Title).map(normalize_title);
            return Planned::Skipped(Diagnostic::new(index, title, SkipReason::Invalid(e.to_string())));
        }
    };
    let title = Some(course.title().to_string());

    let meeting = Meeting::for_course(&course, settings.timezone);

    if course.is_online() {
        let mut diagnostic = Diagnostic::new(index, title, SkipReason::Online);
        match &meeting {
            Ok(Some(meeting)) => {
                diagnostic.preview = Some(CalendarEvent::new(&course, meeting, &settings.reminders));
            }
            Ok(None) => {}
            Err(e) => {
                warn!("No preview for online course '{}': {}", course.title(), e);
                diagnostic.preview_error = Some(e.to_string());
            }
        }
        return Planned::Skipped(diagnostic);
    }

    match meeting {
        Ok(Some(meeting)) => Planned::Ready(course, meeting),
        Ok(None) => Planned::Skipped(Diagnostic::new(index, title, SkipReason::Unscheduled)),
        Err(e) => Planned::Skipped(Diagnostic::new(index, title, SkipReason::Invalid(e.to_string()))),
    }
}

fn report(diagnostic: &Diagnostic) {
    info!(
        "Skipping record {} ({}): {}",
        diagnostic.index,
        diagnostic.title.as_deref().unwrap_or("untitled"),
        diagnostic.reason
    );
}

/// Build one .ics document from `records`.
///
/// `created` becomes every event's CREATED stamp; nothing else in the
/// document depends on when it was generated.
pub fn export_ics<I, R>(records: I, settings: &ExportSettings, created: DateTime<Utc>) -> IcsExport
where
    I: IntoIterator<Item = R>,
    R: FieldReader,
{
    if settings.embed_timezone && settings.timezone.name() != PACIFIC_TZID {
        warn!(
            "Embedded VTIMEZONE describes {} rules, not {}",
            PACIFIC_TZID,
            settings.timezone.name()
        );
    }

    let mut events = Vec::new();
    let mut exported = Vec::new();
    let mut diagnostics = Vec::new();

    for (index, record) in records.into_iter().enumerate() {
        match plan(index, &record, settings) {
            Planned::Ready(course, meeting) => {
                events.push(generate_vevent(&course, &meeting, created));
                exported.push(course.title().to_string());
            }
            Planned::Skipped(diagnostic) => {
                report(&diagnostic);
                diagnostics.push(diagnostic);
            }
        }
    }

    info!(
        "Exported {} courses to .ics, skipped {}",
        exported.len(),
        diagnostics.len()
    );

    let timezone = settings.embed_timezone.then_some(settings.timezone);
    let document = assemble(events, &settings.calendar_name, timezone);

    IcsExport {
        document,
        exported,
        diagnostics,
    }
}

/// Build provider-neutral events from `records`.
pub fn export_events<I, R>(records: I, settings: &ExportSettings) -> EventExport
where
    I: IntoIterator<Item = R>,
    R: FieldReader,
{
    let mut events = Vec::new();
    let mut diagnostics = Vec::new();

    for (index, record) in records.into_iter().enumerate() {
        match plan(index, &record, settings) {
            Planned::Ready(course, meeting) => {
                events.push(CalendarEvent::new(&course, &meeting, &settings.reminders));
            }
            Planned::Skipped(diagnostic) => {
                report(&diagnostic);
                diagnostics.push(diagnostic);
            }
        }
    }

    info!("Built {} events, skipped {}", events.len(), diagnostics.len());

    EventExport {
        events,
        diagnostics,
    }
}
