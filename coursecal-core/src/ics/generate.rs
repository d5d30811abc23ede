//! VEVENT generation for a course meeting.

use chrono::{DateTime, Utc};
use icalendar::{Component, EventLike};

use crate::constants::UID_NAMESPACE;
use crate::course::Course;
use crate::event::Meeting;
use crate::timestamp::format_utc_timestamp;

/// Stable UID for a course: its title with everything but letters and digits
/// removed, plus the coursecal namespace.
pub fn event_uid(title: &str) -> String {
    let base: String = title.chars().filter(|c| c.is_alphanumeric()).collect();
    format!("{}{}", base, UID_NAMESPACE)
}

/// Build the VEVENT for `course`.
///
/// Everything except CREATED is derived from the course, so the same course
/// always renders the same event. DTSTAMP repeats DTSTART.
pub fn generate_vevent(course: &Course, meeting: &Meeting, created: DateTime<Utc>) -> icalendar::Event {
    let dtstart = format_utc_timestamp(&meeting.start);

    let mut ics_event = icalendar::Event::new();
    ics_event.uid(&event_uid(course.title()));
    ics_event.summary(course.title());
    ics_event.description(&course.describe());

    if let Some(room) = course.room() {
        ics_event.location(room);
    }

    ics_event.add_property("DTSTART", &dtstart);
    ics_event.add_property("DTEND", format_utc_timestamp(&meeting.end));
    ics_event.add_property("DTSTAMP", &dtstart);
    ics_event.add_property("RRULE", meeting.recurrence.to_ics_value(&meeting.start));
    ics_event.add_property("CREATED", format_utc_timestamp(&created));
    ics_event.add_property("PRIORITY", "0");
    ics_event.add_property("STATUS", "CONFIRMED");

    ics_event.done()
}
