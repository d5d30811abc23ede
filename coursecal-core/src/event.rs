//! Calendar events built from courses.
//!
//! [`Meeting`] holds the business rules shared by both outputs: the first
//! day's time window and the weekly recurrence. [`CalendarEvent`] is the
//! provider-neutral object handed to calendar APIs; `ics::generate` renders
//! the same meeting as a VEVENT.

use chrono::{DateTime, FixedOffset};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::course::Course;
use crate::error::{CourseCalError, CourseCalResult};
use crate::recurrence::Recurrence;
use crate::time::parse_time_of_day;

/// First class meeting and how it repeats.
#[derive(Debug, Clone, PartialEq)]
pub struct Meeting {
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
    pub recurrence: Recurrence,
}

impl Meeting {
    /// Resolve the first meeting of `course` on its term start date.
    ///
    /// Returns `Ok(None)` for a course whose days and times are unannounced.
    pub fn for_course(course: &Course, tz: Tz) -> CourseCalResult<Option<Self>> {
        let (Some(days), Some(times)) = (course.days(), course.times()) else {
            return Ok(None);
        };
        let range = course.date_range();

        let start = parse_time_of_day(&times.start, range.start, tz)?;
        let end = parse_time_of_day(&times.end, range.start, tz)?;

        if end <= start {
            return Err(CourseCalError::format(format!(
                "Meeting time '{}' ends before it starts",
                times
            )));
        }

        Ok(Some(Meeting {
            start,
            end,
            recurrence: Recurrence::weekly(days, range.end),
        }))
    }
}

/// A provider-neutral calendar event, shaped like the event resources of
/// hosted calendar APIs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub summary: String,
    pub location: String,
    pub description: String,
    pub start: EventDateTime,
    pub end: EventDateTime,
    /// `RRULE:` lines
    pub recurrence: Vec<String>,
    pub reminders: Reminders,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDateTime {
    pub date_time: DateTime<FixedOffset>,
    pub time_zone: String,
}

impl EventDateTime {
    fn from_zoned(dt: &DateTime<Tz>) -> Self {
        EventDateTime {
            date_time: dt.fixed_offset(),
            time_zone: dt.timezone().name().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminders {
    pub use_default: bool,
    pub overrides: Vec<Reminder>,
}

/// A reminder some minutes before the event starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    pub method: String,
    pub minutes: i64,
}

impl Reminder {
    pub fn popup(minutes: i64) -> Self {
        Reminder {
            method: "popup".to_string(),
            minutes,
        }
    }
}

impl CalendarEvent {
    /// Build the generic event for `course`. An online course gets an empty
    /// location.
    pub fn new(course: &Course, meeting: &Meeting, reminder_minutes: &[i64]) -> Self {
        CalendarEvent {
            summary: course.title().to_string(),
            location: course.room().unwrap_or_default().to_string(),
            description: course.describe(),
            start: EventDateTime::from_zoned(&meeting.start),
            end: EventDateTime::from_zoned(&meeting.end),
            recurrence: vec![meeting.recurrence.to_date_rule()],
            reminders: Reminders {
                use_default: false,
                overrides: reminder_minutes.iter().copied().map(Reminder::popup).collect(),
            },
        }
    }
}
