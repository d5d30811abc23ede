//! Course records extracted from the schedule view.
//!
//! A [`Course`] is an immutable value built once per source record by
//! [`Course::extract`]. Nothing here touches the source again afterwards.

use std::fmt;

use chrono::Weekday;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::constants::{ONLINE_ROOM, TBA};
use crate::date_range::DateRange;
use crate::error::{CourseCalError, CourseCalResult};
use crate::recurrence::{parse_weekday, weekday_code};
use crate::source::{Field, FieldReader};

const DAYS_LABEL: &str = "Days:";
const TIMES_LABEL: &str = "Times:";
const TIMES_SEPARATOR: &str = " TO ";

/// One enrolled class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    title: String,
    date_range: DateRange,
    /// Days and times are announced together or not at all.
    schedule: Option<Schedule>,
    room: Option<String>,
    status: EnrollmentStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Schedule {
    days: Vec<Weekday>,
    times: TimeRange,
}

/// Start and end of a class meeting, still in source text form ("2:00PM").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: String,
    pub end: String,
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.start, TIMES_SEPARATOR, self.end)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnrollmentStatus {
    Enrolled,
    Waitlisted,
    Unknown,
}

impl EnrollmentStatus {
    /// Map status text onto a status. Anything unrecognized is `Unknown`.
    pub fn from_text(text: &str) -> Self {
        let normalized: String = text
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_uppercase();

        match normalized.as_str() {
            "ENROLLED" => EnrollmentStatus::Enrolled,
            "WAITING" => EnrollmentStatus::Waitlisted,
            _ => EnrollmentStatus::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EnrollmentStatus::Enrolled => "Enrolled",
            EnrollmentStatus::Waitlisted => "Waitlisted",
            EnrollmentStatus::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for EnrollmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Course {
    /// Extract a course from one source record.
    ///
    /// `date_format` is the chrono format of each half of the date range.
    pub fn extract<R: FieldReader + ?Sized>(record: &R, date_format: &str) -> CourseCalResult<Self> {
        let title = normalize_title(record.require(Field::Title)?);
        let date_range = DateRange::parse(record.require(Field::Dates)?, date_format)?;
        let days = parse_days(record.require(Field::Days)?)?;
        let times = parse_times(record.require(Field::Times)?)?;
        let room = parse_room(record.require(Field::Room)?);
        let status = EnrollmentStatus::from_text(record.require(Field::Status)?);

        let schedule = match (days, times) {
            (Some(days), Some(times)) => Some(Schedule { days, times }),
            (None, None) => None,
            (days, _) => {
                warn!(
                    "'{}' announces {} but not {}; treating it as unscheduled",
                    title,
                    if days.is_some() { "days" } else { "times" },
                    if days.is_some() { "times" } else { "days" },
                );
                None
            }
        };

        let course = Course {
            title,
            date_range,
            schedule,
            room,
            status,
        };
        debug!("Extracted {:?}", course);

        Ok(course)
    }

    /// Course name with runs of whitespace collapsed.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn date_range(&self) -> DateRange {
        self.date_range
    }

    /// Meeting days in source order, or `None` while unannounced.
    pub fn days(&self) -> Option<&[Weekday]> {
        self.schedule.as_ref().map(|s| s.days.as_slice())
    }

    /// Meeting time window, or `None` while unannounced.
    pub fn times(&self) -> Option<&TimeRange> {
        self.schedule.as_ref().map(|s| &s.times)
    }

    /// Normalized room, or `None` for a fully online course.
    pub fn room(&self) -> Option<&str> {
        self.room.as_deref()
    }

    pub fn status(&self) -> EnrollmentStatus {
        self.status
    }

    pub fn is_online(&self) -> bool {
        self.room.is_none()
    }

    pub fn is_scheduled(&self) -> bool {
        self.schedule.is_some()
    }

    /// One-line summary of status, meetings, and term for event bodies.
    pub fn describe(&self) -> String {
        let mut parts = vec![format!("Status: {}", self.status)];
        if let Some(schedule) = &self.schedule {
            let days: Vec<&str> = schedule.days.iter().map(|d| weekday_code(*d)).collect();
            parts.push(format!("Meets: {} {}", days.join(" "), schedule.times));
        }
        parts.push(format!("Term: {}", self.date_range));
        parts.join(" | ")
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}

pub(crate) fn normalize_title(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Drop a leading label such as "Days:" if present (any case).
fn strip_label<'a>(text: &'a str, label: &str) -> &'a str {
    let text = text.trim();
    match text.get(..label.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(label) => text[label.len()..].trim(),
        _ => text,
    }
}

fn is_unannounced(value: &str) -> bool {
    value.is_empty() || value == TBA
}

fn parse_days(text: &str) -> CourseCalResult<Option<Vec<Weekday>>> {
    let value = strip_label(text, DAYS_LABEL).to_uppercase();
    if is_unannounced(&value) {
        return Ok(None);
    }

    let mut days = Vec::new();
    for token in value.split(' ').filter(|t| !t.is_empty()) {
        let day = parse_weekday(token)?;
        if !days.contains(&day) {
            days.push(day);
        }
    }

    Ok(Some(days))
}

fn parse_times(text: &str) -> CourseCalResult<Option<TimeRange>> {
    let value = strip_label(text, TIMES_LABEL).to_uppercase();
    if is_unannounced(&value) {
        return Ok(None);
    }

    let parts: Vec<&str> = value.split(TIMES_SEPARATOR).collect();
    let [start, end] = parts.as_slice() else {
        return Err(CourseCalError::format(format!(
            "Invalid meeting times '{}'. Expected START{}END",
            value, TIMES_SEPARATOR
        )));
    };

    Ok(Some(TimeRange {
        start: start.trim().to_string(),
        end: end.trim().to_string(),
    }))
}

fn parse_room(text: &str) -> Option<String> {
    let room: String = text
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase();

    if room.is_empty() || room == ONLINE_ROOM {
        None
    } else {
        Some(room)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::RawCourse;
    use chrono::NaiveDate;

    const US: &str = "%m/%d/%Y";

    fn record(days: &str, times: &str, room: &str, status: &str) -> RawCourse {
        RawCourse {
            title: Some("  CS   101\tIntro ".to_string()),
            dates: Some("1/23/2023 - 5/12/2023".to_string()),
            days: Some(days.to_string()),
            times: Some(times.to_string()),
            room: Some(room.to_string()),
            status: Some(status.to_string()),
        }
    }

    fn scheduled() -> RawCourse {
        record("Days: MO WE", "Times: 2:00PM TO 3:15PM", "GMCS-314", "Enrolled")
    }

    #[test]
    fn extracts_scheduled_course() {
        let course = Course::extract(&scheduled(), US).unwrap();

        assert_eq!(course.title(), "CS 101 Intro");
        assert_eq!(
            course.date_range().start,
            NaiveDate::from_ymd_opt(2023, 1, 23).unwrap()
        );
        assert_eq!(course.days(), Some(&[Weekday::Mon, Weekday::Wed][..]));
        assert_eq!(
            course.times(),
            Some(&TimeRange {
                start: "2:00PM".to_string(),
                end: "3:15PM".to_string()
            })
        );
        assert_eq!(course.room(), Some("GMCS-314"));
        assert_eq!(course.status(), EnrollmentStatus::Enrolled);
        assert!(!course.is_online());
    }

    #[test]
    fn days_to_be_announced_is_absent() {
        let course = Course::extract(
            &record("Days: TO BE ANNOUNCED", "Times: TO BE ANNOUNCED", "GMCS-314", "Enrolled"),
            US,
        )
        .unwrap();

        assert_eq!(course.days(), None);
        assert_eq!(course.times(), None);
        assert!(!course.is_scheduled());
    }

    #[test]
    fn half_announced_schedule_is_unscheduled() {
        let course = Course::extract(
            &record("Days: TU TH", "Times: to be announced", "GMCS-314", "Enrolled"),
            US,
        )
        .unwrap();

        assert_eq!(course.days(), None);
        assert_eq!(course.times(), None);
    }

    #[test]
    fn online_room_in_any_case_is_absent() {
        for room in ["Online", " online ", "ON LINE", "ONLINE\n", ""] {
            let course = Course::extract(&record("Days: MO", "Times: 9:00AM TO 9:50AM", room, "Enrolled"), US)
                .unwrap();
            assert_eq!(course.room(), None, "room {:?}", room);
            assert!(course.is_online());
        }
    }

    #[test]
    fn room_whitespace_is_stripped() {
        let course = Course::extract(&record("Days: MO", "Times: 9:00AM TO 9:50AM", " gmcs 314 ", "Enrolled"), US)
            .unwrap();
        assert_eq!(course.room(), Some("GMCS314"));
    }

    #[test]
    fn status_mapping() {
        assert_eq!(EnrollmentStatus::from_text(" Enrolled "), EnrollmentStatus::Enrolled);
        assert_eq!(EnrollmentStatus::from_text("waiting"), EnrollmentStatus::Waitlisted);
        assert_eq!(EnrollmentStatus::from_text("Dropped"), EnrollmentStatus::Unknown);
        assert_eq!(EnrollmentStatus::from_text(""), EnrollmentStatus::Unknown);
    }

    #[test]
    fn day_tokens_use_two_letter_prefix_and_keep_order() {
        let course = Course::extract(&record("days: FRI  MON FR", "Times: 9:00AM TO 9:50AM", "A1", "Enrolled"), US)
            .unwrap();
        assert_eq!(course.days(), Some(&[Weekday::Fri, Weekday::Mon][..]));
    }

    #[test]
    fn unlabeled_text_is_accepted() {
        let course = Course::extract(&record("TU TH", "11:00am to 12:15pm", "A1", "Enrolled"), US).unwrap();
        assert_eq!(course.days(), Some(&[Weekday::Tue, Weekday::Thu][..]));
        assert_eq!(course.times().unwrap().end, "12:15PM");
    }

    #[test]
    fn unknown_day_token_is_format_error() {
        let err = Course::extract(&record("Days: MO XX", "Times: 9:00AM TO 9:50AM", "A1", "Enrolled"), US)
            .unwrap_err();
        assert!(matches!(err, CourseCalError::Format(_)));
    }

    #[test]
    fn times_need_exactly_two_parts() {
        for times in ["Times: 9:00AM", "Times: 9:00AM TO 9:50AM TO 10:00AM", "Times: 9:00AM-9:50AM"] {
            let result = Course::extract(&record("Days: MO", times, "A1", "Enrolled"), US);
            assert!(matches!(result, Err(CourseCalError::Format(_))), "times {:?}", times);
        }
    }

    #[test]
    fn missing_field_is_format_error() {
        let mut raw = scheduled();
        raw.status = None;
        let err = Course::extract(&raw, US).unwrap_err();
        assert!(err.to_string().contains("status"));
    }

    #[test]
    fn describe_mentions_status_and_meetings() {
        let course = Course::extract(&scheduled(), US).unwrap();
        let text = course.describe();
        assert_eq!(
            text,
            "Status: Enrolled | Meets: MO WE 2:00PM TO 3:15PM | Term: 2023-01-23 - 2023-05-12"
        );
    }
}
