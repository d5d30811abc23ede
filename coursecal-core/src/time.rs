//! Time-of-day parsing for schedule text such as "2:00PM".

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone};
use chrono_tz::Tz;
use regex::Regex;

use crate::error::{CourseCalError, CourseCalResult};

static TIME_OF_DAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(\d{1,2}):(\d{2})(AM|PM)$").unwrap());

/// Parse an `H:MM(AM|PM)` string into a wall-clock time.
///
/// `12:xxAM` is just after midnight (hour 0) and `12:xxPM` stays hour 12.
pub fn parse_clock_time(text: &str) -> CourseCalResult<NaiveTime> {
    let text = text.trim();
    let caps = TIME_OF_DAY.captures(text).ok_or_else(|| {
        CourseCalError::format(format!("Invalid time of day '{}'. Expected H:MM(AM|PM)", text))
    })?;

    let hour: u32 = caps[1]
        .parse()
        .map_err(|_| CourseCalError::format(format!("Invalid hour in '{}'", text)))?;
    let minute: u32 = caps[2]
        .parse()
        .map_err(|_| CourseCalError::format(format!("Invalid minute in '{}'", text)))?;

    if !(1..=12).contains(&hour) {
        return Err(CourseCalError::format(format!(
            "Hour out of range in '{}'. Expected 1-12",
            text
        )));
    }

    let pm = caps[3].eq_ignore_ascii_case("PM");
    let hour = match (hour, pm) {
        (12, false) => 0,
        (12, true) => 12,
        (h, false) => h,
        (h, true) => h + 12,
    };

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| {
        CourseCalError::format(format!("Minute out of range in '{}'. Expected 00-59", text))
    })
}

/// Combine a parsed time of day with `reference`'s calendar date in `tz`.
///
/// Seconds are always zero. A wall-clock time skipped by a DST transition is a
/// format error; an ambiguous one resolves to the earlier instant.
pub fn parse_time_of_day(text: &str, reference: NaiveDate, tz: Tz) -> CourseCalResult<DateTime<Tz>> {
    let time = parse_clock_time(text)?;
    let naive = reference.and_time(time);

    tz.from_local_datetime(&naive).earliest().ok_or_else(|| {
        CourseCalError::format(format!(
            "'{}' on {} does not exist in {}",
            text.trim(),
            reference,
            tz.name()
        ))
    })
}
