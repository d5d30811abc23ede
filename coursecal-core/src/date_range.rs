//! Term date range such as "1/23/2023 - 5/12/2023".

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CourseCalError, CourseCalResult};

const SEPARATOR: &str = " - ";

/// First and last class date of a term, both inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Parse "START - END" where each half is a date in `format`
    /// (a chrono format string, e.g. `%m/%d/%Y`).
    pub fn parse(text: &str, format: &str) -> CourseCalResult<Self> {
        let parts: Vec<&str> = text.trim().split(SEPARATOR).collect();

        let [start, end] = parts.as_slice() else {
            return Err(CourseCalError::format(format!(
                "Invalid date range '{}'. Expected START{}END",
                text.trim(),
                SEPARATOR
            )));
        };

        let start = parse_date(start, format)?;
        let end = parse_date(end, format)?;

        if end < start {
            return Err(CourseCalError::format(format!(
                "Date range '{}' ends before it starts",
                text.trim()
            )));
        }

        Ok(DateRange { start, end })
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.start, SEPARATOR, self.end)
    }
}

fn parse_date(s: &str, format: &str) -> CourseCalResult<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, format)
        .map_err(|_| CourseCalError::format(format!("Invalid date '{}'. Expected {}", s, format)))
}
