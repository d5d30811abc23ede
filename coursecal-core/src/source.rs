//! Source records as handed over by whatever locates courses in the
//! schedule view.
//!
//! The core never walks a document itself. It only asks a record for the
//! text of each labeled field through [`FieldReader`].

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CourseCalError, CourseCalResult};

/// The six labeled text fields of one course record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Dates,
    Days,
    Times,
    Room,
    Status,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Dates => "dates",
            Field::Days => "days",
            Field::Times => "times",
            Field::Room => "room",
            Field::Status => "status",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read access to the raw text of a course record's labeled fields.
pub trait FieldReader {
    /// Raw text of `field`, or `None` if the record has no such field.
    fn read(&self, field: Field) -> Option<&str>;

    /// Like [`FieldReader::read`] but a missing field is a format error.
    fn require(&self, field: Field) -> CourseCalResult<&str> {
        self.read(field)
            .ok_or_else(|| CourseCalError::format(format!("Missing {} field", field)))
    }
}

impl<R: FieldReader + ?Sized> FieldReader for &R {
    fn read(&self, field: Field) -> Option<&str> {
        (**self).read(field)
    }
}

/// A course record captured as plain strings, e.g. from a JSON export of the
/// schedule view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawCourse {
    pub title: Option<String>,
    pub dates: Option<String>,
    pub days: Option<String>,
    pub times: Option<String>,
    pub room: Option<String>,
    pub status: Option<String>,
}

impl RawCourse {
    /// Parse an ordered JSON array of records.
    pub fn from_json(json: &str) -> CourseCalResult<Vec<RawCourse>> {
        serde_json::from_str(json).map_err(|e| CourseCalError::Serialization(e.to_string()))
    }

    pub fn load(path: &Path) -> CourseCalResult<Vec<RawCourse>> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}

impl FieldReader for RawCourse {
    fn read(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::Title => &self.title,
            Field::Dates => &self.dates,
            Field::Days => &self.days,
            Field::Times => &self.times,
            Field::Room => &self.room,
            Field::Status => &self.status,
        };
        value.as_deref()
    }
}
