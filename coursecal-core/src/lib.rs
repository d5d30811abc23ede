//! Core types for coursecal.
//!
//! Turns an ordered list of opaque course records into either an importable
//! `.ics` document or a list of provider-neutral calendar events:
//! - `source` defines the `FieldReader` capability the record locator supplies
//! - `course` extracts an immutable `Course` from one record
//! - `event` and `ics` build the two output representations
//! - `export` runs the batch and collects per-record diagnostics

pub mod config;
pub mod constants;
pub mod course;
pub mod date_range;
pub mod error;
pub mod event;
pub mod export;
pub mod ics;
pub mod recurrence;
pub mod source;
pub mod time;
pub mod timestamp;

pub use config::{CoursecalConfig, ExportSettings};
pub use course::{Course, EnrollmentStatus, TimeRange};
pub use date_range::DateRange;
pub use error::{CourseCalError, CourseCalResult};
pub use event::CalendarEvent;
pub use export::{Diagnostic, EventExport, IcsExport, SkipReason, export_events, export_ics};
pub use source::{Field, FieldReader, RawCourse};
