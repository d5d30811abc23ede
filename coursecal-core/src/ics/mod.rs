//! ICS generation.
//!
//! `generate` renders one course meeting as a VEVENT, `document` wraps the
//! events in an importable VCALENDAR.

mod document;
mod generate;

pub use document::{PACIFIC_TZID, assemble};
pub use generate::{event_uid, generate_vevent};
