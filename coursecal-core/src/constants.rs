//! Fixed values shared across coursecal.

/// PRODID written into every generated calendar.
pub const PRODID: &str = "-//coursecal//Class Schedule Export//EN";

/// Namespace appended to every generated event UID.
pub const UID_NAMESPACE: &str = "@coursecal";

pub const DEFAULT_CALENDAR_NAME: &str = "Class Schedule";

pub const DEFAULT_TIMEZONE: &str = "America/Los_Angeles";

/// Ambient format of each half of a "1/23/2023 - 5/12/2023" range.
pub const DEFAULT_DATE_FORMAT: &str = "%m/%d/%Y";

/// Pop-up reminders (minutes before start) for generic events.
pub const DEFAULT_REMINDERS: [i64; 2] = [15, 90];

/// Sentinel the schedule view uses for unannounced days and times.
pub const TBA: &str = "TO BE ANNOUNCED";

/// Room value marking a fully online course.
pub const ONLINE_ROOM: &str = "ONLINE";
