//! VCALENDAR assembly.

use chrono_tz::Tz;
use icalendar::{Calendar, Property};
use indoc::indoc;

use crate::constants::PRODID;

/// TZID of the embedded VTIMEZONE block.
pub const PACIFIC_TZID: &str = "America/Los_Angeles";

/// Fixed US Pacific standard/daylight rules. These are not derived from the
/// configured zone.
const PACIFIC_VTIMEZONE: &str = indoc! {"
    BEGIN:VTIMEZONE
    TZID:America/Los_Angeles
    X-LIC-LOCATION:America/Los_Angeles
    BEGIN:DAYLIGHT
    TZOFFSETFROM:-0800
    TZOFFSETTO:-0700
    TZNAME:PDT
    DTSTART:19700308T020000
    RRULE:FREQ=YEARLY;BYMONTH=3;BYDAY=2SU
    END:DAYLIGHT
    BEGIN:STANDARD
    TZOFFSETFROM:-0700
    TZOFFSETTO:-0800
    TZNAME:PST
    DTSTART:19701101T020000
    RRULE:FREQ=YEARLY;BYMONTH=11;BYDAY=1SU
    END:STANDARD
    END:VTIMEZONE
"};

/// Wrap `events` in one importable calendar.
///
/// With `timezone` set, the calendar also carries X-WR-TIMEZONE and the
/// Pacific VTIMEZONE block ahead of the first event.
pub fn assemble(events: Vec<icalendar::Event>, name: &str, timezone: Option<Tz>) -> String {
    let mut cal = Calendar::new();

    // X-WR-CALNAME - Human-readable calendar name (de facto standard)
    cal.append_property(Property::new("X-WR-CALNAME", name));

    if let Some(tz) = timezone {
        cal.append_property(Property::new("X-WR-TIMEZONE", tz.name()));
    }
    for event in events {
        cal.push(event);
    }
    let cal = cal.done();

    finish_calendar(&cal.to_string(), timezone.is_some())
}

/// Post-process the icalendar crate's output
/// - Replace PRODID with ours
/// - Make sure CALSCALE:GREGORIAN is present
/// - Insert the VTIMEZONE block where the calendar's own properties end
fn finish_calendar(ics: &str, embed_timezone: bool) -> String {
    let mut result = String::with_capacity(ics.len() + PACIFIC_VTIMEZONE.len() + 64);
    let mut has_calscale = false;
    let mut header_done = false;

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            push_line(&mut result, &format!("PRODID:{}", PRODID));
            continue;
        }

        if line == "CALSCALE:GREGORIAN" {
            has_calscale = true;
        }

        let opens_component = line.starts_with("BEGIN:") && line != "BEGIN:VCALENDAR";
        if !header_done && (opens_component || line == "END:VCALENDAR") {
            header_done = true;
            if !has_calscale {
                push_line(&mut result, "CALSCALE:GREGORIAN");
            }
            if embed_timezone {
                for tz_line in PACIFIC_VTIMEZONE.lines() {
                    push_line(&mut result, tz_line);
                }
            }
        }

        push_line(&mut result, line);
    }

    result
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push_str("\r\n");
}
