use chrono::{DateTime, TimeZone, Utc};
use coursecal_core::config::{CoursecalConfig, ExportSettings};
use coursecal_core::{RawCourse, SkipReason, export_events, export_ics};
use pretty_assertions::assert_eq;

const SCHEDULE_JSON: &str = r#"[
    {
        "title": "CS 101 Intro ",
        "dates": "1/23/2023 - 5/12/2023",
        "days": "Days: MO WE",
        "times": "Times: 2:00PM TO 3:15PM",
        "room": "GMCS-314",
        "status": "Enrolled"
    },
    {
        "title": "ART  100 Drawing",
        "dates": "1/23/2023 - 5/12/2023",
        "days": "Days: TO BE ANNOUNCED",
        "times": "Times: TO BE ANNOUNCED",
        "room": " Online ",
        "status": "Waiting"
    },
    {
        "title": "MATH 254",
        "dates": "1/24/2023 - 5/11/2023",
        "days": "Days: TU TH",
        "times": "Times: 11:00AM TO 12:15PM",
        "room": "gmcs 214",
        "status": "Dropped"
    }
]"#;

fn records() -> Vec<RawCourse> {
    RawCourse::from_json(SCHEDULE_JSON).unwrap()
}

fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
}

/// Unfold RFC 5545 continuation lines so assertions see whole properties.
fn unfolded(ics: &str) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    for line in ics.split("\r\n").filter(|l| !l.is_empty()) {
        match (line.strip_prefix(' '), lines.last_mut()) {
            (Some(rest), Some(last)) => last.push_str(rest),
            _ => lines.push(line.to_string()),
        }
    }
    lines
}

#[test]
fn spring_schedule_to_ics() {
    let export = export_ics(&records(), &ExportSettings::default(), at(2023, 1, 10));
    let lines = unfolded(&export.document);

    assert_eq!(export.exported, vec!["CS 101 Intro", "MATH 254"]);
    assert_eq!(lines.first().map(String::as_str), Some("BEGIN:VCALENDAR"));
    assert_eq!(lines.last().map(String::as_str), Some("END:VCALENDAR"));

    for expected in [
        "VERSION:2.0",
        "CALSCALE:GREGORIAN",
        "X-WR-CALNAME:Class Schedule",
        "X-WR-TIMEZONE:America/Los_Angeles",
        "BEGIN:VTIMEZONE",
        "SUMMARY:CS 101 Intro",
        "LOCATION:GMCS-314",
        "DTSTART:20230123T220000Z",
        "DTEND:20230123T231500Z",
        "RRULE:FREQ=WEEKLY;BYDAY=MO,WE;UNTIL=20230513T065959Z",
        "SUMMARY:MATH 254",
        "LOCATION:GMCS214",
        "DTSTART:20230124T190000Z",
        "RRULE:FREQ=WEEKLY;BYDAY=TU,TH;UNTIL=20230512T065959Z",
        "DESCRIPTION:Status: Unknown | Meets: TU TH 11:00AM TO 12:15PM | Term: 2023-01-24 - 2023-05-11",
    ] {
        assert!(lines.iter().any(|l| l == expected), "Missing {expected:?}");
    }

    assert_eq!(export.diagnostics.len(), 1);
    assert_eq!(export.diagnostics[0].title.as_deref(), Some("ART 100 Drawing"));
    assert_eq!(export.diagnostics[0].reason, SkipReason::Online);
    assert!(!lines.iter().any(|l| l.contains("ART 100")));
}

#[test]
fn zero_records_yield_empty_calendar() {
    let export = export_ics(Vec::<RawCourse>::new(), &ExportSettings::default(), at(2023, 1, 10));
    let lines = unfolded(&export.document);

    assert_eq!(lines.first().map(String::as_str), Some("BEGIN:VCALENDAR"));
    assert_eq!(lines.last().map(String::as_str), Some("END:VCALENDAR"));
    assert!(lines.iter().any(|l| l.starts_with("PRODID:")));
    assert!(!lines.iter().any(|l| l == "BEGIN:VEVENT"));
    assert!(export.exported.is_empty());
    assert!(export.diagnostics.is_empty());
}

#[test]
fn repeated_export_differs_only_in_created() {
    let settings = ExportSettings::default();
    let first = export_ics(&records(), &settings, at(2023, 1, 10));
    let second = export_ics(&records(), &settings, at(2025, 8, 1));

    let strip = |ics: &str| -> Vec<String> {
        unfolded(ics)
            .into_iter()
            .filter(|l| !l.starts_with("CREATED:"))
            .collect()
    };

    assert_eq!(strip(&first.document), strip(&second.document));

    let same_time = export_ics(&records(), &settings, at(2023, 1, 10));
    assert_eq!(first.document, same_time.document);
}

#[test]
fn spring_schedule_to_generic_events() {
    let export = export_events(&records(), &ExportSettings::default());

    let json = serde_json::to_value(&export.events).unwrap();
    assert_eq!(
        json[0],
        serde_json::json!({
            "summary": "CS 101 Intro",
            "location": "GMCS-314",
            "description": "Status: Enrolled | Meets: MO WE 2:00PM TO 3:15PM | Term: 2023-01-23 - 2023-05-12",
            "start": { "dateTime": "2023-01-23T14:00:00-08:00", "timeZone": "America/Los_Angeles" },
            "end": { "dateTime": "2023-01-23T15:15:00-08:00", "timeZone": "America/Los_Angeles" },
            "recurrence": ["RRULE:FREQ=WEEKLY;BYDAY=MO,WE;UNTIL=20230512"],
            "reminders": {
                "useDefault": false,
                "overrides": [
                    { "method": "popup", "minutes": 15 },
                    { "method": "popup", "minutes": 90 }
                ]
            }
        })
    );
    assert_eq!(export.events.len(), 2);
    assert_eq!(export.diagnostics.len(), 1);
}

#[test]
fn config_file_overrides_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "calendar_name = \"Fall 2023\"\ntimezone = \"America/Denver\"\nreminders = [10]\nembed_timezone = false\n",
    )
    .unwrap();

    let settings = CoursecalConfig::load_from(&path).unwrap().settings().unwrap();
    assert_eq!(settings.calendar_name, "Fall 2023");
    assert_eq!(settings.timezone, chrono_tz::America::Denver);
    assert_eq!(settings.reminders, vec![10]);
    assert!(!settings.embed_timezone);
    assert_eq!(settings.date_format, "%m/%d/%Y");

    let export = export_ics(&records(), &settings, at(2023, 1, 10));
    assert!(export.document.contains("X-WR-CALNAME:Fall 2023"));
    assert!(!export.document.contains("BEGIN:VTIMEZONE"));
    // 2:00 PM MST
    assert!(export.document.contains("DTSTART:20230123T210000Z"));
}

#[test]
fn default_config_file_is_all_comments() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    CoursecalConfig::create_default_config(&path).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.lines().all(|l| l.is_empty() || l.starts_with('#')));

    let loaded = CoursecalConfig::load_from(&path).unwrap();
    assert_eq!(loaded, CoursecalConfig::default());
}
