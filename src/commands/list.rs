use anyhow::Result;
use chrono::NaiveDate;
use chrono_tz::Tz;
use coursecal_core::event::Meeting;
use coursecal_core::recurrence::weekday_code;
use coursecal_core::{Course, ExportSettings, RawCourse};
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run(records: &[RawCourse], settings: &ExportSettings) -> Result<()> {
    if records.is_empty() {
        println!("{}", "  No course records".dimmed());
        return Ok(());
    }

    for (index, record) in records.iter().enumerate() {
        match Course::extract(record, &settings.date_format) {
            Ok(course) => {
                let listing = CourseListing::new(&course, settings.timezone);
                println!("{}", listing.render());
            }
            Err(e) => {
                println!("  {} {}", "!".red(), format!("record {}: {}", index + 1, e).red());
            }
        }
    }

    Ok(())
}

enum Sessions {
    Weekly {
        count: usize,
        first: NaiveDate,
        last: NaiveDate,
    },
    Unscheduled,
    Invalid(String),
}

struct CourseListing<'a> {
    course: &'a Course,
    timezone: Tz,
    sessions: Sessions,
}

impl<'a> CourseListing<'a> {
    fn new(course: &'a Course, timezone: Tz) -> Self {
        let sessions = match Meeting::for_course(course, timezone) {
            Ok(Some(meeting)) => match meeting.recurrence.occurrences(&meeting.start) {
                Ok(dates) => match (dates.first(), dates.last()) {
                    (Some(first), Some(last)) => Sessions::Weekly {
                        count: dates.len(),
                        first: first.with_timezone(&timezone).date_naive(),
                        last: last.with_timezone(&timezone).date_naive(),
                    },
                    _ => Sessions::Weekly {
                        count: 0,
                        first: meeting.start.date_naive(),
                        last: meeting.start.date_naive(),
                    },
                },
                Err(e) => Sessions::Invalid(e.to_string()),
            },
            Ok(None) => Sessions::Unscheduled,
            Err(e) => Sessions::Invalid(e.to_string()),
        };

        CourseListing {
            course,
            timezone,
            sessions,
        }
    }
}

impl Render for CourseListing<'_> {
    fn render(&self) -> String {
        let course = self.course;
        let marker = if course.is_online() || !course.is_scheduled() {
            "-".yellow().to_string()
        } else {
            "+".green().to_string()
        };

        let when = match (course.days(), course.times()) {
            (Some(days), Some(times)) => {
                let days: Vec<&str> = days.iter().map(|d| weekday_code(*d)).collect();
                format!("{} {}", days.join(" "), times)
            }
            _ => "TBA".to_string(),
        };
        let room = course.room().unwrap_or("online");

        let sessions = match &self.sessions {
            Sessions::Weekly { count, first, last } => {
                format!("{} meetings, {} to {} ({})", count, first, last, self.timezone.name())
                    .dimmed()
                    .to_string()
            }
            Sessions::Unscheduled => "no meetings yet".dimmed().to_string(),
            Sessions::Invalid(message) => message.red().to_string(),
        };

        format!(
            "  {} {} [{}]\n      {} @ {}\n      {}",
            marker,
            course.title(),
            course.status().render(),
            when,
            room,
            sessions
        )
    }
}
