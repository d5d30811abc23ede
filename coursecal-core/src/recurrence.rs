//! Weekly recurrence of a class meeting.
//!
//! The same [`Recurrence`] backs both outputs: generic events get a rule with
//! a plain UNTIL date, ICS events get a UTC UNTIL instant.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc, Weekday};
use chrono_tz::Tz;
use rrule::RRuleSet;

use crate::error::{CourseCalError, CourseCalResult};
use crate::timestamp::format_utc_timestamp;

/// Upper bound on expanded occurrences; a weekly class meets far fewer times
/// per term.
const MAX_OCCURRENCES: u16 = 1000;

/// Two-letter RFC 5545 weekday code.
pub fn weekday_code(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "MO",
        Weekday::Tue => "TU",
        Weekday::Wed => "WE",
        Weekday::Thu => "TH",
        Weekday::Fri => "FR",
        Weekday::Sat => "SA",
        Weekday::Sun => "SU",
    }
}

/// Parse a day token by its two-letter prefix ("MO", "MON", "Monday").
pub fn parse_weekday(token: &str) -> CourseCalResult<Weekday> {
    let prefix: String = token.chars().take(2).collect::<String>().to_uppercase();
    match prefix.as_str() {
        "MO" => Ok(Weekday::Mon),
        "TU" => Ok(Weekday::Tue),
        "WE" => Ok(Weekday::Wed),
        "TH" => Ok(Weekday::Thu),
        "FR" => Ok(Weekday::Fri),
        "SA" => Ok(Weekday::Sat),
        "SU" => Ok(Weekday::Sun),
        _ => Err(CourseCalError::format(format!("Unknown weekday '{}'", token))),
    }
}

fn shift_weekday(day: Weekday, days: i64) -> Weekday {
    let mut shifted = day;
    for _ in 0..days.unsigned_abs() {
        shifted = if days > 0 { shifted.succ() } else { shifted.pred() };
    }
    shifted
}

/// FREQ=WEEKLY on `by_day`, ending on `until` (inclusive).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recurrence {
    pub by_day: Vec<Weekday>,
    pub until: NaiveDate,
}

impl Recurrence {
    pub fn weekly(by_day: &[Weekday], until: NaiveDate) -> Self {
        Recurrence {
            by_day: by_day.to_vec(),
            until,
        }
    }

    fn by_day_list(days: impl IntoIterator<Item = Weekday>) -> String {
        days.into_iter().map(weekday_code).collect::<Vec<_>>().join(",")
    }

    /// Full `RRULE:` line with a plain-date UNTIL, for calendar APIs that
    /// take recurrence as a list of strings.
    pub fn to_date_rule(&self) -> String {
        format!(
            "RRULE:FREQ=WEEKLY;BYDAY={};UNTIL={}",
            Self::by_day_list(self.by_day.iter().copied()),
            self.until.format("%Y%m%d")
        )
    }

    /// Last instant of `until` in `tz`, in UTC.
    pub fn until_instant(&self, tz: Tz) -> DateTime<Utc> {
        let naive = self.until.and_time(NaiveTime::from_hms_opt(23, 59, 59).unwrap_or_default());
        tz.from_local_datetime(&naive)
            .latest()
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(|| naive.and_utc())
    }

    /// RRULE value for an event whose DTSTART is written in UTC.
    ///
    /// BYDAY is evaluated against the UTC start, so when `first_start` falls
    /// on a different UTC date than its local date the weekday codes move by
    /// the same number of days.
    pub fn to_ics_value(&self, first_start: &DateTime<Tz>) -> String {
        let offset = (first_start.with_timezone(&Utc).date_naive() - first_start.date_naive()).num_days();
        let days = self.by_day.iter().map(|d| shift_weekday(*d, offset));

        format!(
            "FREQ=WEEKLY;BYDAY={};UNTIL={}",
            Self::by_day_list(days),
            format_utc_timestamp(&self.until_instant(first_start.timezone()))
        )
    }

    /// Expand every meeting start from `first_start` through `until`.
    pub fn occurrences(&self, first_start: &DateTime<Tz>) -> CourseCalResult<Vec<DateTime<Utc>>> {
        let rule = format!(
            "DTSTART:{}\nRRULE:{}",
            format_utc_timestamp(first_start),
            self.to_ics_value(first_start)
        );

        let rrule_set: RRuleSet = rule.parse().map_err(|e| {
            CourseCalError::format(format!("Invalid recurrence '{}': {}", rule, e))
        })?;

        let result = rrule_set.all(MAX_OCCURRENCES);
        Ok(result.dates.iter().map(|dt| dt.with_timezone(&Utc)).collect())
    }
}
