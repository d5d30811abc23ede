//! coursecal configuration.

use std::path::{Path, PathBuf};

use chrono_tz::Tz;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CALENDAR_NAME, DEFAULT_DATE_FORMAT, DEFAULT_REMINDERS, DEFAULT_TIMEZONE,
};
use crate::error::{CourseCalError, CourseCalResult};

fn default_calendar_name() -> String {
    DEFAULT_CALENDAR_NAME.to_string()
}

fn default_timezone() -> String {
    DEFAULT_TIMEZONE.to_string()
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

fn default_reminders() -> Vec<i64> {
    DEFAULT_REMINDERS.to_vec()
}

fn default_true() -> bool {
    true
}

/// Configuration at ~/.config/coursecal/config.toml, overridable with
/// `COURSECAL_*` environment variables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoursecalConfig {
    #[serde(default = "default_calendar_name")]
    pub calendar_name: String,

    /// IANA zone the schedule's times are written in.
    #[serde(default = "default_timezone")]
    pub timezone: String,

    /// chrono format of each half of the term date range.
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Pop-up reminders for generic events, in minutes before start.
    #[serde(default = "default_reminders")]
    pub reminders: Vec<i64>,

    /// Emit X-WR-TIMEZONE and the VTIMEZONE block.
    #[serde(default = "default_true")]
    pub embed_timezone: bool,
}

impl Default for CoursecalConfig {
    fn default() -> Self {
        CoursecalConfig {
            calendar_name: default_calendar_name(),
            timezone: default_timezone(),
            date_format: default_date_format(),
            reminders: default_reminders(),
            embed_timezone: true,
        }
    }
}

impl CoursecalConfig {
    pub fn config_path() -> CourseCalResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CourseCalError::Config("Could not determine config directory".into()))?
            .join("coursecal");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the user's config, creating a commented default file first if
    /// there is none.
    pub fn load() -> CourseCalResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load from `path` (which may be missing) plus the environment.
    pub fn load_from(path: &Path) -> CourseCalResult<Self> {
        Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .add_source(Environment::with_prefix("COURSECAL").try_parsing(true))
            .build()
            .map_err(|e| CourseCalError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CourseCalError::Config(e.to_string()))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> CourseCalResult<()> {
        let contents = format!(
            "\
# coursecal configuration

# Name shown by calendar apps after import:
# calendar_name = \"{}\"

# Time zone the class schedule is written in:
# timezone = \"{}\"

# Format of each date in the term range (chrono syntax):
# date_format = \"{}\"

# Reminders for generic events, minutes before class:
# reminders = [15, 90]

# Include X-WR-TIMEZONE and the Pacific VTIMEZONE block in .ics output:
# embed_timezone = true
",
            DEFAULT_CALENDAR_NAME, DEFAULT_TIMEZONE, DEFAULT_DATE_FORMAT
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CourseCalError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| CourseCalError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Validate into the settings an export runs with.
    pub fn settings(&self) -> CourseCalResult<ExportSettings> {
        let timezone: Tz = self
            .timezone
            .parse()
            .map_err(|_| CourseCalError::Config(format!("Unknown timezone '{}'", self.timezone)))?;

        if self.date_format.trim().is_empty() {
            return Err(CourseCalError::Config("date_format must not be empty".into()));
        }

        if let Some(bad) = self.reminders.iter().find(|m| **m < 0) {
            return Err(CourseCalError::Config(format!(
                "Reminder minutes must not be negative (got {})",
                bad
            )));
        }

        Ok(ExportSettings {
            calendar_name: self.calendar_name.clone(),
            timezone,
            date_format: self.date_format.clone(),
            reminders: self.reminders.clone(),
            embed_timezone: self.embed_timezone,
        })
    }
}

/// Validated settings for one export.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportSettings {
    pub calendar_name: String,
    pub timezone: Tz,
    pub date_format: String,
    pub reminders: Vec<i64>,
    pub embed_timezone: bool,
}

impl Default for ExportSettings {
    fn default() -> Self {
        ExportSettings {
            calendar_name: DEFAULT_CALENDAR_NAME.to_string(),
            timezone: chrono_tz::America::Los_Angeles,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            reminders: DEFAULT_REMINDERS.to_vec(),
            embed_timezone: true,
        }
    }
}
