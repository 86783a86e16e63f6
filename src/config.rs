use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;

/// Top-level lessonplan configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LessonplanConfig {
    /// Total course hours; one lesson covers `schedule.hours_per_lesson`.
    pub hours: u32,

    /// Teaching weekdays, 0 = Sunday.
    #[serde(default)]
    pub weekdays: Vec<u8>,

    /// Scheduling range.
    pub range: RangeToml,

    /// Generator settings.
    #[serde(default)]
    pub schedule: ScheduleToml,

    /// Holiday policy.
    #[serde(default)]
    pub holidays: HolidaysToml,

    /// Document fields and template lookup.
    #[serde(default)]
    pub document: DocumentToml,
}

impl LessonplanConfig {
    /// Reads and parses a TOML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RangeToml {
    pub start_year: i32,
    pub start_month: u32,
    #[serde(default = "default_start_day")]
    pub start_day: u32,
    pub end_year: i32,
    pub end_month: u32,
}

fn default_start_day() -> u32 {
    1
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScheduleToml {
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
    #[serde(default = "default_hours_per_lesson")]
    pub hours_per_lesson: u32,
    #[serde(default = "default_true")]
    pub rollover: bool,
}

impl Default for ScheduleToml {
    fn default() -> Self {
        Self {
            max_entries: default_max_entries(),
            hours_per_lesson: default_hours_per_lesson(),
            rollover: true,
        }
    }
}

fn default_max_entries() -> usize {
    lessonplan_schedule::MAX_ENTRIES
}
fn default_hours_per_lesson() -> u32 {
    lessonplan_schedule::DEFAULT_HOURS_PER_LESSON
}
fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HolidaysToml {
    #[serde(default = "default_profile")]
    pub profile: String,
    /// Extra yearly holidays as `[month, day]` pairs.
    #[serde(default)]
    pub fixed: Vec<[u32; 2]>,
    /// Extra closed periods, inclusive.
    #[serde(default)]
    pub excluded: Vec<ExcludedToml>,
}

impl Default for HolidaysToml {
    fn default() -> Self {
        Self {
            profile: default_profile(),
            fixed: Vec::new(),
            excluded: Vec::new(),
        }
    }
}

fn default_profile() -> String {
    "ru-2023".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExcludedToml {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DocumentToml {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub kvant_name: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub module: String,
    #[serde(default)]
    pub doc_name: String,
    /// Lesson labels, in date order.
    #[serde(default)]
    pub labels: Vec<String>,
    /// Directory holding `template_{hours}.docx` files.
    #[serde(default)]
    pub template_dir: Option<PathBuf>,
}
