//! Shared setup for every subcommand: config, overrides, generation.

use anyhow::{Context, Result};
use tracing::info;

use lessonplan_calendar::{DateRange, HolidayCalendar, HolidayRules, WeekdaySet};
use lessonplan_schedule::{Schedule, ScheduleConfig, generate};

use crate::cli::ScheduleArgs;
use crate::config::LessonplanConfig;
use crate::convert;

/// Everything needed to generate one schedule.
pub struct Plan {
    pub config: LessonplanConfig,
    pub hours: u32,
    pub range: DateRange,
    pub weekdays: WeekdaySet,
    pub holidays: HolidayRules,
    pub schedule_cfg: ScheduleConfig,
}

impl Plan {
    /// Loads the config file and applies CLI overrides.
    pub fn load(args: &ScheduleArgs) -> Result<Self> {
        let config = LessonplanConfig::load(&args.config)?;
        Self::from_config(config, args.hours, args.weekdays.as_deref())
    }

    /// Builds a plan from a parsed config; `hours`/`weekdays` override it.
    pub fn from_config(
        config: LessonplanConfig,
        hours: Option<u32>,
        weekdays: Option<&[u8]>,
    ) -> Result<Self> {
        let hours = hours.unwrap_or(config.hours);
        let weekdays = convert::build_weekdays(weekdays.unwrap_or(&config.weekdays))?;
        let range = convert::build_range(&config.range)?;
        let holidays = convert::build_holiday_rules(&config.holidays)?;
        let schedule_cfg = convert::build_schedule_config(&config.schedule)?;
        Ok(Self {
            config,
            hours,
            range,
            weekdays,
            holidays,
            schedule_cfg,
        })
    }

    /// Generates the lesson dates.
    pub fn generate(&self) -> Result<Schedule> {
        info!(
            start = %self.range.start(),
            end_year = self.range.end_year(),
            end_month = self.range.end_month(),
            hours = self.hours,
            holidays = self.holidays.name(),
            "generating lesson dates"
        );
        let schedule = generate(
            &self.range,
            self.weekdays,
            self.hours,
            &self.holidays,
            &self.schedule_cfg,
        )
        .context("failed to generate lesson dates")?;
        info!(
            n_entries = schedule.len(),
            n_rollover = schedule.n_rollover(),
            "lesson dates generated"
        );
        Ok(schedule)
    }
}
