//! Lesson-date sequence generation.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use lessonplan_calendar::{DateRange, HolidayCalendar, HolidayRules, WeekdaySet};

use crate::config::{ScheduleConfig, lesson_count};
use crate::entry::ScheduleEntry;
use crate::error::ScheduleError;
use crate::result::Schedule;

/// Generates lesson dates for `hours` of teaching.
///
/// Walks forward one day at a time from the range start, keeping every date
/// whose weekday is in `weekdays` and which `calendar` does not mark as a
/// holiday, until `lesson_count(hours)` dates are found or the walk leaves
/// the range's last month.
///
/// When the walk leaves the range with fewer than
/// [`max_entries`](ScheduleConfig::max_entries) dates and roll-over is
/// enabled, a second scan starts on the first day of the month after the
/// one reached, in the range's *start* year (December rolls to January of
/// the following year). It runs through the same end month and keeps
/// appending matching dates until the cap is reached. The scan may revisit
/// dates already taken by the primary walk.
///
/// A target of zero does not stop the primary walk early; it still runs to
/// the end of the range before the roll-over check.
///
/// # Errors
///
/// Returns [`ScheduleError`] if `config` is invalid or the walk overflows
/// the representable date range.
///
/// # Example
///
/// ```
/// use lessonplan_calendar::{DateRange, HolidayRules, WeekdaySet};
/// use lessonplan_schedule::{ScheduleConfig, generate};
///
/// let range = DateRange::new(2023, 2, 1, 2023, 2).unwrap();
/// let fridays = WeekdaySet::from_indices(&[5]).unwrap();
/// let rules = HolidayRules::russia_2023();
///
/// let schedule = generate(&range, fridays, 72, &rules, &ScheduleConfig::default()).unwrap();
/// // Feb 24 is a holiday.
/// assert_eq!(schedule.texts(), vec!["03.02.2023", "10.02.2023", "17.02.2023"]);
/// ```
#[tracing::instrument(
    skip_all,
    fields(hours = hours, weekdays = ?weekdays.indices(), calendar = calendar.name())
)]
pub fn generate<C: HolidayCalendar + ?Sized>(
    range: &DateRange,
    weekdays: WeekdaySet,
    hours: u32,
    calendar: &C,
    config: &ScheduleConfig,
) -> Result<Schedule, ScheduleError> {
    config.validate()?;
    let max = config.max_entries();
    let target = lesson_count(hours, config.hours_per_lesson(), max);

    let mut entries = Vec::with_capacity(max);
    if weekdays.is_empty() {
        return Ok(Schedule::new(entries, 0));
    }
    let is_lesson = |date: NaiveDate| weekdays.contains_date(date) && !calendar.is_holiday(date);

    let mut current = range.start();
    let mut count = 0;
    let left_range = loop {
        if count < target && is_lesson(current) {
            entries.push(ScheduleEntry::new(current));
            count += 1;
        }
        current = next_day(current)?;
        if range.is_past_end(current) {
            break true;
        }
        if target > 0 && count >= target {
            break false;
        }
    };

    let mut n_rollover = 0;
    if left_range && config.rollover() && entries.len() < max {
        let mut next = rollover_start(range.start_year(), current)?;
        debug!(from = %next, n_primary = entries.len(), "rolling over");
        while entries.len() < max && range.contains_month(next) {
            if is_lesson(next) {
                entries.push(ScheduleEntry::new(next));
                n_rollover += 1;
            }
            next = next_day(next)?;
        }
    }

    debug!(n_entries = entries.len(), n_rollover, "generated lesson dates");
    Ok(Schedule::new(entries, n_rollover))
}

/// Generates lesson dates with the 2023 holiday profile and default config.
///
/// # Errors
///
/// See [`generate`].
pub fn generate_default(
    range: &DateRange,
    weekdays: WeekdaySet,
    hours: u32,
) -> Result<Schedule, ScheduleError> {
    generate(
        range,
        weekdays,
        hours,
        &HolidayRules::russia_2023(),
        &ScheduleConfig::default(),
    )
}

fn next_day(date: NaiveDate) -> Result<NaiveDate, ScheduleError> {
    date.succ_opt().ok_or(ScheduleError::DateOverflow { date })
}

/// First day of the month after `reached`, placed in `start_year`.
fn rollover_start(start_year: i32, reached: NaiveDate) -> Result<NaiveDate, ScheduleError> {
    let (year, month) = if reached.month() == 12 {
        (start_year + 1, 1)
    } else {
        (start_year, reached.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(ScheduleError::DateOverflow { date: reached })
}
