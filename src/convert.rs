//! Pure conversion functions: TOML config structs -> crate API types.

use anyhow::{Context, Result, bail};

use lessonplan_calendar::{DateRange, HolidayRules, WeekdaySet};
use lessonplan_export::DocumentMeta;
use lessonplan_schedule::ScheduleConfig;

use crate::config::*;

/// Parses a holiday profile name into its base rule set.
pub fn parse_holiday_profile(s: &str) -> Result<HolidayRules> {
    match s.to_lowercase().as_str() {
        "ru-2023" => Ok(HolidayRules::russia_2023()),
        "none" => Ok(HolidayRules::empty()),
        other => bail!("unknown holiday profile: {other:?}"),
    }
}

/// Builds the holiday policy: profile plus extra fixed days and periods.
pub fn build_holiday_rules(h: &HolidaysToml) -> Result<HolidayRules> {
    let mut rules = parse_holiday_profile(&h.profile)?;
    for &[month, day] in &h.fixed {
        rules = rules
            .with_fixed(month, day)
            .with_context(|| format!("invalid [holidays].fixed entry [{month}, {day}]"))?;
    }
    for period in &h.excluded {
        rules = rules
            .with_excluded_range(period.from, period.to)
            .context("invalid [holidays].excluded entry")?;
    }
    Ok(rules)
}

/// Builds a validated [`DateRange`] from the `[range]` section.
pub fn build_range(r: &RangeToml) -> Result<DateRange> {
    DateRange::new(
        r.start_year,
        r.start_month,
        r.start_day,
        r.end_year,
        r.end_month,
    )
    .context("invalid [range]")
}

/// Builds a [`WeekdaySet`] from weekday indices.
pub fn build_weekdays(indices: &[u8]) -> Result<WeekdaySet> {
    WeekdaySet::from_indices(indices).context("invalid weekdays")
}

/// Builds a [`ScheduleConfig`] from the `[schedule]` section.
pub fn build_schedule_config(s: &ScheduleToml) -> Result<ScheduleConfig> {
    let cfg = ScheduleConfig::new()
        .with_max_entries(s.max_entries)
        .with_hours_per_lesson(s.hours_per_lesson)
        .with_rollover(s.rollover);
    cfg.validate().context("invalid [schedule]")?;
    Ok(cfg)
}

/// Builds [`DocumentMeta`] from the `[document]` section.
pub fn build_document_meta(d: &DocumentToml) -> DocumentMeta {
    DocumentMeta {
        name: d.name.clone(),
        kvant_name: d.kvant_name.clone(),
        year: d.year.clone(),
        group: d.group.clone(),
        module: d.module.clone(),
        doc_name: d.doc_name.clone(),
    }
}
