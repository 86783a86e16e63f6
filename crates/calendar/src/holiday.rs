//! Non-teaching days.
//!
//! [`HolidayCalendar`] is the policy consulted by date generation.
//! [`HolidayRules`] implements it from data: year-agnostic `(month, day)`
//! pairs plus inclusive date ranges for one-off closures.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};

use crate::error::CalendarError;

/// A policy deciding which dates are non-teaching days.
pub trait HolidayCalendar {
    /// Human-readable name of the policy.
    fn name(&self) -> &str;

    /// Returns `true` if no lesson may be scheduled on `date`.
    fn is_holiday(&self, date: NaiveDate) -> bool;
}

/// Fixed `(month, day)` holidays of the 2023 Russian production calendar.
///
/// Feb 24 and May 8 are the 2023 transfers of the Jan 1 and Jan 8 weekend
/// days; they are kept as fixed dates.
const RUSSIA_2023: &[(u32, u32)] = &[
    (1, 1),
    (1, 2),
    (1, 3),
    (1, 4),
    (1, 5),
    (1, 6),
    (1, 7),
    (1, 8),
    (2, 23),
    (2, 24),
    (3, 8),
    (5, 1),
    (5, 8),
    (5, 9),
    (6, 12),
    (11, 4),
];

/// Returns `true` for the holidays of the 2023 Russian production calendar.
///
/// Equivalent to `HolidayRules::russia_2023().is_holiday(date)` without
/// building the rule set.
pub fn is_holiday(date: NaiveDate) -> bool {
    matches!(
        (date.month(), date.day()),
        (1, 1..=8) | (2, 23 | 24) | (3, 8) | (5, 1 | 8 | 9) | (6, 12) | (11, 4)
    )
}

/// Data-driven holiday policy.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use lessonplan_calendar::{HolidayCalendar, HolidayRules};
///
/// let from = NaiveDate::from_ymd_opt(2023, 12, 25).unwrap();
/// let to = NaiveDate::from_ymd_opt(2023, 12, 30).unwrap();
/// let rules = HolidayRules::russia_2023()
///     .with_excluded_range(from, to)
///     .unwrap();
///
/// assert!(rules.is_holiday(NaiveDate::from_ymd_opt(2023, 12, 27).unwrap()));
/// assert!(!rules.is_holiday(NaiveDate::from_ymd_opt(2024, 12, 27).unwrap()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayRules {
    name: String,
    fixed: BTreeSet<(u32, u32)>,
    excluded: Vec<(NaiveDate, NaiveDate)>,
}

impl HolidayRules {
    /// Creates a rule set with no holidays.
    pub fn empty() -> Self {
        Self {
            name: "none".to_string(),
            ..Self::default()
        }
    }

    /// Creates the 2023 Russian production calendar profile.
    pub fn russia_2023() -> Self {
        Self {
            name: "ru-2023".to_string(),
            fixed: RUSSIA_2023.iter().copied().collect(),
            excluded: Vec::new(),
        }
    }

    /// Renames the rule set.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds a holiday recurring every year on `month`/`day`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] or
    /// [`CalendarError::InvalidDate`] if the pair does not exist in a leap
    /// year.
    pub fn with_fixed(mut self, month: u32, day: u32) -> Result<Self, CalendarError> {
        // Leap year so Feb 29 is accepted.
        crate::date::ymd(2000, month, day)?;
        self.fixed.insert((month, day));
        Ok(self)
    }

    /// Adds an inclusive period of non-teaching days.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidExclusion`] if `to` precedes `from`.
    pub fn with_excluded_range(
        mut self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Self, CalendarError> {
        if to < from {
            return Err(CalendarError::InvalidExclusion { from, to });
        }
        self.excluded.push((from, to));
        Ok(self)
    }
}

impl HolidayCalendar for HolidayRules {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_holiday(&self, date: NaiveDate) -> bool {
        self.fixed.contains(&(date.month(), date.day()))
            || self
                .excluded
                .iter()
                .any(|&(from, to)| from <= date && date <= to)
    }
}
