//! A single scheduled lesson date.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use lessonplan_calendar::format_date;

/// A lesson date together with its `DD.MM.YYYY` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ScheduleEntry {
    date: NaiveDate,
    text: String,
}

impl ScheduleEntry {
    /// Creates an entry for `date`.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            text: format_date(date),
        }
    }

    /// Returns the date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the formatted `DD.MM.YYYY` text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the `MM` field of the formatted text.
    pub fn month_key(&self) -> &str {
        &self.text[3..5]
    }

    /// Returns the month number (1..=12).
    pub fn month(&self) -> u32 {
        self.date.month()
    }
}
