//! Scheduling range with a day-precise start and a month-precise end.

use chrono::{Datelike, NaiveDate};

use crate::date::ymd;
use crate::error::CalendarError;

/// A validated scheduling range.
///
/// The range starts on a concrete date and runs through the last day of
/// `(end_year, end_month)`. The end bound has no day component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: NaiveDate,
    end_year: i32,
    end_month: u32,
}

impl DateRange {
    /// Creates a range from its five numeric components.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] or
    /// [`CalendarError::InvalidDate`] if the start is not a real date or the
    /// end month is outside 1..=12, and [`CalendarError::InvalidRange`] if
    /// `(end_year, end_month)` precedes the start month.
    pub fn new(
        start_year: i32,
        start_month: u32,
        start_day: u32,
        end_year: i32,
        end_month: u32,
    ) -> Result<Self, CalendarError> {
        let start = ymd(start_year, start_month, start_day)?;
        Self::from_start(start, end_year, end_month)
    }

    /// Creates a range from an existing start date.
    ///
    /// # Errors
    ///
    /// Same as [`DateRange::new`] for the end bound.
    pub fn from_start(
        start: NaiveDate,
        end_year: i32,
        end_month: u32,
    ) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&end_month) {
            return Err(CalendarError::InvalidMonth { month: end_month });
        }
        if (start.year(), start.month()) > (end_year, end_month) {
            return Err(CalendarError::InvalidRange {
                start_year: start.year(),
                start_month: start.month(),
                end_year,
                end_month,
            });
        }
        Ok(Self {
            start,
            end_year,
            end_month,
        })
    }

    /// Returns the first date of the range.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Returns the year of the first date.
    pub fn start_year(&self) -> i32 {
        self.start.year()
    }

    /// Returns the year of the last month.
    pub fn end_year(&self) -> i32 {
        self.end_year
    }

    /// Returns the last month (1..=12).
    pub fn end_month(&self) -> u32 {
        self.end_month
    }

    /// Returns `true` if the month of `date` lies beyond the end bound.
    ///
    /// Compares year first, then month; the day is ignored.
    pub fn is_past_end(&self, date: NaiveDate) -> bool {
        (date.year(), date.month()) > (self.end_year, self.end_month)
    }

    /// Returns `true` if the month of `date` is at or before the end bound.
    pub fn contains_month(&self, date: NaiveDate) -> bool {
        !self.is_past_end(date)
    }
}
