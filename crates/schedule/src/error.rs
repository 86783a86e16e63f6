//! Error types for the lessonplan-schedule crate.

use chrono::NaiveDate;
use lessonplan_calendar::CalendarError;

/// Errors that can occur during schedule generation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScheduleError {
    /// Invalid calendar input (range, weekday or date).
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    /// Hours per lesson must be at least 1.
    #[error("hours_per_lesson must be >= 1, got {hours_per_lesson}")]
    InvalidHoursPerLesson {
        /// The invalid value.
        hours_per_lesson: u32,
    },

    /// The entry cap must be at least 1.
    #[error("max_entries must be >= 1, got {max_entries}")]
    InvalidMaxEntries {
        /// The invalid value.
        max_entries: usize,
    },

    /// The day walk ran past the last representable date.
    #[error("date walk overflowed after {date}")]
    DateOverflow {
        /// Last date reached.
        date: NaiveDate,
    },
}
