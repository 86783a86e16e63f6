//! Error types for the lessonplan-calendar crate.

use chrono::NaiveDate;

/// Error type for all fallible operations in the lessonplan-calendar crate.
///
/// Covers validation of month numbers, calendar dates, weekday indices and
/// the ordering of range bounds.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u32,
    },

    /// Returned when a year/month/day triple is not a real calendar date.
    #[error("invalid date: {year:04}-{month:02}-{day:02}")]
    InvalidDate {
        /// Year component.
        year: i32,
        /// Month component.
        month: u32,
        /// Day component.
        day: u32,
    },

    /// Returned when a weekday index is outside 0..=6 (0 = Sunday).
    #[error("invalid weekday index: {index} (must be 0..=6, 0 = Sunday)")]
    InvalidWeekday {
        /// The invalid index that was provided.
        index: u8,
    },

    /// Returned when the end of a range precedes its start.
    #[error(
        "invalid range: end {end_year:04}-{end_month:02} precedes start {start_year:04}-{start_month:02}"
    )]
    InvalidRange {
        /// Start year.
        start_year: i32,
        /// Start month.
        start_month: u32,
        /// End year.
        end_year: i32,
        /// End month.
        end_month: u32,
    },

    /// Returned when an excluded holiday period ends before it starts.
    #[error("invalid excluded period: {to} precedes {from}")]
    InvalidExclusion {
        /// First day of the period.
        from: NaiveDate,
        /// Last day of the period.
        to: NaiveDate,
    },
}
