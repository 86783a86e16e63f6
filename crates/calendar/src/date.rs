//! Date construction, formatting and month names.

use chrono::NaiveDate;

use crate::error::CalendarError;

/// Month names used for table headers, January first.
const MONTH_NAMES: [&str; 12] = [
    "Январь",
    "Февраль",
    "Март",
    "Апрель",
    "Май",
    "Июнь",
    "Июль",
    "Август",
    "Сентябрь",
    "Октябрь",
    "Ноябрь",
    "Декабрь",
];

/// Builds a [`NaiveDate`] from year, month and day.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is outside 1..=12, or
/// [`CalendarError::InvalidDate`] if `day` does not exist in that month.
pub fn ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(CalendarError::InvalidDate { year, month, day })
}

/// Formats a date as `DD.MM.YYYY` with zero-padded day and month.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Returns the display name of a month (1..=12).
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is outside 1..=12.
pub fn month_name(month: u32) -> Result<&'static str, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    Ok(MONTH_NAMES[(month - 1) as usize])
}
