//! Academic-year month ordering.

use crate::error::CalendarError;

/// Display rank per month, January first. Rank 4 is never assigned.
const ACADEMIC_RANK: [u8; 12] = [5, 6, 7, 8, 9, 10, 11, 12, 0, 1, 2, 3];

/// Returns the display rank of a month in academic order.
///
/// September ranks 0 and December 3; January continues at 5 through August
/// at 12. Ranks only order months, so the unused value 4 has no effect on
/// sorting.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is outside 1..=12.
///
/// # Examples
///
/// ```
/// use lessonplan_calendar::academic_rank;
///
/// assert_eq!(academic_rank(9).unwrap(), 0);
/// assert_eq!(academic_rank(12).unwrap(), 3);
/// assert_eq!(academic_rank(1).unwrap(), 5);
/// assert_eq!(academic_rank(8).unwrap(), 12);
/// ```
pub fn academic_rank(month: u32) -> Result<u8, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    Ok(ACADEMIC_RANK[(month - 1) as usize])
}
