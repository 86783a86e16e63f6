//! Set of teaching weekdays.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::CalendarError;

/// A set of weekdays, indexed 0..=6 with 0 = Sunday.
///
/// # Example
///
/// ```
/// use chrono::Weekday;
/// use lessonplan_calendar::WeekdaySet;
///
/// let set = WeekdaySet::from_indices(&[2, 5]).unwrap();
/// assert!(set.contains(Weekday::Tue));
/// assert!(set.contains(Weekday::Fri));
/// assert!(!set.contains(Weekday::Mon));
/// assert_eq!(set.indices(), vec![2, 5]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct WeekdaySet {
    bits: u8,
}

impl WeekdaySet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// Builds a set from weekday indices (0 = Sunday … 6 = Saturday).
    ///
    /// Duplicates are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidWeekday`] for any index above 6.
    pub fn from_indices(indices: &[u8]) -> Result<Self, CalendarError> {
        let mut set = Self::EMPTY;
        for &index in indices {
            if index > 6 {
                return Err(CalendarError::InvalidWeekday { index });
            }
            set.bits |= 1 << index;
        }
        Ok(set)
    }

    /// Adds a weekday to the set.
    pub fn insert(&mut self, weekday: Weekday) {
        self.bits |= 1 << weekday.num_days_from_sunday();
    }

    /// Returns `true` if `weekday` is in the set.
    pub fn contains(&self, weekday: Weekday) -> bool {
        self.bits & (1 << weekday.num_days_from_sunday()) != 0
    }

    /// Returns `true` if the weekday of `date` is in the set.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        self.contains(date.weekday())
    }

    /// Returns `true` if no weekday is selected.
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Returns the number of selected weekdays.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns the selected indices in ascending order.
    pub fn indices(&self) -> Vec<u8> {
        (0..7u8).filter(|&i| self.bits & (1 << i) != 0).collect()
    }
}

impl FromIterator<Weekday> for WeekdaySet {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for weekday in iter {
            set.insert(weekday);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty() {
        let set = WeekdaySet::from_indices(&[]).unwrap();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set, WeekdaySet::EMPTY);
        assert_eq!(set, WeekdaySet::default());
    }

    #[test]
    fn sunday_is_zero() {
        let set = WeekdaySet::from_indices(&[0]).unwrap();
        assert!(set.contains(Weekday::Sun));
        assert!(!set.contains(Weekday::Mon));
        assert!(!set.contains(Weekday::Sat));
    }

    #[test]
    fn saturday_is_six() {
        let set = WeekdaySet::from_indices(&[6]).unwrap();
        assert!(set.contains(Weekday::Sat));
    }

    #[test]
    fn duplicates_ignored() {
        let set = WeekdaySet::from_indices(&[5, 5, 1]).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.indices(), vec![1, 5]);
    }

    #[test]
    fn invalid_index() {
        assert_eq!(
            WeekdaySet::from_indices(&[1, 7]).unwrap_err(),
            CalendarError::InvalidWeekday { index: 7 }
        );
    }

    #[test]
    fn contains_date() {
        // 2023-09-01 was a Friday.
        let date = NaiveDate::from_ymd_opt(2023, 9, 1).unwrap();
        assert!(WeekdaySet::from_indices(&[5]).unwrap().contains_date(date));
        assert!(!WeekdaySet::from_indices(&[4]).unwrap().contains_date(date));
    }

    #[test]
    fn from_iterator() {
        let set: WeekdaySet = [Weekday::Mon, Weekday::Wed].into_iter().collect();
        assert_eq!(set.indices(), vec![1, 3]);
    }

    #[test]
    fn all_days() {
        let set = WeekdaySet::from_indices(&[0, 1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(set.len(), 7);
    }
}
