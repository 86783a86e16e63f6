//! Configuration for lesson-date generation.

use crate::error::ScheduleError;

/// Upper bound on the number of generated dates.
pub const MAX_ENTRIES: usize = 36;

/// Length of one lesson in academic hours.
pub const DEFAULT_HOURS_PER_LESSON: u32 = 2;

/// Number of lessons to schedule for `hours`, capped at `max`.
///
/// # Example
///
/// ```
/// use lessonplan_schedule::lesson_count;
///
/// assert_eq!(lesson_count(72, 2, 36), 36);
/// assert_eq!(lesson_count(144, 2, 36), 36);
/// assert_eq!(lesson_count(7, 2, 36), 3);
/// ```
pub fn lesson_count(hours: u32, hours_per_lesson: u32, max: usize) -> usize {
    if hours_per_lesson == 0 {
        return 0;
    }
    ((hours / hours_per_lesson) as usize).min(max)
}

/// Configuration for [`generate`](crate::generate).
///
/// # Example
///
/// ```
/// use lessonplan_schedule::ScheduleConfig;
///
/// let config = ScheduleConfig::new().with_max_entries(24).with_rollover(false);
/// assert_eq!(config.max_entries(), 24);
/// assert!(!config.rollover());
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleConfig {
    max_entries: usize,
    hours_per_lesson: u32,
    rollover: bool,
}

impl ScheduleConfig {
    /// Creates the default configuration: 36 entries, 2 hours per lesson,
    /// roll-over enabled.
    pub fn new() -> Self {
        Self {
            max_entries: MAX_ENTRIES,
            hours_per_lesson: DEFAULT_HOURS_PER_LESSON,
            rollover: true,
        }
    }

    /// Sets the cap on generated entries.
    pub fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = max_entries;
        self
    }

    /// Sets the number of hours one lesson covers.
    pub fn with_hours_per_lesson(mut self, hours_per_lesson: u32) -> Self {
        self.hours_per_lesson = hours_per_lesson;
        self
    }

    /// Enables or disables the roll-over scan.
    pub fn with_rollover(mut self, rollover: bool) -> Self {
        self.rollover = rollover;
        self
    }

    /// Returns the cap on generated entries.
    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Returns the number of hours one lesson covers.
    pub fn hours_per_lesson(&self) -> u32 {
        self.hours_per_lesson
    }

    /// Returns whether the roll-over scan is enabled.
    pub fn rollover(&self) -> bool {
        self.rollover
    }

    /// Validates this configuration.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        if self.hours_per_lesson == 0 {
            return Err(ScheduleError::InvalidHoursPerLesson {
                hours_per_lesson: self.hours_per_lesson,
            });
        }
        if self.max_entries == 0 {
            return Err(ScheduleError::InvalidMaxEntries {
                max_entries: self.max_entries,
            });
        }
        Ok(())
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ScheduleConfig::default();
        assert_eq!(config.max_entries(), 36);
        assert_eq!(config.hours_per_lesson(), 2);
        assert!(config.rollover());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn lesson_count_floors() {
        assert_eq!(lesson_count(0, 2, 36), 0);
        assert_eq!(lesson_count(1, 2, 36), 0);
        assert_eq!(lesson_count(3, 2, 36), 1);
        assert_eq!(lesson_count(10, 2, 36), 5);
    }

    #[test]
    fn lesson_count_caps() {
        assert_eq!(lesson_count(72, 2, 36), 36);
        assert_eq!(lesson_count(74, 2, 36), 36);
        assert_eq!(lesson_count(1000, 2, 36), 36);
        assert_eq!(lesson_count(72, 2, 10), 10);
    }

    #[test]
    fn lesson_count_zero_hours_per_lesson() {
        assert_eq!(lesson_count(72, 0, 36), 0);
    }

    #[test]
    fn validate_rejects_zero_hours_per_lesson() {
        let config = ScheduleConfig::new().with_hours_per_lesson(0);
        assert_eq!(
            config.validate().unwrap_err(),
            ScheduleError::InvalidHoursPerLesson {
                hours_per_lesson: 0
            }
        );
    }

    #[test]
    fn validate_rejects_zero_max_entries() {
        let config = ScheduleConfig::new().with_max_entries(0);
        assert_eq!(
            config.validate().unwrap_err(),
            ScheduleError::InvalidMaxEntries { max_entries: 0 }
        );
    }
}
