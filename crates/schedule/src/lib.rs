//! # lessonplan-schedule
//!
//! Lesson-date generation and month-table layout.
//!
//! ## Architecture
//!
//! ```text
//! generate()
//!   ├─ lesson_count()            (config.rs)
//!   ├─ primary day walk          (sequence.rs)
//!   ├─ start-year roll-over      (sequence.rs)
//!   └─ Schedule                  (result.rs)
//!
//! ScheduleTable::build()
//!   ├─ bucket by month key       (table.rs)
//!   ├─ order by academic rank    (table.rs)
//!   └─ TableGrid                 (table.rs)
//! ```
//!
//! # Quick start
//!
//! ```
//! use lessonplan_calendar::{DateRange, WeekdaySet};
//! use lessonplan_schedule::{ScheduleTable, generate_default};
//!
//! let range = DateRange::new(2023, 9, 1, 2023, 9).unwrap();
//! let fridays = WeekdaySet::from_indices(&[5]).unwrap();
//!
//! let schedule = generate_default(&range, fridays, 72).unwrap();
//! assert_eq!(schedule.len(), 5);
//! assert_eq!(schedule.entries()[0].text(), "01.09.2023");
//!
//! let table = ScheduleTable::build(schedule.entries());
//! assert_eq!(table.header(), vec!["Сентябрь"]);
//! assert_eq!(table.total(), 5);
//! ```

pub mod config;
pub mod entry;
pub mod error;
pub mod result;
pub mod sequence;
pub mod table;

pub use config::{DEFAULT_HOURS_PER_LESSON, MAX_ENTRIES, ScheduleConfig, lesson_count};
pub use entry::ScheduleEntry;
pub use error::ScheduleError;
pub use result::Schedule;
pub use sequence::{generate, generate_default};
pub use table::{MonthColumn, ScheduleTable, SummaryRow, TableGrid};
