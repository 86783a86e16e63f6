//! # lessonplan-calendar
//!
//! Teaching-day calendar primitives for lesson scheduling.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["(y, m, d, end y, end m)"] -->|"DateRange::new()"| B["DateRange"]
//!     C["weekday indices 0..=6"] -->|"WeekdaySet::from_indices()"| D["WeekdaySet"]
//!     E["NaiveDate"] -->|"HolidayCalendar::is_holiday()"| F["bool"]
//!     E -->|"format_date()"| G["DD.MM.YYYY"]
//!     H["month"] -->|"academic_rank()"| I["display rank"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use lessonplan_calendar::{
//!     DateRange, HolidayCalendar, HolidayRules, WeekdaySet, academic_rank, format_date,
//! };
//!
//! let range = DateRange::new(2023, 9, 1, 2024, 5).unwrap();
//! assert_eq!(range.start(), NaiveDate::from_ymd_opt(2023, 9, 1).unwrap());
//!
//! let fridays = WeekdaySet::from_indices(&[5]).unwrap();
//! assert!(fridays.contains_date(range.start()));
//!
//! let rules = HolidayRules::russia_2023();
//! assert!(rules.is_holiday(NaiveDate::from_ymd_opt(2024, 1, 3).unwrap()));
//!
//! assert_eq!(format_date(range.start()), "01.09.2023");
//! assert_eq!(academic_rank(9).unwrap(), 0);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `holiday` | Holiday policy trait and rule-based implementation |
//! | `range` | Validated scheduling range with month-granular end |
//! | `weekday` | Set of teaching weekdays |
//! | `date` | Date construction, formatting and month names |
//! | `academic` | Academic-year month ordering |
//! | `error` | Error types |

mod academic;
mod date;
mod error;
mod holiday;
mod range;
mod weekday;

pub use academic::academic_rank;
pub use date::{format_date, month_name, ymd};
pub use error::CalendarError;
pub use holiday::{HolidayCalendar, HolidayRules, is_holiday};
pub use range::DateRange;
pub use weekday::WeekdaySet;
