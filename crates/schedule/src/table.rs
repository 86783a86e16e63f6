//! Month table layout for generated lesson dates.
//!
//! Dates are bucketed by their `MM` field, the present months are ordered
//! by academic rank (September first), and row `r` holds the `r`-th date of
//! every month column.

use std::collections::BTreeMap;

use serde::Serialize;

use lessonplan_calendar::{academic_rank, month_name};

use crate::entry::ScheduleEntry;

/// One month column of a [`ScheduleTable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthColumn {
    month: u32,
    name: &'static str,
    entries: Vec<ScheduleEntry>,
}

impl MonthColumn {
    /// Month number (1..=12).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Header name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Entries of this month in generation order.
    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }
}

/// Trailing row spanning all columns with the lesson total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    pub total: usize,
    pub span: usize,
    pub text: String,
}

/// Plain data grid of a [`ScheduleTable`]; empty cells are empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableGrid {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub summary: SummaryRow,
}

/// Lesson dates grouped into month columns in academic order.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use lessonplan_schedule::{ScheduleEntry, ScheduleTable};
///
/// let entries: Vec<ScheduleEntry> = [(2024, 1, 12), (2023, 12, 1), (2023, 12, 8)]
///     .iter()
///     .map(|&(y, m, d)| ScheduleEntry::new(NaiveDate::from_ymd_opt(y, m, d).unwrap()))
///     .collect();
///
/// let table = ScheduleTable::build(&entries);
/// assert_eq!(table.header(), vec!["Декабрь", "Январь"]);
/// assert_eq!(table.n_rows(), 2);
/// assert_eq!(table.total(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleTable {
    columns: Vec<MonthColumn>,
    total: usize,
}

impl ScheduleTable {
    /// Builds the table from entries in generation order.
    pub fn build(entries: &[ScheduleEntry]) -> Self {
        let mut buckets: BTreeMap<&str, Vec<ScheduleEntry>> = BTreeMap::new();
        for entry in entries {
            buckets
                .entry(entry.month_key())
                .or_default()
                .push(entry.clone());
        }

        let mut columns: Vec<(u8, MonthColumn)> = buckets
            .into_values()
            .filter_map(|entries| {
                let month = entries.first()?.month();
                let rank = academic_rank(month).ok()?;
                let name = month_name(month).ok()?;
                Some((
                    rank,
                    MonthColumn {
                        month,
                        name,
                        entries,
                    },
                ))
            })
            .collect();
        columns.sort_by_key(|(rank, _)| *rank);

        Self {
            columns: columns.into_iter().map(|(_, column)| column).collect(),
            total: entries.len(),
        }
    }

    /// Month columns in academic order.
    pub fn columns(&self) -> &[MonthColumn] {
        &self.columns
    }

    /// Header row: month names in academic order.
    pub fn header(&self) -> Vec<&'static str> {
        self.columns.iter().map(MonthColumn::name).collect()
    }

    /// Number of data rows (size of the largest month).
    pub fn n_rows(&self) -> usize {
        self.columns
            .iter()
            .map(|c| c.entries.len())
            .max()
            .unwrap_or(0)
    }

    /// Data rows; a cell is `None` where a month has fewer dates.
    pub fn rows(&self) -> Vec<Vec<Option<&ScheduleEntry>>> {
        (0..self.n_rows())
            .map(|r| self.columns.iter().map(|c| c.entries.get(r)).collect())
            .collect()
    }

    /// Total number of lesson dates.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Summary row for the table footer.
    pub fn summary(&self) -> SummaryRow {
        SummaryRow {
            total: self.total,
            span: self.columns.len(),
            text: format!("Всего: {} занятий", self.total),
        }
    }

    /// Converts the table to a serializable grid of strings.
    pub fn to_grid(&self) -> TableGrid {
        TableGrid {
            header: self.header().into_iter().map(str::to_string).collect(),
            rows: self
                .rows()
                .into_iter()
                .map(|row| {
                    row.into_iter()
                        .map(|cell| cell.map(|e| e.text().to_string()).unwrap_or_default())
                        .collect()
                })
                .collect(),
            summary: self.summary(),
        }
    }
}
