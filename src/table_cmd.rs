//! Table command: print lesson dates grouped by month.

use anyhow::{Context, Result};
use tracing::info_span;

use lessonplan_schedule::{ScheduleTable, TableGrid};

use crate::cli::TableArgs;
use crate::plan::Plan;

/// Minimum column width; fits a `DD.MM.YYYY` cell.
const MIN_WIDTH: usize = 10;

/// Print the month table as text or JSON.
pub fn run(args: TableArgs) -> Result<()> {
    let _cmd = info_span!("table").entered();
    let plan = Plan::load(&args.schedule)?;
    let schedule = plan.generate()?;
    let grid = ScheduleTable::build(schedule.entries()).to_grid();

    if args.json {
        let json = serde_json::to_string_pretty(&grid).context("failed to serialize table")?;
        println!("{json}");
    } else {
        print!("{}", render_text(&grid));
    }
    Ok(())
}

/// Renders the grid as aligned text columns followed by the summary line.
fn render_text(grid: &TableGrid) -> String {
    let widths: Vec<usize> = grid
        .header
        .iter()
        .map(|h| h.chars().count().max(MIN_WIDTH))
        .collect();

    let mut out = String::new();
    let mut push_row = |cells: &[String]| {
        let line = cells
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| format!("{cell:<w$}"))
            .collect::<Vec<_>>()
            .join(" | ");
        out.push_str(line.trim_end());
        out.push('\n');
    };
    if !grid.header.is_empty() {
        push_row(grid.header.as_slice());
        for row in &grid.rows {
            push_row(row.as_slice());
        }
    }
    out.push_str(&grid.summary.text);
    out.push('\n');
    out
}
