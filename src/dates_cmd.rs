//! Dates command: print generated lesson dates.

use anyhow::Result;
use tracing::info_span;

use crate::cli::ScheduleArgs;
use crate::plan::Plan;

/// Print one `DD.MM.YYYY` date per line.
pub fn run(args: ScheduleArgs) -> Result<()> {
    let _cmd = info_span!("dates").entered();
    let plan = Plan::load(&args)?;
    let schedule = plan.generate()?;
    for entry in schedule.entries() {
        println!("{}", entry.text());
    }
    Ok(())
}
