use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Lesson-date schedule generator.
#[derive(Parser)]
#[command(
    name = "lessonplan",
    version,
    about = "Generate lesson dates and schedule documents"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the generated lesson dates, one per line.
    Dates(ScheduleArgs),
    /// Print the lesson dates grouped into month columns.
    Table(TableArgs),
    /// Write the document field map for the generated dates.
    Export(ExportArgs),
}

/// Arguments shared by every subcommand.
#[derive(clap::Args)]
pub struct ScheduleArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "lessonplan.toml")]
    pub config: PathBuf,

    /// Override total course hours from config.
    #[arg(long)]
    pub hours: Option<u32>,

    /// Override teaching weekdays from config (0 = Sunday, comma separated).
    #[arg(long, value_delimiter = ',')]
    pub weekdays: Option<Vec<u8>>,
}

/// Arguments for the `table` subcommand.
#[derive(clap::Args)]
pub struct TableArgs {
    #[command(flatten)]
    pub schedule: ScheduleArgs,

    /// Emit the table grid as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `export` subcommand.
#[derive(clap::Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub schedule: ScheduleArgs,

    /// Output path (defaults to the exporter's file name).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekdays_comma_separated() {
        let cli = Cli::try_parse_from([
            "lessonplan",
            "dates",
            "--weekdays",
            "1,3",
            "--hours",
            "4",
        ])
        .unwrap();
        let Command::Dates(args) = cli.command else {
            panic!("expected dates");
        };
        assert_eq!(args.weekdays, Some(vec![1, 3]));
        assert_eq!(args.hours, Some(4));
        assert_eq!(args.config, PathBuf::from("lessonplan.toml"));
    }

    #[test]
    fn global_verbosity_after_subcommand() {
        let cli = Cli::try_parse_from(["lessonplan", "table", "--json", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
        let Command::Table(args) = cli.command else {
            panic!("expected table");
        };
        assert!(args.json);
    }

    #[test]
    fn export_output() {
        let cli = Cli::try_parse_from(["lessonplan", "export", "-o", "fields.json"]).unwrap();
        let Command::Export(args) = cli.command else {
            panic!("expected export");
        };
        assert_eq!(args.output, Some(PathBuf::from("fields.json")));
    }
}
