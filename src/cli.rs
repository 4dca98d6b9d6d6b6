use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "calendar-summary",
    version,
    about = "Summary of calendar events for the next seven days"
)]
pub struct Cli {
    /// Config file [default: <config dir>/calendar-summary/config.toml]
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// First day of the summary instead of the local date
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub today: Option<NaiveDate>,

    /// Read events from a JSON fixture instead of the events API
    #[arg(long, value_name = "PATH")]
    pub events_file: Option<PathBuf>,
}
