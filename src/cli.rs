use crate::config::{OutputFormat, Overrides};
use clap::Parser;

/// Collect the unique GPS locations of a picture directory into a CSV or GPX file.
#[derive(Debug, Parser)]
#[command(name = "geotag_export", version, about)]
pub struct Args {
    /// Directory to scan (not recursive)
    #[arg(short, long)]
    pub dir: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file, overwritten if it exists
    #[arg(short, long)]
    pub output: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Leave the file name out of GPX waypoints
    #[arg(long)]
    pub no_waypoint_names: bool,
}

impl Args {
    pub fn overrides(self) -> Overrides {
        Overrides {
            pictures_directory: self.dir,
            output_format: self.format,
            output_path: self.output,
            log_level: self.log_level,
            waypoint_names: self.no_waypoint_names.then_some(false),
        }
    }
}
