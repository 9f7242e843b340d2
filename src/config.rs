use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Csv,
    Gpx,
}

impl OutputFormat {
    fn default_file_name(self) -> &'static str {
        match self {
            OutputFormat::Csv => "out.csv",
            OutputFormat::Gpx => "out.gpx",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Gpx => write!(f, "gpx"),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub pictures_directory: String,
    pub output_format: OutputFormat,
    pub output_path: Option<String>,
    pub log_level: String,
    pub waypoint_names: bool,
}

/// Values given on the command line; they win over every other source.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub pictures_directory: Option<String>,
    pub output_format: Option<OutputFormat>,
    pub output_path: Option<String>,
    pub log_level: Option<String>,
    pub waypoint_names: Option<bool>,
}

impl AppConfig {
    pub fn load(overrides: Overrides) -> Result<Self, ConfigError> {
        let env = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let mut builder = Config::builder()
            .set_default("pictures_directory", "pictures")?
            .set_default("output_format", "csv")?
            .set_default("log_level", "info")?
            .set_default("waypoint_names", true)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(Environment::with_prefix("GEOTAG").try_parsing(true));

        if let Some(dir) = overrides.pictures_directory {
            builder = builder.set_override("pictures_directory", dir)?;
        }
        if let Some(format) = overrides.output_format {
            builder = builder.set_override("output_format", format.to_string())?;
        }
        if let Some(path) = overrides.output_path {
            builder = builder.set_override("output_path", path)?;
        }
        if let Some(level) = overrides.log_level {
            builder = builder.set_override("log_level", level)?;
        }
        if let Some(names) = overrides.waypoint_names {
            builder = builder.set_override("waypoint_names", names)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Output file, falling back to `out.csv` / `out.gpx` in the working directory.
    pub fn resolved_output_path(&self) -> PathBuf {
        match &self.output_path {
            Some(path) => PathBuf::from(path),
            None => PathBuf::from(self.output_format.default_file_name()),
        }
    }
}
