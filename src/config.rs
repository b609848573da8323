//! Settings for the `circa` command line tool.
//!
//! Values come from an optional TOML file and can be overridden with
//! `CIRCA_`-prefixed environment variables, nested keys separated by a
//! double underscore (`CIRCA_REPORT__FORMAT=json`). The engine itself takes
//! no configuration.

use std::path::{Path, PathBuf};

// config lets you read a separate config file
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

use crate::error::Result;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default)]
    pub report: ReportSettings,
    #[serde(default)]
    pub log: LogSettings,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportSettings {
    /// Output format of the bad date report.
    #[serde(default)]
    pub format: ReportFormat,
    /// Where to write the report, stdout when absent.
    pub output: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogSettings {
    /// Filter directive used when neither `RUST_LOG` nor `-v` is given,
    /// e.g. `circa=debug`.
    pub filter: Option<String>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Markdown,
    Json,
}

impl Settings {
    /// Loads settings from `path` (if given) and the environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }
        let settings = builder
            .add_source(
                Environment::with_prefix("CIRCA")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }

    /// Parses settings from TOML text, without consulting the environment.
    pub fn from_toml(text: &str) -> Result<Self> {
        let settings = Config::builder()
            .add_source(File::from_str(text, FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }
}
