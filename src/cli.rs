use std::path::PathBuf;

use clap::{Parser, Subcommand};

use circa::config::ReportFormat;

/// Resolves fuzzy historical date expressions.
#[derive(Parser)]
#[command(name = "circa", version, about = "Resolves fuzzy historical date expressions")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to a TOML settings file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Resolve one expression per line and print sort, from and to dates.
    Resolve(ResolveArgs),
    /// List the values that do not resolve to a date.
    Report(ReportArgs),
}

#[derive(clap::Args)]
pub struct ResolveArgs {
    /// File with one expression per line, stdin when absent.
    pub input: Option<PathBuf>,

    /// Print one JSON object per line instead of tab separated columns.
    #[arg(long)]
    pub json: bool,
}

#[derive(clap::Args)]
pub struct ReportArgs {
    /// File with `object<TAB>field<TAB>value` lines, stdin when absent.
    pub input: Option<PathBuf>,

    /// Override the report path from the settings file.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override the report format from the settings file.
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}
