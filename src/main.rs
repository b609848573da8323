mod cli;
mod logging;

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::process;

use clap::Parser;
use serde::Serialize;

use circa::config::Settings;
use circa::report::{BadDateReport, DateRecord, Destination};
use circa::{DateInterval, Result, parse_date};

use crate::cli::{Cli, Command, ReportArgs, ResolveArgs};

fn main() {
    let cli = Cli::parse();
    let settings = match Settings::load(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(2);
        }
    };
    logging::init(cli.verbose, settings.log.filter.as_deref());

    let outcome = match cli.command {
        Command::Resolve(args) => resolve(args),
        Command::Report(args) => report(args, &settings),
    };
    if let Err(e) = outcome {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    Ok(match path {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin())),
    })
}

#[derive(Serialize)]
struct Resolved<'a> {
    input: &'a str,
    #[serde(flatten)]
    interval: Option<DateInterval>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn resolve(args: ResolveArgs) -> Result<()> {
    let input = open_input(args.input.as_deref())?;
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for line in input.lines() {
        let line = line?;
        let expression = line.trim();
        if expression.is_empty() {
            continue;
        }
        let parsed = parse_date(expression);
        if args.json {
            let resolved = match &parsed {
                Ok(interval) => Resolved { input: expression, interval: Some(*interval), error: None },
                Err(e) => Resolved { input: expression, interval: None, error: Some(e.to_string()) },
            };
            writeln!(out, "{}", serde_json::to_string(&resolved)?)?;
        } else {
            match parsed {
                Ok(interval) => {
                    let show = |d: Option<chrono::NaiveDate>| d.map(|d| d.to_string()).unwrap_or_default();
                    writeln!(
                        out,
                        "{expression}\t{}\t{}\t{}",
                        show(interval.sort_date),
                        show(interval.from_date),
                        show(interval.to_date)
                    )?;
                }
                Err(e) => writeln!(out, "{expression}\terror: {e}")?,
            }
        }
    }
    out.flush()?;
    Ok(())
}

fn report(args: ReportArgs, settings: &Settings) -> Result<()> {
    let input = open_input(args.input.as_deref())?;
    let mut records = Vec::new();
    for (i, line) in input.lines().enumerate() {
        records.push(DateRecord::from_line(i + 1, &line?));
    }
    let report = BadDateReport::collect(records);

    let format = args.format.unwrap_or(settings.report.format);
    let destination = Destination::choose(args.output.as_deref(), settings.report.output.as_deref());
    let notice = report.deliver(format, destination)?;
    // stdout carries the report itself unless it went to a file
    match destination {
        Destination::File(_) => println!("{notice}"),
        Destination::Stdout => eprintln!("{notice}"),
    }
    Ok(())
}
