//! Bad date report.
//!
//! Runs a batch of stored date values through the engine and lists those
//! that do not resolve to a sort date, so they can be corrected by hand.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info};

use crate::config::ReportFormat;
use crate::error::Result;
use crate::parser::parse_date;

/// One stored date value and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRecord {
    pub object: String,
    pub field: String,
    pub value: String,
}

impl DateRecord {
    pub fn new(object: impl Into<String>, field: impl Into<String>, value: impl Into<String>) -> Self {
        Self { object: object.into(), field: field.into(), value: value.into() }
    }

    /// Reads a tab separated line: `object<TAB>field<TAB>value`,
    /// `object<TAB>value` or a bare value. Missing labels fall back to the
    /// line number and `date`.
    pub fn from_line(line_number: usize, line: &str) -> Self {
        let columns: Vec<&str> = line.split('\t').collect();
        match columns.as_slice() {
            [object, field, value, ..] => Self::new(*object, *field, *value),
            [object, value] => Self::new(*object, "date", *value),
            _ => Self::new(format!("line {line_number}"), "date", line),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BadDate {
    pub object: String,
    pub field: String,
    pub value: String,
    pub reason: String,
}

#[derive(Debug, Default, Serialize)]
pub struct BadDateReport {
    /// Number of non-empty values checked.
    pub checked: usize,
    pub bad_dates: Vec<BadDate>,
}

impl BadDateReport {
    /// Resolves every non-empty value. A value is bad when it fails to parse
    /// or when it parses without producing a sort date (BC dates).
    pub fn collect<I>(records: I) -> Self
    where
        I: IntoIterator<Item = DateRecord>,
    {
        let mut report = Self::default();
        for record in records {
            if record.value.trim().is_empty() {
                continue;
            }
            report.checked += 1;
            let reason = match parse_date(&record.value) {
                Ok(interval) if interval.sort_date.is_some() => continue,
                Ok(_) => "resolves to no date".to_string(),
                Err(e) => e.to_string(),
            };
            debug!(object = %record.object, field = %record.field, value = %record.value, %reason, "bad date");
            report.bad_dates.push(BadDate {
                object: record.object,
                field: record.field,
                value: record.value,
                reason,
            });
        }
        info!(checked = report.checked, bad = report.bad_dates.len(), "date report complete");
        report
    }

    pub fn is_clean(&self) -> bool {
        self.bad_dates.is_empty()
    }

    pub fn summary(&self) -> String {
        if self.is_clean() {
            "No bad dates found.".to_string()
        } else {
            format!("{} bad dates found.", self.bad_dates.len())
        }
    }

    pub fn to_markdown(&self) -> String {
        let mut table = String::from("| object | field | value | reason |\n|:--|:--|:--|:--|\n");
        for bad in &self.bad_dates {
            table.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                cell(&bad.object),
                cell(&bad.field),
                cell(&bad.value),
                cell(&bad.reason)
            ));
        }
        table
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write<W: Write>(&self, format: ReportFormat, mut writer: W) -> Result<()> {
        match format {
            ReportFormat::Markdown => writer.write_all(self.to_markdown().as_bytes())?,
            ReportFormat::Json => writeln!(writer, "{}", self.to_json()?)?,
        }
        writer.flush()?;
        Ok(())
    }
}

// ------------- Delivery -------------
/// Where a report is written. A path given on the command line wins over
/// the one from the settings file; without either the report goes to
/// stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination<'a> {
    File(&'a Path),
    Stdout,
}

impl<'a> Destination<'a> {
    pub fn choose(flag: Option<&'a Path>, configured: Option<&'a Path>) -> Self {
        flag.or(configured).map_or(Destination::Stdout, Destination::File)
    }
}

impl BadDateReport {
    /// Writes the report to `destination` and returns the line to show the
    /// user afterwards. A file report points at the file.
    pub fn deliver(&self, format: ReportFormat, destination: Destination) -> Result<String> {
        match destination {
            Destination::File(path) => {
                self.write(format, BufWriter::new(File::create(path)?))?;
                info!(path = %path.display(), "report written");
                Ok(if self.is_clean() {
                    self.summary()
                } else {
                    format!("{} See {} for details.", self.summary(), path.display())
                })
            }
            Destination::Stdout => {
                self.write(format, io::stdout().lock())?;
                Ok(self.summary())
            }
        }
    }
}

fn cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}
