//! Entry point of the engine: classifies the overall shape of a date
//! expression (range, open range, qualified or single date) and assembles
//! the resulting [`DateInterval`].
//!
//! ```
//! use circa::parse_date;
//! let (sort, from, to) = parse_date("not before 7c").unwrap().tuple();
//! assert_eq!(from.unwrap().to_string(), "0600-01-01");
//! assert_eq!(sort, from);
//! assert!(to.is_none());
//! ```

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use std::str::FromStr;
use tracing::{debug, warn};

use crate::error::{DateError, Result};
use crate::interval::DateInterval;
use crate::resolve::resolve;

lazy_static! {
    static ref TAG: Regex = Regex::new(r"<[^>]*>").unwrap();
    static ref QUALIFIER: Regex = Regex::new(r"\b(not\s+before|not\s+after|before|after)\s+").unwrap();
}

// stray kasra marks left over from transliterated input, longest first
const ARTIFACTS: [&str; 2] = [" \u{650}\u{650}", " \u{650}"];

const RANGE_SEPARATOR: &str = " - ";

// ------------- Qualifiers -------------
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeQualifier {
    Before,
    After,
    NotBefore,
    NotAfter,
}

impl RangeQualifier {
    fn from_keyword(keyword: &str) -> Self {
        let words: Vec<&str> = keyword.split_whitespace().collect();
        match words.as_slice() {
            ["not", "before"] => Self::NotBefore,
            ["not", "after"] => Self::NotAfter,
            ["before"] => Self::Before,
            _ => Self::After,
        }
    }

    /// Folds the interval of the qualified date into the bounds collected
    /// so far.
    fn apply(&self, x: &DateInterval, from: &mut Option<NaiveDate>, to: &mut Option<NaiveDate>) -> Result<()> {
        match self {
            Self::NotAfter => *to = x.to_date,
            Self::NotBefore => *from = x.from_date,
            Self::After => *from = shift(x.to_date, NaiveDate::succ_opt)?,
            Self::Before => *to = shift(x.from_date, NaiveDate::pred_opt)?,
        }
        Ok(())
    }
}

fn shift(date: Option<NaiveDate>, step: fn(&NaiveDate) -> Option<NaiveDate>) -> Result<Option<NaiveDate>> {
    match date {
        Some(d) => step(&d)
            .map(Some)
            .ok_or_else(|| DateError::malformed(&d.to_string(), "no neighbouring day")),
        None => Ok(None),
    }
}

// ------------- Shape -------------
/// The structural reading of a normalized expression. Decided once, before
/// any date is resolved.
#[derive(Debug, PartialEq, Eq)]
enum Shape<'a> {
    /// `A - B`
    Range(&'a str, &'a str),
    /// `A -`
    OpenEnd(&'a str),
    /// `- B`
    OpenStart(&'a str),
    /// `before A`, `not after B`, ...
    Qualified(Vec<(RangeQualifier, &'a str)>),
    Single(&'a str),
}

impl<'a> Shape<'a> {
    fn of(text: &'a str) -> Self {
        if text.contains(RANGE_SEPARATOR) {
            let mut operands = text.split(RANGE_SEPARATOR);
            let from = operands.next().unwrap_or_default();
            let to = operands.next().unwrap_or_default();
            if operands.next().is_some() {
                debug!(input = text, "ignoring operands after the second one");
            }
            return Shape::Range(from, to);
        }
        if let Some(rest) = text.strip_suffix('-') {
            return Shape::OpenEnd(rest);
        }
        if let Some(rest) = text.strip_prefix('-') {
            return Shape::OpenStart(rest);
        }
        let qualifiers = qualifiers(text);
        if qualifiers.is_empty() {
            Shape::Single(text)
        } else {
            Shape::Qualified(qualifiers)
        }
    }
}

// Each qualifier governs the text up to the next qualifier keyword. Only the
// first occurrence of each kind is kept.
fn qualifiers(text: &str) -> Vec<(RangeQualifier, &str)> {
    let found: Vec<regex::Captures> = QUALIFIER.captures_iter(text).collect();
    let mut qualifiers: Vec<(RangeQualifier, &str)> = Vec::new();
    for (i, captures) in found.iter().enumerate() {
        let (Some(keyword), Some(whole)) = (captures.get(1), captures.get(0)) else {
            continue;
        };
        let end = found.get(i + 1).and_then(|next| next.get(0)).map_or(text.len(), |m| m.start());
        let qualifier = RangeQualifier::from_keyword(keyword.as_str());
        if qualifiers.iter().any(|(seen, _)| *seen == qualifier) {
            debug!(input = text, ?qualifier, "ignoring repeated qualifier");
            continue;
        }
        qualifiers.push((qualifier, trim_connector(&text[whole.end()..end])));
    }
    qualifiers
}

// "after 1800 and before 1900", "after 1800, before 1900"
fn trim_connector(operand: &str) -> &str {
    let operand = operand.trim().trim_end_matches(',').trim_end();
    operand.strip_suffix(" and").unwrap_or(operand).trim()
}

// ------------- Parsing -------------
/// Lowercases the input and removes decorations that carry no date
/// information: dots, markup tags and stray diacritics.
pub fn normalize(raw: &str) -> String {
    let mut text = raw.to_lowercase().replace('.', "");
    text = TAG.replace_all(&text, "").into_owned();
    for artifact in ARTIFACTS {
        text = text.replace(artifact, "");
    }
    text.trim().to_string()
}

/// Resolves a free-text date expression.
///
/// Failures are logged together with the original input and returned;
/// nothing is silently turned into an empty interval. BC dates are the
/// exception: they are recognised and come back unresolved.
pub fn parse_date(raw: &str) -> Result<DateInterval> {
    let text = normalize(raw);
    parse_normalized(&text).inspect_err(|e| {
        warn!(input = raw, normalized = %text, error = %e, "could not parse date");
    })
}

/// Like [`parse_date`] but never fails: anything unparseable resolves to
/// an interval without bounds. Meant for bulk imports that keep the raw
/// text for later review.
pub fn try_parse_date(raw: &str) -> DateInterval {
    parse_date(raw).unwrap_or_default()
}

fn parse_normalized(text: &str) -> Result<DateInterval> {
    if text.is_empty() {
        return Err(DateError::EmptyOrWhitespaceInput);
    }
    let shape = Shape::of(text);
    debug!(input = text, ?shape, "classified expression");
    let interval = match shape {
        Shape::Range(from, to) => {
            DateInterval::range(operand(from)?.from_date, operand(to)?.to_date)?
        }
        Shape::OpenEnd(from) => DateInterval::starting(operand(from)?.from_date),
        Shape::OpenStart(to) => DateInterval::ending(operand(to)?.to_date),
        Shape::Qualified(qualifiers) => {
            let (mut from, mut to) = (None, None);
            for (qualifier, date) in qualifiers {
                qualifier.apply(&operand(date)?, &mut from, &mut to)?;
            }
            DateInterval::range(from, to)?
        }
        Shape::Single(date) => operand(date)?,
    };
    Ok(interval.with_default_sort())
}

// A single date in any position. BC dates are left unresolved.
fn operand(text: &str) -> Result<DateInterval> {
    let text = text.trim();
    if text.is_empty() {
        return Err(DateError::EmptyOrWhitespaceInput);
    }
    match resolve(text) {
        Err(DateError::UnsupportedEra { input }) => {
            debug!(input = %input, "leaving BC date unresolved");
            Ok(DateInterval::unresolved())
        }
        other => other,
    }
}

impl FromStr for DateInterval {
    type Err = DateError;
    fn from_str(s: &str) -> Result<Self> {
        parse_date(s)
    }
}
