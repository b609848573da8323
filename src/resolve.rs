//! Resolution of a single date expression into the interval its precision
//! implies: a century, a year, a month or a day, in either the Gregorian or
//! the Hijri calendar.

// used for all bounds of an interval
use chrono::NaiveDate;
use tracing::debug;

use crate::approximate::ApproximationPrefix;
use crate::calendar::{days_in_month, hijri_to_gregorian, last_day_of_hijri_month, last_day_of_hijri_year};
use crate::error::{DateError, Result};
use crate::interval::{number, DateInterval, PartialDate};

// ------------- Era -------------
/// The calendar or epoch a single date is written in, read off its suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Era {
    Gregorian,
    GregorianCE,
    GregorianAD,
    GregorianBC,
    Century,
    HijriAH,
    HijriBH,
    HijriCentury,
}

impl Era {
    /// Detects the era of a normalized single date and returns it together
    /// with the date stripped of its suffix. Hijri suffixes are checked
    /// first, then `bc`/`bce` ahead of `ce`, then `ad`, and a trailing `c`
    /// last.
    pub fn classify(text: &str) -> (Era, &str) {
        let text = text.trim();
        if let Some(body) = strip(text, "ah") {
            return match strip(body, "c") {
                Some(century) => (Era::HijriCentury, century),
                None => (Era::HijriAH, body),
            };
        }
        if let Some(body) = strip(text, "bh") {
            return (Era::HijriBH, body);
        }
        if let Some(body) = strip(text, "bce").or_else(|| strip(text, "bc")) {
            return (Era::GregorianBC, body);
        }
        let (era, body) = if let Some(body) = strip(text, "ce") {
            (Era::GregorianCE, body)
        } else if let Some(body) = strip(text, "ad") {
            (Era::GregorianAD, body)
        } else {
            (Era::Gregorian, text)
        };
        match strip(body, "c") {
            Some(century) => (Era::Century, century),
            None => (era, body),
        }
    }

    pub fn is_century(&self) -> bool {
        matches!(self, Era::Century | Era::HijriCentury)
    }

    pub fn is_hijri(&self) -> bool {
        matches!(self, Era::HijriAH | Era::HijriBH | Era::HijriCentury)
    }
}

fn strip<'a>(text: &'a str, suffix: &str) -> Option<&'a str> {
    text.strip_suffix(suffix).map(str::trim)
}

// ------------- Resolution -------------
/// Resolves a single date expression, approximation marker included, e.g.
/// `c 1780-05`, `9c ah` or `300 ce`.
///
/// BC dates are recognised but not computed and come back as
/// [`DateError::UnsupportedEra`].
pub fn resolve(text: &str) -> Result<DateInterval> {
    let (prefix, rest) = ApproximationPrefix::split(text.trim());
    let (era, body) = Era::classify(rest);
    debug!(input = text, ?prefix, ?era, hijri = era.is_hijri(), body, "classified single date");
    let interval = resolve_interval(era, body)?;
    match prefix {
        Some(prefix) => prefix
            .expand(interval, era)
            .ok_or_else(|| DateError::malformed(text, "approximation leaves the supported date range")),
        None => Ok(interval),
    }
}

/// Resolves the suffix-free body of a single date in the given era.
pub fn resolve_interval(era: Era, body: &str) -> Result<DateInterval> {
    match era {
        Era::GregorianBC => Err(DateError::UnsupportedEra { input: body.to_string() }),
        Era::Century => {
            let first = first_year_of_century(body)?;
            let from = gregorian(body, first, 1, 1)?;
            let to = gregorian(body, first + 99, 12, 31)?;
            DateInterval::range(Some(from), Some(to))
        }
        Era::HijriCentury => {
            let first = first_year_of_century(body)?;
            let last = first + 99;
            let from = hijri(body, first, 1, 1)?;
            let to = hijri(body, last, 12, last_day_of_hijri_year(last))?;
            DateInterval::range(Some(from), Some(to))
        }
        Era::HijriAH | Era::HijriBH => {
            let mut date = PartialDate::parse(body)?;
            if era == Era::HijriBH {
                date.year = -date.year;
            }
            resolve_hijri(body, date)
        }
        Era::Gregorian | Era::GregorianCE | Era::GregorianAD => {
            resolve_gregorian(body, PartialDate::parse(body)?)
        }
    }
}

fn resolve_gregorian(body: &str, date: PartialDate) -> Result<DateInterval> {
    let PartialDate { year, month, day } = date;
    match (month, day) {
        (None, _) => {
            let from = gregorian(body, year, 1, 1)?;
            let to = gregorian(body, year, 12, 31)?;
            DateInterval::range(Some(from), Some(to))
        }
        (Some(month), None) => {
            let from = gregorian(body, year, month, 1)?;
            let last = days_in_month(year, month as u32)
                .ok_or_else(|| DateError::malformed(body, "year out of range"))?;
            let to = gregorian(body, year, month, last as u8)?;
            DateInterval::range(Some(from), Some(to))
        }
        (Some(month), Some(day)) => Ok(DateInterval::day(gregorian(body, year, month, day)?)),
    }
}

fn resolve_hijri(body: &str, date: PartialDate) -> Result<DateInterval> {
    let PartialDate { year, month, day } = date;
    match (month, day) {
        (None, _) => {
            let from = hijri(body, year, 1, 1)?;
            let to = hijri(body, year, 12, last_day_of_hijri_year(year))?;
            DateInterval::range(Some(from), Some(to))
        }
        (Some(month), None) => {
            let from = hijri(body, year, month, 1)?;
            let to = hijri(body, year, month, last_day_of_hijri_month(year, month))?;
            DateInterval::range(Some(from), Some(to))
        }
        (Some(month), Some(day)) => {
            if day > 30 {
                return Err(DateError::malformed(body, "hijri day must be between 1 and 30"));
            }
            Ok(DateInterval::day(hijri(body, year, month, day)?))
        }
    }
}

// "7c" is the seventh century, i.e. the years 600 to 699.
fn first_year_of_century(body: &str) -> Result<i32> {
    let century = number(body)?;
    if century == 0 {
        return Err(DateError::malformed(body, "century must be at least 1"));
    }
    (century - 1)
        .checked_mul(100)
        .and_then(|year| i32::try_from(year).ok())
        .filter(|year| year.checked_add(99).is_some())
        .ok_or_else(|| DateError::malformed(body, "century out of range"))
}

fn gregorian(body: &str, year: i32, month: u8, day: u8) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
        .ok_or_else(|| DateError::malformed(body, format!("{year}-{month:02}-{day:02} is not a valid date")))
}

fn hijri(body: &str, year: i32, month: u8, day: u8) -> Result<NaiveDate> {
    hijri_to_gregorian(year, month, day)
        .ok_or_else(|| DateError::malformed(body, "hijri date outside the supported range"))
}
