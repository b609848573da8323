// used for all bounds of an interval
use chrono::{Days, NaiveDate};

// intervals are handed to storage and report layers as JSON
use serde::Serialize;

// used to print out readable forms of an interval
use std::fmt;

use crate::error::{DateError, Result};

// ------------- DateInterval -------------
/// The resolved form of a date expression.
///
/// `from_date` and `to_date` are inclusive. A missing bound means the
/// interval is open on that side. `sort_date` is derived from the bounds
/// and is what callers should order by.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DateInterval {
    pub sort_date: Option<NaiveDate>,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
}

impl DateInterval {
    /// An interval with no bounds at all, used for expressions that are
    /// recognised but deliberately left unresolved (BC dates).
    pub fn unresolved() -> Self {
        Self::default()
    }

    /// A single day.
    pub fn day(date: NaiveDate) -> Self {
        Self { sort_date: Some(date), from_date: Some(date), to_date: Some(date) }
    }

    /// Builds an interval from two optional bounds, deriving the sort date.
    /// Fails if both bounds are present and out of order.
    pub fn range(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Result<Self> {
        if let (Some(from), Some(to)) = (from, to) {
            if from > to {
                return Err(DateError::InvertedRange { from, to });
            }
        }
        Ok(Self { sort_date: midpoint(from, to), from_date: from, to_date: to })
    }

    /// Only the lower bound survives, e.g. the left side of `1815 -`.
    pub fn starting(from: Option<NaiveDate>) -> Self {
        Self { sort_date: from, from_date: from, to_date: None }
    }

    /// Only the upper bound survives, e.g. the right side of `- 1989-11`.
    pub fn ending(to: Option<NaiveDate>) -> Self {
        Self { sort_date: to, from_date: None, to_date: to }
    }

    pub fn is_unresolved(&self) -> bool {
        self.from_date.is_none() && self.to_date.is_none()
    }

    /// Fills in a missing sort date from whichever bound is known.
    pub fn with_default_sort(mut self) -> Self {
        if self.sort_date.is_none() {
            self.sort_date = self.from_date.or(self.to_date);
        }
        self
    }

    /// `(sort_date, from_date, to_date)`, the shape stored by callers.
    pub fn tuple(&self) -> (Option<NaiveDate>, Option<NaiveDate>, Option<NaiveDate>) {
        (self.sort_date, self.from_date, self.to_date)
    }
}

// Halfway between the bounds, rounding towards the lower one.
fn midpoint(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Option<NaiveDate> {
    match (from, to) {
        (Some(from), Some(to)) => {
            let half = to.signed_duration_since(from).num_days() / 2;
            u64::try_from(half).ok().and_then(|half| from.checked_add_days(Days::new(half)))
        }
        (from, to) => from.or(to),
    }
}

impl fmt::Display for DateInterval {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let show = |d: Option<NaiveDate>| d.map(|d| d.to_string()).unwrap_or_else(|| "-".into());
        write!(f, "{} / {} / {}", show(self.sort_date), show(self.from_date), show(self.to_date))
    }
}

// ------------- PartialDate -------------
/// A possibly incomplete calendar date as written, e.g. `1989`, `1989-11`
/// or `1989-11-05`. The calendar it belongs to is decided by the era.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartialDate {
    pub year: i32,
    pub month: Option<u8>,
    pub day: Option<u8>,
}

impl PartialDate {
    /// Splits on `-` into at most three numeric parts. Months are checked
    /// against 1-12 and days against 1-31; whether the day exists in that
    /// month is left to the calendar doing the resolution.
    pub fn parse(text: &str) -> Result<Self> {
        let parts: Vec<&str> = text.split('-').map(str::trim).collect();
        if parts.len() > 3 {
            return Err(DateError::malformed(text, "expected at most year-month-day"));
        }
        let year = number(parts[0])?;
        let year = i32::try_from(year)
            .map_err(|_| DateError::malformed(parts[0], "year out of range"))?;
        let month = match parts.get(1) {
            Some(part) => Some(bounded(part, 12, "month")?),
            None => None,
        };
        let day = match parts.get(2) {
            Some(part) => Some(bounded(part, 31, "day")?),
            None => None,
        };
        Ok(Self { year, month, day })
    }
}

/// Parses an unsigned run of ASCII digits.
pub(crate) fn number(token: &str) -> Result<u64> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DateError::malformed(token, "invalid integer token"));
    }
    token.parse::<u64>().map_err(|e| DateError::malformed(token, e.to_string()))
}

fn bounded(token: &str, max: u8, what: &str) -> Result<u8> {
    let n = number(token)?;
    if (1..=u64::from(max)).contains(&n) {
        Ok(n as u8)
    } else {
        Err(DateError::malformed(token, format!("{what} must be between 1 and {max}")))
    }
}
