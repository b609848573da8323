//! Circa and floruit markers.
//!
//! A marker in front of a single date turns it into a window of years
//! around the resolved date: ten years either way for circa, twenty for
//! floruit.

use chrono::Months;
use lazy_static::lazy_static;
use regex::Regex;

use crate::interval::DateInterval;
use crate::resolve::Era;

lazy_static! {
    // the marker has to be followed by the date itself
    static ref PREFIX: Regex = Regex::new(r"^(circa|ca|c|floruit|flourish|fl)\s*(\d.*)$").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApproximationPrefix {
    Circa,
    Flourish,
}

impl ApproximationPrefix {
    /// Splits a leading marker off a normalized single date expression.
    /// Returns the marker, if any, and the rest of the expression.
    pub fn split(text: &str) -> (Option<Self>, &str) {
        match PREFIX.captures(text) {
            Some(captures) => {
                let prefix = match &captures[1] {
                    "fl" | "floruit" | "flourish" => Self::Flourish,
                    _ => Self::Circa,
                };
                let rest = captures.get(2).map_or(text, |m| m.as_str());
                (Some(prefix), rest.trim())
            }
            None => (None, text),
        }
    }

    pub fn years(&self) -> u32 {
        match self {
            Self::Circa => 10,
            Self::Flourish => 20,
        }
    }

    /// Widens a resolved interval.
    ///
    /// The window is laid around the lower bound, so `c. 1780` spans
    /// 1770-01-01 to 1790-01-01. Centuries are already wider than any
    /// window, so for them both ends are pushed outwards instead.
    /// Returns `None` if a bound leaves the representable date range.
    pub fn expand(&self, interval: DateInterval, era: Era) -> Option<DateInterval> {
        let Some(from) = interval.from_date else {
            return Some(interval);
        };
        let window = Months::new(12 * self.years());
        let to = if era.is_century() { interval.to_date.unwrap_or(from) } else { from };
        let from = from.checked_sub_months(window)?;
        let to = to.checked_add_months(window)?;
        DateInterval::range(Some(from), Some(to)).ok()
    }
}
