//! Hijri to Gregorian conversion through Julian Day Numbers.
//!
//! The Hijri calendar handled here is an arithmetic one: twelve lunar months
//! and a 30-year cycle in which a year gets an extra day at the end of the
//! twelfth month when `(11 * year + 14) mod 30 == 0`. Everything is integer
//! arithmetic so the results can safely be used as sort keys.
//!
//! Julian Day Numbers below 2299161 (15 October 1582) are rendered in Julian
//! reckoning, later ones in Gregorian reckoning, the way historical tables
//! present them. The day/month/year triple is then stored in a
//! [`chrono::NaiveDate`].

// used for all dates produced by the engine
use chrono::{Datelike, NaiveDate};

// ------------- Constants -------------
/// First Julian Day Number of the Gregorian reform (1582-10-15).
pub const GREGORIAN_REFORM_JD: i64 = 2_299_161;

/// Julian Day Number offset of the Hijri epoch used by the conversion.
const HIJRI_EPOCH_JD: i64 = 1_948_440 - 385;

// ------------- Hijri calendar -------------
/// True if `year` is a leap year of the 30-year cycle.
pub fn hijri_leap_year(year: i32) -> bool {
    (11 * year as i64 + 14).rem_euclid(30) == 0
}

/// Length of the twelfth month of a Hijri year, which is also its last day.
pub fn last_day_of_hijri_year(year: i32) -> u8 {
    if hijri_leap_year(year) { 30 } else { 29 }
}

/// Last day used for a Hijri month when resolving a year-month expression.
/// Only the twelfth month varies (with the leap rule), all others are
/// bounded at day 29.
pub fn last_day_of_hijri_month(year: i32, month: u8) -> u8 {
    if month == 12 { last_day_of_hijri_year(year) } else { 29 }
}

/// Julian Day Number of a Hijri date.
///
/// Month and day are not validated; out of range values simply roll over
/// into the neighbouring month or year.
pub fn hijri_to_julian_day(year: i32, month: u8, day: u8) -> i64 {
    let y = year as i64;
    let m = month as i64;
    let d = day as i64;
    (11 * y + 3).div_euclid(30) + 354 * y + 30 * m - (m - 1).div_euclid(2) + d + HIJRI_EPOCH_JD
}

/// Converts a Hijri date to the corresponding calendar date.
///
/// Returns `None` only when the result falls outside what [`NaiveDate`]
/// can represent.
pub fn hijri_to_gregorian(year: i32, month: u8, day: u8) -> Option<NaiveDate> {
    julian_day_to_date(hijri_to_julian_day(year, month, day))
}

// ------------- Julian Day Numbers -------------
/// Converts a Julian Day Number to a calendar date, switching from Julian
/// to Gregorian reckoning at [`GREGORIAN_REFORM_JD`].
pub fn julian_day_to_date(jd: i64) -> Option<NaiveDate> {
    let (year, month, day) = if jd >= GREGORIAN_REFORM_JD {
        gregorian_from_julian_day(jd)
    } else {
        julian_from_julian_day(jd)
    };
    let year = i32::try_from(year).ok()?;
    let (month, day) = (month as u32, day as u32);
    NaiveDate::from_ymd_opt(year, month, day).or_else(|| clamp_to_month(year, month, day))
}

fn gregorian_from_julian_day(jd: i64) -> (i64, i64, i64) {
    let mut l = jd + 68_569;
    let n = (4 * l).div_euclid(146_097);
    l -= (146_097 * n + 3).div_euclid(4);
    let i = (4_000 * (l + 1)).div_euclid(1_461_001);
    l = l - (1_461 * i).div_euclid(4) + 31;
    let j = (80 * l).div_euclid(2_447);
    let day = l - (2_447 * j).div_euclid(80);
    l = j.div_euclid(11);
    let month = j + 2 - 12 * l;
    let year = 100 * (n - 49) + i + l;
    (year, month, day)
}

fn julian_from_julian_day(jd: i64) -> (i64, i64, i64) {
    let j = jd + 1_402;
    let k = (j - 1).div_euclid(1_461);
    let l = j - 1_461 * k;
    let n = (l - 1).div_euclid(365) - l.div_euclid(1_461);
    let mut i = l - 365 * n + 30;
    let j = (80 * i).div_euclid(2_447);
    let day = i - (2_447 * j).div_euclid(80);
    i = j.div_euclid(11);
    let month = j + 2 - 12 * i;
    let year = 4 * k + n + i - 4_716;
    (year, month, day)
}

// A Julian 29 February in a year that is not a Gregorian leap year
// (e.g. 1300) has no NaiveDate counterpart and is kept in its month.
fn clamp_to_month(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    let last = first_of_next.pred_opt()?;
    (day > last.day()).then_some(last)
}

/// Number of days in a Gregorian month, honouring leap years.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    u32::try_from(first_of_next.signed_duration_since(first).num_days()).ok()
}
