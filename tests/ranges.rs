use chrono::NaiveDate;
use circa::{DateError, parse_date};

fn date(s: &str) -> Option<NaiveDate> {
    Some(NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap())
}

#[test]
fn only_start() {
    for (text, from) in [("1815 -", "1815-01-01"), ("1815-11 -", "1815-11-01"), ("1815-01-05 -", "1815-01-05")] {
        let i = parse_date(text).unwrap();
        assert_eq!(i.from_date, date(from), "{text}");
        assert_eq!(i.sort_date, i.from_date, "{text}");
        assert_eq!(i.to_date, None, "{text}");
    }
}

#[test]
fn only_end() {
    for (text, to) in [("- 1989-01", "1989-01-31"), ("- 1989-11", "1989-11-30"), ("- 1989-11-05", "1989-11-05")] {
        let i = parse_date(text).unwrap();
        assert_eq!(i.to_date, date(to), "{text}");
        assert_eq!(i.sort_date, i.to_date, "{text}");
        assert_eq!(i.from_date, None, "{text}");
    }
}

#[test]
fn two_sided_range() {
    let i = parse_date("130 - 1989-01").unwrap();
    assert_eq!(i.from_date, date("0130-01-01"));
    assert_eq!(i.to_date, date("1989-01-31"));
    assert_eq!(i.sort_date, date("1059-07-18"));

    let i = parse_date("9c - 1989-01").unwrap();
    assert_eq!(i.from_date, date("0800-01-01"));
    assert_eq!(i.to_date, date("1989-01-31"));
}

#[test]
fn range_mixing_calendars() {
    let i = parse_date("700 ah - 1400").unwrap();
    assert_eq!(i.from_date, date("1300-09-16"));
    assert_eq!(i.to_date, date("1400-12-31"));
}

#[test]
fn range_with_bc_side_keeps_the_other_bound() {
    let i = parse_date("315 bc - 1200").unwrap();
    assert_eq!(i.from_date, None);
    assert_eq!(i.to_date, date("1200-12-31"));
    assert_eq!(i.sort_date, date("1200-12-31"));
}

#[test]
fn extra_operands_are_discarded() {
    assert_eq!(parse_date("1800 - 1850 - 1900").unwrap(), parse_date("1800 - 1850").unwrap());
}

#[test]
fn inverted_range_is_an_error() {
    let err = parse_date("1900 - 1800").unwrap_err();
    assert!(matches!(err, DateError::InvertedRange { .. }), "got {err:?}");
}
