use chrono::NaiveDate;
use circa::{DateError, parse_date};

fn date(s: &str) -> Option<NaiveDate> {
    Some(NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap())
}

#[test]
fn before() {
    let i = parse_date("before 7c").unwrap();
    assert_eq!(i.to_date, date("0599-12-31"));
    assert_eq!(i.sort_date, date("0599-12-31"));
    assert_eq!(i.from_date, None);
}

#[test]
fn not_before() {
    let i = parse_date("not before 7c").unwrap();
    assert_eq!(i.from_date, date("0600-01-01"));
    assert_eq!(i.sort_date, date("0600-01-01"));
    assert_eq!(i.to_date, None);
}

#[test]
fn after() {
    let i = parse_date("after 7c").unwrap();
    assert_eq!(i.from_date, date("0700-01-01"));
    assert_eq!(i.sort_date, date("0700-01-01"));
    assert_eq!(i.to_date, None);

    let i = parse_date("After 700 ah").unwrap();
    assert_eq!(i.from_date, date("1301-09-05"));
    assert_eq!(i.to_date, None);
}

#[test]
fn not_after() {
    let i = parse_date("not after 7c").unwrap();
    assert_eq!(i.to_date, date("0699-12-31"));
    assert_eq!(i.sort_date, date("0699-12-31"));
    assert_eq!(i.from_date, None);

    let i = parse_date("not after 1985-04-03").unwrap();
    assert_eq!(i.to_date, date("1985-04-03"));
    assert_eq!(i.sort_date, date("1985-04-03"));
    assert_eq!(i.from_date, None);
}

#[test]
fn two_qualifiers_form_a_range() {
    let i = parse_date("after 1800 and before 1900").unwrap();
    assert_eq!(i.from_date, date("1801-01-01"));
    assert_eq!(i.to_date, date("1899-12-31"));
    assert_eq!(i.sort_date, date("1850-07-02"));

    let i = parse_date("not before 1815-11, not after 1816").unwrap();
    assert_eq!(i.from_date, date("1815-11-01"));
    assert_eq!(i.to_date, date("1816-12-31"));
}

#[test]
fn qualified_approximation() {
    let i = parse_date("not before c. 1780").unwrap();
    assert_eq!(i.from_date, date("1770-01-01"));
}

#[test]
fn contradictory_qualifiers_are_an_error() {
    let err = parse_date("after 1900 before 1800").unwrap_err();
    assert!(matches!(err, DateError::InvertedRange { .. }), "got {err:?}");
}

#[test]
fn qualified_bc_date_has_no_bound() {
    let i = parse_date("before 315 bc").unwrap();
    assert!(i.is_unresolved());
}
