use chrono::NaiveDate;
use circa::parse_date;

fn date(s: &str) -> Option<NaiveDate> {
    Some(NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap())
}

#[test]
fn year_only_spans_the_year() {
    for year in ["130", "1815", "1989"] {
        let i = parse_date(year).unwrap();
        assert_eq!(i.from_date, date(&format!("{year:0>4}-01-01")), "from of {year}");
        assert_eq!(i.to_date, date(&format!("{year:0>4}-12-31")), "to of {year}");
    }
    assert_eq!(parse_date("1989").unwrap().sort_date, date("1989-07-02"));
}

#[test]
fn year_month_spans_the_month() {
    let i = parse_date("1989-11").unwrap();
    assert_eq!(i.from_date, date("1989-11-01"));
    assert_eq!(i.to_date, date("1989-11-30"));
    // leap years
    assert_eq!(parse_date("2024-02").unwrap().to_date, date("2024-02-29"));
    assert_eq!(parse_date("1900-02").unwrap().to_date, date("1900-02-28"));
}

#[test]
fn complete_date_is_a_single_day() {
    let i = parse_date("1815-01-05").unwrap();
    assert_eq!(i.tuple(), (date("1815-01-05"), date("1815-01-05"), date("1815-01-05")));
}

#[test]
fn century_suffix() {
    let i = parse_date("7c").unwrap();
    assert_eq!(i.from_date, date("0600-01-01"));
    assert_eq!(i.to_date, date("0699-12-31"));
    assert_eq!(i.sort_date, date("0649-12-31"));
}

#[test]
fn ce_and_ad_are_plain_years() {
    let plain = parse_date("300").unwrap();
    for text in ["300 ce", "300 ad", "300 CE", "300 A.D."] {
        assert_eq!(parse_date(text).unwrap(), plain, "{text}");
    }
    assert_eq!(plain.from_date, date("0300-01-01"));
    assert_eq!(plain.to_date, date("0300-12-31"));
    assert_eq!(plain.sort_date, date("0300-07-02"));
}

#[test]
fn case_insensitive() {
    assert_eq!(parse_date("7C").unwrap(), parse_date("7c").unwrap());
    assert_eq!(parse_date("700 AH").unwrap(), parse_date("700 ah").unwrap());
}

#[test]
fn bc_dates_are_unresolved() {
    for text in ["315 BC", "315-11 BC", "315-01-05 BC", "315 BCE", "c. 315 bc"] {
        let i = parse_date(text).unwrap();
        assert!(i.is_unresolved(), "{text} should be unresolved");
        assert_eq!(i.sort_date, None, "{text}");
    }
}

#[test]
fn markup_and_whitespace_are_ignored() {
    assert_eq!(parse_date("  <b>1815</b> ").unwrap(), parse_date("1815").unwrap());
}

#[test]
fn resolving_twice_gives_the_same_interval() {
    for text in ["7c", "c. 1780-05-11", "after 700 ah", "130 - 1989-01", "- 1989-11"] {
        assert_eq!(parse_date(text).unwrap(), parse_date(text).unwrap(), "{text}");
    }
}

#[test]
fn from_str() {
    let i: circa::DateInterval = "1815-11".parse().unwrap();
    assert_eq!(i.from_date, date("1815-11-01"));
}
