use circa::config::ReportFormat;
use circa::report::{BadDateReport, DateRecord};

fn records() -> Vec<DateRecord> {
    vec![
        DateRecord::new("manuscript 21153", "start", "before 496/1102-3v"),
        DateRecord::new("manuscript 21153", "end", "7c"),
        DateRecord::new("person 7", "birth", "315 BC"),
        DateRecord::new("person 7", "death", ""),
        DateRecord::new("person 8", "birth", "c. 1780"),
    ]
}

#[test]
fn collects_unparseable_and_unresolved_values() {
    let report = BadDateReport::collect(records());
    assert_eq!(report.checked, 4);
    assert_eq!(report.bad_dates.len(), 2);
    assert_eq!(report.bad_dates[0].value, "before 496/1102-3v");
    assert!(report.bad_dates[0].reason.contains("Malformed token"));
    assert_eq!(report.bad_dates[1].value, "315 BC");
    assert_eq!(report.summary(), "2 bad dates found.");
}

#[test]
fn clean_report() {
    let report = BadDateReport::collect(vec![DateRecord::new("a", "date", "1815 -")]);
    assert!(report.is_clean());
    assert_eq!(report.summary(), "No bad dates found.");
    assert_eq!(report.to_markdown().lines().count(), 2);
}

#[test]
fn markdown_table() {
    let mut out = Vec::new();
    BadDateReport::collect(records()).write(ReportFormat::Markdown, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "| object | field | value | reason |");
    assert_eq!(lines.len(), 4);
    assert!(lines[3].starts_with("| person 7 | birth | 315 BC |"));
}

#[test]
fn json_report() {
    let mut out = Vec::new();
    BadDateReport::collect(records()).write(ReportFormat::Json, &mut out).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["checked"], 4);
    assert_eq!(value["bad_dates"][1]["field"], "birth");
}
