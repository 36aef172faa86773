// File: crates/dashboard-core/tests/table.rs
// Purpose: Validated and lenient CSV parsing, period rows and ordering checks.

use dashboard_core::{ParseError, RawTable};

#[test]
fn parse_keeps_header_and_rows_in_order() {
    let table = RawTable::parse("date,A,B\n2024-01-02,1,2\n2024-01-01,3,4\n").expect("parse");
    assert_eq!(table.header(), &["date", "A", "B"]);
    assert_eq!(table.series_count(), 2);
    assert_eq!(table.period_rows().len(), 2);
    assert_eq!(table.period_rows()[0], vec!["2024-01-02", "1", "2"]);
}

#[test]
fn parse_accepts_crlf_and_quotes() {
    let table = RawTable::parse("date,\"A, quoted\"\r\n2024-01-01,5\r\n").expect("parse");
    assert_eq!(table.header()[1], "A, quoted");
    assert_eq!(table.period_rows()[0][1], "5");
}

#[test]
fn parse_rejects_ragged_rows() {
    let err = RawTable::parse("date,A,B\n2024-01-02,1\n").unwrap_err();
    match err {
        ParseError::Ragged { expected, found, .. } => {
            assert_eq!(expected, 3);
            assert_eq!(found, 2);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn parse_rejects_empty_input() {
    assert!(matches!(RawTable::parse(""), Err(ParseError::Empty)));
    assert!(matches!(RawTable::from_rows(Vec::new()), Err(ParseError::Empty)));
}

#[test]
fn lenient_split_mirrors_plain_split() {
    let table = RawTable::split_lenient("date,A\n2024-01-01,\"x,y\"\n");
    assert_eq!(table.rows().len(), 3);
    assert_eq!(table.rows()[1], vec!["2024-01-01", "\"x", "y\""]);
    assert_eq!(table.rows()[2], vec![""]);
    assert_eq!(table.period_rows().len(), 1);
}

#[test]
fn lenient_split_of_empty_text_is_a_blank_header() {
    let table = RawTable::split_lenient("");
    assert_eq!(table.header(), &[""]);
    assert_eq!(table.series_count(), 0);
    assert!(table.period_rows().is_empty());
}

#[test]
fn ordering_check_reads_iso_dates() {
    let newest_first = RawTable::parse("d,A\n2024-01-03,1\n2024-01-02,1\nnot-a-date,1\n2024-01-01,1\n").expect("parse");
    assert!(newest_first.is_most_recent_first());

    let oldest_first = RawTable::parse("d,A\n2024-01-01,1\n2024-01-02,1\n").expect("parse");
    assert!(!oldest_first.is_most_recent_first());
}
