#![allow(clippy::unwrap_used)]

use super::*;
use rust_decimal_macros::dec;
use std::io::Write;

fn make_csv_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
}

fn reader() -> RecordReader {
    RecordReader::new(today())
}

// ── parse_amount ──────────────────────────────────────────────

#[test]
fn test_parse_amount_basic() {
    assert_eq!(parse_amount("100.50"), Some(dec!(100.50)));
    assert_eq!(parse_amount("42"), Some(dec!(42)));
    assert_eq!(parse_amount("-3"), Some(dec!(-3)));
    assert_eq!(parse_amount(" +7 "), Some(dec!(7)));
}

#[test]
fn test_parse_amount_invalid() {
    assert_eq!(parse_amount(""), None);
    assert_eq!(parse_amount("amount"), None);
}

// ── RecordReader ──────────────────────────────────────────────

#[test]
fn test_parse_str_single_record() {
    let records = reader().parse_str("250,lunch,14.03.2024").unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].amount(), dec!(250));
    assert_eq!(records[0].comment(), "lunch");
    assert_eq!(records[0].date(), NaiveDate::from_ymd_opt(2024, 3, 14).unwrap());
}

#[test]
fn test_missing_date_is_today() {
    let records = reader().parse_str("250,lunch\n10,tea,\n").unwrap();
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.date() == today()));
}

#[test]
fn test_quoted_comment_with_comma() {
    let records = reader().parse_str("99.9,\"bread, milk\",15.03.2024").unwrap();
    assert_eq!(records[0].comment(), "bread, milk");
}

#[test]
fn test_header_is_skipped() {
    let records = reader()
        .parse_str("amount,comment,date\n1,a,\n2,b,15.03.2024\n")
        .unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].amount(), dec!(2));
}

#[test]
fn test_blank_rows_skipped() {
    let records = reader().parse_str("1,a\n,,\n2,b\n").unwrap();
    assert_eq!(records.len(), 2);
}

#[test]
fn test_bad_amount_reports_row() {
    let err = reader().parse_str("1,a\nabc,b\n").unwrap_err();
    match err {
        Error::InvalidAmount { row, value } => {
            assert_eq!(row, 2);
            assert_eq!(value, "abc");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_bad_date_reports_row() {
    let err = reader().parse_str("1,a,15.03.2024\n2,b,2024-03-15\n").unwrap_err();
    assert!(matches!(err, Error::InvalidRow { row: 2, .. }), "{err}");
    assert!(err.to_string().contains("2024-03-15"));
}

#[test]
fn test_read_path() {
    let file = make_csv_file("amount,comment,date\n145,coffee,15.03.2024\n300,dinner,09.03.2024\n");
    let records = reader().read_path(file.path()).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].comment(), "dinner");
}

#[test]
fn test_from_path_missing_file() {
    let err = reader()
        .read_path(Path::new("/definitely/not/here.csv"))
        .unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_empty_input() {
    assert!(reader().parse_str("").unwrap().is_empty());
}

#[test]
fn test_single_bad_row_is_not_a_header() {
    for text in ["abc,x", "1O,tea"] {
        let err = reader().parse_str(text).unwrap_err();
        assert!(
            matches!(err, Error::InvalidAmount { row: 1, .. }),
            "{text}: {err}"
        );
    }
}

#[test]
fn test_header_named_in_any_case() {
    let records = reader().parse_str("Amount,Comment\n5,tea\n").unwrap();
    assert_eq!(records.len(), 1);
}

#[test]
fn test_amount_above_bound_rejected() {
    assert_eq!(parse_amount("1000000000000000"), Some(MAX_AMOUNT));
    assert_eq!(parse_amount("-1000000000000000"), Some(-MAX_AMOUNT));
    assert_eq!(parse_amount("1000000000000000.01"), None);
    let err = reader()
        .parse_str("79228162514264337593543950335,huge")
        .unwrap_err();
    assert!(matches!(err, Error::InvalidAmount { row: 1, .. }), "{err}");
}
