#![allow(clippy::unwrap_used)]

use super::*;
use chrono::{Local, NaiveDate};
use rust_decimal_macros::dec;
use std::io::Write;

fn record_args(limit: rust_decimal::Decimal, records: &[&str]) -> RecordArgs {
    RecordArgs {
        limit,
        records: records.iter().map(|s| s.to_string()).collect(),
        file: None,
    }
}

#[test]
fn test_load_inline_records() {
    let args = record_args(dec!(100), &["10,tea", "250,\"lunch, big\",01.02.2024"]);
    let records = load_records(&args).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].date(), Local::now().date_naive());
    assert_eq!(records[1].comment(), "lunch, big");
    assert_eq!(
        records[1].date(),
        NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()
    );
}

#[test]
fn test_load_file_then_inline() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"amount,comment\n1,from file\n").unwrap();
    let mut args = record_args(dec!(100), &["2,inline"]);
    args.file = Some(file.path().to_path_buf());

    let records = load_records(&args).unwrap();
    let comments: Vec<&str> = records.iter().map(|r| r.comment()).collect();
    assert_eq!(comments, ["from file", "inline"]);
}

#[test]
fn test_load_bad_record_has_context() {
    let args = record_args(dec!(100), &["10,tea,2024-01-01"]);
    let err = load_records(&args).unwrap_err();
    assert!(format!("{err:#}").contains("Invalid record '10,tea,2024-01-01'"));
}

#[test]
fn test_format_stats() {
    let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    let mut agg = Aggregator::with_today(dec!(1000), today);
    agg.add_record(Record::on(dec!(300), "lunch", today));
    agg.add_record(Record::on(dec!(200), "books", NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()));

    let out = format_stats(&agg);
    assert!(out.starts_with("dailylimit: 15.03.2024\n"));
    assert!(out.contains("  Today:      300\n"));
    assert!(out.contains("  Week:       500\n"));
    assert!(out.contains("  Remaining:  700\n"));
    assert!(out.contains("  Records:    2\n"));
}
