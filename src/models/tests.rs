#![allow(clippy::unwrap_used)]

use chrono::{Local, NaiveDate};
use rust_decimal_macros::dec;

use super::*;
use crate::error::Error;
use crate::messages::Language;

// ── Record ────────────────────────────────────────────────────

#[test]
fn test_record_with_date() {
    let r = Record::new(dec!(145), "coffee", Some("15.03.2024")).unwrap();
    assert_eq!(r.amount(), dec!(145));
    assert_eq!(r.comment(), "coffee");
    assert_eq!(r.date(), NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
}

#[test]
fn test_record_without_date_is_today() {
    let r = Record::new(dec!(1.5), "", None).unwrap();
    assert_eq!(r.date(), Local::now().date_naive());
}

#[test]
fn test_record_date_roundtrip() {
    for s in ["01.01.2000", "29.02.2024", "31.12.1999", "30.04.2023"] {
        let r = Record::new(dec!(1), "x", Some(s)).unwrap();
        assert_eq!(r.date().format(DATE_FORMAT).to_string(), s);
    }
}

#[test]
fn test_record_rejects_wrong_separators() {
    for s in ["15/03/2024", "15-03-2024", "2024-03-15", "15.03.24", "15 03 2024"] {
        assert!(Record::new(dec!(1), "x", Some(s)).is_err(), "accepted {s}");
    }
}

#[test]
fn test_record_rejects_non_numeric() {
    for s in ["aa.03.2024", "15.mm.2024", "", "  ", "15.03.2024 "] {
        assert!(Record::new(dec!(1), "x", Some(s)).is_err(), "accepted {s:?}");
    }
}

#[test]
fn test_record_rejects_impossible_dates() {
    for s in ["31.04.2024", "30.02.2024", "29.02.2023", "00.01.2024", "15.13.2024"] {
        let err = Record::new(dec!(1), "x", Some(s)).unwrap_err();
        assert!(matches!(err, Error::InvalidDate { .. }), "{s}: {err}");
    }
}

#[test]
fn test_parse_date_error_names_input() {
    let err = parse_date("1.3.2024").unwrap_err();
    assert!(err.to_string().contains("1.3.2024"));
}

// ── Currency ──────────────────────────────────────────────────

#[test]
fn test_currency_from_code() {
    assert_eq!(Currency::from_code("rub"), Some(Currency::Rub));
    assert_eq!(Currency::from_code("usd"), Some(Currency::Usd));
    assert_eq!(Currency::from_code("eur"), Some(Currency::Eur));
    assert_eq!(Currency::from_code("gbp"), None);
    assert_eq!(Currency::from_code("EUR"), None);
}

#[test]
fn test_currency_rates() {
    assert_eq!(Currency::Rub.rate(), dec!(1));
    assert_eq!(Currency::Usd.rate(), dec!(60));
    assert_eq!(Currency::Eur.rate(), dec!(70));
}

#[test]
fn test_currency_display_names() {
    assert_eq!(Currency::Rub.display_name(Language::Ru), "руб");
    assert_eq!(Currency::Rub.display_name(Language::En), "RUB");
    assert_eq!(Currency::Usd.display_name(Language::Ru), "USD");
    assert_eq!(Currency::Eur.display_name(Language::En), "Euro");
}

#[test]
fn test_currency_next_cycles_table() {
    let mut c = Currency::Rub;
    for _ in Currency::all() {
        c = c.next();
    }
    assert_eq!(c, Currency::Rub);
    assert_eq!(Currency::Usd.next(), Currency::Eur);
}

// ── Language ──────────────────────────────────────────────────

#[test]
fn test_language_parse() {
    assert_eq!(Language::parse("ru"), Some(Language::Ru));
    assert_eq!(Language::parse("EN"), Some(Language::En));
    assert_eq!(Language::parse("english"), Some(Language::En));
    assert_eq!(Language::parse("de"), None);
    assert_eq!(Language::default(), Language::Ru);
    assert!("fr".parse::<Language>().is_err());
}
