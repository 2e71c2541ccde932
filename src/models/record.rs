use std::sync::LazyLock;

use chrono::{Local, NaiveDate};
use regex::Regex;
use rust_decimal::Decimal;

use crate::error::{Error, Result};

/// Format: "DD.MM.YYYY"
pub const DATE_FORMAT: &str = "%d.%m.%Y";

static DATE_SHAPE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").ok());

/// One dated amount: money spent or kilocalories eaten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    amount: Decimal,
    comment: String,
    date: NaiveDate,
}

impl Record {
    /// Build a record, parsing `date` as "DD.MM.YYYY". Without a date the record
    /// is stamped with the current local date.
    pub fn new(amount: Decimal, comment: impl Into<String>, date: Option<&str>) -> Result<Self> {
        let date = match date {
            Some(s) => parse_date(s)?,
            None => Local::now().date_naive(),
        };
        Ok(Self::on(amount, comment, date))
    }

    pub fn today(amount: Decimal, comment: impl Into<String>) -> Self {
        Self::on(amount, comment, Local::now().date_naive())
    }

    pub fn on(amount: Decimal, comment: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            amount,
            comment: comment.into(),
            date,
        }
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

/// Parse a "DD.MM.YYYY" date. Single-digit fields and other separators are rejected,
/// as are days that do not exist in the given month.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    let well_formed = DATE_SHAPE.as_ref().is_some_and(|re| re.is_match(s));
    if !well_formed {
        return Err(Error::invalid_date(s, None));
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|e| Error::invalid_date(s, Some(e)))
}
