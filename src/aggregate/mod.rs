mod calorie;
mod cash;

pub use calorie::CalorieAggregator;
pub use cash::CashAggregator;

use chrono::{Days, Local, NaiveDate};
use rust_decimal::Decimal;
use tracing::{debug, trace};

use crate::models::Record;

/// Length of the trailing window used by [`Aggregator::week_total`], today included.
pub const WEEK_DAYS: u64 = 7;

/// Records kept against a daily limit.
///
/// `today` and `week_start` are fixed when the aggregator is built and are not
/// moved forward if the instance outlives the day.
#[derive(Debug, Clone)]
pub struct Aggregator {
    limit: Decimal,
    records: Vec<Record>,
    today: NaiveDate,
    week_start: NaiveDate,
}

impl Aggregator {
    pub fn new(limit: Decimal) -> Self {
        Self::with_today(limit, Local::now().date_naive())
    }

    pub fn with_today(limit: Decimal, today: NaiveDate) -> Self {
        let week_start = today
            .checked_sub_days(Days::new(WEEK_DAYS - 1))
            .unwrap_or(NaiveDate::MIN);
        Self {
            limit,
            records: Vec::new(),
            today,
            week_start,
        }
    }

    pub fn add_record(&mut self, record: Record) {
        debug!(
            amount = %record.amount(),
            date = %record.date(),
            comment = record.comment(),
            "adding record"
        );
        self.records.push(record);
    }

    pub fn today_total(&self) -> Decimal {
        let total: Decimal = self
            .records
            .iter()
            .filter(|r| r.date() == self.today)
            .map(Record::amount)
            .fold(Decimal::ZERO, Decimal::saturating_add);
        trace!(%total, today = %self.today, "today total");
        total
    }

    /// Sum over `week_start..=today`.
    pub fn week_total(&self) -> Decimal {
        let total: Decimal = self
            .records
            .iter()
            .filter(|r| (self.week_start..=self.today).contains(&r.date()))
            .map(Record::amount)
            .fold(Decimal::ZERO, Decimal::saturating_add);
        trace!(%total, week_start = %self.week_start, "week total");
        total
    }

    /// May be negative when today's total is over the limit. Totals saturate at
    /// the bounds of `Decimal` instead of overflowing.
    pub fn remaining_limit(&self) -> Decimal {
        self.limit.saturating_sub(self.today_total())
    }

    pub fn limit(&self) -> Decimal {
        self.limit
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn week_start(&self) -> NaiveDate {
        self.week_start
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Extend<Record> for Aggregator {
    fn extend<I: IntoIterator<Item = Record>>(&mut self, iter: I) {
        for record in iter {
            self.add_record(record);
        }
    }
}

/// Forward the base [`Aggregator`] API from a wrapper with an `inner` field.
macro_rules! delegate_to_inner {
    ($ty:ty) => {
        impl $ty {
            pub fn add_record(&mut self, record: $crate::models::Record) {
                self.inner.add_record(record);
            }

            pub fn today_total(&self) -> rust_decimal::Decimal {
                self.inner.today_total()
            }

            pub fn week_total(&self) -> rust_decimal::Decimal {
                self.inner.week_total()
            }

            pub fn remaining_limit(&self) -> rust_decimal::Decimal {
                self.inner.remaining_limit()
            }

            pub fn base(&self) -> &$crate::aggregate::Aggregator {
                &self.inner
            }
        }

        impl Extend<$crate::models::Record> for $ty {
            fn extend<I: IntoIterator<Item = $crate::models::Record>>(&mut self, iter: I) {
                self.inner.extend(iter);
            }
        }
    };
}

pub(crate) use delegate_to_inner;
