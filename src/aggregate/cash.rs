use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use super::{delegate_to_inner, Aggregator};
use crate::messages::{self, Language};
use crate::models::Currency;

/// Daily spending tracker. Limit and amounts are in roubles.
#[derive(Debug, Clone)]
pub struct CashAggregator {
    inner: Aggregator,
    language: Language,
}

impl CashAggregator {
    pub fn new(limit: Decimal) -> Self {
        Self::from_base(Aggregator::new(limit))
    }

    pub fn with_today(limit: Decimal, today: NaiveDate) -> Self {
        Self::from_base(Aggregator::with_today(limit, today))
    }

    pub fn from_base(inner: Aggregator) -> Self {
        Self {
            inner,
            language: Language::default(),
        }
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Today's balance in the currency named by `code`. An unknown code yields a
    /// message naming it rather than an error.
    pub fn today_cash_remaining(&self, code: &str) -> String {
        match Currency::from_code(code) {
            Some(currency) => self.today_cash_remaining_in(currency),
            None => {
                debug!(code, "unknown currency code");
                messages::invalid_currency(self.language, code)
            }
        }
    }

    /// The zero check is made on the unconverted remainder, so a small debt that
    /// rounds to zero after conversion is still reported as a debt.
    pub fn today_cash_remaining_in(&self, currency: Currency) -> String {
        let remaining = self.inner.remaining_limit();
        if remaining == Decimal::ZERO {
            return messages::no_money(self.language);
        }

        let converted = (remaining / currency.rate()).round_dp(2).normalize();
        if converted > Decimal::ZERO {
            messages::cash_left(self.language, converted, currency)
        } else {
            messages::in_debt(self.language, converted.abs(), currency)
        }
    }
}

delegate_to_inner!(CashAggregator);
