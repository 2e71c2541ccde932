use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::{delegate_to_inner, Aggregator};
use crate::messages::{self, Language};

/// Daily kilocalorie tracker.
#[derive(Debug, Clone)]
pub struct CalorieAggregator {
    inner: Aggregator,
    language: Language,
}

impl CalorieAggregator {
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

    /// "Eat more" with the remaining kilocalories when there is room left,
    /// otherwise "stop eating".
    pub fn calorie_recommendation(&self) -> String {
        let remaining = self.inner.remaining_limit();
        if remaining > Decimal::ZERO {
            messages::eat_more(self.language, remaining)
        } else {
            messages::stop_eating(self.language)
        }
    }
}

delegate_to_inner!(CalorieAggregator);
