use rust_decimal::Decimal;

use crate::messages::Language;

/// The fixed conversion table. `limit` and record amounts are in roubles; a
/// remainder divided by [`Currency::rate`] gives the amount in that currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Currency {
    Rub,
    Usd,
    Eur,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Rub => "rub",
            Self::Usd => "usd",
            Self::Eur => "eur",
        }
    }

    /// Exact, case-sensitive lookup by code.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().iter().copied().find(|c| c.code() == code)
    }

    pub fn rate(&self) -> Decimal {
        match self {
            Self::Rub => Decimal::ONE,
            Self::Usd => Decimal::from(60),
            Self::Eur => Decimal::from(70),
        }
    }

    pub fn display_name(&self, lang: Language) -> &'static str {
        match (self, lang) {
            (Self::Rub, Language::Ru) => "руб",
            (Self::Rub, Language::En) => "RUB",
            (Self::Usd, _) => "USD",
            (Self::Eur, _) => "Euro",
        }
    }

    pub fn all() -> &'static [Currency] {
        &[Self::Rub, Self::Usd, Self::Eur]
    }

    /// The next entry of the table, wrapping around.
    pub fn next(&self) -> Self {
        match self {
            Self::Rub => Self::Usd,
            Self::Usd => Self::Eur,
            Self::Eur => Self::Rub,
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
