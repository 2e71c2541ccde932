//! User-facing message templates in the two supported languages.

use rust_decimal::Decimal;

use crate::models::Currency;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    Ru,
    En,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ru => "ru",
            Self::En => "en",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "ru" | "rus" | "russian" => Some(Self::Ru),
            "en" | "eng" | "english" => Some(Self::En),
            _ => None,
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Self::Ru => Self::En,
            Self::En => Self::Ru,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unknown language '{s}', expected ru or en"))
    }
}

pub(crate) fn eat_more(lang: Language, kcal: Decimal) -> String {
    match lang {
        Language::Ru => format!(
            "Сегодня можно съесть что-нибудь ещё, но с общей калорийностью не более {kcal} кКал"
        ),
        Language::En => format!("You can eat something else today, but no more than {kcal} kcal"),
    }
}

pub(crate) fn stop_eating(lang: Language) -> String {
    match lang {
        Language::Ru => "Хватит есть!".to_string(),
        Language::En => "Stop eating!".to_string(),
    }
}

pub(crate) fn invalid_currency(lang: Language, code: &str) -> String {
    match lang {
        Language::Ru => format!("Указана неправильная валюта - {code}"),
        Language::En => format!("Invalid currency - {code}"),
    }
}

pub(crate) fn no_money(lang: Language) -> String {
    match lang {
        Language::Ru => "Денег нет, держись".to_string(),
        Language::En => "No money left, hang in there".to_string(),
    }
}

pub(crate) fn cash_left(lang: Language, amount: Decimal, currency: Currency) -> String {
    let name = currency.display_name(lang);
    match lang {
        Language::Ru => format!("На сегодня осталось {amount} {name}"),
        Language::En => format!("Left for today: {amount} {name}"),
    }
}

pub(crate) fn in_debt(lang: Language, debt: Decimal, currency: Currency) -> String {
    let name = currency.display_name(lang);
    match lang {
        Language::Ru => format!("Денег нет, держись: твой долг - {debt} {name}"),
        Language::En => format!("No money left, hang in there: you owe {debt} {name}"),
    }
}
