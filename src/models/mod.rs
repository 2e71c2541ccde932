mod currency;
mod record;

pub use currency::Currency;
pub use record::{parse_date, Record, DATE_FORMAT};

#[cfg(test)]
mod tests;
