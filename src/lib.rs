//! Track dated amounts (money spent or kilocalories eaten) against a daily limit.
//!
//! A [`Record`] is appended to one of the aggregators, which then answer how much was
//! recorded today, over the trailing week, and how much of the daily limit is left.

pub mod aggregate;
mod error;
pub mod import;
pub mod messages;
pub mod models;

pub use aggregate::{Aggregator, CalorieAggregator, CashAggregator};
pub use error::{Error, Result};
pub use messages::Language;
pub use models::{Currency, Record};
