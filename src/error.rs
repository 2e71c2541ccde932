use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Hard failures. Soft conditions such as an unknown currency code are reported
/// as plain messages by the aggregators instead.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid date '{input}', expected DD.MM.YYYY")]
    InvalidDate {
        input: String,
        #[source]
        source: Option<chrono::ParseError>,
    },
    #[error("row {row}: invalid amount '{value}'")]
    InvalidAmount { row: usize, value: String },
    #[error("row {row}: {source}")]
    InvalidRow {
        row: usize,
        #[source]
        source: Box<Error>,
    },
    #[error("failed to read CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn invalid_date(input: &str, source: Option<chrono::ParseError>) -> Self {
        Self::InvalidDate {
            input: input.to_string(),
            source,
        }
    }
}
