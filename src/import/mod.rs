//! Loading records from CSV: an `amount,comment[,date]` row per record.

mod csv_import;

pub use csv_import::{RecordReader, MAX_AMOUNT};
