/// Formatter adapters for the output table
mod csv_formatter;

pub use csv_formatter::{CsvFormatter, CSV_HEADERS};
