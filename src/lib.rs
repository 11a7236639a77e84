//! Tabular data interchange
//!
//! Converts delimited text (CSV) into ordered records and back, and hands
//! the written bytes to a pluggable save primitive.
//!
//! ```
//! use tabconv::{csv_to_json, Delimiter};
//! use serde_json::json;
//!
//! let records = csv_to_json("a,b\n1,x", Delimiter::COMMA);
//! assert_eq!(records, json!([{"a": 1, "b": "x"}]));
//! ```

pub mod cli;
pub mod conversion;
pub mod error;
pub mod export;
pub mod formatter;
pub mod locale;
pub mod parser;
pub mod table;

// Re-export commonly used types
pub use conversion::{ConversionConfig, ConversionEngine, Delimiter, QuoteMode};
pub use error::{ConversionError, ConversionErrorKind, ConversionResult, ParseError};
pub use export::{export_delimited, DirectorySaver, FileSaver, MemorySaver};
pub use formatter::write_delimited;
pub use locale::{format_currency, Locale};
pub use parser::parse;
pub use table::{Cell, Record, Table};

/// Parse delimited text and return the records as a JSON array of objects
pub fn csv_to_json(text: &str, delimiter: Delimiter) -> serde_json::Value {
    parse(text, delimiter).to_json()
}

/// Write `table` as CSV with the default locale and save it under `filename`
pub fn export_to_csv_file(
    filename: &str,
    table: &Table,
    delimiter: Delimiter,
    saver: &dyn FileSaver,
) -> ConversionResult<()> {
    let config = ConversionConfig::default().with_delimiter(delimiter);
    export_delimited(filename, table, &config, saver)
}
