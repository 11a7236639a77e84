//! Delimited text writer
//!
//! Pure serialization of a [`Table`] into CSV text. Bytes and the save step
//! live in [`crate::export`].

pub mod quotes;

use crate::conversion::{ConversionConfig, Delimiter};
use crate::error::ConversionResult;
use crate::table::{number_to_string, Cell, Table};

pub use quotes::{quote_field, QuoteEngine};

/// Row terminator used for every line, header included
pub const LINE_TERMINATOR: &str = "\r\n";

/// UTF-8 byte-order mark prepended to saved files
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Main CSV formatter
pub struct CsvFormatter<'a> {
    config: &'a ConversionConfig,
    quotes: QuoteEngine,
}

impl<'a> CsvFormatter<'a> {
    /// Create a new formatter with configuration
    pub fn new(config: &'a ConversionConfig) -> Self {
        Self {
            config,
            quotes: QuoteEngine::new(config.delimiter),
        }
    }

    /// Serialize a table. Column order comes from the first record.
    pub fn format(&self, table: &Table) -> ConversionResult<String> {
        let columns = table.columns()?;
        let delimiter = self.config.delimiter.as_char();

        let mut out = String::new();
        self.push_line(
            &mut out,
            columns.iter().map(|column| self.quotes.format(column)),
            delimiter,
        );

        for record in table {
            self.push_line(
                &mut out,
                columns
                    .iter()
                    .map(|column| self.quotes.format(&self.render_cell(record.get(column)))),
                delimiter,
            );
        }

        Ok(out)
    }

    fn push_line(&self, out: &mut String, fields: impl Iterator<Item = String>, delimiter: char) {
        for (i, field) in fields.enumerate() {
            if i > 0 {
                out.push(delimiter);
            }
            out.push_str(&field);
        }
        out.push_str(LINE_TERMINATOR);
    }

    /// Stringify a cell before escaping; null and absent values are empty
    pub fn render_cell(&self, cell: Option<&Cell>) -> String {
        match cell {
            None | Some(Cell::Null) => String::new(),
            Some(Cell::Bool(b)) => b.to_string(),
            Some(Cell::Number(n)) => number_to_string(*n),
            Some(Cell::Text(s)) => s.clone(),
            Some(Cell::DateTime(dt)) => self.config.locale.format_datetime(dt),
        }
    }
}

/// Serialize a table with the given delimiter and default locale
pub fn write_delimited(table: &Table, delimiter: Delimiter) -> ConversionResult<String> {
    let config = ConversionConfig::default().with_delimiter(delimiter);
    format_table(table, &config)
}

/// Serialize a table using the delimiter and locale from `config`
pub fn format_table(table: &Table, config: &ConversionConfig) -> ConversionResult<String> {
    CsvFormatter::new(config).format(table)
}

/// Bytes to hand to the save primitive, BOM first when configured
pub fn encode(text: &str, config: &ConversionConfig) -> Vec<u8> {
    let bom: &[u8] = if config.include_bom { UTF8_BOM } else { &[] };
    let mut bytes = Vec::with_capacity(bom.len() + text.len());
    bytes.extend_from_slice(bom);
    bytes.extend_from_slice(text.as_bytes());
    bytes
}
