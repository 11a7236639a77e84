//! Delimited text reader
//!
//! Turns raw delimited text into a [`Table`]. The reader never fails:
//! short rows get absent trailing values, extra fields are dropped and
//! blank input yields an empty table.

pub mod coerce;
pub mod split;

use tracing::debug;

use crate::conversion::{ConversionConfig, Delimiter, QuoteMode};
use crate::table::{Record, Table};

pub use coerce::{coerce_field, parse_number};

const BOM: char = '\u{feff}';

/// Parse delimited text with literal (quote-unaware) splitting
pub fn parse(text: &str, delimiter: Delimiter) -> Table {
    parse_lines(text, delimiter, QuoteMode::Literal)
}

/// Parse delimited text using the delimiter and quote mode from `config`
pub fn parse_with_config(text: &str, config: &ConversionConfig) -> Table {
    parse_lines(text, config.delimiter, config.quote_mode)
}

fn parse_lines(text: &str, delimiter: Delimiter, mode: QuoteMode) -> Table {
    let text = text.strip_prefix(BOM).unwrap_or(text);
    let mut lines: Vec<&str> = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();

    // a final line terminator does not start another row
    if lines.len() > 1 && lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }

    let splitter = Splitter::new(delimiter, mode);
    let mut lines = lines.into_iter();
    let headers = match lines.next() {
        Some(header) => splitter.split(header),
        None => return Table::new(),
    };

    let mut table = Table::new();
    for (index, line) in lines.enumerate() {
        let fields = splitter.split(line);
        if fields.len() != headers.len() {
            debug!(
                line = index + 2,
                expected = headers.len(),
                found = fields.len(),
                "row does not match header width"
            );
        }

        let mut record = Record::with_capacity(headers.len());
        for (position, header) in headers.iter().enumerate() {
            match fields.get(position) {
                Some(raw) => record.insert(header.as_str(), coerce_field(raw)),
                None => record.insert_absent(header.as_str()),
            }
        }
        table.push(record);
    }

    table
}

enum Splitter {
    Literal(char),
    Quoted(split::QuotedSplitter),
}

impl Splitter {
    fn new(delimiter: Delimiter, mode: QuoteMode) -> Self {
        match (mode, delimiter.as_ascii()) {
            (QuoteMode::Rfc4180, Some(byte)) => Self::Quoted(split::QuotedSplitter::new(byte)),
            (QuoteMode::Rfc4180, None) => {
                debug!(%delimiter, "non-ASCII delimiter, falling back to literal splitting");
                Self::Literal(delimiter.as_char())
            }
            (QuoteMode::Literal, _) => Self::Literal(delimiter.as_char()),
        }
    }

    fn split(&self, line: &str) -> Vec<String> {
        match self {
            Self::Literal(delimiter) => split::split_literal(line, *delimiter)
                .into_iter()
                .map(String::from)
                .collect(),
            Self::Quoted(splitter) => splitter.split(line),
        }
    }
}
