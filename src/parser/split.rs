//! Line splitting strategies

use csv::{ReaderBuilder, StringRecord, Terminator};

/// Split on every delimiter occurrence; quotes are ordinary characters
pub fn split_literal(line: &str, delimiter: char) -> Vec<&str> {
    line.split(delimiter).collect()
}

/// Quote-aware splitter for single lines, backed by the `csv` reader
///
/// A field opening with `"` runs to its closing quote, with `""` standing for
/// one literal quote. A quote in the middle of an unquoted field is literal.
/// An unterminated quote swallows the rest of the line.
pub struct QuotedSplitter {
    builder: ReaderBuilder,
}

impl QuotedSplitter {
    /// Create a splitter for an ASCII delimiter byte
    pub fn new(delimiter: u8) -> Self {
        let mut builder = ReaderBuilder::new();
        builder
            .has_headers(false)
            .flexible(true)
            .delimiter(delimiter)
            // lines arrive without '\n', so a stray '\r' stays field content
            .terminator(Terminator::Any(b'\n'));
        Self { builder }
    }

    pub fn split(&self, line: &str) -> Vec<String> {
        let mut reader = self.builder.from_reader(line.as_bytes());
        let mut record = StringRecord::new();
        match reader.read_record(&mut record) {
            Ok(true) => record.iter().map(String::from).collect(),
            // blank line; input is already valid UTF-8 so errors cannot occur
            Ok(false) | Err(_) => vec![String::new()],
        }
    }
}

/// Quote-aware split of a single line
pub fn split_quoted(line: &str, delimiter: u8) -> Vec<String> {
    QuotedSplitter::new(delimiter).split(line)
}
