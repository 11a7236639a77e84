//! Field quoting for delimited output
//!
//! Double quotes are escaped by doubling. A field is wrapped in quotes only
//! when it contains a quote, the delimiter or a line break.

use crate::conversion::Delimiter;

/// Quoting engine for delimited fields
pub struct QuoteEngine {
    delimiter: char,
}

impl QuoteEngine {
    /// Create a new quote engine with the specified delimiter
    pub fn new(delimiter: Delimiter) -> Self {
        Self {
            delimiter: delimiter.as_char(),
        }
    }

    /// Whether an (already escaped) value must be wrapped in quotes
    pub fn needs_quoting(&self, value: &str) -> bool {
        value
            .chars()
            .any(|ch| ch == '"' || ch == '\n' || ch == '\r' || ch == self.delimiter)
    }

    /// Double every quote character
    pub fn escape(&self, value: &str) -> String {
        value.replace('"', "\"\"")
    }

    /// Escape and, when necessary, wrap a field
    pub fn format(&self, value: &str) -> String {
        let escaped = self.escape(value);
        if self.needs_quoting(&escaped) {
            let mut quoted = String::with_capacity(escaped.len() + 2);
            quoted.push('"');
            quoted.push_str(&escaped);
            quoted.push('"');
            quoted
        } else {
            escaped
        }
    }
}

/// Convenience function to format a single field
pub fn quote_field(value: &str, delimiter: Delimiter) -> String {
    QuoteEngine::new(delimiter).format(value)
}
