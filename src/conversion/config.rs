//! Configuration options for CSV conversion

use std::fmt;
use std::str::FromStr;

use crate::error::{ConversionError, ConversionErrorKind};
use crate::locale::Locale;

/// Single-character field separator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiter(char);

impl Delimiter {
    pub const COMMA: Delimiter = Delimiter(',');
    pub const TAB: Delimiter = Delimiter('\t');
    pub const PIPE: Delimiter = Delimiter('|');
    pub const SEMICOLON: Delimiter = Delimiter(';');

    /// Create a delimiter from a character.
    ///
    /// Quotes and line breaks are rejected: they would collide with field
    /// quoting and row termination.
    pub fn new(ch: char) -> Result<Self, ConversionError> {
        match ch {
            '"' => Err(ConversionErrorKind::invalid_delimiter(
                ch.to_string(),
                "the double quote is reserved for field quoting",
            )
            .into()),
            '\n' | '\r' => Err(ConversionErrorKind::invalid_delimiter(
                ch.escape_default().to_string(),
                "line breaks terminate rows",
            )
            .into()),
            _ => Ok(Self(ch)),
        }
    }

    pub fn as_char(&self) -> char {
        self.0
    }

    /// The delimiter as a single byte, if it is ASCII
    pub fn as_ascii(&self) -> Option<u8> {
        self.0.is_ascii().then_some(self.0 as u8)
    }
}

impl Default for Delimiter {
    fn default() -> Self {
        Self::COMMA
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Delimiter {
    type Err = ConversionError;

    /// Accepts `comma`, `tab`, `pipe`, `semicolon` or any single character
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "comma" => return Ok(Self::COMMA),
            "tab" | "\\t" => return Ok(Self::TAB),
            "pipe" => return Ok(Self::PIPE),
            "semicolon" => return Ok(Self::SEMICOLON),
            _ => {}
        }

        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Self::new(ch),
            _ => Err(ConversionErrorKind::invalid_delimiter(
                s,
                "use 'comma', 'tab', 'pipe', 'semicolon' or a single character",
            )
            .into()),
        }
    }
}

/// How the reader treats double quotes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteMode {
    /// Quotes are ordinary characters; every delimiter splits
    #[default]
    Literal,
    /// Quoted fields may contain the delimiter and doubled quotes (single line only)
    Rfc4180,
}

/// Conversion configuration options
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Field separator
    pub delimiter: Delimiter,
    /// Reader quote handling
    pub quote_mode: QuoteMode,
    /// Locale used for date-time and currency rendering
    pub locale: Locale,
    /// ISO 4217 currency code for currency rendering
    pub currency: String,
    /// Prepend a UTF-8 byte-order mark to written files
    pub include_bom: bool,
    /// Maximum input file size in bytes
    pub input_limit: u64,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            delimiter: Delimiter::COMMA,
            quote_mode: QuoteMode::Literal,
            locale: Locale::default(),
            currency: "USD".to_string(),
            include_bom: true,
            input_limit: 100 * 1024 * 1024, // 100MB
        }
    }
}

impl ConversionConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_quote_mode(mut self, mode: QuoteMode) -> Self {
        self.quote_mode = mode;
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    pub fn with_bom(mut self, include_bom: bool) -> Self {
        self.include_bom = include_bom;
        self
    }

    pub fn with_input_limit(mut self, limit_bytes: u64) -> Self {
        self.input_limit = limit_bytes;
        self
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<(), ConversionError> {
        if self.input_limit == 0 {
            return Err(
                ConversionErrorKind::configuration("Input limit must be greater than 0").into(),
            );
        }

        if self.quote_mode == QuoteMode::Rfc4180 && self.delimiter.as_ascii().is_none() {
            return Err(ConversionErrorKind::invalid_delimiter(
                self.delimiter.to_string(),
                "quote-aware reading needs an ASCII delimiter",
            )
            .into());
        }

        crate::locale::normalize_currency(&self.currency)?;

        Ok(())
    }
}
