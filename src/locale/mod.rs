//! Locale-aware rendering of date-times and currency amounts
//!
//! Locale and currency are always passed in explicitly; nothing here reads
//! process-wide state.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;

use crate::error::{ConversionError, ConversionErrorKind, ConversionResult};

/// Supported rendering locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    EnUs,
    EnGb,
    TrTr,
    DeDe,
    FrFr,
    /// ISO 8601 dates, plain numbers, currency code suffix
    Iso,
}

/// Where the currency symbol goes relative to the amount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SymbolPlacement {
    Prefix,
    Suffix,
}

impl Locale {
    /// BCP 47 tag for this locale
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::EnUs => "en-US",
            Locale::EnGb => "en-GB",
            Locale::TrTr => "tr-TR",
            Locale::DeDe => "de-DE",
            Locale::FrFr => "fr-FR",
            Locale::Iso => "iso",
        }
    }

    /// chrono format string matching the browser's `toLocaleString` output
    pub fn datetime_pattern(&self) -> &'static str {
        match self {
            Locale::EnUs => "%-m/%-d/%Y, %-I:%M:%S %p",
            Locale::EnGb => "%d/%m/%Y, %H:%M:%S",
            Locale::TrTr => "%d.%m.%Y %H:%M:%S",
            Locale::DeDe => "%-d.%-m.%Y, %H:%M:%S",
            Locale::FrFr => "%d/%m/%Y %H:%M:%S",
            Locale::Iso => "%Y-%m-%d %H:%M:%S",
        }
    }

    pub fn format_datetime(&self, value: &NaiveDateTime) -> String {
        value.format(self.datetime_pattern()).to_string()
    }

    /// (group separator, decimal separator)
    fn separators(&self) -> (Option<char>, char) {
        match self {
            Locale::EnUs | Locale::EnGb => (Some(','), '.'),
            Locale::TrTr | Locale::DeDe => (Some('.'), ','),
            Locale::FrFr => (Some('\u{202f}'), ','),
            Locale::Iso => (None, '.'),
        }
    }

    fn symbol_placement(&self) -> SymbolPlacement {
        match self {
            Locale::EnUs | Locale::EnGb | Locale::TrTr => SymbolPlacement::Prefix,
            Locale::DeDe | Locale::FrFr | Locale::Iso => SymbolPlacement::Suffix,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().replace('_', "-").to_lowercase().as_str() {
            "en-us" | "en" => Ok(Locale::EnUs),
            "en-gb" => Ok(Locale::EnGb),
            "tr-tr" | "tr" => Ok(Locale::TrTr),
            "de-de" | "de" => Ok(Locale::DeDe),
            "fr-fr" | "fr" => Ok(Locale::FrFr),
            "iso" => Ok(Locale::Iso),
            _ => Err(ConversionErrorKind::UnknownLocale { tag: s.to_string() }.into()),
        }
    }
}

/// Validate and upper-case an ISO 4217 currency code
pub fn normalize_currency(code: &str) -> ConversionResult<String> {
    let trimmed = code.trim();
    if trimmed.len() != 3 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ConversionErrorKind::InvalidCurrency {
            code: code.to_string(),
        }
        .into());
    }
    Ok(trimmed.to_ascii_uppercase())
}

fn currency_symbol(code: &str) -> Option<&'static str> {
    match code {
        "TRY" => Some("₺"),
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "JPY" => Some("¥"),
        _ => None,
    }
}

fn minor_digits(code: &str) -> usize {
    match code {
        "JPY" | "KRW" => 0,
        _ => 2,
    }
}

/// Format `amount` in `currency` following the conventions of `locale`
///
/// ```
/// use tabconv::locale::{format_currency, Locale};
///
/// assert_eq!(format_currency(1234.5, "TRY", Locale::TrTr).unwrap(), "₺1.234,50");
/// assert_eq!(format_currency(-12.0, "usd", Locale::EnUs).unwrap(), "-$12.00");
/// ```
pub fn format_currency(amount: f64, currency: &str, locale: Locale) -> ConversionResult<String> {
    let code = normalize_currency(currency)?;
    if !amount.is_finite() {
        return Err(ConversionErrorKind::invalid_input(format!(
            "cannot format non-finite amount {}",
            amount
        ))
        .into());
    }

    let digits = minor_digits(&code);
    let fixed = format!("{:.*}", digits, amount.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (fixed.as_str(), None),
    };

    let (group, decimal) = locale.separators();
    let mut number = group_digits(int_part, group);
    if let Some(frac) = frac_part {
        number.push(decimal);
        number.push_str(frac);
    }

    // "-0.00" after rounding is still printed as zero
    let negative = amount < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0');
    let sign = if negative { "-" } else { "" };

    let formatted = match (locale, locale.symbol_placement()) {
        (Locale::Iso, _) => format!("{}{} {}", sign, number, code),
        (_, SymbolPlacement::Prefix) => match currency_symbol(&code) {
            Some(symbol) => format!("{}{}{}", sign, symbol, number),
            None => format!("{}{}\u{a0}{}", sign, code, number),
        },
        (_, SymbolPlacement::Suffix) => {
            let symbol = currency_symbol(&code).unwrap_or(code.as_str());
            format!("{}{}\u{a0}{}", sign, number, symbol)
        }
    };

    Ok(formatted)
}

fn group_digits(digits: &str, separator: Option<char>) -> String {
    let Some(separator) = separator else {
        return digits.to_string();
    };

    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}
