//! Command-line interface module

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::conversion::{ConversionConfig, Delimiter, QuoteMode};
use crate::error::{ConversionErrorKind, ConversionResult};
use crate::locale::Locale;

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "tabconv")]
#[command(about = "Convert delimited text (CSV) to JSON records and back")]
#[command(version)]
pub struct Args {
    /// Enable verbose logging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Read CSV and print it as a JSON array of objects
    Import {
        /// Input CSV file, or '-' for standard input
        input: String,

        /// Field delimiter: comma, tab, pipe, semicolon or a single character
        #[arg(short, long, default_value = "comma", value_parser = parse_delimiter)]
        delimiter: Delimiter,

        /// Honor double-quoted fields (single-line only)
        #[arg(long)]
        quote_aware: bool,

        /// Output JSON file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Emit compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,

        /// Maximum input size (e.g., 100MB, default: 100MB)
        #[arg(long)]
        input_limit: Option<String>,
    },
    /// Read a JSON array of objects and save it as CSV
    Export {
        /// Input JSON file, or '-' for standard input
        input: String,

        /// File name to save as (default: export-<timestamp>.csv)
        #[arg(short, long)]
        filename: Option<String>,

        /// Directory the file is saved into
        #[arg(long, default_value = ".")]
        output_dir: PathBuf,

        /// Field delimiter: comma, tab, pipe, semicolon or a single character
        #[arg(short, long, default_value = "comma", value_parser = parse_delimiter)]
        delimiter: Delimiter,

        /// Locale for date-time values (en-US, en-GB, tr-TR, de-DE, fr-FR, iso)
        #[arg(long, default_value = "en-US", value_parser = parse_locale)]
        locale: Locale,

        /// Do not prepend the UTF-8 byte-order mark
        #[arg(long)]
        no_bom: bool,

        /// Treat ISO 8601 date-time strings as date-times
        #[arg(long)]
        parse_dates: bool,

        /// Maximum input size (e.g., 100MB, default: 100MB)
        #[arg(long)]
        input_limit: Option<String>,
    },
    /// Format an amount as currency
    Currency {
        /// Amount to format
        #[arg(allow_hyphen_values = true)]
        amount: f64,

        /// ISO 4217 currency code
        #[arg(long, default_value = "TRY")]
        currency: String,

        /// Locale for separators and symbol placement
        #[arg(long, default_value = "tr-TR", value_parser = parse_locale)]
        locale: Locale,
    },
}

impl Args {
    /// Default log filter directive for the verbosity flags
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        }
    }
}

impl Commands {
    /// Build the conversion configuration for this command
    pub fn to_config(&self) -> ConversionResult<ConversionConfig> {
        let config = match self {
            Commands::Import {
                delimiter,
                quote_aware,
                input_limit,
                ..
            } => {
                let mode = if *quote_aware {
                    QuoteMode::Rfc4180
                } else {
                    QuoteMode::Literal
                };
                ConversionConfig::default()
                    .with_delimiter(*delimiter)
                    .with_quote_mode(mode)
                    .with_input_limit(parse_size_limit(input_limit.as_deref())?)
            }
            Commands::Export {
                delimiter,
                locale,
                no_bom,
                input_limit,
                ..
            } => ConversionConfig::default()
                .with_delimiter(*delimiter)
                .with_locale(*locale)
                .with_bom(!*no_bom)
                .with_input_limit(parse_size_limit(input_limit.as_deref())?),
            Commands::Currency {
                currency, locale, ..
            } => ConversionConfig::default()
                .with_locale(*locale)
                .with_currency(currency.clone()),
        };

        config.validate()?;
        Ok(config)
    }
}

fn parse_delimiter(s: &str) -> Result<Delimiter, String> {
    s.parse::<Delimiter>().map_err(|e| e.to_string())
}

fn parse_locale(s: &str) -> Result<Locale, String> {
    s.parse::<Locale>().map_err(|e| e.to_string())
}

/// Parse a size limit string (e.g., "100MB", "1GB", "500KB", "2048")
pub fn parse_size_limit(limit: Option<&str>) -> ConversionResult<u64> {
    let Some(limit_str) = limit else {
        return Ok(ConversionConfig::default().input_limit);
    };

    let invalid = || ConversionErrorKind::configuration(format!("Invalid size limit '{}'", limit_str));
    let upper = limit_str.trim().to_uppercase();

    let (number, multiplier) = if let Some(size) = upper.strip_suffix("GB") {
        (size, 1024.0 * 1024.0 * 1024.0)
    } else if let Some(size) = upper.strip_suffix("MB") {
        (size, 1024.0 * 1024.0)
    } else if let Some(size) = upper.strip_suffix("KB") {
        (size, 1024.0)
    } else if let Some(size) = upper.strip_suffix('B') {
        (size, 1.0)
    } else {
        (upper.as_str(), 1.0)
    };

    let value = number.trim().parse::<f64>().map_err(|_| invalid())?;
    if !value.is_finite() || value <= 0.0 {
        return Err(invalid().into());
    }
    Ok((value * multiplier) as u64)
}
