//! Core conversion engine tying the reader, writer and save step together

use std::time::Instant;

use serde_json::Value;
use tracing::debug;

use crate::conversion::config::ConversionConfig;
use crate::error::ConversionResult;
use crate::export::FileSaver;
use crate::formatter::{encode, format_table};
use crate::locale::format_currency;
use crate::parser::parse_with_config;
use crate::table::Table;

/// Serialized CSV text plus conversion metadata
#[derive(Debug, Clone)]
pub struct CsvData {
    pub content: String,
    pub metadata: ConversionMetadata,
}

impl CsvData {
    /// Create a new CSV data result
    pub fn new(content: String, metadata: ConversionMetadata) -> Self {
        Self { content, metadata }
    }

    /// Get the formatted CSV output
    pub fn as_str(&self) -> &str {
        &self.content
    }

    /// Get the length of the output in bytes
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Check if the output is empty
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Metadata about a write
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionMetadata {
    pub rows: usize,
    pub columns: usize,
    pub output_size: u64,
    pub processing_time_ms: u64,
}

/// Main conversion engine
pub struct ConversionEngine {
    config: ConversionConfig,
}

impl ConversionEngine {
    /// Create a new conversion engine
    pub fn new(config: ConversionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    /// Read delimited text into a table
    pub fn read(&self, text: &str) -> Table {
        let table = parse_with_config(text, &self.config);
        debug!(rows = table.len(), "parsed delimited text");
        table
    }

    /// Read delimited text straight into a JSON array of objects
    pub fn read_to_json(&self, text: &str) -> Value {
        self.read(text).to_json()
    }

    /// Serialize a table to CSV text
    pub fn write(&self, table: &Table) -> ConversionResult<CsvData> {
        let start_time = Instant::now();
        let content = format_table(table, &self.config)?;

        let metadata = ConversionMetadata {
            rows: table.len(),
            columns: table.columns()?.len(),
            output_size: content.len() as u64,
            processing_time_ms: start_time.elapsed().as_millis() as u64,
        };
        debug!(rows = metadata.rows, bytes = metadata.output_size, "formatted table");

        Ok(CsvData::new(content, metadata))
    }

    /// Bytes for a written result, BOM included when configured
    pub fn encode(&self, data: &CsvData) -> Vec<u8> {
        encode(&data.content, &self.config)
    }

    /// Write `table` and save it under `filename`
    pub fn export(
        &self,
        filename: &str,
        table: &Table,
        saver: &dyn FileSaver,
    ) -> ConversionResult<ConversionMetadata> {
        let data = self.write(table)?;
        let bytes = self.encode(&data);
        saver.save(&bytes, filename)?;

        Ok(ConversionMetadata {
            output_size: bytes.len() as u64,
            ..data.metadata
        })
    }

    /// Format `amount` in the configured currency and locale
    pub fn format_currency(&self, amount: f64) -> ConversionResult<String> {
        format_currency(amount, &self.config.currency, self.config.locale)
    }
}
