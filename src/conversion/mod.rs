//! CSV conversion module
//!
//! This module contains the conversion engine, configuration, and input limits.

pub mod config;
pub mod engine;
pub mod limits;

pub use config::{ConversionConfig, Delimiter, QuoteMode};

pub use engine::{ConversionEngine, ConversionMetadata, CsvData};

pub use crate::error::ConversionResult;
