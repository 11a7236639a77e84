use std::path::Path;

use crate::conversion::config::ConversionConfig;
use crate::error::{ConversionErrorKind, ConversionResult};

/// Check the file size before reading it, so an oversized input is never
/// loaded into memory.
pub fn check_file_size(path: &Path, config: &ConversionConfig) -> ConversionResult<()> {
    let metadata = std::fs::metadata(path).map_err(|e| {
        ConversionErrorKind::io(e.to_string(), Some(path.to_path_buf()))
    })?;

    check_size(metadata.len(), config)
}

/// Check an already known input size against the configured limit
pub fn check_size(size: u64, config: &ConversionConfig) -> ConversionResult<()> {
    if size > config.input_limit {
        return Err(ConversionErrorKind::InputTooLarge {
            size,
            limit: config.input_limit,
        }
        .into());
    }
    Ok(())
}

/// Read a whole file after checking its size
pub fn read_limited(path: &Path, config: &ConversionConfig) -> ConversionResult<String> {
    check_file_size(path, config)?;
    std::fs::read_to_string(path)
        .map_err(|e| ConversionErrorKind::io(e.to_string(), Some(path.to_path_buf())).into())
}
