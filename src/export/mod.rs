//! Save primitive and the export entry point
//!
//! The writer produces bytes; a [`FileSaver`] decides where they go. This
//! is the only place the crate touches the outside world.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use tracing::info;

use crate::conversion::ConversionConfig;
use crate::error::{ConversionError, ConversionErrorKind, ConversionResult};
use crate::formatter::{encode, format_table};
use crate::table::Table;

/// Destination for exported bytes
pub trait FileSaver {
    /// Store `bytes` under `filename`. Called once per export; never retried.
    fn save(&self, bytes: &[u8], filename: &str) -> ConversionResult<()>;
}

/// Writes files into a directory, creating it when missing
#[derive(Debug, Clone)]
pub struct DirectorySaver {
    root: PathBuf,
}

impl DirectorySaver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, filename: &str) -> PathBuf {
        self.root.join(filename)
    }
}

impl FileSaver for DirectorySaver {
    fn save(&self, bytes: &[u8], filename: &str) -> ConversionResult<()> {
        let path = self.path_for(filename);
        let save_error = |err: std::io::Error| {
            ConversionError::conversion_with_source(
                ConversionErrorKind::save(filename, err.to_string()),
                err.into(),
            )
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(save_error)?;
        }
        std::fs::write(&path, bytes).map_err(save_error)?;

        info!(path = %path.display(), bytes = bytes.len(), "saved export");
        Ok(())
    }
}

/// A file captured by [`MemorySaver`]
#[derive(Debug, Clone, PartialEq)]
pub struct SavedFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Keeps saved files in memory
#[derive(Debug, Default)]
pub struct MemorySaver {
    files: RefCell<Vec<SavedFile>>,
}

impl MemorySaver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn files(&self) -> Vec<SavedFile> {
        self.files.borrow().clone()
    }

    pub fn last(&self) -> Option<SavedFile> {
        self.files.borrow().last().cloned()
    }
}

impl FileSaver for MemorySaver {
    fn save(&self, bytes: &[u8], filename: &str) -> ConversionResult<()> {
        self.files.borrow_mut().push(SavedFile {
            filename: filename.to_string(),
            bytes: bytes.to_vec(),
        });
        Ok(())
    }
}

/// Serialize `table`, encode it and hand the bytes to `saver` under `filename`
pub fn export_delimited(
    filename: &str,
    table: &Table,
    config: &ConversionConfig,
    saver: &dyn FileSaver,
) -> ConversionResult<()> {
    let text = format_table(table, config)?;
    let bytes = encode(&text, config);
    saver.save(&bytes, filename)
}

/// `YYYYMMDDHHmmss`, handy for unique export names
pub fn timestamp_string(now: &NaiveDateTime) -> String {
    now.format("%Y%m%d%H%M%S").to_string()
}

/// Default export file name for a moment in time
pub fn default_filename(now: &NaiveDateTime) -> String {
    format!("export-{}.csv", timestamp_string(now))
}
