//! Error types for source loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a tabular source.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Source file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the size limit.
    #[error("file {path} is too large ({size} bytes, limit {max_size} bytes)")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// File extension is not a supported tabular format.
    #[error("unsupported file type '{extension}' for {path} (expected csv, xlsx, xls, xlsm, xlsb or ods)")]
    UnsupportedFormat { path: PathBuf, extension: String },

    // === CSV Parsing Errors ===
    /// File uses an encoding other than UTF-8.
    #[error("unsupported encoding {encoding} in {path} (save the file as UTF-8)")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    /// Failed to parse CSV with Polars.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// CSV file is empty.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    /// Header row is blank.
    #[error("could not detect header row in {path}")]
    NoHeaderDetected { path: PathBuf },

    // === Workbook Errors ===
    /// Workbook could not be opened (corrupt, password protected, wrong format).
    #[error("failed to open workbook {path}: {message}")]
    WorkbookOpen { path: PathBuf, message: String },

    /// Workbook has no worksheets.
    #[error("workbook has no worksheet: {path}")]
    NoWorksheet { path: PathBuf },

    /// Requested sheet does not exist.
    #[error("sheet '{sheet}' not found in {path} (available: {})", .available.join(", "))]
    SheetNotFound {
        path: PathBuf,
        sheet: String,
        available: Vec<String>,
    },

    /// Worksheet could not be read.
    #[error("failed to read sheet '{sheet}' in {path}: {message}")]
    SheetRead {
        path: PathBuf,
        sheet: String,
        message: String,
    },

    // === Table Errors ===
    /// Column not found in a loaded source.
    #[error("column '{column}' not found (available: {})", .available.join(", "))]
    ColumnNotFound {
        column: String,
        available: Vec<String>,
    },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl IngestError {
    /// Maps an I/O error on `path` to the matching variant.
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::FileRead {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for loading operations.
pub type Result<T> = std::result::Result<T, IngestError>;
