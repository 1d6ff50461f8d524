//! Tabular source loading.
//!
//! This crate turns uploaded CSV files and workbooks into [`SourceTable`]s
//! whose columns keep each cell's scalar type, so the comparator can tell a
//! float `123.0` from the text `"123.0"`.
//!
//! # Features
//!
//! - **CSV Loading**: Polars reader with whole-file schema inference
//! - **Workbook Loading**: xlsx/xls/xlsm/xlsb/ods through calamine
//! - **Column Overview**: inferred kind and null counts per column
//! - **Column Guessing**: picks the smartcard column by name
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use scc_ingest::{LoadOptions, guess_id_column, load_source, DEFAULT_ID_KEYWORD};
//!
//! let table = load_source(Path::new("cards.xlsx"), &LoadOptions::default())?;
//! let names = table.column_names();
//! let column = guess_id_column(&names, DEFAULT_ID_KEYWORD).unwrap();
//! let values = table.column(column)?;
//! ```

mod csv;
mod error;
mod excel;
mod headers;
mod hints;
mod kind;
mod nulls;
mod table;
mod values;

use std::path::Path;

use tracing::info_span;

// === Error Types ===
pub use error::{IngestError, Result};

// === Format Detection ===
pub use kind::{FileKind, WORKBOOK_EXTENSIONS};

// === Readers ===
pub use csv::{parse_csv_line, read_csv_frame, read_csv_schema, read_csv_source, validate_encoding};
pub use excel::{cell_to_raw, read_excel_source};
pub use headers::{dedupe_headers, finalize_headers};
pub use nulls::{NULL_TOKENS, is_null_token};
pub use values::{any_to_raw, column_values};

// === Tables ===
pub use table::{SourceColumn, SourceTable};

// === Column Guessing ===
pub use hints::{DEFAULT_ID_KEYWORD, guess_id_column};

/// Maximum accepted file size (500 MB default).
pub const MAX_FILE_SIZE: u64 = 500 * 1024 * 1024;

/// Options controlling how a source is loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    /// Worksheet to read from a workbook (first sheet when `None`).
    pub sheet: Option<String>,
    /// Infer numeric column types for CSV files. When false every CSV cell is
    /// read as text. Workbook cells always keep their stored type.
    pub infer_types: bool,
    /// Reject files larger than this many bytes.
    pub max_file_size: u64,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            sheet: None,
            infer_types: true,
            max_file_size: MAX_FILE_SIZE,
        }
    }
}

impl LoadOptions {
    #[must_use]
    pub fn with_sheet(mut self, sheet: Option<String>) -> Self {
        self.sheet = sheet;
        self
    }

    #[must_use]
    pub fn with_infer_types(mut self, enable: bool) -> Self {
        self.infer_types = enable;
        self
    }
}

/// Check file size against a limit.
pub fn check_file_size(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| IngestError::io(path, e))?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// Loads a CSV file or workbook, choosing the reader from the extension.
pub fn load_source(path: &Path, options: &LoadOptions) -> Result<SourceTable> {
    let span = info_span!("load", path = %path.display());
    let _guard = span.enter();

    let kind = FileKind::from_path(path)?;
    check_file_size(path, options.max_file_size)?;

    let table = match kind {
        FileKind::Csv => read_csv_source(path, options)?,
        FileKind::Workbook => read_excel_source(path, options)?,
    };
    tracing::info!(
        source = %table.name,
        kind = %kind,
        rows = table.height(),
        columns = table.width(),
        "source loaded"
    );
    Ok(table)
}
