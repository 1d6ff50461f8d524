//! One-column identifier CSV downloads.

use std::fs;
use std::path::{Path, PathBuf};

use scc_model::{ComparisonResult, IdentifierSet, OutputPaths};
use tracing::info;

use crate::error::{OutputError, Result};

/// Default header of the identifier column.
pub const DEFAULT_ID_HEADER: &str = "Smartcard Number";

pub const SHARED_FILE_NAME: &str = "smartcards_in_both_files.csv";
pub const ONLY_A_FILE_NAME: &str = "smartcards_only_in_file1.csv";
pub const ONLY_B_FILE_NAME: &str = "smartcards_only_in_file2.csv";

/// Renders an identifier set as CSV text: a header row, then one identifier
/// per row in ascending order.
pub fn render_identifier_csv(ids: &IdentifierSet, header: &str) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([header])?;
    for id in ids {
        writer.write_record([id.as_str()])?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| OutputError::Csv(e.into_error().into()))?;
    String::from_utf8(bytes).map_err(|_| OutputError::Utf8)
}

/// Writes an identifier set to `path`.
pub fn write_identifier_csv(path: &Path, ids: &IdentifierSet, header: &str) -> Result<()> {
    let content = render_identifier_csv(ids, header)?;
    fs::write(path, content).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes the three comparison downloads into `dir`, creating it if needed.
pub fn write_comparison(dir: &Path, result: &ComparisonResult, header: &str) -> Result<OutputPaths> {
    fs::create_dir_all(dir).map_err(|source| OutputError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let shared = write_one(dir, SHARED_FILE_NAME, &result.shared, header)?;
    let only_a = write_one(dir, ONLY_A_FILE_NAME, &result.only_a, header)?;
    let only_b = write_one(dir, ONLY_B_FILE_NAME, &result.only_b, header)?;

    info!(output_dir = %dir.display(), "comparison outputs written");
    Ok(OutputPaths {
        shared: Some(shared),
        only_a: Some(only_a),
        only_b: Some(only_b),
    })
}

fn write_one(dir: &Path, name: &str, ids: &IdentifierSet, header: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    write_identifier_csv(&path, ids, header)?;
    tracing::debug!(path = %path.display(), rows = ids.len(), "identifier csv written");
    Ok(path)
}
