//! JSON summary of a comparison run.

use std::fs;
use std::path::Path;

use scc_model::ComparisonReport;

use crate::error::{OutputError, Result};

/// Writes `report` as pretty-printed JSON.
pub fn write_summary_json(path: &Path, report: &ComparisonReport) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| OutputError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })
}
