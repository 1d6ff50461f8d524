//! Loaded tabular source.

use std::path::Path;

use scc_model::{ColumnProfile, RawColumn};

use crate::FileKind;
use crate::error::{IngestError, Result};

/// One named column of a loaded source.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceColumn {
    pub name: String,
    pub values: RawColumn,
}

/// A loaded CSV file or worksheet.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceTable {
    /// Display label (the file name).
    pub name: String,
    pub kind: FileKind,
    /// Worksheet the data came from, for workbooks.
    pub sheet: Option<String>,
    columns: Vec<SourceColumn>,
}

impl SourceTable {
    pub fn new(
        name: impl Into<String>,
        kind: FileKind,
        sheet: Option<String>,
        columns: Vec<SourceColumn>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            sheet,
            columns,
        }
    }

    /// File name of `path`, falling back to the full path.
    pub fn label_for(path: &Path) -> String {
        path.file_name()
            .and_then(|name| name.to_str())
            .map_or_else(|| path.display().to_string(), str::to_string)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn columns(&self) -> &[SourceColumn] {
        &self.columns
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn height(&self) -> usize {
        self.columns.first().map_or(0, |c| c.values.len())
    }

    fn position(&self, name: &str) -> Option<usize> {
        if let Some(idx) = self.columns.iter().position(|c| c.name == name) {
            return Some(idx);
        }
        let wanted = name.trim();
        self.columns
            .iter()
            .position(|c| c.name.trim().eq_ignore_ascii_case(wanted))
    }

    /// Resolves a user-supplied column name.
    ///
    /// Exact matches win; otherwise a trimmed, case-insensitive match is used.
    pub fn resolve_column(&self, name: &str) -> Option<&str> {
        self.position(name).map(|idx| self.columns[idx].name.as_str())
    }

    /// Returns the values of a column.
    pub fn column(&self, name: &str) -> Result<&RawColumn> {
        match self.position(name) {
            Some(idx) => Ok(&self.columns[idx].values),
            None => Err(IngestError::ColumnNotFound {
                column: name.to_string(),
                available: self.columns.iter().map(|c| c.name.clone()).collect(),
            }),
        }
    }

    /// Column overview: name, inferred kind and null counts.
    pub fn profiles(&self) -> Vec<ColumnProfile> {
        self.columns
            .iter()
            .map(|c| ColumnProfile::from_column(c.name.clone(), &c.values))
            .collect()
    }
}
