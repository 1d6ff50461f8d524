//! Source format detection.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{IngestError, Result};

/// Tabular file formats the loader understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    Csv,
    Workbook,
}

/// Extensions read through the workbook reader.
pub const WORKBOOK_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];

impl FileKind {
    /// Detects the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        if extension == "csv" {
            return Ok(Self::Csv);
        }
        if WORKBOOK_EXTENSIONS.contains(&extension.as_str()) {
            return Ok(Self::Workbook);
        }
        Err(IngestError::UnsupportedFormat {
            path: path.to_path_buf(),
            extension,
        })
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Csv => "CSV",
            Self::Workbook => "Excel",
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_csv() {
        assert_eq!(FileKind::from_path(Path::new("a.csv")).unwrap(), FileKind::Csv);
        assert_eq!(FileKind::from_path(Path::new("A.CSV")).unwrap(), FileKind::Csv);
    }

    #[test]
    fn detects_workbooks() {
        for name in ["a.xlsx", "b.xls", "c.XLSM", "d.ods"] {
            assert_eq!(
                FileKind::from_path(Path::new(name)).unwrap(),
                FileKind::Workbook,
                "{name}"
            );
        }
    }

    #[test]
    fn rejects_other_extensions() {
        let err = FileKind::from_path(Path::new("cards.txt")).unwrap_err();
        assert!(matches!(
            err,
            IngestError::UnsupportedFormat { ref extension, .. } if extension == "txt"
        ));
        assert!(FileKind::from_path(Path::new("noext")).is_err());
    }
}
