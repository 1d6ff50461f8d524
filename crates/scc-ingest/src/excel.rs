//! Workbook (xlsx/xls/xlsm/xlsb/ods) reading via calamine.

use std::path::Path;

use calamine::{Data, DataType, Reader, open_workbook_auto};
use scc_model::{RawColumn, RawValue};

use crate::error::{IngestError, Result};
use crate::headers::finalize_headers;
use crate::nulls::is_null_token;
use crate::table::{SourceColumn, SourceTable};
use crate::{FileKind, LoadOptions};

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Converts a workbook cell to a [`RawValue`].
///
/// Error cells (`#N/A`, `#DIV/0!`, ...) and null tokens such as `NA` are
/// treated as missing.
pub fn cell_to_raw(cell: &Data) -> RawValue {
    match cell {
        Data::Empty | Data::Error(_) => RawValue::Null,
        Data::String(s) if is_null_token(s) => RawValue::Null,
        Data::Int(v) => RawValue::Int(*v),
        Data::Float(v) => RawValue::Float(*v),
        Data::Bool(v) => RawValue::Bool(*v),
        Data::String(s) => RawValue::Text(s.clone()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => RawValue::Text(s.clone()),
        Data::DateTime(_) => match cell.as_datetime() {
            Some(dt) => RawValue::Text(dt.format(DATETIME_FORMAT).to_string()),
            None => RawValue::Text(cell.to_string()),
        },
    }
}

fn header_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Float(v) if v.fract() == 0.0 && v.is_finite() => format!("{v:.0}"),
        other => cell_to_raw(other).to_string().trim().to_string(),
    }
}

fn select_sheet(path: &Path, available: Vec<String>, requested: Option<&str>) -> Result<String> {
    match requested {
        Some(sheet) => {
            if available.iter().any(|name| name == sheet) {
                Ok(sheet.to_string())
            } else {
                Err(IngestError::SheetNotFound {
                    path: path.to_path_buf(),
                    sheet: sheet.to_string(),
                    available,
                })
            }
        }
        None => available
            .into_iter()
            .next()
            .ok_or_else(|| IngestError::NoWorksheet {
                path: path.to_path_buf(),
            }),
    }
}

/// Loads one worksheet as a [`SourceTable`].
///
/// Reads the first sheet unless `options.sheet` names another one. The first
/// row is the header.
pub fn read_excel_source(path: &Path, options: &LoadOptions) -> Result<SourceTable> {
    let mut workbook = open_workbook_auto(path).map_err(|e| IngestError::WorkbookOpen {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let sheet = select_sheet(path, workbook.sheet_names(), options.sheet.as_deref())?;
    let range = workbook
        .worksheet_range(&sheet)
        .map_err(|e| IngestError::SheetRead {
            path: path.to_path_buf(),
            sheet: sheet.clone(),
            message: e.to_string(),
        })?;

    let mut rows = range.rows();
    let headers: Vec<String> = match rows.next() {
        Some(row) => row.iter().map(header_text).collect(),
        None => Vec::new(),
    };
    let headers = finalize_headers(headers);

    let mut values: Vec<RawColumn> = vec![Vec::new(); headers.len()];
    let mut row_count = 0usize;
    for row in rows {
        row_count += 1;
        for (idx, column) in values.iter_mut().enumerate() {
            column.push(row.get(idx).map_or(RawValue::Null, cell_to_raw));
        }
    }

    tracing::debug!(
        path = %path.display(),
        sheet = %sheet,
        rows = row_count,
        columns = headers.len(),
        "worksheet loaded"
    );

    let columns = headers
        .into_iter()
        .zip(values)
        .map(|(name, values)| SourceColumn { name, values })
        .collect();
    Ok(SourceTable::new(
        SourceTable::label_for(path),
        FileKind::Workbook,
        Some(sheet),
        columns,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headers::unnamed_header;

    #[test]
    fn test_cell_conversion() {
        assert_eq!(cell_to_raw(&Data::Empty), RawValue::Null);
        assert_eq!(cell_to_raw(&Data::Int(7)), RawValue::Int(7));
        assert_eq!(cell_to_raw(&Data::Float(123.0)), RawValue::Float(123.0));
        assert_eq!(cell_to_raw(&Data::Bool(false)), RawValue::Bool(false));
        assert_eq!(
            cell_to_raw(&Data::String(" AB1 ".to_string())),
            RawValue::Text(" AB1 ".to_string())
        );
        assert_eq!(
            cell_to_raw(&Data::Error(calamine::CellErrorType::NA)),
            RawValue::Null
        );
    }

    #[test]
    fn test_header_text() {
        assert_eq!(header_text(&Data::String(" Smartcard ".into())), "Smartcard");
        assert_eq!(header_text(&Data::String("NA".into())), "NA");
        assert_eq!(header_text(&Data::Empty), "");
        assert_eq!(header_text(&Data::Float(2024.0)), "2024");
        assert_eq!(unnamed_header(3), "Unnamed: 3");
    }

    #[test]
    fn test_null_token_cells() {
        assert_eq!(cell_to_raw(&Data::String("NA".into())), RawValue::Null);
        assert_eq!(cell_to_raw(&Data::String("#N/A".into())), RawValue::Null);
        assert_eq!(
            cell_to_raw(&Data::String("NA01".into())),
            RawValue::Text("NA01".to_string())
        );
    }

    #[test]
    fn test_select_sheet() {
        let path = Path::new("cards.xlsx");
        let sheets = vec!["Sheet1".to_string(), "Cards".to_string()];
        assert_eq!(select_sheet(path, sheets.clone(), None).unwrap(), "Sheet1");
        assert_eq!(
            select_sheet(path, sheets.clone(), Some("Cards")).unwrap(),
            "Cards"
        );
        assert!(matches!(
            select_sheet(path, sheets, Some("Missing")),
            Err(IngestError::SheetNotFound { .. })
        ));
        assert!(matches!(
            select_sheet(path, Vec::new(), None),
            Err(IngestError::NoWorksheet { .. })
        ));
    }

    #[test]
    fn test_corrupt_workbook_is_load_error() {
        let mut file = tempfile::Builder::new().suffix(".xlsx").tempfile().unwrap();
        std::io::Write::write_all(&mut file, b"not a zip archive").unwrap();
        let result = read_excel_source(file.path(), &LoadOptions::default());
        assert!(matches!(result, Err(IngestError::WorkbookOpen { .. })));
    }
}
