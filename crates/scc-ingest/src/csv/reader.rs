//! CSV file reading into typed columns.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use polars::prelude::{CsvReadOptions, DataFrame, NullValues, PlSmallStr, SerReader};

use crate::error::{IngestError, Result};
use crate::headers::finalize_headers;
use crate::nulls::NULL_TOKENS;
use crate::table::{SourceColumn, SourceTable};
use crate::values::column_values;
use crate::{FileKind, LoadOptions};

use super::header::{normalize_header, parse_csv_line};

/// Detect encoding and validate it's supported (UTF-8 only).
///
/// Checks for UTF-16 BOM markers which are not supported.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| IngestError::io(path, e))?;

    let mut buffer = [0u8; 4];
    let bytes_read = file
        .read(&mut buffer)
        .map_err(|e| IngestError::io(path, e))?;

    if bytes_read >= 2 {
        if buffer[0..2] == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer[0..2] == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }

    // UTF-8 BOM is acceptable (stripped from the header)
    Ok(())
}

/// Reads the header row of a CSV file.
pub fn read_csv_schema(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|e| IngestError::io(path, e))?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();
    let bytes = reader
        .read_line(&mut line)
        .map_err(|e| IngestError::io(path, e))?;

    if bytes == 0 {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    let line = line.trim_end_matches(['\r', '\n']);
    let columns = parse_csv_line(line.strip_prefix('\u{feff}').unwrap_or(line));
    if columns.iter().all(String::is_empty) {
        return Err(IngestError::NoHeaderDetected {
            path: path.to_path_buf(),
        });
    }
    Ok(columns)
}

/// Reads a CSV file into a Polars DataFrame.
///
/// With `infer_types` the schema is inferred from every row so numeric
/// columns keep their numeric type. Without it every column is read as text,
/// which preserves leading zeros. Empty cells and [`NULL_TOKENS`] are null
/// either way.
pub fn read_csv_frame(path: &Path, infer_types: bool) -> Result<DataFrame> {
    let infer_length = if infer_types { None } else { Some(0) };
    let null_values = NullValues::AllColumns(
        NULL_TOKENS
            .iter()
            .copied()
            .map(PlSmallStr::from)
            .collect(),
    );

    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(infer_length)
        .map_parse_options(|parse_options| {
            parse_options.with_null_values(Some(null_values.clone()))
        })
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}

/// Loads a CSV file as a [`SourceTable`].
pub fn read_csv_source(path: &Path, options: &LoadOptions) -> Result<SourceTable> {
    validate_encoding(path)?;
    let headers = read_csv_schema(path)?;

    let df = read_csv_frame(path, options.infer_types)?;
    if df.width() > 500 {
        tracing::warn!(
            path = %path.display(),
            columns = df.width(),
            "Dataset has more than 500 columns - may impact performance"
        );
    }

    let names = if headers.len() == df.width() {
        finalize_headers(headers)
    } else {
        tracing::warn!(
            path = %path.display(),
            header_fields = headers.len(),
            columns = df.width(),
            "header row does not match parsed columns, keeping reader names"
        );
        df.get_columns()
            .iter()
            .map(|column| normalize_header(column.name().as_str()))
            .collect()
    };

    let mut columns = Vec::with_capacity(df.width());
    for (name, column) in names.into_iter().zip(df.get_columns()) {
        columns.push(SourceColumn {
            name,
            values: column_values(column)?,
        });
    }

    tracing::debug!(
        path = %path.display(),
        rows = df.height(),
        columns = columns.len(),
        "csv loaded"
    );
    Ok(SourceTable::new(
        SourceTable::label_for(path),
        FileKind::Csv,
        None,
        columns,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    use scc_model::RawValue;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_read_csv_schema() {
        let file = create_temp_csv("Smartcard,Name\n1,a\n");
        let headers = read_csv_schema(file.path()).unwrap();
        assert_eq!(headers, vec!["Smartcard", "Name"]);
    }

    #[test]
    fn test_read_csv_schema_empty_file() {
        let file = create_temp_csv("");
        let result = read_csv_schema(file.path());
        assert!(matches!(result, Err(IngestError::EmptyCsv { .. })));
    }

    #[test]
    fn test_read_csv_schema_blank_header() {
        let file = create_temp_csv(" , \n1,2\n");
        let result = read_csv_schema(file.path());
        assert!(matches!(result, Err(IngestError::NoHeaderDetected { .. })));
    }

    #[test]
    fn test_read_csv_schema_with_bom() {
        let file = create_temp_csv("\u{feff}A,B,C\n1,2,3\n");
        let headers = read_csv_schema(file.path()).unwrap();
        assert_eq!(headers, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_utf16_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0xFF, 0xFE, b'A', 0]).unwrap();
        let result = validate_encoding(file.path());
        assert!(matches!(
            result,
            Err(IngestError::UnsupportedEncoding {
                encoding: "UTF-16 LE",
                ..
            })
        ));
    }

    #[test]
    fn test_read_csv_source_keeps_numeric_types() {
        let file = create_temp_csv("Smartcard,Name\n123,Ann\n456,Bob\n");
        let table = read_csv_source(file.path(), &LoadOptions::default()).unwrap();

        assert_eq!(table.column_names(), vec!["Smartcard", "Name"]);
        let cards = table.column("Smartcard").unwrap();
        assert_eq!(cards, &vec![RawValue::Int(123), RawValue::Int(456)]);
    }

    #[test]
    fn test_null_tokens_read_as_null() {
        let file = create_temp_csv("Smartcard\n123\nNA\n456\n");
        let table = read_csv_source(file.path(), &LoadOptions::default()).unwrap();

        let cards = table.column("Smartcard").unwrap();
        assert_eq!(
            cards,
            &vec![RawValue::Int(123), RawValue::Null, RawValue::Int(456)]
        );
    }

    #[test]
    fn test_null_tokens_in_text_column() {
        let file = create_temp_csv("Smartcard\nABC01\nN/A\n#N/A\nnull\nNA01\n");
        let options = LoadOptions::default().with_infer_types(false);
        let table = read_csv_source(file.path(), &options).unwrap();

        let cards = table.column("Smartcard").unwrap();
        assert_eq!(
            cards,
            &vec![
                RawValue::Text("ABC01".to_string()),
                RawValue::Null,
                RawValue::Null,
                RawValue::Null,
                RawValue::Text("NA01".to_string()),
            ]
        );
    }

    #[test]
    fn test_blank_and_duplicate_headers() {
        let file = create_temp_csv("Smartcard,,Name,Name\n123,x,Ann,A\n");
        let table = read_csv_source(file.path(), &LoadOptions::default()).unwrap();

        assert_eq!(
            table.column_names(),
            vec!["Smartcard", "Unnamed: 1", "Name", "Name.1"]
        );
        assert_eq!(
            table.column("Name.1").unwrap(),
            &vec![RawValue::Text("A".to_string())]
        );
    }

    #[test]
    fn test_read_csv_source_as_text() {
        let file = create_temp_csv("Smartcard\n0123\n0456\n");
        let options = LoadOptions {
            infer_types: false,
            ..LoadOptions::default()
        };
        let table = read_csv_source(file.path(), &options).unwrap();

        let cards = table.column("Smartcard").unwrap();
        assert_eq!(
            cards,
            &vec![
                RawValue::Text("0123".to_string()),
                RawValue::Text("0456".to_string())
            ]
        );
    }
}
