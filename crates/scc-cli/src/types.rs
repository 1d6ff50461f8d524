use std::path::PathBuf;

use scc_cli::session::Comparison;
use scc_ingest::{FileKind, SourceTable};
use scc_model::{ColumnProfile, OutputPaths};

/// Overview of one loaded file.
#[derive(Debug)]
pub struct SourceOverview {
    pub label: String,
    pub kind: FileKind,
    pub sheet: Option<String>,
    pub rows: usize,
    pub profiles: Vec<ColumnProfile>,
    /// Column used for the comparison, or the guessed one for `inspect`.
    pub id_column: Option<String>,
}

#[derive(Debug)]
pub struct CompareOutcome {
    pub overviews: [SourceOverview; 2],
    pub comparison: Comparison,
    pub output_dir: PathBuf,
    pub id_header: String,
    pub outputs: OutputPaths,
    pub summary_json: Option<PathBuf>,
    pub preview_rows: usize,
}

impl SourceOverview {
    pub fn from_table(table: &SourceTable) -> Self {
        Self {
            label: table.name.clone(),
            kind: table.kind,
            sheet: table.sheet.clone(),
            rows: table.height(),
            profiles: table.profiles(),
            id_column: None,
        }
    }
}
