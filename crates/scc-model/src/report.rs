use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::ComparisonSummary;

/// Source file and column that fed one side of a comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRef {
    pub label: String,
    pub column: String,
}

/// Paths of the identifier downloads written for a comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputPaths {
    pub shared: Option<PathBuf>,
    pub only_a: Option<PathBuf>,
    pub only_b: Option<PathBuf>,
}

/// Machine-readable record of one comparison run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub source_a: SourceRef,
    pub source_b: SourceRef,
    pub summary: ComparisonSummary,
    #[serde(default)]
    pub outputs: OutputPaths,
}
